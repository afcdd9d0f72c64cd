use core::{fmt::Debug, hash::Hash, marker::PhantomData};

/// A machine word holding one digit. [`Natural`][crate::Natural] is composed of many digits.
///
/// Feature `u32` forces the digit to be 32-bit even on 64-bit architectures,
/// feature `u64` forces the digit to be 64-bit even on 32-bit architectures.
pub type Digit = digit::Digit;

/// Unsigned type with twice as many bits as [`Digit`].
pub(crate) type DoubleDigit = digit::DoubleDigit;
/// Signed type with twice as many bits as [`Digit`].
pub(crate) type SignedDoubleDigit = digit::SignedDoubleDigit;

#[cfg(not(any(feature = "u32", feature = "u64")))]
compile_error!("Either feature u32 or feature u64!");

#[cfg(all(feature = "u32", feature = "u64"))]
compile_error!("Either feature u32 or feature u64, not both!");

#[cfg(feature = "u32")]
mod digit {
    pub type Digit = u32;
    pub type DoubleDigit = u64;
    pub type SignedDoubleDigit = i64;

    /// 10^9
    pub const DENSE: Digit = 1_000_000_000;
}

#[cfg(feature = "u64")]
mod digit {
    pub type Digit = u64;
    pub type DoubleDigit = u128;
    pub type SignedDoubleDigit = i128;

    /// 10^19
    pub const DENSE: Digit = 10_000_000_000_000_000_000;
}

const _: () = assert!(DoubleDigit::BITS == 2 * Digit::BITS);
const _: () = assert!(SignedDoubleDigit::BITS == DoubleDigit::BITS);

/// The base in which a number stores its digits.
///
/// Every digit of a number with radix `R` lies in `[0, R::RADIX)`.
/// The radix must be at least 2, and its square must fit in the signed
/// accumulator; both are checked at compile time when a radix is first used.
pub trait Radix: Copy + Clone + Debug + Default + Eq + Hash + 'static {
    const RADIX: Digit;
}

/// Radix 10, the external text format.
#[derive(Copy, Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct Decimal;

impl Radix for Decimal {
    const RADIX: Digit = 10;
}

/// Radix 256, for byte strings.
#[derive(Copy, Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct Octet;

impl Radix for Octet {
    const RADIX: Digit = 256;
}

/// The largest power of ten whose square fits the accumulator.
///
/// This is the default radix: big enough to keep numbers short,
/// and conversion to decimal is cheap.
#[derive(Copy, Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct Dense;

impl Radix for Dense {
    const RADIX: Digit = digit::DENSE;
}

struct Checked<R>(PhantomData<R>);

impl<R: Radix> Checked<R> {
    const RADIX: Digit = {
        assert!(R::RADIX >= 2, "radix must be at least 2");
        assert!(
            (R::RADIX as DoubleDigit) * (R::RADIX as DoubleDigit) <= SignedDoubleDigit::MAX as DoubleDigit,
            "radix squared must fit the signed accumulator"
        );
        R::RADIX
    };
}

/// The radix of `R`, statically validated.
#[inline]
pub(crate) const fn radix<R: Radix>() -> Digit {
    Checked::<R>::RADIX
}
