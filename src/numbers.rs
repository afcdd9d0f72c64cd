use core::marker::PhantomData;

use alloc::{vec, vec::Vec};
use ref_cast::RefCast;
use zeroize::Zeroize;

use crate::digit::{radix, DoubleDigit};
use crate::{Dense, Digit, Error, Radix, Result};

mod trait_implementations;

/// Owned, growable buffer of digits, little-endian.
///
/// Tracks the number of significant digits (`len`) separately from the
/// number of allocated slots (`capacity`), with `capacity >= len` always.
/// Slots beyond `len` hold no meaning and need not be zero.
///
/// Growth is exact: the buffer is never larger than what was asked for,
/// and growing never loses digits below `min(len, new capacity)`.
///
/// `Deref` yields the significant digits.
pub struct Digits {
    slots: Vec<Digit>,
    len: usize,
}

impl Digits {
    /// Fresh zeroed buffer with `capacity` slots and no significant digits.
    pub fn with_capacity(capacity: usize) -> Self {
        Self { slots: vec![0; capacity], len: 0 }
    }

    /// Replaces the buffer by a fresh one with `capacity` slots, discarding all digits.
    pub fn allocate(&mut self, capacity: usize) {
        self.deallocate();
        self.slots = vec![0; capacity];
    }

    /// Grows to at least `min_capacity` slots, keeping all digits.
    ///
    /// A no-op if the capacity already suffices.
    pub fn reserve(&mut self, min_capacity: usize) {
        let capacity = self.capacity();
        if min_capacity > capacity {
            self.slots.reserve_exact(min_capacity - capacity);
            self.slots.resize(min_capacity, 0);
        }
    }

    /// Reallocates to exactly `new_capacity` slots, keeping the lowest
    /// `min(len, new_capacity)` digits.
    pub fn resize(&mut self, new_capacity: usize) {
        let kept = self.len.min(new_capacity);
        let mut slots = vec![0; new_capacity];
        slots[..kept].copy_from_slice(&self.slots[..kept]);
        self.slots = slots;
        self.len = kept;
    }

    /// Frees the buffer.
    pub fn deallocate(&mut self) {
        self.slots = Vec::new();
        self.len = 0;
    }

    /// Sets every slot to zero, leaving the single significant digit `0`.
    pub fn zero_fill(&mut self) {
        self.reserve(1);
        self.slots.fill(0);
        self.len = 1;
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// All allocated slots, significant or not.
    pub fn slots(&self) -> &[Digit] {
        &self.slots
    }

    pub(crate) fn slots_mut(&mut self) -> &mut [Digit] {
        &mut self.slots
    }

    pub(crate) fn set_len(&mut self, len: usize) {
        assert!(len <= self.capacity());
        self.len = len;
    }

    /// Extends the significant digits to `len`, with zeros.
    pub(crate) fn pad(&mut self, len: usize) {
        if len > self.len {
            self.reserve(len);
            self.slots[self.len..len].fill(0);
            self.len = len;
        }
    }

    /// Drops leading zero digits, keeping at least one digit.
    pub(crate) fn trim(&mut self) {
        while self.len > 1 && self.slots[self.len - 1] == 0 {
            self.len -= 1;
        }
    }
}

impl Zeroize for Digits {
    fn zeroize(&mut self) {
        self.slots.as_mut_slice().zeroize();
        self.len = 0;
    }
}

/// Number of digits of `value` in base `radix`; `0` has one digit.
///
/// Fails with [`Error::InvalidArgument`] for radices below 2.
pub fn digit_length(value: u64, radix: Digit) -> Result<usize> {
    if radix < 2 {
        return Err(Error::InvalidArgument);
    }
    Ok(places(value, radix as u64))
}

pub(crate) fn places(mut value: u64, radix: u64) -> usize {
    let mut length = 1;
    while value >= radix {
        value /= radix;
        length += 1;
    }
    length
}

/// Natural number of arbitrary size, as digits in radix `R`.
///
/// Internal representation is little-endian, without leading zero digits;
/// zero is the single digit `0`.
///
/// Every value owns its digit buffer. Cloning copies the buffer,
/// `clone_from` reuses the destination's buffer when it is large enough.
/// Operations of the form `op_to(&self, .., result)` write into a caller-owned
/// result, growing it to the exact size the algorithm needs.
pub struct Natural<R: Radix = Dense> {
    pub(crate) digits: Digits,
    radix: PhantomData<R>,
}

/// A natural number known not to be zero, usable as a divisor.
///
/// Obtained by reference from a [`Natural`] via [`NonZero::new`].
#[derive(RefCast)]
#[repr(transparent)]
pub struct NonZero<R: Radix = Dense>(Natural<R>);

impl<R: Radix> NonZero<R> {
    pub fn new(natural: &Natural<R>) -> Result<&Self> {
        if natural.is_zero() {
            Err(Error::DivisionByZero)
        } else {
            Ok(Self::ref_cast(natural))
        }
    }
}

// c'tors and such
impl<R: Radix> Natural<R> {
    pub(crate) fn from_store(mut digits: Digits) -> Self {
        if digits.is_empty() {
            digits.zero_fill();
        }
        digits.trim();
        Self { digits, radix: PhantomData }
    }

    /// The natural with given little-endian digits.
    ///
    /// Fails if a digit is not below the radix.
    pub fn from_digits(digits: &[Digit]) -> Result<Self> {
        if digits.iter().any(|&digit| digit >= radix::<R>()) {
            return Err(Error::InvalidArgument);
        }
        let mut store = Digits::with_capacity(digits.len().max(1));
        store.slots_mut()[..digits.len()].copy_from_slice(digits);
        store.set_len(digits.len());
        Ok(Self::from_store(store))
    }

    /// The single-digit natural `digit`.
    ///
    /// Fails if `digit` is not below the radix.
    pub fn from_digit(digit: Digit) -> Result<Self> {
        Self::from_digits(&[digit])
    }

    /// `value`, in a buffer of exactly `capacity` slots.
    ///
    /// Fails if `value` needs more than `capacity` digits.
    pub fn with_capacity(value: u64, capacity: usize) -> Result<Self> {
        let length = places(value, radix::<R>() as u64);
        if length > capacity {
            return Err(Error::InvalidArgument);
        }
        Ok(Self::spread(value, length, capacity))
    }

    /// `value` as its `length` digits, in `capacity >= length` slots.
    pub(crate) fn spread(value: u64, length: usize, capacity: usize) -> Self {
        let mut digits = Digits::with_capacity(capacity);
        let r = radix::<R>() as u64;
        let mut rest = value;
        for slot in &mut digits.slots_mut()[..length] {
            *slot = (rest % r) as Digit;
            rest /= r;
        }
        digits.set_len(length);
        Self::from_store(digits)
    }

    /// Replaces the value by a single digit below the radix, keeping the buffer.
    pub(crate) fn set_digit(&mut self, digit: Digit) {
        debug_assert!(digit < radix::<R>());
        self.digits.zero_fill();
        self.digits.slots_mut()[0] = digit;
    }
}

impl<R: Radix> Natural<R> {
    pub fn zero() -> Self {
        Zero::zero()
    }

    pub fn one() -> Self {
        One::one()
    }

    /// The radix this number is stored in.
    pub fn radix() -> Digit {
        radix::<R>()
    }

    /// The underlying digit store.
    pub fn as_digits(&self) -> &Digits {
        &self.digits
    }

    /// Allocated slots.
    pub fn capacity(&self) -> usize {
        self.digits.capacity()
    }

    /// Ensures room for `capacity` digits without changing the value.
    pub fn reserve(&mut self, capacity: usize) {
        self.digits.reserve(capacity);
    }

    /// Most significant digit; `0` only for zero.
    pub fn leading_digit(&self) -> Digit {
        self[self.len() - 1]
    }

    /// The value as `u64`, if it fits.
    pub fn to_u64(&self) -> Option<u64> {
        let r = radix::<R>() as u64;
        self.iter()
            .rev()
            .try_fold(0u64, |value, &digit| value.checked_mul(r)?.checked_add(digit as u64))
    }

    /// The value of a number known to be below `Digit::MAX`.
    pub(crate) fn small_value(&self) -> Digit {
        let r = radix::<R>() as DoubleDigit;
        let value = self.iter().rev().fold(0, |value, &digit| value * r + digit as DoubleDigit);
        debug_assert!(value <= Digit::MAX as DoubleDigit);
        value as Digit
    }
}

pub trait One: Sized + PartialEq {
    fn one() -> Self;

    fn is_one(&self) -> bool { *self == Self::one() }
    fn set_one(&mut self) { *self = Self::one(); }
}

pub trait Zero: Sized + PartialEq {
    fn zero() -> Self;

    fn is_zero(&self) -> bool { *self == Self::zero() }
    fn set_zero(&mut self) { *self = Self::zero(); }
}

impl<R: Radix> Zero for Natural<R> {
    fn zero() -> Self {
        Self::from_store(Digits::with_capacity(1))
    }

    fn is_zero(&self) -> bool {
        self.len() == 1 && self[0] == 0
    }

    fn set_zero(&mut self) {
        self.digits.zero_fill();
    }
}

impl<R: Radix> One for Natural<R> {
    fn one() -> Self {
        let mut one = Self::zero();
        one.set_digit(1);
        one
    }

    fn is_one(&self) -> bool {
        self.len() == 1 && self[0] == 1
    }

    fn set_one(&mut self) {
        self.set_digit(1);
    }
}

impl<R: Radix> Zeroize for Natural<R> {
    fn zeroize(&mut self) {
        self.digits.zeroize();
        self.digits.zero_fill();
    }
}
