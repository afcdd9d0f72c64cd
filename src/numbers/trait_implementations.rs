use core::{cmp::Ordering, fmt, hash::{Hash, Hasher}, marker::PhantomData, ops::Deref};

use super::{places, Digits, Natural, NonZero};
use crate::arithmetic::compare;
use crate::digit::radix;
use crate::{Digit, Radix};

impl Deref for Digits {
    type Target = [Digit];
    fn deref(&self) -> &Self::Target {
        &self.slots[..self.len]
    }
}

impl<R: Radix> Deref for Natural<R> {
    type Target = [Digit];
    fn deref(&self) -> &Self::Target {
        &self.digits
    }
}

impl<R: Radix> Deref for NonZero<R> {
    type Target = Natural<R>;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Clone for Digits {
    fn clone(&self) -> Self {
        Self { slots: self.slots.clone(), len: self.len }
    }

    /// Assignment: keeps the destination buffer if it is large enough.
    fn clone_from(&mut self, source: &Self) {
        if self.capacity() < source.len {
            self.allocate(source.len);
        }
        self.slots[..source.len].copy_from_slice(source);
        self.len = source.len;
    }
}

impl<R: Radix> Clone for Natural<R> {
    fn clone(&self) -> Self {
        Self { digits: self.digits.clone(), radix: PhantomData }
    }

    fn clone_from(&mut self, source: &Self) {
        self.digits.clone_from(&source.digits);
    }
}

impl<R: Radix> Default for Natural<R> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<R: Radix> From<u64> for Natural<R> {
    fn from(value: u64) -> Self {
        let length = places(value, radix::<R>() as u64);
        Self::spread(value, length, length)
    }
}

impl<R: Radix> From<u32> for Natural<R> {
    fn from(value: u32) -> Self {
        Self::from(value as u64)
    }
}

impl<R: Radix> PartialEq for Natural<R> {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl<R: Radix> Eq for Natural<R> {}

// Since we store little-endian, comparison needs to start at the last
// digit, instead of at the first as the derived / default implementation would.
impl<R: Radix> Ord for Natural<R> {
    fn cmp(&self, other: &Self) -> Ordering {
        compare(self, other)
    }
}

impl<R: Radix> PartialOrd for Natural<R> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<R: Radix> Hash for Natural<R> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (**self).hash(state);
    }
}

impl fmt::Debug for Digits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Digits")
            .field("digits", &&**self)
            .field("capacity", &self.capacity())
            .finish()
    }
}

impl<R: Radix> fmt::Debug for Natural<R> {
    /// Decimal value, as in `Natural(1234)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Natural").field(&format_args!("{}", self)).finish()
    }
}

impl<R: Radix> fmt::Debug for NonZero<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("NonZero").field(&format_args!("{}", self.0)).finish()
    }
}

#[cfg(test)]
mod test {
    use crate::{Decimal, Dense, Natural};

    #[test]
    fn debug() {
        let x = Natural::<Dense>::from(1_234_567_890_123u64);
        assert_eq!(format!("{:?}", x), "Natural(1234567890123)");
        assert_eq!(
            format!("{:?}", Natural::<Decimal>::from(120u32).as_digits()),
            "Digits { digits: [0, 2, 1], capacity: 3 }"
        );
    }

    #[test]
    fn clone_from_reuses_buffer() {
        let source = Natural::<Decimal>::from(42u32);
        let mut target = Natural::<Decimal>::from(1_000_000u32);
        target.clone_from(&source);
        assert_eq!(target, source);
        assert_eq!(target.capacity(), 7);

        let mut small = Natural::<Decimal>::zero();
        small.clone_from(&Natural::from(1_000_000u32));
        assert_eq!(small.capacity(), 7);
        assert_eq!(small.to_u64(), Some(1_000_000));
    }

    #[test]
    fn ordering() {
        let a = Natural::<Decimal>::from(199u32);
        let b = Natural::<Decimal>::from(200u32);
        let c = Natural::<Decimal>::from(1000u32);
        assert!(a < b);
        assert!(b < c);
        assert!(c > a);
        assert_eq!(a.cmp(&a.clone()), core::cmp::Ordering::Equal);
    }
}
