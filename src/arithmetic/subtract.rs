use core::ops::{Sub, SubAssign};

use crate::digit::{radix, SignedDoubleDigit};
use crate::{Digit, Natural, Radix};

/// Subtract with borrow: returns the digit of `a - b - borrow`, updating `borrow` to 0 or 1.
#[inline]
pub(crate) fn sbb<R: Radix>(a: Digit, b: Digit, borrow: &mut Digit) -> Digit {
    let difference = a as SignedDoubleDigit - b as SignedDoubleDigit - *borrow as SignedDoubleDigit;
    if difference < 0 {
        *borrow = 1;
        (difference + radix::<R>() as SignedDoubleDigit) as Digit
    } else {
        *borrow = 0;
        difference as Digit
    }
}

/// Two argument subtraction of raw slices:
/// a -= b
///
/// The borrow out of the top digit is returned; it is non-zero exactly
/// if `b > a`, in which case `a` holds `a - b + radix^a.len()`.
#[inline]
pub(crate) fn sub_assign_borrow<R: Radix>(a: &mut [Digit], b: &[Digit]) -> Digit {
    debug_assert!(a.len() >= b.len());

    let mut borrow = 0;
    let (a_lo, a_hi) = a.split_at_mut(b.len());

    for (a, b) in a_lo.iter_mut().zip(b) {
        *a = sbb::<R>(*a, *b, &mut borrow);
    }

    if borrow != 0 {
        for a in a_hi {
            *a = sbb::<R>(*a, 0, &mut borrow);
            if borrow == 0 {
                break;
            }
        }
    }

    borrow
}

impl<R: Radix> Natural<R> {
    /// `difference = self - subtrahend`, reusing the buffer of `difference`.
    ///
    /// Returns `false` and leaves `difference` untouched if the result
    /// would be negative.
    pub fn sub_to(&self, subtrahend: &Self, difference: &mut Self) -> bool {
        if *self < *subtrahend {
            return false;
        }
        let l = self.len();

        difference.digits.reserve(l);
        let slots = difference.digits.slots_mut();
        slots[..l].copy_from_slice(self);
        let borrow = sub_assign_borrow::<R>(&mut slots[..l], subtrahend);
        debug_assert_eq!(borrow, 0);
        difference.digits.set_len(l);
        difference.digits.trim();
        true
    }

    /// `self - subtrahend`, or `None` if that would be negative.
    pub fn checked_sub(&self, subtrahend: &Self) -> Option<Self> {
        let mut difference = Self::zero();
        if self.sub_to(subtrahend, &mut difference) {
            Some(difference)
        } else {
            None
        }
    }

    /// `|self - other|`, and whether `self < other`.
    pub(crate) fn abs_diff_to(&self, other: &Self, difference: &mut Self) -> bool {
        if self.sub_to(other, difference) {
            false
        } else {
            other.sub_to(self, difference);
            true
        }
    }
}

impl<R: Radix> SubAssign<&Self> for Natural<R> {
    fn sub_assign(&mut self, subtrahend: &Self) {
        assert!(*self >= *subtrahend, "attempt to subtract with overflow");
        let l = self.len();
        let borrow = sub_assign_borrow::<R>(&mut self.digits.slots_mut()[..l], subtrahend);
        debug_assert_eq!(borrow, 0);
        self.digits.trim();
    }
}

impl<R: Radix> Sub for &Natural<R> {
    type Output = Natural<R>;

    fn sub(self, subtrahend: Self) -> Self::Output {
        let mut difference = Natural::zero();
        assert!(self.sub_to(subtrahend, &mut difference), "attempt to subtract with overflow");
        difference
    }
}

super::forward_binop!(Natural, Sub, sub, SubAssign, sub_assign);
