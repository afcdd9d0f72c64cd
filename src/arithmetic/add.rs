use core::ops::{Add, AddAssign};

use crate::digit::{radix, DoubleDigit};
use crate::{Digit, Natural, Radix};

/// Add with carry: returns the digit of `a + b + carry`, updating `carry` to 0 or 1.
#[inline]
pub(crate) fn adc<R: Radix>(a: Digit, b: Digit, carry: &mut Digit) -> Digit {
    let radix = radix::<R>() as DoubleDigit;
    let sum = a as DoubleDigit + b as DoubleDigit + *carry as DoubleDigit;
    if sum >= radix {
        *carry = 1;
        (sum - radix) as Digit
    } else {
        *carry = 0;
        sum as Digit
    }
}

/// Two argument addition of raw slices:
/// a += b
///
/// The caller _must_ ensure that a is big enough to store the result - typically this means
/// resizing a to max(a.len(), b.len()) + 1, to fit a possible carry.
/// The carry out of the top digit is returned.
#[inline]
pub(crate) fn add_assign_carry<R: Radix>(a: &mut [Digit], b: &[Digit]) -> Digit {
    debug_assert!(a.len() >= b.len());

    let mut carry = 0;
    let (a_lo, a_hi) = a.split_at_mut(b.len());

    for (a, b) in a_lo.iter_mut().zip(b) {
        *a = adc::<R>(*a, *b, &mut carry);
    }

    if carry != 0 {
        for a in a_hi {
            *a = adc::<R>(*a, 0, &mut carry);
            if carry == 0 {
                break;
            }
        }
    }

    carry
}

impl<R: Radix> Natural<R> {
    /// `sum = self + summand`, reusing the buffer of `sum`.
    ///
    /// `sum` grows to `max(len) + 1` digits if needed, for the carry.
    pub fn add_to(&self, summand: &Self, sum: &mut Self) {
        let (long, short) = if self.len() < summand.len() {
            (summand, self)
        } else {
            (self, summand)
        };
        let l = long.len();

        sum.digits.reserve(l + 1);
        let slots = sum.digits.slots_mut();
        slots[..l].copy_from_slice(long);
        let carry = add_assign_carry::<R>(&mut slots[..l], short);
        slots[l] = carry;
        sum.digits.set_len(l + 1);
        sum.digits.trim();
    }
}

impl<R: Radix> AddAssign<&Self> for Natural<R> {
    fn add_assign(&mut self, summand: &Self) {
        let l = self.len().max(summand.len());
        self.digits.pad(l + 1);
        let carry = add_assign_carry::<R>(&mut self.digits.slots_mut()[..l + 1], summand);
        debug_assert_eq!(carry, 0);
        self.digits.trim();
    }
}

impl<R: Radix> Add for &Natural<R> {
    type Output = Natural<R>;

    fn add(self, summand: Self) -> Self::Output {
        let mut sum = Natural::zero();
        self.add_to(summand, &mut sum);
        sum
    }
}

super::forward_binop!(Natural, Add, add, AddAssign, add_assign);

#[cfg(test)]
mod test {
    use quickcheck::quickcheck;

    use super::*;
    use crate::arithmetic::test::{assert_assign_op, assert_op, Billion};
    use crate::{Decimal, Dense, Zero};

    const M: Digit = 999_999_999;

    /// (a, b, a + b) in radix 10^9, little-endian.
    const SUM_TRIPLES: &[(&[Digit], &[Digit], &[Digit])] = &[
        (&[0], &[0], &[0]),
        (&[0], &[1], &[1]),
        (&[1], &[1], &[2]),
        (&[M], &[1], &[0, 1]),
        (&[M, M], &[1], &[0, 0, 1]),
        (&[1, 2, 3], &[4, 5], &[5, 7, 3]),
        (&[M, 5], &[M, M, 7], &[M - 1, 5, 8]),
        (&[M, M, M], &[M, M, M], &[M - 1, M, M, 1]),
    ];

    #[test]
    fn sums() {
        for &(a, b, c) in SUM_TRIPLES {
            let a = Natural::<Billion>::from_digits(a).unwrap();
            let b = Natural::<Billion>::from_digits(b).unwrap();
            let c = Natural::<Billion>::from_digits(c).unwrap();

            assert_op!(a + b == c);
            assert_op!(b + a == c);
            assert_assign_op!(a += b == c);
            assert_assign_op!(b += a == c);
        }
    }

    #[test]
    fn add_to_grows_result() {
        let a = Natural::<Decimal>::from(999u32);
        let b = Natural::<Decimal>::from(1u32);
        let mut sum = Natural::zero();
        a.add_to(&b, &mut sum);
        assert_eq!(sum, Natural::from(1000u32));
        assert_eq!(sum.capacity(), 4);

        // shrinking values keep the buffer
        Natural::<Decimal>::zero().add_to(&b, &mut sum);
        assert_eq!(sum, b);
        assert_eq!(sum.capacity(), 4);
    }

    #[test]
    fn add_zero() {
        let a = Natural::<Dense>::from(123_456_789_123_456_789u64);
        assert_eq!(&a + &Natural::zero(), a);
        assert!((&Natural::<Dense>::zero() + &Natural::zero()).is_zero());
    }

    quickcheck! {
        fn addition_commutes(a: Natural, b: Natural) -> bool {
            &a + &b == &b + &a
        }

        fn addition_then_subtraction(a: Natural<Decimal>, b: Natural<Decimal>) -> bool {
            &(&a + &b) - &b == a
        }
    }
}
