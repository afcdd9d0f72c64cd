use core::ops::{Mul, MulAssign};

use crate::digit::{radix, DoubleDigit};
use crate::{Digit, Natural, Radix};

/// Multiply-accumulate: returns the digit of `acc + a * b + carry`, updating `carry`.
///
/// With all inputs below the radix, the intermediate stays below `radix²`.
#[inline]
pub(crate) fn mac<R: Radix>(acc: Digit, a: Digit, b: Digit, carry: &mut Digit) -> Digit {
    let radix = radix::<R>() as DoubleDigit;
    let sum = acc as DoubleDigit + (a as DoubleDigit) * (b as DoubleDigit) + *carry as DoubleDigit;
    *carry = (sum / radix) as Digit;
    (sum % radix) as Digit
}

/// a *= factor
///
/// `factor` must be below the radix. The carry out of the top digit is returned.
pub(crate) fn mul_assign_digit<R: Radix>(a: &mut [Digit], factor: Digit) -> Digit {
    debug_assert!(factor < radix::<R>());
    let mut carry = 0;
    for a in a.iter_mut() {
        *a = mac::<R>(0, *a, factor, &mut carry);
    }
    carry
}

/// product = a * b, schoolbook.
///
/// `product` must have exactly `a.len() + b.len()` slots; it is zeroed first.
pub(crate) fn mul_into<R: Radix>(a: &[Digit], b: &[Digit], product: &mut [Digit]) {
    debug_assert_eq!(product.len(), a.len() + b.len());
    product.fill(0);

    for (i, &a) in a.iter().enumerate() {
        if a == 0 {
            continue;
        }
        let mut carry = 0;
        for (p, &b) in product[i..].iter_mut().zip(b) {
            *p = mac::<R>(*p, a, b, &mut carry);
        }
        // this slot has not been written for this row yet
        product[i + b.len()] = carry;
    }
}

impl<R: Radix> Natural<R> {
    /// `product = self * factor`, reusing the buffer of `product`.
    ///
    /// `product` grows to `self.len() + factor.len()` digits if needed.
    pub fn mul_to(&self, factor: &Self, product: &mut Self) {
        let l = self.len() + factor.len();
        product.digits.reserve(l);
        mul_into::<R>(self, factor, &mut product.digits.slots_mut()[..l]);
        product.digits.set_len(l);
        product.digits.trim();
    }

    /// `product = self * digit`, in one pass if `digit` is below the radix.
    pub fn small_mul_to(&self, digit: Digit, product: &mut Self) {
        if digit >= radix::<R>() {
            self.mul_to(&Self::from(digit as u64), product);
            return;
        }
        let l = self.len();
        product.digits.reserve(l + 1);
        let slots = product.digits.slots_mut();
        slots[..l].copy_from_slice(self);
        let carry = mul_assign_digit::<R>(&mut slots[..l], digit);
        slots[l] = carry;
        product.digits.set_len(l + 1);
        product.digits.trim();
    }

    /// `self` raised to `exponent`, by repeated squaring; `0^0 = 1`.
    pub fn pow(&self, mut exponent: u32) -> Self {
        let mut result = Self::one();
        let mut base = self.clone();
        let mut scratch = Self::zero();

        while exponent > 0 {
            if exponent & 1 == 1 {
                result.mul_to(&base, &mut scratch);
                core::mem::swap(&mut result, &mut scratch);
            }
            exponent >>= 1;
            if exponent > 0 {
                base.mul_to(&base, &mut scratch);
                core::mem::swap(&mut base, &mut scratch);
            }
        }
        result
    }
}

impl<R: Radix> MulAssign<&Self> for Natural<R> {
    /// The product cannot be formed in place; it goes through a temporary.
    fn mul_assign(&mut self, factor: &Self) {
        let mut product = Natural::zero();
        self.mul_to(factor, &mut product);
        *self = product;
    }
}

impl<R: Radix> Mul for &Natural<R> {
    type Output = Natural<R>;

    fn mul(self, factor: Self) -> Self::Output {
        let mut product = Natural::zero();
        self.mul_to(factor, &mut product);
        product
    }
}

super::forward_binop!(Natural, Mul, mul, MulAssign, mul_assign);

impl<R: Radix> MulAssign<Digit> for Natural<R> {
    fn mul_assign(&mut self, digit: Digit) {
        if digit < radix::<R>() {
            let l = self.len();
            self.digits.pad(l + 1);
            let carry = mul_assign_digit::<R>(&mut self.digits.slots_mut()[..l], digit);
            self.digits.slots_mut()[l] = carry;
            self.digits.trim();
        } else {
            *self *= &Self::from(digit as u64);
        }
    }
}

impl<R: Radix> Mul<Digit> for &Natural<R> {
    type Output = Natural<R>;

    fn mul(self, digit: Digit) -> Self::Output {
        let mut product = Natural::zero();
        self.small_mul_to(digit, &mut product);
        product
    }
}

impl<R: Radix> Mul<Digit> for Natural<R> {
    type Output = Natural<R>;

    fn mul(mut self, digit: Digit) -> Self::Output {
        self *= digit;
        self
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::arithmetic::test::{assert_assign_op, assert_op, Billion};
    use crate::{Decimal, Dense, Zero};

    const M: Digit = 999_999_999;

    /// (a, b, a * b) in radix 10^9, little-endian.
    const PRODUCT_TRIPLES: &[(&[Digit], &[Digit], &[Digit])] = &[
        (&[0], &[0], &[0]),
        (&[0], &[1, 2, 3], &[0]),
        (&[1], &[1], &[1]),
        (&[2], &[3], &[6]),
        (&[M], &[M], &[1, M - 1]),
        (&[M, M], &[M], &[1, M, M - 1]),
        (&[M, M, M], &[M, M, M], &[1, 0, 0, M - 1, M, M]),
        (&[1, 2], &[3, 4], &[3, 10, 8]),
    ];

    #[test]
    fn products() {
        for &(a, b, c) in PRODUCT_TRIPLES {
            let a = Natural::<Billion>::from_digits(a).unwrap();
            let b = Natural::<Billion>::from_digits(b).unwrap();
            let c = Natural::<Billion>::from_digits(c).unwrap();

            assert_op!(a * b == c);
            assert_op!(b * a == c);
            assert_assign_op!(a *= b == c);
            assert_assign_op!(b *= a == c);
        }
    }

    #[test]
    fn product_is_repeated_sum() {
        let a = Natural::<Decimal>::from(987_654_321u64);
        let mut sum = Natural::zero();
        for b in 0..25u32 {
            assert_eq!(&a * &Natural::from(b), sum);
            sum += &a;
        }
    }

    #[test]
    fn small_products() {
        let a = Natural::<Decimal>::from(12_345u32);
        let mut product = Natural::zero();

        a.small_mul_to(7, &mut product);
        assert_eq!(product, Natural::from(86_415u32));
        a.small_mul_to(0, &mut product);
        assert!(product.is_zero());

        // digits beyond the radix take the general path
        a.small_mul_to(1000, &mut product);
        assert_eq!(product, Natural::from(12_345_000u32));

        assert_eq!(&a * 9, Natural::from(111_105u32));
        assert_eq!(a.clone() * 9, Natural::from(111_105u32));
        let mut b = a.clone();
        b *= 100;
        assert_eq!(b, Natural::from(1_234_500u32));
    }

    #[test]
    fn mul_to_is_exactly_sized() {
        let a = Natural::<Decimal>::from(99u32);
        let mut product = Natural::zero();
        a.mul_to(&a, &mut product);
        assert_eq!(product, Natural::from(9801u32));
        assert_eq!(product.capacity(), 4);
    }

    #[test]
    fn powers() {
        let two = Natural::<Dense>::from(2u32);
        assert_eq!(two.pow(0), Natural::one());
        assert_eq!(two.pow(10), Natural::from(1024u32));
        assert_eq!(two.pow(63), Natural::from(1u64 << 63));
        assert_eq!(Natural::<Dense>::zero().pow(0), Natural::one());
        assert!(Natural::<Dense>::zero().pow(5).is_zero());

        let ten = Natural::<Decimal>::from(10u32);
        let googol = ten.pow(100);
        assert_eq!(googol.len(), 101);
        assert_eq!(googol.leading_digit(), 1);
    }
}
