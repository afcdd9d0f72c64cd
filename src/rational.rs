//! Fractions of integers, always in lowest terms.

use core::{cmp::Ordering, fmt, ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign}};

use ref_cast::RefCast;
use zeroize::Zeroize;

use crate::arithmetic::forward_binop;
use crate::{Dense, Error, Integer, NonZero, One, Radix, Result, Zero};

/// Rational number `numerator / denominator`.
///
/// The denominator is positive, zero is `0/1`, and numerator and
/// denominator have no common divisor besides one.
#[derive(Eq, Hash, PartialEq)]
pub struct Rational<R: Radix = Dense> {
    numerator: Integer<R>,
    denominator: Integer<R>,
}

impl<R: Radix> Rational<R> {
    /// `numerator / denominator`, reduced.
    pub fn new(numerator: Integer<R>, denominator: Integer<R>) -> Result<Self> {
        let mut rational = Self { numerator, denominator };
        rational.normalize(true)?;
        Ok(rational)
    }

    pub fn from_integer(integer: Integer<R>) -> Self {
        Self { numerator: integer, denominator: Integer::one() }
    }

    pub fn zero() -> Self {
        Zero::zero()
    }

    pub fn one() -> Self {
        One::one()
    }

    pub fn numerator(&self) -> &Integer<R> {
        &self.numerator
    }

    /// Always positive.
    pub fn denominator(&self) -> &Integer<R> {
        &self.denominator
    }

    pub fn into_parts(self) -> (Integer<R>, Integer<R>) {
        (self.numerator, self.denominator)
    }

    pub fn is_integer(&self) -> bool {
        self.denominator.is_one()
    }

    pub fn is_negative(&self) -> bool {
        self.numerator.is_negative()
    }

    pub fn abs(&self) -> Self {
        Self { numerator: self.numerator.abs(), denominator: self.denominator.clone() }
    }

    /// `1 / self`; fails for zero.
    pub fn recip(&self) -> Result<Self> {
        let mut reciprocal = Self {
            numerator: self.denominator.clone(),
            denominator: self.numerator.clone(),
        };
        // swapping keeps lowest terms
        reciprocal.normalize(false)?;
        Ok(reciprocal)
    }

    pub fn checked_div(&self, divisor: &Self) -> Result<Self> {
        if divisor.numerator.is_zero() {
            warn!("rational division by zero");
            return Err(Error::DivisionByZero);
        }
        let mut quotient = Self {
            numerator: &self.numerator * &divisor.denominator,
            denominator: &self.denominator * &divisor.numerator,
        };
        quotient.canonicalize(true);
        Ok(quotient)
    }

    pub fn pow(&self, exponent: u32) -> Self {
        // powers of coprime numbers stay coprime
        Self {
            numerator: self.numerator.pow(exponent),
            denominator: self.denominator.pow(exponent),
        }
    }

    /// Rejects a zero denominator, then brings the fraction into canonical form.
    fn normalize(&mut self, reduce: bool) -> Result<()> {
        if self.denominator.is_zero() {
            warn!("zero denominator");
            return Err(Error::DivisionByZero);
        }
        self.canonicalize(reduce);
        Ok(())
    }

    /// The denominator must not be zero.
    fn canonicalize(&mut self, reduce: bool) {
        debug_assert!(!self.denominator.is_zero());
        if self.numerator.is_zero() {
            self.denominator.set_one();
            return;
        }
        if self.denominator.is_negative() {
            self.denominator.negate();
            self.numerator.negate();
        }
        if reduce {
            let gcd = self.numerator.magnitude().gcd(self.denominator.magnitude());
            if !gcd.is_one() {
                let gcd = NonZero::ref_cast(&gcd);
                self.numerator.divide_exact(gcd);
                self.denominator.divide_exact(gcd);
            }
        }
    }
}

impl<R: Radix> Clone for Rational<R> {
    fn clone(&self) -> Self {
        Self { numerator: self.numerator.clone(), denominator: self.denominator.clone() }
    }

    fn clone_from(&mut self, source: &Self) {
        self.numerator.clone_from(&source.numerator);
        self.denominator.clone_from(&source.denominator);
    }
}

impl<R: Radix> Default for Rational<R> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<R: Radix> Zero for Rational<R> {
    fn zero() -> Self {
        Self::from_integer(Integer::zero())
    }

    fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }
}

impl<R: Radix> One for Rational<R> {
    fn one() -> Self {
        Self::from_integer(Integer::one())
    }

    fn is_one(&self) -> bool {
        self.numerator.is_one() && self.denominator.is_one()
    }
}

impl<R: Radix> Zeroize for Rational<R> {
    fn zeroize(&mut self) {
        self.numerator.zeroize();
        self.denominator.zeroize();
        self.denominator.set_one();
    }
}

impl<R: Radix> From<Integer<R>> for Rational<R> {
    fn from(integer: Integer<R>) -> Self {
        Self::from_integer(integer)
    }
}

impl<R: Radix> From<i64> for Rational<R> {
    fn from(value: i64) -> Self {
        Self::from_integer(Integer::from(value))
    }
}

impl<R: Radix> Ord for Rational<R> {
    /// Cross-multiplies; denominators are positive.
    fn cmp(&self, other: &Self) -> Ordering {
        (&self.numerator * &other.denominator).cmp(&(&other.numerator * &self.denominator))
    }
}

impl<R: Radix> PartialOrd for Rational<R> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<R: Radix> fmt::Debug for Rational<R> {
    /// As in `Rational(-3/2)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Rational").field(&format_args!("{}/{}", self.numerator, self.denominator)).finish()
    }
}

impl<R: Radix> Neg for Rational<R> {
    type Output = Rational<R>;

    fn neg(mut self) -> Self::Output {
        self.numerator.negate();
        self
    }
}

impl<R: Radix> Neg for &Rational<R> {
    type Output = Rational<R>;

    fn neg(self) -> Self::Output {
        -self.clone()
    }
}

impl<R: Radix> Add for &Rational<R> {
    type Output = Rational<R>;

    fn add(self, summand: Self) -> Self::Output {
        let mut sum = Rational {
            numerator: &(&self.numerator * &summand.denominator) + &(&summand.numerator * &self.denominator),
            denominator: &self.denominator * &summand.denominator,
        };
        sum.canonicalize(true);
        sum
    }
}

impl<R: Radix> AddAssign<&Self> for Rational<R> {
    fn add_assign(&mut self, summand: &Self) {
        *self = &*self + summand;
    }
}

forward_binop!(Rational, Add, add, AddAssign, add_assign);

impl<R: Radix> Sub for &Rational<R> {
    type Output = Rational<R>;

    fn sub(self, subtrahend: Self) -> Self::Output {
        let mut difference = Rational {
            numerator: &(&self.numerator * &subtrahend.denominator) - &(&subtrahend.numerator * &self.denominator),
            denominator: &self.denominator * &subtrahend.denominator,
        };
        difference.canonicalize(true);
        difference
    }
}

impl<R: Radix> SubAssign<&Self> for Rational<R> {
    fn sub_assign(&mut self, subtrahend: &Self) {
        *self = &*self - subtrahend;
    }
}

forward_binop!(Rational, Sub, sub, SubAssign, sub_assign);

impl<R: Radix> Mul for &Rational<R> {
    type Output = Rational<R>;

    fn mul(self, factor: Self) -> Self::Output {
        let mut product = Rational {
            numerator: &self.numerator * &factor.numerator,
            denominator: &self.denominator * &factor.denominator,
        };
        product.canonicalize(true);
        product
    }
}

impl<R: Radix> MulAssign<&Self> for Rational<R> {
    fn mul_assign(&mut self, factor: &Self) {
        *self = &*self * factor;
    }
}

forward_binop!(Rational, Mul, mul, MulAssign, mul_assign);

impl<R: Radix> Div for &Rational<R> {
    type Output = Rational<R>;

    fn div(self, divisor: Self) -> Self::Output {
        match self.checked_div(divisor) {
            Ok(quotient) => quotient,
            Err(_) => panic!("attempt to divide by zero"),
        }
    }
}

impl<R: Radix> DivAssign<&Self> for Rational<R> {
    fn div_assign(&mut self, divisor: &Self) {
        *self = &*self / divisor;
    }
}

forward_binop!(Rational, Div, div, DivAssign, div_assign);

#[cfg(test)]
mod test {
    use quickcheck::{quickcheck, Arbitrary, Gen};

    use super::*;
    use crate::arithmetic::test::{assert_assign_op, assert_op};
    use crate::{Decimal, Natural};

    impl<R: Radix> Arbitrary for Rational<R> {
        fn arbitrary(g: &mut Gen) -> Self {
            let numerator = Integer::arbitrary(g);
            let denominator = Integer::from(Natural::arbitrary(g)) + Integer::one();
            Rational::new(numerator, denominator).unwrap()
        }
    }

    fn q(numerator: i64, denominator: i64) -> Rational<Decimal> {
        Rational::new(Integer::from(numerator), Integer::from(denominator)).unwrap()
    }

    fn is_canonical<R: Radix>(x: &Rational<R>) -> bool {
        !x.denominator().is_negative()
            && x.numerator().gcd(x.denominator()).is_one()
            && (!x.numerator().is_zero() || x.denominator().is_one())
    }

    #[test]
    fn construction_reduces() {
        let x = q(6, -4);
        assert_eq!(x.numerator(), &Integer::from(-3));
        assert_eq!(x.denominator(), &Integer::from(2));
        assert_eq!(q(-6, -4), q(3, 2));
        assert_eq!(q(0, -17), Rational::zero());
        assert_eq!(q(0, -17).denominator(), &Integer::one());
        assert!(q(12, 4).is_integer());
        assert_eq!(
            Rational::<Decimal>::new(Integer::one(), Integer::zero()),
            Err(Error::DivisionByZero)
        );
    }

    #[test]
    fn arithmetic() {
        let (a, b) = (q(1, 6), q(1, 3));
        assert_op!(a + b == q(1, 2));
        assert_op!(a - b == q(-1, 6));
        assert_op!(a * b == q(1, 18));
        assert_op!(a / b == q(1, 2));
        assert_assign_op!(a += b == q(1, 2));
        assert_assign_op!(a -= b == q(-1, 6));
        assert_assign_op!(a *= b == q(1, 18));
        assert_assign_op!(a /= b == q(1, 2));

        let (c, d) = (q(3, 4), q(-3, 4));
        assert_op!(c + d == Rational::zero());
        assert_op!(c * d == q(-9, 16));
        assert_op!(c / d == q(-1, 1));
    }

    #[test]
    fn division_by_zero() {
        assert_eq!(q(1, 2).checked_div(&Rational::zero()), Err(Error::DivisionByZero));
        assert_eq!(Rational::<Decimal>::zero().recip(), Err(Error::DivisionByZero));
    }

    #[test]
    #[should_panic(expected = "attempt to divide by zero")]
    fn div_operator_panics_on_zero() {
        let _ = q(1, 2) / Rational::zero();
    }

    #[test]
    fn reciprocal_and_sign() {
        assert_eq!(q(-2, 3).recip(), Ok(q(-3, 2)));
        assert_eq!(q(5, 1).recip(), Ok(q(1, 5)));
        assert_eq!(q(-2, 3).abs(), q(2, 3));
        assert_eq!(-q(-2, 3), q(2, 3));
        assert_eq!(-&q(2, 3), q(-2, 3));
        assert!(q(-1, 9).is_negative());
        assert!(!q(0, -9).is_negative());
        assert_eq!(q(-2, 3).pow(3), q(-8, 27));
        assert_eq!(q(-2, 3).pow(0), Rational::one());
    }

    #[test]
    fn parts() {
        assert_eq!(q(6, -4).into_parts(), (Integer::from(-3), Integer::from(2)));
        assert_eq!(q(0, 5).into_parts(), (Integer::zero(), Integer::one()));
    }

    #[test]
    fn ordering() {
        let mut values = [q(1, 2), q(-1, 3), q(2, 3), q(0, 1), q(-1, 2)];
        values.sort();
        assert_eq!(values, [q(-1, 2), q(-1, 3), q(0, 1), q(1, 2), q(2, 3)]);
        assert!(q(1, 3) < q(334, 1000));
    }

    #[test]
    fn harmonic_numbers_stay_reduced() {
        let mut sum = Rational::<Decimal>::zero();
        for n in 1..=30 {
            sum += q(1, n);
            assert!(is_canonical(&sum));
        }
        // H(30) = 9304682830147 / 2329089562800
        assert_eq!(sum, q(9_304_682_830_147, 2_329_089_562_800));
    }

    #[test]
    fn zeroize() {
        let mut x = q(-7, 3);
        x.zeroize();
        assert!(x.is_zero());
        assert!(x.denominator().is_one());
    }

    quickcheck! {
        fn results_are_canonical(a: Rational, b: Rational) -> bool {
            is_canonical(&(&a + &b))
                && is_canonical(&(&a - &b))
                && is_canonical(&(&a * &b))
                && a.checked_div(&b).map_or(b.is_zero(), |quotient| is_canonical(&quotient))
        }

        fn subtraction_inverts_addition(a: Rational<Decimal>, b: Rational<Decimal>) -> bool {
            &(&a + &b) - &b == a
        }

        fn division_inverts_multiplication(a: Rational, b: Rational) -> bool {
            b.is_zero() || &(&a * &b) / &b == a
        }
    }
}
