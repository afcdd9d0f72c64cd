//! Signed integers as sign and magnitude.

use core::{cmp::Ordering, fmt, ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign}};

use zeroize::Zeroize;

use crate::arithmetic::forward_binop;
use crate::{Dense, Natural, NonZero, One, Radix, Result, Zero};

#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub enum Sign {
    Plus,
    Minus,
}

impl Neg for Sign {
    type Output = Sign;

    fn neg(self) -> Sign {
        match self {
            Sign::Plus => Sign::Minus,
            Sign::Minus => Sign::Plus,
        }
    }
}

impl Mul for Sign {
    type Output = Sign;

    fn mul(self, other: Sign) -> Sign {
        if self == other { Sign::Plus } else { Sign::Minus }
    }
}

/// Integer of arbitrary size.
///
/// Zero always has sign [`Sign::Plus`].
#[derive(Eq, Hash, PartialEq)]
pub struct Integer<R: Radix = Dense> {
    sign: Sign,
    magnitude: Natural<R>,
}

impl<R: Radix> Integer<R> {
    pub fn from_parts(sign: Sign, magnitude: Natural<R>) -> Self {
        let mut integer = Self { sign, magnitude };
        integer.normalize();
        integer
    }

    pub fn zero() -> Self {
        Zero::zero()
    }

    pub fn one() -> Self {
        One::one()
    }

    pub fn sign(&self) -> Sign {
        self.sign
    }

    pub fn magnitude(&self) -> &Natural<R> {
        &self.magnitude
    }

    pub fn into_parts(self) -> (Sign, Natural<R>) {
        (self.sign, self.magnitude)
    }

    pub fn is_negative(&self) -> bool {
        self.sign == Sign::Minus
    }

    pub fn abs(&self) -> Self {
        Self { sign: Sign::Plus, magnitude: self.magnitude.clone() }
    }

    /// `-1`, `0` or `1`.
    pub fn signum(&self) -> Self {
        if self.magnitude.is_zero() {
            Self::zero()
        } else {
            Self::from_parts(self.sign, Natural::one())
        }
    }

    pub fn pow(&self, exponent: u32) -> Self {
        let sign = if exponent % 2 == 1 { self.sign } else { Sign::Plus };
        Self::from_parts(sign, self.magnitude.pow(exponent))
    }

    /// Greatest common divisor of the magnitudes, never negative.
    pub fn gcd(&self, other: &Self) -> Self {
        Self::from(self.magnitude.gcd(&other.magnitude))
    }

    fn normalize(&mut self) {
        if self.magnitude.is_zero() {
            self.sign = Sign::Plus;
        }
    }

    pub(crate) fn negate(&mut self) {
        self.sign = -self.sign;
        self.normalize();
    }

    /// `result = self + sign * magnitude`.
    ///
    /// Equal signs add magnitudes. Otherwise the smaller magnitude is taken
    /// from the larger, and the result has the sign of the larger.
    fn add_signed_to(&self, sign: Sign, magnitude: &Natural<R>, result: &mut Self) {
        if self.sign == sign {
            self.magnitude.add_to(magnitude, &mut result.magnitude);
            result.sign = sign;
        } else {
            let other_is_larger = self.magnitude.abs_diff_to(magnitude, &mut result.magnitude);
            result.sign = if other_is_larger { sign } else { self.sign };
        }
        result.normalize();
    }

    /// `sum = self + summand`, reusing the buffer of `sum`.
    pub fn add_to(&self, summand: &Self, sum: &mut Self) {
        self.add_signed_to(summand.sign, &summand.magnitude, sum);
    }

    /// `difference = self - subtrahend`, reusing the buffer of `difference`.
    pub fn sub_to(&self, subtrahend: &Self, difference: &mut Self) {
        self.add_signed_to(-subtrahend.sign, &subtrahend.magnitude, difference);
    }

    /// `product = self * factor`, reusing the buffer of `product`.
    pub fn mul_to(&self, factor: &Self, product: &mut Self) {
        self.magnitude.mul_to(&factor.magnitude, &mut product.magnitude);
        product.sign = self.sign * factor.sign;
        product.normalize();
    }

    /// Truncating division: the quotient rounds towards zero,
    /// the remainder has the sign of `self`.
    ///
    /// Fails with [`Error::DivisionByZero`][crate::Error::DivisionByZero]
    /// before touching either output.
    pub fn div_rem_to(&self, divisor: &Self, quotient: &mut Self, remainder: &mut Self) -> Result<()> {
        let magnitude = NonZero::new(&divisor.magnitude)?;
        self.magnitude.div_rem_nonzero(magnitude, &mut quotient.magnitude, &mut remainder.magnitude);
        quotient.sign = self.sign * divisor.sign;
        quotient.normalize();
        remainder.sign = self.sign;
        remainder.normalize();
        Ok(())
    }

    pub fn div_rem(&self, divisor: &Self) -> Result<(Self, Self)> {
        let mut quotient = Self::zero();
        let mut remainder = Self::zero();
        self.div_rem_to(divisor, &mut quotient, &mut remainder)?;
        Ok((quotient, remainder))
    }

    pub fn checked_div(&self, divisor: &Self) -> Result<Self> {
        self.div_rem(divisor).map(|(quotient, _)| quotient)
    }

    pub fn checked_rem(&self, divisor: &Self) -> Result<Self> {
        self.div_rem(divisor).map(|(_, remainder)| remainder)
    }

    /// Divides by a divisor of the magnitude.
    pub(crate) fn divide_exact(&mut self, divisor: &NonZero<R>) {
        let mut quotient = Natural::zero();
        let mut remainder = Natural::zero();
        self.magnitude.div_rem_nonzero(divisor, &mut quotient, &mut remainder);
        debug_assert!(remainder.is_zero());
        self.magnitude = quotient;
        self.normalize();
    }
}

impl<R: Radix> Clone for Integer<R> {
    fn clone(&self) -> Self {
        Self { sign: self.sign, magnitude: self.magnitude.clone() }
    }

    fn clone_from(&mut self, source: &Self) {
        self.sign = source.sign;
        self.magnitude.clone_from(&source.magnitude);
    }
}

impl<R: Radix> Default for Integer<R> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<R: Radix> Zero for Integer<R> {
    fn zero() -> Self {
        Self { sign: Sign::Plus, magnitude: Natural::zero() }
    }

    fn is_zero(&self) -> bool {
        self.magnitude.is_zero()
    }

    fn set_zero(&mut self) {
        self.sign = Sign::Plus;
        self.magnitude.set_zero();
    }
}

impl<R: Radix> One for Integer<R> {
    fn one() -> Self {
        Self { sign: Sign::Plus, magnitude: Natural::one() }
    }

    fn is_one(&self) -> bool {
        self.sign == Sign::Plus && self.magnitude.is_one()
    }

    fn set_one(&mut self) {
        self.sign = Sign::Plus;
        self.magnitude.set_one();
    }
}

impl<R: Radix> Zeroize for Integer<R> {
    fn zeroize(&mut self) {
        self.magnitude.zeroize();
        self.sign = Sign::Plus;
    }
}

impl<R: Radix> From<i64> for Integer<R> {
    fn from(value: i64) -> Self {
        let sign = if value < 0 { Sign::Minus } else { Sign::Plus };
        Self::from_parts(sign, Natural::from(value.unsigned_abs()))
    }
}

impl<R: Radix> From<Natural<R>> for Integer<R> {
    fn from(magnitude: Natural<R>) -> Self {
        Self { sign: Sign::Plus, magnitude }
    }
}

impl<R: Radix> Ord for Integer<R> {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.sign, other.sign) {
            (Sign::Plus, Sign::Minus) => Ordering::Greater,
            (Sign::Minus, Sign::Plus) => Ordering::Less,
            (Sign::Plus, Sign::Plus) => self.magnitude.cmp(&other.magnitude),
            (Sign::Minus, Sign::Minus) => other.magnitude.cmp(&self.magnitude),
        }
    }
}

impl<R: Radix> PartialOrd for Integer<R> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<R: Radix> fmt::Debug for Integer<R> {
    /// Decimal value, as in `Integer(-1234)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Integer").field(&format_args!("{}", self)).finish()
    }
}

impl<R: Radix> Neg for Integer<R> {
    type Output = Integer<R>;

    fn neg(mut self) -> Self::Output {
        self.negate();
        self
    }
}

impl<R: Radix> Neg for &Integer<R> {
    type Output = Integer<R>;

    fn neg(self) -> Self::Output {
        -self.clone()
    }
}

impl<R: Radix> Add for &Integer<R> {
    type Output = Integer<R>;

    fn add(self, summand: Self) -> Self::Output {
        let mut sum = Integer::zero();
        self.add_to(summand, &mut sum);
        sum
    }
}

impl<R: Radix> AddAssign<&Self> for Integer<R> {
    fn add_assign(&mut self, summand: &Self) {
        *self = &*self + summand;
    }
}

forward_binop!(Integer, Add, add, AddAssign, add_assign);

impl<R: Radix> Sub for &Integer<R> {
    type Output = Integer<R>;

    fn sub(self, subtrahend: Self) -> Self::Output {
        let mut difference = Integer::zero();
        self.sub_to(subtrahend, &mut difference);
        difference
    }
}

impl<R: Radix> SubAssign<&Self> for Integer<R> {
    fn sub_assign(&mut self, subtrahend: &Self) {
        *self = &*self - subtrahend;
    }
}

forward_binop!(Integer, Sub, sub, SubAssign, sub_assign);

impl<R: Radix> Mul for &Integer<R> {
    type Output = Integer<R>;

    fn mul(self, factor: Self) -> Self::Output {
        let mut product = Integer::zero();
        self.mul_to(factor, &mut product);
        product
    }
}

impl<R: Radix> MulAssign<&Self> for Integer<R> {
    /// The product cannot be formed in place; it goes through a temporary.
    fn mul_assign(&mut self, factor: &Self) {
        *self = &*self * factor;
    }
}

forward_binop!(Integer, Mul, mul, MulAssign, mul_assign);

impl<R: Radix> Div for &Integer<R> {
    type Output = Integer<R>;

    fn div(self, divisor: Self) -> Self::Output {
        match self.checked_div(divisor) {
            Ok(quotient) => quotient,
            Err(_) => panic!("attempt to divide by zero"),
        }
    }
}

impl<R: Radix> DivAssign<&Self> for Integer<R> {
    fn div_assign(&mut self, divisor: &Self) {
        *self = &*self / divisor;
    }
}

forward_binop!(Integer, Div, div, DivAssign, div_assign);

impl<R: Radix> Rem for &Integer<R> {
    type Output = Integer<R>;

    fn rem(self, divisor: Self) -> Self::Output {
        match self.checked_rem(divisor) {
            Ok(remainder) => remainder,
            Err(_) => panic!("attempt to calculate the remainder with a divisor of zero"),
        }
    }
}

impl<R: Radix> RemAssign<&Self> for Integer<R> {
    fn rem_assign(&mut self, divisor: &Self) {
        *self = &*self % divisor;
    }
}

forward_binop!(Integer, Rem, rem, RemAssign, rem_assign);
