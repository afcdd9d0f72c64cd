use core::{mem, ops::{Div, DivAssign, Rem, RemAssign}};

use alloc::vec;
use ref_cast::RefCast;

use super::add::add_assign_carry;
use super::multiply::mul_assign_digit;
use crate::digit::{radix, DoubleDigit, SignedDoubleDigit};
use crate::{Digit, Error, Natural, NonZero, Radix, Result, Zero};

/// Divide a two digit numerator `hi * radix + lo` by a one digit divisor,
/// returns quotient and remainder.
///
/// Note: the caller must ensure `hi < divisor`, so that the quotient fits into a single digit.
///
/// REMARK: This is Knuth's operation c0), "memorizing the multiplication table in reverse."
#[inline]
pub(crate) fn div_digits<R: Radix>(hi: Digit, lo: Digit, divisor: Digit) -> (Digit, Digit) {
    debug_assert!(hi < divisor);
    let x = hi as DoubleDigit * radix::<R>() as DoubleDigit + lo as DoubleDigit;
    let divisor = divisor as DoubleDigit;

    ((x / divisor) as Digit, (x % divisor) as Digit)
}

/// Divides `number` in-place by the non-zero digit `divisor`, returning the remainder.
pub(crate) fn div_rem_assign_digit<R: Radix>(number: &mut [Digit], divisor: Digit) -> Digit {
    debug_assert!(divisor != 0);
    let mut remainder = 0;

    // run down the digits, dividing each by the divisor, while carrying along the remainder
    for digit in number.iter_mut().rev() {
        let (quotient, r) = div_digits::<R>(remainder, *digit, divisor);
        *digit = quotient;
        remainder = r;
    }

    remainder
}

/// Knuth's Algorithm D (TAOCP 4.3.1).
///
/// `divisor` has at least two digits and `dividend` at least as many.
/// Both are only read; the algorithm runs on scaled private copies.
fn long_div_rem<R: Radix>(
    dividend: &[Digit],
    divisor: &[Digit],
    quotient: &mut Natural<R>,
    remainder: &mut Natural<R>,
) {
    let b = radix::<R>() as DoubleDigit;
    let n = divisor.len();
    let m = dividend.len() - n;
    debug_assert!(n >= 2);

    // D1: normalize, so that the leading divisor digit is at least radix / 2
    let scale = radix::<R>() / (divisor[n - 1] + 1);
    debug!("long division of {} by {} digits, scale {}", dividend.len(), n, scale);

    let mut u = vec![0; dividend.len() + 1];
    u[..dividend.len()].copy_from_slice(dividend);
    let mut v = divisor.to_vec();
    if scale > 1 {
        let carry = mul_assign_digit::<R>(&mut u, scale);
        debug_assert_eq!(carry, 0);
        let carry = mul_assign_digit::<R>(&mut v, scale);
        debug_assert_eq!(carry, 0);
    }
    let v1 = v[n - 1] as DoubleDigit;
    let v2 = v[n - 2] as DoubleDigit;

    quotient.digits.reserve(m + 1);
    quotient.digits.set_len(m + 1);

    // D2 - D7
    for j in (0..=m).rev() {
        // D3: trial digit from the top two digits, corrected with the third
        let top = u[j + n] as DoubleDigit * b + u[j + n - 1] as DoubleDigit;
        let mut qhat = top / v1;
        let mut rhat = top % v1;
        if qhat >= b {
            qhat = b - 1;
            rhat = top - qhat * v1;
        }
        while rhat < b && qhat * v2 > rhat * b + u[j + n - 2] as DoubleDigit {
            qhat -= 1;
            rhat += v1;
        }

        // D4: multiply and subtract
        let mut carry: DoubleDigit = 0;
        let mut borrow: SignedDoubleDigit = 0;
        for (u, &v) in u[j..j + n].iter_mut().zip(v.iter()) {
            let product = qhat * v as DoubleDigit + carry;
            carry = product / b;
            let t = *u as SignedDoubleDigit - (product % b) as SignedDoubleDigit + borrow;
            if t < 0 {
                *u = (t + b as SignedDoubleDigit) as Digit;
                borrow = -1;
            } else {
                *u = t as Digit;
                borrow = 0;
            }
        }
        let t = u[j + n] as SignedDoubleDigit - carry as SignedDoubleDigit + borrow;

        // D5, D6: the trial digit was one too large, add back
        if t < 0 {
            qhat -= 1;
            let carry = add_assign_carry::<R>(&mut u[j..j + n], &v);
            debug_assert_eq!(t + carry as SignedDoubleDigit, 0);
            u[j + n] = 0;
        } else {
            u[j + n] = t as Digit;
        }

        quotient.digits.slots_mut()[j] = qhat as Digit;
    }
    quotient.digits.trim();

    // D8: unnormalize
    remainder.digits.reserve(n);
    let slots = remainder.digits.slots_mut();
    slots[..n].copy_from_slice(&u[..n]);
    let rest = div_rem_assign_digit::<R>(&mut slots[..n], scale);
    debug_assert_eq!(rest, 0);
    remainder.digits.set_len(n);
    remainder.digits.trim();
}

impl<R: Radix> Natural<R> {
    /// `quotient = self / divisor`, returning `self % divisor`.
    ///
    /// Digits beyond the radix take the general path.
    /// Fails with [`Error::DivisionByZero`] before touching `quotient`.
    pub fn small_div_to(&self, digit: Digit, quotient: &mut Self) -> Result<Digit> {
        if digit == 0 {
            return Err(Error::DivisionByZero);
        }
        if digit >= radix::<R>() {
            let divisor = Self::from(digit as u64);
            let mut remainder = Self::zero();
            self.div_rem_nonzero(NonZero::ref_cast(&divisor), quotient, &mut remainder);
            return Ok(remainder.small_value());
        }

        Ok(self.div_digit_to(digit, quotient))
    }

    /// `quotient = self / digit`, returning `self % digit`, for a non-zero digit below the radix.
    fn div_digit_to(&self, digit: Digit, quotient: &mut Self) -> Digit {
        let l = self.len();
        quotient.digits.reserve(l);
        let slots = quotient.digits.slots_mut();
        slots[..l].copy_from_slice(self);
        let remainder = div_rem_assign_digit::<R>(&mut slots[..l], digit);
        quotient.digits.set_len(l);
        quotient.digits.trim();
        remainder
    }

    /// `(quotient, remainder) = (self / divisor, self % divisor)`, reusing their buffers.
    ///
    /// Fails with [`Error::DivisionByZero`] before touching either output.
    pub fn div_rem_to(&self, divisor: &Self, quotient: &mut Self, remainder: &mut Self) -> Result<()> {
        let divisor = NonZero::new(divisor)?;
        self.div_rem_nonzero(divisor, quotient, remainder);
        Ok(())
    }

    /// Euclidean division by a divisor known to be non-zero.
    ///
    /// Afterwards `self == quotient * divisor + remainder` and `remainder < divisor`.
    pub fn div_rem_nonzero(&self, divisor: &NonZero<R>, quotient: &mut Self, remainder: &mut Self) {
        if *self < **divisor {
            quotient.set_zero();
            remainder.clone_from(self);
        } else if divisor.len() == 1 {
            let rest = self.div_digit_to(divisor[0], quotient);
            remainder.set_digit(rest);
        } else {
            long_div_rem(self, divisor, quotient, remainder);
        }
    }

    /// `(self / divisor, self % divisor)`.
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

    /// Greatest common divisor, by Euclid; `gcd(0, 0) = 0`.
    pub fn gcd(&self, other: &Self) -> Self {
        let mut a = self.clone();
        let mut b = other.clone();
        let mut quotient = Self::zero();
        let mut remainder = Self::zero();

        while !b.is_zero() {
            a.div_rem_nonzero(NonZero::ref_cast(&b), &mut quotient, &mut remainder);
            mem::swap(&mut a, &mut b);
            mem::swap(&mut b, &mut remainder);
        }
        a
    }
}

fn non_zero<R: Radix>(divisor: &Natural<R>) -> &NonZero<R> {
    match NonZero::new(divisor) {
        Ok(divisor) => divisor,
        Err(_) => panic!("attempt to divide by zero"),
    }
}

impl<R: Radix> Div for &Natural<R> {
    type Output = Natural<R>;

    fn div(self, divisor: Self) -> Self::Output {
        let mut quotient = Natural::zero();
        let mut remainder = Natural::zero();
        self.div_rem_nonzero(non_zero(divisor), &mut quotient, &mut remainder);
        quotient
    }
}

impl<R: Radix> DivAssign<&Self> for Natural<R> {
    fn div_assign(&mut self, divisor: &Self) {
        *self = &*self / divisor;
    }
}

super::forward_binop!(Natural, Div, div, DivAssign, div_assign);

impl<R: Radix> Rem for &Natural<R> {
    type Output = Natural<R>;

    fn rem(self, divisor: Self) -> Self::Output {
        let mut quotient = Natural::zero();
        let mut remainder = Natural::zero();
        self.div_rem_nonzero(non_zero(divisor), &mut quotient, &mut remainder);
        remainder
    }
}

impl<R: Radix> RemAssign<&Self> for Natural<R> {
    fn rem_assign(&mut self, divisor: &Self) {
        *self = &*self % divisor;
    }
}

super::forward_binop!(Natural, Rem, rem, RemAssign, rem_assign);

impl<R: Radix> Div<Digit> for &Natural<R> {
    type Output = Natural<R>;

    fn div(self, digit: Digit) -> Self::Output {
        let mut quotient = Natural::zero();
        match self.small_div_to(digit, &mut quotient) {
            Ok(_) => quotient,
            Err(_) => panic!("attempt to divide by zero"),
        }
    }
}

impl<R: Radix> Div<Digit> for Natural<R> {
    type Output = Natural<R>;

    fn div(self, digit: Digit) -> Self::Output {
        &self / digit
    }
}

impl<R: Radix> Rem<Digit> for &Natural<R> {
    type Output = Digit;

    fn rem(self, digit: Digit) -> Digit {
        let mut quotient = Natural::zero();
        match self.small_div_to(digit, &mut quotient) {
            Ok(remainder) => remainder,
            Err(_) => panic!("attempt to calculate the remainder with a divisor of zero"),
        }
    }
}

impl<R: Radix> Rem<Digit> for Natural<R> {
    type Output = Digit;

    fn rem(self, digit: Digit) -> Digit {
        &self % digit
    }
}
