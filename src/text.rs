//! Decimal text: `FromStr` and `Display`.
//!
//! Integers are an optional `-` followed by decimal digits, without leading
//! zeros except for `0` itself. Rationals are an integer, optionally followed
//! by `/` and a second integer.

use core::{fmt, str::FromStr};

use alloc::string::String;

use crate::{Decimal, Digits, Error, Integer, Natural, One, Radix, Rational, Result, Sign};

fn parse_decimal(text: &str) -> Result<Natural<Decimal>> {
    let bytes = text.as_bytes();
    if bytes.is_empty() {
        warn!("empty number");
        return Err(Error::Empty);
    }
    if !bytes.iter().all(u8::is_ascii_digit) {
        warn!("invalid character in {:?}", text);
        return Err(Error::InvalidCharacter);
    }
    if bytes.len() > 1 && bytes[0] == b'0' {
        warn!("leading zero in {:?}", text);
        return Err(Error::LeadingZero);
    }

    let mut digits = Digits::with_capacity(bytes.len());
    for (slot, &byte) in digits.slots_mut().iter_mut().zip(bytes.iter().rev()) {
        *slot = (byte - b'0').into();
    }
    digits.set_len(bytes.len());
    Ok(Natural::from_store(digits))
}

impl<R: Radix> FromStr for Natural<R> {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self> {
        Ok(parse_decimal(text)?.convert())
    }
}

impl<R: Radix> FromStr for Integer<R> {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self> {
        let (sign, digits) = match text.strip_prefix('-') {
            Some(digits) => (Sign::Minus, digits),
            None => (Sign::Plus, text),
        };
        Ok(Integer::from_parts(sign, digits.parse()?))
    }
}

impl<R: Radix> FromStr for Rational<R> {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self> {
        match text.split_once('/') {
            Some((numerator, denominator)) => Rational::new(numerator.parse()?, denominator.parse()?),
            None => Ok(Rational::from_integer(text.parse()?)),
        }
    }
}

fn decimal_string<R: Radix>(natural: &Natural<R>) -> String {
    natural
        .convert::<Decimal>()
        .iter()
        .rev()
        .map(|&digit| char::from(b'0' + digit as u8))
        .collect()
}

impl<R: Radix> fmt::Display for Natural<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(true, "", &decimal_string(self))
    }
}

impl<R: Radix> fmt::Display for Integer<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.is_negative(), "", &decimal_string(self.magnitude()))
    }
}

impl<R: Radix> fmt::Display for Rational<R> {
    /// `numerator`, or `numerator/denominator` unless the denominator is one.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.denominator().is_one() {
            fmt::Display::fmt(self.numerator(), f)
        } else {
            let text = alloc::format!("{}/{}", self.numerator(), self.denominator());
            f.pad(&text)
        }
    }
}
