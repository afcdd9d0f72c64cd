//! Arbitrary-precision natural numbers, signed integers and rationals.
//!
//! Values are little-endian sequences of digits in a compile-time [`Radix`]
//! (by default [`Dense`], the largest power of ten whose square still fits
//! the accumulator), so decimal printing and parsing are cheap.
//!
//! ```
//! use long_arithmetic::{Integer, Rational};
//!
//! let a: Integer = "-123456789012345678901234567890".parse().unwrap();
//! let b = Integer::from(1_000_000_007);
//! let (q, r) = a.div_rem(&b).unwrap();
//! assert_eq!(&(&q * &b) + &r, a);
//!
//! let x: Rational = "6/-4".parse().unwrap();
//! assert_eq!(x.to_string(), "-3/2");
//! ```
#![cfg_attr(not(test), no_std)]

extern crate alloc;

#[macro_use]
extern crate delog;
generate_macros!();

mod digit;
pub use digit::{Decimal, Dense, Digit, Octet, Radix};
mod error;
pub use error::{Error, Result};
mod numbers;
pub use numbers::{digit_length, Digits, Natural, NonZero, One, Zero};
mod arithmetic;
mod integer;
pub use integer::{Integer, Sign};
mod rational;
pub use rational::Rational;
mod text;
