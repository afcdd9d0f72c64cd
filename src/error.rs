use core::fmt;

/// Everything that can go wrong.
///
/// Each failure aborts the single operation in progress; output arguments
/// of the failing call are left untouched.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// Division (or a rational with denominator) by zero.
    DivisionByZero,
    /// A parameter outside its domain, e.g. a radix below 2 or a capacity too small.
    InvalidArgument,
    /// Text to parse was empty (or only a sign).
    Empty,
    /// Text contained something other than the decimal digits `0`-`9`.
    InvalidCharacter,
    /// A multi-digit number started with `0`.
    LeadingZero,
}

/// [`Error`] or success.
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Error::DivisionByZero => "division by zero",
            Error::InvalidArgument => "invalid argument",
            Error::Empty => "cannot parse number from empty string",
            Error::InvalidCharacter => "invalid digit found in string",
            Error::LeadingZero => "number has a leading zero",
        })
    }
}
