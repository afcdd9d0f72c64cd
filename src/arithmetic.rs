//! Arithmetic of natural numbers.
//!
//! The digit-level kernels work on little-endian slices in radix `R`
//! and report their carry or borrow; the `Natural` methods built on top of
//! them size the output buffers and keep the representation normalized.
//!
//! The operator implementations follow `core`: `-` panics on underflow,
//! `/` and `%` panic on a zero divisor. The `checked_*` and `*_to`
//! methods report these as errors instead.

use core::cmp::Ordering;

use crate::Digit;

/// This is *little endian* ordering, as opposed to the default
/// ordering on slices!
///
/// Both sides must be normalized: a longer number is the larger one.
pub(crate) fn compare(m: &[Digit], n: &[Digit]) -> Ordering {
    match m.len().cmp(&n.len()) {
        Ordering::Equal => {}
        not_equal => return not_equal,
    }

    for (a, b) in m.iter().rev().zip(n.iter().rev()) {
        match a.cmp(b) {
            Ordering::Equal => (),
            not_equal => return not_equal,
        }
    }
    Ordering::Equal
}

/// Derives the by-value operator variants from `&T op &T` and `T op= &T`.
macro_rules! forward_binop {
    ($T:ident, $Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident) => {
        impl<R: $crate::Radix> core::ops::$Op<&$T<R>> for $T<R> {
            type Output = $T<R>;
            fn $op(mut self, other: &$T<R>) -> $T<R> {
                core::ops::$OpAssign::$op_assign(&mut self, other);
                self
            }
        }

        impl<R: $crate::Radix> core::ops::$Op<$T<R>> for &$T<R> {
            type Output = $T<R>;
            fn $op(self, other: $T<R>) -> $T<R> {
                core::ops::$Op::$op(self, &other)
            }
        }

        impl<R: $crate::Radix> core::ops::$Op<$T<R>> for $T<R> {
            type Output = $T<R>;
            fn $op(mut self, other: $T<R>) -> $T<R> {
                core::ops::$OpAssign::$op_assign(&mut self, &other);
                self
            }
        }

        impl<R: $crate::Radix> core::ops::$OpAssign<$T<R>> for $T<R> {
            fn $op_assign(&mut self, other: $T<R>) {
                core::ops::$OpAssign::$op_assign(self, &other)
            }
        }
    };
}

pub(crate) use forward_binop;

mod add;
mod subtract;
mod multiply;
mod divide;
mod convert;
