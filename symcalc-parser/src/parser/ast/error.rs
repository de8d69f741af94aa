use symcalc_attrs::ErrorKind;
use symcalc_error::ErrorKind;

/// A division had a denominator of literally zero.
///
/// Raised when a [`Quotient`](super::Quotient) is built with a `Constant(0)` denominator, and by
/// the simplifier when a denominator simplifies to zero. A denominator that only evaluates to zero
/// at runtime is not an error.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "division by zero",
    labels = ["this division has a denominator of zero"],
    help = "the denominator of a division cannot be the constant `0`",
)]
pub struct DivisionByZero;
