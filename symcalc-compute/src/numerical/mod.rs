//! Numerical evaluation of expressions.
//!
//! Evaluation follows IEEE-754 semantics throughout. A denominator that evaluates to zero
//! produces an infinity or NaN rather than an error; the only evaluation error is a variable
//! missing from the [`Ctxt`](ctxt::Ctxt).

pub mod ctxt;
pub mod error;
pub mod eval;
