//! Evaluation, differentiation and simplification of symcalc expressions.
//!
//! - [`numerical`] evaluates an [`Expr`] to an `f64` under a set of variable bindings.
//! - [`symbolic`] differentiates an [`Expr`] with respect to a variable, and simplifies it with a
//!   fixed set of algebraic rewrites.
//!
//! Every operation reads its input tree and builds a new one; the input is never modified.
//!
//! ```
//! use symcalc_compute::{numerical::eval::Eval, symbolic::{derivative, simplify}};
//! use symcalc_parser::parser::{ast::Expr, parse};
//!
//! let expr = parse("sin(\"x\")").unwrap();
//! let slope = simplify(&derivative(&expr, "x").unwrap()).unwrap();
//! assert_eq!(slope, Expr::cos(Expr::variable("x")));
//!
//! let value = parse("2 * \"x\" + 3").unwrap().eval(&[("x", 4.0)].into()).unwrap();
//! assert_eq!(value, 11.0);
//! ```
//!
//! [`Expr`]: symcalc_parser::parser::ast::Expr

pub mod numerical;
pub mod symbolic;

mod proptests;
