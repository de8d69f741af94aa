//! Symbolic manipulation of expressions.
//!
//! # Differentiation
//!
//! [`derivative()`] applies a fixed set of syntax-directed rules to build the derivative of an
//! expression with respect to a variable. The result is never simplified, so it is usually much
//! larger than necessary:
//!
//! ```
//! use symcalc_compute::symbolic::derivative;
//! use symcalc_parser::parser::parse;
//!
//! let expr = parse("\"x\" * \"x\"").unwrap();
//! assert_eq!(
//!     derivative(&expr, "x").unwrap().to_string(),
//!     "((\"x\" * 1) + (1 * \"x\"))",
//! );
//! ```
//!
//! # Simplification
//!
//! [`simplify()`] reduces an expression with a single bottom-up pass: the operands of a node are
//! simplified first, then at most one rule is applied to the node itself. The rules fold constant
//! subexpressions and remove additive and multiplicative identities; see [`simplify::rules`].
//!
//! ```
//! use symcalc_compute::symbolic::{derivative, simplify};
//! use symcalc_parser::parser::parse;
//!
//! let expr = parse("\"x\" * \"x\"").unwrap();
//! let simplified = simplify(&derivative(&expr, "x").unwrap()).unwrap();
//! assert_eq!(simplified.to_string(), "(\"x\" + \"x\")");
//! ```
//!
//! There is no attempt to reach a normal form: `x + x` is not combined into `2 * x`.

pub mod derivative;
pub mod simplify;
pub mod step_collector;

pub use derivative::derivative;
pub use simplify::{simplify, simplify_with, simplify_with_steps};
pub use step_collector::StepCollector;
