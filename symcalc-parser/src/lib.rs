//! Parser for symcalc expressions.
//!
//! An expression is made of non-negative decimal numbers, double-quoted variable names, the binary
//! operators `+ - * / ^`, unary minus, parentheses, the constants `pi` and `e`, and the functions
//! `sin`, `cos` and `log`. The parser produces an [`Expr`], an immutable tree that the rest of the
//! workspace differentiates, simplifies and evaluates.
//!
//! ```
//! use symcalc_parser::parser::{ast::Expr, parse};
//!
//! let expr = parse("2 * \"x\" + 1").unwrap();
//! assert_eq!(
//!     expr,
//!     Expr::add(
//!         Expr::mul(Expr::Constant(2.0), Expr::variable("x")),
//!         Expr::Constant(1.0),
//!     ),
//! );
//! assert_eq!(expr.to_string(), "((2 * \"x\") + 1)");
//! ```
//!
//! Every error produced while tokenizing or parsing is a [`symcalc_error::Error`] carrying the
//! region of the input it points at, so it can be rendered with [`ariadne`].
//!
//! [`Expr`]: parser::ast::Expr

pub mod parser;
pub mod tokenizer;
