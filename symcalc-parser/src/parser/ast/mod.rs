pub mod error;
pub mod expr;
pub mod fmt;
pub mod iter;

pub use error::DivisionByZero;
pub use expr::{Expr, Quotient};
pub use iter::ExprIter;
