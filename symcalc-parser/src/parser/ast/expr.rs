use std::collections::BTreeSet;
use super::{error::DivisionByZero, iter::ExprIter};
use symcalc_error::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Represents any kind of expression.
///
/// A tree of expressions exclusively owns its operands, and is never modified once built;
/// differentiation and simplification build new trees. Equality is structural, and constants are
/// compared with exact floating-point equality, so `Constant(NaN)` is not equal to itself and
/// `Constant(0.1 + 0.2)` is not equal to `Constant(0.3)`.
#[derive(Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Expr {
    /// A numeric constant, such as `5`, `2.5`, or the value of `pi`.
    Constant(f64),

    /// A named variable, written as `"x"` in source code.
    Variable(String),

    Add(Box<Expr>, Box<Expr>),
    Sub(Box<Expr>, Box<Expr>),
    Mul(Box<Expr>, Box<Expr>),

    /// A division. The denominator is guaranteed not to be `Constant(0)`.
    Div(Quotient),

    /// Exponentiation, with the base on the left and the exponent on the right.
    Pow(Box<Expr>, Box<Expr>),

    /// The natural logarithm.
    Log(Box<Expr>),
    Sin(Box<Expr>),
    Cos(Box<Expr>),
}

/// The operands of a division, `numerator / denominator`.
///
/// The only way to build a quotient is [`Quotient::new`], which rejects a denominator of
/// literally `Constant(0)`.
#[derive(Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "(Expr, Expr)", into = "(Expr, Expr)"),
)]
pub struct Quotient {
    numerator: Box<Expr>,
    denominator: Box<Expr>,
}

impl Quotient {
    /// Creates the quotient `numerator / denominator`.
    ///
    /// Returns a spanless [`DivisionByZero`] error if the denominator is `Constant(0)`. A
    /// denominator that merely evaluates to zero, such as `"x" - "x"`, is accepted.
    pub fn new(numerator: Expr, denominator: Expr) -> Result<Self, Error> {
        if denominator.is_constant(0.0) {
            return Err(Error::spanless(DivisionByZero));
        }

        Ok(Self {
            numerator: Box::new(numerator),
            denominator: Box::new(denominator),
        })
    }

    pub fn numerator(&self) -> &Expr {
        &self.numerator
    }

    pub fn denominator(&self) -> &Expr {
        &self.denominator
    }

    /// Consumes the quotient, returning its numerator and denominator.
    pub fn into_parts(self) -> (Expr, Expr) {
        (*self.numerator, *self.denominator)
    }
}

impl TryFrom<(Expr, Expr)> for Quotient {
    type Error = Error;

    fn try_from((numerator, denominator): (Expr, Expr)) -> Result<Self, Self::Error> {
        Self::new(numerator, denominator)
    }
}

impl From<Quotient> for (Expr, Expr) {
    fn from(quotient: Quotient) -> Self {
        quotient.into_parts()
    }
}

impl Expr {
    /// Creates a variable with the given name.
    pub fn variable(name: impl Into<String>) -> Self {
        Self::Variable(name.into())
    }

    pub fn add(lhs: Expr, rhs: Expr) -> Self {
        Self::Add(Box::new(lhs), Box::new(rhs))
    }

    pub fn sub(lhs: Expr, rhs: Expr) -> Self {
        Self::Sub(Box::new(lhs), Box::new(rhs))
    }

    pub fn mul(lhs: Expr, rhs: Expr) -> Self {
        Self::Mul(Box::new(lhs), Box::new(rhs))
    }

    /// Creates the division `lhs / rhs`, failing if `rhs` is `Constant(0)`.
    pub fn div(lhs: Expr, rhs: Expr) -> Result<Self, Error> {
        Quotient::new(lhs, rhs).map(Self::Div)
    }

    pub fn pow(base: Expr, exp: Expr) -> Self {
        Self::Pow(Box::new(base), Box::new(exp))
    }

    pub fn log(arg: Expr) -> Self {
        Self::Log(Box::new(arg))
    }

    pub fn sin(arg: Expr) -> Self {
        Self::Sin(Box::new(arg))
    }

    pub fn cos(arg: Expr) -> Self {
        Self::Cos(Box::new(arg))
    }

    /// Returns the value of this expression if it is a [`Expr::Constant`].
    pub fn as_constant(&self) -> Option<f64> {
        match self {
            Self::Constant(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns true if this expression is a [`Expr::Constant`] exactly equal to `value`.
    pub fn is_constant(&self, value: f64) -> bool {
        self.as_constant() == Some(value)
    }

    /// Returns the direct operands of this expression, from left to right.
    pub fn children(&self) -> Vec<&Expr> {
        match self {
            Self::Constant(_) | Self::Variable(_) => Vec::new(),
            Self::Add(lhs, rhs)
                | Self::Sub(lhs, rhs)
                | Self::Mul(lhs, rhs)
                | Self::Pow(lhs, rhs) => vec![&**lhs, &**rhs],
            Self::Div(quotient) => vec![quotient.numerator(), quotient.denominator()],
            Self::Log(arg) | Self::Sin(arg) | Self::Cos(arg) => vec![&**arg],
        }
    }

    /// Returns an iterator that traverses the tree of expressions in left-to-right post-order
    /// (i.e. depth-first).
    pub fn post_order_iter(&self) -> ExprIter {
        ExprIter::new(self)
    }

    /// Returns the number of nodes in the tree.
    pub fn node_count(&self) -> usize {
        self.post_order_iter().count()
    }

    /// Returns the number of nodes on the longest path from this node to a leaf, counting both.
    pub fn depth(&self) -> usize {
        1 + self.children()
            .into_iter()
            .map(Expr::depth)
            .max()
            .unwrap_or(0)
    }

    /// Returns the names of all variables used in the tree, in sorted order.
    pub fn variables(&self) -> BTreeSet<&str> {
        self.post_order_iter()
            .filter_map(|expr| match expr {
                Self::Variable(name) => Some(name.as_str()),
                _ => None,
            })
            .collect()
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn quotient_round_trip() {
        let expr = Expr::div(Expr::variable("x"), Expr::Constant(2.0)).unwrap();
        let json = serde_json::to_string(&expr).unwrap();
        assert_eq!(json, r#"{"Div":[{"Variable":"x"},{"Constant":2.0}]}"#);
        assert_eq!(serde_json::from_str::<Expr>(&json).unwrap(), expr);
    }

    #[test]
    fn zero_denominator_is_rejected() {
        let err = serde_json::from_str::<Expr>(r#"{"Div":[{"Variable":"x"},{"Constant":0.0}]}"#)
            .unwrap_err();
        assert!(err.to_string().contains("division by zero"), "{err}");

        // only a literal zero is rejected, as in `Quotient::new`
        let json = r#"{"Div":[{"Variable":"x"},{"Sub":[{"Constant":2.0},{"Constant":2.0}]}]}"#;
        assert!(serde_json::from_str::<Expr>(json).is_ok());
    }
}
