use crate::{
    parser::{ast::Expr, Associativity, Precedence},
    tokenizer::TokenKind,
};
use symcalc_error::Error;

/// The binary operation that is being performed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BinOpKind {
    Exp,
    Mul,
    Div,
    Add,
    Sub,
}

impl BinOpKind {
    /// Returns the binary operation that the given token represents, if any.
    pub fn from_token(kind: &TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Caret => Some(Self::Exp),
            TokenKind::Star => Some(Self::Mul),
            TokenKind::Slash => Some(Self::Div),
            TokenKind::Plus => Some(Self::Add),
            TokenKind::Minus => Some(Self::Sub),
            _ => None,
        }
    }

    /// Returns the precedence of the binary operation.
    pub fn precedence(&self) -> Precedence {
        match self {
            Self::Exp => Precedence::Exp,
            Self::Mul | Self::Div => Precedence::Factor,
            Self::Add | Self::Sub => Precedence::Term,
        }
    }

    /// Returns the associativity of the binary operation.
    pub fn associativity(&self) -> Associativity {
        match self {
            Self::Exp => Associativity::Right,
            Self::Mul | Self::Div | Self::Add | Self::Sub => Associativity::Left,
        }
    }

    /// Builds the expression `lhs op rhs`. Only division can fail.
    pub fn apply(&self, lhs: Expr, rhs: Expr) -> Result<Expr, Error> {
        Ok(match self {
            Self::Exp => Expr::pow(lhs, rhs),
            Self::Mul => Expr::mul(lhs, rhs),
            Self::Div => Expr::div(lhs, rhs)?,
            Self::Add => Expr::add(lhs, rhs),
            Self::Sub => Expr::sub(lhs, rhs),
        })
    }
}
