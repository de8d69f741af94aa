use std::fmt::{self, Display, Formatter};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A rewrite applied by the simplifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Step {
    /// `a+0 = a`, `0+a = a`
    AddZero,

    /// `a-0 = a`
    SubZero,

    /// `a*0 = 0`, `0*a = 0`
    MultiplyZero,

    /// `a*1 = a`, `1*a = a`
    MultiplyOne,

    /// `a/1 = a`
    DivideOne,

    /// `a^1 = a`
    PowerOne,

    /// `a^0 = 1`
    PowerZero,

    /// An operation whose operands are all constants was replaced by its value.
    FoldConstant,
}

impl Display for Step {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Self::AddZero => write!(f, "removed an addition of zero"),
            Self::SubZero => write!(f, "removed a subtraction of zero"),
            Self::MultiplyZero => write!(f, "replaced a multiplication by zero with zero"),
            Self::MultiplyOne => write!(f, "removed a multiplication by one"),
            Self::DivideOne => write!(f, "removed a division by one"),
            Self::PowerOne => write!(f, "removed an exponent of one"),
            Self::PowerZero => write!(f, "replaced a power with an exponent of zero with one"),
            Self::FoldConstant => write!(f, "evaluated an operation on constants"),
        }
    }
}
