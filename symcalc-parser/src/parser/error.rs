//! Lexical and grammar errors.
//!
//! Every message names the byte offset the error occurred at, so it stays useful when printed
//! without the highlighted source.

use ariadne::Fmt;
use symcalc_attrs::ErrorKind;
use symcalc_error::{ErrorKind, EXPR};

/// A character that cannot begin any token was found.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("unknown character `{}` at position {}", self.character, self.position),
    labels = ["this character"],
    help = format!(
        "expressions are made of numbers, {}, the operators `+ - * / ^`, parentheses and the names `pi`, `e`, `sin`, `cos` and `log`",
        "quoted variables".fg(EXPR),
    ),
)]
pub struct UnknownCharacter {
    /// The character that was found.
    pub character: char,

    /// The byte offset of the character.
    pub position: usize,
}

/// A number literal contained more than one decimal point.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("second decimal point found at position {}", self.position),
    labels = ["this decimal point"],
    help = "a number can contain at most one decimal point",
)]
pub struct SecondDecimalPoint {
    /// The byte offset of the second decimal point.
    pub position: usize,
}

/// A quoted variable name was never closed.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("unterminated variable starting at position {}", self.position),
    labels = ["this variable name is never closed"],
    help = format!("add a closing `{}`", "\"".fg(EXPR)),
)]
pub struct UnterminatedVariable {
    /// The byte offset of the opening quote.
    pub position: usize,
}

/// A quoted variable name started with a character other than an ASCII letter or underscore.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("invalid start of variable name `{}` at position {}", self.character, self.position),
    labels = ["this character"],
    help = "variable names must start with an ASCII letter or an underscore",
)]
pub struct InvalidVariableStart {
    pub character: char,
    pub position: usize,
}

/// A quoted variable name contained a character other than an ASCII letter, digit, or underscore.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("invalid character `{}` in variable name at position {}", self.character, self.position),
    labels = ["this character"],
    help = "variable names may only contain ASCII letters, digits and underscores",
)]
pub struct InvalidVariableChar {
    pub character: char,
    pub position: usize,
}

/// A token of one kind was expected, but a different one was found.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!(
        "unexpected token `{}` at position {}, expected `{}`",
        self.found,
        self.position,
        self.expected,
    ),
    labels = [format!("expected `{}` here", self.expected)],
)]
pub struct UnexpectedToken {
    /// The name of the kind of token that was expected.
    pub expected: &'static str,

    /// The name of the kind of token that was found.
    pub found: &'static str,

    pub position: usize,
}

/// An expression was expected, but the current token cannot begin one.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("expected an expression at position {}, found `{}`", self.position, self.found),
    labels = [format!("you might need to add an {} here", "expression".fg(EXPR))],
)]
pub struct ExpectedExpr {
    pub found: &'static str,
    pub position: usize,
}

/// A complete expression was parsed, but tokens remain after it.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("expected end of expression at position {}, found `{}`", self.position, self.found),
    labels = [format!("I could not understand the remaining {} here", "expression".fg(EXPR))],
    help = "multiplication must be written explicitly, as in `2 * \"x\"`",
)]
pub struct ExpectedEof {
    pub found: &'static str,
    pub position: usize,
}

/// A bare identifier is not one of the reserved constant or function names.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("unknown function or constant `{}` at position {}", self.name, self.position),
    labels = ["this identifier"],
    help = if self.suggestions.is_empty() {
        format!("if `{0}` is a variable, quote it: `\"{0}\"`", self.name)
    } else {
        format!(
            "did you mean {}? if `{1}` is a variable, quote it: `\"{1}\"`",
            self.suggestions
                .iter()
                .map(|name| format!("`{}`", name.fg(EXPR)))
                .collect::<Vec<_>>()
                .join(", "),
            self.name,
        )
    },
)]
pub struct UnknownIdentifier {
    /// The identifier that was found.
    pub name: String,

    pub position: usize,

    /// Reserved names similar to the identifier.
    pub suggestions: Vec<&'static str>,
}

/// Parentheses, function calls, unary minus signs or operators were nested more deeply than the
/// parser allows.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("expression is nested too deeply at position {}", self.position),
    labels = ["the limit is exceeded here"],
    help = "split the expression into smaller parts, or remove redundant parentheses",
)]
pub struct NestingTooDeep {
    pub position: usize,
}
