use logos::{Lexer, Logos};
use std::ops::Range;

/// The different kinds of tokens that can be produced by the tokenizer.
///
/// The `Number`, `Var` and `Ident` kinds carry their payload. A `Var` holds the variable name
/// without its surrounding double quotes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TokenKind<'source> {
    Number(f64),
    Var(&'source str),
    Ident(&'source str),
    Plus,
    Minus,
    Star,
    Slash,
    Caret,
    LParen,
    RParen,

    /// Marks the end of the token stream. The tokenizer always emits exactly one, last.
    Eof,
}

impl TokenKind<'_> {
    /// Returns the upper-case name of this kind, used in error messages.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Number(_) => "NUMBER",
            Self::Var(_) => "VAR",
            Self::Ident(_) => "IDENT",
            Self::Plus => "PLUS",
            Self::Minus => "MINUS",
            Self::Star => "STAR",
            Self::Slash => "SLASH",
            Self::Caret => "CARET",
            Self::LParen => "LPAREN",
            Self::RParen => "RPAREN",
            Self::Eof => "EOF",
        }
    }

    /// Returns true if both kinds are the same, ignoring their payloads.
    pub fn same_kind(&self, other: &TokenKind) -> bool {
        self.name() == other.name()
    }
}

/// A token produced by the tokenizer.
#[derive(Debug, Clone, PartialEq)]
pub struct Token<'source> {
    /// The region of the source code that this token originated from.
    pub span: Range<usize>,

    /// The kind of token.
    pub kind: TokenKind<'source>,

    /// The raw lexeme that was parsed into this token. Empty for [`TokenKind::Eof`].
    pub lexeme: &'source str,
}

impl Token<'_> {
    /// Returns the byte offset at which this token begins.
    pub fn position(&self) -> usize {
        self.span.start
    }
}

/// Errors produced by the lexer callbacks, each carrying the byte offset it occurred at.
///
/// The default variant is produced by [`logos`] itself when no pattern matches; its position is
/// the start of the failed token's span.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum LexError {
    #[default]
    UnknownCharacter,
    SecondDecimalPoint(usize),
    UnterminatedVariable(usize),
    InvalidVariableStart(usize, char),
    InvalidVariableChar(usize, char),
}

/// The raw lexemes recognized by [`logos`]. Converted into [`TokenKind`]s by the tokenizer, which
/// also appends the [`TokenKind::Eof`] marker.
#[derive(Logos, Clone, Copy, Debug, PartialEq)]
#[logos(skip r"\s+")]
#[logos(error = LexError)]
pub(super) enum Lexeme<'source> {
    #[regex(r"[0-9]+(\.[0-9]*)?", number)]
    Number(f64),

    #[token("\"", quoted_name)]
    Var(&'source str),

    #[regex(r"[A-Za-z_][A-Za-z0-9_]*", |lex| lex.slice())]
    Ident(&'source str),

    #[token("+")]
    Plus,

    #[token("-")]
    Minus,

    #[token("*")]
    Star,

    #[token("/")]
    Slash,

    #[token("^")]
    Caret,

    #[token("(")]
    LParen,

    #[token(")")]
    RParen,
}

impl<'source> From<Lexeme<'source>> for TokenKind<'source> {
    fn from(lexeme: Lexeme<'source>) -> Self {
        match lexeme {
            Lexeme::Number(value) => Self::Number(value),
            Lexeme::Var(name) => Self::Var(name),
            Lexeme::Ident(name) => Self::Ident(name),
            Lexeme::Plus => Self::Plus,
            Lexeme::Minus => Self::Minus,
            Lexeme::Star => Self::Star,
            Lexeme::Slash => Self::Slash,
            Lexeme::Caret => Self::Caret,
            Lexeme::LParen => Self::LParen,
            Lexeme::RParen => Self::RParen,
        }
    }
}

/// Parses the digits matched by the number pattern. A decimal point directly after the match
/// means the literal had a second one.
fn number<'source>(lex: &mut Lexer<'source, Lexeme<'source>>) -> Result<f64, LexError> {
    if lex.remainder().starts_with('.') {
        return Err(LexError::SecondDecimalPoint(lex.span().end));
    }

    // digits with at most one decimal point always parse
    lex.slice().parse().map_err(|_| LexError::UnknownCharacter)
}

/// Scans a double-quoted variable name after its opening quote, consuming the closing quote.
fn quoted_name<'source>(lex: &mut Lexer<'source, Lexeme<'source>>) -> Result<&'source str, LexError> {
    let start = lex.span().start;
    let rest = lex.remainder();
    let mut chars = rest.char_indices();

    match chars.next() {
        Some((_, c)) if c.is_ascii_alphabetic() || c == '_' => {},
        Some((_, c)) => return Err(LexError::InvalidVariableStart(start + 1, c)),
        None => return Err(LexError::UnterminatedVariable(start)),
    }

    for (offset, c) in chars {
        if c == '"' {
            lex.bump(offset + 1);
            return Ok(&rest[..offset]);
        } else if !(c.is_ascii_alphanumeric() || c == '_') {
            return Err(LexError::InvalidVariableChar(start + 1 + offset, c));
        }
    }

    Err(LexError::UnterminatedVariable(start))
}
