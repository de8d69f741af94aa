pub mod ast;
pub mod error;
pub mod op;

use ast::Expr;
use error::{ExpectedEof, ExpectedExpr, NestingTooDeep, UnexpectedToken, UnknownIdentifier};
use levenshtein::levenshtein;
use log::debug;
use op::BinOpKind;
use std::{
    f64::consts::{E, PI},
    ops::Range,
};
use super::tokenizer::{tokenize_complete, Token, TokenKind};
use symcalc_error::Error;

/// The identifiers that may appear unquoted in an expression.
pub const RESERVED: [&str; 5] = ["pi", "e", "sin", "cos", "log"];

/// The maximum number of parentheses, function calls, unary minus signs and exponents that may
/// enclose any part of an expression.
pub const MAX_NESTING: usize = 256;

/// The maximum depth of a parsed expression tree.
///
/// Differentiation, simplification and printing all recurse over the tree, so this also bounds
/// their stack usage.
pub const MAX_DEPTH: usize = 1024;

/// An expression, along with the depth of its tree.
struct Parsed {
    expr: Expr,
    depth: usize,
}

impl Parsed {
    fn leaf(expr: Expr) -> Self {
        Self { expr, depth: 1 }
    }
}

/// A high-level parser for expressions. This is the type to use to parse an arbitrary piece of
/// source code into an [`Expr`].
///
/// The parser does not recover from errors: the first error aborts parsing.
#[derive(Debug, Clone)]
pub struct Parser<'source> {
    /// The tokens that this parser is currently parsing. Always ends with a
    /// [`TokenKind::Eof`] token.
    tokens: Box<[Token<'source>]>,

    /// The index of the **next** token to be parsed. Never moves past the final
    /// [`TokenKind::Eof`] token.
    cursor: usize,

    /// The number of nested constructs currently being parsed. Never exceeds [`MAX_NESTING`].
    nesting: usize,
}

impl<'source> Parser<'source> {
    /// Create a new parser for the given source, failing if the source cannot be tokenized.
    pub fn new(source: &'source str) -> Result<Self, Error> {
        Ok(Self {
            tokens: tokenize_complete(source)?,
            cursor: 0,
            nesting: 0,
        })
    }

    /// Returns the current token. The cursor is not moved.
    pub fn current_token(&self) -> &Token<'source> {
        &self.tokens[self.cursor]
    }

    /// Returns the current token, then advances the cursor, unless the current token is the final
    /// [`TokenKind::Eof`] token.
    pub fn next_token(&mut self) -> Token<'source> {
        // cloning is cheap: only Range<_> is cloned
        let token = self.current_token().clone();
        if token.kind != TokenKind::Eof {
            self.cursor += 1;
        }
        token
    }

    /// Consumes the current token if it is of the `expected` kind, ignoring payloads. Otherwise,
    /// returns an error naming both kinds.
    pub fn expect(&mut self, expected: TokenKind) -> Result<Token<'source>, Error> {
        let token = self.current_token();
        if token.kind.same_kind(&expected) {
            Ok(self.next_token())
        } else {
            Err(Error::new(vec![token.span.clone()], UnexpectedToken {
                expected: expected.name(),
                found: token.kind.name(),
                position: token.position(),
            }))
        }
    }

    /// Parses a complete expression, requiring that every token is consumed.
    pub fn try_parse_full(&mut self) -> Result<Expr, Error> {
        let expr = self.parse_expr()?;
        let token = self.current_token();
        if token.kind == TokenKind::Eof {
            Ok(expr)
        } else {
            Err(Error::new(
                vec![token.span.start..self.tokens[self.tokens.len() - 1].span.end],
                ExpectedEof {
                    found: token.kind.name(),
                    position: token.position(),
                },
            ))
        }
    }

    /// Parses an expression at the loosest precedence level, stopping at the first token that
    /// cannot continue it.
    pub fn parse_expr(&mut self) -> Result<Expr, Error> {
        self.parse_level(Precedence::Term).map(|parsed| parsed.expr)
    }

    /// Runs `parse` one nesting level deeper, failing with [`NestingTooDeep`] at `span` if that
    /// would exceed [`MAX_NESTING`].
    fn nested<T>(
        &mut self,
        span: Range<usize>,
        parse: impl FnOnce(&mut Self) -> Result<T, Error>,
    ) -> Result<T, Error> {
        if self.nesting >= MAX_NESTING {
            return Err(too_deep(span));
        }

        self.nesting += 1;
        let result = parse(self);
        self.nesting -= 1;
        result
    }

    fn parse_level(&mut self, precedence: Precedence) -> Result<Parsed, Error> {
        match precedence {
            Precedence::Term | Precedence::Factor | Precedence::Exp => self.parse_binary(precedence),
            Precedence::Neg => self.parse_unary(),
            Precedence::Primary => self.parse_primary(),
        }
    }

    /// Parses a chain of binary operators of the given precedence.
    ///
    /// The right operand of a left-associative operator is parsed one level tighter, so the loop
    /// folds the chain to the left. The right operand of a right-associative operator is parsed at
    /// the same level, which consumes the rest of the chain and nests it to the right.
    fn parse_binary(&mut self, precedence: Precedence) -> Result<Parsed, Error> {
        let mut lhs = self.parse_level(precedence.tighter())?;

        while let Some(op) = BinOpKind::from_token(&self.current_token().kind)
            .filter(|op| op.precedence() == precedence)
        {
            let op_token = self.next_token();
            let rhs = match op.associativity() {
                Associativity::Left => self.parse_level(precedence.tighter())?,
                Associativity::Right => {
                    self.nested(op_token.span.clone(), |parser| parser.parse_level(precedence))?
                },
            };

            let depth = 1 + lhs.depth.max(rhs.depth);
            if depth > MAX_DEPTH {
                return Err(too_deep(op_token.span));
            }

            lhs = Parsed {
                expr: op.apply(lhs.expr, rhs.expr)
                    .map_err(|err| err.with_spans(vec![op_token.span]))?,
                depth,
            };
        }

        Ok(lhs)
    }

    /// Parses any number of prefix minus signs, each desugared to a multiplication by `-1`.
    fn parse_unary(&mut self) -> Result<Parsed, Error> {
        if self.current_token().kind == TokenKind::Minus {
            let token = self.next_token();
            let operand = self.nested(token.span, Self::parse_unary)?;
            Ok(Parsed {
                expr: Expr::mul(Expr::Constant(-1.0), operand.expr),
                depth: operand.depth + 1,
            })
        } else {
            self.parse_level(Precedence::Exp)
        }
    }

    fn parse_primary(&mut self) -> Result<Parsed, Error> {
        let token = self.next_token();
        match token.kind {
            TokenKind::Number(value) => Ok(Parsed::leaf(Expr::Constant(value))),
            TokenKind::Var(name) => Ok(Parsed::leaf(Expr::variable(name))),
            TokenKind::Ident(name) => self.parse_ident(name, token.span),
            TokenKind::LParen => self.nested(token.span, |parser| {
                let inner = parser.parse_level(Precedence::Term)?;
                parser.expect(TokenKind::RParen)?;
                Ok(inner)
            }),
            kind => Err(Error::new(vec![token.span.clone()], ExpectedExpr {
                found: kind.name(),
                position: token.position(),
            })),
        }
    }

    /// Resolves a bare identifier to a constant, or parses the parenthesized argument of a
    /// function.
    fn parse_ident(&mut self, name: &'source str, span: Range<usize>) -> Result<Parsed, Error> {
        let build: fn(Expr) -> Expr = match name {
            "pi" => return Ok(Parsed::leaf(Expr::Constant(PI))),
            "e" => return Ok(Parsed::leaf(Expr::Constant(E))),
            "sin" => Expr::sin,
            "cos" => Expr::cos,
            "log" => Expr::log,
            _ => {
                let suggestions = if name.len() > 1 {
                    RESERVED.into_iter()
                        .filter(|reserved| levenshtein(reserved, name) < 2)
                        .collect()
                } else {
                    Vec::new()
                };

                return Err(Error::new(vec![span.clone()], UnknownIdentifier {
                    name: name.to_string(),
                    position: span.start,
                    suggestions,
                }));
            },
        };

        self.nested(span, |parser| {
            parser.expect(TokenKind::LParen)?;
            let arg = parser.parse_level(Precedence::Term)?;
            parser.expect(TokenKind::RParen)?;
            Ok(Parsed {
                expr: build(arg.expr),
                depth: arg.depth + 1,
            })
        })
    }
}

/// Builds the error for an expression that exceeds [`MAX_NESTING`] or [`MAX_DEPTH`] at `span`.
fn too_deep(span: Range<usize>) -> Error {
    let position = span.start;
    Error::new(vec![span], NestingTooDeep { position })
}

/// Parses the given source code into an expression.
pub fn parse(source: &str) -> Result<Expr, Error> {
    let expr = Parser::new(source)?.try_parse_full()?;
    debug!("parsed expression with {} nodes and depth {}", expr.node_count(), expr.depth());
    Ok(expr)
}

/// The associativity of a binary operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Associativity {
    /// The binary operation is left-associative.
    ///
    /// For example, `a - b - c` is evaluated as `(a - b) - c`.
    Left,

    /// The binary operation is right-associative.
    ///
    /// For example, `a ^ b ^ c` is evaluated as `a ^ (b ^ c)`.
    Right,
}

/// The precedence of an operation, in order from lowest precedence (evaluated last) to highest
/// precedence (evaluated first).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    /// Precedence of addition (`+`) and subtraction (`-`), which separate terms.
    Term,

    /// Precedence of multiplication (`*`) and division (`/`), which separate factors.
    Factor,

    /// Precedence of unary subtraction (`-`).
    Neg,

    /// Precedence of exponentiation (`^`).
    Exp,

    /// Numbers, variables, constants, function calls and parenthesized expressions.
    Primary,
}

impl Precedence {
    /// Returns the precedence level that binds one step tighter than this one.
    pub fn tighter(self) -> Self {
        match self {
            Self::Term => Self::Factor,
            Self::Factor => Self::Neg,
            Self::Neg => Self::Exp,
            Self::Exp | Self::Primary => Self::Primary,
        }
    }
}
