pub mod token;

use log::trace;
use logos::Logos;
use crate::parser::error::{
    InvalidVariableChar,
    InvalidVariableStart,
    SecondDecimalPoint,
    UnknownCharacter,
    UnterminatedVariable,
};
use std::ops::Range;
use symcalc_error::Error;
use token::{LexError, Lexeme};
pub use token::{Token, TokenKind};

/// Returns an owned array containing all of the tokens produced by the tokenizer, terminated by a
/// single [`TokenKind::Eof`] token whose span is empty and sits at the end of the input.
///
/// Tokenizing stops at the first lexical error.
pub fn tokenize_complete(input: &str) -> Result<Box<[Token]>, Error> {
    let mut lexer = Lexeme::lexer(input);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        match result {
            Ok(lexeme) => tokens.push(Token {
                span,
                kind: lexeme.into(),
                lexeme: lexer.slice(),
            }),
            Err(err) => return Err(lex_error(input, span, err)),
        }
    }

    tokens.push(Token {
        span: input.len()..input.len(),
        kind: TokenKind::Eof,
        lexeme: "",
    });
    trace!("tokenized {} tokens from {} bytes", tokens.len(), input.len());

    Ok(tokens.into_boxed_slice())
}

/// Converts an error from the lexer callbacks into an error pointing at the offending input.
fn lex_error(input: &str, span: Range<usize>, err: LexError) -> Error {
    let char_span = |position: usize, c: char| position..position + c.len_utf8();
    match err {
        LexError::UnknownCharacter => {
            let character = input[span.start..].chars().next().unwrap_or(char::REPLACEMENT_CHARACTER);
            Error::new(
                vec![char_span(span.start, character)],
                UnknownCharacter { character, position: span.start },
            )
        },
        LexError::SecondDecimalPoint(position) => {
            Error::new(vec![position..position + 1], SecondDecimalPoint { position })
        },
        LexError::UnterminatedVariable(position) => {
            Error::new(vec![position..input.len()], UnterminatedVariable { position })
        },
        LexError::InvalidVariableStart(position, character) => {
            Error::new(vec![char_span(position, character)], InvalidVariableStart { character, position })
        },
        LexError::InvalidVariableChar(position, character) => {
            Error::new(vec![char_span(position, character)], InvalidVariableChar { character, position })
        },
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    /// Compares the token kinds produced by the tokenizer to the expected kinds, excluding the
    /// final [`TokenKind::Eof`].
    fn compare_tokens<const N: usize>(input: &str, expected: [TokenKind; N]) {
        let tokens = tokenize_complete(input).unwrap();
        let kinds = tokens.iter().map(|token| token.kind).collect::<Vec<_>>();

        assert_eq!(&kinds[..N], &expected[..]);
        assert_eq!(kinds[N..], [TokenKind::Eof]);
    }

    #[test]
    fn basic_expr() {
        compare_tokens(
            "1 + 2",
            [TokenKind::Number(1.0), TokenKind::Plus, TokenKind::Number(2.0)],
        );
    }

    #[test]
    fn every_operator() {
        compare_tokens(
            "+-*/^()",
            [
                TokenKind::Plus,
                TokenKind::Minus,
                TokenKind::Star,
                TokenKind::Slash,
                TokenKind::Caret,
                TokenKind::LParen,
                TokenKind::RParen,
            ],
        );
    }

    #[test]
    fn complex_expr() {
        compare_tokens(
            "2.5*\"x_1\" ^ sin(pi)\t-\n\"_y\"/3.",
            [
                TokenKind::Number(2.5),
                TokenKind::Star,
                TokenKind::Var("x_1"),
                TokenKind::Caret,
                TokenKind::Ident("sin"),
                TokenKind::LParen,
                TokenKind::Ident("pi"),
                TokenKind::RParen,
                TokenKind::Minus,
                TokenKind::Var("_y"),
                TokenKind::Slash,
                TokenKind::Number(3.0),
            ],
        );
    }

    #[test]
    fn adjacent_idents_and_numbers() {
        // implicit multiplication is rejected later by the parser, not here
        compare_tokens(
            "2x e2 _a",
            [
                TokenKind::Number(2.0),
                TokenKind::Ident("x"),
                TokenKind::Ident("e2"),
                TokenKind::Ident("_a"),
            ],
        );
    }

    #[test]
    fn token_spans() {
        let tokens = tokenize_complete("  12.5 + \"ab\"").unwrap();
        let spans = tokens.iter().map(|token| token.span.clone()).collect::<Vec<_>>();
        let lexemes = tokens.iter().map(|token| token.lexeme).collect::<Vec<_>>();

        assert_eq!(spans, vec![2..6, 7..8, 9..13, 13..13]);
        assert_eq!(lexemes, vec!["12.5", "+", "\"ab\"", ""]);
        assert_eq!(tokens[2].position(), 9);
    }

    #[test]
    fn empty_input_is_eof() {
        let tokens = tokenize_complete("   ").unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Eof);
        assert_eq!(tokens[0].span, 3..3);
    }

    #[test]
    fn kind_names() {
        assert_eq!(TokenKind::Number(4.0).name(), "NUMBER");
        assert_eq!(TokenKind::Var("x").name(), "VAR");
        assert_eq!(TokenKind::RParen.name(), "RPAREN");
        assert!(TokenKind::Ident("sin").same_kind(&TokenKind::Ident("cos")));
        assert!(!TokenKind::Plus.same_kind(&TokenKind::Minus));
    }

    #[test]
    fn unknown_character() {
        let err = tokenize_complete("5 & 3").unwrap_err();
        assert_eq!(
            err.downcast_ref::<UnknownCharacter>(),
            Some(&UnknownCharacter { character: '&', position: 2 }),
        );
        assert_eq!(err.spans, vec![2..3]);
        assert_eq!(err.to_string(), "unknown character `&` at position 2");
    }

    #[test]
    fn unknown_multibyte_character() {
        let err = tokenize_complete("1 + é").unwrap_err();
        assert_eq!(
            err.downcast_ref::<UnknownCharacter>(),
            Some(&UnknownCharacter { character: 'é', position: 4 }),
        );
        assert_eq!(err.spans, vec![4..6]);
    }

    #[test]
    fn leading_decimal_point() {
        let err = tokenize_complete(".5").unwrap_err();
        assert_eq!(
            err.downcast_ref::<UnknownCharacter>(),
            Some(&UnknownCharacter { character: '.', position: 0 }),
        );
    }

    #[test]
    fn second_decimal_point() {
        let err = tokenize_complete("1 + 1.2.3").unwrap_err();
        assert_eq!(
            err.downcast_ref::<SecondDecimalPoint>(),
            Some(&SecondDecimalPoint { position: 7 }),
        );

        let err = tokenize_complete("4..").unwrap_err();
        assert_eq!(
            err.downcast_ref::<SecondDecimalPoint>(),
            Some(&SecondDecimalPoint { position: 2 }),
        );
    }

    #[test]
    fn unterminated_variable() {
        for input in ["2 * \"", "2 * \"x", "2 * \"x_1"] {
            let err = tokenize_complete(input).unwrap_err();
            assert_eq!(
                err.downcast_ref::<UnterminatedVariable>(),
                Some(&UnterminatedVariable { position: 4 }),
                "{}",
                input,
            );
        }
    }

    #[test]
    fn invalid_variable_start() {
        let err = tokenize_complete("\"1x\"").unwrap_err();
        assert_eq!(
            err.downcast_ref::<InvalidVariableStart>(),
            Some(&InvalidVariableStart { character: '1', position: 1 }),
        );

        let err = tokenize_complete("1 + \"\"").unwrap_err();
        assert_eq!(
            err.downcast_ref::<InvalidVariableStart>(),
            Some(&InvalidVariableStart { character: '"', position: 5 }),
        );
    }

    #[test]
    fn invalid_variable_char() {
        let err = tokenize_complete("\"ab-c\"").unwrap_err();
        assert_eq!(
            err.downcast_ref::<InvalidVariableChar>(),
            Some(&InvalidVariableChar { character: '-', position: 3 }),
        );
        assert!(err.to_string().contains("at position 3"));
    }

    #[test]
    fn variable_names_are_ascii() {
        let err = tokenize_complete("\"é\"").unwrap_err();
        assert_eq!(
            err.downcast_ref::<InvalidVariableStart>(),
            Some(&InvalidVariableStart { character: 'é', position: 1 }),
        );

        let err = tokenize_complete("\"xé\"").unwrap_err();
        assert_eq!(
            err.downcast_ref::<InvalidVariableChar>(),
            Some(&InvalidVariableChar { character: 'é', position: 2 }),
        );
        assert_eq!(err.spans, vec![2..4]);
    }
}
