use bumpalo::Bump;
use tracing::debug;

use crate::parser::builder::{Insertion, TreeBuilder};
use crate::parser::lexer::{Lexeme, Scanner, Token};
use crate::parser::{Literal, Operator, ParseError, ParseErrorKind, ParsedExpr};

/// Limits applied while scanning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserOptions {
    /// Maximum number of digits in one operand.
    ///
    /// Default: 10
    pub max_token_digits: usize,

    /// Maximum number of operand and operator tokens in one expression.
    ///
    /// Default: 20
    pub max_tokens: usize,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            max_token_digits: 10,
            max_tokens: 20,
        }
    }
}

/// Parse an expression with default limits.
pub fn parse<'a>(arena: &'a Bump, source: &'a str) -> Result<ParsedExpr<'a>, ParseError> {
    parse_with_options(arena, source, &ParserOptions::default())
}

/// Parse an expression, building its tree while the source is scanned.
pub fn parse_with_options<'a>(
    arena: &'a Bump,
    source: &'a str,
    options: &ParserOptions,
) -> Result<ParsedExpr<'a>, ParseError> {
    let mut builder = TreeBuilder::new(source);
    let mut cursor = builder.root();
    let mut token_count = 0;

    for lexeme in Scanner::new(source) {
        let lexeme = lexeme.map_err(|e| {
            ParseError::new(
                ParseErrorKind::UnexpectedCharacter { found: e.found },
                source,
                e.span,
            )
        })?;

        token_count += 1;
        if token_count > options.max_tokens {
            return Err(ParseError::new(
                ParseErrorKind::TooManyTokens {
                    max_tokens: options.max_tokens,
                },
                source,
                lexeme.span,
            ));
        }

        let insertion = match lexeme.token {
            Token::Operand => Insertion::Operand {
                literal: literal(&lexeme, source, options)?,
                span: lexeme.span,
            },
            Token::Operator => Insertion::Operator {
                op: operator(&lexeme, source)?,
                span: lexeme.span,
            },
        };
        cursor = builder.insert(cursor, insertion)?;
    }

    let expr = builder.finish(arena)?;
    debug!(token_count, "parsed expression");

    Ok(ParsedExpr {
        source,
        expr,
        token_count,
    })
}

fn literal<'a>(
    lexeme: &Lexeme<'a>,
    source: &str,
    options: &ParserOptions,
) -> Result<Literal<'a>, ParseError> {
    if lexeme.text.len() > options.max_token_digits {
        return Err(ParseError::new(
            ParseErrorKind::TokenTooLong {
                text: lexeme.text.to_string(),
                max_digits: options.max_token_digits,
            },
            source,
            lexeme.span.clone(),
        ));
    }
    let value = lexeme.text.parse::<i32>().map_err(|_| {
        ParseError::new(
            ParseErrorKind::InvalidNumber {
                text: lexeme.text.to_string(),
            },
            source,
            lexeme.span.clone(),
        )
    })?;
    Ok(Literal {
        text: lexeme.text,
        value,
    })
}

fn operator(lexeme: &Lexeme<'_>, source: &str) -> Result<Operator, ParseError> {
    Operator::from_symbol(lexeme.text).ok_or_else(|| {
        // The scanner only yields operator characters here, so anything
        // longer than one symbol is a run like `*-`.
        ParseError::new(
            ParseErrorKind::ConsecutiveOperators {
                text: lexeme.text.to_string(),
            },
            source,
            lexeme.span.clone(),
        )
    })
}
