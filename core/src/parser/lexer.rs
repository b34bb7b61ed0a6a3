//! Character scanner.
//!
//! Tokens are produced lazily, one at a time, so the tree builder inserts each
//! token as soon as its characters have been consumed. There is no token list.

use logos::Logos;

use crate::parser::Span;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n=]+")]
pub enum Token {
    // Maximal run of digits.
    #[regex(r"[0-9]+")]
    Operand,

    // Maximal run of operator characters. Only runs of length one are valid
    // expressions; the builder rejects the rest.
    #[regex(r"[-+*/]+")]
    Operator,
}

/// A scanned token together with its text and location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexeme<'a> {
    pub token: Token,
    pub text: &'a str,
    pub span: Span,
}

/// Scan failure: a character that is neither a digit, an operator nor a
/// separator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnexpectedChar {
    pub found: char,
    pub span: Span,
}

/// Iterator over the lexemes of a source string.
pub struct Scanner<'a> {
    source: &'a str,
    lexer: logos::Lexer<'a, Token>,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            lexer: Token::lexer(source),
        }
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Result<Lexeme<'a>, UnexpectedChar>;

    fn next(&mut self) -> Option<Self::Item> {
        let result = self.lexer.next()?;
        let range = self.lexer.span();
        match result {
            Ok(token) => Some(Ok(Lexeme {
                token,
                text: self.lexer.slice(),
                span: Span(range),
            })),
            Err(()) => {
                // Report only the first offending character.
                let found = self.source[range.start..].chars().next().unwrap_or('\0');
                let end = range.start + found.len_utf8();
                Some(Err(UnexpectedChar {
                    found,
                    span: Span::new(range.start, end),
                }))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn tokens(source: &str) -> Vec<(Token, &str)> {
        Scanner::new(source)
            .map(|lexeme| {
                let lexeme = lexeme.expect("scan failed");
                (lexeme.token, lexeme.text)
            })
            .collect()
    }

    #[test]
    fn test_digits_and_operators() {
        assert_eq!(
            tokens("12+3*45"),
            vec![
                (Token::Operand, "12"),
                (Token::Operator, "+"),
                (Token::Operand, "3"),
                (Token::Operator, "*"),
                (Token::Operand, "45"),
            ]
        );
    }

    #[test]
    fn test_separators_are_skipped() {
        assert_eq!(
            tokens(" 1 +\t2 =\r\n"),
            vec![
                (Token::Operand, "1"),
                (Token::Operator, "+"),
                (Token::Operand, "2"),
            ]
        );
    }

    #[test]
    fn test_operator_run_is_one_token() {
        assert_eq!(
            tokens("2*-3"),
            vec![
                (Token::Operand, "2"),
                (Token::Operator, "*-"),
                (Token::Operand, "3"),
            ]
        );
    }

    #[test]
    fn test_leading_zeros_kept() {
        assert_eq!(tokens("007"), vec![(Token::Operand, "007")]);
    }

    #[test]
    fn test_spans() {
        let lexemes: Vec<_> = Scanner::new(" 10 / 2").map(Result::unwrap).collect();
        assert_eq!(lexemes[0].span, Span::new(1, 3));
        assert_eq!(lexemes[1].span, Span::new(4, 5));
        assert_eq!(lexemes[2].span, Span::new(6, 7));
    }

    #[test]
    fn test_unexpected_character() {
        let mut scanner = Scanner::new("1 + x");
        assert!(scanner.next().unwrap().is_ok());
        assert!(scanner.next().unwrap().is_ok());
        let err = scanner.next().unwrap().unwrap_err();
        assert_eq!(err.found, 'x');
        assert_eq!(err.span, Span::new(4, 5));
    }
}
