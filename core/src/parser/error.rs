use thiserror::Error;

use crate::api::{Diagnostic, Severity};
use crate::parser::Span;

/// Parser error with context
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub source: String,
    pub span: Span,
}

/// Specific kinds of parse errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    /// A character that is neither a digit, an operator nor a separator.
    #[error("Unexpected character '{found}'")]
    UnexpectedCharacter { found: char },

    /// Operand longer than the configured digit limit.
    #[error("Operand '{text}' has more than {max_digits} digits")]
    TokenTooLong { text: String, max_digits: usize },

    /// Operand that does not fit a 32-bit signed integer.
    #[error("Operand '{text}' does not fit in a 32-bit signed integer")]
    InvalidNumber { text: String },

    /// Run of operator characters such as `*-` or `--`.
    #[error("Operators '{text}' have no operand between them")]
    ConsecutiveOperators { text: String },

    /// Operator with no operand before it.
    #[error("Operator '{op}' is missing an operand")]
    MissingOperand { op: String },

    /// Two operands with no operator between them.
    #[error("Missing operator before '{text}'")]
    MissingOperator { text: String },

    /// Input ended while an operator was waiting for its right operand.
    #[error("Expression ends with operator '{op}'")]
    TrailingOperator { op: String },

    /// Input with no tokens at all.
    #[error("Empty expression")]
    EmptyExpression,

    /// More tokens than the configured limit.
    #[error("Expression has more than {max_tokens} tokens")]
    TooManyTokens { max_tokens: usize },

    /// The arena refused a node allocation.
    #[error("Failed to allocate an expression node")]
    AllocationFailed,
}

impl ParseErrorKind {
    pub fn code(&self) -> &'static str {
        match self {
            ParseErrorKind::UnexpectedCharacter { .. } => "P001",
            ParseErrorKind::TokenTooLong { .. } => "P002",
            ParseErrorKind::InvalidNumber { .. } => "P003",
            ParseErrorKind::ConsecutiveOperators { .. } => "P004",
            ParseErrorKind::MissingOperand { .. } => "P005",
            ParseErrorKind::MissingOperator { .. } => "P006",
            ParseErrorKind::TrailingOperator { .. } => "P007",
            ParseErrorKind::EmptyExpression => "P008",
            ParseErrorKind::TooManyTokens { .. } => "P009",
            ParseErrorKind::AllocationFailed => "P010",
        }
    }

    fn help(&self) -> Option<String> {
        match self {
            ParseErrorKind::UnexpectedCharacter { .. } => {
                Some("Only digits, '+', '-', '*', '/', spaces and '=' are allowed".to_string())
            }
            ParseErrorKind::ConsecutiveOperators { .. } | ParseErrorKind::MissingOperand { .. } => {
                Some("Put an operand between the operators".to_string())
            }
            ParseErrorKind::TrailingOperator { .. } => {
                Some("Add the missing right operand".to_string())
            }
            ParseErrorKind::MissingOperator { .. } => {
                Some("Insert an operator between the operands".to_string())
            }
            _ => None,
        }
    }

    /// Resource failures are not the input's fault.
    pub fn is_resource_error(&self) -> bool {
        matches!(self, ParseErrorKind::AllocationFailed)
    }
}

impl ParseError {
    /// Create a new ParseError
    pub fn new(kind: ParseErrorKind, source: &str, span: Span) -> Self {
        Self {
            kind,
            source: source.to_string(),
            span,
        }
    }

    /// Convert to a Diagnostic for API boundary
    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic {
            severity: Severity::Error,
            message: self.kind.to_string(),
            span: self.span.clone(),
            help: self.kind.help(),
            code: Some(self.kind.code().to_string()),
        }
    }
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let diagnostic = self.to_diagnostic();
        write!(f, "{}: {}", diagnostic.severity, diagnostic.message)?;

        if let Some(ref code) = diagnostic.code {
            write!(f, " [{}]", code)?;
        }

        if let Some(ref help) = diagnostic.help {
            write!(f, "\nhelp: {}", help)?;
        }

        Ok(())
    }
}

impl std::error::Error for ParseError {}
