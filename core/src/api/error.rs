//! Public error types for the calculator API.
//!
//! Internal errors are converted to these types at API boundaries.

use core::fmt;

use crate::evaluator::ExecutionError;
use crate::parser::{ParseError, Span};

/// Public error type for all calculator operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The source could not be turned into an expression tree.
    Compilation {
        diagnostics: Vec<Diagnostic>,
        source: String,
    },

    /// The tree was built but could not be evaluated (e.g., division by zero).
    Runtime {
        diagnostic: Diagnostic,
        source: String,
    },

    /// Resource limits exceeded (stack capacity, arena allocation).
    ResourceExceeded(String),
}

impl Error {
    /// Attach the evaluated source to an execution error.
    pub fn from_execution(err: ExecutionError, source: &str) -> Self {
        match err {
            ExecutionError::ResourceExceeded(res_err) => Error::ResourceExceeded(res_err.to_string()),
            ExecutionError::Runtime(runtime_err) => Error::Runtime {
                diagnostic: Diagnostic {
                    severity: Severity::Error,
                    message: runtime_err.to_string(),
                    span: runtime_err.span().cloned().unwrap_or(Span(0..source.len())),
                    help: runtime_err.help(),
                    code: Some(runtime_err.code().to_string()),
                },
                source: source.to_string(),
            },
        }
    }

    /// Diagnostics carried by this error, if any.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        match self {
            Error::Compilation { diagnostics, .. } => diagnostics,
            Error::Runtime { diagnostic, .. } => core::slice::from_ref(diagnostic),
            Error::ResourceExceeded(_) => &[],
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Compilation { diagnostics, .. } => match diagnostics.as_slice() {
                [single] => write!(f, "Compilation failed: {}", single.message),
                _ => write!(f, "Compilation failed with {} error(s)", diagnostics.len()),
            },
            Error::Runtime { diagnostic, .. } => write!(f, "Runtime error: {}", diagnostic.message),
            Error::ResourceExceeded(msg) => write!(f, "Resource limit exceeded: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

/// A diagnostic message with source location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Severity level.
    pub severity: Severity,

    /// Primary diagnostic message.
    pub message: String,

    /// Source location of the primary issue.
    pub span: Span,

    /// Optional help text suggesting how to fix the issue.
    pub help: Option<String>,

    /// Error code (`P…` for parse errors, `R…` for runtime errors).
    pub code: Option<String>,
}

/// Severity level for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
        }
    }
}

// ============================================================================
// Conversion from internal errors
// ============================================================================

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        if err.kind.is_resource_error() {
            return Error::ResourceExceeded(err.kind.to_string());
        }
        Error::Compilation {
            diagnostics: vec![err.to_diagnostic()],
            source: err.source,
        }
    }
}
