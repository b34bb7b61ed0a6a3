//! Evaluation errors.
//!
//! # Error Categories
//!
//! - **Runtime errors**: the tree or its arithmetic cannot produce a value
//!   (division by zero, a malformed node, a stack that runs dry).
//!
//! - **Resource exceeded errors**: the evaluation stack would grow past its
//!   configured capacity.

use core::fmt;

use thiserror::Error;

use crate::parser::Span;

/// Evaluation error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExecutionError {
    #[error(transparent)]
    Runtime(#[from] RuntimeError),

    #[error(transparent)]
    ResourceExceeded(#[from] ResourceExceededError),
}

/// Which child of an operator node is absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => write!(f, "left"),
            Side::Right => write!(f, "right"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    #[error("Division by zero")]
    DivisionByZero { span: Span },

    /// Operator node with exactly one child.
    #[error("Operator '{op}' has no {side} operand")]
    MissingOperand { op: String, side: Side, span: Span },

    /// Operator node whose operator was never assigned.
    #[error("Operator node has no operator")]
    UnknownOperator { span: Span },

    #[error("Evaluation stack underflow")]
    StackUnderflow { span: Option<Span> },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResourceExceededError {
    #[error("Evaluation stack overflow: more than {capacity} intermediate values")]
    StackOverflow { capacity: usize, span: Option<Span> },
}

impl ExecutionError {
    pub fn span(&self) -> Option<&Span> {
        match self {
            ExecutionError::Runtime(e) => e.span(),
            ExecutionError::ResourceExceeded(e) => e.span(),
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ExecutionError::Runtime(e) => e.code(),
            ExecutionError::ResourceExceeded(e) => e.code(),
        }
    }
}

impl RuntimeError {
    pub fn span(&self) -> Option<&Span> {
        match self {
            RuntimeError::DivisionByZero { span }
            | RuntimeError::MissingOperand { span, .. }
            | RuntimeError::UnknownOperator { span } => Some(span),
            RuntimeError::StackUnderflow { span } => span.as_ref(),
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            RuntimeError::DivisionByZero { .. } => "R001",
            RuntimeError::MissingOperand { .. } => "R002",
            RuntimeError::UnknownOperator { .. } => "R003",
            RuntimeError::StackUnderflow { .. } => "R004",
        }
    }

    pub fn help(&self) -> Option<String> {
        match self {
            RuntimeError::DivisionByZero { .. } => {
                Some("The right operand of '/' evaluates to 0".to_string())
            }
            _ => None,
        }
    }
}

impl ResourceExceededError {
    pub fn span(&self) -> Option<&Span> {
        match self {
            ResourceExceededError::StackOverflow { span, .. } => span.as_ref(),
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ResourceExceededError::StackOverflow { .. } => "R005",
        }
    }
}
