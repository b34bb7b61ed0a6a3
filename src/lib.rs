//! Shisoku - single-pass integer arithmetic
//!
//! # Overview
//!
//! Shisoku evaluates one-line integer expressions over `+ - * /`. The
//! expression tree is built while the input is scanned, with operator
//! precedence resolved by rotating the tree as each operator arrives; the
//! tree is then evaluated bottom-up on a bounded stack.
//!
//! - `*` and `/` bind tighter than `+` and `-`; equal precedence associates
//!   to the left
//! - a leading `-` negates the first operand (`-5` is built as `-1 * 5`)
//! - `/` truncates toward zero; overflow wraps
//! - spaces, tabs, line breaks and `=` are ignored
//!
//! # Quick Start
//!
//! ```
//! use bumpalo::Bump;
//! use shisoku::{Calculator, EngineOptions};
//!
//! let calculator = Calculator::new(EngineOptions::default());
//!
//! let arena = Bump::new();
//! let expr = calculator.compile(&arena, "2 + 3 * 4").unwrap();
//! assert_eq!(expr.infix(), "2 + 3 * 4");
//! assert_eq!(expr.postfix(), "2 3 4 * +");
//! assert_eq!(expr.run().unwrap(), 14);
//! ```
//!
//! For a single answer with default limits:
//!
//! ```
//! assert_eq!(shisoku::calculate("10 - 2 - 3").unwrap(), 5);
//! ```
//!
//! # Errors
//!
//! Every failure aborts the whole expression. Errors that point at the input
//! carry [`Diagnostic`]s that [`render_error`] prints with `ariadne`.

// Re-export public API from shisoku_core
pub use shisoku_core::api::{
    Calculator, Diagnostic, EngineOptions, Error, Expression, Severity, calculate,
};

pub use shisoku_core::evaluator::{Evaluation, EvaluatorOptions};
pub use shisoku_core::parser::{ParserOptions, Span};
pub use shisoku_core::stack::StackStats;
pub use shisoku_core::traversal;

mod error_renderer;

pub use error_renderer::{
    render_error, render_error_to, render_error_to_string, render_error_to_string_no_color,
};
