//! Postfix evaluator for frozen expression trees.
//!
//! The tree is walked left, right, self. Each operator node pops the values of
//! its operator children (right first, then left), applies its [`Statement`],
//! and pushes the result onto a bounded stack. The final answer is the single
//! value left on the stack.
//!
//! ## Design Principles
//!
//! - **Never panic**: overflow wraps, division by zero and malformed trees
//!   are reported as errors
//! - **Bounded**: the stack has a fixed capacity and refuses to grow past it
//!
//! ## Example
//!
//! ```
//! use bumpalo::Bump;
//! use shisoku_core::{evaluator, parser};
//!
//! let arena = Bump::new();
//! let parsed = parser::parse(&arena, "2 + 3 * 4").unwrap();
//! assert_eq!(evaluator::eval(parsed.expr).unwrap(), 14);
//! ```

mod error;
mod eval;
mod operators;


pub use error::{ExecutionError, ResourceExceededError, RuntimeError, Side};
pub use eval::Evaluator;
pub use operators::Statement;

use crate::parser::Expr;
use crate::stack::StackStats;

/// Evaluator configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluatorOptions {
    /// Maximum number of intermediate values held at once.
    ///
    /// Default: 20
    pub stack_capacity: usize,
}

impl Default for EvaluatorOptions {
    fn default() -> Self {
        Self { stack_capacity: 20 }
    }
}

/// Result of a successful evaluation together with its stack activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluation {
    pub value: i32,
    pub stats: StackStats,
}

/// Evaluate an expression tree with default options.
pub fn eval(expr: &Expr<'_>) -> Result<i32, ExecutionError> {
    eval_with_options(expr, &EvaluatorOptions::default())
}

/// Evaluate an expression tree with custom options.
pub fn eval_with_options(expr: &Expr<'_>, options: &EvaluatorOptions) -> Result<i32, ExecutionError> {
    eval_with_stats(expr, options).map(|evaluation| evaluation.value)
}

/// Evaluate an expression tree and report push/pop counts.
pub fn eval_with_stats(
    expr: &Expr<'_>,
    options: &EvaluatorOptions,
) -> Result<Evaluation, ExecutionError> {
    Evaluator::new(options, expr).eval()
}
