//! Compiled expressions.

use super::Error;
use crate::evaluator::{self, Evaluation, EvaluatorOptions};
use crate::parser::{Expr, ParsedExpr};
use crate::traversal;

/// A compiled expression ready for rendering and evaluation.
///
/// Evaluation does not modify the tree, so an expression can be run any
/// number of times with the same result.
#[derive(Debug)]
pub struct Expression<'a> {
    parsed: ParsedExpr<'a>,
    options: EvaluatorOptions,
}

impl<'a> Expression<'a> {
    pub(crate) fn new(parsed: ParsedExpr<'a>, options: EvaluatorOptions) -> Self {
        Self { parsed, options }
    }

    /// The source this expression was compiled from.
    pub fn source(&self) -> &'a str {
        self.parsed.source
    }

    /// Root of the frozen tree.
    pub fn expr(&self) -> &'a Expr<'a> {
        self.parsed.expr
    }

    /// Number of operand and operator tokens in the source.
    pub fn token_count(&self) -> usize {
        self.parsed.token_count
    }

    /// Space-separated infix form, e.g. `-1 * 5 + 3`.
    pub fn infix(&self) -> String {
        traversal::render_infix(self.parsed.expr)
    }

    /// Space-separated postfix form, e.g. `-1 5 * 3 +`.
    pub fn postfix(&self) -> String {
        traversal::render_postfix(self.parsed.expr)
    }

    pub fn run(&self) -> Result<i32, Error> {
        self.run_with_stats().map(|evaluation| evaluation.value)
    }

    /// Like [`run`](Self::run), also reporting push/pop counts.
    pub fn run_with_stats(&self) -> Result<Evaluation, Error> {
        evaluator::eval_with_stats(self.parsed.expr, &self.options)
            .map_err(|e| Error::from_execution(e, self.parsed.source))
    }
}
