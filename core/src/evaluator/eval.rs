//! Core evaluation logic.

use tracing::debug;

use crate::{
    evaluator::{
        Evaluation, EvaluatorOptions, ExecutionError, ResourceExceededError,
        RuntimeError::{self, *},
        Side, Statement,
    },
    parser::{Expr, Span},
    stack::{Stack, StackError},
};

/// Post-order evaluator over a frozen expression tree.
///
/// Every operator node leaves exactly one value on the stack; operand
/// children are read directly and never pushed.
pub struct Evaluator<'a> {
    expr: &'a Expr<'a>,
    stack: Stack<i32>,
}

impl<'a> Evaluator<'a> {
    /// Create a new evaluator with the given options.
    pub fn new(options: &EvaluatorOptions, expr: &'a Expr<'a>) -> Self {
        Self {
            expr,
            stack: Stack::new(options.stack_capacity),
        }
    }

    /// Evaluate the whole tree, consuming the evaluator.
    pub fn eval(mut self) -> Result<Evaluation, ExecutionError> {
        if let Expr::Operand(literal) = self.expr {
            return Ok(Evaluation {
                value: literal.value,
                stats: self.stack.stats(),
            });
        }

        self.eval_node(self.expr)?;
        let value = self.pop(None)?;
        debug_assert!(self.stack.is_empty(), "stack not drained: {:?}", self.stack);

        Ok(Evaluation {
            value,
            stats: self.stack.stats(),
        })
    }

    /// Left, right, self, driven by an explicit work stack so that deep
    /// trees never exhaust the native stack.
    fn eval_node(&mut self, root: &'a Expr<'a>) -> Result<(), ExecutionError> {
        // (node, children already evaluated)
        let mut work = vec![(root, false)];

        while let Some((expr, evaluated)) = work.pop() {
            if expr.is_leaf() {
                continue;
            }
            let Expr::Operator {
                op,
                span,
                left,
                right,
            } = expr
            else {
                continue;
            };

            let (left, right) = match (left, right) {
                (Some(left), Some(right)) => (*left, *right),
                (None, _) => return Err(missing_operand(expr, Side::Left, span).into()),
                (_, None) => return Err(missing_operand(expr, Side::Right, span).into()),
            };
            let op = op.ok_or_else(|| UnknownOperator { span: span.clone() })?;

            if !evaluated {
                work.push((expr, true));
                work.push((right, false));
                work.push((left, false));
                continue;
            }

            // The right subtree finished last, so its value is on top.
            let rhs = self.operand(right, span)?;
            let lhs = self.operand(left, span)?;

            let statement = Statement { lhs, rhs, op };
            let value = statement.calc(span)?;
            debug!(lhs, op = op.symbol(), rhs, value, "calc");
            self.push(value, span)?;
        }
        Ok(())
    }

    fn operand(&mut self, child: &Expr<'_>, span: &Span) -> Result<i32, ExecutionError> {
        match child {
            Expr::Operand(literal) => Ok(literal.value),
            Expr::Operator { .. } => self.pop(Some(span)),
        }
    }

    fn push(&mut self, value: i32, span: &Span) -> Result<(), ExecutionError> {
        self.stack.push(value).map_err(|e| match e {
            StackError::Overflow { capacity } => ResourceExceededError::StackOverflow {
                capacity,
                span: Some(span.clone()),
            }
            .into(),
            StackError::Underflow => ExecutionError::from(StackUnderflow {
                span: Some(span.clone()),
            }),
        })?;
        debug!(value, depth = self.stack.len(), "push");
        Ok(())
    }

    fn pop(&mut self, span: Option<&Span>) -> Result<i32, ExecutionError> {
        let value = self.stack.pop().map_err(|_| StackUnderflow {
            span: span.cloned(),
        })?;
        debug!(value, depth = self.stack.len(), "pop");
        Ok(value)
    }
}

fn missing_operand(expr: &Expr<'_>, side: Side, span: &Span) -> RuntimeError {
    MissingOperand {
        op: expr.symbol().to_string(),
        side,
        span: span.clone(),
    }
}
