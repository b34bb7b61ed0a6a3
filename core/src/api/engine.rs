//! The calculator engine.

use bumpalo::Bump;
use tracing::debug;

use super::{EngineOptions, Error, Expression};
use crate::parser;

/// Compiles arithmetic expressions into evaluable trees.
///
/// The calculator holds only its options; every compiled tree lives in the
/// arena passed to [`compile`](Self::compile).
///
/// # Example
///
/// ```
/// use bumpalo::Bump;
/// use shisoku_core::api::{Calculator, EngineOptions};
///
/// let calculator = Calculator::new(EngineOptions::default());
/// let arena = Bump::new();
/// let expr = calculator.compile(&arena, "2 + 3 * 4").unwrap();
/// assert_eq!(expr.postfix(), "2 3 4 * +");
/// assert_eq!(expr.run().unwrap(), 14);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    options: EngineOptions,
}

impl Calculator {
    pub fn new(options: EngineOptions) -> Self {
        Self { options }
    }

    /// Access the engine options.
    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    /// Scan `source` and build its expression tree in `arena`.
    ///
    /// # Errors
    ///
    /// - [`Error::Compilation`] for malformed input
    /// - [`Error::ResourceExceeded`] when the arena refuses a node
    pub fn compile<'a>(&self, arena: &'a Bump, source: &'a str) -> Result<Expression<'a>, Error> {
        let parsed = parser::parse_with_options(arena, source, &self.options.parser)?;
        debug!(
            operators = parsed.expr.operator_count(),
            tokens = parsed.token_count,
            "compiled expression"
        );
        Ok(Expression::new(parsed, self.options.evaluator.clone()))
    }
}

/// Evaluate one line with default options.
///
/// ```
/// assert_eq!(shisoku_core::api::calculate("10 - 2 - 3").unwrap(), 5);
/// assert!(shisoku_core::api::calculate("5 / 0").is_err());
/// ```
pub fn calculate(source: &str) -> Result<i32, Error> {
    let arena = Bump::new();
    Calculator::default().compile(&arena, source)?.run()
}
