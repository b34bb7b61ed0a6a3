//! Configuration options for the calculator.

use crate::evaluator::EvaluatorOptions;
use crate::parser::ParserOptions;

/// Configuration options for the [`Calculator`](super::Calculator).
///
/// # Example
///
/// ```
/// use shisoku_core::api::EngineOptions;
/// use shisoku_core::evaluator::EvaluatorOptions;
/// use shisoku_core::parser::ParserOptions;
///
/// let options = EngineOptions {
///     parser: ParserOptions {
///         max_token_digits: 6,
///         ..ParserOptions::default()
///     },
///     evaluator: EvaluatorOptions { stack_capacity: 8 },
/// };
/// assert_eq!(options.parser.max_tokens, 20);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EngineOptions {
    /// Scanning limits (digits per operand, tokens per expression).
    pub parser: ParserOptions,

    /// Evaluation limits (stack capacity).
    pub evaluator: EvaluatorOptions,
}
