//! Single-pass integer arithmetic.
//!
//! Expressions over `+ - * /` and decimal integers are turned into a binary
//! tree while they are scanned, then evaluated bottom-up on a bounded stack.
//!
//! ```
//! use shisoku_core::api::calculate;
//!
//! assert_eq!(calculate("2 + 3 * 4").unwrap(), 14);
//! assert_eq!(calculate("-7 / 2").unwrap(), -3);
//! ```

pub mod api;
pub mod evaluator;
pub mod parser;
pub mod stack;
pub mod traversal;

/// Test utilities for enabling logging in tests
#[cfg(test)]
pub mod test_utils {
    /// Initialize tracing subscriber for tests with DEBUG level
    /// Call this at the start of tests where you want to see logging output
    ///
    /// # Example
    /// ```ignore
    /// #[test]
    /// fn test_rotation() {
    ///     test_utils::init_test_logging();
    ///     // ... your test code
    /// }
    /// ```
    pub fn init_test_logging() {
        use tracing_subscriber::{EnvFilter, fmt};

        // Try to initialize, ignore error if already initialized
        let _ = fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
            )
            .with_test_writer()
            .try_init();
    }
}
