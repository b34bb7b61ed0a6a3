//! Public API for the calculator.
//!
//! # Example
//!
//! ```
//! use bumpalo::Bump;
//! use shisoku_core::api::{Calculator, EngineOptions};
//!
//! let calculator = Calculator::new(EngineOptions::default());
//!
//! let arena = Bump::new();
//! let expr = calculator.compile(&arena, "-5 + 3").unwrap();
//! assert_eq!(expr.infix(), "-1 * 5 + 3");
//! assert_eq!(expr.postfix(), "-1 5 * 3 +");
//! assert_eq!(expr.run().unwrap(), -2);
//! ```

pub mod engine;
pub mod error;
pub mod expression;
pub mod options;

pub use engine::{Calculator, calculate};
pub use error::{Diagnostic, Error, Severity};
pub use expression::Expression;
pub use options::EngineOptions;
