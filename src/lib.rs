// ============================================================================
// Calculator Library
// Stateless arithmetic evaluator with the four basic operations
// ============================================================================

//! # Calculator
//!
//! A minimal arithmetic evaluator: addition, subtraction, multiplication
//! and division of two operands.
//!
//! ## Features
//!
//! - **Pure operations** with no state carried between calls
//! - **Native float semantics** for `f64` and `f32` operands (NaN and
//!   infinity propagate)
//! - **Explicit division-by-zero error** checked before dividing
//! - **Optional event handler** for auditing evaluations
//!
//! ## Example
//!
//! ```rust
//! use calculator::prelude::*;
//!
//! let calc = Calculator::new();
//!
//! assert_eq!(calc.add(5.0, 3.0), 8.0);
//! assert_eq!(calc.subtract(5.0, 3.0), 2.0);
//! assert_eq!(calc.multiply(5.0, 3.0), 15.0);
//! assert_eq!(calc.divide(6.0, 3.0), Ok(2.0));
//! assert_eq!(calc.divide(5.0, 0.0), Err(ArithmeticError::DivisionByZero));
//!
//! // Dispatch by operation name
//! let op: Operation = "multiply".parse().unwrap();
//! assert_eq!(calc.evaluate(op, 2.5, 4.0), Ok(10.0));
//! ```

pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeric;
pub mod utils;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{CalculatorConfig, Evaluation, Operation, ParseOperationError};
    pub use crate::engine::{create_from_config, Calculator, CalculatorBuilder};
    pub use crate::interfaces::{
        EventHandler, LoggingEventHandler, NoOpEventHandler, OperationEvent,
    };
    pub use crate::numeric::{ArithmeticError, ArithmeticResult, Operand};
}
