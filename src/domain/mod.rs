// ============================================================================
// Domain Models Module
// Contains the value objects passed to and returned from the evaluator
// ============================================================================

pub mod config;
pub mod evaluation;
pub mod operation;

pub use config::CalculatorConfig;
pub use evaluation::Evaluation;
pub use operation::{Operation, ParseOperationError};
