// ============================================================================
// Engine Module
// Contains the arithmetic evaluator and its construction helpers
// ============================================================================

mod calculator;

pub mod factory;

pub use calculator::Calculator;
pub use factory::{create_from_config, CalculatorBuilder};
