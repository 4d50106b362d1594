// ============================================================================
// Numeric Module
// Operand abstraction and error types for arithmetic evaluation
// ============================================================================
//
// This module provides:
// - Operand: trait over the native float types (f64, f32)
// - ArithmeticError: the division-by-zero error
// - ArithmeticResult: Result alias for fallible operations
//
// Design principles:
// - Native IEEE-754 semantics for add/subtract/multiply
// - Zero divisor rejected before dividing, never turned into infinity
// - No panics

mod errors;
mod operand;

pub use errors::{ArithmeticError, ArithmeticResult};
pub use operand::Operand;
