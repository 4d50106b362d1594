// ============================================================================
// Evaluation Domain Model
// ============================================================================

use super::Operation;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Record of one successful evaluation.
///
/// Operands and result are widened to `f64` regardless of the operand
/// type the evaluator was called with.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Evaluation {
    /// Operation that was applied
    pub operation: Operation,

    /// Left operand
    pub lhs: f64,

    /// Right operand
    pub rhs: f64,

    /// Computed value
    pub result: f64,
}

impl Evaluation {
    pub fn new(operation: Operation, lhs: f64, rhs: f64, result: f64) -> Self {
        Self {
            operation,
            lhs,
            rhs,
            result,
        }
    }
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} = {}",
            self.lhs,
            self.operation.symbol(),
            self.rhs,
            self.result
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let eval = Evaluation::new(Operation::Multiply, 5.0, 3.0, 15.0);
        assert_eq!(eval.to_string(), "5 * 3 = 15");

        let eval = Evaluation::new(Operation::Divide, 1.0, 4.0, 0.25);
        assert_eq!(eval.to_string(), "1 / 4 = 0.25");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_json_encoding() {
        let eval = Evaluation::new(Operation::Add, 5.0, 3.0, 8.0);
        let json = serde_json::to_string(&eval).unwrap();
        assert_eq!(
            json,
            r#"{"operation":"add","lhs":5.0,"rhs":3.0,"result":8.0}"#
        );

        let decoded: Evaluation = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, eval);
    }
}
