// ============================================================================
// Operation Domain Model
// ============================================================================

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The four binary operations supported by the evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    /// All operations, in declaration order
    pub const ALL: [Operation; 4] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
    ];

    /// Infix symbol (`+`, `-`, `*`, `/`)
    pub fn symbol(&self) -> char {
        match self {
            Operation::Add => '+',
            Operation::Subtract => '-',
            Operation::Multiply => '*',
            Operation::Divide => '/',
        }
    }

    /// Lowercase name, matching the evaluator method
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when an operation name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOperationError {
    input: String,
}

impl ParseOperationError {
    /// The rejected input
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl fmt::Display for ParseOperationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown operation: '{}'", self.input)
    }
}

impl std::error::Error for ParseOperationError {}

impl FromStr for Operation {
    type Err = ParseOperationError;

    /// Look up an operation by name or symbol.
    ///
    /// # Examples
    /// - "add" / "+" -> Add
    /// - "Divide" / "/" -> Divide
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Operation::ALL
            .into_iter()
            .find(|op| {
                op.name().eq_ignore_ascii_case(trimmed)
                    || trimmed.chars().eq(std::iter::once(op.symbol()))
            })
            .ok_or_else(|| ParseOperationError {
                input: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbols() {
        let symbols: String = Operation::ALL.iter().map(|op| op.symbol()).collect();
        assert_eq!(symbols, "+-*/");
    }

    #[test]
    fn test_display_and_parse() {
        for op in Operation::ALL {
            let parsed: Operation = op.to_string().parse().unwrap();
            assert_eq!(parsed, op);

            let by_symbol: Operation = op.symbol().to_string().parse().unwrap();
            assert_eq!(by_symbol, op);
        }
    }

    #[test]
    fn test_parse_is_case_insensitive_and_trims() {
        assert_eq!(" Multiply ".parse::<Operation>(), Ok(Operation::Multiply));
        assert_eq!("DIVIDE".parse::<Operation>(), Ok(Operation::Divide));
    }

    #[test]
    fn test_parse_unknown() {
        let err = "modulo".parse::<Operation>().unwrap_err();
        assert_eq!(err.input(), "modulo");
        assert_eq!(err.to_string(), "unknown operation: 'modulo'");

        assert!("".parse::<Operation>().is_err());
        assert!("++".parse::<Operation>().is_err());
    }
}
