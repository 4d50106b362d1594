// ============================================================================
// Calculator
// Core arithmetic evaluator
// ============================================================================

use crate::domain::{CalculatorConfig, Evaluation, Operation};
use crate::interfaces::{EventHandler, NoOpEventHandler, OperationEvent};
use crate::numeric::{ArithmeticError, ArithmeticResult, Operand};
use std::fmt;
use std::sync::Arc;

/// Stateless arithmetic evaluator.
///
/// Every operation is pure: the result depends only on the operands, and
/// no state is read or written between calls. The calculator is `Send +
/// Sync` and can be shared across threads without coordination.
///
/// Addition, subtraction and multiplication follow IEEE-754 semantics of
/// the operand type. Division checks the divisor against zero first and
/// fails with [`ArithmeticError::DivisionByZero`] instead of producing an
/// infinity.
#[derive(Clone)]
pub struct Calculator {
    /// Instance name, attached to log output
    label: Arc<str>,

    /// Whether events are forwarded to the handler
    notify_events: bool,

    /// Observer for evaluation events
    event_handler: Arc<dyn EventHandler>,
}

impl Calculator {
    /// Create a calculator with the default label and a no-op handler
    pub fn new() -> Self {
        Self::from_config(CalculatorConfig::default(), Arc::new(NoOpEventHandler))
    }

    /// Create a calculator that reports to the given event handler
    pub fn with_event_handler(event_handler: Arc<dyn EventHandler>) -> Self {
        Self::from_config(CalculatorConfig::default(), event_handler)
    }

    /// Build from an already validated configuration
    pub(crate) fn from_config(
        config: CalculatorConfig,
        event_handler: Arc<dyn EventHandler>,
    ) -> Self {
        Self {
            label: Arc::from(config.label),
            notify_events: config.notify_events,
            event_handler,
        }
    }

    /// Get the instance label
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Whether events are forwarded to the handler
    pub fn notifies_events(&self) -> bool {
        self.notify_events
    }

    // ========================================================================
    // Operations
    // ========================================================================

    /// Returns `a + b`.
    #[inline]
    pub fn add<T: Operand>(&self, a: T, b: T) -> T {
        let result = a + b;
        self.evaluated(Operation::Add, a, b, result);
        result
    }

    /// Returns `a - b`.
    #[inline]
    pub fn subtract<T: Operand>(&self, a: T, b: T) -> T {
        let result = a - b;
        self.evaluated(Operation::Subtract, a, b, result);
        result
    }

    /// Returns `a * b`.
    #[inline]
    pub fn multiply<T: Operand>(&self, a: T, b: T) -> T {
        let result = a * b;
        self.evaluated(Operation::Multiply, a, b, result);
        result
    }

    /// Returns `a / b`.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if `b` is `+0.0` or `-0.0`. A NaN divisor
    /// is not zero and yields NaN.
    #[inline]
    pub fn divide<T: Operand>(&self, a: T, b: T) -> ArithmeticResult<T> {
        if b.is_zero() {
            tracing::debug!(
                calculator = %self.label,
                dividend = %a,
                "rejected division by zero"
            );
            self.notify(|| OperationEvent::Rejected {
                operation: Operation::Divide,
                lhs: a.to_f64(),
                rhs: b.to_f64(),
                error: ArithmeticError::DivisionByZero,
            });
            return Err(ArithmeticError::DivisionByZero);
        }

        let result = a / b;
        self.evaluated(Operation::Divide, a, b, result);
        Ok(result)
    }

    /// Apply `operation` to the operands.
    ///
    /// # Errors
    /// Only `Operation::Divide` can fail, see [`Calculator::divide`].
    pub fn evaluate<T: Operand>(&self, operation: Operation, a: T, b: T) -> ArithmeticResult<T> {
        match operation {
            Operation::Add => Ok(self.add(a, b)),
            Operation::Subtract => Ok(self.subtract(a, b)),
            Operation::Multiply => Ok(self.multiply(a, b)),
            Operation::Divide => self.divide(a, b),
        }
    }

    /// Apply `operation` and describe the call as an [`Evaluation`].
    pub fn evaluate_record<T: Operand>(
        &self,
        operation: Operation,
        a: T,
        b: T,
    ) -> ArithmeticResult<Evaluation> {
        let result = self.evaluate(operation, a, b)?;
        Ok(Evaluation::new(
            operation,
            a.to_f64(),
            b.to_f64(),
            result.to_f64(),
        ))
    }

    // ========================================================================
    // Internal Helpers
    // ========================================================================

    fn evaluated<T: Operand>(&self, operation: Operation, a: T, b: T, result: T) {
        tracing::trace!(
            calculator = %self.label,
            operand_type = T::type_name(),
            "{} {} {} = {}",
            a,
            operation.symbol(),
            b,
            result
        );
        self.notify(|| {
            OperationEvent::Evaluated(Evaluation::new(
                operation,
                a.to_f64(),
                b.to_f64(),
                result.to_f64(),
            ))
        });
    }

    fn notify(&self, event: impl FnOnce() -> OperationEvent) {
        if self.notify_events {
            self.event_handler.on_event(event());
        }
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Calculator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Calculator")
            .field("label", &self.label)
            .field("notify_events", &self.notify_events)
            .finish_non_exhaustive()
    }
}
