// ============================================================================
// Event Handler Interface
// Defines the contract for observing evaluator activity
// ============================================================================

use crate::domain::{Evaluation, Operation};
use crate::numeric::ArithmeticError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Events emitted by the calculator
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum OperationEvent {
    /// Operation completed
    Evaluated(Evaluation),

    /// Operation rejected with an error
    Rejected {
        operation: Operation,
        lhs: f64,
        rhs: f64,
        error: ArithmeticError,
    },
}

impl OperationEvent {
    /// The operation this event refers to
    pub fn operation(&self) -> Operation {
        match self {
            OperationEvent::Evaluated(eval) => eval.operation,
            OperationEvent::Rejected { operation, .. } => *operation,
        }
    }
}

/// Event handler trait for observing calculator events.
/// Implementations can handle logging, metrics, auditing, etc.
/// Handlers never influence results.
pub trait EventHandler: Send + Sync {
    /// Handle an operation event
    fn on_event(&self, event: OperationEvent);

    /// Batch event handler (optional optimization)
    fn on_events(&self, events: Vec<OperationEvent>) {
        for event in events {
            self.on_event(event);
        }
    }
}

/// No-op event handler, the default
pub struct NoOpEventHandler;

impl EventHandler for NoOpEventHandler {
    fn on_event(&self, _event: OperationEvent) {}
}

/// Logging event handler
pub struct LoggingEventHandler;

impl EventHandler for LoggingEventHandler {
    fn on_event(&self, event: OperationEvent) {
        tracing::debug!("Calculator event: {:?}", event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct Recording(Mutex<Vec<OperationEvent>>);

    impl EventHandler for Recording {
        fn on_event(&self, event: OperationEvent) {
            self.0.lock().unwrap().push(event);
        }
    }

    #[test]
    fn test_noop_handler() {
        let handler = NoOpEventHandler;
        handler.on_event(OperationEvent::Evaluated(Evaluation::new(
            Operation::Add,
            1.0,
            2.0,
            3.0,
        )));
        // Should not panic
    }

    #[test]
    fn test_logging_handler() {
        let handler = LoggingEventHandler;
        handler.on_event(OperationEvent::Rejected {
            operation: Operation::Divide,
            lhs: 5.0,
            rhs: 0.0,
            error: ArithmeticError::DivisionByZero,
        });
    }

    #[test]
    fn test_default_batch_forwards_each_event() {
        let handler = Recording(Mutex::new(Vec::new()));
        handler.on_events(vec![
            OperationEvent::Evaluated(Evaluation::new(Operation::Add, 1.0, 1.0, 2.0)),
            OperationEvent::Rejected {
                operation: Operation::Divide,
                lhs: 1.0,
                rhs: 0.0,
                error: ArithmeticError::DivisionByZero,
            },
        ]);

        let events = handler.0.lock().unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].operation(), Operation::Add);
        assert_eq!(events[1].operation(), Operation::Divide);
    }
}
