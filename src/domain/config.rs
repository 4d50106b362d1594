// ============================================================================
// Calculator Configuration
// Instance-level settings for the arithmetic evaluator
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Label used when none is given
pub const DEFAULT_LABEL: &str = "calculator";

/// Configuration for creating a calculator.
///
/// Precision and units are not configurable; every operation uses the
/// native semantics of its operand type.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CalculatorConfig {
    /// Name of the instance, attached to log output
    pub label: String,

    /// Whether operation events are forwarded to the event handler
    pub notify_events: bool,
}

impl CalculatorConfig {
    /// Create a new configuration with the given label
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            notify_events: true,
        }
    }

    /// Builder method: Set the label
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Builder method: Enable or disable event notification
    pub fn with_notify_events(mut self, notify: bool) -> Self {
        self.notify_events = notify;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.label.trim().is_empty() {
            return Err("Label cannot be empty".to_string());
        }

        Ok(())
    }
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self::new(DEFAULT_LABEL)
    }
}
