// ============================================================================
// Calculator Factory
// Creates calculators with proper configuration
// ============================================================================

use crate::domain::CalculatorConfig;
use crate::engine::Calculator;
use crate::interfaces::EventHandler;
use std::sync::Arc;

// ============================================================================
// Factory Functions
// ============================================================================

/// Creates a calculator from configuration
///
/// # Arguments
/// * `config` - Calculator configuration
/// * `event_handler` - Event handler for evaluation events
///
/// # Returns
/// * `Result<Calculator, String>` - Configured calculator or error
///
/// # Example
/// ```
/// use calculator::prelude::*;
/// use calculator::engine::factory::create_from_config;
/// use std::sync::Arc;
///
/// let config = CalculatorConfig::new("pricing");
/// let calc = create_from_config(config, Arc::new(NoOpEventHandler)).unwrap();
/// assert_eq!(calc.add(5.0, 3.0), 8.0);
/// ```
pub fn create_from_config(
    config: CalculatorConfig,
    event_handler: Arc<dyn EventHandler>,
) -> Result<Calculator, String> {
    config.validate()?;

    tracing::debug!(
        calculator = %config.label,
        notify_events = config.notify_events,
        "creating calculator"
    );

    Ok(Calculator::from_config(config, event_handler))
}

// ============================================================================
// Builder Pattern
// ============================================================================

/// Builder for creating calculators with fluent API
///
/// # Example
/// ```
/// use calculator::prelude::*;
/// use calculator::engine::factory::CalculatorBuilder;
/// use std::sync::Arc;
///
/// let calc = CalculatorBuilder::new("audit")
///     .notify_events(true)
///     .build(Arc::new(LoggingEventHandler))
///     .unwrap();
///
/// assert_eq!(calc.label(), "audit");
/// assert!(calc.divide(5.0, 0.0).is_err());
/// ```
pub struct CalculatorBuilder {
    config: CalculatorConfig,
}

impl CalculatorBuilder {
    /// Create a new builder with the given label
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            config: CalculatorConfig::new(label),
        }
    }

    /// Enable or disable event notification
    pub fn notify_events(mut self, notify: bool) -> Self {
        self.config.notify_events = notify;
        self
    }

    /// Build the calculator
    pub fn build(self, event_handler: Arc<dyn EventHandler>) -> Result<Calculator, String> {
        create_from_config(self.config, event_handler)
    }

    /// Get the configuration without building (for inspection)
    pub fn get_config(&self) -> &CalculatorConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interfaces::NoOpEventHandler;

    #[test]
    fn test_create_from_config() {
        let config = CalculatorConfig::new("pricing");
        let calc = create_from_config(config, Arc::new(NoOpEventHandler)).unwrap();
        assert_eq!(calc.label(), "pricing");
        assert_eq!(calc.divide(6.0, 3.0), Ok(2.0));
    }

    #[test]
    fn test_create_rejects_invalid_config() {
        let config = CalculatorConfig::new("");
        let result = create_from_config(config, Arc::new(NoOpEventHandler));
        assert_eq!(result.unwrap_err(), "Label cannot be empty");
    }

    #[test]
    fn test_builder_pattern() {
        let calc = CalculatorBuilder::new("batch")
            .notify_events(false)
            .build(Arc::new(NoOpEventHandler))
            .unwrap();

        assert_eq!(calc.label(), "batch");
        assert!(!calc.notifies_events());
    }

    #[test]
    fn test_builder_inspection() {
        let builder = CalculatorBuilder::new("inspect").notify_events(false);
        assert_eq!(
            builder.get_config(),
            &CalculatorConfig::new("inspect").with_notify_events(false)
        );
    }
}
