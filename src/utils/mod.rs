// ============================================================================
// Utilities Module
// Helper functions for consumers of the crate
// ============================================================================

#[cfg(feature = "logging")]
mod logging;

#[cfg(feature = "logging")]
pub use logging::{init_logging, DEFAULT_FILTER};
