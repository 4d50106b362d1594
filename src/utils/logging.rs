// ============================================================================
// Logging Setup
// Installs a tracing subscriber for binaries, demos and benchmarks
// ============================================================================
//
// The library itself only emits events through `tracing`:
// - trace: every completed evaluation
// - debug: rejected divisions, calculator construction, LoggingEventHandler
//
// Consumers that do not install their own subscriber can call
// `init_logging` once at startup.

use tracing_subscriber::EnvFilter;

/// Default directive when `RUST_LOG` is not set
pub const DEFAULT_FILTER: &str = "calculator=info";

/// Install a global fmt subscriber.
///
/// `RUST_LOG` takes precedence; otherwise `filter` is used as the
/// directive (e.g. `"calculator=trace"`).
///
/// # Errors
/// Returns an error if `filter` is not a valid directive or a global
/// subscriber is already installed.
pub fn init_logging(filter: &str) -> Result<(), String> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(from_env) => from_env,
        Err(_) => EnvFilter::try_new(filter).map_err(|e| format!("invalid log filter: {e}"))?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .try_init()
        .map_err(|e| format!("failed to install subscriber: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_fails() {
        // The first call may race with other tests; only the outcome of a
        // repeated call is deterministic.
        let _ = init_logging(DEFAULT_FILTER);
        assert!(init_logging(DEFAULT_FILTER).is_err());
    }
}
