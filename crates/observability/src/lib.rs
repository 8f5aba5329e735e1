//! Process-wide tracing setup shared by the Katla binaries.

/// Tracing subscriber configuration (filter + JSON formatter).
pub mod tracing;

/// Initialize structured logging for the process.
///
/// Safe to call multiple times; subsequent calls are no-ops.
pub fn init() {
    let _ = tracing::init();
}
