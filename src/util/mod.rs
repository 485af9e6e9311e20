//! Shared utilities.

/// Wall-clock helpers.
pub mod clock;
/// Telemetry helpers.
pub mod telemetry;

pub use clock::now_ms;
pub use telemetry::init_tracing;
