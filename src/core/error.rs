//! Error types for allocator construction.
//!
//! The decision path itself never fails: empty tenant lists, saturated
//! tenants, and tenant churn are all ordinary [`AllocationResult`] outcomes.
//! Errors only exist at the configuration boundary.
//!
//! [`AllocationResult`]: crate::core::AllocationResult

use thiserror::Error;

/// Errors produced while validating or building an allocator.
#[derive(Debug, Error)]
pub enum AllocationError {
    /// Total capacity is out of range (negative, or too large for a quota).
    #[error("invalid total capacity: {0}")]
    InvalidCapacity(i64),
    /// Configuration is structurally invalid.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Application-facing result using anyhow for higher-level contexts.
pub type AppResult<T> = Result<T, anyhow::Error>;
