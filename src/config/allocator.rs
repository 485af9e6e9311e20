//! Allocator configuration structures.

use serde::{Deserialize, Serialize};

use crate::core::AllocationError;

/// How the allocator is reached by dispatch workers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuntimeConfig {
    /// Shared instance guarded by its internal mutex.
    Shared,
    /// Single-owner OS thread reached through a request channel.
    ActorThread,
    /// Single-owner tokio task reached through a request channel.
    TokioActor,
}

/// Allocator configuration.
///
/// `total_capacity` is signed on purpose: a negative value is the one fatal
/// configuration error (rejected here, once, at the boundary) and must never
/// reach the decision path. Zero is valid and simply admits nothing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllocatorConfig {
    /// Total shared capacity of the worker pool.
    pub total_capacity: i64,
    /// Size of the bounded audit buffer; 0 disables auditing.
    #[serde(default)]
    pub audit_buffer: usize,
    /// Runtime adapter selection.
    pub runtime: RuntimeConfig,
}

impl Default for AllocatorConfig {
    fn default() -> Self {
        Self {
            total_capacity: default_capacity(),
            audit_buffer: 0,
            runtime: RuntimeConfig::Shared,
        }
    }
}

/// Default total capacity: one slot per available CPU.
#[must_use]
#[allow(clippy::cast_possible_wrap)]
pub fn default_capacity() -> i64 {
    num_cpus::get() as i64
}

impl AllocatorConfig {
    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), AllocationError> {
        if self.total_capacity < 0 || self.total_capacity > i64::from(u32::MAX) {
            return Err(AllocationError::InvalidCapacity(self.total_capacity));
        }
        Ok(())
    }

    /// The validated capacity as the unsigned value the planner consumes.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn capacity(&self) -> Result<u32, AllocationError> {
        self.validate()?;
        Ok(self.total_capacity as u32)
    }

    /// Parse allocator configuration from a JSON string and validate.
    pub fn from_json_str(input: &str) -> Result<Self, AllocationError> {
        let cfg: Self = serde_json::from_str(input)
            .map_err(|e| AllocationError::InvalidConfig(format!("parse error: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }
}
