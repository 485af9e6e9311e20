//! Builders to construct allocators from configuration.

use crate::config::AllocatorConfig;
use crate::core::{AllocationError, Allocator, InMemoryAuditSink};

/// Build an allocator from validated configuration.
///
/// Returns the allocator together with the validated capacity the caller's
/// dispatch loop should pass on each round (until its configuration is
/// reloaded). An in-memory audit sink is attached when `audit_buffer > 0`.
pub fn build_allocator(cfg: &AllocatorConfig) -> Result<(Allocator, u32), AllocationError> {
    let capacity = cfg.capacity()?;

    let allocator = if cfg.audit_buffer > 0 {
        Allocator::new().with_audit(Box::new(InMemoryAuditSink::new(cfg.audit_buffer)))
    } else {
        Allocator::new()
    };

    Ok((allocator, capacity))
}
