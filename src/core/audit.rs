//! Audit sink for allocation decisions.
//!
//! Provides an in-memory bounded sink for tests and dev; operational
//! deployments can plug their own [`AuditSink`] to ship decisions elsewhere.

use std::collections::VecDeque;

use uuid::Uuid;

use crate::core::model::TenantId;
use crate::util::clock::now_ms;

/// What a single allocation round decided.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllocationOutcome {
    /// A tenant was granted the next execution slot.
    Grant,
    /// Tenants were active but all saturated; nothing admitted this round.
    Exhausted,
    /// No tenants were active at all.
    Idle,
}

/// Audit record for one allocation round.
#[derive(Debug, Clone)]
pub struct AllocationEvent {
    /// Event identifier.
    pub event_id: String,
    /// Selected tenant, when the outcome is a grant.
    pub tenant: Option<TenantId>,
    /// Round outcome.
    pub outcome: AllocationOutcome,
    /// Number of active tenants considered.
    pub active_tenants: usize,
    /// Quota in force for the round (equal for all tenants).
    pub max_size: u32,
    /// Timestamp milliseconds.
    pub created_at_ms: u128,
}

/// Audit sink abstraction.
pub trait AuditSink: Send {
    /// Record an audit event.
    fn record(&mut self, event: AllocationEvent);
}

/// In-memory audit sink for testing and dev.
pub struct InMemoryAuditSink {
    events: VecDeque<AllocationEvent>,
    max_events: usize,
}

impl InMemoryAuditSink {
    /// Create a new in-memory sink with a bounded buffer.
    #[must_use]
    pub fn new(max_events: usize) -> Self {
        Self {
            events: VecDeque::with_capacity(max_events),
            max_events,
        }
    }

    /// Retrieve a snapshot of stored events.
    #[must_use]
    pub fn events(&self) -> Vec<AllocationEvent> {
        self.events.iter().cloned().collect()
    }
}

impl AuditSink for InMemoryAuditSink {
    fn record(&mut self, event: AllocationEvent) {
        if self.events.len() >= self.max_events {
            self.events.pop_front();
        }
        self.events.push_back(event);
    }
}

/// Helper to build an audit event from decision context.
#[must_use]
pub fn build_allocation_event(
    tenant: Option<TenantId>,
    outcome: AllocationOutcome,
    active_tenants: usize,
    max_size: u32,
) -> AllocationEvent {
    AllocationEvent {
        event_id: Uuid::new_v4().to_string(),
        tenant,
        outcome,
        active_tenants,
        max_size,
        created_at_ms: now_ms(),
    }
}
