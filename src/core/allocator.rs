//! Allocator facade combining the capacity planner and round-robin selector.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::core::audit::{build_allocation_event, AllocationOutcome, AuditSink};
use crate::core::model::{AllocationResult, AllocationSnapshot, TenantId};
use crate::core::planner;
use crate::core::selector::RoundRobinSelector;

/// Fair-share allocation decision point for one shared worker pool.
///
/// The only shared mutable state is the selector's rotation cursor, guarded
/// by a `parking_lot::Mutex` so that concurrent dispatch workers serialize
/// the read-modify-write of the cursor and can never double-select the same
/// just-vacated slot. The critical section is O(n) in the number of active
/// tenants and performs no I/O, so the call never blocks or suspends.
///
/// Do not share one global allocator across unrelated pools; create one
/// instance per pool and inject it into the dispatch workers that serve it.
pub struct Allocator {
    selector: Mutex<RoundRobinSelector>,
    audit: Option<Arc<Mutex<Box<dyn AuditSink>>>>,
}

impl Default for Allocator {
    fn default() -> Self {
        Self::new()
    }
}

impl Allocator {
    /// Create an allocator with a fresh rotation cursor.
    #[must_use]
    pub fn new() -> Self {
        Self {
            selector: Mutex::new(RoundRobinSelector::new()),
            audit: None,
        }
    }

    /// Attach an audit sink recording one event per allocation round.
    #[must_use]
    pub fn with_audit(mut self, audit: Box<dyn AuditSink>) -> Self {
        self.audit = Some(Arc::new(Mutex::new(audit)));
        self
    }

    /// Decide which tenant's pending work is admitted next.
    ///
    /// Recomputes the per-tenant quotas for the current `active` set (carrying
    /// occupancy from `previous`), then picks the next open tenant in circular
    /// order. Empty tenant lists and all-tenants-full are ordinary outcomes
    /// with `selected: None`, never errors; callers receiving no selection
    /// should apply their own backoff before retrying.
    ///
    /// The returned snapshot is meant to be cached by the caller (e.g. for
    /// monitoring) and passed back, with fresh occupancy counts, on the next
    /// round. The allocator never mutates `current_size`.
    pub fn allocate(
        &self,
        active: &[TenantId],
        previous: &AllocationSnapshot,
        total_capacity: u32,
    ) -> AllocationResult {
        let snapshot = planner::recompute(active, previous, total_capacity);

        let selected = {
            let mut selector = self.selector.lock();
            selector
                .select_next(&snapshot)
                .map(|idx| snapshot.queues()[idx].tenant.clone())
        };

        match &selected {
            Some(tenant) => {
                tracing::debug!(%tenant, tenants = snapshot.len(), "slot granted");
            }
            None if snapshot.is_empty() => {
                tracing::trace!("no active tenants, nothing to allocate");
            }
            None => {
                tracing::debug!(tenants = snapshot.len(), "all tenants saturated");
            }
        }

        self.record_audit(&selected, &snapshot);

        AllocationResult { selected, snapshot }
    }

    /// Forget the rotation history, restarting the scan at position 0.
    pub fn reset_cursor(&self) {
        self.selector.lock().reset();
    }

    fn record_audit(&self, selected: &Option<TenantId>, snapshot: &AllocationSnapshot) {
        if let Some(audit_sink) = &self.audit {
            let outcome = match selected {
                Some(_) => AllocationOutcome::Grant,
                None if snapshot.is_empty() => AllocationOutcome::Idle,
                None => AllocationOutcome::Exhausted,
            };
            let max_size = snapshot.queues().first().map_or(0, |q| q.max_size);
            let mut sink = audit_sink.lock();
            sink.record(build_allocation_event(
                selected.clone(),
                outcome,
                snapshot.len(),
                max_size,
            ));
        }
    }
}
