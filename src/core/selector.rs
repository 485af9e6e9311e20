//! Round-robin selector with an identity-keyed rotation cursor.
//!
//! Strict round-robin with skip-if-full was chosen over "least loaded"
//! selection: once a tenant is granted a slot it cedes priority to every
//! other open tenant in circular order before being reconsidered, which caps
//! the worst-case wait for any continuously-open tenant at `n` rounds.
//! Lowest-occupancy selection gives no such guarantee.

use crate::core::model::{AllocationSnapshot, TenantId};

/// Stateful round-robin cursor over allocation snapshots.
///
/// The cursor is keyed by tenant identity, not by list index: the active
/// tenant list can grow, shrink, or reorder between rounds, so the previous
/// selection is re-located in the current snapshot on every call and the
/// scan falls back to position 0 when it is gone.
#[derive(Debug, Clone, Default)]
pub struct RoundRobinSelector {
    last_selected: Option<TenantId>,
}

impl RoundRobinSelector {
    /// Create a selector with no rotation history.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            last_selected: None,
        }
    }

    /// Tenant granted the most recent slot, if any.
    #[must_use]
    pub const fn last_selected(&self) -> Option<&TenantId> {
        self.last_selected.as_ref()
    }

    /// Pick the next open tenant in circular order, returning its index in
    /// `snapshot`.
    ///
    /// Scans at most `snapshot.len()` entries starting just after the last
    /// selected tenant's current position. Returns `None` when every tenant
    /// is saturated (or the snapshot is empty); in that case the cursor is
    /// left untouched so the next call retries from the same starting point.
    pub fn select_next(&mut self, snapshot: &AllocationSnapshot) -> Option<usize> {
        let n = snapshot.len();
        if n == 0 {
            return None;
        }

        let start = self
            .last_selected
            .as_ref()
            .and_then(|tenant| snapshot.position(tenant))
            .map_or(0, |pos| (pos + 1) % n);

        let queues = snapshot.queues();
        for step in 0..n {
            let idx = (start + step) % n;
            if queues[idx].is_open() {
                self.last_selected = Some(queues[idx].tenant.clone());
                return Some(idx);
            }
        }
        None
    }

    /// Forget the rotation history, restarting the scan at position 0.
    pub fn reset(&mut self) {
        self.last_selected = None;
    }
}
