//! Monitoring-facing view models (read-only).
//!
//! The allocator itself has no wire surface; these rows exist so an
//! administration endpoint elsewhere can expose the recomputed quotas for
//! operational visibility into fairness.

use serde::{Deserialize, Serialize};

use crate::core::AllocationSnapshot;

/// One tenant's quota/occupancy row for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuotaView {
    /// Tenant identifier.
    pub tenant: String,
    /// Jobs currently in flight.
    pub current_size: u32,
    /// Fair-share quota this round.
    pub max_size: u32,
    /// Whether the tenant can still be admitted.
    pub open: bool,
}

/// Health response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Health {
    /// Healthy flag.
    pub ok: bool,
}

/// Build quota listings from the latest cached snapshot.
#[must_use]
pub fn quota_views(snapshot: &AllocationSnapshot) -> Vec<QuotaView> {
    snapshot
        .iter()
        .map(|q| QuotaView {
            tenant: q.tenant.to_string(),
            current_size: q.current_size,
            max_size: q.max_size,
            open: q.is_open(),
        })
        .collect()
}

/// Return a health payload.
#[must_use]
pub const fn health() -> Health {
    Health { ok: true }
}
