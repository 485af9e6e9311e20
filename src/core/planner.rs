//! Capacity planner: equal-share quota recompute with occupancy carry-over.
//!
//! The planner is a pure function. It never holds state, never performs I/O,
//! and identical inputs always produce identical output, so it can be called
//! on every allocation round without coordination.

use std::collections::HashMap;

use crate::core::model::{AllocationSnapshot, TenantId, TenantQueue};

/// Integer ceiling division. Avoids floating point in fairness-sensitive
/// quota math: `(total + n - 1) / n`.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub const fn ceil_div(total: u32, n: u32) -> u32 {
    if n == 0 {
        0
    } else {
        // Widen so `total + n - 1` cannot overflow; the quotient fits in u32.
        ((total as u64 + n as u64 - 1) / n as u64) as u32
    }
}

/// Recompute the per-tenant snapshot for the current set of active tenants.
///
/// Every tenant gets the same quota `ceil(total_capacity / n)`. Tenants
/// already present in `previous` carry their `current_size` unchanged;
/// newly appearing tenants start at zero; tenants absent from `active` are
/// silently omitted (tenant churn needs no explicit deletion event).
///
/// With `total_capacity >= 1` and at least one tenant the quota is always
/// `>= 1`, so integer rounding alone never starves a tenant. With
/// `total_capacity == 0` every quota is zero and no admission is possible
/// this round.
#[must_use]
pub fn recompute(
    active: &[TenantId],
    previous: &AllocationSnapshot,
    total_capacity: u32,
) -> AllocationSnapshot {
    if active.is_empty() {
        return AllocationSnapshot::default();
    }

    #[allow(clippy::cast_possible_truncation)]
    let n = active.len() as u32;
    let max_size = ceil_div(total_capacity, n);

    // Identity lookup over the previous round's occupancy.
    let carried: HashMap<&TenantId, u32> = previous
        .iter()
        .map(|q| (&q.tenant, q.current_size))
        .collect();

    let queues = active
        .iter()
        .map(|tenant| {
            let current_size = carried.get(tenant).copied().unwrap_or(0);
            TenantQueue::new(tenant.clone(), current_size, max_size)
        })
        .collect();

    AllocationSnapshot::new(queues)
}
