//! Data model for allocation decisions.
//!
//! The model is deliberately small: a tenant identifier, one per-tenant queue
//! descriptor, an ordered snapshot of those descriptors, and the result of a
//! single allocation round. All of it is serializable so admin/monitoring
//! surfaces can expose the recomputed quotas read-only.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque unique identifier of a tenant competing for shared capacity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TenantId(String);

impl TenantId {
    /// Create a tenant id from anything string-like.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TenantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TenantId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for TenantId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Per-tenant admission state for one allocation round.
///
/// `current_size` is owned by the external job executor and is only ever read
/// here; `max_size` is recomputed by the capacity planner on every round.
/// The quota is a soft cap: `current_size` may transiently exceed `max_size`
/// and is never clamped by the scheduler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TenantQueue {
    /// Owning tenant.
    pub tenant: TenantId,
    /// Jobs presently in flight for this tenant (caller-supplied).
    pub current_size: u32,
    /// This round's fair-share quota.
    pub max_size: u32,
}

impl TenantQueue {
    /// Create a queue descriptor.
    #[must_use]
    pub const fn new(tenant: TenantId, current_size: u32, max_size: u32) -> Self {
        Self {
            tenant,
            current_size,
            max_size,
        }
    }

    /// Whether the tenant can still be admitted this round.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.current_size < self.max_size
    }

    /// Whether the tenant has reached (or overshot) its quota.
    #[must_use]
    pub const fn is_full(&self) -> bool {
        !self.is_open()
    }
}

/// Ordered sequence of [`TenantQueue`], one per active tenant, in the
/// canonical order supplied by the tenant registry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AllocationSnapshot {
    queues: Vec<TenantQueue>,
}

impl AllocationSnapshot {
    /// Build a snapshot from queue descriptors, preserving order.
    #[must_use]
    pub const fn new(queues: Vec<TenantQueue>) -> Self {
        Self { queues }
    }

    /// Number of active tenants in this snapshot.
    #[must_use]
    pub fn len(&self) -> usize {
        self.queues.len()
    }

    /// Whether the snapshot holds no tenants at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queues.is_empty()
    }

    /// Iterate over queues in canonical order.
    pub fn iter(&self) -> std::slice::Iter<'_, TenantQueue> {
        self.queues.iter()
    }

    /// Queue descriptors in canonical order.
    #[must_use]
    pub fn queues(&self) -> &[TenantQueue] {
        &self.queues
    }

    /// Look up a tenant's queue by identity.
    #[must_use]
    pub fn get(&self, tenant: &TenantId) -> Option<&TenantQueue> {
        self.queues.iter().find(|q| &q.tenant == tenant)
    }

    /// Position of a tenant in the canonical order, if present.
    #[must_use]
    pub fn position(&self, tenant: &TenantId) -> Option<usize> {
        self.queues.iter().position(|q| &q.tenant == tenant)
    }
}

impl<'a> IntoIterator for &'a AllocationSnapshot {
    type Item = &'a TenantQueue;
    type IntoIter = std::slice::Iter<'a, TenantQueue>;

    fn into_iter(self) -> Self::IntoIter {
        self.queues.iter()
    }
}

impl From<Vec<TenantQueue>> for AllocationSnapshot {
    fn from(queues: Vec<TenantQueue>) -> Self {
        Self::new(queues)
    }
}

/// Outcome of one allocation round.
///
/// `selected` is `None` both when no tenants are active and when every
/// active tenant is saturated; neither case is an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationResult {
    /// Tenant that should receive the next execution slot, if any is open.
    pub selected: Option<TenantId>,
    /// The recomputed snapshot, to be cached by the caller and fed back in
    /// (with fresh occupancy) on the next round.
    pub snapshot: AllocationSnapshot,
}
