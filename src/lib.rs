//! # Tenant Fairshare
//!
//! A fair-share, multi-tenant job-allocation scheduler for shared worker pools.
//!
//! This library answers exactly one question for a pool of limited execution
//! capacity shared by many tenants: **which tenant's pending work is admitted
//! next?** It never runs jobs itself; the job execution engine owns the worker
//! pool, the occupancy bookkeeping, and the job lifecycle, and calls into this
//! crate purely for the admission decision.
//!
//! ## Core Problem Solved
//!
//! Multi-tenant platforms share one fixed-capacity worker pool across an
//! ever-changing set of tenants:
//!
//! - **Fair-share quotas**: each tenant's slice of the pool must rebalance as
//!   tenants appear and disappear at runtime
//! - **No starvation**: every tenant with spare quota must get a turn before
//!   any tenant gets a second one
//! - **Tiny critical section**: the decision is called from several concurrent
//!   dispatch workers and must stay cheap and non-blocking
//!
//! ## Key Features
//!
//! - **Capacity planner**: pure, idempotent equal-share quota recompute with
//!   integer ceiling division (no floating point in fairness math)
//! - **Round-robin selector**: identity-keyed rotation cursor with
//!   skip-if-full, bounding any open tenant's wait at `n` decision rounds
//! - **Allocator facade**: one `allocate` call combining both, safe to share
//!   across dispatch threads behind a single small mutex
//! - **Actor runtimes**: optional single-owner thread (crossbeam) or tokio
//!   task (feature `tokio-runtime`) when callers prefer a channel over a lock
//!
//! ## Example
//!
//! ```rust,ignore
//! use tenant_fairshare::core::{AllocationSnapshot, Allocator, TenantId};
//!
//! let allocator = Allocator::new();
//! let tenants: Vec<TenantId> = vec!["acme".into(), "globex".into()];
//! let mut snapshot = AllocationSnapshot::default();
//!
//! // Dispatch loop owned by the job execution engine:
//! let result = allocator.allocate(&tenants, &snapshot, 16);
//! if let Some(tenant) = result.selected {
//!     // submit that tenant's next pending job; occupancy is updated
//!     // externally when the job actually starts or finishes
//! }
//! snapshot = result.snapshot;
//! ```
//!
//! For complete examples, see:
//! - `tests/allocation_test.rs` - Full integration tests
//! - `README.md` - Comprehensive documentation

#![deny(warnings)]
#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Core allocation model, capacity planner, selector, and facade.
pub mod core;
/// Configuration models for capacity and runtime selection.
pub mod config;
/// Builders to construct allocators from configuration.
pub mod builders;
/// Runtime adapters (actor thread, tokio task) and monitoring views.
pub mod runtime;
/// Shared utilities.
pub mod util;
