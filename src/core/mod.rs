//! Core allocation model, capacity planner, selector, and facade.

pub mod allocator;
pub mod audit;
pub mod error;
pub mod model;
pub mod planner;
pub mod selector;

pub use allocator::Allocator;
pub use audit::{
    build_allocation_event, AllocationEvent, AllocationOutcome, AuditSink, InMemoryAuditSink,
};
pub use error::{AllocationError, AppResult};
pub use model::{AllocationResult, AllocationSnapshot, TenantId, TenantQueue};
pub use planner::{ceil_div, recompute};
pub use selector::RoundRobinSelector;
