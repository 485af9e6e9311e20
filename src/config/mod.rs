//! Configuration models for capacity and runtime selection.

pub mod allocator;

pub use allocator::{default_capacity, AllocatorConfig, RuntimeConfig};
