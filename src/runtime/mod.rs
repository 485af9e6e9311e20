//! Runtime adapters (actor thread, tokio task) and monitoring views.

pub mod api;
#[cfg(not(target_arch = "wasm32"))]
pub mod actor;
#[cfg(feature = "tokio-runtime")]
pub mod tokio_actor;

use thiserror::Error;

#[cfg(not(target_arch = "wasm32"))]
pub use actor::{AllocatorActor, AllocatorHandle};
pub use api::{health, quota_views, Health, QuotaView};
#[cfg(feature = "tokio-runtime")]
pub use tokio_actor::TokioAllocatorHandle;

/// Errors from talking to an allocator actor.
#[derive(Debug, Error)]
pub enum ActorError {
    /// The actor has shut down and no longer serves requests.
    #[error("allocator actor is closed")]
    Closed,
}
