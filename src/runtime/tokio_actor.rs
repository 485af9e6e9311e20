//! Single-owner allocator actor running as a tokio task.
//!
//! Async counterpart of [`actor`](super::actor): the allocator is owned by
//! one spawned task and async dispatch workers reach it through an mpsc
//! channel with oneshot replies. The task exits when every handle is dropped.

use tokio::sync::{mpsc, oneshot};
use tracing::debug;

use crate::core::{AllocationResult, AllocationSnapshot, Allocator, TenantId};
use crate::runtime::ActorError;

const REQUEST_BUFFER: usize = 64;

struct AllocateRequest {
    active: Vec<TenantId>,
    previous: AllocationSnapshot,
    total_capacity: u32,
    reply: oneshot::Sender<AllocationResult>,
}

/// Cloneable async handle used by dispatch workers to request decisions.
#[derive(Clone)]
pub struct TokioAllocatorHandle {
    tx: mpsc::Sender<AllocateRequest>,
}

impl TokioAllocatorHandle {
    /// Spawn the actor task on the current tokio runtime and return a handle.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime, as `tokio::spawn` does.
    #[must_use]
    pub fn spawn(allocator: Allocator) -> Self {
        let (tx, mut rx) = mpsc::channel::<AllocateRequest>(REQUEST_BUFFER);
        tokio::spawn(async move {
            debug!("allocator actor task started");
            while let Some(req) = rx.recv().await {
                let result = allocator.allocate(&req.active, &req.previous, req.total_capacity);
                let _ = req.reply.send(result);
            }
            debug!("allocator actor task stopped");
        });
        Self { tx }
    }

    /// Request an allocation decision.
    ///
    /// The decision itself never suspends; only the channel hop is awaited.
    pub async fn allocate(
        &self,
        active: Vec<TenantId>,
        previous: AllocationSnapshot,
        total_capacity: u32,
    ) -> Result<AllocationResult, ActorError> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.tx
            .send(AllocateRequest {
                active,
                previous,
                total_capacity,
                reply: reply_tx,
            })
            .await
            .map_err(|_| ActorError::Closed)?;
        reply_rx.await.map_err(|_| ActorError::Closed)
    }
}
