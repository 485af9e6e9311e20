//! Single-owner allocator actor running on a dedicated OS thread.
//!
//! Alternative to sharing an [`Allocator`] behind its internal mutex: the
//! allocator (and its rotation cursor) is owned by exactly one thread, and
//! dispatch workers reach it through a request/response channel. Concurrent
//! callers serialize naturally in channel order.
//!
//! Shutdown is cooperative: [`AllocatorActor::shutdown`] (or dropping the
//! actor) signals the thread and joins it; outstanding handles then observe
//! [`ActorError::Closed`] instead of blocking forever.

use std::thread::{self, JoinHandle};

use crossbeam_channel::{bounded, select, unbounded, Receiver, Sender};
use tracing::{debug, error};

use crate::core::{AllocationResult, AllocationSnapshot, Allocator, TenantId};
use crate::runtime::ActorError;

/// Request depth before senders block; decisions are cheap, so a small
/// buffer is plenty.
const REQUEST_BUFFER: usize = 64;

struct AllocateRequest {
    active: Vec<TenantId>,
    previous: AllocationSnapshot,
    total_capacity: u32,
    reply: Sender<AllocationResult>,
}

/// Cloneable handle used by dispatch workers to request decisions.
#[derive(Clone)]
pub struct AllocatorHandle {
    tx: Sender<AllocateRequest>,
}

impl AllocatorHandle {
    /// Request an allocation decision, blocking until the actor replies.
    pub fn allocate(
        &self,
        active: Vec<TenantId>,
        previous: AllocationSnapshot,
        total_capacity: u32,
    ) -> Result<AllocationResult, ActorError> {
        let (reply_tx, reply_rx) = bounded(1);
        self.tx
            .send(AllocateRequest {
                active,
                previous,
                total_capacity,
                reply: reply_tx,
            })
            .map_err(|_| ActorError::Closed)?;
        reply_rx.recv().map_err(|_| ActorError::Closed)
    }
}

/// Owner of the actor thread; keep it alive as long as decisions are needed.
pub struct AllocatorActor {
    tx: Sender<AllocateRequest>,
    stop_tx: Option<Sender<()>>,
    join: Option<JoinHandle<()>>,
}

impl AllocatorActor {
    /// Spawn the actor thread around an allocator it will exclusively own.
    #[must_use]
    pub fn spawn(allocator: Allocator) -> Self {
        let (tx, rx) = unbounded::<AllocateRequest>();
        Self::start(allocator, tx, rx)
    }

    /// Spawn with a bounded request channel, applying backpressure to
    /// dispatch workers that outrun the actor.
    #[must_use]
    pub fn spawn_bounded(allocator: Allocator) -> Self {
        let (tx, rx) = bounded::<AllocateRequest>(REQUEST_BUFFER);
        Self::start(allocator, tx, rx)
    }

    fn start(allocator: Allocator, tx: Sender<AllocateRequest>, rx: Receiver<AllocateRequest>) -> Self {
        let (stop_tx, stop_rx) = bounded::<()>(0);
        let join = thread::Builder::new()
            .name("fairshare-allocator".into())
            .spawn(move || run_actor(&allocator, &rx, &stop_rx))
            .map_err(|e| error!("failed to spawn allocator actor: {e}"))
            .ok();
        Self {
            tx,
            stop_tx: Some(stop_tx),
            join,
        }
    }

    /// A new handle for a dispatch worker.
    #[must_use]
    pub fn handle(&self) -> AllocatorHandle {
        AllocatorHandle {
            tx: self.tx.clone(),
        }
    }

    /// Signal the actor thread and join it. Requests already queued are
    /// answered; handles used afterwards observe [`ActorError::Closed`].
    pub fn shutdown(mut self) {
        self.stop_and_join();
    }

    fn stop_and_join(&mut self) {
        // Dropping the stop sender disconnects the channel, which the actor
        // treats as the stop signal.
        self.stop_tx.take();
        if let Some(join) = self.join.take() {
            if join.join().is_err() {
                error!("allocator actor thread panicked");
            }
        }
    }
}

impl Drop for AllocatorActor {
    fn drop(&mut self) {
        self.stop_and_join();
    }
}

fn run_actor(allocator: &Allocator, rx: &Receiver<AllocateRequest>, stop_rx: &Receiver<()>) {
    debug!("allocator actor started");
    loop {
        // Drain pending requests before honoring a stop, so callers already
        // queued still receive their decision.
        select! {
            recv(rx) -> msg => match msg {
                Ok(req) => serve(allocator, &req),
                Err(_) => break,
            },
            recv(stop_rx) -> _ => {
                while let Ok(req) = rx.try_recv() {
                    serve(allocator, &req);
                }
                break;
            }
        }
    }
    debug!("allocator actor stopped");
}

fn serve(allocator: &Allocator, req: &AllocateRequest) {
    let result = allocator.allocate(&req.active, &req.previous, req.total_capacity);
    // A caller that gave up on its reply is not an actor failure.
    let _ = req.reply.send(result);
}
