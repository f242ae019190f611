//! Per-topic state and the dispatch task.
//!
//! Concurrency notes:
//! - Each topic owns one bounded inbound channel and a growing set of
//!   outbound channels, one per consumer. The outbound set is appended to
//!   under the write lock by consumer registration and read by the dispatch
//!   task, which clones a snapshot under the read lock before each fan-out
//!   round. The lock is never held across an `await`.
//! - The dispatch task is the only reader of the inbound channel, so the
//!   arrival order it observes is the single delivery order every consumer
//!   sees. A full consumer buffer suspends the whole round: one slow
//!   consumer stalls delivery to every consumer of the topic. This is a
//!   deliberate simplicity trade-off, not a fairness guarantee.
//! - Outbound channels are never removed, even after the consumer handle is
//!   dropped. A push to a dropped buffer fails fast and is skipped; a live
//!   but undrained buffer blocks.

use std::sync::Arc;

use parking_lot::RwLock;
use tokio::sync::{mpsc, watch};
use tracing::debug;

use crate::broker::message::Message;

/// A named topic: one inbound buffer, many consumer buffers, one dispatch
/// task moving messages from the former to the latter in arrival order.
pub struct Topic {
    name: String,
    inbound: mpsc::Sender<Message>,
    outbound: RwLock<Vec<mpsc::Sender<Message>>>,
    shutdown: watch::Sender<bool>,
}

impl Topic {
    /// Creates the topic and starts its dispatch task.
    ///
    /// The task runs until [`close`](Self::close) is signalled; there is no
    /// other terminal state. Must be called from within a tokio runtime.
    pub fn spawn(name: &str, inbound_capacity: usize) -> Arc<Self> {
        let (inbound_tx, inbound_rx) = mpsc::channel(inbound_capacity);
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let topic = Arc::new(Self {
            name: name.to_string(),
            inbound: inbound_tx,
            outbound: RwLock::new(Vec::new()),
            shutdown: shutdown_tx,
        });
        tokio::spawn(Arc::clone(&topic).dispatch(inbound_rx, shutdown_rx));
        debug!(topic = %name, capacity = inbound_capacity, "topic created");
        topic
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The shared sending half of the inbound buffer. Every producer handle
    /// for this topic writes through a clone of it.
    pub(crate) fn inbound(&self) -> mpsc::Sender<Message> {
        self.inbound.clone()
    }

    /// Registers a new consumer buffer of the given capacity and returns
    /// its receiving half.
    ///
    /// The buffer only sees messages dispatched after this call returns;
    /// there is no replay. It stays registered for the lifetime of the
    /// topic; there is no unsubscribe.
    pub(crate) fn register_consumer(&self, capacity: usize) -> mpsc::Receiver<Message> {
        let (tx, rx) = mpsc::channel(capacity);
        self.outbound.write().push(tx);
        debug!(topic = %self.name, capacity, "consumer registered");
        rx
    }

    /// Signals the dispatch task to exit. Messages still sitting in the
    /// inbound buffer are discarded; messages already delivered to consumer
    /// buffers remain drainable. Idempotent.
    pub fn close(&self) {
        let _ = self.shutdown.send(true);
    }

    async fn dispatch(
        self: Arc<Self>,
        mut inbound: mpsc::Receiver<Message>,
        mut shutdown: watch::Receiver<bool>,
    ) {
        loop {
            let message = tokio::select! {
                _ = shutdown.changed() => break,
                received = inbound.recv() => match received {
                    Some(message) => message,
                    None => break,
                },
            };

            // Snapshot under the read lock, released before delivery, so
            // registration never races an in-flight fan-out round.
            let subscribers: Vec<mpsc::Sender<Message>> = self.outbound.read().clone();
            for subscriber in &subscribers {
                if subscriber.send(message.clone()).await.is_err() {
                    // Consumer handle dropped its receiver. The sender stays
                    // registered; only this delivery is skipped.
                    debug!(topic = %self.name, "skipping dropped consumer buffer");
                }
            }
        }
        debug!(topic = %self.name, "dispatch task stopped");
    }
}
