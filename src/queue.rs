//! The abstract messaging interface.
//!
//! These traits are the boundary between callers and whatever backs the
//! queue. `broker::MemoryQueue` is the in-process reference implementation;
//! a transport-backed implementation would plug in behind the same traits
//! without callers changing.

use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::broker::message::{Message, ProduceResult};
use crate::utils::cancel::CancelToken;
use crate::utils::error::Result;

/// Sending half of a topic. Obtained from [`MessageQueue::producer`].
///
/// Many producers for the same topic may coexist; they all feed the same
/// inbound buffer and their messages interleave in arrival order.
#[async_trait]
pub trait Producer: Send + Sync {
    /// Publishes one message to the bound topic.
    ///
    /// Suspends while the topic's inbound buffer is full. Resolves with an
    /// empty [`ProduceResult`] once the message is enqueued, or with
    /// `Error::Cancelled` if `ctx` fires first, in which case the message
    /// was not enqueued at all.
    async fn produce(&self, ctx: &CancelToken, message: Message) -> Result<ProduceResult>;
}

/// Receiving half of one subscription. Obtained from [`MessageQueue::consumer`].
///
/// Each consumer owns a private buffer registered at subscription time;
/// two consumers of the same topic never share delivery state.
#[async_trait]
pub trait Consumer: Send {
    /// Receives the next message from the bound buffer.
    ///
    /// Suspends while the buffer is empty. Fails with `Error::Cancelled`
    /// if `ctx` fires first; the buffer is left untouched.
    async fn consume(&mut self, ctx: &CancelToken) -> Result<Message>;

    /// Exposes the raw receiving half of the buffer so the caller can
    /// multiplex over it directly (for example with `tokio::select!`).
    ///
    /// Fails with `Error::Cancelled` if `ctx` has already fired at call
    /// time. No further cancellation checking happens inside the stream;
    /// mid-stream cancellation is the caller's responsibility.
    fn stream(&mut self, ctx: &CancelToken) -> Result<&mut mpsc::Receiver<Message>>;
}

/// A registry of named topics handing out producer and consumer handles.
pub trait MessageQueue: Send + Sync {
    /// Returns a producer for `topic`, creating the topic on first reference.
    fn producer(&self, topic: &str) -> Box<dyn Producer>;

    /// Returns a consumer for `topic` with the default buffer capacity,
    /// creating the topic on first reference. Every call registers a fresh
    /// buffer, even for the same topic.
    fn consumer(&self, topic: &str) -> Box<dyn Consumer>;
}
