use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::broker::message::Message;
use crate::queue::Consumer;
use crate::utils::cancel::CancelToken;
use crate::utils::error::{Error, Result};

/// Consumer handle owning one outbound buffer.
///
/// The buffer was registered with the topic when this handle was created
/// and receives every message dispatched from then on, in arrival order.
/// Dropping the handle closes the receiving half, but the topic keeps the
/// sending half registered: subscription is for the topic's lifetime.
pub struct TopicConsumer {
    topic: String,
    channel: mpsc::Receiver<Message>,
}

impl TopicConsumer {
    pub(crate) fn new(topic: &str, channel: mpsc::Receiver<Message>) -> Self {
        Self {
            topic: topic.to_string(),
            channel,
        }
    }
}

#[async_trait]
impl Consumer for TopicConsumer {
    async fn consume(&mut self, ctx: &CancelToken) -> Result<Message> {
        let received = tokio::select! {
            cause = ctx.cancelled() => return Err(Error::Cancelled(cause)),
            received = self.channel.recv() => received,
        };
        received.ok_or_else(|| Error::TopicClosed {
            topic: self.topic.clone(),
        })
    }

    fn stream(&mut self, ctx: &CancelToken) -> Result<&mut mpsc::Receiver<Message>> {
        if let Some(cause) = ctx.cause() {
            return Err(Error::Cancelled(cause));
        }
        Ok(&mut self.channel)
    }
}
