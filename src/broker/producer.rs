use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::mpsc;

use crate::broker::message::{Message, ProduceResult};
use crate::queue::Producer;
use crate::utils::cancel::CancelToken;
use crate::utils::error::{Error, Result};

/// Producer handle bound to one topic's inbound buffer.
///
/// Stateless beyond the channel and the topic name; clones of the handle,
/// and other handles for the same topic, all feed the same buffer.
pub struct TopicProducer {
    channel: mpsc::Sender<Message>,
    topic: String,
}

impl TopicProducer {
    pub(crate) fn new(channel: mpsc::Sender<Message>, topic: &str) -> Self {
        Self {
            channel,
            topic: topic.to_string(),
        }
    }
}

#[async_trait]
impl Producer for TopicProducer {
    async fn produce(&self, ctx: &CancelToken, mut message: Message) -> Result<ProduceResult> {
        // The handle owns the topic tag and the send timestamp; caller
        // values for both are overwritten.
        message.topic = self.topic.clone();
        message.timestamp = Utc::now().timestamp_millis();

        tokio::select! {
            cause = ctx.cancelled() => Err(Error::Cancelled(cause)),
            sent = self.channel.send(message) => match sent {
                Ok(()) => Ok(ProduceResult::default()),
                // The receiving half only drops when the dispatch task has
                // exited, i.e. after shutdown.
                Err(_) => Err(Error::TopicClosed {
                    topic: self.topic.clone(),
                }),
            },
        }
    }
}
