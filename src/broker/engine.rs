use std::sync::Arc;

use dashmap::DashMap;
use tracing::debug;

use crate::broker::consumer::TopicConsumer;
use crate::broker::producer::TopicProducer;
use crate::broker::topic::Topic;
use crate::config::BrokerSettings;
use crate::queue::{Consumer, MessageQueue, Producer};

/// Inbound buffer capacity a topic gets unless configured otherwise.
pub const DEFAULT_INBOUND_CAPACITY: usize = 1000;

/// Buffer capacity a consumer gets unless the caller picks one.
pub const DEFAULT_CONSUMER_CAPACITY: usize = 10;

/// The in-memory topic registry behind the [`MessageQueue`] interface.
///
/// Topics are created lazily and atomically on first reference (racing
/// callers for the same name all receive the one topic that won) and live
/// for as long as the registry does. There is no hidden global: whoever
/// constructs the registry owns its lifecycle, and [`shutdown`](Self::shutdown)
/// stops every topic's dispatch task when that lifecycle ends.
///
/// Handle methods spawn dispatch tasks on first reference of a topic, so
/// they must be called from within a tokio runtime.
pub struct MemoryQueue {
    topics: DashMap<String, Arc<Topic>>,
    inbound_capacity: usize,
    consumer_capacity: usize,
}

impl MemoryQueue {
    /// Creates a registry with the default buffer capacities.
    pub fn new() -> Self {
        Self::with_capacities(DEFAULT_INBOUND_CAPACITY, DEFAULT_CONSUMER_CAPACITY)
    }

    /// Creates a registry with explicit per-topic inbound and per-consumer
    /// buffer capacities.
    pub fn with_capacities(inbound_capacity: usize, consumer_capacity: usize) -> Self {
        Self {
            topics: DashMap::new(),
            inbound_capacity,
            consumer_capacity,
        }
    }

    /// Creates a registry from the configuration layer.
    pub fn from_settings(settings: &BrokerSettings) -> Self {
        Self::with_capacities(settings.inbound_capacity, settings.consumer_capacity)
    }

    /// Resolves the topic for `name`, creating it on first reference.
    ///
    /// The entry API makes get-or-create atomic: concurrent first callers
    /// construct exactly one topic and all receive it.
    fn topic(&self, name: &str) -> Arc<Topic> {
        self.topics
            .entry(name.to_string())
            .or_insert_with(|| Topic::spawn(name, self.inbound_capacity))
            .value()
            .clone()
    }

    /// Registers a consumer with an explicit buffer capacity. Every call
    /// yields a distinct buffer, even for the same topic.
    pub fn consumer_with_capacity(&self, topic: &str, capacity: usize) -> TopicConsumer {
        let topic = self.topic(topic);
        TopicConsumer::new(topic.name(), topic.register_consumer(capacity))
    }

    /// Number of topics created so far.
    pub fn topic_count(&self) -> usize {
        self.topics.len()
    }

    /// Snapshot of all topic names currently in the registry.
    pub fn topic_names(&self) -> Vec<String> {
        self.topics.iter().map(|entry| entry.key().clone()).collect()
    }

    /// Stops every topic's dispatch task.
    ///
    /// Undelivered inbound messages are discarded; messages already sitting
    /// in consumer buffers remain drainable. Producing to a stopped topic
    /// fails with `Error::TopicClosed`. Idempotent.
    pub fn shutdown(&self) {
        for entry in self.topics.iter() {
            entry.value().close();
        }
        debug!(topics = self.topics.len(), "memory queue shut down");
    }
}

impl Default for MemoryQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageQueue for MemoryQueue {
    fn producer(&self, topic: &str) -> Box<dyn Producer> {
        let resolved = self.topic(topic);
        Box::new(TopicProducer::new(resolved.inbound(), topic))
    }

    fn consumer(&self, topic: &str) -> Box<dyn Consumer> {
        Box::new(self.consumer_with_capacity(topic, self.consumer_capacity))
    }
}
