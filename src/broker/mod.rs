pub mod consumer;
pub mod engine;
pub mod message;
pub mod producer;
pub mod topic;

pub use consumer::TopicConsumer;
pub use engine::MemoryQueue;
pub use message::{Message, ProduceResult};
pub use producer::TopicProducer;
