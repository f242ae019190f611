//! End-to-end tests driving the queue through its public interface, the
//! way an embedding application would: trait objects, JSON payloads at the
//! edges, and cancellation tokens guarding every blocking call.

use std::sync::Arc;
use std::time::Duration;

use memq::{CancelCause, CancelToken, Consumer, Error, MemoryQueue, Message, MessageQueue, Producer};
use tokio::time::timeout;

const RECV_TIMEOUT: Duration = Duration::from_millis(500);

#[tokio::test]
async fn pubsub_end_to_end() {
    let queue = MemoryQueue::new();
    let producer = queue.producer("sensor_updates");
    let mut first = queue.consumer("sensor_updates");
    let mut second = queue.consumer("sensor_updates");
    let ctx = CancelToken::new();

    let readings = [
        serde_json::json!({ "temp": 21 }),
        serde_json::json!({ "temp": 25 }),
    ];
    for reading in &readings {
        let payload = serde_json::to_vec(reading).expect("serialize");
        producer
            .produce(&ctx, Message::new(payload))
            .await
            .expect("produce");
    }

    for consumer in [&mut first, &mut second] {
        for expected in &readings {
            let message = timeout(RECV_TIMEOUT, consumer.consume(&ctx))
                .await
                .expect("timed out")
                .expect("consume");
            assert_eq!(message.topic, "sensor_updates");
            let decoded: serde_json::Value =
                serde_json::from_slice(&message.payload).expect("json payload");
            assert_eq!(&decoded, expected);
        }
    }
}

#[tokio::test]
async fn works_behind_the_trait_object_boundary() {
    let queue: Arc<dyn MessageQueue> = Arc::new(MemoryQueue::new());
    let mut consumer = queue.consumer("jobs");
    let producer = queue.producer("jobs");
    let ctx = CancelToken::new();

    let publisher = tokio::spawn(async move {
        let ctx = CancelToken::new();
        for i in 0..10u32 {
            producer
                .produce(&ctx, Message::new(i.to_string().into_bytes()))
                .await
                .expect("produce");
        }
    });

    for i in 0..10u32 {
        let message = timeout(RECV_TIMEOUT, consumer.consume(&ctx))
            .await
            .expect("timed out")
            .expect("consume");
        assert_eq!(message.payload, i.to_string().into_bytes());
    }
    publisher.await.expect("publisher task");
}

#[tokio::test]
async fn consume_respects_deadlines() {
    let queue = MemoryQueue::new();
    let mut consumer = queue.consumer("quiet");

    let ctx = CancelToken::new();
    ctx.cancel_after(Duration::from_millis(20));

    let err = consumer.consume(&ctx).await.unwrap_err();
    assert_eq!(err, Error::Cancelled(CancelCause::DeadlineExceeded));
}

#[tokio::test]
async fn capacities_come_from_the_config_layer() {
    let settings = memq::config::load_config().expect("load config");
    let queue = MemoryQueue::from_settings(&settings.broker);
    let mut consumer = queue.consumer("orders");
    let producer = queue.producer("orders");
    let ctx = CancelToken::new();

    producer
        .produce(&ctx, Message::new("hello".as_bytes().to_vec()))
        .await
        .expect("produce");
    let message = timeout(RECV_TIMEOUT, consumer.consume(&ctx))
        .await
        .expect("timed out")
        .expect("consume");
    assert_eq!(message.payload, b"hello".to_vec());
}
