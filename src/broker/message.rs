use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// A published message in the queue.
///
/// A message carries an opaque payload, an optional routing key, the name
/// of the topic it was published to, and a timestamp recording when it was
/// sent.
///
/// `topic` and `timestamp` are normalization fields: whatever the caller
/// puts there is overwritten by the producer handle at send time. `key` and
/// `payload` pass through the queue untouched and are cloned by reference
/// into every consumer buffer.
///
/// # Example
///
/// ```rust
/// use memq::Message;
///
/// let msg = Message::new("{\"temp\":25}");
/// assert!(msg.topic.is_empty());
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Message {
    pub topic: String,
    pub key: Bytes,
    pub payload: Bytes,
    pub timestamp: i64,
}

impl Message {
    /// Creates a message with the given payload and no key. The topic and
    /// timestamp are filled in when the message is produced.
    pub fn new(payload: impl Into<Bytes>) -> Self {
        Self {
            payload: payload.into(),
            ..Self::default()
        }
    }

    /// Creates a keyed message.
    pub fn with_key(key: impl Into<Bytes>, payload: impl Into<Bytes>) -> Self {
        Self {
            key: key.into(),
            payload: payload.into(),
            ..Self::default()
        }
    }
}

/// Acknowledgement returned by a successful produce call.
///
/// Carries no data today; it exists so the produce contract has room for
/// delivery metadata without a signature change.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProduceResult {}
