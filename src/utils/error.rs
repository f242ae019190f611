//! The `error` module defines the error types surfaced by queue operations.

use thiserror::Error;

use crate::utils::cancel::CancelCause;

/// Errors surfaced by queue operations.
///
/// The normal-operation contract has exactly one recoverable kind:
/// `Cancelled`. Absent topics are created on demand and full buffers block
/// rather than fail. `TopicClosed` only becomes reachable once the registry
/// has been shut down explicitly.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The caller's token fired before the operation completed.
    #[error("operation cancelled: {0}")]
    Cancelled(CancelCause),

    /// The topic's dispatch task has been stopped by a shutdown.
    #[error("topic `{topic}` is closed")]
    TopicClosed { topic: String },
}

pub type Result<T> = std::result::Result<T, Error>;
