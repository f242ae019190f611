//! Cancellation tokens for queue operations.
//!
//! Every blocking queue operation takes a [`CancelToken`]; firing the token
//! aborts only that caller's operation and leaves all buffer state
//! untouched. Tokens are cloneable (clones share one signal) and carry
//! the cause they fired with, so callers can tell an explicit cancel from
//! an elapsed deadline.

use std::fmt;
use std::time::Duration;

use tokio::sync::watch;
use tokio::time;

/// Why a token fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancelCause {
    /// [`CancelToken::cancel`] was called.
    Cancelled,
    /// A deadline set through [`CancelToken::cancel_after`] elapsed.
    DeadlineExceeded,
}

impl fmt::Display for CancelCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CancelCause::Cancelled => write!(f, "cancelled"),
            CancelCause::DeadlineExceeded => write!(f, "deadline exceeded"),
        }
    }
}

/// A cloneable cancellation signal.
///
/// The first cause to fire wins; later fires are no-ops. A token that is
/// never fired leaves [`cancelled`](Self::cancelled) pending forever.
#[derive(Debug, Clone)]
pub struct CancelToken {
    state: watch::Sender<Option<CancelCause>>,
}

impl CancelToken {
    pub fn new() -> Self {
        let (state, _) = watch::channel(None);
        Self { state }
    }

    /// Fires the token with [`CancelCause::Cancelled`].
    pub fn cancel(&self) {
        self.fire(CancelCause::Cancelled);
    }

    /// Fires the token with [`CancelCause::DeadlineExceeded`] once
    /// `deadline` has elapsed, unless it was cancelled earlier.
    ///
    /// Spawns the timer on the current tokio runtime.
    pub fn cancel_after(&self, deadline: Duration) {
        let token = self.clone();
        tokio::spawn(async move {
            time::sleep(deadline).await;
            token.fire(CancelCause::DeadlineExceeded);
        });
    }

    pub fn is_cancelled(&self) -> bool {
        self.state.borrow().is_some()
    }

    /// The cause the token fired with, if it has fired.
    pub fn cause(&self) -> Option<CancelCause> {
        *self.state.borrow()
    }

    /// Resolves with the cause once the token fires.
    pub async fn cancelled(&self) -> CancelCause {
        let mut rx = self.state.subscribe();
        match rx.wait_for(|cause| cause.is_some()).await {
            Ok(cause) => (*cause).unwrap_or(CancelCause::Cancelled),
            // Unreachable while `self` is borrowed: the sending half lives
            // in the token itself.
            Err(_) => CancelCause::Cancelled,
        }
    }

    fn fire(&self, cause: CancelCause) {
        self.state.send_if_modified(|state| {
            if state.is_some() {
                return false;
            }
            *state = Some(cause);
            true
        });
    }
}

impl Default for CancelToken {
    fn default() -> Self {
        Self::new()
    }
}
