//! Cooperative cancellation with an optional deadline.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::calculator::AlgoError;

/// Cooperative cancellation token.
///
/// Clones share the cancellation flag. A token may also carry a deadline,
/// after which it reports [`AlgoError::Timeout`].
///
/// # Example
/// ```
/// use algobench_core::cancellation::CancellationToken;
///
/// let token = CancellationToken::new();
/// assert!(!token.is_cancelled());
///
/// token.cancel();
/// assert!(token.is_cancelled());
/// assert!(token.check_cancelled().is_err());
/// ```
#[derive(Debug, Clone)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
    deadline: Option<Instant>,
}

impl CancellationToken {
    /// Create a new cancellation token with no deadline.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cancelled: Arc::new(AtomicBool::new(false)),
            deadline: None,
        }
    }

    /// Derive a token that shares this token's flag and expires after `timeout`.
    ///
    /// If this token already has an earlier deadline, that one is kept.
    #[must_use]
    pub fn with_timeout(&self, timeout: Duration) -> Self {
        let candidate = Instant::now() + timeout;
        let deadline = match self.deadline {
            Some(existing) if existing < candidate => existing,
            _ => candidate,
        };
        Self {
            cancelled: Arc::clone(&self.cancelled),
            deadline: Some(deadline),
        }
    }

    /// Request cancellation.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    /// Whether cancellation was requested or the deadline has passed.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed) || self.is_expired()
    }

    fn is_expired(&self) -> bool {
        self.deadline.is_some_and(|d| Instant::now() >= d)
    }

    /// Time left before the deadline, if there is one.
    #[must_use]
    pub fn remaining(&self) -> Option<Duration> {
        self.deadline
            .map(|d| d.saturating_duration_since(Instant::now()))
    }

    /// Checkpoint for algorithm loops.
    ///
    /// ```
    /// use std::time::Duration;
    /// use algobench_core::cancellation::CancellationToken;
    ///
    /// let token = CancellationToken::new().with_timeout(Duration::from_secs(60));
    /// assert!(token.check_cancelled().is_ok());
    /// ```
    pub fn check_cancelled(&self) -> Result<(), AlgoError> {
        if self.cancelled.load(Ordering::Relaxed) {
            return Err(AlgoError::Cancelled);
        }
        if self.is_expired() {
            return Err(AlgoError::Timeout("deadline reached".to_string()));
        }
        Ok(())
    }
}

impl Default for CancellationToken {
    fn default() -> Self {
        Self::new()
    }
}
