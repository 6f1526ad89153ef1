//! Coalesce rapid input into one settled value per quiet period.

use std::time::Duration;

use tokio::time::Instant;

/// Holds the latest input until no newer input has arrived for `quiet`.
#[derive(Debug)]
pub struct Debouncer<T> {
    quiet: Duration,
    pending: Option<(T, Instant)>,
}

impl<T> Debouncer<T> {
    /// Create a debouncer with the given quiet interval.
    #[must_use]
    pub const fn new(quiet: Duration) -> Self {
        Self { quiet, pending: None }
    }

    /// Replace any pending value and restart the quiet interval.
    pub fn push(&mut self, value: T) {
        self.pending = Some((value, Instant::now() + self.quiet));
    }

    /// Drop the pending value, if any.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Check whether a value is waiting to settle.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Wait for the pending value to settle and take it.
    ///
    /// Never resolves while nothing is pending. Cancel-safe: dropping the
    /// future before it resolves leaves the pending value in place.
    pub async fn settled(&mut self) -> T {
        loop {
            let Some(deadline) = self.pending.as_ref().map(|(_, deadline)| *deadline) else {
                return std::future::pending().await;
            };

            tokio::time::sleep_until(deadline).await;

            if let Some((value, _)) = self.pending.take() {
                return value;
            }
        }
    }
}
