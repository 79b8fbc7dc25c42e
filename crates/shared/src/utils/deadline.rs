use crate::errors::ServiceError;
use std::{future::Future, time::Duration};
use tokio::time::{Instant, timeout_at};

// Roughly 30 years; budgets beyond what `Instant` can represent are clamped to this.
const FAR_FUTURE: Duration = Duration::from_secs(86_400 * 365 * 30);

/// Per-call budget applied by every use case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContextTimeout(Duration);

impl ContextTimeout {
    pub fn new(duration: Duration) -> Self {
        Self(duration)
    }

    pub fn duration(&self) -> Duration {
        self.0
    }

    /// Opens a deadline anchored at the current instant.
    pub fn scope(&self) -> Deadline {
        let now = Instant::now();
        let at = now
            .checked_add(self.0)
            .unwrap_or_else(|| now + FAR_FUTURE);

        Deadline { at }
    }
}

impl From<Duration> for ContextTimeout {
    fn from(duration: Duration) -> Self {
        Self::new(duration)
    }
}

/// An absolute deadline shared by the steps of one use-case call.
#[derive(Debug, Clone, Copy)]
pub struct Deadline {
    at: Instant,
}

impl Deadline {
    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.at
    }

    /// Runs `fut` until it completes or the deadline passes. An expired deadline fails
    /// without polling `fut`.
    pub async fn run<T, E, F>(&self, fut: F) -> Result<T, ServiceError>
    where
        F: Future<Output = Result<T, E>>,
        ServiceError: From<E>,
    {
        if self.is_expired() {
            return Err(ServiceError::DeadlineExceeded);
        }

        match timeout_at(self.at, fut).await {
            Ok(result) => result.map_err(ServiceError::from),
            Err(_) => Err(ServiceError::DeadlineExceeded),
        }
    }
}
