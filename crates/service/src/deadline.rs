use std::future::Future;
use std::time::Duration;

use tokio::time::Instant;

use crate::errors::ServiceError;

/// Point in time after which a store operation is abandoned.
///
/// Handlers create one per request and pass it to every store call made for
/// that request, so a lookup followed by a write shares one budget.
#[derive(Debug, Clone, Copy)]
pub struct Deadline {
    at: Instant,
    budget: Duration,
}

impl Deadline {
    pub fn after(budget: Duration) -> Self {
        Self { at: Instant::now() + budget, budget }
    }

    /// Drive `fut` until it completes or the deadline passes; in the latter case
    /// the future is dropped and `ServiceError::Timeout` is returned.
    pub async fn run<F, T>(&self, fut: F) -> Result<T, ServiceError>
    where
        F: Future<Output = Result<T, ServiceError>>,
    {
        match tokio::time::timeout_at(self.at, fut).await {
            Ok(res) => res,
            Err(_) => Err(ServiceError::Timeout(self.budget)),
        }
    }
}
