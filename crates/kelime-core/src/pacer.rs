use std::future::Future;
use std::time::Duration;

/// Fixed pause in front of every external call.
///
/// Calls go through [`Pacer::paced`] one at a time, so consecutive requests
/// are always at least `interval` apart.
#[derive(Debug, Clone, Copy)]
pub struct Pacer {
    interval: Duration,
}

impl Pacer {
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }

    /// No pause at all
    pub fn disabled() -> Self {
        Self::new(Duration::ZERO)
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub async fn wait(&self) {
        if !self.interval.is_zero() {
            tokio::time::sleep(self.interval).await;
        }
    }

    /// Wait, then drive `call` to completion
    pub async fn paced<F, T>(&self, call: F) -> T
    where
        F: Future<Output = T>,
    {
        self.wait().await;
        call.await
    }
}
