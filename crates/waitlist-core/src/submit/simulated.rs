//! Stand-in backend that accepts submissions after a fixed delay

use crate::form::{Submission, SubmissionReceipt, Submitter};
use crate::{Error, Result};
use async_trait::async_trait;
use std::time::Duration;
use tracing::{info, warn};

/// Latency of the simulated backend
pub const DEFAULT_SIMULATED_DELAY: Duration = Duration::from_millis(1000);

/// Backend that waits, logs, and then succeeds (or fails when told to)
#[derive(Debug, Clone)]
pub struct SimulatedBackend {
    delay: Duration,
    fail: bool,
}

impl Default for SimulatedBackend {
    fn default() -> Self {
        Self {
            delay: DEFAULT_SIMULATED_DELAY,
            fail: false,
        }
    }
}

impl SimulatedBackend {
    pub fn new(delay: Duration) -> Self {
        Self { delay, fail: false }
    }

    /// Make every submission fail after the delay
    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

#[async_trait]
impl Submitter for SimulatedBackend {
    async fn submit(&self, submission: &Submission) -> Result<SubmissionReceipt> {
        tokio::time::sleep(self.delay).await;

        if self.fail {
            warn!(fields = submission.len(), "Simulated submission failure");
            return Err(Error::submission("Simulated backend rejected the submission"));
        }

        info!(
            fields = ?submission.iter().map(|(name, _)| name).collect::<Vec<_>>(),
            "Form submitted"
        );
        Ok(SubmissionReceipt::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::FormData;

    #[tokio::test]
    async fn test_simulated_success() {
        let backend = SimulatedBackend::new(Duration::from_millis(1));
        let submission = FormData::new().with_field("email", "a@b.co").to_submission();
        let receipt = backend.submit(&submission).await.unwrap();
        assert!(receipt.reference.is_none());
    }

    #[tokio::test]
    async fn test_simulated_failure() {
        let backend = SimulatedBackend::new(Duration::ZERO).failing();
        let err = backend.submit(&Submission::default()).await.unwrap_err();
        assert!(matches!(err, Error::Submission { .. }));
    }

    #[test]
    fn test_default_delay() {
        assert_eq!(SimulatedBackend::default().delay(), Duration::from_secs(1));
    }
}
