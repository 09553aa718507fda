//! Trait abstraction for the submission sink to enable mocking in tests

use super::SubmissionRecord;
use anyhow::Result;
use async_trait::async_trait;

/// Receives a snapshot of the form each time it is saved
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmissionSink: Send + Sync {
    async fn submit(&self, record: &SubmissionRecord) -> Result<()>;
}
