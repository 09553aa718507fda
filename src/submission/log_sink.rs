//! Sink that writes submissions to the log

use super::{SubmissionRecord, SubmissionSink};
use anyhow::Result;
use async_trait::async_trait;

/// Logs `Saved: <json>` at info level
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

#[async_trait]
impl SubmissionSink for LogSink {
    async fn submit(&self, record: &SubmissionRecord) -> Result<()> {
        let json = record.to_json()?;
        tracing::info!(id = %record.id, "Saved: {json}");
        Ok(())
    }
}
