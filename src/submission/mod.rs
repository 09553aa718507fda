//! Submission of saved form snapshots

mod log_sink;
mod traits;

pub use log_sink::LogSink;
pub use traits::SubmissionSink;

#[cfg(test)]
pub use traits::MockSubmissionSink;

use crate::state::CustomerValue;
use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// One save of the form
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubmissionRecord {
    pub id: Uuid,
    pub submitted_at: DateTime<Utc>,
    pub value: CustomerValue,
}

impl SubmissionRecord {
    pub fn new(value: CustomerValue) -> Self {
        Self {
            id: Uuid::new_v4(),
            submitted_at: Utc::now(),
            value,
        }
    }

    /// JSON of the form value alone
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.value)?)
    }
}
