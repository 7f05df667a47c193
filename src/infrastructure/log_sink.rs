use crate::domain::models::Submission;
use crate::domain::sink::SubmissionSink;
use anyhow::Result;
use async_trait::async_trait;

/// Records submissions to the tracing log and confirms them.
#[derive(Debug, Default, Clone)]
pub struct LogSink;

impl LogSink {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl SubmissionSink for LogSink {
    async fn submit(&self, submission: &Submission) -> Result<String> {
        match submission {
            Submission::Area { area } => {
                tracing::info!(area = %area, "Area selected");
                Ok(format!("Area selected: {area}"))
            }
            Submission::Entry {
                name,
                raw_input,
                area,
                direction,
                submitted_at,
            } => {
                let area = area.as_deref().unwrap_or("unknown area");
                tracing::info!(
                    name = %name,
                    raw_input = %raw_input,
                    direction = %direction,
                    area = %area,
                    at = %submitted_at.to_rfc3339(),
                    "Recording event"
                );
                Ok(format!("Signed {direction}: {name} at {area}"))
            }
        }
    }
}
