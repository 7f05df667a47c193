use crate::domain::models::Submission;
use anyhow::Result;
use async_trait::async_trait;

/// Where validated submissions go. Stands in for the server side of the form.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmissionSink: Send + Sync {
    // Returns the confirmation text to flash on success
    async fn submit(&self, submission: &Submission) -> Result<String>;
}
