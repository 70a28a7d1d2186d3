//! Sink that records quote requests in the application log

use super::traits::{QuoteRequest, SubmissionSink, SubmitError};
use async_trait::async_trait;

/// Writes each request to the log and always accepts it.
///
/// No request leaves the machine; this stands in until a quote service exists.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingSink;

impl LoggingSink {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl SubmissionSink for LoggingSink {
    async fn submit(&self, request: &QuoteRequest) -> Result<(), SubmitError> {
        let body = serde_json::to_string(&request.form)
            .map_err(|e| SubmitError::Rejected {
                reason: e.to_string(),
            })?;
        tracing::info!(
            reference = %request.reference,
            submitted_at = %request.submitted_at,
            "Quote requested: {body}"
        );
        Ok(())
    }
}
