//! Trait abstraction for the submission sink to enable mocking in tests

use crate::state::QuoteFormState;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// A submitted quote request: the form record plus bookkeeping
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    pub reference: Uuid,
    pub submitted_at: DateTime<Utc>,
    #[serde(flatten)]
    pub form: QuoteFormState,
}

impl QuoteRequest {
    pub fn new(form: QuoteFormState) -> Self {
        Self {
            reference: Uuid::new_v4(),
            submitted_at: Utc::now(),
            form,
        }
    }

    /// First block of the reference, short enough for the status bar
    pub fn short_reference(&self) -> String {
        self.reference.simple().to_string()[..8].to_string()
    }
}

/// Why a sink did not accept a request
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("quote request was rejected: {reason}")]
    Rejected { reason: String },
    #[error("quote service unavailable: {0}")]
    Unavailable(String),
}

/// Receives finished quote requests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmissionSink: Send + Sync {
    /// Deliver a request. Ok means the request was accepted and the form may
    /// be cleared.
    async fn submit(&self, request: &QuoteRequest) -> Result<(), SubmitError>;
}
