//! Submission sink for finished quote requests

mod log_sink;
mod traits;

pub use log_sink::LoggingSink;
pub use traits::{QuoteRequest, SubmissionSink, SubmitError};

#[cfg(test)]
pub use traits::MockSubmissionSink;
