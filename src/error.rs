//! Error taxonomy for the prediction request cycle.

use thiserror::Error;

/// Failures surfaced by field lookup and the prediction transport.
#[derive(Debug, Error)]
pub enum PredictError {
    /// The field name is not one of the thirteen clinical parameters.
    #[error("unknown field '{0}'")]
    UnknownField(String),

    /// The request never produced an HTTP response (DNS, connect, IO).
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-2xx status.
    #[error("prediction service returned {status}: {detail}")]
    Status { status: u16, detail: String },

    /// The response body could not be decoded or is out of range.
    #[error("malformed response: {0}")]
    Malformed(String),
}

impl PredictError {
    /// True for failures that happened before any response was received.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}

pub type PredictResult<T> = Result<T, PredictError>;
