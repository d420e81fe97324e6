//! Unified SDK error types.

use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("Validation error: {0}")]
    Validation(String),

    /// The recharge flow reached a step without the upstream state it needs
    /// (e.g. the plans step with no detected operator).
    #[error("Precondition not met: {0}")]
    Precondition(String),

    /// Payment was captured by the gateway but a downstream step failed.
    ///
    /// Never retried automatically — the money already moved, and a silent
    /// retry risks a duplicate recharge. The payment id is part of the
    /// message so the user can quote it to support.
    #[error("payment {payment_id} captured but not completed: {message}. Please contact support with this payment id")]
    PaymentCaptured { payment_id: String, message: String },

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

/// HTTP-layer errors.
///
/// The HTTP client normalizes every transport, timeout, and status failure
/// into one of these; raw `reqwest` errors never escape this layer.
#[derive(Error, Debug)]
pub enum HttpError {
    /// Transport-level failure (DNS, connection refused). The display string
    /// is intentionally generic; the raw detail goes to the logs only.
    #[error("network error, please check your connection and try again")]
    Network { detail: String },

    /// The client-enforced request deadline elapsed.
    #[error("request timed out")]
    Timeout,

    /// The server responded with a non-2xx status.
    #[error("{message}")]
    Api {
        status: u16,
        message: String,
        body: Option<serde_json::Value>,
    },

    /// A 2xx response body failed to deserialize into the expected type.
    #[error("unexpected response format: {0}")]
    Decode(String),
}

impl HttpError {
    /// Status code for `Api` errors, `None` otherwise.
    pub fn status(&self) -> Option<u16> {
        match self {
            HttpError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
