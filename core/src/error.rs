//! Error taxonomy for the Carangas resource client.
//!
//! # Design
//! `CarError` is a closed set: every way an operation can fail maps to
//! exactly one variant, and every variant carries only the data named here
//! (the transport cause, the status code). Encode and decode problems share
//! the `Json` variant because callers distinguish "the JSON was wrong" from
//! the other failures, not encode from decode.

use thiserror::Error;

/// Errors returned by every [`CarClient`](crate::CarClient) operation.
#[derive(Debug, Error)]
pub enum CarError {
    /// The target string did not parse as a valid URL. Raised before any
    /// network access happens.
    #[error("invalid request URL")]
    Url,

    /// The transport layer failed to send the request or receive the
    /// response, for a reason other than a timeout.
    #[error("transport failure")]
    Transport(#[source] reqwest::Error),

    /// The request exceeded the configured deadline.
    #[error("request timed out")]
    Timeout,

    /// The response arrived without a body where one was required.
    #[error("empty response body")]
    EmptyBody,

    /// The server answered with a status outside the 2xx range.
    #[error("unexpected response status {0}")]
    Status(u16),

    /// The request body could not be encoded, or the response body could not
    /// be decoded, as JSON of the expected shape.
    #[error("invalid JSON")]
    Json(#[from] serde_json::Error),
}

impl CarError {
    /// User-facing message for this error.
    ///
    /// Pure formatting, no I/O; keeps display text out of the taxonomy
    /// itself so the variants stay data-only.
    pub fn friendly_message(&self) -> String {
        match self {
            CarError::Url => "The request could not be built.".to_string(),
            CarError::Transport(cause) => cause.to_string(),
            CarError::Timeout => "The request took too long to complete.".to_string(),
            CarError::EmptyBody => "The server returned no data.".to_string(),
            CarError::Status(code) => {
                format!("The server reported a problem. (status {code})")
            }
            CarError::Json(_) => "The server returned data in an unexpected format.".to_string(),
        }
    }
}
