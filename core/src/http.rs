//! Shared HTTP session configuration and transport-error classification.
//!
//! # Design
//! One `reqwest::Client` is built per `CarClient` and reused by every call;
//! the pool inside it handles connection reuse and its own worker machinery,
//! so the client code needs no locking. Classification here covers only
//! transport-level outcomes; status and body handling live with each
//! operation in `client.rs`.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};

use crate::error::CarError;

/// Session-wide settings, fixed at client construction.
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// Deadline applied to every request.
    pub timeout: Duration,
    /// Upper bound on pooled connections kept per host.
    pub max_connections_per_host: usize,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            max_connections_per_host: 5,
        }
    }
}

/// Build the shared session: configured timeout, bounded pool, and
/// `Content-Type: application/json` on every request.
pub(crate) fn build_session(config: &HttpConfig) -> Result<reqwest::Client, CarError> {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    reqwest::Client::builder()
        .timeout(config.timeout)
        .pool_max_idle_per_host(config.max_connections_per_host)
        .default_headers(headers)
        .build()
        .map_err(CarError::Transport)
}

/// Map a transport-layer failure to the taxonomy: timeouts are reported as
/// their own kind, everything else keeps its cause.
pub(crate) fn classify(error: reqwest::Error) -> CarError {
    if error.is_timeout() {
        CarError::Timeout
    } else {
        CarError::Transport(error)
    }
}
