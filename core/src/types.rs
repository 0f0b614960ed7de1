//! Domain DTOs for the Carangas API.
//!
//! # Design
//! Field names follow the backend's wire contract (`_id`, `gasType`), mapped
//! to Rust-side names through serde attributes. The mock-server crate defines
//! its own copies of these shapes; integration tests catch any drift.

use serde::{Deserialize, Serialize};

/// A car record owned by the remote server.
///
/// `id` is `None` until the server assigns one on create; a present `id`
/// marks the record as a valid target for update and delete.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Car {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub brand: String,
    pub price: f64,
    #[serde(rename = "gasType")]
    pub gas_type: u8,
}

/// One row of the FIPE brand table. Read-only reference data; the endpoint
/// carries more fields, but only the display name is consumed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Brand {
    pub fipe_name: String,
}
