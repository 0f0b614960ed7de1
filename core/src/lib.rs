//! Asynchronous resource client for the Carangas car service.
//!
//! # Overview
//! Five CRUD-style operations against the remote car backend plus a read-only
//! fetch of the FIPE brand table. Each call goes out over one shared HTTP
//! session and resolves to a single `Result`: the decoded payload, or a
//! [`CarError`] naming exactly what went wrong.
//!
//! # Design
//! - `CarClient` holds two base URL strings and the pooled session; calls are
//!   independent and carry no state between them.
//! - Target URLs are parsed per call, so a bad base fails before any I/O.
//! - `CarError` is a closed taxonomy. Encode and decode problems share the
//!   `Json` variant because callers treat both as one "bad JSON" condition.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod error;
pub mod http;
pub mod types;

pub use client::CarClient;
pub use error::CarError;
pub use http::HttpConfig;
pub use types::{Brand, Car};
