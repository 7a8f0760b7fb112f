// src/core/mod.rs
//! Transport plumbing shared by all endpoint groups

pub mod endpoint;
pub mod envelope;
pub mod error;
pub mod service_client;

pub use endpoint::Endpoint;
pub use envelope::{ensure_transport_ok, unwrap_envelope, Envelope};
pub use error::{ApiError, Result};
pub use service_client::ServiceClient;
