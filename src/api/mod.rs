//! Storage API transport and request types.

pub mod client;
pub mod request;

pub use client::ApiClient;
pub use request::{ApiRequest, ApiResponse, Transport};

/// Tracing target for API transport operations.
pub const TRACING_TARGET: &str = "bucketlib::api";
