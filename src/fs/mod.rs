//! Bucket node types, listing and node operations.

pub mod listing;
pub(crate) mod node;
mod operations;
pub mod query;
mod storage;
#[cfg(test)]
pub(crate) mod testing;

pub use listing::{list_all, list_up_to, Listing, ListingError, Page, PageFetcher, PAGE_CEILING};
pub use node::{Node, NodeFile, NodeType};
pub use query::NodeQuery;
pub use storage::FileStorage;

/// Tracing target for listing and node operations.
pub const TRACING_TARGET: &str = "bucketlib::fs";
