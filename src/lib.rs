//! # bucketlib
//!
//! Rust client library for bucket-based remote file storage.
//!
//! ## Features
//!
//! - **Listing**: paginated `nodes` listings with filters (name, parent,
//!   directory flag, ordering).
//!   - `list_one_page` for manual pagination.
//!   - `list_up_to` fetches the first N nodes in pages of at most 1000.
//!   - `list_all` drains everything from an offset on.
//! - **Node operations**: get, create, delete, rename, copy and move.
//! - **Cancellation**: every call takes a `CancellationToken`; listings
//!   check it before each page and return what they had collected.
//!
//! Listings that fail part-way return a [`ListingError`] carrying the nodes
//! fetched before the failure alongside the cause.
//!
//! ## Example
//!
//! ```no_run
//! use bucketlib::{ClientConfig, FileStorage, NodeQuery};
//! use tokio_util::sync::CancellationToken;
//!
//! # async fn example() -> bucketlib::Result<()> {
//! let storage = FileStorage::new(ClientConfig::new("https://storage.example.com"))?;
//! let cancel = CancellationToken::new();
//!
//! // First 2500 directories, ordered by creation time
//! let query = NodeQuery::new()
//!     .limit(2500)
//!     .is_directory(true)
//!     .order_by("created_at");
//! let listing = storage.list_up_to("bucket-id", &query, &cancel).await?;
//! println!("{} of {} nodes", listing.len(), listing.total);
//!
//! // Rename one of them
//! if let Some(node) = listing.nodes.first() {
//!     storage.rename_node("bucket-id", &node.id, "renamed", &cancel).await?;
//! }
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod fs;
pub mod http;

// Re-export commonly used types
pub use api::{ApiClient, ApiRequest, ApiResponse, Transport};
pub use config::ClientConfig;
pub use error::{Result, StorageError};
pub use fs::{
    FileStorage, Listing, ListingError, Node, NodeFile, NodeQuery, NodeType, Page, PageFetcher,
    PAGE_CEILING,
};
