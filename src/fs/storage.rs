//! File storage service handle.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::api::{ApiClient, ApiRequest, ApiResponse, Transport};
use crate::config::ClientConfig;
use crate::error::{Result, StorageError};

/// Entry point for bucket node operations.
///
/// Cloning is cheap and clones share the underlying transport. Every call is
/// independent: no listing state lives on the handle, so the same handle can
/// drive any number of concurrent listings.
///
/// # Example
/// ```no_run
/// use bucketlib::{ClientConfig, FileStorage, NodeQuery};
/// use tokio_util::sync::CancellationToken;
///
/// # async fn example() -> bucketlib::Result<()> {
/// let storage = FileStorage::new(ClientConfig::new("https://storage.example.com"))?;
/// let cancel = CancellationToken::new();
///
/// let listing = storage
///     .list_all("bucket-id", &NodeQuery::new().is_directory(true), &cancel)
///     .await?;
/// for node in &listing.nodes {
///     println!("{} {}", node.id, node.name);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct FileStorage<T = ApiClient> {
    transport: Arc<T>,
}

impl<T> Clone for FileStorage<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
        }
    }
}

impl FileStorage<ApiClient> {
    /// Create a storage handle backed by an HTTP [`ApiClient`].
    pub fn new(config: ClientConfig) -> Result<Self> {
        Ok(Self::with_transport(ApiClient::new(config)?))
    }
}

impl<T: Transport> FileStorage<T> {
    /// Create a storage handle over any transport.
    pub fn with_transport(transport: T) -> Self {
        Self::from_shared(Arc::new(transport))
    }

    /// Create a storage handle over a transport shared with other handles.
    pub fn from_shared(transport: Arc<T>) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Dispatch one request, honoring `cancel` before and during the call.
    pub(crate) async fn send(
        &self,
        request: ApiRequest,
        cancel: &CancellationToken,
    ) -> Result<ApiResponse> {
        if cancel.is_cancelled() {
            return Err(StorageError::Cancelled);
        }

        tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(StorageError::Cancelled),
            response = self.transport.execute(request) => response,
        }
    }
}
