//! Node listing and lookup.

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use super::utils::{node_path, nodes_path};
use crate::api::{ApiRequest, Transport};
use crate::error::Result;
use crate::fs::listing::{self, Listing, ListingError, Page, PageFetcher};
use crate::fs::node::{Node, SingleNode};
use crate::fs::query::NodeQuery;
use crate::fs::storage::FileStorage;

#[async_trait]
impl<T: Transport> PageFetcher for FileStorage<T> {
    async fn fetch_page(
        &self,
        bucket_id: &str,
        offset: u64,
        limit: u64,
        query: &NodeQuery,
        cancel: &CancellationToken,
    ) -> Result<Page> {
        self.list_one_page(bucket_id, &query.page(offset, limit), cancel)
            .await
    }
}

impl<T: Transport> FileStorage<T> {
    /// Fetch a single page exactly as described by `query`.
    ///
    /// No looping and no clamping: useful for callers paginating by hand.
    pub async fn list_one_page(
        &self,
        bucket_id: &str,
        query: &NodeQuery,
        cancel: &CancellationToken,
    ) -> Result<Page> {
        let request = ApiRequest::get(nodes_path(bucket_id)).with_query(query.encode());
        self.send(request, cancel).await?.decode()
    }

    /// List up to `query.limit` nodes starting at `query.offset`.
    ///
    /// Requests pages of at most [`PAGE_CEILING`](crate::fs::PAGE_CEILING)
    /// nodes and stops early when the bucket runs out. Without a limit, lists
    /// everything like [`list_all`](Self::list_all).
    ///
    /// # Errors
    /// On a failed page the nodes collected so far are returned inside the
    /// [`ListingError`].
    pub async fn list_up_to(
        &self,
        bucket_id: &str,
        query: &NodeQuery,
        cancel: &CancellationToken,
    ) -> std::result::Result<Listing, ListingError> {
        listing::list_up_to(self, bucket_id, query, cancel).await
    }

    /// List every node from `query.offset` on, using `query.limit` as the
    /// page size.
    pub async fn list_all(
        &self,
        bucket_id: &str,
        query: &NodeQuery,
        cancel: &CancellationToken,
    ) -> std::result::Result<Listing, ListingError> {
        listing::list_all(self, bucket_id, query, cancel).await
    }

    /// Get a node by its id.
    pub async fn get_node(
        &self,
        bucket_id: &str,
        node_id: &str,
        cancel: &CancellationToken,
    ) -> Result<Node> {
        let request = ApiRequest::get(node_path(bucket_id, node_id));
        let response: SingleNode = self.send(request, cancel).await?.decode()?;
        Ok(response.node)
    }
}
