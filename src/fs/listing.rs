//! Exhaustive listing over a paginated `nodes` endpoint.
//!
//! The server caps every response at [`PAGE_CEILING`] items, reports the
//! current number of matching nodes with each page, and may return fewer
//! items than asked for. The functions here turn one logical request into
//! a strictly sequential run of page fetches: every page's offset depends on
//! how many items the previous page actually returned.
//!
//! Termination is re-derived from the `total` of the latest page on every
//! iteration, so a collection that grows or shrinks between pages is
//! handled with the freshest known count.

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;
use tokio_util::sync::CancellationToken;

use super::node::Node;
use super::query::NodeQuery;
use super::TRACING_TARGET;
use crate::error::{Result, StorageError};

/// Maximum number of items the server returns for a single request.
pub const PAGE_CEILING: u64 = 1000;

/// One round trip's worth of nodes.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Page {
    /// Server's current count of matching nodes.
    pub total: u64,
    pub nodes: Vec<Node>,
}

/// Aggregate of one or more pages, in request order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Listing {
    pub nodes: Vec<Node>,
    /// Total reported by the most recent page (0 if nothing was fetched).
    pub total: u64,
}

impl Listing {
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn absorb(&mut self, page: Page) -> u64 {
        let got = page.nodes.len() as u64;
        self.total = page.total;
        self.nodes.extend(page.nodes);
        got
    }
}

/// A listing that stopped early.
///
/// Carries every node collected before the failure so callers can decide
/// whether a partial listing is usable.
#[derive(Debug, Error)]
#[error("listing stopped after {count} nodes: {source}", count = .listing.nodes.len())]
pub struct ListingError {
    /// Nodes collected before the failing page.
    pub listing: Listing,
    #[source]
    pub source: StorageError,
}

impl ListingError {
    pub fn new(listing: Listing, source: StorageError) -> Self {
        Self { listing, source }
    }

    /// Check if the caller's cancellation token stopped the listing.
    pub fn is_cancelled(&self) -> bool {
        self.source.is_cancelled()
    }

    /// Split into the partial listing and the underlying error.
    pub fn into_parts(self) -> (Listing, StorageError) {
        (self.listing, self.source)
    }
}

impl From<ListingError> for StorageError {
    fn from(err: ListingError) -> Self {
        err.source
    }
}

/// Fetches a single page of nodes.
///
/// `limit` is never larger than [`PAGE_CEILING`] when called from this
/// module; only the filter fields of `query` are meant to be honored, its own
/// limit and offset are superseded by the explicit arguments.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch_page(
        &self,
        bucket_id: &str,
        offset: u64,
        limit: u64,
        query: &NodeQuery,
        cancel: &CancellationToken,
    ) -> Result<Page>;
}

/// Fetch up to `query.limit` nodes starting at `query.offset`.
///
/// Each request asks for the largest allowed page, or the remainder on the
/// last one. Without a limit this behaves like [`list_all`]; a limit of 0
/// returns an empty listing without touching the network.
pub async fn list_up_to<F>(
    fetcher: &F,
    bucket_id: &str,
    query: &NodeQuery,
    cancel: &CancellationToken,
) -> std::result::Result<Listing, ListingError>
where
    F: PageFetcher + ?Sized,
{
    let Some(wanted) = query.get_limit() else {
        return list_all(fetcher, bucket_id, query, cancel).await;
    };

    let mut listing = Listing::default();
    let mut cursor = query.get_offset();

    while (listing.len() as u64) < wanted {
        if cancel.is_cancelled() {
            return Err(ListingError::new(listing, StorageError::Cancelled));
        }

        let page_limit = PAGE_CEILING.min(wanted - listing.len() as u64);
        let mut page = match fetcher
            .fetch_page(bucket_id, cursor, page_limit, query, cancel)
            .await
        {
            Ok(page) => page,
            Err(e) => return Err(ListingError::new(listing, e)),
        };
        // Never hand back more than was asked for.
        page.nodes.truncate(page_limit as usize);

        let total = page.total;
        let got = listing.absorb(page);

        tracing::debug!(
            target: TRACING_TARGET,
            bucket_id,
            offset = cursor,
            limit = page_limit,
            got,
            total,
            "Fetched bounded page"
        );
        cursor = cursor.saturating_add(got);

        if got < page_limit || cursor >= total {
            break;
        }
    }

    Ok(listing)
}

/// Fetch every node from `query.offset` to the end of the collection.
///
/// `query.limit` is only a page-size hint here (capped at
/// [`PAGE_CEILING`], defaulting to it when unset or zero).
pub async fn list_all<F>(
    fetcher: &F,
    bucket_id: &str,
    query: &NodeQuery,
    cancel: &CancellationToken,
) -> std::result::Result<Listing, ListingError>
where
    F: PageFetcher + ?Sized,
{
    let page_size = page_size_hint(query);
    let mut listing = Listing::default();
    let mut cursor = query.get_offset();

    loop {
        if cancel.is_cancelled() {
            return Err(ListingError::new(listing, StorageError::Cancelled));
        }

        let page = match fetcher
            .fetch_page(bucket_id, cursor, page_size, query, cancel)
            .await
        {
            Ok(page) => page,
            Err(e) => return Err(ListingError::new(listing, e)),
        };

        let total = page.total;
        let got = listing.absorb(page);

        tracing::debug!(
            target: TRACING_TARGET,
            bucket_id,
            offset = cursor,
            limit = page_size,
            got,
            total,
            "Fetched page"
        );
        cursor = cursor.saturating_add(got);

        if got == 0 || cursor >= total {
            break;
        }
    }

    Ok(listing)
}

fn page_size_hint(query: &NodeQuery) -> u64 {
    query
        .get_limit()
        .filter(|limit| *limit > 0)
        .unwrap_or(PAGE_CEILING)
        .min(PAGE_CEILING)
}
