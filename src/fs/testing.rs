//! In-memory storage service used by the unit tests.

use std::sync::Mutex;

use async_trait::async_trait;
use reqwest::Method;
use serde_json::{json, Value};

use super::listing::PAGE_CEILING;
use crate::api::{ApiRequest, ApiResponse, Transport};
use crate::error::{Result, StorageError};

/// Serves a bucket of `total` nodes (ids `"0"`, `"1"`, ...) the way the
/// remote service does, and records every request it receives.
pub(crate) struct MockTransport {
    total: u64,
    reply: Value,
    fail_on_call: Option<usize>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl MockTransport {
    pub(crate) fn with_total(total: u64) -> Self {
        Self {
            total,
            reply: Value::Null,
            fail_on_call: None,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Answer every non-listing request with `body`.
    pub(crate) fn replying(body: Value) -> Self {
        Self {
            reply: body,
            ..Self::with_total(0)
        }
    }

    /// Fail the `call`-th request (1-based) with a 500.
    pub(crate) fn failing_on(mut self, call: usize) -> Self {
        self.fail_on_call = Some(call);
        self
    }

    pub(crate) fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// (offset, limit) of every listing request, in order.
    pub(crate) fn pages(&self) -> Vec<(u64, u64)> {
        self.requests()
            .iter()
            .filter(|r| is_listing(r))
            .map(|r| (query_number(r, "offset", 0), query_number(r, "limit", 0)))
            .collect()
    }
}

fn is_listing(request: &ApiRequest) -> bool {
    request.method == Method::GET && request.path.ends_with("/nodes")
}

fn query_number(request: &ApiRequest, key: &str, default: u64) -> u64 {
    request
        .query_value(key)
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[async_trait]
impl Transport for MockTransport {
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse> {
        let call = {
            let mut requests = self.requests.lock().unwrap();
            requests.push(request.clone());
            requests.len()
        };

        if self.fail_on_call == Some(call) {
            return Err(StorageError::HttpError(500));
        }

        if !is_listing(&request) {
            return Ok(ApiResponse::new(200, self.reply.clone()));
        }

        let offset = query_number(&request, "offset", 0);
        let limit = query_number(&request, "limit", PAGE_CEILING);
        let count = self.total.saturating_sub(offset).min(PAGE_CEILING).min(limit);
        let nodes: Vec<Value> = (offset..offset + count)
            .map(|i| json!({ "id": i.to_string(), "name": format!("node-{}", i) }))
            .collect();

        Ok(ApiResponse::new(
            200,
            json!({ "total": self.total, "nodes": nodes }),
        ))
    }
}
