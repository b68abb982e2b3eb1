//! Query options for node listings.

use url::form_urlencoded;

/// Listing parameters for the `nodes` endpoint.
///
/// Built with chained setters; a field reaches the wire only when it differs
/// from its zero value (unset limit, offset 0, empty string, unset flag).
///
/// # Example
/// ```
/// use bucketlib::NodeQuery;
///
/// let query = NodeQuery::new().limit(1000).name("report");
/// assert_eq!(query.to_query_string(), "limit=1000&name=report");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeQuery {
    limit: Option<u64>,
    offset: u64,
    is_directory: Option<bool>,
    name: String,
    order_by: String,
    order: String,
    parent_node_id: String,
}

impl NodeQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Desired item count for bounded listings, page size for unbounded ones.
    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Starting position in the matching collection.
    pub fn offset(mut self, offset: u64) -> Self {
        self.offset = offset;
        self
    }

    /// Restrict to directories (`true`) or files (`false`).
    pub fn is_directory(mut self, is_directory: bool) -> Self {
        self.is_directory = Some(is_directory);
        self
    }

    /// Name substring filter.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Field to order by (e.g. `created_at`).
    pub fn order_by(mut self, order_by: impl Into<String>) -> Self {
        self.order_by = order_by.into();
        self
    }

    /// Order direction (`asc` or `desc`).
    pub fn order(mut self, order: impl Into<String>) -> Self {
        self.order = order.into();
        self
    }

    /// Only list children of this node.
    pub fn parent_node_id(mut self, parent_node_id: impl Into<String>) -> Self {
        self.parent_node_id = parent_node_id.into();
        self
    }

    pub fn get_limit(&self) -> Option<u64> {
        self.limit
    }

    pub fn get_offset(&self) -> u64 {
        self.offset
    }

    /// Encode the set fields as ordered key/value pairs.
    pub fn encode(&self) -> Vec<(&'static str, String)> {
        let fields = [
            ("limit", non_zero(self.limit.unwrap_or(0), 0)),
            ("offset", non_zero(self.offset, 0)),
            ("is_directory", self.is_directory.map(|flag| flag.to_string())),
            ("name", non_zero(self.name.as_str(), "")),
            ("order_by", non_zero(self.order_by.as_str(), "")),
            ("order", non_zero(self.order.as_str(), "")),
            ("parent_node_id", non_zero(self.parent_node_id.as_str(), "")),
        ];

        fields
            .into_iter()
            .filter_map(|(key, value)| value.map(|value| (key, value)))
            .collect()
    }

    /// Encode as a URL query string (empty when nothing is set).
    pub fn to_query_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.encode())
            .finish()
    }

    /// Copy of this query addressing one page.
    pub(crate) fn page(&self, offset: u64, limit: u64) -> Self {
        self.clone().offset(offset).limit(limit)
    }
}

fn non_zero<T: PartialEq + ToString>(value: T, zero: T) -> Option<String> {
    if value == zero {
        None
    } else {
        Some(value.to_string())
    }
}
