//! Shared helpers for node operations.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

const BUCKETS_PREFIX: &str = "/v2/file_storage/buckets";

/// Characters escaped inside one path segment: everything but RFC 3986 unreserved.
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

fn segment(id: &str) -> String {
    utf8_percent_encode(id, SEGMENT).to_string()
}

/// Path of the node collection of a bucket.
pub(crate) fn nodes_path(bucket_id: &str) -> String {
    format!("{}/{}/nodes", BUCKETS_PREFIX, segment(bucket_id))
}

/// Path of a single node.
pub(crate) fn node_path(bucket_id: &str, node_id: &str) -> String {
    format!("{}/{}", nodes_path(bucket_id), segment(node_id))
}

/// Path of an action (`rename`, `copy`, `move`) on a node.
pub(crate) fn node_action_path(bucket_id: &str, node_id: &str, action: &str) -> String {
    format!("{}/{}", node_path(bucket_id, node_id), action)
}
