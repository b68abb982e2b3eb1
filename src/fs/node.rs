//! Filesystem node types and wire payloads.

use serde::{Deserialize, Serialize};

/// Node type enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeType {
    /// Regular file
    File,
    /// Directory
    Directory,
}

/// File metadata carried by file nodes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeFile {
    /// File size in bytes
    pub size: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checksum: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
}

/// A file or directory entry in a bucket.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Node {
    /// Node identifier (unique within the bucket)
    pub id: String,
    /// Node name
    pub name: String,
    /// Object key of the node in the bucket
    pub key: String,
    pub is_directory: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_node_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bucket_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_by: Option<String>,
    /// File metadata (absent for directories)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<NodeFile>,
}

impl Node {
    pub fn node_type(&self) -> NodeType {
        if self.is_directory {
            NodeType::Directory
        } else {
            NodeType::File
        }
    }

    /// Check if this node is a file.
    pub fn is_file(&self) -> bool {
        self.node_type() == NodeType::File
    }

    /// Check if this node is a folder.
    pub fn is_folder(&self) -> bool {
        self.node_type() == NodeType::Directory
    }

    /// File size in bytes (0 for folders).
    pub fn size(&self) -> u64 {
        self.file.as_ref().map(|f| f.size).unwrap_or(0)
    }
}

/// Response envelope for single-node endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(crate) struct SingleNode {
    pub node: Node,
}

/// Body of a create-node request.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct NodeRequest<'a> {
    pub name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_node_id: Option<&'a str>,
}

/// Body of a rename request.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct NodeName<'a> {
    pub name: &'a str,
}

/// Body of a copy or move request.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct NodeTransfer<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dest_bucket_id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_node_id: Option<&'a str>,
}
