//! Node mutation operations.

use tokio_util::sync::CancellationToken;

use super::utils::{node_action_path, node_path, nodes_path};
use crate::api::{ApiRequest, Transport};
use crate::error::Result;
use crate::fs::node::{Node, NodeName, NodeRequest, NodeTransfer, SingleNode};
use crate::fs::storage::FileStorage;
use crate::fs::TRACING_TARGET;

impl<T: Transport> FileStorage<T> {
    /// Create a node named `name`.
    ///
    /// # Arguments
    /// * `bucket_id` - Bucket to create the node in
    /// * `name` - Name of the new node
    /// * `parent_node_id` - Parent directory, or `None` for the bucket root
    pub async fn create_node(
        &self,
        bucket_id: &str,
        name: &str,
        parent_node_id: Option<&str>,
        cancel: &CancellationToken,
    ) -> Result<Node> {
        let request = ApiRequest::post(nodes_path(bucket_id)).with_json(&NodeRequest {
            name,
            parent_node_id,
        })?;

        tracing::debug!(target: TRACING_TARGET, bucket_id, node_name = name, "Creating node");
        self.send_for_node(request, cancel).await
    }

    /// Remove a file or directory.
    pub async fn delete_node(
        &self,
        bucket_id: &str,
        node_id: &str,
        cancel: &CancellationToken,
    ) -> Result<()> {
        let request = ApiRequest::delete(node_path(bucket_id, node_id));

        tracing::debug!(target: TRACING_TARGET, bucket_id, node_id, "Deleting node");
        self.send(request, cancel).await?;
        Ok(())
    }

    /// Rename a file or directory.
    ///
    /// `name` is the new name only, not a path.
    pub async fn rename_node(
        &self,
        bucket_id: &str,
        node_id: &str,
        name: &str,
        cancel: &CancellationToken,
    ) -> Result<Node> {
        let request = ApiRequest::post(node_action_path(bucket_id, node_id, "rename"))
            .with_json(&NodeName { name })?;

        tracing::debug!(target: TRACING_TARGET, bucket_id, node_id, new_name = name, "Renaming node");
        self.send_for_node(request, cancel).await
    }

    /// Copy a node, optionally into another bucket and/or under another parent.
    pub async fn copy_node(
        &self,
        bucket_id: &str,
        node_id: &str,
        dest_bucket_id: Option<&str>,
        parent_node_id: Option<&str>,
        cancel: &CancellationToken,
    ) -> Result<Node> {
        self.transfer_node("copy", bucket_id, node_id, dest_bucket_id, parent_node_id, cancel)
            .await
    }

    /// Move a node, optionally into another bucket and/or under another parent.
    pub async fn move_node(
        &self,
        bucket_id: &str,
        node_id: &str,
        dest_bucket_id: Option<&str>,
        parent_node_id: Option<&str>,
        cancel: &CancellationToken,
    ) -> Result<Node> {
        self.transfer_node("move", bucket_id, node_id, dest_bucket_id, parent_node_id, cancel)
            .await
    }

    async fn transfer_node(
        &self,
        action: &str,
        bucket_id: &str,
        node_id: &str,
        dest_bucket_id: Option<&str>,
        parent_node_id: Option<&str>,
        cancel: &CancellationToken,
    ) -> Result<Node> {
        let request = ApiRequest::post(node_action_path(bucket_id, node_id, action)).with_json(
            &NodeTransfer {
                dest_bucket_id,
                parent_node_id,
            },
        )?;

        tracing::debug!(
            target: TRACING_TARGET,
            action,
            bucket_id,
            node_id,
            dest_bucket_id = dest_bucket_id.unwrap_or(bucket_id),
            "Transferring node"
        );
        self.send_for_node(request, cancel).await
    }

    async fn send_for_node(&self, request: ApiRequest, cancel: &CancellationToken) -> Result<Node> {
        let response: SingleNode = self.send(request, cancel).await?.decode()?;
        Ok(response.node)
    }
}
