//! Storage API client backed by reqwest.

use async_trait::async_trait;
use serde_json::Value;

use super::request::{ApiRequest, ApiResponse, Transport};
use super::TRACING_TARGET;
use crate::config::ClientConfig;
use crate::error::Result;
use crate::http::HttpClient;

/// Storage API client.
///
/// Holds only immutable configuration, so one instance can serve any number
/// of concurrent calls.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: HttpClient,
    config: ClientConfig,
}

impl ApiClient {
    /// Create a new API client.
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;
        let http = HttpClient::from_config(&config)?;

        tracing::debug!(
            target: TRACING_TARGET,
            base_url = %config.base_url,
            timeout_ms = config.effective_timeout().as_millis() as u64,
            "Created storage API client"
        );

        Ok(Self { http, config })
    }

    /// Create a client from `BUCKETLIB_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    /// Get the client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Absolute URL for an API path.
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.config.trimmed_base_url(), path)
    }
}

#[async_trait]
impl Transport for ApiClient {
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse> {
        let url = self.url_for(&request.path);
        let body = request.body.as_ref().map(serde_json::to_string).transpose()?;

        tracing::debug!(
            target: TRACING_TARGET,
            method = %request.method,
            path = %request.path,
            params = request.query.len(),
            "Sending API request"
        );

        let response = self
            .http
            .send(request.method, &url, &request.query, body)
            .await?;

        let body = if response.body.trim().is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&response.body)?
        };

        tracing::debug!(
            target: TRACING_TARGET,
            status = response.status,
            bytes = response.body.len(),
            "Received API response"
        );

        Ok(ApiResponse::new(response.status, body))
    }
}

#[cfg(test)]
mod tests {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    use super::*;

    /// Answer one connection with a canned response. The handle yields the
    /// request head as received.
    async fn serve_once(status_line: &str, body: &str) -> (ClientConfig, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let response = format!(
            "HTTP/1.1 {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut received = Vec::new();
            let mut buf = [0u8; 1024];
            let head_end = loop {
                let n = socket.read(&mut buf).await.unwrap();
                assert!(n > 0, "connection closed before request head");
                received.extend_from_slice(&buf[..n]);
                if let Some(pos) = received.windows(4).position(|w| w == b"\r\n\r\n") {
                    break pos + 4;
                }
            };
            let head = String::from_utf8_lossy(&received[..head_end]).to_string();
            let content_length = head
                .lines()
                .find_map(|line| {
                    let (name, value) = line.split_once(':')?;
                    name.eq_ignore_ascii_case("content-length")
                        .then(|| value.trim().parse::<usize>().ok())
                        .flatten()
                })
                .unwrap_or(0);
            while received.len() < head_end + content_length {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                received.extend_from_slice(&buf[..n]);
            }
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
            head
        });

        let config = ClientConfig::new(format!("http://{}", addr))
            .with_timeout(std::time::Duration::from_secs(5));
        (config, handle)
    }

    #[test]
    fn test_client_creation() {
        let client = ApiClient::new(ClientConfig::default());
        assert!(client.is_ok());
    }

    #[test]
    fn test_client_rejects_invalid_base_url() {
        let client = ApiClient::new(ClientConfig::new("storage"));
        assert!(client.is_err());
    }

    #[test]
    fn test_url_for() {
        let client = ApiClient::new(ClientConfig::new("http://127.0.0.1:9000/")).unwrap();
        assert_eq!(
            client.url_for("/v2/file_storage/buckets/b/nodes"),
            "http://127.0.0.1:9000/v2/file_storage/buckets/b/nodes"
        );
    }

    #[tokio::test]
    async fn test_unreachable_server_is_transport_error() {
        let config = ClientConfig::new("http://127.0.0.1:1")
            .with_timeout(std::time::Duration::from_secs(2));
        let client = ApiClient::new(config).unwrap();
        let err = client
            .execute(ApiRequest::get("/v2/file_storage/buckets/b/nodes"))
            .await
            .unwrap_err();
        assert!(err.is_transport());
    }

    #[tokio::test]
    async fn test_server_error_status_is_transport_error() {
        let (config, server) =
            serve_once("500 Internal Server Error", "{\"error\":\"boom\"}").await;
        let client = ApiClient::new(config).unwrap();
        let err = client
            .execute(ApiRequest::get("/v2/file_storage/buckets/b/nodes"))
            .await
            .unwrap_err();
        assert!(err.is_transport());
        assert!(matches!(err, crate::error::StorageError::HttpError(500)));

        let head = server.await.unwrap();
        assert!(head.starts_with("GET /v2/file_storage/buckets/b/nodes HTTP/1.1"));
    }

    #[tokio::test]
    async fn test_empty_success_body_is_null() {
        let (config, server) = serve_once("204 No Content", "").await;
        let client = ApiClient::new(config).unwrap();
        let response = client
            .execute(ApiRequest::delete("/v2/file_storage/buckets/b/nodes/n"))
            .await
            .unwrap();
        assert_eq!(response.status, 204);
        assert!(response.body.is_null());
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_bodiless_copy_decodes_to_default_node() {
        use crate::fs::{FileStorage, Node};
        use tokio_util::sync::CancellationToken;

        let (config, server) = serve_once("204 No Content", "").await;
        let storage = FileStorage::new(config).unwrap();
        let node = storage
            .copy_node("b", "n", Some("other"), None, &CancellationToken::new())
            .await
            .unwrap();
        assert_eq!(node, Node::default());

        let head = server.await.unwrap();
        assert!(head.starts_with("POST /v2/file_storage/buckets/b/nodes/n/copy HTTP/1.1"));
    }

    #[tokio::test]
    async fn test_invalid_json_body_is_decoding_error() {
        let (config, server) = serve_once("200 OK", "not json").await;
        let client = ApiClient::new(config).unwrap();
        let err = client
            .execute(ApiRequest::get("/v2/file_storage/buckets/b/nodes"))
            .await
            .unwrap_err();
        assert!(err.is_decoding());
        assert!(!err.is_transport());
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_escaped_node_id_reaches_server_as_one_segment() {
        use crate::fs::FileStorage;
        use tokio_util::sync::CancellationToken;

        let (config, server) = serve_once("204 No Content", "").await;
        let storage = FileStorage::new(config).unwrap();
        storage
            .delete_node("b", "dir/report?.pdf", &CancellationToken::new())
            .await
            .unwrap();

        let head = server.await.unwrap();
        assert!(head.starts_with(
            "DELETE /v2/file_storage/buckets/b/nodes/dir%2Freport%3F.pdf HTTP/1.1"
        ));
    }
}
