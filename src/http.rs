//! HTTP client wrapper for storage API requests.

use reqwest::{Client, Method};

use crate::config::ClientConfig;
use crate::error::{Result, StorageError};

/// Raw HTTP response: status code and body text.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// HTTP client for making requests to the storage servers.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Create a new HTTP client with default settings.
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// Create an HTTP client honoring the timeout, user agent and proxy of `config`.
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        let mut builder = Client::builder()
            .timeout(config.effective_timeout())
            .user_agent(config.effective_user_agent());

        if let Some(proxy) = &config.proxy {
            let proxy = reqwest::Proxy::all(proxy)
                .map_err(|e| StorageError::InvalidConfig(format!("Invalid proxy: {}", e)))?;
            builder = builder.proxy(proxy);
        }

        let client = builder
            .build()
            .map_err(|e| StorageError::InvalidConfig(format!("Failed to build client: {}", e)))?;

        Ok(Self { client })
    }

    /// Send a request and return the body text.
    ///
    /// # Arguments
    /// * `method` - HTTP method
    /// * `url` - Absolute URL, without query string
    /// * `query` - Query parameters, appended in order
    /// * `body` - Optional JSON body as string
    ///
    /// # Returns
    /// Status and body of a 2xx response; any other status is an error.
    pub async fn send(
        &self,
        method: Method,
        url: &str,
        query: &[(String, String)],
        body: Option<String>,
    ) -> Result<HttpResponse> {
        let mut request = self.client.request(method, url).query(query);

        if let Some(body) = body {
            request = request
                .header("Content-Type", "application/json")
                .body(body);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(StorageError::HttpError(status.as_u16()));
        }

        Ok(HttpResponse {
            status: status.as_u16(),
            body: response.text().await?,
        })
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let _client = HttpClient::new();
        let _default = HttpClient::default();
    }

    #[test]
    fn test_client_from_config() {
        let config = ClientConfig::default().with_proxy("http://127.0.0.1:8080");
        assert!(HttpClient::from_config(&config).is_ok());
    }

    #[test]
    fn test_proxy_invalid() {
        let config = ClientConfig::default().with_proxy(":::::::");
        let res = HttpClient::from_config(&config);
        assert!(matches!(res, Err(StorageError::InvalidConfig(_))));
    }
}
