use async_trait::async_trait;
use stark_resolver_application::ports::OffchainClient;
use stark_resolver_domain::{OffchainResponse, ResolutionError};
use std::time::Duration;
use tracing::debug;

const EMPTY_ERROR_BODY: &str = "Error while querying server";

/// Queries offchain resolver servers with `GET {uri}{subject}`.
pub struct HttpOffchainClient {
    client: reqwest::Client,
    timeout: Duration,
}

impl HttpOffchainClient {
    pub fn new(timeout: Duration, user_agent: &str) -> Self {
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .user_agent(user_agent)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self { client, timeout }
    }

    async fn fetch(&self, url: &str) -> Result<OffchainResponse, String> {
        let response = self.client.get(url).send().await.map_err(|e| e.to_string())?;
        let status = response.status();
        let body = response.text().await.map_err(|e| e.to_string())?;

        if !status.is_success() {
            debug!(url = %url, status = status.as_u16(), "Offchain server returned an error");
            let body = body.trim();
            return Err(if body.is_empty() {
                EMPTY_ERROR_BODY.to_string()
            } else {
                body.to_string()
            });
        }

        serde_json::from_str(&body).map_err(|e| format!("Invalid response body: {}", e))
    }
}

#[async_trait]
impl OffchainClient for HttpOffchainClient {
    async fn query(&self, uri: &str, subject: &str) -> Result<OffchainResponse, ResolutionError> {
        let url = format!("{}{}", uri, subject);
        debug!(url = %url, "Querying offchain server");

        tokio::time::timeout(self.timeout, self.fetch(&url))
            .await
            .unwrap_or_else(|_| Err(format!("Timeout after {}ms", self.timeout.as_millis())))
            .map_err(|reason| ResolutionError::OffchainQuery {
                uri: uri.to_string(),
                reason,
            })
    }
}
