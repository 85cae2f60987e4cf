use async_trait::async_trait;
use stark_resolver_domain::{OffchainResponse, ResolutionError};

/// HTTP access to offchain resolver servers.
#[async_trait]
pub trait OffchainClient: Send + Sync {
    /// Queries `{uri}{subject}` and parses the hint body.
    ///
    /// Any failure (transport, non-success status, malformed body) is
    /// reported as `ResolutionError::OffchainQuery` naming `uri`.
    async fn query(&self, uri: &str, subject: &str) -> Result<OffchainResponse, ResolutionError>;
}
