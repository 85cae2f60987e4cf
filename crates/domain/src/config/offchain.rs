use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OffchainConfig {
    /// Upper bound for one offchain server query, connect to last body byte.
    #[serde(default = "default_query_timeout_ms")]
    pub query_timeout_ms: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for OffchainConfig {
    fn default() -> Self {
        Self {
            query_timeout_ms: default_query_timeout_ms(),
            user_agent: default_user_agent(),
        }
    }
}

fn default_query_timeout_ms() -> u64 {
    10_000
}

fn default_user_agent() -> String {
    concat!("stark-resolver/", env!("CARGO_PKG_VERSION")).to_string()
}
