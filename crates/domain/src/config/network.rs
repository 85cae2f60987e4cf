use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NetworkConfig {
    /// Starknet JSON-RPC endpoint.
    #[serde(default = "default_rpc_url")]
    pub rpc_url: String,

    /// Address of the naming contract.
    #[serde(default = "default_naming_contract")]
    pub naming_contract: String,

    #[serde(default = "default_rpc_timeout_ms")]
    pub rpc_timeout_ms: u64,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            rpc_url: default_rpc_url(),
            naming_contract: default_naming_contract(),
            rpc_timeout_ms: default_rpc_timeout_ms(),
        }
    }
}

fn default_rpc_url() -> String {
    "https://starknet-mainnet.public.blastapi.io".to_string()
}

fn default_naming_contract() -> String {
    "0x6ac597f8116f886fa1c97a23fa4e08299975ecaf6b598873ca6792b9bbfb678".to_string()
}

fn default_rpc_timeout_ms() -> u64 {
    15_000
}
