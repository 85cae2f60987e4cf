//! Contract gateway over Starknet JSON-RPC (`starknet_call`).
//!
//! ```text
//! POST <rpc_url>
//! {"jsonrpc":"2.0","id":1,"method":"starknet_call",
//!  "params":{"request":{"contract_address":"0x..","entry_point_selector":"0x..",
//!            "calldata":["0x..",..]},"block_id":"latest"}}
//! ```
//!
//! Node errors are flattened into a single text so revert payloads survive
//! regardless of where the node nests them (`message`, `data`,
//! `data.revert_error`, `data.execution_error`, ...).

use super::selector::get_selector_from_name;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use stark_resolver_application::ports::{ContractCall, ContractGateway};
use stark_resolver_domain::{Felt, ResolutionError};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tracing::debug;

const BLOCK_LATEST: &str = "latest";

#[derive(Serialize)]
struct RpcRequest<'a> {
    jsonrpc: &'static str,
    id: u64,
    method: &'static str,
    params: CallParams<'a>,
}

#[derive(Serialize)]
struct CallParams<'a> {
    request: FunctionCall<'a>,
    block_id: &'static str,
}

#[derive(Serialize)]
struct FunctionCall<'a> {
    contract_address: Felt,
    entry_point_selector: Felt,
    calldata: &'a [Felt],
}

#[derive(Deserialize)]
struct RpcResponse {
    #[serde(default)]
    result: Option<Vec<Felt>>,
    #[serde(default)]
    error: Option<RpcError>,
}

#[derive(Deserialize)]
struct RpcError {
    code: i64,
    message: String,
    #[serde(default)]
    data: Option<Value>,
}

impl RpcError {
    fn flatten(&self) -> String {
        let mut parts = vec![self.message.clone()];
        if let Some(data) = &self.data {
            collect_strings(data, &mut parts);
        }
        parts.join(": ")
    }
}

/// Every string and number leaf of `value`, depth first. Object members are
/// visited in key order (`serde_json::Map` is sorted without `preserve_order`).
fn collect_strings(value: &Value, out: &mut Vec<String>) {
    match value {
        Value::String(s) if !s.is_empty() => out.push(s.clone()),
        Value::Array(items) => items.iter().for_each(|v| collect_strings(v, out)),
        Value::Object(map) => map.values().for_each(|v| collect_strings(v, out)),
        Value::Number(n) => out.push(n.to_string()),
        _ => {}
    }
}

pub struct StarknetRpcGateway {
    client: reqwest::Client,
    rpc_url: String,
    contract: Felt,
    timeout: Duration,
    next_id: AtomicU64,
}

impl StarknetRpcGateway {
    pub fn new(rpc_url: impl Into<String>, contract: Felt, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .pool_max_idle_per_host(4)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            client,
            rpc_url: rpc_url.into(),
            contract,
            timeout,
            next_id: AtomicU64::new(1),
        }
    }
}

#[async_trait]
impl ContractGateway for StarknetRpcGateway {
    async fn call(&self, call: &ContractCall) -> Result<Vec<Felt>, ResolutionError> {
        let request = RpcRequest {
            jsonrpc: "2.0",
            id: self.next_id.fetch_add(1, Ordering::Relaxed),
            method: "starknet_call",
            params: CallParams {
                request: FunctionCall {
                    contract_address: self.contract,
                    entry_point_selector: get_selector_from_name(call.entrypoint),
                    calldata: &call.calldata,
                },
                block_id: BLOCK_LATEST,
            },
        };

        debug!(
            url = %self.rpc_url,
            entrypoint = call.entrypoint,
            calldata_len = call.calldata.len(),
            "Sending starknet_call"
        );

        let response = tokio::time::timeout(
            self.timeout,
            self.client.post(&self.rpc_url).json(&request).send(),
        )
        .await
        .map_err(|_| {
            ResolutionError::ContractCall(format!(
                "Timeout calling {} on {}",
                call.entrypoint, self.rpc_url
            ))
        })?
        .map_err(|e| {
            ResolutionError::ContractCall(format!("RPC request to {} failed: {}", self.rpc_url, e))
        })?;

        let status = response.status();
        let body = tokio::time::timeout(self.timeout, response.text())
            .await
            .map_err(|_| {
                ResolutionError::ContractCall(format!(
                    "Timeout reading RPC response from {}",
                    self.rpc_url
                ))
            })?
            .map_err(|e| {
                ResolutionError::ContractCall(format!(
                    "Failed to read RPC response from {}: {}",
                    self.rpc_url, e
                ))
            })?;

        let parsed: RpcResponse = match serde_json::from_str(&body) {
            Ok(parsed) => parsed,
            Err(_) if !status.is_success() => {
                return Err(ResolutionError::ContractCall(format!(
                    "RPC server {} returned HTTP {}: {}",
                    self.rpc_url,
                    status.as_u16(),
                    body.trim()
                )));
            }
            Err(e) => {
                return Err(ResolutionError::ContractCall(format!(
                    "Invalid RPC response from {}: {}",
                    self.rpc_url, e
                )));
            }
        };

        if let Some(error) = parsed.error {
            debug!(entrypoint = call.entrypoint, code = error.code, "Contract call failed");
            return Err(ResolutionError::ContractCall(error.flatten()));
        }

        parsed.result.ok_or_else(|| {
            ResolutionError::ContractCall(format!(
                "RPC response from {} has neither result nor error",
                self.rpc_url
            ))
        })
    }
}
