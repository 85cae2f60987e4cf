use super::serve;
use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use tokio::sync::oneshot;

#[derive(Clone)]
struct NodeState {
    direct: Arc<Value>,
    hinted: Arc<Value>,
    calls: Arc<Mutex<Vec<Value>>>,
}

/// A Starknet JSON-RPC node hosting the naming contract.
///
/// Calls without a hint end with an empty hint span (`0x0`) and get the
/// `direct` reply; calls carrying a hint get the `hinted` reply.
pub struct NamingNode {
    addr: SocketAddr,
    calls: Arc<Mutex<Vec<Value>>>,
    _shutdown: oneshot::Sender<()>,
}

impl NamingNode {
    pub async fn start(direct: Value, hinted: Value) -> Self {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let state = NodeState {
            direct: Arc::new(direct),
            hinted: Arc::new(hinted),
            calls: calls.clone(),
        };
        let router = Router::new().route("/", post(handle)).with_state(state);
        let (addr, shutdown) = serve(router).await;
        Self {
            addr,
            calls,
            _shutdown: shutdown,
        }
    }

    pub fn url(&self) -> String {
        format!("http://{}/", self.addr)
    }

    /// `params.request` of every `starknet_call` received.
    pub fn calls(&self) -> Vec<Value> {
        self.calls.lock().unwrap().clone()
    }

    pub fn result(felts: &[&str]) -> Value {
        json!({ "result": felts })
    }

    pub fn contract_error(data: &str) -> Value {
        json!({
            "error": {
                "code": 40,
                "message": "Contract error",
                "data": { "revert_error": data }
            }
        })
    }
}

async fn handle(State(state): State<NodeState>, Json(request): Json<Value>) -> Json<Value> {
    let call = request["params"]["request"].clone();
    let hinted = call["calldata"]
        .as_array()
        .and_then(|calldata| calldata.last())
        .is_some_and(|last| last != "0x0");
    state.calls.lock().unwrap().push(call);

    let mut reply = if hinted {
        (*state.hinted).clone()
    } else {
        (*state.direct).clone()
    };
    reply["jsonrpc"] = json!("2.0");
    reply["id"] = request["id"].clone();
    Json(reply)
}
