use super::serve;
use axum::extract::State;
use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::{Json, Router};
use serde_json::Value;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use tokio::sync::oneshot;

#[derive(Clone)]
enum Reply {
    Hint(Value),
    Status(StatusCode, &'static str),
}

#[derive(Clone)]
struct ServerState {
    reply: Reply,
    paths: Arc<Mutex<Vec<String>>>,
}

/// An offchain resolver server answering every path the same way.
pub struct OffchainServer {
    addr: SocketAddr,
    paths: Arc<Mutex<Vec<String>>>,
    _shutdown: oneshot::Sender<()>,
}

impl OffchainServer {
    pub async fn with_hint(hint: Value) -> Self {
        Self::start(Reply::Hint(hint)).await
    }

    pub async fn failing(status: StatusCode, body: &'static str) -> Self {
        Self::start(Reply::Status(status, body)).await
    }

    async fn start(reply: Reply) -> Self {
        let paths = Arc::new(Mutex::new(Vec::new()));
        let state = ServerState {
            reply,
            paths: paths.clone(),
        };
        let router = Router::new().fallback(handle).with_state(state);
        let (addr, shutdown) = serve(router).await;
        Self {
            addr,
            paths,
            _shutdown: shutdown,
        }
    }

    /// Base URI the subject is appended to.
    pub fn uri(&self) -> String {
        format!("http://{}/", self.addr)
    }

    /// Request paths received so far, query string included.
    pub fn paths(&self) -> Vec<String> {
        self.paths.lock().unwrap().clone()
    }

    pub fn hits(&self) -> usize {
        self.paths.lock().unwrap().len()
    }
}

async fn handle(State(state): State<ServerState>, uri: Uri) -> Response {
    let path = uri
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_default();
    state.paths.lock().unwrap().push(path);

    match state.reply {
        Reply::Hint(hint) => Json(hint).into_response(),
        Reply::Status(status, body) => (status, body).into_response(),
    }
}
