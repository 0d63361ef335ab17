//! Loopback notes server with scripted responses.

// Allow dead code since this is a test utility shared by several test crates
#![allow(dead_code)]

use axum::Router;
use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

/// A request as received by the mock server.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    /// Header names are lowercase.
    pub headers: HashMap<String, String>,
    pub body: String,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(&name.to_lowercase()).map(|s| s.as_str())
    }

    /// Parses the body as JSON.
    ///
    /// # Panics
    ///
    /// Panics if the body is not valid JSON.
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body)
            .unwrap_or_else(|e| panic!("request body is not JSON ({}): {}", e, self.body))
    }
}

#[derive(Default)]
struct ServerState {
    routes: HashMap<(String, String), (u16, String)>,
    requests: Vec<RecordedRequest>,
}

type Shared = Arc<Mutex<ServerState>>;

/// HTTP server on 127.0.0.1 answering from a route table.
///
/// Runs on its own thread so it serves both blocking CLI tests and async
/// tests. Unrouted requests get `404 Not found.`.
pub struct MockServer {
    addr: SocketAddr,
    state: Shared,
}

impl MockServer {
    pub fn start() -> Self {
        let listener =
            std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind mock server");
        listener
            .set_nonblocking(true)
            .expect("Failed to set listener non-blocking");
        let addr = listener.local_addr().expect("Failed to read local address");

        let state: Shared = Arc::default();
        let app = Router::new().fallback(record).with_state(state.clone());

        std::thread::spawn(move || {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .expect("Failed to build mock server runtime");
            runtime.block_on(async move {
                let listener = tokio::net::TcpListener::from_std(listener)
                    .expect("Failed to adopt listener");
                axum::serve(listener, app).await.expect("Mock server failed");
            });
        });

        Self { addr, state }
    }

    /// Base URL to pass as `--server`.
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Scripts the response for a method and path.
    pub fn route(&self, method: &str, path: &str, status: u16, body: &str) -> &Self {
        self.state.lock().unwrap().routes.insert(
            (method.to_string(), path.to_string()),
            (status, body.to_string()),
        );
        self
    }

    /// All requests received so far, in arrival order.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.lock().unwrap().requests.clone()
    }

    /// Requests received for a method and path.
    pub fn requests_to(&self, method: &str, path: &str) -> Vec<RecordedRequest> {
        self.requests()
            .into_iter()
            .filter(|r| r.method == method && r.path == path)
            .collect()
    }
}

async fn record(
    State(state): State<Shared>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> (StatusCode, String) {
    let request = RecordedRequest {
        method: method.to_string(),
        path: uri.path().to_string(),
        headers: headers
            .iter()
            .map(|(k, v)| {
                (
                    k.as_str().to_lowercase(),
                    v.to_str().unwrap_or_default().to_string(),
                )
            })
            .collect(),
        body,
    };

    let mut state = state.lock().unwrap();
    let key = (request.method.clone(), request.path.clone());
    let (status, body) = state
        .routes
        .get(&key)
        .cloned()
        .unwrap_or((404, "Not found.".to_string()));
    state.requests.push(request);

    let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, body)
}
