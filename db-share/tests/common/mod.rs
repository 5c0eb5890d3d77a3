//! Mock share endpoint for end-to-end tests.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::{
    Json, Router,
    extract::State,
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use db_share::share::{ShareClient, ShareConfig};
use serde_json::Value;

pub const SHARE_PATH: &str = "/web/api/angebote/verbindung/teilen";

/// Bodies the mock endpoint has received, in order.
#[derive(Clone, Default)]
pub struct Received(Arc<Mutex<Vec<Value>>>);

impl Received {
    pub fn bodies(&self) -> Vec<Value> {
        self.0.lock().unwrap().clone()
    }
}

#[derive(Clone)]
struct MockState {
    status: StatusCode,
    body: String,
    received: Received,
}

async fn share(State(state): State<MockState>, Json(body): Json<Value>) -> impl IntoResponse {
    state.received.0.lock().unwrap().push(body);
    (
        state.status,
        [(header::CONTENT_TYPE, "application/json")],
        state.body,
    )
}

/// Spawn a share endpoint on an ephemeral port that always answers with
/// `status` and `body`.
pub async fn spawn_share_endpoint(
    status: StatusCode,
    body: impl Into<String>,
) -> (SocketAddr, Received) {
    let received = Received::default();
    let state = MockState {
        status,
        body: body.into(),
        received: received.clone(),
    };
    let router = Router::new()
        .route(SHARE_PATH, post(share))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind failed");
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("server failed");
    });

    (addr, received)
}

/// A share client pointed at a mock endpoint.
pub fn client_for(addr: SocketAddr) -> ShareClient {
    let config = ShareConfig::default()
        .with_base_url(format!("http://{addr}"))
        .with_timeout(5);
    ShareClient::new(config).expect("client")
}
