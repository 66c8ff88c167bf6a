#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use blog_api_rust::{
    auth::{issue_token, Claims},
    database::MemoryPostStore,
    AppState,
};

pub const SECRET: &str = "integration-test-secret";

pub struct TestServer {
    pub base_url: String,
    pub store: Arc<MemoryPostStore>,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Serve the real router over an in-memory store on an ephemeral port.
/// The server lives as long as the calling test's runtime.
pub async fn spawn_server() -> Result<TestServer> {
    let store = Arc::new(MemoryPostStore::new());
    let state = AppState::new(store.clone(), SECRET)?;

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .context("failed to bind test listener")?;
    let addr: SocketAddr = listener.local_addr()?;

    tokio::spawn(async move {
        axum::serve(listener, blog_api_rust::app(state))
            .await
            .expect("test server failed");
    });

    Ok(TestServer {
        base_url: format!("http://{}", addr),
        store,
    })
}

/// `Bearer <token>` for `id`, signed with the test secret
pub fn bearer(id: &str) -> String {
    bearer_with_secret(id, SECRET)
}

pub fn bearer_with_secret(id: &str, secret: &str) -> String {
    let token = issue_token(&Claims::new(id, Some(1)).unwrap(), secret).expect("failed to sign test token");
    format!("Bearer {}", token)
}
