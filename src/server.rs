//! HTTP trigger. Any request is acknowledged with 204 straight away and the
//! publish run happens in a background task; the caller never sees the result.

use crate::pipeline::Publisher;
use anyhow::{Context, Result};
use axum::extract::State;
use axum::http::StatusCode;
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

pub fn router(publisher: Arc<Publisher>) -> Router {
    Router::new().fallback(trigger).with_state(publisher)
}

async fn trigger(State(publisher): State<Arc<Publisher>>) -> StatusCode {
    tokio::spawn(async move {
        match publisher.run().await {
            Ok(post) => tracing::info!(text = %post.text, "triggered run finished"),
            Err(e) => tracing::error!("triggered run failed: {:#}", e),
        }
    });
    StatusCode::NO_CONTENT
}

pub async fn serve(publisher: Arc<Publisher>, port: u16) -> Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    tracing::info!(port, "listening");
    axum::serve(listener, router(publisher))
        .await
        .context("HTTP server failed")
}
