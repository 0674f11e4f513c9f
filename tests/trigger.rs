//! The HTTP trigger answers 204 immediately and runs the pipeline in the background.

mod common;

use ainews_bot::config::Config;
use ainews_bot::pipeline::Publisher;
use ainews_bot::server;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use axum_test::TestServer;
use serde_json::json;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// A Bluesky that counts login attempts and rejects all of them, so every
/// background run stops right after authentication.
async fn rejecting_bluesky(logins: Arc<AtomicUsize>) -> String {
    let app = Router::new().route(
        "/xrpc/com.atproto.server.createSession",
        post(move || {
            let logins = logins.clone();
            async move {
                logins.fetch_add(1, Ordering::SeqCst);
                (
                    StatusCode::UNAUTHORIZED,
                    Json(json!({"error": "AuthenticationRequired", "message": "nope"})),
                )
            }
        }),
    );
    common::spawn(app).await
}

async fn wait_for(counter: &AtomicUsize, expected: usize) -> bool {
    for _ in 0..100 {
        if counter.load(Ordering::SeqCst) >= expected {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    false
}

#[tokio::test]
async fn test_any_request_is_acknowledged_and_runs_pipeline() {
    let logins = Arc::new(AtomicUsize::new(0));
    let base = rejecting_bluesky(logins.clone()).await;

    let mut config = Config::default();
    config.bluesky.api_base = base;
    config.feeds.urls = Vec::new();

    let publisher = Arc::new(Publisher::new(&config, common::credentials()).unwrap());
    let server = TestServer::new(server::router(publisher)).unwrap();

    let response = server.get("/").await;
    response.assert_status(StatusCode::NO_CONTENT);
    assert!(response.text().is_empty());

    let response = server.post("/some/other/path").await;
    response.assert_status(StatusCode::NO_CONTENT);
    assert!(response.text().is_empty());

    // Both runs fail at login, but neither failure reaches the caller.
    assert!(wait_for(&logins, 2).await, "background runs never reached Bluesky");
}
