//! Shared helpers for integration tests: throwaway HTTP servers standing in
//! for Bluesky and for RSS feeds.

#![allow(dead_code)]

use ainews_bot::bluesky::Credentials;
use axum::Router;
use tokio::net::TcpListener;

/// Serve `app` on an ephemeral localhost port and return its base URL.
pub async fn spawn(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

/// Minimal RSS 2.0 document with one item per title.
pub fn rss(titles: &[&str]) -> String {
    let items: String = titles
        .iter()
        .map(|t| format!("<item><title>{}</title><link>https://example.com/</link></item>", t))
        .collect();
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?><rss version="2.0"><channel><title>Test feed</title>{}</channel></rss>"#,
        items
    )
}

pub fn credentials() -> Credentials {
    Credentials {
        identifier: "bot.bsky.social".to_string(),
        password: "app-password".to_string(),
    }
}

/// A URL nothing is listening on.
pub fn unreachable_url() -> String {
    "http://127.0.0.1:1/feed.xml".to_string()
}
