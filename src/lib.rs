pub mod bluesky;
pub mod config;
pub mod feed;
pub mod images;
pub mod pipeline;
pub mod server;
