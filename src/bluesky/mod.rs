//! Bluesky XRPC client: session login, blob upload and record creation.

pub mod auth;
pub mod rest;
pub mod types;

pub use auth::{Credentials, Session};
pub use rest::BlueskyRest;
pub use types::{ApiError, BlobRef, PostRecord};
