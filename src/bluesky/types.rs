use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const POST_COLLECTION: &str = "app.bsky.feed.post";
pub const IMAGES_EMBED_TYPE: &str = "app.bsky.embed.images";

#[derive(Debug, Serialize)]
pub struct CreateSessionRequest<'a> {
    pub identifier: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSessionResponse {
    pub access_jwt: String,
    pub did: String,
}

/// XRPC error body. Either field may be missing on a misbehaving server.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ErrorResponse {
    #[serde(default)]
    pub error: String,
    #[serde(default)]
    pub message: String,
}

/// Non-200 response from an XRPC call, with the provider's error code and message.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{operation} error ({status}): {error} - {message}")]
pub struct ApiError {
    pub operation: &'static str,
    pub status: u16,
    pub error: String,
    pub message: String,
}

/// Opaque blob reference returned by `uploadBlob`. Never inspected, only echoed
/// back inside a post embed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlobRef(pub Map<String, Value>);

#[derive(Debug, Clone, Serialize)]
pub struct EmbedImage {
    pub alt: String,
    pub image: BlobRef,
}

#[derive(Debug, Clone, Serialize)]
pub struct ImagesEmbed {
    #[serde(rename = "$type")]
    pub embed_type: &'static str,
    pub images: Vec<EmbedImage>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PostRecord {
    #[serde(rename = "$type")]
    pub record_type: &'static str,
    pub text: String,
    #[serde(rename = "createdAt")]
    pub created_at: String,
    pub embed: ImagesEmbed,
}

impl PostRecord {
    /// A text post with a single image attached.
    pub fn with_image(text: String, image: BlobRef, alt: String, created_at: DateTime<Utc>) -> Self {
        Self {
            record_type: POST_COLLECTION,
            text,
            created_at: created_at.to_rfc3339_opts(SecondsFormat::Secs, true),
            embed: ImagesEmbed {
                embed_type: IMAGES_EMBED_TYPE,
                images: vec![EmbedImage { alt, image }],
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CreateRecordRequest<'a> {
    pub repo: &'a str,
    pub collection: &'static str,
    pub record: &'a PostRecord,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct CreateRecordResponse {
    pub uri: Option<String>,
    pub cid: Option<String>,
}
