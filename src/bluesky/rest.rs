use super::auth::Session;
use super::types::*;
use anyhow::{Context, Result};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Response, StatusCode};
use serde_json::{Map, Value};

pub struct BlueskyRest {
    pub(super) client: Client,
    base_url: String,
}

impl BlueskyRest {
    pub fn new(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub(super) fn xrpc_url(&self, nsid: &str) -> String {
        format!("{}/xrpc/{}", self.base_url, nsid)
    }

    /// Upload raw JPEG bytes. Returns the `blob` object from the response untouched.
    pub async fn upload_blob(&self, session: &Session, data: Vec<u8>) -> Result<BlobRef> {
        let url = self.xrpc_url("com.atproto.repo.uploadBlob");

        let resp = self
            .client
            .post(&url)
            .header(AUTHORIZATION, bearer(session))
            .header(CONTENT_TYPE, "image/jpg")
            .body(data)
            .send()
            .await
            .context("upload request failed")?;

        if resp.status() != StatusCode::OK {
            return Err(api_error("upload", resp).await);
        }

        let body: Map<String, Value> = resp
            .json()
            .await
            .context("failed to decode upload response")?;
        tracing::info!("upload successful");

        if let Some(Value::Object(blob)) = body.get("blob") {
            return Ok(BlobRef(blob.clone()));
        }
        anyhow::bail!("no blob in response: {}", Value::Object(body))
    }

    /// Create an `app.bsky.feed.post` record in the session's repo.
    pub async fn create_post(&self, session: &Session, record: &PostRecord) -> Result<CreateRecordResponse> {
        let url = self.xrpc_url("com.atproto.repo.createRecord");
        let request = CreateRecordRequest {
            repo: &session.did,
            collection: POST_COLLECTION,
            record,
        };
        let body = serde_json::to_string(&request)
            .context("failed to marshal post request body")?;
        tracing::debug!(body = %body, "post JSON");

        let resp = self
            .client
            .post(&url)
            .header(AUTHORIZATION, bearer(session))
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .context("post request failed")?;

        if resp.status() != StatusCode::OK {
            return Err(api_error("post", resp).await);
        }

        // 200 is all the caller needs; uri/cid are informational.
        let created: CreateRecordResponse = resp.json().await.unwrap_or_default();
        tracing::info!(
            uri = created.uri.as_deref().unwrap_or("-"),
            cid = created.cid.as_deref().unwrap_or("-"),
            "post successful"
        );
        Ok(created)
    }
}

fn bearer(session: &Session) -> String {
    format!("Bearer {}", session.access_jwt)
}

/// Turn a non-200 response into an [`ApiError`]. If the error body itself
/// is not valid JSON, the decode failure is returned instead.
pub(super) async fn api_error(operation: &'static str, resp: Response) -> anyhow::Error {
    let status = resp.status().as_u16();
    match resp.json::<ErrorResponse>().await {
        Ok(body) => ApiError {
            operation,
            status,
            error: body.error,
            message: body.message,
        }
        .into(),
        Err(e) => anyhow::Error::new(e).context("failed to decode error response"),
    }
}
