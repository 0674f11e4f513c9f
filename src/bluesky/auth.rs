use super::rest::{api_error, BlueskyRest};
use super::types::{CreateSessionRequest, CreateSessionResponse};
use anyhow::{Context, Result};
use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;
use std::fmt;

/// Account login. Read once per run and never written anywhere.
#[derive(Clone)]
pub struct Credentials {
    pub identifier: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("identifier", &self.identifier)
            .field("password", &"***")
            .finish()
    }
}

/// Bearer token plus the account's DID, valid for a single run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub access_jwt: String,
    pub did: String,
}

impl From<CreateSessionResponse> for Session {
    fn from(resp: CreateSessionResponse) -> Self {
        Self {
            access_jwt: resp.access_jwt,
            did: resp.did,
        }
    }
}

impl BlueskyRest {
    /// Exchange identifier/password for a fresh session.
    pub async fn create_session(&self, credentials: &Credentials) -> Result<Session> {
        let url = self.xrpc_url("com.atproto.server.createSession");
        let body = serde_json::to_vec(&CreateSessionRequest {
            identifier: &credentials.identifier,
            password: &credentials.password,
        })
        .context("failed to marshal auth request body")?;

        let resp = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .context("auth request failed")?;

        if resp.status() != StatusCode::OK {
            return Err(api_error("auth", resp).await);
        }

        let parsed: CreateSessionResponse = resp
            .json()
            .await
            .context("failed to decode auth response")?;
        tracing::info!(did = %parsed.did, "authentication successful");
        Ok(parsed.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_debug_hides_password() {
        let creds = Credentials {
            identifier: "me.bsky.social".to_string(),
            password: "hunter2".to_string(),
        };
        let printed = format!("{:?}", creds);
        assert!(printed.contains("me.bsky.social"));
        assert!(!printed.contains("hunter2"));
    }

    #[test]
    fn test_session_response_field_names() {
        let resp: CreateSessionResponse =
            serde_json::from_str(r#"{"accessJwt":"t","did":"d","handle":"me.bsky.social"}"#).unwrap();
        assert_eq!(
            Session::from(resp),
            Session {
                access_jwt: "t".to_string(),
                did: "d".to_string()
            }
        );
    }
}
