// src/services/google.rs

use chrono::Utc;
use reqwest::Client;
use thiserror::Error;
use tracing::{debug, warn};

use crate::common::safe_email_log;

#[derive(Debug, Error)]
pub enum GoogleError {
    #[error("token rejected by Google: {0}")]
    Rejected(String),

    #[error("token has expired")]
    Expired,

    #[error("token audience mismatch")]
    AudienceMismatch,

    #[error("token missing required field: {0}")]
    MissingField(&'static str),

    #[error("malformed tokeninfo response: {0}")]
    Malformed(String),

    #[error("token verification service unavailable: {0}")]
    Unavailable(#[from] reqwest::Error),
}

/// Identity fields asserted by Google for a verified token
#[derive(Debug, Clone)]
pub struct VerifiedGoogleUser {
    pub email: String,
    pub name: Option<String>,
    pub picture: Option<String>,
}

/// Verifies client-supplied Google tokens against the tokeninfo endpoint.
///
/// The browser flow hands us the token it received from the sign-in popup;
/// it is passed to tokeninfo as an identity token and never trusted before
/// Google confirms it. When a client id is configured the token audience
/// must match it.
pub struct GoogleService {
    http: Client,
    client_id: Option<String>,
    endpoint: String,
}

const TOKENINFO_ENDPOINT: &str = "https://oauth2.googleapis.com/tokeninfo";

impl GoogleService {
    pub fn new(http: Client, client_id: Option<String>) -> Self {
        Self {
            http,
            client_id,
            endpoint: TOKENINFO_ENDPOINT.to_string(),
        }
    }

    /// Verify a token and extract the asserted identity
    pub async fn verify_token(&self, token: &str) -> Result<VerifiedGoogleUser, GoogleError> {
        let resp = self
            .http
            .get(&self.endpoint)
            .query(&[("id_token", token)])
            .send()
            .await?;

        let status = resp.status();
        debug!(http_status = %status, "Received response from Google tokeninfo endpoint");

        if !status.is_success() {
            warn!(http_status = %status, "Google tokeninfo rejected the token");
            return Err(GoogleError::Rejected(status.to_string()));
        }

        let body: serde_json::Value = resp
            .json()
            .await
            .map_err(|e| GoogleError::Malformed(e.to_string()))?;

        let email = body
            .get("email")
            .and_then(|v| v.as_str())
            .ok_or(GoogleError::MissingField("email"))?
            .to_string();
        let name = body
            .get("name")
            .and_then(|v| v.as_str())
            .map(str::to_string);
        let picture = body
            .get("picture")
            .and_then(|v| v.as_str())
            .map(str::to_string);

        if body.get("sub").and_then(|v| v.as_str()).is_none() {
            return Err(GoogleError::MissingField("sub"));
        }

        // tokeninfo reports numeric claims as strings
        if let Some(exp) = body
            .get("exp")
            .and_then(|v| v.as_str())
            .and_then(|s| s.parse::<i64>().ok())
        {
            if exp < Utc::now().timestamp() {
                warn!(token_exp = exp, "Google token has expired");
                return Err(GoogleError::Expired);
            }
        }

        if let Some(client_id) = &self.client_id {
            match body.get("aud").and_then(|v| v.as_str()) {
                Some(aud) if aud == client_id => {}
                Some(aud) => {
                    warn!(token_audience = %aud, "Google token audience validation failed");
                    return Err(GoogleError::AudienceMismatch);
                }
                None => return Err(GoogleError::MissingField("aud")),
            }
        }

        if let Some("false") = body.get("email_verified").and_then(|v| v.as_str()) {
            warn!(
                email = %safe_email_log(&email),
                "Google token carries an unverified email address"
            );
        }

        debug!(email = %safe_email_log(&email), "Google token verification successful");

        Ok(VerifiedGoogleUser {
            email,
            name,
            picture,
        })
    }
}
