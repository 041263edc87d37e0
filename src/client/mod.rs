//! # Client Module
//!
//! Headless counterpart of the browser editor: an HTTP client for the blog
//! API plus the editor workflow and publish form state, driven by the
//! `blogctl` binary and usable as a library.
//!
//! Authentication is explicit: callers hold a [`Session`] value and pass it
//! to every authenticated call; there is no ambient signed-in state.

pub mod editor;
pub mod publish;

#[cfg(test)]
mod tests;

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::auth::models::{AuthResponse, GoogleAuthRequest, SigninRequest, SignupRequest};
use crate::blogs::models::{CreateBlogRequest, CreateBlogResponse, UploadUrlResponse};

pub use editor::{BlogDraft, EditorStage, EditorWorkflow, DEFAULT_BANNER};
pub use publish::{CHARACTER_LIMIT, TAG_LIMIT};

/// The signed-in identity: the session token plus the public profile the
/// server returned alongside it
pub type Session = AuthResponse;

/// Client-side failures, each carrying the message shown to the user
#[derive(Debug, Error)]
pub enum ClientError {
    /// The server answered with an error body
    #[error("{message}")]
    Api { status: u16, message: String },

    /// The request never produced a response
    #[error("Network error. Please try again later.")]
    Network(#[source] reqwest::Error),

    /// A local guard refused the action before any request was made
    #[error("{0}")]
    Invalid(String),

    /// The server responded but the payload could not be read
    #[error("An error occurred")]
    Unexpected(#[source] reqwest::Error),
}

/// Result of a submit action that may be suppressed by the in-flight guard
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Created { id: String },
    /// A request for this action was already outstanding
    Ignored,
}

/// Error body shapes produced by the API: `{error}` or `{errors: [..]}`
#[derive(Deserialize)]
struct ApiErrorBody {
    error: Option<String>,
    errors: Option<Vec<String>>,
}

impl ApiErrorBody {
    fn message(self) -> Option<String> {
        self.error
            .or_else(|| self.errors.map(|list| list.join(", ")))
    }
}

/// Thin HTTP client over the blog API
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: Client::new(),
            base_url,
        }
    }

    pub async fn signup(
        &self,
        fullname: &str,
        email: &str,
        password: &str,
    ) -> Result<Session, ClientError> {
        let body = SignupRequest {
            fullname: fullname.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        };
        self.post_json("/signup", &body, None).await
    }

    pub async fn signin(&self, email: &str, password: &str) -> Result<Session, ClientError> {
        let body = SigninRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        self.post_json("/signin", &body, None).await
    }

    pub async fn google_auth(&self, access_token: &str) -> Result<Session, ClientError> {
        let body = GoogleAuthRequest {
            access_token: access_token.to_string(),
        };
        self.post_json("/google-auth", &body, None).await
    }

    /// Fetch a fresh presigned upload URL
    pub async fn fetch_upload_url(&self) -> Result<String, ClientError> {
        let resp: UploadUrlResponse = self.get_json("/get-upload-url").await?;
        Ok(resp.upload_url)
    }

    /// Upload image bytes through a presigned URL and return the object URL
    /// the banner field should carry afterwards
    pub async fn upload_banner(&self, image: Vec<u8>) -> Result<String, ClientError> {
        let upload_url = self.fetch_upload_url().await?;

        let resp = self
            .http
            .put(&upload_url)
            .header("Content-Type", "image/jpeg")
            .body(image)
            .send()
            .await
            .map_err(ClientError::Network)?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ClientError::Api {
                status: status.as_u16(),
                message: "Image upload failed".to_string(),
            });
        }

        // The public object URL is the presigned URL minus its signature query
        let object_url = upload_url
            .split('?')
            .next()
            .unwrap_or(&upload_url)
            .to_string();
        Ok(object_url)
    }

    /// Submit a draft or publish request on behalf of the session holder
    pub async fn create_blog(
        &self,
        session: &Session,
        request: &CreateBlogRequest,
    ) -> Result<CreateBlogResponse, ClientError> {
        self.post_json("/create-blog", request, Some(&session.access_token))
            .await
    }

    pub async fn latest_blogs(&self) -> Result<serde_json::Value, ClientError> {
        self.get_json("/latest-blogs").await
    }

    pub async fn trending_blogs(&self) -> Result<serde_json::Value, ClientError> {
        self.get_json("/trending-blogs").await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let resp = self
            .http
            .get(format!("{}{}", self.base_url, path))
            .send()
            .await
            .map_err(ClientError::Network)?;
        Self::parse(resp).await
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        bearer: Option<&str>,
    ) -> Result<T, ClientError> {
        let mut req = self
            .http
            .post(format!("{}{}", self.base_url, path))
            .json(body);
        if let Some(token) = bearer {
            req = req.bearer_auth(token);
        }
        let resp = req.send().await.map_err(ClientError::Network)?;
        Self::parse(resp).await
    }

    async fn parse<T: DeserializeOwned>(resp: Response) -> Result<T, ClientError> {
        let status = resp.status();
        if status.is_success() {
            return resp.json::<T>().await.map_err(ClientError::Unexpected);
        }

        let message = resp
            .json::<ApiErrorBody>()
            .await
            .ok()
            .and_then(ApiErrorBody::message)
            .unwrap_or_else(|| "An error occurred".to_string());

        Err(ClientError::Api {
            status: status.as_u16(),
            message,
        })
    }
}
