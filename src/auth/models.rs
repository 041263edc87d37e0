//! Authentication data models

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// JWT claims structure; `id` is the internal user id
#[derive(Serialize, Deserialize, Debug)]
pub struct Claims {
    pub id: String,
    pub exp: usize,
}

/// User database model
///
/// `password_hash` is None for accounts created through Google sign-in;
/// `google_auth` marks the account as federated.
#[derive(FromRow, Serialize, Deserialize, Debug)]
pub struct User {
    pub id: String,
    pub fullname: String,
    pub email: String,
    pub username: String,
    pub password_hash: Option<String>,
    pub profile_img: String,
    pub google_auth: bool,
    pub total_posts: i64,
    pub joined_at: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct SignupRequest {
    #[serde(default)]
    pub fullname: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct SigninRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Body of POST /google-auth. The field carries the token the client
/// received from the provider popup; it is verified against Google's
/// tokeninfo endpoint before any account is touched.
#[derive(Serialize, Deserialize, Debug)]
pub struct GoogleAuthRequest {
    pub access_token: String,
}

/// Session payload returned by signup, signin, and google-auth
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AuthResponse {
    pub access_token: String,
    pub profile_img: String,
    pub username: String,
    pub fullname: String,
}
