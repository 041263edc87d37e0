//! Authentication handlers

use axum::extract::{Extension, Json};
use chrono::{Duration, Utc};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use sqlx::SqlitePool;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{error, info, warn};

use super::models::{AuthResponse, Claims, GoogleAuthRequest, SigninRequest, SignupRequest, User};
use super::validators::{is_valid_email, is_valid_password, FULLNAME_MIN_LEN};
use crate::common::{generate_token, generate_user_id, safe_email_log, ApiError, AppState};

/// bcrypt cost factor for password hashing
const BCRYPT_COST: u32 = 10;

/// Length of the random suffix appended to a colliding username
const USERNAME_SUFFIX_LEN: usize = 5;

/// POST /signup
/// Creates a password-based account and returns a session payload
///
/// # Request Body
/// ```json
/// { "fullname": "...", "email": "...", "password": "..." }
/// ```
pub async fn signup(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    Json(payload): Json<SignupRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    let state = state_lock.read().await.clone();

    if payload.fullname.chars().count() < FULLNAME_MIN_LEN {
        return Err(ApiError::Forbidden(
            "Fullname must be at least 3 letters long".to_string(),
        ));
    }
    if payload.email.is_empty() {
        return Err(ApiError::Forbidden("Enter Email".to_string()));
    }
    if !is_valid_email(&payload.email) {
        return Err(ApiError::Forbidden("Email is invalid".to_string()));
    }
    if !is_valid_password(&payload.password) {
        return Err(ApiError::Forbidden(
            "Password should be 6 to 20 characters long and contain a numeric, 1 uppercase and 1 lowercase letter"
                .to_string(),
        ));
    }

    let password_hash = bcrypt::hash(&payload.password, BCRYPT_COST).map_err(|e| {
        error!(error = %e, "Password hashing failed");
        ApiError::InternalServer("Failed to process password".to_string())
    })?;

    let email = payload.email.to_lowercase();
    let username = generate_username(&state.db, &email).await?;
    let profile_img = default_profile_img(&username);
    let id = generate_user_id();

    let insert = sqlx::query(
        "INSERT INTO users (id, fullname, email, username, password_hash, profile_img, google_auth) \
         VALUES (?, ?, ?, ?, ?, ?, 0)",
    )
    .bind(&id)
    .bind(&payload.fullname)
    .bind(&email)
    .bind(&username)
    .bind(&password_hash)
    .bind(&profile_img)
    .execute(&state.db)
    .await;

    if let Err(e) = insert {
        if let sqlx::Error::Database(db_err) = &e {
            if db_err.is_unique_violation() {
                warn!(email = %safe_email_log(&email), "Signup rejected: email already exists");
                return Err(ApiError::Conflict("Email already exists".to_string()));
            }
        }
        return Err(ApiError::DatabaseError(e));
    }

    info!(user_id = %id, email = %safe_email_log(&email), "User account created");

    issue_session(&state, &id, &profile_img, &username, &payload.fullname)
}

/// POST /signin
/// Authenticates a password-based account
pub async fn signin(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    Json(payload): Json<SigninRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    let state = state_lock.read().await.clone();

    if payload.email.is_empty() || payload.password.is_empty() {
        return Err(ApiError::BadRequest(
            "Email and password are required".to_string(),
        ));
    }

    let email = payload.email.to_lowercase();
    let user: Option<User> = sqlx::query_as("SELECT * FROM users WHERE email = ?")
        .bind(&email)
        .fetch_optional(&state.db)
        .await
        .map_err(ApiError::DatabaseError)?;

    let user = match user {
        Some(u) => u,
        None => {
            warn!(email = %safe_email_log(&email), "Signin failed: email not found");
            return Err(ApiError::NotFound("Email not found".to_string()));
        }
    };

    // Accounts created through Google sign-in have no password hash and
    // must not be reachable through the password path
    let password_hash = match &user.password_hash {
        Some(h) => h,
        None => {
            warn!(user_id = %user.id, "Signin failed: federated-only account has no password");
            return Err(ApiError::InternalServer(
                "User account is incomplete".to_string(),
            ));
        }
    };

    let matches = bcrypt::verify(&payload.password, password_hash).map_err(|e| {
        error!(error = %e, user_id = %user.id, "Password comparison failed");
        ApiError::InternalServer("Password validation failed".to_string())
    })?;

    if !matches {
        warn!(user_id = %user.id, "Signin failed: incorrect password");
        return Err(ApiError::Unauthorized("Incorrect Password".to_string()));
    }

    info!(user_id = %user.id, email = %safe_email_log(&email), "User signed in");

    issue_session(&state, &user.id, &user.profile_img, &user.username, &user.fullname)
}

/// POST /google-auth
/// Authenticates a Google-asserted identity, creating a federated account
/// for a previously-unseen email
pub async fn google_auth(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    Json(payload): Json<GoogleAuthRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    let state = state_lock.read().await.clone();

    let verified = match state.google_service.verify_token(&payload.access_token).await {
        Ok(v) => v,
        Err(e) => {
            error!(error = %e, "Google token verification failed");
            return Err(ApiError::InternalServer(
                "Failed to authenticate with Google. Please try another account.".to_string(),
            ));
        }
    };

    let email = verified.email.to_lowercase();
    // Swap the default 96px avatar for the larger variant
    let profile_picture = verified
        .picture
        .as_deref()
        .map(|p| p.replace("s96-c", "s384-c"));

    let existing: Option<User> = sqlx::query_as("SELECT * FROM users WHERE email = ?")
        .bind(&email)
        .fetch_optional(&state.db)
        .await
        .map_err(ApiError::DatabaseError)?;

    let user = match existing {
        Some(u) => {
            if !u.google_auth {
                warn!(user_id = %u.id, "Google auth rejected: account was created with a password");
                return Err(ApiError::Forbidden(
                    "This email was signed up without google. Please login with password to access the account"
                        .to_string(),
                ));
            }
            u
        }
        None => {
            let username = generate_username(&state.db, &email).await?;
            let fullname = verified.name.clone().unwrap_or_else(|| username.clone());
            let profile_img =
                profile_picture.unwrap_or_else(|| default_profile_img(&username));
            let id = generate_user_id();

            sqlx::query(
                "INSERT INTO users (id, fullname, email, username, password_hash, profile_img, google_auth) \
                 VALUES (?, ?, ?, ?, NULL, ?, 1)",
            )
            .bind(&id)
            .bind(&fullname)
            .bind(&email)
            .bind(&username)
            .bind(&profile_img)
            .execute(&state.db)
            .await
            .map_err(ApiError::DatabaseError)?;

            info!(
                user_id = %id,
                email = %safe_email_log(&email),
                "Federated account created via Google"
            );

            sqlx::query_as("SELECT * FROM users WHERE id = ?")
                .bind(&id)
                .fetch_one(&state.db)
                .await
                .map_err(ApiError::DatabaseError)?
        }
    };

    info!(user_id = %user.id, "User authenticated via Google");

    issue_session(&state, &user.id, &user.profile_img, &user.username, &user.fullname)
}

// ---- Helper Functions ----

/// Signs a session token and assembles the public payload returned by all
/// three authentication routes
fn issue_session(
    state: &AppState,
    user_id: &str,
    profile_img: &str,
    username: &str,
    fullname: &str,
) -> Result<Json<AuthResponse>, ApiError> {
    let exp = (Utc::now() + Duration::hours(state.token_ttl_hours)).timestamp() as usize;
    let claims = Claims {
        id: user_id.to_string(),
        exp,
    };

    let access_token = encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(state.jwt_secret.as_bytes()),
    )
    .map_err(|e| {
        error!(error = %e, user_id = %user_id, "JWT encoding error");
        ApiError::InternalServer("jwt error".to_string())
    })?;

    Ok(Json(AuthResponse {
        access_token,
        profile_img: profile_img.to_string(),
        username: username.to_string(),
        fullname: fullname.to_string(),
    }))
}

/// Derive a username from the email local-part; append a short random
/// suffix when the derived name is already taken
async fn generate_username(pool: &SqlitePool, email: &str) -> Result<String, ApiError> {
    let mut username = email
        .split('@')
        .next()
        .unwrap_or_default()
        .to_string();

    let taken: Option<(String,)> = sqlx::query_as("SELECT username FROM users WHERE username = ?")
        .bind(&username)
        .fetch_optional(pool)
        .await
        .map_err(ApiError::DatabaseError)?;

    if taken.is_some() {
        username.push_str(&generate_token(USERNAME_SUFFIX_LEN));
    }

    Ok(username)
}

/// Deterministic avatar for accounts that arrive without a picture
fn default_profile_img(username: &str) -> String {
    format!("https://api.dicebear.com/6.x/adventurer-neutral/svg?seed={username}")
}
