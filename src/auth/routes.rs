// src/auth/routes.rs

use axum::{routing::post, Router};

use super::handlers;

/// Create the auth router with all authentication routes
pub fn auth_routes() -> Router {
    Router::new()
        .route("/signup", post(handlers::signup))
        .route("/signin", post(handlers::signin))
        .route("/google-auth", post(handlers::google_auth))
}
