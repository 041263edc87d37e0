// src/blogs/routes.rs

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers;

/// Create the blogs router: feed queries, blog creation, and the banner
/// upload-URL endpoint
pub fn blogs_routes() -> Router {
    Router::new()
        // Public routes
        .route("/get-upload-url", get(handlers::get_upload_url))
        .route("/latest-blogs", get(handlers::latest_blogs))
        .route("/trending-blogs", get(handlers::trending_blogs))
        // Authenticated routes
        .route("/create-blog", post(handlers::create_blog))
}
