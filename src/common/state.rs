// Application state shared across all modules

use reqwest::Client;
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::services::{AwsService, GoogleService};

/// Application state containing the database pool, outbound HTTP client,
/// token configuration, and shared services
#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub http: Client,
    pub jwt_secret: String,
    pub token_ttl_hours: i64,
    pub aws_service: Arc<AwsService>,
    pub google_service: Arc<GoogleService>,
}
