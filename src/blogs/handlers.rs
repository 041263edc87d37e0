// src/blogs/handlers.rs

use axum::extract::{Extension, Json};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, error, info};

use super::models::*;
use super::validators::CreateBlogValidator;
use crate::auth::AuthedUser;
use crate::common::{generate_blog_id, ApiError, AppState, Validator};

/// Maximum number of entries returned by the feed queries
const FEED_LIMIT: i64 = 5;

/// GET /get-upload-url - short-lived presigned URL for direct banner upload
pub async fn get_upload_url(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
) -> Result<Json<UploadUrlResponse>, ApiError> {
    let state = state_lock.read().await.clone();

    let upload_url = state.aws_service.presigned_upload_url().await.map_err(|e| {
        error!(error = %e, "Failed to generate upload URL");
        ApiError::InternalServer(e.to_string())
    })?;

    Ok(Json(UploadUrlResponse { upload_url }))
}

/// POST /create-blog - create a draft or published blog (auth required)
///
/// The blog row and the author's post counter are written in one
/// transaction; the counter moves by 1 only for published blogs.
pub async fn create_blog(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
    Json(payload): Json<CreateBlogRequest>,
) -> Result<Json<CreateBlogResponse>, ApiError> {
    let state = state_lock.read().await.clone();

    let validation = CreateBlogValidator.validate(&payload);
    if !validation.is_valid {
        return Err(validation.into());
    }

    let title = payload.title.as_deref().unwrap_or_default().trim().to_string();
    let draft = payload.draft.unwrap_or(false);
    let des = payload.des.unwrap_or_default();
    let banner = payload.banner.unwrap_or_default();
    let tags: Vec<String> = payload
        .tags
        .unwrap_or_default()
        .iter()
        .map(|tag| tag.to_lowercase())
        .collect();
    let content = payload.content.unwrap_or_default();

    let blog_id = generate_blog_id(&title);
    let tags_json = serde_json::to_string(&tags)
        .map_err(|e| ApiError::InternalServer(format!("Failed to encode tags: {}", e)))?;
    let content_json = serde_json::to_string(&content)
        .map_err(|e| ApiError::InternalServer(format!("Failed to encode content: {}", e)))?;

    let mut tx = state.db.begin().await.map_err(ApiError::DatabaseError)?;

    sqlx::query(
        "INSERT INTO blogs (blog_id, title, des, banner, content, tags, author, draft) \
         VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(&blog_id)
    .bind(&title)
    .bind(&des)
    .bind(&banner)
    .bind(&content_json)
    .bind(&tags_json)
    .bind(&authed.id)
    .bind(draft)
    .execute(&mut *tx)
    .await
    .map_err(ApiError::DatabaseError)?;

    let increment: i64 = if draft { 0 } else { 1 };
    let updated = sqlx::query("UPDATE users SET total_posts = total_posts + ? WHERE id = ?")
        .bind(increment)
        .bind(&authed.id)
        .execute(&mut *tx)
        .await
        .map_err(ApiError::DatabaseError)?;

    if updated.rows_affected() == 0 {
        // The token referenced an author row that no longer exists;
        // rolling back keeps the blog table consistent with it
        error!(author = %authed.id, "Blog create aborted: author not found");
        return Err(ApiError::NotFound("Author account not found".to_string()));
    }

    tx.commit().await.map_err(ApiError::DatabaseError)?;

    info!(blog_id = %blog_id, author = %authed.id, draft = draft, "Blog created");

    Ok(Json(CreateBlogResponse {
        message: "Blog created successfully!".to_string(),
        id: blog_id,
    }))
}

/// GET /latest-blogs - up to 5 most recently published blogs
pub async fn latest_blogs(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
) -> Result<Json<LatestBlogsResponse>, ApiError> {
    let state = state_lock.read().await.clone();

    let rows: Vec<FeedRow> = sqlx::query_as(
        r#"SELECT
            b.blog_id, b.title, b.des, b.banner, b.tags,
            b.total_reads, b.total_likes, b.published_at,
            u.profile_img, u.username, u.fullname
        FROM blogs b
        JOIN users u ON u.id = b.author
        WHERE b.draft = 0
        ORDER BY b.published_at DESC
        LIMIT ?"#,
    )
    .bind(FEED_LIMIT)
    .fetch_all(&state.db)
    .await
    .map_err(ApiError::DatabaseError)?;

    debug!(blog_count = rows.len(), "Loaded latest blogs");

    Ok(Json(LatestBlogsResponse {
        blogs: rows.into_iter().map(LatestBlogEntry::from).collect(),
    }))
}

/// GET /trending-blogs - up to 5 published blogs ranked by reads, then
/// likes, then recency
pub async fn trending_blogs(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
) -> Result<Json<TrendingBlogsResponse>, ApiError> {
    let state = state_lock.read().await.clone();

    let blogs: Vec<TrendingBlogEntry> = sqlx::query_as(
        r#"SELECT blog_id, title, published_at
        FROM blogs
        WHERE draft = 0
        ORDER BY total_reads DESC, total_likes DESC, published_at DESC
        LIMIT ?"#,
    )
    .bind(FEED_LIMIT)
    .fetch_all(&state.db)
    .await
    .map_err(ApiError::DatabaseError)?;

    debug!(blog_count = blogs.len(), "Loaded trending blogs");

    Ok(Json(TrendingBlogsResponse { blogs }))
}
