// src/common/migrations.rs
//! Database schema management

use sqlx::SqlitePool;
use std::env;
use tracing::{info, warn};

/// Create the schema if it does not exist yet.
///
/// Set RESET_DB=true to drop and recreate all tables. The default keeps
/// existing data across restarts.
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    let should_reset_db = env::var("RESET_DB").unwrap_or_else(|_| "false".to_string()) == "true";

    if should_reset_db {
        warn!("RESET_DB=true - dropping all tables and recreating schema");
        drop_all_tables(pool).await?;
    }

    create_user_tables(pool).await?;
    create_blog_tables(pool).await?;
    create_indexes(pool).await?;

    info!("Database migration completed");
    Ok(())
}

async fn drop_all_tables(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query("DROP TABLE IF EXISTS blogs").execute(pool).await?;
    sqlx::query("DROP TABLE IF EXISTS users").execute(pool).await?;
    Ok(())
}

async fn create_user_tables(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    // password_hash is NULL for accounts created through Google sign-in
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id TEXT PRIMARY KEY,
            fullname TEXT NOT NULL,
            email TEXT NOT NULL UNIQUE,
            username TEXT NOT NULL UNIQUE,
            password_hash TEXT,
            profile_img TEXT NOT NULL,
            google_auth INTEGER NOT NULL DEFAULT 0,
            total_posts INTEGER NOT NULL DEFAULT 0,
            joined_at TEXT DEFAULT (datetime('now'))
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

async fn create_blog_tables(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    // tags and content are JSON-encoded TEXT columns; activity counters are
    // written by the read/like tracking path, not by blog creation
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS blogs (
            blog_id TEXT PRIMARY KEY,
            title TEXT NOT NULL,
            des TEXT NOT NULL DEFAULT '',
            banner TEXT NOT NULL DEFAULT '',
            content TEXT NOT NULL DEFAULT '{"blocks":[]}',
            tags TEXT NOT NULL DEFAULT '[]',
            author TEXT NOT NULL REFERENCES users(id),
            draft INTEGER NOT NULL DEFAULT 0,
            total_reads INTEGER NOT NULL DEFAULT 0,
            total_likes INTEGER NOT NULL DEFAULT 0,
            published_at TEXT NOT NULL DEFAULT (datetime('now'))
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

async fn create_indexes(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    let indexes = [
        "CREATE INDEX IF NOT EXISTS idx_blogs_latest ON blogs(draft, published_at DESC)",
        "CREATE INDEX IF NOT EXISTS idx_blogs_trending ON blogs(draft, total_reads DESC, total_likes DESC, published_at DESC)",
        "CREATE INDEX IF NOT EXISTS idx_blogs_author ON blogs(author)",
    ];

    for sql in indexes {
        sqlx::query(sql).execute(pool).await?;
    }

    Ok(())
}
