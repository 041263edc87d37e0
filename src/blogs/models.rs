// src/blogs/models.rs
//! Blog data models and wire shapes

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::common::helpers::serialize_string_list;

/// One block of the structured editor document. The block payload is
/// produced by the rich-text editor and carried opaquely.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Block {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub data: serde_json::Value,
}

/// Editor document: an ordered list of blocks plus editor metadata
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Document {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<i64>,
    #[serde(default)]
    pub blocks: Vec<Block>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// Body of POST /create-blog. Everything except the title may be omitted
/// for a draft save; publish-time completeness is enforced by the
/// validator, not by deserialization.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct CreateBlogRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub des: Option<String>,
    #[serde(default)]
    pub banner: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub content: Option<Document>,
    #[serde(default)]
    pub draft: Option<bool>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct CreateBlogResponse {
    pub message: String,
    pub id: String,
}

/// Author public profile embedded into feed entries; the internal user id
/// is never exposed
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AuthorProfile {
    pub profile_img: String,
    pub username: String,
    pub fullname: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct EmbeddedAuthor {
    pub personal_info: AuthorProfile,
}

/// Read/like counters used for trending ranking
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Activity {
    pub total_reads: i64,
    pub total_likes: i64,
}

/// Flat row produced by the feed queries (blog joined with its author)
#[derive(FromRow, Debug)]
pub struct FeedRow {
    pub blog_id: String,
    pub title: String,
    pub des: String,
    pub banner: String,
    pub tags: String,
    pub total_reads: i64,
    pub total_likes: i64,
    pub published_at: String,
    pub profile_img: String,
    pub username: String,
    pub fullname: String,
}

impl FeedRow {
    fn author(&self) -> EmbeddedAuthor {
        EmbeddedAuthor {
            personal_info: AuthorProfile {
                profile_img: self.profile_img.clone(),
                username: self.username.clone(),
                fullname: self.fullname.clone(),
            },
        }
    }
}

#[derive(Serialize, Debug)]
pub struct LatestBlogEntry {
    pub blog_id: String,
    pub title: String,
    pub des: String,
    pub banner: String,
    #[serde(serialize_with = "serialize_string_list")]
    pub tags: String,
    pub activity: Activity,
    #[serde(rename = "publishedAt")]
    pub published_at: String,
    pub author: EmbeddedAuthor,
}

impl From<FeedRow> for LatestBlogEntry {
    fn from(row: FeedRow) -> Self {
        let author = row.author();
        Self {
            blog_id: row.blog_id,
            title: row.title,
            des: row.des,
            banner: row.banner,
            tags: row.tags,
            activity: Activity {
                total_reads: row.total_reads,
                total_likes: row.total_likes,
            },
            published_at: row.published_at,
            author,
        }
    }
}

/// Trending entries carry only enough to render the ranked list
#[derive(FromRow, Serialize, Debug)]
pub struct TrendingBlogEntry {
    pub blog_id: String,
    pub title: String,
    #[serde(rename = "publishedAt")]
    pub published_at: String,
}

#[derive(Serialize, Debug)]
pub struct LatestBlogsResponse {
    pub blogs: Vec<LatestBlogEntry>,
}

#[derive(Serialize, Debug)]
pub struct TrendingBlogsResponse {
    pub blogs: Vec<TrendingBlogEntry>,
}

/// Response of GET /get-upload-url
#[derive(Serialize, Deserialize, Debug)]
pub struct UploadUrlResponse {
    #[serde(rename = "uploadURL")]
    pub upload_url: String,
}
