// src/blogs/tests/models_tests.rs

#[cfg(test)]
mod tests {
    use crate::blogs::models::*;

    fn feed_row() -> FeedRow {
        FeedRow {
            blog_id: "hello-world-abc123def456".to_string(),
            title: "Hello, World!".to_string(),
            des: "First post".to_string(),
            banner: "https://bucket.s3.amazonaws.com/banner.jpeg".to_string(),
            tags: r#"["rust","web"]"#.to_string(),
            total_reads: 10,
            total_likes: 3,
            published_at: "2026-08-06 12:00:00".to_string(),
            profile_img: "https://img.example/avatar.png".to_string(),
            username: "jane".to_string(),
            fullname: "Jane Doe".to_string(),
        }
    }

    #[test]
    fn test_latest_entry_embeds_author_and_renames_published_at() {
        let entry = LatestBlogEntry::from(feed_row());
        let json = serde_json::to_value(&entry).expect("serialize");

        assert_eq!(json["blog_id"], "hello-world-abc123def456");
        assert_eq!(json["publishedAt"], "2026-08-06 12:00:00");
        assert_eq!(json["author"]["personal_info"]["username"], "jane");
        assert!(
            json["author"]["personal_info"].get("id").is_none(),
            "Internal user id must not leak into feed entries"
        );
        assert_eq!(json["activity"]["total_reads"], 10);
        assert_eq!(json["activity"]["total_likes"], 3);
    }

    #[test]
    fn test_latest_entry_serializes_tags_column_as_array() {
        let entry = LatestBlogEntry::from(feed_row());
        let json = serde_json::to_value(&entry).expect("serialize");

        assert_eq!(json["tags"], serde_json::json!(["rust", "web"]));
    }

    #[test]
    fn test_trending_entry_carries_only_summary_fields() {
        let entry = TrendingBlogEntry {
            blog_id: "hello-world-abc123def456".to_string(),
            title: "Hello, World!".to_string(),
            published_at: "2026-08-06 12:00:00".to_string(),
        };
        let json = serde_json::to_value(&entry).expect("serialize");

        assert_eq!(json["blog_id"], "hello-world-abc123def456");
        assert_eq!(json["title"], "Hello, World!");
        assert_eq!(json["publishedAt"], "2026-08-06 12:00:00");
        assert_eq!(
            json.as_object().map(|o| o.len()),
            Some(3),
            "Trending entries expose nothing beyond id, title, and timestamp"
        );
    }

    #[test]
    fn test_document_round_trips_editor_payloads() {
        let raw = r#"{
            "time": 1712345678901,
            "blocks": [
                { "id": "b1", "type": "header", "data": { "text": "Title", "level": 2 } },
                { "type": "paragraph", "data": { "text": "Body" } }
            ],
            "version": "2.28.2"
        }"#;

        let doc: Document = serde_json::from_str(raw).expect("deserialize");
        assert_eq!(doc.blocks.len(), 2);
        assert_eq!(doc.blocks[0].kind, "header");
        assert_eq!(doc.blocks[1].id, None);

        let encoded = serde_json::to_string(&doc).expect("serialize");
        let reparsed: Document = serde_json::from_str(&encoded).expect("reparse");
        assert_eq!(reparsed.blocks.len(), 2);
    }

    #[test]
    fn test_create_request_tolerates_partial_bodies() {
        let request: CreateBlogRequest =
            serde_json::from_str(r#"{ "title": "Draft", "draft": true }"#).expect("deserialize");

        assert_eq!(request.title.as_deref(), Some("Draft"));
        assert_eq!(request.draft, Some(true));
        assert!(request.des.is_none());
        assert!(request.tags.is_none());
        assert!(request.content.is_none());
    }

    #[test]
    fn test_upload_url_response_uses_wire_field_name() {
        let resp = UploadUrlResponse {
            upload_url: "https://bucket.s3.amazonaws.com/key?X-Amz-Signature=sig".to_string(),
        };
        let json = serde_json::to_value(&resp).expect("serialize");
        assert!(json.get("uploadURL").is_some());
    }
}
