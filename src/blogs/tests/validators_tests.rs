// src/blogs/tests/validators_tests.rs

#[cfg(test)]
mod tests {
    use crate::blogs::models::*;
    use crate::blogs::validators::*;
    use crate::common::Validator;

    fn one_block_document() -> Document {
        Document {
            time: None,
            blocks: vec![Block {
                id: None,
                kind: "paragraph".to_string(),
                data: serde_json::json!({ "text": "hello" }),
            }],
            version: None,
        }
    }

    fn complete_publish_request() -> CreateBlogRequest {
        CreateBlogRequest {
            title: Some("Hello, World!".to_string()),
            des: Some("A short description".to_string()),
            banner: Some("https://bucket.s3.amazonaws.com/banner.jpeg".to_string()),
            tags: Some(vec!["Rust".to_string(), "axum".to_string()]),
            content: Some(one_block_document()),
            draft: Some(false),
        }
    }

    #[test]
    fn test_publish_request_with_all_fields_is_valid() {
        let result = CreateBlogValidator.validate(&complete_publish_request());
        assert!(result.is_valid);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn test_draft_with_only_a_title_is_valid() {
        let request = CreateBlogRequest {
            title: Some("Work in progress".to_string()),
            draft: Some(true),
            ..Default::default()
        };

        let result = CreateBlogValidator.validate(&request);
        assert!(
            result.is_valid,
            "A draft must not require des/banner/tags/content"
        );
    }

    #[test]
    fn test_draft_still_requires_a_title() {
        let request = CreateBlogRequest {
            title: Some("   ".to_string()),
            draft: Some(true),
            ..Default::default()
        };

        let result = CreateBlogValidator.validate(&request);
        assert!(!result.is_valid);
        assert!(result.errors.iter().any(|e| e.field == "title"));
    }

    #[test]
    fn test_publish_accumulates_one_message_per_violated_rule() {
        // Title present but everything publish-time is missing, including
        // the draft flag itself
        let request = CreateBlogRequest {
            title: Some("Hello".to_string()),
            ..Default::default()
        };

        let result = CreateBlogValidator.validate(&request);
        assert!(!result.is_valid);

        let fields: Vec<&str> = result.errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["des", "banner", "tags", "content", "draft"]);
        assert_eq!(result.messages().len(), 5, "No violation may be dropped");
    }

    #[test]
    fn test_publish_rejects_description_over_200_chars() {
        let mut request = complete_publish_request();
        request.des = Some("x".repeat(201));

        let result = CreateBlogValidator.validate(&request);
        assert!(!result.is_valid);
        assert!(result
            .messages()
            .contains(&"Description should not exceed 200 characters.".to_string()));
    }

    #[test]
    fn test_publish_accepts_description_at_exactly_200_chars() {
        let mut request = complete_publish_request();
        request.des = Some("x".repeat(200));

        let result = CreateBlogValidator.validate(&request);
        assert!(result.is_valid);
    }

    #[test]
    fn test_publish_rejects_empty_tag_list() {
        let mut request = complete_publish_request();
        request.tags = Some(Vec::new());

        let result = CreateBlogValidator.validate(&request);
        assert!(!result.is_valid);
        assert!(result.errors.iter().any(|e| e.field == "tags"));
    }

    #[test]
    fn test_publish_rejects_content_without_blocks() {
        let mut request = complete_publish_request();
        request.content = Some(Document::default());

        let result = CreateBlogValidator.validate(&request);
        assert!(!result.is_valid);
        assert!(result.errors.iter().any(|e| e.field == "content"));
    }

    #[test]
    fn test_explicit_draft_false_satisfies_the_boolean_rule() {
        let result = CreateBlogValidator.validate(&complete_publish_request());
        assert!(!result.errors.iter().any(|e| e.field == "draft"));
    }
}
