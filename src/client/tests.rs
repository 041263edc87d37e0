//! Tests for the client editor workflow and publish form

#[cfg(test)]
mod tests {
    use crate::blogs::models::{Block, Document};
    use crate::client::*;

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

    fn session() -> Session {
        Session {
            access_token: "token".to_string(),
            profile_img: "https://img.example/avatar.png".to_string(),
            username: "jane".to_string(),
            fullname: "Jane Doe".to_string(),
        }
    }

    /// Client pointed at a closed port; used where the code under test must
    /// fail or return before any request is sent
    fn unreachable_api() -> ApiClient {
        ApiClient::new("http://127.0.0.1:9")
    }

    fn ready_workflow() -> EditorWorkflow {
        let mut workflow = EditorWorkflow::new();
        workflow.set_title("Hello, World!");
        workflow.draft.banner = "https://bucket.s3.amazonaws.com/banner.jpeg".to_string();
        workflow
    }

    #[test]
    fn test_title_input_strips_line_breaks() {
        let mut workflow = EditorWorkflow::new();
        workflow.set_title("My\nMultiline\r\nTitle");
        assert_eq!(workflow.draft().title, "MyMultilineTitle");
    }

    #[test]
    fn test_banner_falls_back_to_placeholder() {
        let workflow = EditorWorkflow::new();
        assert_eq!(workflow.banner_for_display(), DEFAULT_BANNER);

        let workflow = ready_workflow();
        assert_eq!(
            workflow.banner_for_display(),
            "https://bucket.s3.amazonaws.com/banner.jpeg"
        );
    }

    #[test]
    fn test_publish_transition_requires_banner() {
        let mut workflow = EditorWorkflow::new();
        workflow.set_title("Hello");

        let err = workflow.enter_publish(one_block_document()).unwrap_err();
        assert!(matches!(err, ClientError::Invalid(_)));
        assert_eq!(workflow.stage(), EditorStage::Editor);
    }

    #[test]
    fn test_publish_transition_requires_title() {
        let mut workflow = EditorWorkflow::new();
        workflow.draft.banner = "https://bucket.s3.amazonaws.com/banner.jpeg".to_string();

        let err = workflow.enter_publish(one_block_document()).unwrap_err();
        assert!(matches!(err, ClientError::Invalid(_)));
        assert_eq!(workflow.stage(), EditorStage::Editor);
    }

    #[test]
    fn test_publish_transition_refuses_empty_document() {
        let mut workflow = ready_workflow();

        let err = workflow.enter_publish(Document::default()).unwrap_err();
        assert!(matches!(err, ClientError::Invalid(_)));
        assert_eq!(workflow.stage(), EditorStage::Editor);
        assert!(workflow.draft().content.blocks.is_empty());
    }

    #[test]
    fn test_publish_transition_captures_document_and_back_transition() {
        let mut workflow = ready_workflow();

        workflow
            .enter_publish(one_block_document())
            .expect("transition");
        assert_eq!(workflow.stage(), EditorStage::Publish);
        assert_eq!(workflow.draft().content.blocks.len(), 1);

        workflow.close_publish();
        assert_eq!(workflow.stage(), EditorStage::Editor);
        // Captured content survives the back-transition
        assert_eq!(workflow.draft().content.blocks.len(), 1);
    }

    #[tokio::test]
    async fn test_save_draft_requires_title() {
        let mut workflow = EditorWorkflow::new();

        let err = workflow
            .save_draft(&unreachable_api(), &session(), one_block_document())
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::Invalid(_)));
    }

    #[tokio::test]
    async fn test_save_draft_is_ignored_while_in_flight() {
        let mut workflow = ready_workflow();
        workflow.in_flight = true;

        let outcome = workflow
            .save_draft(&unreachable_api(), &session(), one_block_document())
            .await
            .expect("guard returns before any request");
        assert_eq!(outcome, SubmitOutcome::Ignored);
    }

    #[tokio::test]
    async fn test_save_draft_surfaces_network_failure_and_clears_flag() {
        let mut workflow = ready_workflow();

        let err = workflow
            .save_draft(&unreachable_api(), &session(), one_block_document())
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::Network(_)));
        assert_eq!(
            err.to_string(),
            "Network error. Please try again later."
        );
        assert!(!workflow.in_flight(), "Flag must clear after a failure");
    }

    #[tokio::test]
    async fn test_publish_requires_description_within_limit() {
        let mut workflow = ready_workflow();
        workflow.draft.tags = vec!["rust".to_string()];

        // Empty description
        let err = workflow
            .publish(&unreachable_api(), &session())
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::Invalid(_)));

        // Description over the limit, set directly to bypass input clamping
        workflow.draft.des = "x".repeat(CHARACTER_LIMIT + 1);
        let err = workflow
            .publish(&unreachable_api(), &session())
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::Invalid(_)));
    }

    #[tokio::test]
    async fn test_publish_requires_a_tag() {
        let mut workflow = ready_workflow();
        workflow.set_description("A description");

        let err = workflow
            .publish(&unreachable_api(), &session())
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::Invalid(_)));
    }

    #[tokio::test]
    async fn test_publish_is_ignored_while_in_flight() {
        let mut workflow = ready_workflow();
        workflow.set_description("A description");
        workflow.draft.tags = vec!["rust".to_string()];
        workflow.in_flight = true;

        let outcome = workflow
            .publish(&unreachable_api(), &session())
            .await
            .expect("guard returns before any request");
        assert_eq!(outcome, SubmitOutcome::Ignored);
    }

    #[test]
    fn test_description_input_is_clamped_to_limit() {
        let mut workflow = EditorWorkflow::new();
        workflow.set_description(&"x".repeat(CHARACTER_LIMIT + 50));

        assert_eq!(workflow.draft().des.chars().count(), CHARACTER_LIMIT);
        assert_eq!(workflow.description_chars_left(), 0);
    }

    #[test]
    fn test_submit_tag_appends_and_clears_input() {
        let mut workflow = EditorWorkflow::new();
        let mut input = "  rust  ".to_string();

        workflow.submit_tag(&mut input).expect("accepted");
        assert_eq!(workflow.draft().tags, vec!["rust".to_string()]);
        assert!(input.is_empty());
    }

    #[test]
    fn test_submit_tag_rejects_duplicate_and_leaves_set_unchanged() {
        let mut workflow = EditorWorkflow::new();
        let mut input = "rust".to_string();
        workflow.submit_tag(&mut input).expect("accepted");

        let mut input = "rust".to_string();
        let err = workflow.submit_tag(&mut input).unwrap_err();
        assert!(matches!(err, ClientError::Invalid(_)));
        assert_eq!(workflow.draft().tags, vec!["rust".to_string()]);
        assert!(input.is_empty(), "Input clears after a rejected attempt");
    }

    #[test]
    fn test_submit_tag_rejects_eleventh_tag() {
        let mut workflow = EditorWorkflow::new();
        for i in 0..TAG_LIMIT {
            let mut input = format!("tag{}", i);
            workflow.submit_tag(&mut input).expect("under the limit");
        }
        assert_eq!(workflow.tags_left(), 0);

        let mut input = "one-too-many".to_string();
        let err = workflow.submit_tag(&mut input).unwrap_err();
        assert!(matches!(err, ClientError::Invalid(_)));
        assert_eq!(workflow.draft().tags.len(), TAG_LIMIT);
    }

    #[test]
    fn test_submit_tag_ignores_empty_input() {
        let mut workflow = EditorWorkflow::new();
        let mut input = "   ".to_string();

        workflow.submit_tag(&mut input).expect("no-op");
        assert!(workflow.draft().tags.is_empty());
        assert!(input.is_empty());
    }

    #[test]
    fn test_remove_tag() {
        let mut workflow = EditorWorkflow::new();
        workflow.draft.tags = vec!["rust".to_string(), "web".to_string()];

        workflow.remove_tag("rust");
        assert_eq!(workflow.draft().tags, vec!["web".to_string()]);
    }

    #[test]
    fn test_draft_request_carries_every_field() {
        let mut workflow = ready_workflow();
        workflow.set_description("A description");
        workflow.draft.tags = vec!["rust".to_string()];
        workflow.draft.content = one_block_document();

        let request = workflow.draft().to_request(true);
        assert_eq!(request.title.as_deref(), Some("Hello, World!"));
        assert_eq!(request.draft, Some(true));
        assert_eq!(request.tags.as_deref(), Some(&["rust".to_string()][..]));
        assert_eq!(
            request.content.map(|c| c.blocks.len()),
            Some(1)
        );
    }
}
