// src/client/editor.rs
//! Editor workflow: composing a blog and moving it toward publication.
//!
//! The workflow starts in the `Editor` stage. Publishing moves it to the
//! `Publish` stage for the review form (see `publish.rs`); closing the form
//! moves it back. Draft saves go straight from the `Editor` stage.

use super::{ApiClient, ClientError, Session, SubmitOutcome};
use crate::blogs::models::{CreateBlogRequest, Document};

/// Shown in place of a banner that is missing or failed to render
pub const DEFAULT_BANNER: &str = "/imgs/blog-banner.png";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorStage {
    #[default]
    Editor,
    Publish,
}

/// The blog being composed, carried explicitly between the two stages
#[derive(Debug, Clone, Default)]
pub struct BlogDraft {
    pub title: String,
    pub banner: String,
    pub des: String,
    pub tags: Vec<String>,
    pub content: Document,
}

impl BlogDraft {
    pub(crate) fn to_request(&self, draft: bool) -> CreateBlogRequest {
        CreateBlogRequest {
            title: Some(self.title.clone()),
            des: Some(self.des.clone()),
            banner: Some(self.banner.clone()),
            tags: Some(self.tags.clone()),
            content: Some(self.content.clone()),
            draft: Some(draft),
        }
    }
}

/// State of one editing session. Submit actions are guarded by an explicit
/// in-flight flag so a second invocation while a request is outstanding is
/// ignored rather than duplicated.
#[derive(Debug, Default)]
pub struct EditorWorkflow {
    pub(crate) stage: EditorStage,
    pub(crate) draft: BlogDraft,
    pub(crate) in_flight: bool,
}

impl EditorWorkflow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_draft(draft: BlogDraft) -> Self {
        Self {
            draft,
            ..Self::default()
        }
    }

    pub fn stage(&self) -> EditorStage {
        self.stage
    }

    pub fn draft(&self) -> &BlogDraft {
        &self.draft
    }

    pub fn in_flight(&self) -> bool {
        self.in_flight
    }

    /// Update the title from raw input. Line breaks never belong in a
    /// title; the browser editor suppresses the Enter key, here they are
    /// stripped.
    pub fn set_title(&mut self, input: &str) {
        self.draft.title = input.replace(['\r', '\n'], "");
    }

    /// The banner URL to display, falling back to the placeholder when no
    /// banner has been uploaded yet
    pub fn banner_for_display(&self) -> &str {
        if self.draft.banner.is_empty() {
            DEFAULT_BANNER
        } else {
            &self.draft.banner
        }
    }

    /// Upload banner image bytes. On success the returned object URL
    /// replaces the in-memory banner; on failure the banner is left
    /// unchanged and the error is returned for display.
    pub async fn upload_banner(
        &mut self,
        api: &ApiClient,
        image: Vec<u8>,
    ) -> Result<String, ClientError> {
        let url = api.upload_banner(image).await?;
        self.draft.banner = url.clone();
        Ok(url)
    }

    /// Move to the publish form, capturing the editor document current at
    /// invocation time. Refused, leaving the stage unchanged, when the
    /// banner or title is missing or the captured document has no blocks.
    pub fn enter_publish(&mut self, captured: Document) -> Result<(), ClientError> {
        if self.draft.banner.is_empty() {
            return Err(ClientError::Invalid(
                "Upload a blog banner to publish it".to_string(),
            ));
        }
        if self.draft.title.is_empty() {
            return Err(ClientError::Invalid(
                "Please add a title to publish it".to_string(),
            ));
        }
        if captured.blocks.is_empty() {
            return Err(ClientError::Invalid(
                "Write something in your blog to publish it".to_string(),
            ));
        }

        self.draft.content = captured;
        self.stage = EditorStage::Publish;
        Ok(())
    }

    /// Back-transition from the publish form to the editor
    pub fn close_publish(&mut self) {
        self.stage = EditorStage::Editor;
    }

    /// Save the composition as a draft. Only a title is required; the
    /// captured document replaces the draft content before submission.
    pub async fn save_draft(
        &mut self,
        api: &ApiClient,
        session: &Session,
        captured: Document,
    ) -> Result<SubmitOutcome, ClientError> {
        if self.in_flight {
            return Ok(SubmitOutcome::Ignored);
        }
        if self.draft.title.is_empty() {
            return Err(ClientError::Invalid(
                "Please provide a blog title before saving it as a draft".to_string(),
            ));
        }

        self.draft.content = captured;

        self.in_flight = true;
        let result = api.create_blog(session, &self.draft.to_request(true)).await;
        self.in_flight = false;

        let resp = result?;
        Ok(SubmitOutcome::Created { id: resp.id })
    }
}
