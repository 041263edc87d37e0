// src/client/publish.rs
//! Publish form: the review step between composing and publication.
//!
//! Edits made here land directly on the shared [`BlogDraft`], so closing
//! the form and reopening it keeps whatever was typed.

use super::editor::EditorWorkflow;
use super::{ApiClient, ClientError, Session, SubmitOutcome};

/// Description length limit enforced while typing and at submission
pub const CHARACTER_LIMIT: usize = 200;

/// Maximum number of topics on one blog
pub const TAG_LIMIT: usize = 10;

impl EditorWorkflow {
    /// Update the description, clamped to the character limit the way the
    /// form's input field caps typing
    pub fn set_description(&mut self, input: &str) {
        let cleaned = input.replace(['\r', '\n'], "");
        self.draft.des = cleaned.chars().take(CHARACTER_LIMIT).collect();
    }

    pub fn description_chars_left(&self) -> usize {
        CHARACTER_LIMIT.saturating_sub(self.draft.des.chars().count())
    }

    pub fn tags_left(&self) -> usize {
        TAG_LIMIT.saturating_sub(self.draft.tags.len())
    }

    /// Submit the tag input field (Enter or comma in the browser form).
    /// The input is cleared after every attempt, accepted or not. The trimmed
    /// tag is appended unless it is empty, the limit is reached, or it is
    /// already present.
    pub fn submit_tag(&mut self, input: &mut String) -> Result<(), ClientError> {
        let tag = input.trim().to_string();
        input.clear();

        if tag.is_empty() {
            return Ok(());
        }
        if self.draft.tags.len() >= TAG_LIMIT {
            return Err(ClientError::Invalid(format!(
                "You have reached the maximum of {} tags",
                TAG_LIMIT
            )));
        }
        if self.draft.tags.contains(&tag) {
            return Err(ClientError::Invalid(format!(
                "\"{}\" has already been added",
                tag
            )));
        }

        self.draft.tags.push(tag);
        Ok(())
    }

    pub fn remove_tag(&mut self, tag: &str) {
        self.draft.tags.retain(|t| t != tag);
    }

    /// Submit the blog for publication. Requires a title, a description
    /// within the character limit, and at least one tag; sends draft=false.
    /// Ignored while a previous submission is outstanding.
    pub async fn publish(
        &mut self,
        api: &ApiClient,
        session: &Session,
    ) -> Result<SubmitOutcome, ClientError> {
        if self.in_flight {
            return Ok(SubmitOutcome::Ignored);
        }
        if self.draft.title.is_empty() {
            return Err(ClientError::Invalid(
                "Please provide a blog title before publishing".to_string(),
            ));
        }
        if self.draft.des.is_empty() || self.draft.des.chars().count() > CHARACTER_LIMIT {
            return Err(ClientError::Invalid(format!(
                "Please provide a description within {} characters before publishing",
                CHARACTER_LIMIT
            )));
        }
        if self.draft.tags.is_empty() {
            return Err(ClientError::Invalid(
                "Please provide a tag before publishing to help us rank your blog".to_string(),
            ));
        }

        self.in_flight = true;
        let result = api
            .create_blog(session, &self.draft.to_request(false))
            .await;
        self.in_flight = false;

        let resp = result?;
        Ok(SubmitOutcome::Created { id: resp.id })
    }
}
