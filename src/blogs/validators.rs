// src/blogs/validators.rs

use super::models::CreateBlogRequest;
use crate::common::{ValidationResult, Validator};

/// Maximum description length for a published blog
pub const DESCRIPTION_CHAR_LIMIT: usize = 200;

/// Validates a blog submission, accumulating every violated rule so the
/// caller sees them all at once rather than one per round-trip.
///
/// A draft save only needs a title; publish submissions must be complete.
pub struct CreateBlogValidator;

impl Validator<CreateBlogRequest> for CreateBlogValidator {
    fn validate(&self, data: &CreateBlogRequest) -> ValidationResult {
        let mut result = ValidationResult::new();

        let title_present = data
            .title
            .as_deref()
            .map(str::trim)
            .map_or(false, |t| !t.is_empty());
        if !title_present {
            result.add_error("title", "Please provide a valid title.");
        }

        // Draft saves skip the publish-time completeness rules
        if data.draft == Some(true) {
            return result;
        }

        let des = data.des.as_deref().unwrap_or("");
        if des.trim().is_empty() {
            result.add_error("des", "Description cannot be empty.");
        } else if des.chars().count() > DESCRIPTION_CHAR_LIMIT {
            result.add_error("des", "Description should not exceed 200 characters.");
        }

        let banner_present = data
            .banner
            .as_deref()
            .map(str::trim)
            .map_or(false, |b| !b.is_empty());
        if !banner_present {
            result.add_error("banner", "A banner image is required.");
        }

        if data.tags.as_ref().map_or(true, |t| t.is_empty()) {
            result.add_error("tags", "At least one tag is required.");
        }

        if data
            .content
            .as_ref()
            .map_or(true, |c| c.blocks.is_empty())
        {
            result.add_error("content", "Blog content cannot be empty.");
        }

        if data.draft.is_none() {
            result.add_error("draft", "Draft field must be true or false.");
        }

        result
    }
}
