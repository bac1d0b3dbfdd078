//! The post-creation flow: validate, date, insert.

use chrono::NaiveDate;

use crate::domain::{BlogPost, FieldErrors, PostDraft};
use crate::error::RepoError;
use crate::ports::BlogPostRepository;

/// Result of a publish attempt that did not fail at the storage level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublishOutcome {
    /// The post was stored.
    Published(BlogPost),
    /// Another post already uses this title. Nothing was stored.
    DuplicateTitle(String),
    /// The draft failed validation. Storage was not touched.
    Invalid(FieldErrors),
}

/// Validate `draft` and, if it is valid, store it dated `today`.
///
/// Only storage failures other than a duplicate title are returned as errors.
pub async fn publish_post(
    repo: &dyn BlogPostRepository,
    draft: &PostDraft,
    today: NaiveDate,
) -> Result<PublishOutcome, RepoError> {
    let valid = match draft.validate() {
        Ok(valid) => valid,
        Err(errors) => {
            tracing::debug!(invalid_fields = errors.len(), "Post draft failed validation");
            return Ok(PublishOutcome::Invalid(errors));
        }
    };

    let title = valid.title().to_string();
    match repo.insert(valid.into_new_post(today)).await {
        Ok(post) => {
            tracing::info!(post_id = post.id, title = %post.title, "Post published");
            Ok(PublishOutcome::Published(post))
        }
        Err(RepoError::DuplicateKey { .. }) => {
            tracing::warn!(title = %title, "Post title already taken");
            Ok(PublishOutcome::DuplicateTitle(title))
        }
        Err(err) => Err(err),
    }
}
