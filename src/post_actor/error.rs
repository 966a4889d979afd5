//! Error types for the Post store.

use crate::model::PostId;
use thiserror::Error;

/// Errors raised by the Post entity hooks.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PostError {
    /// A link post was sent an update.
    #[error("Post {0} is a link post and cannot be edited")]
    LinkPostImmutable(PostId),
}
