//! Error types for view lookups.

use hub_core::PostId;
use thiserror::Error;

/// Errors returned by views and working lists.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ViewError {
    /// A donor selector that is neither a post id nor a status keyword.
    #[error("Invalid post id: {0}")]
    InvalidPostId(String),

    /// A well-formed post id with no matching post.
    #[error("Post not found: {0}")]
    PostNotFound(PostId),

    /// A numeric selector outside the range of post ids, e.g. `-3`.
    #[error("Post not found: {0}")]
    PostOutOfRange(i64),

    /// No organization with the given name.
    #[error("Unknown organization: {0}")]
    UnknownOrganization(String),

    /// The directory has no general organization to default to.
    #[error("No default organization available")]
    NoDefaultOrganization,

    /// Index past the end of a working list.
    #[error("No entry at index {0}")]
    EntryNotFound(usize),

    /// Only donors of fulfilled posts may be removed from a donor list.
    #[error("Donor of post {0} cannot be removed until the post is fulfilled")]
    NotRemovable(PostId),

    /// Unknown requested-items search category.
    #[error("Unknown search category: {0}")]
    UnknownSearchCategory(String),

    /// Index past the end of the submission queue.
    #[error("No pending submission at index {0}")]
    SubmissionNotFound(usize),
}
