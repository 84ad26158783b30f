use std::future::Future;

use serde::{Deserialize, Serialize};

use super::{
    error::RemoteError,
    node::{CommentId, CommentRecord},
};

/// Body of a create or update request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentDraft {
    pub thread_id: i64,
    /// Set when editing an existing comment.
    pub comment_id: Option<CommentId>,
    /// Set when replying to a comment rather than the thread.
    pub parent_id: Option<CommentId>,
    pub text: String,
}

/// Persistence calls the mutator makes once a change is applied locally.
///
/// Implemented by the host (HTTP client, test double, ...). The mutator
/// never retries.
pub trait CommentRemote {
    fn persist_like(
        &self,
        id: CommentId,
        liked: bool,
    ) -> impl Future<Output = Result<(), RemoteError>>;

    /// Creates or updates a comment and returns the canonical record.
    fn persist_comment(
        &self,
        draft: &CommentDraft,
    ) -> impl Future<Output = Result<CommentRecord, RemoteError>>;

    fn persist_deletion(&self, id: CommentId) -> impl Future<Output = Result<(), RemoteError>>;
}
