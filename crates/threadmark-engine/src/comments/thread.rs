use std::time::{SystemTime, UNIX_EPOCH};

use super::{
    error::{ActionError, RemoteError},
    forest::CommentForest,
    node::{Author, CommentId, CommentNode, CommentRecord},
    remote::CommentDraft,
};

/// A like flip applied locally, waiting for `like_settled`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LikeToggle {
    pub id: CommentId,
    /// The state to persist.
    pub liked: bool,
}

/// An optimistic reply, waiting for `reply_settled`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingReply {
    pub placeholder: CommentId,
    pub draft: CommentDraft,
}

/// An applied edit and the text to restore if it fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingEdit {
    pub id: CommentId,
    pub previous: String,
    pub draft: CommentDraft,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingDelete {
    pub id: CommentId,
}

/// Wall-clock placeholder ids, strictly increasing and never equal to an id
/// already in the forest.
#[derive(Debug, Default)]
struct PlaceholderIds {
    last: CommentId,
}

impl PlaceholderIds {
    fn next(&mut self, forest: &CommentForest) -> CommentId {
        let mut id = unix_millis().max(self.last + 1);
        while forest.contains(id) {
            id += 1;
        }
        self.last = id;
        id
    }
}

fn unix_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .ok()
        .and_then(|d| i64::try_from(d.as_millis()).ok())
        .unwrap_or_default()
}

fn unix_seconds() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .ok()
        .and_then(|d| i64::try_from(d.as_secs()).ok())
        .unwrap_or_default()
}

/// The comment collection of one thread and the optimistic mutations on it.
///
/// Each action has two halves. The first applies the change locally and
/// returns a ticket describing the remote call to make; the second takes
/// that ticket back with the call's result and confirms or rolls back.
/// Tickets address nodes by id, so they may settle in any order.
///
/// | action        | gated by busy flag | on failure                      |
/// |---------------|--------------------|---------------------------------|
/// | `toggle_like` | no                 | logged, local state kept        |
/// | `add_reply`   | yes                | placeholder removed, error set  |
/// | `edit`        | yes                | previous text restored, error   |
/// | `delete`      | no                 | not restored, error set         |
///
/// A reply still waiting for the server has no server id yet, so it
/// cannot be liked, edited or deleted until it is confirmed.
#[derive(Debug)]
pub struct CommentThread {
    thread_id: i64,
    viewer: Author,
    forest: CommentForest,
    submitting: bool,
    editing: Option<CommentId>,
    error: Option<ActionError>,
    ids: PlaceholderIds,
}

impl CommentThread {
    pub fn new(thread_id: i64, viewer: Author, comments: impl Into<CommentForest>) -> Self {
        Self {
            thread_id,
            viewer,
            forest: comments.into(),
            submitting: false,
            editing: None,
            error: None,
            ids: PlaceholderIds::default(),
        }
    }

    pub fn thread_id(&self) -> i64 {
        self.thread_id
    }

    /// The current snapshot. Clone it to keep it past the next mutation.
    pub fn comments(&self) -> &CommentForest {
        &self.forest
    }

    /// Whether a reply or edit is waiting for the server.
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// The comment whose edit box is open.
    pub fn editing(&self) -> Option<CommentId> {
        self.editing
    }

    /// The last failed action, until cleared.
    pub fn error(&self) -> Option<&ActionError> {
        self.error.as_ref()
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Opens the edit box for a comment. False if it does not exist.
    pub fn begin_edit(&mut self, id: CommentId) -> bool {
        if !self.forest.contains(id) {
            return false;
        }
        self.editing = Some(id);
        true
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    pub fn toggle_like(&mut self, id: CommentId) -> Option<LikeToggle> {
        if self.is_pending(id) {
            log::debug!("like of {id} ignored: reply not confirmed yet");
            return None;
        }
        let (forest, liked) = self.forest.toggle_like(id)?;
        self.forest = forest;
        log::debug!("comment {id}: liked={liked} applied");
        Some(LikeToggle { id, liked })
    }

    /// Like failures are not reconciled with the server.
    pub fn like_settled(&mut self, toggle: LikeToggle, result: Result<(), RemoteError>) {
        match result {
            Ok(()) => log::debug!("comment {}: liked={} persisted", toggle.id, toggle.liked),
            Err(e) => log::warn!(
                "comment {}: liked={} not persisted: {e}",
                toggle.id,
                toggle.liked
            ),
        }
    }

    /// Shows a reply at once under `parent`, or at the top of the thread.
    ///
    /// Ignored while another submission is in flight, for blank text, or
    /// when the parent does not exist.
    pub fn add_reply(&mut self, parent: Option<CommentId>, text: &str) -> Option<PendingReply> {
        if self.submitting {
            log::debug!("reply ignored: a submission is in flight");
            return None;
        }
        if text.trim().is_empty() {
            return None;
        }

        let placeholder = self.ids.next(&self.forest);
        let node = CommentNode::optimistic(placeholder, &self.viewer, text, unix_seconds());
        self.forest = self.forest.append_reply(parent, node)?;
        self.submitting = true;
        log::debug!("reply {placeholder} under {parent:?} applied");

        Some(PendingReply {
            placeholder,
            draft: CommentDraft {
                thread_id: self.thread_id,
                comment_id: None,
                parent_id: parent,
                text: text.to_string(),
            },
        })
    }

    pub fn reply_settled(
        &mut self,
        pending: PendingReply,
        result: Result<CommentRecord, RemoteError>,
    ) {
        self.submitting = false;
        match result {
            Ok(record) => {
                let id = record.id;
                match self
                    .forest
                    .replace(pending.placeholder, CommentNode::from_record(record))
                {
                    Some(forest) => {
                        self.forest = forest;
                        log::debug!("reply {} confirmed as {id}", pending.placeholder);
                    }
                    None => log::debug!(
                        "reply {} confirmed as {id} after it was removed",
                        pending.placeholder
                    ),
                }
            }
            Err(e) => {
                log::warn!("reply {} failed: {e}", pending.placeholder);
                if let Some((forest, _)) = self.forest.remove(pending.placeholder) {
                    self.forest = forest;
                }
                self.error = Some(ActionError::Reply(e));
            }
        }
    }

    /// Replaces a comment's text at once, remembering the old text, and
    /// closes the edit box.
    pub fn edit(&mut self, id: CommentId, text: &str) -> Option<PendingEdit> {
        if self.submitting {
            log::debug!("edit of {id} ignored: a submission is in flight");
            return None;
        }
        if text.trim().is_empty() || self.is_pending(id) {
            return None;
        }

        let (forest, previous) = self.forest.set_text(id, text)?;
        self.forest = forest;
        self.submitting = true;
        self.editing = None;
        log::debug!("edit of {id} applied");

        Some(PendingEdit {
            id,
            previous,
            draft: CommentDraft {
                thread_id: self.thread_id,
                comment_id: Some(id),
                parent_id: None,
                text: text.to_string(),
            },
        })
    }

    /// Applies the server's text on success, the previous text on failure.
    pub fn edit_settled(&mut self, pending: PendingEdit, result: Result<CommentRecord, RemoteError>) {
        self.submitting = false;

        let text = match result {
            Ok(record) => {
                log::debug!("edit of {} confirmed", pending.id);
                record.raw_text
            }
            Err(e) => {
                log::warn!("edit of {} failed, restoring: {e}", pending.id);
                self.error = Some(ActionError::Edit(e));
                pending.previous
            }
        };
        if let Some((forest, _)) = self.forest.set_text(pending.id, &text) {
            self.forest = forest;
        }
    }

    /// Removes a comment and its replies at once.
    pub fn delete(&mut self, id: CommentId) -> Option<PendingDelete> {
        if self.is_pending(id) {
            log::debug!("delete of {id} ignored: reply not confirmed yet");
            return None;
        }
        let (forest, removed) = self.forest.remove(id)?;
        self.forest = forest;
        if self.editing.is_some_and(|e| !self.forest.contains(e)) {
            self.editing = None;
        }
        log::debug!("comment {id}: removed with {} nodes", removed.subtree_len());
        Some(PendingDelete { id })
    }

    fn is_pending(&self, id: CommentId) -> bool {
        self.forest.find(id).is_some_and(|node| node.is_optimistic)
    }

    /// A failed delete is reported but the comment is not put back.
    pub fn delete_settled(&mut self, pending: PendingDelete, result: Result<(), RemoteError>) {
        match result {
            Ok(()) => log::debug!("comment {}: deletion confirmed", pending.id),
            Err(e) => {
                log::warn!("comment {}: deletion failed: {e}", pending.id);
                self.error = Some(ActionError::Delete(e));
            }
        }
    }
}
