use std::cell::RefCell;

use super::{
    error::ActionError,
    forest::CommentForest,
    node::CommentId,
    remote::CommentRemote,
    thread::CommentThread,
};

/// Drives a [`CommentThread`] against a [`CommentRemote`].
///
/// Methods take `&self` so several actions can be awaited at once on a
/// single-threaded executor. The thread is only borrowed between awaits.
pub struct CommentSession<R> {
    thread: RefCell<CommentThread>,
    remote: R,
}

impl<R: CommentRemote> CommentSession<R> {
    pub fn new(thread: CommentThread, remote: R) -> Self {
        Self {
            thread: RefCell::new(thread),
            remote,
        }
    }

    pub fn remote(&self) -> &R {
        &self.remote
    }

    pub fn comments(&self) -> CommentForest {
        self.thread.borrow().comments().clone()
    }

    pub fn is_submitting(&self) -> bool {
        self.thread.borrow().is_submitting()
    }

    pub fn editing(&self) -> Option<CommentId> {
        self.thread.borrow().editing()
    }

    pub fn error(&self) -> Option<ActionError> {
        self.thread.borrow().error().cloned()
    }

    pub fn clear_error(&self) {
        self.thread.borrow_mut().clear_error();
    }

    pub fn begin_edit(&self, id: CommentId) -> bool {
        self.thread.borrow_mut().begin_edit(id)
    }

    pub fn cancel_edit(&self) {
        self.thread.borrow_mut().cancel_edit();
    }

    pub async fn toggle_like(&self, id: CommentId) {
        let toggle = self.thread.borrow_mut().toggle_like(id);
        let Some(toggle) = toggle else { return };
        let result = self.remote.persist_like(toggle.id, toggle.liked).await;
        self.thread.borrow_mut().like_settled(toggle, result);
    }

    pub async fn add_reply(&self, parent: Option<CommentId>, text: &str) {
        let pending = self.thread.borrow_mut().add_reply(parent, text);
        let Some(pending) = pending else { return };
        let result = self.remote.persist_comment(&pending.draft).await;
        self.thread.borrow_mut().reply_settled(pending, result);
    }

    pub async fn edit(&self, id: CommentId, text: &str) {
        let pending = self.thread.borrow_mut().edit(id, text);
        let Some(pending) = pending else { return };
        let result = self.remote.persist_comment(&pending.draft).await;
        self.thread.borrow_mut().edit_settled(pending, result);
    }

    pub async fn delete(&self, id: CommentId) {
        let pending = self.thread.borrow_mut().delete(id);
        let Some(pending) = pending else { return };
        let result = self.remote.persist_deletion(pending.id).await;
        self.thread.borrow_mut().delete_settled(pending, result);
    }

    pub fn into_thread(self) -> CommentThread {
        self.thread.into_inner()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comments::{
        error::RemoteError,
        node::{Author, CommentNode, CommentRecord},
        remote::CommentDraft,
    };
    use pretty_assertions::assert_eq;
    use tokio::sync::Notify;

    /// Records every call. Comment calls can be held until `gate` is
    /// notified.
    #[derive(Default)]
    struct ScriptedRemote {
        fail: bool,
        gate: Option<Notify>,
        calls: RefCell<Vec<String>>,
    }

    impl ScriptedRemote {
        fn failing() -> Self {
            Self {
                fail: true,
                ..Self::default()
            }
        }

        fn outcome(&self) -> Result<(), RemoteError> {
            if self.fail {
                Err(RemoteError::Transport("connection reset".into()))
            } else {
                Ok(())
            }
        }
    }

    impl CommentRemote for ScriptedRemote {
        async fn persist_like(&self, id: CommentId, liked: bool) -> Result<(), RemoteError> {
            self.calls.borrow_mut().push(format!("like {id} {liked}"));
            self.outcome()
        }

        async fn persist_comment(&self, draft: &CommentDraft) -> Result<CommentRecord, RemoteError> {
            self.calls.borrow_mut().push(format!("comment {}", draft.text));
            if let Some(gate) = &self.gate {
                gate.notified().await;
            }
            self.outcome()?;
            Ok(CommentRecord {
                id: draft.comment_id.unwrap_or(99),
                author_name: "viewer".into(),
                author_avatar: None,
                raw_text: draft.text.clone(),
                created_at: 1_700_000_100,
                like_count: 0,
                is_liked: false,
            })
        }

        async fn persist_deletion(&self, id: CommentId) -> Result<(), RemoteError> {
            self.calls.borrow_mut().push(format!("delete {id}"));
            self.outcome()
        }
    }

    fn session(remote: ScriptedRemote) -> CommentSession<ScriptedRemote> {
        let node = |id: CommentId, like_count: i64| CommentNode {
            id,
            author_name: format!("user{id}"),
            author_avatar: None,
            raw_text: format!("comment {id}"),
            created_at: 1_700_000_000,
            like_count,
            is_liked: false,
            children: vec![],
            is_optimistic: false,
        };
        let thread = CommentThread::new(7, Author::new("viewer"), vec![node(1, 3), node(2, 0)]);
        CommentSession::new(thread, remote)
    }

    fn calls(s: &CommentSession<ScriptedRemote>) -> Vec<String> {
        s.remote().calls.borrow().clone()
    }

    #[tokio::test]
    async fn reply_round_trip() {
        let s = session(ScriptedRemote::default());
        s.add_reply(Some(1), "hi").await;

        let comments = s.comments();
        let children = &comments.find(1).unwrap().children;
        assert_eq!(children.len(), 1);
        assert_eq!(children[0].id, 99);
        assert!(!children[0].is_optimistic);
        assert_eq!(calls(&s), ["comment hi"]);
    }

    #[tokio::test]
    async fn failed_reply_rolls_back() {
        let s = session(ScriptedRemote::failing());
        let before = s.comments();

        s.add_reply(Some(1), "hi").await;
        assert_eq!(s.comments(), before);
        assert!(matches!(s.error(), Some(ActionError::Reply(_))));
        assert!(!s.is_submitting());
    }

    #[tokio::test]
    async fn failed_like_is_kept() {
        let s = session(ScriptedRemote::failing());
        s.toggle_like(1).await;

        let node = s.comments().find(1).unwrap().clone();
        assert_eq!((node.like_count, node.is_liked), (4, true));
        assert_eq!(s.error(), None);
        assert_eq!(calls(&s), ["like 1 true"]);
    }

    #[tokio::test]
    async fn failed_delete_reports_error() {
        let s = session(ScriptedRemote::failing());
        s.delete(2).await;

        assert!(!s.comments().contains(2));
        assert!(matches!(s.error(), Some(ActionError::Delete(_))));
        s.clear_error();
        assert_eq!(s.error(), None);
    }

    #[tokio::test]
    async fn edit_round_trip() {
        let s = session(ScriptedRemote::default());
        assert!(s.begin_edit(2));
        s.edit(2, "changed").await;

        assert_eq!(s.comments().find(2).unwrap().raw_text, "changed");
        assert_eq!(s.editing(), None);
        assert_eq!(calls(&s), ["comment changed"]);
    }

    #[tokio::test]
    async fn edit_box_closes_while_the_edit_is_in_flight() {
        let s = session(ScriptedRemote {
            gate: Some(Notify::new()),
            ..ScriptedRemote::default()
        });
        assert!(s.begin_edit(1));

        tokio::join!(s.edit(1, "changed"), async {
            tokio::task::yield_now().await;
            assert!(s.is_submitting());
            assert_eq!(s.editing(), None);
            assert_eq!(s.comments().find(1).unwrap().raw_text, "changed");

            s.remote().gate.as_ref().unwrap().notify_one();
        });

        assert!(!s.is_submitting());
        assert_eq!(s.editing(), None);
    }

    #[tokio::test]
    async fn actions_run_while_a_reply_is_pending() {
        let s = session(ScriptedRemote {
            gate: Some(Notify::new()),
            ..ScriptedRemote::default()
        });

        tokio::join!(s.add_reply(Some(1), "first"), async {
            tokio::task::yield_now().await;
            assert!(s.is_submitting());
            assert!(s.comments().find(1).unwrap().children[0].is_optimistic);

            s.add_reply(Some(1), "second").await;
            s.toggle_like(1).await;
            s.delete(2).await;

            s.remote().gate.as_ref().unwrap().notify_one();
        });

        let thread = s.into_thread();
        let node = thread.comments().find(1).unwrap();
        assert_eq!(node.children.len(), 1);
        assert_eq!(node.children[0].id, 99);
        assert_eq!(node.like_count, 4);
        assert!(!thread.comments().contains(2));
        assert!(!thread.is_submitting());
    }
}
