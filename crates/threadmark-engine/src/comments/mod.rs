//! # Comment Trees
//!
//! A thread's comments as an immutable forest, plus the optimistic mutator
//! that edits it in response to user actions.
//!
//! ## Modules
//!
//! - **`node`**: `CommentNode`, `CommentRecord`, `Author`
//! - **`forest`**: `CommentForest`, copy-on-write transforms keyed by id
//! - **`thread`**: `CommentThread`, apply-then-settle actions with rollback
//! - **`remote`**: the `CommentRemote` persistence boundary
//! - **`session`**: `CommentSession`, an async driver over a remote
//! - **`error`**: `RemoteError`, `ActionError`

pub mod error;
pub mod forest;
pub mod node;
pub mod remote;
pub mod session;
pub mod thread;

pub use error::{ActionError, RemoteError};
pub use forest::CommentForest;
pub use node::{Author, CommentId, CommentNode, CommentRecord};
pub use remote::{CommentDraft, CommentRemote};
pub use session::CommentSession;
pub use thread::{CommentThread, LikeToggle, PendingDelete, PendingEdit, PendingReply};
