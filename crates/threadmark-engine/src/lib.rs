pub mod comments;
pub mod parsing;

// Re-export key types for easier usage
pub use comments::{
    ActionError, Author, CommentDraft, CommentForest, CommentId, CommentNode, CommentRecord,
    CommentRemote, CommentSession, CommentThread, RemoteError,
};
pub use parsing::{ParseOptions, Parser, Segment, outline, parse_comment, plain_text, preview};
