use serde::{Deserialize, Serialize};

pub type CommentId = i64;

/// Who is posting. Optimistic nodes are attributed to the viewer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    #[serde(default)]
    pub avatar: Option<String>,
}

impl Author {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            avatar: None,
        }
    }
}

/// One comment and its replies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentNode {
    pub id: CommentId,
    pub author_name: String,
    #[serde(default)]
    pub author_avatar: Option<String>,
    /// Unparsed, HTML-escaped body.
    pub raw_text: String,
    /// Unix seconds.
    pub created_at: i64,
    #[serde(default)]
    pub like_count: i64,
    #[serde(default)]
    pub is_liked: bool,
    #[serde(default)]
    pub children: Vec<CommentNode>,
    /// Shown locally but not yet confirmed by the server.
    #[serde(default)]
    pub is_optimistic: bool,
}

/// The canonical form of a comment as returned by the server after a
/// create or update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentRecord {
    pub id: CommentId,
    pub author_name: String,
    #[serde(default)]
    pub author_avatar: Option<String>,
    pub raw_text: String,
    pub created_at: i64,
    #[serde(default)]
    pub like_count: i64,
    #[serde(default)]
    pub is_liked: bool,
}

impl CommentNode {
    /// A confirmed node with no replies.
    pub fn from_record(record: CommentRecord) -> Self {
        Self {
            id: record.id,
            author_name: record.author_name,
            author_avatar: record.author_avatar,
            raw_text: record.raw_text,
            created_at: record.created_at,
            like_count: record.like_count,
            is_liked: record.is_liked,
            children: vec![],
            is_optimistic: false,
        }
    }

    /// A locally created placeholder awaiting confirmation.
    pub fn optimistic(id: CommentId, author: &Author, raw_text: &str, created_at: i64) -> Self {
        Self {
            id,
            author_name: author.name.clone(),
            author_avatar: author.avatar.clone(),
            raw_text: raw_text.to_string(),
            created_at,
            like_count: 0,
            is_liked: false,
            children: vec![],
            is_optimistic: true,
        }
    }

    /// Nodes in this subtree, itself included.
    pub fn subtree_len(&self) -> usize {
        1 + self.children.iter().map(CommentNode::subtree_len).sum::<usize>()
    }
}
