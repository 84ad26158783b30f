use std::sync::Arc;

use super::node::{CommentId, CommentNode};

/// An immutable snapshot of a thread's comments.
///
/// Every transform returns a new forest and leaves `self` untouched, so a
/// snapshot handed to a renderer stays valid while later mutations are
/// applied. Cloning a forest is an `Arc` bump.
///
/// Transforms return `None` when the target id is not in the forest.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentForest {
    roots: Arc<Vec<CommentNode>>,
}

impl CommentForest {
    pub fn new(roots: Vec<CommentNode>) -> Self {
        Self {
            roots: Arc::new(roots),
        }
    }

    /// Top-level comments, in display order.
    pub fn roots(&self) -> &[CommentNode] {
        &self.roots
    }

    pub fn find(&self, id: CommentId) -> Option<&CommentNode> {
        find(&self.roots, id)
    }

    pub fn contains(&self, id: CommentId) -> bool {
        self.find(id).is_some()
    }

    /// Total number of nodes at every depth.
    pub fn len(&self) -> usize {
        self.roots.iter().map(CommentNode::subtree_len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Flips `is_liked` and moves `like_count` by one in the same direction.
    /// Returns the new forest and the new liked state.
    pub fn toggle_like(&self, id: CommentId) -> Option<(Self, bool)> {
        self.rewrite(id, |siblings, i| {
            let node = &mut siblings[i];
            node.is_liked = !node.is_liked;
            node.like_count += if node.is_liked { 1 } else { -1 };
            node.is_liked
        })
    }

    /// Appends `reply` as the last child of `parent`, or inserts it as the
    /// first top-level comment when `parent` is `None`.
    pub fn append_reply(&self, parent: Option<CommentId>, reply: CommentNode) -> Option<Self> {
        let Some(parent) = parent else {
            let mut roots = self.roots.as_ref().clone();
            roots.insert(0, reply);
            return Some(Self::new(roots));
        };
        self.rewrite(parent, |siblings, i| siblings[i].children.push(reply))
            .map(|(forest, ())| forest)
    }

    /// Swaps the node with `id` for `node`, keeping its position.
    pub fn replace(&self, id: CommentId, node: CommentNode) -> Option<Self> {
        self.rewrite(id, |siblings, i| siblings[i] = node)
            .map(|(forest, ())| forest)
    }

    /// Removes a node and its whole subtree. Returns the removed node.
    pub fn remove(&self, id: CommentId) -> Option<(Self, CommentNode)> {
        self.rewrite(id, |siblings, i| siblings.remove(i))
    }

    /// Overwrites a node's raw text. Returns the text it replaced.
    pub fn set_text(&self, id: CommentId, text: &str) -> Option<(Self, String)> {
        self.rewrite(id, |siblings, i| {
            std::mem::replace(&mut siblings[i].raw_text, text.to_string())
        })
    }

    /// Copies the tree and applies `edit` to the sibling list holding `id`.
    fn rewrite<T>(
        &self,
        id: CommentId,
        edit: impl FnOnce(&mut Vec<CommentNode>, usize) -> T,
    ) -> Option<(Self, T)> {
        if !self.contains(id) {
            return None;
        }
        let mut roots = self.roots.as_ref().clone();
        let (siblings, i) = slot_mut(&mut roots, id)?;
        let out = edit(siblings, i);
        Some((Self::new(roots), out))
    }
}

impl From<Vec<CommentNode>> for CommentForest {
    fn from(roots: Vec<CommentNode>) -> Self {
        Self::new(roots)
    }
}

fn find(nodes: &[CommentNode], id: CommentId) -> Option<&CommentNode> {
    nodes.iter().find_map(|n| {
        if n.id == id {
            Some(n)
        } else {
            find(&n.children, id)
        }
    })
}

/// The sibling list holding `id` and the node's index in it.
fn slot_mut(nodes: &mut Vec<CommentNode>, id: CommentId) -> Option<(&mut Vec<CommentNode>, usize)> {
    let position = nodes.iter().position(|n| n.id == id);
    if let Some(i) = position {
        return Some((nodes, i));
    }
    nodes
        .iter_mut()
        .find_map(|n| slot_mut(&mut n.children, id))
}
