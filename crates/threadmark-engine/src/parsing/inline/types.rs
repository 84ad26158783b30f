use crate::parsing::Segment;

/// A successful inline rule match at the cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matched {
    /// The segment built from the match.
    pub segment: Segment,
    /// Bytes consumed, always non-zero.
    pub len: usize,
}

impl Matched {
    pub fn new(segment: Segment, len: usize) -> Self {
        Self { segment, len }
    }
}
