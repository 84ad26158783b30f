use crate::parsing::{
    Segment,
    inline::{cursor::Cursor, types::Matched},
};

/// Code span inline type with owned delimiter constant.
///
/// Code spans are raw zones: their content is never parsed further.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick character that delimits code spans.
    pub const TICK: u8 = b'`';

    /// Matches `` `code` `` at the cursor. Empty spans do not match.
    pub fn try_match(cur: &Cursor<'_>) -> Option<Matched> {
        if cur.peek() != Some(Self::TICK) {
            return None;
        }
        let rest = cur.rest();
        let close = rest[1..].find(Self::TICK as char)? + 1;
        if close == 1 {
            return None;
        }
        Some(Matched::new(
            Segment::InlineCode(rest[1..close].to_string()),
            close + 1,
        ))
    }
}
