use std::sync::OnceLock;

use regex::Regex;

use crate::parsing::{
    Segment,
    inline::{cursor::Cursor, types::Matched},
};

/// `@username` mentions.
pub struct Mention;

impl Mention {
    pub const MARKER: u8 = b'@';

    /// Matches a mention at the cursor.
    ///
    /// The marker must start the text or follow a non-word character, so
    /// `someone@example.com` is left alone.
    pub fn try_match(cur: &Cursor<'_>) -> Option<Matched> {
        static MENTION: OnceLock<Regex> = OnceLock::new();
        let re = MENTION
            .get_or_init(|| Regex::new(r"^@([A-Za-z0-9_]+)").expect("invalid mention regex"));

        if cur.peek() != Some(Self::MARKER) {
            return None;
        }
        if cur
            .prev_char()
            .is_some_and(|c| c.is_alphanumeric() || c == '_')
        {
            return None;
        }
        let caps = re.captures(cur.rest())?;
        Some(Matched::new(
            Segment::UserLink {
                display_text: caps[0].to_string(),
                username: caps[1].to_string(),
            },
            caps[0].len(),
        ))
    }
}
