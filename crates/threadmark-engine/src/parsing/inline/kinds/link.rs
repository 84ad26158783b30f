use std::sync::OnceLock;

use regex::Regex;

use crate::parsing::{
    Segment,
    inline::{
        cursor::{Closer, Cursor},
        parse_inline,
        types::Matched,
    },
};

/// `[text](url)` links and bare `http(s)://` URLs.
pub struct Link;

impl Link {
    pub const OPEN: u8 = b'[';

    /// `[text](url)`. The text is parsed as inline content.
    pub fn try_markdown(cur: &Cursor<'_>) -> Option<Matched> {
        if !cur.closes_later(Closer::Bracket) || !cur.closes_later(Closer::Paren) {
            return None;
        }
        static MARKDOWN: OnceLock<Regex> = OnceLock::new();
        let re = MARKDOWN.get_or_init(|| {
            Regex::new(r"^\[([^\]]+)\]\(\s*([^)\s]+)\s*\)").expect("invalid link regex")
        });
        let caps = re.captures(cur.rest())?;
        Some(Matched::new(
            Segment::Link {
                children: parse_inline(&caps[1]),
                url: caps[2].to_string(),
            },
            caps[0].len(),
        ))
    }

    /// A bare URL, minus trailing punctuation.
    pub fn try_bare_url(cur: &Cursor<'_>) -> Option<Matched> {
        static URL: OnceLock<Regex> = OnceLock::new();
        let re = URL.get_or_init(|| {
            Regex::new(r"^https?://[^\s\[\]()<>]+").expect("invalid URL regex")
        });
        let found = re.find(cur.rest())?;
        let url = found
            .as_str()
            .trim_end_matches(['.', ',', ':', ';', '!', '?']);
        if url.ends_with("://") {
            return None;
        }
        Some(Matched::new(Segment::bare_link(url), url.len()))
    }
}
