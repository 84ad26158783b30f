use std::sync::OnceLock;

use regex::{Captures, Regex};

use crate::parsing::{
    Segment,
    inline::{
        cursor::{Closer, Cursor},
        parse_inline,
        types::Matched,
    },
};

/// Bold, italic, strike and inline spoiler markers.
///
/// Every payload is non-empty and captured non-greedily, so the first
/// closing marker wins. Payloads are parsed again as inline content.
///
/// | kind    | markers                  |
/// |---------|--------------------------|
/// | bold    | `__x__`, `**x**`         |
/// | italic  | `_x_`, `*x*`             |
/// | strike  | `~~x~~`                  |
/// | spoiler | `~!x!~`, `!~x~!`         |
pub struct Emphasis;

impl Emphasis {
    pub fn try_bold(cur: &Cursor<'_>) -> Option<Matched> {
        static BOLD: OnceLock<Regex> = OnceLock::new();
        let re = BOLD
            .get_or_init(|| Regex::new(r"^(?:__(.+?)__|\*\*(.+?)\*\*)").expect("invalid bold regex"));
        wrap(re, cur, Segment::Bold)
    }

    pub fn try_italic(cur: &Cursor<'_>) -> Option<Matched> {
        static ITALIC: OnceLock<Regex> = OnceLock::new();
        let re = ITALIC
            .get_or_init(|| Regex::new(r"^(?:_(.+?)_|\*(.+?)\*)").expect("invalid italic regex"));
        wrap(re, cur, Segment::Italic)
    }

    pub fn try_strike(cur: &Cursor<'_>) -> Option<Matched> {
        static STRIKE: OnceLock<Regex> = OnceLock::new();
        let re = STRIKE.get_or_init(|| Regex::new(r"^~~(.+?)~~").expect("invalid strike regex"));
        wrap(re, cur, Segment::Strike)
    }

    pub fn try_spoiler(cur: &Cursor<'_>) -> Option<Matched> {
        let closer = if cur.starts_with(b"~!") {
            Closer::BangTilde
        } else {
            Closer::TildeBang
        };
        if !cur.closes_later(closer) {
            return None;
        }
        static SPOILER: OnceLock<Regex> = OnceLock::new();
        let re = SPOILER
            .get_or_init(|| Regex::new(r"^(?:~!(.+?)!~|!~(.+?)~!)").expect("invalid spoiler regex"));
        wrap(re, cur, Segment::Spoiler)
    }
}

fn wrap(re: &Regex, cur: &Cursor<'_>, build: fn(Vec<Segment>) -> Segment) -> Option<Matched> {
    let caps = re.captures(cur.rest())?;
    let inner = payload(&caps)?;
    Some(Matched::new(build(parse_inline(inner)), caps[0].len()))
}

/// The first participating group of an alternation.
fn payload<'h>(caps: &Captures<'h>) -> Option<&'h str> {
    caps.iter().skip(1).flatten().next().map(|m| m.as_str())
}
