use std::sync::OnceLock;

use regex::Regex;

use crate::parsing::{
    Segment,
    inline::{
        cursor::{Closer, Cursor},
        types::Matched,
    },
};

/// Media embed markers: `img220(url)`, `youtube(id)` and `webm(url)`.
///
/// Marker names are case-insensitive.
pub struct Embed;

impl Embed {
    /// Canonical watch URL prefix for YouTube embeds.
    pub const YOUTUBE_WATCH: &'static str = "https://www.youtube.com/watch?v=";

    /// `img(url)`, `img220(url)`, `img50%(url)`
    pub fn try_image(cur: &Cursor<'_>) -> Option<Matched> {
        if !cur.closes_later(Closer::Paren) {
            return None;
        }
        static IMG: OnceLock<Regex> = OnceLock::new();
        let re = IMG.get_or_init(|| {
            Regex::new(r"(?i)^img(?:[0-9]+%?)?\(\s*([^)\s]+)\s*\)").expect("invalid img regex")
        });
        let caps = re.captures(cur.rest())?;
        Some(Matched::new(Segment::image(&caps[1], None), caps[0].len()))
    }

    /// `youtube(id)` becomes a link to the canonical watch URL.
    pub fn try_youtube(cur: &Cursor<'_>) -> Option<Matched> {
        if !cur.closes_later(Closer::Paren) {
            return None;
        }
        static YOUTUBE: OnceLock<Regex> = OnceLock::new();
        let re = YOUTUBE.get_or_init(|| {
            Regex::new(r"(?i)^youtube\(\s*([^)\s]+)\s*\)").expect("invalid youtube regex")
        });
        let caps = re.captures(cur.rest())?;
        let id = youtube_id(&caps[1])?;
        Some(Matched::new(
            Segment::bare_link(format!("{}{id}", Self::YOUTUBE_WATCH)),
            caps[0].len(),
        ))
    }

    /// `webm(url)` becomes a link to the video.
    pub fn try_webm(cur: &Cursor<'_>) -> Option<Matched> {
        if !cur.closes_later(Closer::Paren) {
            return None;
        }
        static WEBM: OnceLock<Regex> = OnceLock::new();
        let re = WEBM.get_or_init(|| {
            Regex::new(r"(?i)^webm\(\s*([^)\s]+)\s*\)").expect("invalid webm regex")
        });
        let caps = re.captures(cur.rest())?;
        Some(Matched::new(Segment::bare_link(&caps[1]), caps[0].len()))
    }
}

/// Extracts the video id from a bare id, a `watch?v=` URL or a
/// `youtu.be/` short link.
fn youtube_id(payload: &str) -> Option<&str> {
    let id = if let Some((_, query)) = payload.split_once("v=") {
        query.split(['&', '#']).next().unwrap_or(query)
    } else if let Some((_, path)) = payload.split_once("youtu.be/") {
        path.split(['?', '&', '#', '/']).next().unwrap_or(path)
    } else {
        payload.rsplit('/').next().unwrap_or(payload)
    };
    (!id.is_empty()).then_some(id)
}
