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

/// The raw HTML fragments the dialect accepts: `<a href>`, `<img src>` and
/// `<b>`/`<strong>`.
///
/// Tags match case-insensitively and attributes take either quote style.
/// Any other HTML stays literal text.
pub struct HtmlTag;

impl HtmlTag {
    pub const OPEN: u8 = b'<';

    /// `<a href="..."><img src="..."></a>`: an image with its own link target.
    pub fn try_linked_image(cur: &Cursor<'_>) -> Option<Matched> {
        if !cur.closes_later(Closer::EndTag) {
            return None;
        }
        static LINKED_IMAGE: OnceLock<Regex> = OnceLock::new();
        let re = LINKED_IMAGE.get_or_init(|| {
            Regex::new(
                r#"(?i)^<a\s[^>]*?href\s*=\s*["']([^"']*)["'][^>]*>\s*<img\s[^>]*?src\s*=\s*["']([^"']*)["'][^>]*>\s*</a\s*>"#,
            )
            .expect("invalid linked image regex")
        });
        let caps = re.captures(cur.rest())?;
        Some(Matched::new(
            Segment::image(&caps[2], Some(caps[1].to_string())),
            caps[0].len(),
        ))
    }

    /// `<img src="...">`
    pub fn try_image(cur: &Cursor<'_>) -> Option<Matched> {
        if !cur.closes_later(Closer::Angle) {
            return None;
        }
        static IMAGE: OnceLock<Regex> = OnceLock::new();
        let re = IMAGE.get_or_init(|| {
            Regex::new(r#"(?i)^<img\s[^>]*?src\s*=\s*["']([^"']*)["'][^>]*>"#)
                .expect("invalid image regex")
        });
        let caps = re.captures(cur.rest())?;
        Some(Matched::new(Segment::image(&caps[1], None), caps[0].len()))
    }

    /// `<b>...</b>` or `<strong>...</strong>`
    pub fn try_bold(cur: &Cursor<'_>) -> Option<Matched> {
        if !cur.closes_later(Closer::EndTag) {
            return None;
        }
        static BOLD: OnceLock<Regex> = OnceLock::new();
        let re = BOLD.get_or_init(|| {
            Regex::new(r"(?i)^(?:<b\s*>(.+?)</b\s*>|<strong\s*>(.+?)</strong\s*>)")
                .expect("invalid html bold regex")
        });
        let caps = re.captures(cur.rest())?;
        let inner = caps.get(1).or_else(|| caps.get(2))?.as_str();
        Some(Matched::new(
            Segment::Bold(parse_inline(inner)),
            caps[0].len(),
        ))
    }

    /// `<a href="...">...</a>`
    pub fn try_anchor(cur: &Cursor<'_>) -> Option<Matched> {
        if !cur.closes_later(Closer::EndTag) {
            return None;
        }
        static ANCHOR: OnceLock<Regex> = OnceLock::new();
        let re = ANCHOR.get_or_init(|| {
            Regex::new(r#"(?i)^<a\s[^>]*?href\s*=\s*["']([^"']*)["'][^>]*>(.*?)</a\s*>"#)
                .expect("invalid anchor regex")
        });
        let caps = re.captures(cur.rest())?;
        Some(Matched::new(
            Segment::Link {
                children: parse_inline(&caps[2]),
                url: caps[1].to_string(),
            },
            caps[0].len(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn linked_image() {
        let m = HtmlTag::try_linked_image(&Cursor::new(
            r#"<a href="https://site/page"><img src="https://img/x.png"></a> rest"#,
        ))
        .unwrap();
        assert_eq!(
            m.segment,
            Segment::Image {
                url: "https://img/x.png".into(),
                link_url: "https://site/page".into(),
            }
        );
    }

    #[test]
    fn bare_image_with_extra_attributes() {
        let m = HtmlTag::try_image(&Cursor::new(
            "<IMG width='200' src='https://img/y.gif' alt='y' />",
        ))
        .unwrap();
        assert_eq!(m.segment, Segment::image("https://img/y.gif", None));
    }

    #[test]
    fn html_bold_recurses() {
        let m = HtmlTag::try_bold(&Cursor::new("<b>big *news*</b>")).unwrap();
        assert_eq!(
            m.segment,
            Segment::Bold(vec![
                Segment::text("big "),
                Segment::Italic(vec![Segment::text("news")]),
            ])
        );
    }

    #[test]
    fn strong_is_bold() {
        let m = HtmlTag::try_bold(&Cursor::new("<strong>x</strong>")).unwrap();
        assert_eq!(m.segment, Segment::Bold(vec![Segment::text("x")]));
    }

    #[test]
    fn anchor_captures_href() {
        let m = HtmlTag::try_anchor(&Cursor::new(r#"<a href="http://x">**go**</a>"#)).unwrap();
        assert_eq!(
            m.segment,
            Segment::Link {
                children: vec![Segment::Bold(vec![Segment::text("go")])],
                url: "http://x".into(),
            }
        );
    }

    #[test]
    fn unknown_tags_do_not_match() {
        let cur = Cursor::new("<div>x</div>");
        assert!(HtmlTag::try_linked_image(&cur).is_none());
        assert!(HtmlTag::try_image(&cur).is_none());
        assert!(HtmlTag::try_bold(&cur).is_none());
        assert!(HtmlTag::try_anchor(&cur).is_none());
    }

    #[test]
    fn unclosed_anchor_does_not_match() {
        assert!(HtmlTag::try_anchor(&Cursor::new(r#"<a href="http://x">open"#)).is_none());
    }
}
