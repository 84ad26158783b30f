use crate::parsing::Segment;

use super::{
    cursor::Cursor,
    rules::{first_match, is_trigger},
};

/// Parses one line of inline content into segments.
///
/// At each position the rule table is consulted in priority order. When
/// nothing matches, the cursor steps over one character and then skips to
/// the next byte some rule could start with. Skipped characters collect
/// into a single `Text` segment until the next match.
///
/// Every iteration consumes at least one character and recursion only
/// happens on strictly shorter payloads, so this terminates for any input.
pub fn parse_inline(s: &str) -> Vec<Segment> {
    let mut cur = Cursor::new(s);
    let mut out = vec![];
    let mut text_start = 0;

    fn flush_text(out: &mut Vec<Segment>, text: &str) {
        if !text.is_empty() {
            out.push(Segment::Text(text.to_string()));
        }
    }

    while !cur.eof() {
        if let Some(m) = first_match(&cur) {
            debug_assert!(m.len > 0, "inline rules must consume input");
            flush_text(&mut out, &s[text_start..cur.i]);
            cur.bump_n(m.len);
            text_start = cur.i;
            out.push(m.segment);
            continue;
        }
        cur.bump_char();
        cur.skip_until(is_trigger);
    }

    flush_text(&mut out, &s[text_start..]);
    out
}
