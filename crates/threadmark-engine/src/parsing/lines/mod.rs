//! # Line-Start Rules
//!
//! Whole-line constructs recognized before inline parsing.
//!
//! ## Line Rules
//!
//! 1. **Lone formatter** (top-level lines only): a line that is nothing but
//!    one bold, italic or strike construct is centered
//! 2. **Centered heading**: `# ~~~Title~~~`
//! 3. **Heading**: `#` to `#####`
//! 4. **Blockquote**: `>`; the rest of the line goes through these rules
//!    again, so quotes can hold headings and nest
//! 5. **Horizontal rule**: `---`
//!
//! Anything else is handed to the inline engine unchanged.

pub mod classify;
pub mod kinds;

pub use classify::{LineClass, classify};

use crate::parsing::{Segment, inline::parse_inline};

/// Parses a single line: lone-formatter check, then line rules, then
/// inline rules.
pub fn parse_line(line: &str, center_lone_formatters: bool) -> Vec<Segment> {
    if center_lone_formatters && let Some(seg) = lone_formatter(line) {
        return vec![Segment::Center(vec![seg])];
    }
    parse_classified(line)
}

fn parse_classified(line: &str) -> Vec<Segment> {
    match classify(line) {
        LineClass::CenteredHeading { level, text } => vec![Segment::Center(vec![Segment::Heading {
            level,
            children: parse_inline(text),
        }])],
        LineClass::Heading { level, text } => vec![Segment::Heading {
            level,
            children: parse_inline(text),
        }],
        LineClass::Blockquote { depth, rest } => {
            let mut inner = parse_classified(rest);
            for _ in 0..depth {
                inner = vec![Segment::Blockquote(inner)];
            }
            inner
        }
        LineClass::HorizontalRule => vec![Segment::HorizontalRule],
        LineClass::Plain(text) => parse_inline(text),
    }
}

/// The emphasis segment when the trimmed line is exactly one bold, italic
/// or strike construct.
fn lone_formatter(line: &str) -> Option<Segment> {
    let trimmed = line.trim();
    if !trimmed.starts_with(['_', '*', '~']) {
        return None;
    }
    let mut segments = parse_inline(trimmed);
    match segments.as_slice() {
        [only] if only.is_emphasis() => segments.pop(),
        _ => None,
    }
}
