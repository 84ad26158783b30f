//! # Markup Parsing
//!
//! Turns a raw comment body into a tree of [`Segment`]s.
//!
//! ```text
//! raw ─▶ entities ─▶ blocks ─▶ lines ─▶ inline ─▶ Vec<Segment>
//! ```
//!
//! Entities are decoded exactly once, up front. Center and spoiler blocks
//! feed their content back through the block stage; it is never decoded a
//! second time. Parsing is total: malformed markup degrades to text.

pub mod blocks;
pub mod entities;
pub mod inline;
pub mod lines;
pub mod outline;
pub mod segment;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};

use blocks::{Chunk, split_blocks};

pub use entities::decode_entities;
pub use inline::parse_inline;
pub use outline::outline;
pub use segment::{Segment, plain_text, preview};

/// Knobs that change how a body is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseOptions {
    /// Center a top-level line that is only one bold, italic or strike
    /// construct.
    pub center_lone_formatters: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            center_lone_formatters: true,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Parser {
    options: ParseOptions,
}

impl Parser {
    pub fn new(options: ParseOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> ParseOptions {
        self.options
    }

    /// Parses a raw body. Never fails.
    pub fn parse(&self, raw: &str) -> Vec<Segment> {
        let decoded = decode_entities(raw);
        let segments = self.parse_decoded(&decoded);
        log::trace!(
            "parsed {} bytes into {} top-level segments",
            raw.len(),
            segments.len()
        );
        segments
    }

    fn parse_decoded(&self, text: &str) -> Vec<Segment> {
        let mut out = vec![];
        for chunk in split_blocks(text) {
            match chunk {
                Chunk::Text(text) => self.parse_lines(text, &mut out),
                Chunk::Code { text, lang } => out.push(Segment::CodeBlock {
                    text: text.to_string(),
                    lang: lang.map(str::to_string),
                }),
                Chunk::Center(inner) => out.push(Segment::Center(self.parse_decoded(inner))),
                Chunk::Spoiler(inner) => out.push(Segment::Spoiler(self.parse_decoded(inner))),
            }
        }
        out
    }

    fn parse_lines(&self, text: &str, out: &mut Vec<Segment>) {
        for (i, line) in text.split('\n').enumerate() {
            if i > 0 {
                out.push(Segment::LineBreak);
            }
            out.extend(lines::parse_line(
                line,
                self.options.center_lone_formatters,
            ));
        }
    }
}

/// Parses a raw body with default options.
pub fn parse_comment(raw: &str) -> Vec<Segment> {
    Parser::default().parse(raw)
}
