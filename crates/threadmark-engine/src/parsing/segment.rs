use serde::{Deserialize, Serialize};

/// One node of a parsed body.
///
/// Container variants hold fully resolved children. Trees are plain values:
/// every parse produces a fresh one and nothing is shared between them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Segment {
    /// Literal text with no markup left in it.
    Text(String),
    Bold(Vec<Segment>),
    Italic(Vec<Segment>),
    Strike(Vec<Segment>),
    Center(Vec<Segment>),
    Blockquote(Vec<Segment>),
    /// A heading, `level` in `1..=5`.
    Heading { level: u8, children: Vec<Segment> },
    Spoiler(Vec<Segment>),
    /// Backtick code, kept verbatim.
    InlineCode(String),
    /// Fenced code, kept verbatim. `lang` is the tag after the opening fence.
    CodeBlock { text: String, lang: Option<String> },
    HorizontalRule,
    /// Explicit line boundary inside a paragraph.
    LineBreak,
    /// An embedded image. `link_url` equals `url` unless the image was
    /// wrapped in an anchor.
    Image { url: String, link_url: String },
    Link { children: Vec<Segment>, url: String },
    /// A `@username` mention.
    UserLink { display_text: String, username: String },
}

impl Segment {
    pub fn text(s: impl Into<String>) -> Self {
        Segment::Text(s.into())
    }

    /// An image whose link target defaults to the image itself.
    pub fn image(url: impl Into<String>, link_url: Option<String>) -> Self {
        let url = url.into();
        let link_url = link_url.unwrap_or_else(|| url.clone());
        Segment::Image { url, link_url }
    }

    /// A link whose visible text is the URL.
    pub fn bare_link(url: impl Into<String>) -> Self {
        let url = url.into();
        Segment::Link {
            children: vec![Segment::Text(url.clone())],
            url,
        }
    }

    /// Children of container variants; empty for leaves.
    pub fn children(&self) -> &[Segment] {
        match self {
            Segment::Bold(c)
            | Segment::Italic(c)
            | Segment::Strike(c)
            | Segment::Center(c)
            | Segment::Blockquote(c)
            | Segment::Spoiler(c) => c,
            Segment::Heading { children, .. } | Segment::Link { children, .. } => children,
            _ => &[],
        }
    }

    /// Whether this is one of the inline emphasis containers.
    pub fn is_emphasis(&self) -> bool {
        matches!(
            self,
            Segment::Bold(_) | Segment::Italic(_) | Segment::Strike(_)
        )
    }

    /// Readable text of the subtree, markup stripped.
    ///
    /// Images contribute nothing, line breaks and rules become newlines.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        self.write_plain_text(&mut out);
        out
    }

    fn write_plain_text(&self, out: &mut String) {
        match self {
            Segment::Text(s) | Segment::InlineCode(s) => out.push_str(s),
            Segment::CodeBlock { text, .. } => out.push_str(text),
            Segment::UserLink { display_text, .. } => out.push_str(display_text),
            Segment::LineBreak | Segment::HorizontalRule => out.push('\n'),
            Segment::Image { .. } => {}
            _ => {
                for child in self.children() {
                    child.write_plain_text(out);
                }
            }
        }
    }
}

/// Plain text of a segment list.
pub fn plain_text(segments: &[Segment]) -> String {
    segments.iter().map(Segment::plain_text).collect()
}

/// Plain text truncated to `max` characters with a "..." suffix if needed.
///
/// Used for one-line thread listings.
pub fn preview(segments: &[Segment], max: usize) -> String {
    let text = plain_text(segments);
    let flat = text.split_whitespace().collect::<Vec<_>>().join(" ");
    match flat.char_indices().nth(max) {
        Some((cut, _)) => format!("{}...", &flat[..cut]),
        None => flat,
    }
}
