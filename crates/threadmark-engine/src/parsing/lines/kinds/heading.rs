/// Heading line type: `#` through `#####`, then whitespace, then text.
pub struct Heading;

impl Heading {
    pub const MARKER: u8 = b'#';
    pub const MAX_LEVEL: u8 = 5;
    /// Wraps the heading text of a centered heading: `# ~~~Title~~~`.
    pub const CENTER: &'static str = "~~~";

    /// Returns `(level, text)` when the line is a heading.
    ///
    /// Six or more markers, a missing space, or empty text mean the line is
    /// not a heading.
    pub fn strip(line: &str) -> Option<(u8, &str)> {
        let level = line.bytes().take_while(|&b| b == Self::MARKER).count();
        if level == 0 || level > Self::MAX_LEVEL as usize {
            return None;
        }
        let rest = &line[level..];
        if !rest.starts_with([' ', '\t']) {
            return None;
        }
        let text = rest.trim();
        if text.is_empty() {
            return None;
        }
        Some((level as u8, text))
    }

    /// The inner text when heading text is wrapped in `~~~`.
    pub fn centered(text: &str) -> Option<&str> {
        let inner = text
            .strip_prefix(Self::CENTER)?
            .strip_suffix(Self::CENTER)?
            .trim();
        (!inner.is_empty()).then_some(inner)
    }
}
