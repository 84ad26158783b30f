/// Fenced code block: three backticks, an optional language tag, content,
/// three backticks.
pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";

    /// Splits fence content into `(lang, body)`.
    ///
    /// The rest of the opening line is a language tag when it is a single
    /// word; an empty rest is dropped; anything else is content. The newline
    /// before the closing fence is a fence boundary, not content.
    pub fn split_lang(inner: &str) -> (Option<&str>, &str) {
        let Some((first, body)) = inner.split_once('\n') else {
            return (None, inner);
        };
        let tag = first.trim();
        let (lang, body) = if tag.is_empty() {
            (None, body)
        } else if !tag.contains(char::is_whitespace) {
            (Some(tag), body)
        } else {
            (None, inner)
        };
        (lang, body.strip_suffix('\n').unwrap_or(body))
    }
}
