use super::kinds::{CenterFence, CodeFence, SpoilerFence};

/// A top-level piece of a comment body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Chunk<'a> {
    /// Ordinary lines, handed to the line rules.
    Text(&'a str),
    /// Fenced code, kept byte for byte.
    Code { text: &'a str, lang: Option<&'a str> },
    /// `~~~` block content, parsed again and centered.
    Center(&'a str),
    /// `~!` block content, parsed again and hidden.
    Spoiler(&'a str),
}

/// Splits decoded text into block chunks.
///
/// Only line starts can open a block. The first closing delimiter after the
/// opener ends it, wherever it sits. An opener with no closer is left in the
/// surrounding text.
pub fn split_blocks(text: &str) -> Vec<Chunk<'_>> {
    let mut out = vec![];
    let mut text_start = 0;
    let mut line_start = 0;

    while line_start < text.len() {
        if let Some((chunk, len)) = open_block(&text[line_start..]) {
            let before = &text[text_start..line_start];
            push_text(&mut out, before.strip_suffix('\n').unwrap_or(before));
            out.push(chunk);

            let mut end = line_start + len;
            if text[end..].starts_with('\n') {
                end += 1;
            }
            text_start = end;
            line_start = end;
            continue;
        }
        match text[line_start..].find('\n') {
            Some(n) => line_start += n + 1,
            None => break,
        }
    }

    push_text(&mut out, &text[text_start..]);
    out
}

fn push_text<'a>(out: &mut Vec<Chunk<'a>>, text: &'a str) {
    if !text.is_empty() {
        out.push(Chunk::Text(text));
    }
}

/// Tries each block opener at a line start. Returns the chunk and the
/// number of bytes it spans, closing delimiter included.
fn open_block(rest: &str) -> Option<(Chunk<'_>, usize)> {
    if let Some((inner, len)) = fenced(rest, CodeFence::BACKTICKS, CodeFence::BACKTICKS) {
        let (lang, text) = CodeFence::split_lang(inner);
        return Some((Chunk::Code { text, lang }, len));
    }
    if let Some((inner, len)) = fenced(rest, CenterFence::TILDES, CenterFence::TILDES) {
        return Some((Chunk::Center(trim_boundaries(inner)), len));
    }
    if let Some((inner, len)) = fenced(rest, SpoilerFence::OPEN, SpoilerFence::CLOSE) {
        return Some((Chunk::Spoiler(trim_boundaries(inner)), len));
    }
    None
}

fn fenced<'a>(rest: &'a str, open: &str, close: &str) -> Option<(&'a str, usize)> {
    let body = rest.strip_prefix(open)?;
    let end = body.find(close)?;
    Some((&body[..end], open.len() + end + close.len()))
}

/// Drops the newline after the opener and the one before the closer.
fn trim_boundaries(inner: &str) -> &str {
    let inner = inner.strip_prefix('\n').unwrap_or(inner);
    inner.strip_suffix('\n').unwrap_or(inner)
}
