//! # Entity Decoding
//!
//! Bodies arrive HTML-escaped. Before any markup rule runs, the text is
//! normalized:
//!
//! - `<br>` markers (any casing, optional `/`) become `\n`
//! - `\r\n` and lone `\r` become `\n`
//! - numeric references (`&#128512;`, `&#x1F600;`) resolve to their code point
//! - reserved escapes (`&amp;`, `&lt;`, `&gt;`, ...) resolve after the numeric
//!   check, within the same left-to-right pass
//!
//! Replacements are never rescanned, so `&amp;#65;` stays `&#65;` and
//! `&#38;lt;` stays `&lt;`. Anything that is not a well-formed reference is
//! left as literal text.

use std::borrow::Cow;
use std::sync::OnceLock;

use regex::{Captures, Regex};

fn br_regex() -> &'static Regex {
    static BR: OnceLock<Regex> = OnceLock::new();
    BR.get_or_init(|| Regex::new(r"(?i)<br\s*/?>").expect("invalid <br> regex"))
}

fn reference_regex() -> &'static Regex {
    static REFERENCE: OnceLock<Regex> = OnceLock::new();
    REFERENCE.get_or_init(|| {
        Regex::new(r"&(?:#(?P<dec>[0-9]{1,8})|#[xX](?P<hex>[0-9a-fA-F]{1,6})|(?P<name>[A-Za-z][A-Za-z0-9]{1,31}));")
            .expect("invalid entity regex")
    })
}

/// Decodes references and canonicalizes line breaks.
pub fn decode_entities(raw: &str) -> String {
    let text = br_regex().replace_all(raw, "\n");
    let text = normalize_newlines(text);
    reference_regex()
        .replace_all(&text, resolve_reference)
        .into_owned()
}

fn normalize_newlines(text: Cow<'_, str>) -> Cow<'_, str> {
    if !text.contains('\r') {
        return text;
    }
    Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
}

fn resolve_reference(caps: &Captures<'_>) -> String {
    let whole = &caps[0];
    if let Some(dec) = caps.name("dec") {
        return numeric(dec.as_str(), 10).unwrap_or_else(|| whole.to_string());
    }
    if let Some(hex) = caps.name("hex") {
        return numeric(hex.as_str(), 16).unwrap_or_else(|| whole.to_string());
    }
    html_escape::decode_html_entities(whole).into_owned()
}

/// Resolves a numeric reference body; `None` for NUL, surrogates and
/// values past U+10FFFF.
fn numeric(digits: &str, radix: u32) -> Option<String> {
    let value = u32::from_str_radix(digits, radix).ok()?;
    if value == 0 {
        return None;
    }
    char::from_u32(value).map(String::from)
}
