use super::{
    cursor::Cursor,
    kinds::{CodeSpan, Embed, Emphasis, HtmlTag, Link, Mention},
    types::Matched,
};

/// One row of the inline priority table.
pub struct InlineRule {
    pub name: &'static str,
    /// Bytes a match can start with. A rule is only tried when the cursor
    /// sits on one of them.
    pub triggers: &'static [u8],
    pub apply: fn(&Cursor<'_>) -> Option<Matched>,
}

/// Inline rules, highest priority first. Position in this table is the
/// only tie-breaker between rules that match at the same spot.
pub const RULES: &[InlineRule] = &[
    InlineRule {
        name: "mention",
        triggers: &[Mention::MARKER],
        apply: Mention::try_match,
    },
    InlineRule {
        name: "html_linked_image",
        triggers: &[HtmlTag::OPEN],
        apply: HtmlTag::try_linked_image,
    },
    InlineRule {
        name: "html_image",
        triggers: &[HtmlTag::OPEN],
        apply: HtmlTag::try_image,
    },
    InlineRule {
        name: "html_bold",
        triggers: &[HtmlTag::OPEN],
        apply: HtmlTag::try_bold,
    },
    InlineRule {
        name: "html_anchor",
        triggers: &[HtmlTag::OPEN],
        apply: HtmlTag::try_anchor,
    },
    InlineRule {
        name: "img_embed",
        triggers: b"iI",
        apply: Embed::try_image,
    },
    InlineRule {
        name: "youtube_embed",
        triggers: b"yY",
        apply: Embed::try_youtube,
    },
    InlineRule {
        name: "webm_embed",
        triggers: b"wW",
        apply: Embed::try_webm,
    },
    InlineRule {
        name: "markdown_link",
        triggers: &[Link::OPEN],
        apply: Link::try_markdown,
    },
    InlineRule {
        name: "bold",
        triggers: b"_*",
        apply: Emphasis::try_bold,
    },
    InlineRule {
        name: "italic",
        triggers: b"_*",
        apply: Emphasis::try_italic,
    },
    InlineRule {
        name: "strike",
        triggers: b"~",
        apply: Emphasis::try_strike,
    },
    InlineRule {
        name: "spoiler",
        triggers: b"~!",
        apply: Emphasis::try_spoiler,
    },
    InlineRule {
        name: "code_span",
        triggers: &[CodeSpan::TICK],
        apply: CodeSpan::try_match,
    },
    InlineRule {
        name: "bare_url",
        triggers: b"h",
        apply: Link::try_bare_url,
    },
];

const fn trigger_table() -> [bool; 256] {
    let mut table = [false; 256];
    let mut r = 0;
    while r < RULES.len() {
        let triggers = RULES[r].triggers;
        let mut k = 0;
        while k < triggers.len() {
            table[triggers[k] as usize] = true;
            k += 1;
        }
        r += 1;
    }
    table
}

static TRIGGERS: [bool; 256] = trigger_table();

/// Whether any rule could start a match at this byte.
pub fn is_trigger(b: u8) -> bool {
    TRIGGERS[b as usize]
}

/// Tries every rule that can start at the cursor, in priority order.
pub fn first_match(cur: &Cursor<'_>) -> Option<Matched> {
    let b = cur.peek()?;
    if !is_trigger(b) {
        return None;
    }
    RULES
        .iter()
        .filter(|rule| rule.triggers.contains(&b))
        .find_map(|rule| (rule.apply)(cur))
}
