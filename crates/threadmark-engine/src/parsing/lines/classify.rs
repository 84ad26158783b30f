use super::kinds::{BlockQuote, Heading, HorizontalRule};

/// Classification of a single line by its line-start marker.
///
/// Only local facts: the line is looked at on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass<'a> {
    /// `# ~~~Title~~~`
    CenteredHeading { level: u8, text: &'a str },
    /// `## Title`
    Heading { level: u8, text: &'a str },
    /// `> text`, `>> nested`; `rest` is the line after every prefix.
    Blockquote { depth: usize, rest: &'a str },
    /// `---`
    HorizontalRule,
    /// No line-start marker.
    Plain(&'a str),
}

/// Classifies a line, in priority order: centered heading, heading,
/// blockquote, horizontal rule.
pub fn classify(line: &str) -> LineClass<'_> {
    if let Some((level, text)) = Heading::strip(line) {
        return match Heading::centered(text) {
            Some(inner) => LineClass::CenteredHeading { level, text: inner },
            None => LineClass::Heading { level, text },
        };
    }
    let (depth, rest) = BlockQuote::strip_prefixes(line);
    if depth > 0 {
        return LineClass::Blockquote { depth, rest };
    }
    if HorizontalRule::is_rule(line) {
        return LineClass::HorizontalRule;
    }
    LineClass::Plain(line)
}
