use super::Segment;

const INDENT: &str = "  ";

/// Renders segments one node per line, children indented under their
/// parent. Used for snapshots and the CLI's default output.
///
/// ```text
/// Bold
///   Text "hi"
/// LineBreak
/// Link http://x
///   Text "x"
/// ```
pub fn outline(segments: &[Segment]) -> String {
    let mut lines = vec![];
    push_lines(&mut lines, segments, 0);
    lines.join("\n")
}

fn push_lines(lines: &mut Vec<String>, segments: &[Segment], depth: usize) {
    let pad = INDENT.repeat(depth);
    for seg in segments {
        lines.push(format!("{pad}{}", label(seg)));
        if let Segment::CodeBlock { text, .. } = seg {
            for line in text.split('\n') {
                lines.push(format!("{pad}{INDENT}| {line}").trim_end().to_string());
            }
        }
        push_lines(lines, seg.children(), depth + 1);
    }
}

fn label(seg: &Segment) -> String {
    match seg {
        Segment::Text(t) => format!("Text {t:?}"),
        Segment::Bold(_) => "Bold".into(),
        Segment::Italic(_) => "Italic".into(),
        Segment::Strike(_) => "Strike".into(),
        Segment::Center(_) => "Center".into(),
        Segment::Blockquote(_) => "Blockquote".into(),
        Segment::Spoiler(_) => "Spoiler".into(),
        Segment::Heading { level, .. } => format!("Heading {level}"),
        Segment::InlineCode(code) => format!("InlineCode {code:?}"),
        Segment::CodeBlock { lang: Some(lang), .. } => format!("CodeBlock {lang}"),
        Segment::CodeBlock { lang: None, .. } => "CodeBlock".into(),
        Segment::HorizontalRule => "HorizontalRule".into(),
        Segment::LineBreak => "LineBreak".into(),
        Segment::Image { url, link_url } if url == link_url => format!("Image {url}"),
        Segment::Image { url, link_url } => format!("Image {url} -> {link_url}"),
        Segment::Link { url, .. } => format!("Link {url}"),
        Segment::UserLink {
            display_text,
            username,
        } => format!("UserLink {display_text} ({username})"),
    }
}
