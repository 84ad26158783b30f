//! End-to-end tests for the parsing pipeline.
//!
//! Fixture bodies (.md) and their outline snapshots (.snap) are co-located
//! in `fixtures/`.

use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::parsing::{
    ParseOptions, Parser, Segment, outline, parse_comment, parse_inline, plain_text,
};

// Fixture-based snapshot tests

#[test]
fn fixture_formatting() {
    assert_fixture("formatting");
}

#[test]
fn fixture_blocks() {
    assert_fixture("blocks");
}

#[test]
fn fixture_media_and_entities() {
    assert_fixture("media_and_entities");
}

fn assert_fixture(name: &str) {
    let fixtures_dir = format!("{}/src/parsing/tests/fixtures", env!("CARGO_MANIFEST_DIR"));
    let md = std::fs::read_to_string(format!("{fixtures_dir}/{name}.md")).unwrap();
    let body = md.strip_suffix('\n').unwrap_or(&md);

    insta::with_settings!({
        snapshot_path => fixtures_dir.as_str(),
        prepend_module_to_snapshot => false,
    }, {
        insta::assert_snapshot!(name, outline(&parse_comment(body)));
    });
}

fn text(s: &str) -> Segment {
    Segment::text(s)
}

// Pipeline properties

#[rstest]
#[case("plain words only")]
#[case("**a** _b_ ~~c~~ `d` @e [f](http://g) https://h.org")]
#[case("```\ncode\n```\n~~~\ncenter\n~~~\n~!\nsecret\n!~")]
#[case("> # quoted heading\n---\n&lt;tag&gt;")]
fn parsing_is_deterministic(#[case] input: &str) {
    assert_eq!(parse_comment(input), parse_comment(input));
}

#[rstest]
#[case("hello there")]
#[case("tabs\tand  spaces")]
#[case("日本語のテキスト")]
#[case("why is this happening with you, wise one? ha!")]
fn markup_free_line_is_one_text_segment(#[case] input: &str) {
    assert_eq!(parse_comment(input), vec![text(input)]);
}

#[rstest]
#[case("hidden")]
#[case("**bold** and @someone")]
#[case("[link](http://x.org) `code`")]
fn spoiler_holds_the_parse_of_its_content(#[case] inner: &str) {
    let wrapped = parse_comment(&format!("~!{inner}!~"));
    assert_eq!(wrapped, vec![Segment::Spoiler(parse_comment(inner))]);
}

#[test]
fn fenced_code_is_verbatim() {
    let code = "**not bold** @nobody <b>x</b>\n  [a](b) ~!no!~\n# no heading";
    assert_eq!(
        parse_comment(&format!("```\n{code}\n```")),
        vec![Segment::CodeBlock {
            text: code.into(),
            lang: None,
        }]
    );
}

#[test]
fn bold_link_inline() {
    assert_eq!(
        parse_inline("**[a](http://x)**"),
        vec![Segment::Bold(vec![Segment::Link {
            children: vec![text("a")],
            url: "http://x".into(),
        }])]
    );
}

#[test]
fn lone_bold_link_is_centered_at_top_level() {
    assert_eq!(
        parse_comment("**[a](http://x)**"),
        vec![Segment::Center(parse_inline("**[a](http://x)**"))]
    );
}

#[test]
fn lines_are_separated_by_line_breaks() {
    assert_eq!(
        parse_comment("a\nb\nc"),
        vec![
            text("a"),
            Segment::LineBreak,
            text("b"),
            Segment::LineBreak,
            text("c"),
        ]
    );
}

#[test]
fn html_line_breaks_become_line_breaks() {
    assert_eq!(
        parse_comment("a<br>b<BR />c"),
        parse_comment("a\nb\nc")
    );
}

#[test]
fn entities_are_decoded_once() {
    assert_eq!(parse_comment("&amp;lt;b&amp;gt;"), vec![text("&lt;b&gt;")]);
}

#[test]
fn decoded_markup_is_live() {
    assert_eq!(
        parse_comment("&lt;b&gt;x&lt;/b&gt; &lt;br&gt;y"),
        vec![Segment::Bold(vec![text("x")]), text(" <br>y")]
    );
}

#[test]
fn center_block_contents_go_through_line_rules() {
    assert_eq!(
        parse_comment("~~~\n## Title\nbody\n~~~"),
        vec![Segment::Center(vec![
            Segment::Heading {
                level: 2,
                children: vec![text("Title")],
            },
            Segment::LineBreak,
            text("body"),
        ])]
    );
}

#[test]
fn crlf_input_is_normalized() {
    assert_eq!(parse_comment("a\r\nb"), parse_comment("a\nb"));
}

#[test]
fn centering_can_be_disabled() {
    let parser = Parser::new(ParseOptions {
        center_lone_formatters: false,
    });
    assert_eq!(
        parser.parse("*aside*"),
        vec![Segment::Italic(vec![text("aside")])]
    );
    assert_eq!(
        parse_comment("*aside*"),
        vec![Segment::Center(vec![Segment::Italic(vec![text("aside")])])]
    );
}

#[test]
fn empty_body() {
    assert!(parse_comment("").is_empty());
}

#[rstest]
#[case("**")]
#[case("~~~")]
#[case("```")]
#[case("~!")]
#[case("<a href=")]
#[case("&#x110000; &#0; &#;")]
#[case("[](")]
#[case("@@@@")]
#[case("img(youtube(webm(")]
#[case(">>>>>>>>")]
#[case("#####")]
#[case("\u{0}\u{feff}\u{10ffff}")]
fn malformed_input_degrades_to_text(#[case] input: &str) {
    let segments = parse_comment(input);
    assert!(plain_text(&segments).chars().count() <= input.chars().count());
}
