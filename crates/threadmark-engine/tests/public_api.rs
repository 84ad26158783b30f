use serde_json::json;
use threadmark_engine::{
    Author, CommentForest, CommentNode, CommentThread, ParseOptions, Parser, Segment, outline,
    parse_comment, preview,
};

#[test]
fn segments_serialize_as_tagged_json() {
    let segments = parse_comment("**hi** @rin<br>img(https://i.example/a.png)");
    assert_eq!(
        serde_json::to_value(&segments).unwrap(),
        json!([
            {"Bold": [{"Text": "hi"}]},
            {"Text": " "},
            {"UserLink": {"display_text": "@rin", "username": "rin"}},
            "LineBreak",
            {"Image": {"url": "https://i.example/a.png", "link_url": "https://i.example/a.png"}},
        ])
    );
}

#[test]
fn segments_deserialize_back() {
    let segments = parse_comment("> ~~gone~~ [x](http://x.org)\n```sh\nls -la\n```");
    let json = serde_json::to_string(&segments).unwrap();
    let back: Vec<Segment> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, segments);
}

#[test]
fn outline_of_a_reply() {
    insta::assert_snapshot!(
        outline(&parse_comment("> # Quoted\nAgreed, @ken.")),
        @r#"
    Blockquote
      Heading 1
        Text "Quoted"
    LineBreak
    Text "Agreed, "
    UserLink @ken (ken)
    Text "."
    "#
    );
}

#[test]
fn options_are_honoured() {
    let parser = Parser::new(ParseOptions {
        center_lone_formatters: false,
    });
    assert!(!parser.options().center_lone_formatters);
    assert_eq!(
        parser.parse("__Rules__"),
        vec![Segment::Bold(vec![Segment::text("Rules")])]
    );
}

#[test]
fn thread_from_json_and_preview() {
    let roots: Vec<CommentNode> = serde_json::from_value(json!([
        {
            "id": 1,
            "author_name": "ayu",
            "raw_text": "First! &lt;3",
            "created_at": 1700000000,
            "like_count": 2,
            "children": [
                {"id": 2, "author_name": "ken", "raw_text": "**welcome**", "created_at": 1700000100}
            ]
        }
    ]))
    .unwrap();
    let forest = CommentForest::from(roots);
    assert_eq!(forest.len(), 2);
    assert_eq!(preview(&parse_comment(&forest.find(1).unwrap().raw_text), 5), "First...");

    let mut thread = CommentThread::new(1, Author::new("me"), forest);
    let pending = thread.add_reply(Some(2), "thanks").unwrap();
    assert_eq!(pending.draft.parent_id, Some(2));
    assert_eq!(thread.comments().len(), 3);
}
