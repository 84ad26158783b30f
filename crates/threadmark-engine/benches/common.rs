// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
use threadmark_engine::{CommentId, CommentNode};

#[allow(dead_code)]
pub fn generate_comment_body(size: usize) -> String {
    let base = "# Episode thoughts\n\n> quoting @someone: **that twist** was _wild_\n\nSee [the recap](https://example.org/recap) or https://example.org/faq.\n~!the ending is a dream!~ &amp; ~~nobody~~ saw it coming &#128512;\n\n```rust\nfn main() { println!(\"**not bold**\"); }\n```\n~~~\n**Fin**\n~~~\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_plain_body(size: usize) -> String {
    "Just some ordinary words without any markup in them at all. ".repeat(size)
}

/// One long line of openers that never close.
#[allow(dead_code)]
pub fn generate_unclosed_openers(size: usize) -> String {
    "<b>[img(~!<a href='x'>".repeat(size)
}

/// A forest with `width` roots, each carrying a reply chain `depth` deep.
#[allow(dead_code)]
pub fn generate_forest(width: usize, depth: usize) -> Vec<CommentNode> {
    let mut next_id: CommentId = 1;
    (0..width)
        .map(|_| chain(&mut next_id, depth))
        .collect()
}

#[allow(dead_code)]
fn chain(next_id: &mut CommentId, depth: usize) -> CommentNode {
    let id = *next_id;
    *next_id += 1;
    CommentNode {
        id,
        author_name: format!("user{id}"),
        author_avatar: None,
        raw_text: format!("comment number {id} with **some** markup"),
        created_at: 1_700_000_000 + id,
        like_count: id % 7,
        is_liked: false,
        children: if depth > 1 {
            vec![chain(next_id, depth - 1)]
        } else {
            vec![]
        },
        is_optimistic: false,
    }
}
