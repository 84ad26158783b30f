//! # Inline Kinds
//!
//! Inline constructs, each owning its delimiters and the matcher that
//! recognizes it at the cursor.
//!
//! ## Types
//!
//! - **`Mention`**: `@username`
//! - **`HtmlTag`**: `<a href>`, `<img src>`, `<b>`/`<strong>`
//! - **`Embed`**: `img220(url)`, `youtube(id)`, `webm(url)`
//! - **`Link`**: `[text](url)` and bare URLs
//! - **`Emphasis`**: bold, italic, strike, inline spoilers
//! - **`CodeSpan`**: raw zone that suppresses other parsing
//!
//! ## Design Principle
//!
//! Matchers only look at the cursor position; they never search ahead for
//! a later start. Ordering between them lives in [`super::rules`].

pub mod code_span;
pub mod embed;
pub mod emphasis;
pub mod html;
pub mod link;
pub mod mention;

pub use code_span::CodeSpan;
pub use embed::Embed;
pub use emphasis::Emphasis;
pub use html::HtmlTag;
pub use link::Link;
pub use mention::Mention;
