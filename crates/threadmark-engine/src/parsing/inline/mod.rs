//! # Inline Parsing
//!
//! Cursor-based inline parsing over a single line, driven by an ordered
//! rule table.
//!
//! ## Modules
//!
//! - **`types`**: `Matched`, a segment plus the bytes it consumed
//! - **`kinds`**: inline constructs with owned delimiters and matchers
//! - **`rules`**: the priority table and the combined trigger scan
//! - **`cursor`**: `Cursor` for char-boundary-safe scanning
//! - **`parser`**: `parse_inline()` main entry point
//!
//! ## Precedence
//!
//! Rules are tried in table order at the current position only. Payloads
//! that may hold more markup (bold, links, spoilers, HTML bold/anchors) are
//! parsed again through `parse_inline`; block constructs never nest inside
//! inline ones. Code spans are raw zones: `` `**x**` `` stays verbatim.

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod rules;
pub mod types;

pub use parser::parse_inline;
pub use rules::{InlineRule, RULES};
pub use types::Matched;
