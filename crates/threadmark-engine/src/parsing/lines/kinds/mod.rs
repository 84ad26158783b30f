pub mod block_quote;
pub mod heading;
pub mod rule;

pub use block_quote::BlockQuote;
pub use heading::Heading;
pub use rule::HorizontalRule;
