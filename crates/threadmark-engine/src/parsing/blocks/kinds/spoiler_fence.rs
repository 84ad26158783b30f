/// Multi-line spoiler: `~!` ... `!~`.
pub struct SpoilerFence;

impl SpoilerFence {
    pub const OPEN: &'static str = "~!";
    pub const CLOSE: &'static str = "!~";
}
