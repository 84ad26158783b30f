/// Horizontal rule line: three or more dashes and nothing else.
pub struct HorizontalRule;

impl HorizontalRule {
    pub const DASH: char = '-';
    pub const MIN_DASHES: usize = 3;

    pub fn is_rule(line: &str) -> bool {
        let t = line.trim_end();
        t.len() >= Self::MIN_DASHES && t.chars().all(|c| c == Self::DASH)
    }
}
