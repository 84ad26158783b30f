/// Quote marker at the start of a line. Markers stack: `>>` and `> >` are
/// both two levels deep.
pub struct BlockQuote;

impl BlockQuote {
    pub const PREFIX: char = '>';

    /// Returns the nesting depth and the text after the last marker.
    ///
    /// Spaces may precede each marker and one space after a marker belongs
    /// to it. Depth 0 means the line is not a quote and `rest` is the whole
    /// line.
    pub fn strip_prefixes(line: &str) -> (usize, &str) {
        let mut depth = 0;
        let mut rest = line;
        while let Some(after) = rest.trim_start_matches(' ').strip_prefix(Self::PREFIX) {
            depth += 1;
            rest = after.strip_prefix(' ').unwrap_or(after);
        }
        (depth, rest)
    }
}
