/// Closing delimiters whose last occurrence in a line is recorded when the
/// cursor is created.
///
/// A rule whose closer does not occur past the cursor cannot match, so it
/// can give up without scanning the rest of the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Closer {
    /// `]` ending link text.
    Bracket,
    /// `)` ending a link target or an embed.
    Paren,
    /// `>` ending an HTML tag.
    Angle,
    /// `</` starting an HTML end tag.
    EndTag,
    /// `!~` closing a `~!` spoiler.
    BangTilde,
    /// `~!` closing a `!~` spoiler.
    TildeBang,
}

impl Closer {
    const ALL: [Closer; 6] = [
        Closer::Bracket,
        Closer::Paren,
        Closer::Angle,
        Closer::EndTag,
        Closer::BangTilde,
        Closer::TildeBang,
    ];

    fn pattern(self) -> &'static str {
        match self {
            Closer::Bracket => "]",
            Closer::Paren => ")",
            Closer::Angle => ">",
            Closer::EndTag => "</",
            Closer::BangTilde => "!~",
            Closer::TildeBang => "~!",
        }
    }
}

/// A cursor over one line of inline content.
///
/// Byte-indexed, but every move lands on a char boundary: rules consume
/// whole matches and the plain-text advance steps over full characters.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The string being parsed.
    pub s: &'a str,
    /// Current byte index into `s`.
    pub i: usize,
    /// Last byte index of each [`Closer`], in `Closer::ALL` order.
    last_closers: [Option<usize>; Closer::ALL.len()],
}

impl<'a> Cursor<'a> {
    pub fn new(s: &'a str) -> Self {
        Self {
            s,
            i: 0,
            last_closers: Closer::ALL.map(|c| s.rfind(c.pattern())),
        }
    }

    /// Whether `closer` occurs somewhere after the current byte.
    pub fn closes_later(&self, closer: Closer) -> bool {
        self.last_closers[closer as usize].is_some_and(|at| at > self.i)
    }

    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// Unconsumed input.
    pub fn rest(&self) -> &'a str {
        &self.s[self.i.min(self.s.len())..]
    }

    /// Peeks at the current byte without advancing.
    pub fn peek(&self) -> Option<u8> {
        self.s.as_bytes().get(self.i).copied()
    }

    /// The character just before the cursor, if any.
    pub fn prev_char(&self) -> Option<char> {
        self.s[..self.i.min(self.s.len())].chars().next_back()
    }

    pub fn starts_with(&self, pat: &[u8]) -> bool {
        self.rest().as_bytes().starts_with(pat)
    }

    /// Advances by `n` bytes. Callers pass match lengths, which end on
    /// char boundaries.
    pub fn bump_n(&mut self, n: usize) {
        self.i += n;
    }

    /// Advances past one full character.
    pub fn bump_char(&mut self) {
        if let Some(c) = self.rest().chars().next() {
            self.i += c.len_utf8();
        }
    }

    /// Moves to the next byte for which `is_trigger` holds, or to the end.
    ///
    /// Triggers are ASCII, so the stop position is a char boundary.
    pub fn skip_until(&mut self, is_trigger: impl Fn(u8) -> bool) {
        let bytes = self.s.as_bytes();
        while self.i < bytes.len() && !is_trigger(bytes[self.i]) {
            self.i += 1;
        }
    }
}
