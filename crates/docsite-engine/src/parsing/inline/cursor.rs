use std::collections::HashMap;

/// Which occurrences of a delimiter count as a closer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Closer {
    Any,
    /// Not directly followed by a letter or digit.
    NotBeforeWord,
}

/// The last search for one delimiter: the first closer at or after `from`.
#[derive(Debug, Clone, Copy)]
struct Lookup {
    from: usize,
    found: Option<usize>,
}

/// A cursor over one line of inline content with position tracking.
///
/// `base` is the absolute byte offset of `s` in the document, so spans built
/// from [`Cursor::pos`] index the whole source.
///
/// Closer searches are remembered per delimiter. Openers are tried at
/// increasing positions, so a search only rescans past the previous result
/// and a line costs linear time however many openers stay unclosed.
#[derive(Clone)]
pub struct Cursor<'a> {
    pub s: &'a str,
    pub base: usize,
    /// Current local index into `s`.
    pub i: usize,
    lookups: HashMap<(&'static str, Closer), Lookup>,
}

impl<'a> Cursor<'a> {
    pub fn new(s: &'a str, base: usize) -> Self {
        Self {
            s,
            base,
            i: 0,
            lookups: HashMap::new(),
        }
    }

    /// Current absolute byte position.
    pub fn pos(&self) -> usize {
        self.base + self.i
    }

    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    pub fn peek(&self) -> Option<u8> {
        self.s.as_bytes().get(self.i).copied()
    }

    pub fn starts_with(&self, pat: &[u8]) -> bool {
        self.s.as_bytes()[self.i.min(self.s.len())..].starts_with(pat)
    }

    pub fn bump(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.i += 1;
        Some(b)
    }

    /// The unconsumed remainder of the line.
    pub fn rest(&self) -> &'a str {
        self.s.get(self.i..).unwrap_or("")
    }

    /// Character immediately before the cursor.
    pub fn prev_char(&self) -> Option<char> {
        self.s.get(..self.i)?.chars().next_back()
    }

    /// Local offset of the next `pat` closer, searching at least `skip` bytes ahead.
    ///
    /// `skip` is rounded up to a char boundary so content is never split
    /// inside a multi-byte character.
    pub fn find_from(&mut self, skip: usize, pat: &'static str, closer: Closer) -> Option<usize> {
        self.find_at(self.i + skip, pat, closer)
    }

    /// Local offset of the first `pat` closer at or after local index `start`.
    pub fn find_at(&mut self, start: usize, pat: &'static str, closer: Closer) -> Option<usize> {
        let mut from = start.min(self.s.len());
        while !self.s.is_char_boundary(from) {
            from += 1;
        }

        if let Some(last) = self.lookups.get(&(pat, closer))
            && last.from <= from
            && last.found.is_none_or(|at| at >= from)
        {
            return last.found;
        }

        let found = self.scan(from, pat, closer);
        self.lookups.insert((pat, closer), Lookup { from, found });
        found
    }

    fn scan(&self, mut from: usize, pat: &str, closer: Closer) -> Option<usize> {
        loop {
            let at = from + self.s[from..].find(pat)?;
            let touches_word = self.s[at + pat.len()..]
                .chars()
                .next()
                .is_some_and(char::is_alphanumeric);
            if closer == Closer::Any || !touches_word {
                return Some(at);
            }
            from = at + pat.chars().next().map_or(1, char::len_utf8);
        }
    }
}
