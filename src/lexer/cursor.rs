/// Character iterator over source text that tracks line and column.
///
/// Columns are counted in UTF-16 code units, the default position encoding
/// of the protocol. A `\r` directly before `\n` takes no columns.
pub struct Cursor {
    chars: Vec<char>,
    index: usize,
    line: u32,
    col: u32,
    line_start: bool,
}

impl Cursor {
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            index: 0,
            line: 0,
            col: 0,
            line_start: true,
        }
    }

    pub fn peek(&self) -> Option<char> {
        self.chars.get(self.index).copied()
    }

    pub fn peek_nth(&self, n: usize) -> Option<char> {
        self.chars.get(self.index + n).copied()
    }

    /// Remaining characters from the current index.
    pub fn rest(&self) -> &[char] {
        &self.chars[self.index..]
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Current `(line, col)`.
    pub fn position(&self) -> (u32, u32) {
        (self.line, self.col)
    }

    /// Whether only blank space precedes the cursor on the current line.
    pub fn at_line_start(&self) -> bool {
        self.line_start
    }

    pub fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.index += 1;
        match c {
            '\n' => {
                self.line += 1;
                self.col = 0;
                self.line_start = true;
            }
            '\r' if self.peek() == Some('\n') => {}
            c => {
                self.col += c.len_utf16() as u32;
                if !is_blank(c) {
                    self.line_start = false;
                }
            }
        }
        Some(c)
    }

    pub fn bump_n(&mut self, n: usize) {
        for _ in 0..n {
            if self.bump().is_none() {
                break;
            }
        }
    }

    /// Consume characters while `predicate` holds.
    pub fn eat_while(&mut self, predicate: impl Fn(char) -> bool) {
        while let Some(c) = self.peek() {
            if !predicate(c) {
                break;
            }
            self.bump();
        }
    }

    /// Consume up to and including `close`, or to end of input.
    pub fn eat_through(&mut self, close: &str) {
        let close: Vec<char> = close.chars().collect();
        while self.peek().is_some() {
            if self.starts_with_chars(&close) {
                self.bump_n(close.len());
                return;
            }
            self.bump();
        }
    }

    pub fn starts_with(&self, prefix: &str) -> bool {
        let mut rest = self.rest().iter();
        prefix.chars().all(|c| rest.next() == Some(&c))
    }

    fn starts_with_chars(&self, prefix: &[char]) -> bool {
        self.rest().starts_with(prefix)
    }

    /// Source text between two character indices.
    pub fn slice(&self, start: usize, end: usize) -> String {
        self.chars[start..end].iter().collect()
    }
}

pub fn is_blank(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\u{3000}')
}
