//! Lexical tokens as produced by a [`Tokenizer`](crate::lexer::Tokenizer).
//!
//! The engine only reads tokens; it never creates or mutates them.

/// A lexical unit with its position span.
///
/// Positions are zero-based and half-open: the token covers
/// `[start_line:start_col, end_line:end_col)`. Columns are counted in the
/// same units as the per-line length table of the owning document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Raw lexical type: a class tag such as `word` or `string`, or the
    /// literal spelling of a keyword or operator such as `もし` or `+`.
    pub kind: String,
    /// Source text of the token, particle included.
    pub text: String,
    pub start_line: u32,
    pub start_col: u32,
    pub end_line: u32,
    pub end_col: u32,
    /// End column on `end_line` with the trailing particle excluded.
    pub res_end_col: u32,
    /// Trailing grammatical particle, empty if none.
    pub josi: String,
    /// Column on `end_line` where `josi` begins. `Some` iff `josi` is non-empty.
    pub josi_start_col: Option<u32>,
}

impl Token {
    /// Create a token without a trailing particle.
    pub fn new(
        kind: impl Into<String>,
        text: impl Into<String>,
        start: (u32, u32),
        end: (u32, u32),
    ) -> Self {
        Self {
            kind: kind.into(),
            text: text.into(),
            start_line: start.0,
            start_col: start.1,
            end_line: end.0,
            end_col: end.1,
            res_end_col: end.1,
            josi: String::new(),
            josi_start_col: None,
        }
    }

    /// Attach a trailing particle that starts at `josi_start_col` on the end line.
    pub fn with_josi(mut self, josi: impl Into<String>, josi_start_col: u32) -> Self {
        let josi = josi.into();
        if josi.is_empty() {
            return self;
        }
        self.josi = josi;
        self.josi_start_col = Some(josi_start_col);
        self.res_end_col = josi_start_col;
        self
    }

    /// Whether the token carries a trailing particle.
    pub fn has_josi(&self) -> bool {
        !self.josi.is_empty()
    }

    /// The token text without its trailing particle.
    pub fn stem(&self) -> &str {
        self.text
            .strip_suffix(self.josi.as_str())
            .unwrap_or(self.text.as_str())
    }
}
