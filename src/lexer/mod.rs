//! Tokenization of source text.
//!
//! The analysis engine consumes tokens through [`Tokenizer`]; [`NakoLexer`]
//! is the implementation the server uses.

mod cursor;
mod nako;
pub mod words;

pub use nako::NakoLexer;

use crate::analysis::token::Token;

/// Produces a token stream, in document order, for a full document text.
pub trait Tokenizer: Send + Sync {
    fn tokenize(&self, text: &str) -> Vec<Token>;
}

/// Length of every line in UTF-16 code units, indexed by line number.
///
/// Lines are split on `\n`; a trailing `\r` is not counted.
pub fn line_lengths(text: &str) -> Vec<u32> {
    text.split('\n')
        .map(|line| {
            let line = line.strip_suffix('\r').unwrap_or(line);
            line.encode_utf16().count() as u32
        })
        .collect()
}
