//! Splits a classified token into one highlight segment per source line.

use super::token::Token;

/// Column at which continuation lines of a multi-line token start.
const LINE_START_COL: u32 = 0;

/// A single-line highlight segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub line: u32,
    pub col: u32,
    /// May be zero; a zero-length segment is still emitted.
    pub length: u32,
}

impl Segment {
    pub fn new(line: u32, col: u32, length: u32) -> Self {
        Self { line, col, length }
    }
}

/// Produce the segments covered by `token`, in increasing line order.
///
/// When `exclude_josi` is set the last line stops at `res_end_col`, so the
/// trailing particle is not highlighted. `line_lengths[i]` is the length of
/// line `i` in columns; a line missing from the table is treated as ending at
/// the segment start.
pub fn split(token: &Token, exclude_josi: bool, line_lengths: &[u32]) -> Vec<Segment> {
    let effective_end = if exclude_josi {
        token.res_end_col
    } else {
        token.end_col
    };

    (token.start_line..=token.end_line)
        .map(|line| {
            let col = if line == token.start_line {
                token.start_col
            } else {
                LINE_START_COL
            };
            let end = if line == token.end_line {
                effective_end
            } else {
                line_lengths.get(line as usize).copied().unwrap_or(col)
            };
            Segment::new(line, col, end.saturating_sub(col))
        })
        .collect()
}
