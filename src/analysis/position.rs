//! Point queries against a token stream.

use tower_lsp::lsp_types::{Position, Range};

use super::token::Token;

/// Find the token covering `(line, col)`.
///
/// `tokens` must be in document order and non-overlapping. A token ending
/// exactly at `col` does not cover it; the following token may. Positions in
/// a gap between tokens yield `None`.
pub fn token_at_position(tokens: &[Token], line: u32, col: u32) -> Option<&Token> {
    let mut rest = tokens;

    while let Some((token, tail)) = rest.split_first() {
        if token.end_line < line {
            rest = tail;
        } else {
            break;
        }
    }

    while let Some((token, tail)) = rest.split_first() {
        if token.end_line == line && token.end_col <= col {
            rest = tail;
        } else {
            break;
        }
    }

    let token = rest.first()?;
    let starts_before =
        token.start_line < line || (token.start_line == line && token.start_col <= col);
    starts_before.then_some(token)
}

/// Range to highlight for a query at `col` inside `token`.
///
/// A trailing particle is highlighted on its own when the query falls on it;
/// otherwise the token's main content is highlighted without the particle.
pub fn highlight_range(token: &Token, col: u32) -> Range {
    let start = Position::new(token.start_line, token.start_col);
    let end = Position::new(token.end_line, token.end_col);

    match token.josi_start_col {
        Some(josi_start) if token.has_josi() => {
            let josi_pos = Position::new(token.end_line, josi_start);
            if col < josi_start {
                Range::new(start, josi_pos)
            } else {
                Range::new(josi_pos, end)
            }
        }
        _ => Range::new(start, end),
    }
}

/// Token lookup followed by range resolution.
pub fn highlight_at(tokens: &[Token], position: Position) -> Option<Range> {
    token_at_position(tokens, position.line, position.character)
        .map(|token| highlight_range(token, position.character))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stream() -> Vec<Token> {
        vec![
            Token::new("word", "名前を", (0, 0), (0, 7)).with_josi("を", 5),
            Token::new("sys_func", "表示", (0, 9), (0, 11)),
            Token::new("string", "「a\nb」", (1, 2), (2, 2)),
            Token::new("number", "3", (2, 2), (2, 3)),
        ]
    }

    #[test]
    fn finds_covering_token() {
        let tokens = stream();
        assert_eq!(token_at_position(&tokens, 0, 0).map(|t| t.kind.as_str()), Some("word"));
        assert_eq!(token_at_position(&tokens, 0, 10).map(|t| t.kind.as_str()), Some("sys_func"));
    }

    #[test]
    fn gap_between_tokens_is_a_miss() {
        let tokens = stream();
        assert_eq!(token_at_position(&tokens, 0, 7), None);
        assert_eq!(token_at_position(&tokens, 0, 8), None);
        assert_eq!(token_at_position(&tokens, 1, 0), None);
    }

    #[test]
    fn end_boundary_belongs_to_next_token() {
        let tokens = stream();
        assert_eq!(token_at_position(&tokens, 2, 2).map(|t| t.kind.as_str()), Some("number"));
    }

    #[test]
    fn continuation_line_of_multiline_token() {
        let tokens = stream();
        assert_eq!(token_at_position(&tokens, 2, 0).map(|t| t.kind.as_str()), Some("string"));
        assert_eq!(token_at_position(&tokens, 1, 5).map(|t| t.kind.as_str()), Some("string"));
    }

    #[test]
    fn past_last_token_is_a_miss() {
        let tokens = stream();
        assert_eq!(token_at_position(&tokens, 2, 3), None);
        assert_eq!(token_at_position(&tokens, 9, 0), None);
        assert_eq!(token_at_position(&[], 0, 0), None);
    }

    #[test]
    fn particle_sub_ranges() {
        let token = Token::new("word", "名前を", (0, 0), (0, 7)).with_josi("を", 5);
        assert_eq!(
            highlight_range(&token, 3),
            Range::new(Position::new(0, 0), Position::new(0, 5))
        );
        assert_eq!(
            highlight_range(&token, 5),
            Range::new(Position::new(0, 5), Position::new(0, 7))
        );
        assert_eq!(
            highlight_range(&token, 6),
            Range::new(Position::new(0, 5), Position::new(0, 7))
        );
    }

    #[test]
    fn token_without_particle_is_highlighted_whole() {
        let token = Token::new("string", "「a\nb」", (1, 2), (2, 2));
        assert_eq!(
            highlight_range(&token, 1),
            Range::new(Position::new(1, 2), Position::new(2, 2))
        );
    }

    #[test]
    fn multiline_particle_starts_on_end_line() {
        let token = Token::new("string", "「a\nb」を", (1, 2), (2, 3)).with_josi("を", 2);
        assert_eq!(
            highlight_range(&token, 0),
            Range::new(Position::new(1, 2), Position::new(2, 2))
        );
        assert_eq!(
            highlight_range(&token, 2),
            Range::new(Position::new(2, 2), Position::new(2, 3))
        );
    }

    #[test]
    fn highlight_at_combines_lookup_and_range() {
        let tokens = stream();
        assert_eq!(
            highlight_at(&tokens, Position::new(0, 6)),
            Some(Range::new(Position::new(0, 5), Position::new(0, 7)))
        );
        assert_eq!(highlight_at(&tokens, Position::new(0, 8)), None);
    }
}
