//! Relative encoding of semantic tokens into the LSP wire form.

use tower_lsp::lsp_types::{SemanticToken, SemanticTokens};

use super::legend::Legend;

/// Collects absolute `(line, col, length, type, modifiers)` tuples and
/// delta-encodes them against the previous entry.
///
/// Entries must be pushed in increasing document order.
#[derive(Debug, Default)]
pub struct SemanticTokensBuilder {
    data: Vec<SemanticToken>,
    prev_line: u32,
    prev_col: u32,
}

impl SemanticTokensBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, line: u32, col: u32, length: u32, token_type: u32, modifiers: u32) {
        if line < self.prev_line || (line == self.prev_line && col < self.prev_col) {
            tracing::warn!(
                "out-of-order semantic token at L{}:{} (prev L{}:{})",
                line,
                col,
                self.prev_line,
                self.prev_col
            );
        }

        let delta_line = line.saturating_sub(self.prev_line);
        let delta_start = if delta_line == 0 {
            col.saturating_sub(self.prev_col)
        } else {
            col
        };

        self.data.push(SemanticToken {
            delta_line,
            delta_start,
            length,
            token_type,
            token_modifiers_bitset: modifiers,
        });

        self.prev_line = line;
        self.prev_col = col;
    }

    pub fn build(self, result_id: Option<String>) -> SemanticTokens {
        SemanticTokens {
            result_id,
            data: self.data,
        }
    }
}

/// An absolute-position view of one encoded semantic token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodedToken {
    pub line: u32,
    pub col: u32,
    pub length: u32,
    pub token_type: u32,
    pub modifiers: u32,
}

/// Undo the relative encoding.
pub fn decode(data: &[SemanticToken]) -> Vec<DecodedToken> {
    let mut line = 0u32;
    let mut col = 0u32;
    data.iter()
        .map(|token| {
            line += token.delta_line;
            if token.delta_line == 0 {
                col += token.delta_start;
            } else {
                col = token.delta_start;
            }
            DecodedToken {
                line,
                col,
                length: token.length,
                token_type: token.token_type,
                modifiers: token.token_modifiers_bitset,
            }
        })
        .collect()
}

/// Human-readable dump of a semantic buffer, one token per line.
pub fn pretty_dump(data: &[SemanticToken], legend: &Legend) -> String {
    let decoded = decode(data);
    let mut lines = Vec::with_capacity(decoded.len() + 1);
    lines.push(format!("[semantic] {} tokens", decoded.len()));
    for token in decoded {
        lines.push(format!(
            "L{}:{} len={} type={} mods={:#07b}",
            token.line,
            token.col,
            token.length,
            legend.category_name(token.token_type).unwrap_or("?"),
            token.modifiers
        ));
    }
    lines.join("\n")
}
