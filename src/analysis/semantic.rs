//! Builds the semantic buffer for a whole token stream.

use tower_lsp::lsp_types::SemanticTokens;

use super::builder::SemanticTokensBuilder;
use super::classify::{classify, excludes_josi};
use super::legend::Legend;
use super::spans::split;
use super::token::Token;

/// Classify every token in document order and encode its segments.
///
/// Tokens with an unknown raw type are left out. A token whose category or
/// modifiers are missing from `legend` is logged and left out; the rest of
/// the stream is still processed. The output depends only on the inputs.
pub fn build_semantic_tokens(
    tokens: &[Token],
    line_lengths: &[u32],
    legend: &Legend,
    result_id: Option<String>,
) -> SemanticTokens {
    let mut builder = SemanticTokensBuilder::new();

    for token in tokens {
        let Some(classification) = classify(&token.kind) else {
            tracing::trace!("no classification for token kind '{}'", token.kind);
            continue;
        };

        let encoded = legend.category_index(classification.category()).and_then(|index| {
            legend
                .modifier_bits(classification.modifiers())
                .map(|bits| (index, bits))
        });
        let (type_index, modifier_bits) = match encoded {
            Ok(encoded) => encoded,
            Err(err) => {
                tracing::warn!(
                    "skipping token '{}' ({}) at L{}:{}: {}",
                    token.text,
                    token.kind,
                    token.start_line,
                    token.start_col,
                    err
                );
                continue;
            }
        };

        let exclude_josi = excludes_josi(&token.kind, &classification);
        for segment in split(token, exclude_josi, line_lengths) {
            builder.push(
                segment.line,
                segment.col,
                segment.length,
                type_index,
                modifier_bits,
            );
        }
    }

    builder.build(result_id)
}
