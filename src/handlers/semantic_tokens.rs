//! Semantic tokens handler.

use tower_lsp::lsp_types::*;

use crate::analysis::DocumentRegistry;

/// Full-document semantic tokens; a document that is not open yields an
/// empty buffer.
pub fn get_semantic_tokens(registry: &mut DocumentRegistry, uri: &Url) -> SemanticTokens {
    match registry.semantic_tokens(uri) {
        Some(tokens) => (*tokens).clone(),
        None => {
            tracing::debug!("semantic tokens requested for unopened document {}", uri);
            SemanticTokens::default()
        }
    }
}

/// Delta requests are not supported; answer with an empty buffer.
pub fn empty_delta() -> SemanticTokensFullDeltaResult {
    SemanticTokensFullDeltaResult::Tokens(SemanticTokens::default())
}

/// Range requests are not supported; answer with an empty buffer.
pub fn empty_range() -> SemanticTokensRangeResult {
    SemanticTokensRangeResult::Tokens(SemanticTokens::default())
}
