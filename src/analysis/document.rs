//! Per-document state: token stream plus cached semantic buffer.

use std::sync::Arc;

use tower_lsp::lsp_types::{Position, Range, SemanticTokens};

use super::legend::Legend;
use super::position::{highlight_at, token_at_position};
use super::semantic::build_semantic_tokens;
use super::token::Token;
use crate::lexer::{line_lengths, Tokenizer};

/// State of an open document.
#[derive(Debug, Clone, Default)]
pub struct DocumentState {
    /// Client version of the last update
    version: Option<i32>,
    /// Token stream in document order
    tokens: Vec<Token>,
    /// Line lengths in the same column units as `tokens`
    line_lengths: Vec<u32>,
    /// Cached semantic buffer, reused while `valid_semantic_tokens` holds
    semantic: Option<Arc<SemanticTokens>>,
    valid_semantic_tokens: bool,
    /// Bumped on every update; used as the semantic buffer result id
    revision: u64,
}

impl DocumentState {
    /// Create an empty document state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole text and re-tokenize it.
    pub fn update(&mut self, text: &str, version: Option<i32>, tokenizer: &dyn Tokenizer) {
        self.tokens = tokenizer.tokenize(text);
        self.line_lengths = line_lengths(text);
        self.version = version;
        self.revision += 1;
        self.valid_semantic_tokens = false;
        tracing::debug!(
            "re-tokenized document revision {}: {} tokens",
            self.revision,
            self.tokens.len()
        );
    }

    pub fn version(&self) -> Option<i32> {
        self.version
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn line_lengths(&self) -> &[u32] {
        &self.line_lengths
    }

    /// Whether the cached semantic buffer matches the current tokens.
    pub fn has_valid_semantic_tokens(&self) -> bool {
        self.valid_semantic_tokens && self.semantic.is_some()
    }

    /// Semantic buffer for the current tokens, computed on first use after
    /// an update and shared until the next one.
    pub fn semantic_tokens(&mut self, legend: &Legend) -> Arc<SemanticTokens> {
        if self.valid_semantic_tokens {
            if let Some(cached) = &self.semantic {
                return Arc::clone(cached);
            }
        }

        let built = Arc::new(build_semantic_tokens(
            &self.tokens,
            &self.line_lengths,
            legend,
            Some(self.revision.to_string()),
        ));
        tracing::debug!(
            "computed {} semantic tokens for revision {}",
            built.data.len(),
            self.revision
        );
        self.semantic = Some(Arc::clone(&built));
        self.valid_semantic_tokens = true;
        built
    }

    /// Token covering `position`, if any.
    pub fn token_at(&self, position: Position) -> Option<&Token> {
        token_at_position(&self.tokens, position.line, position.character)
    }

    /// Range to highlight for a cursor at `position`.
    pub fn highlight_at(&self, position: Position) -> Option<Range> {
        highlight_at(&self.tokens, position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::NakoLexer;

    fn document(text: &str) -> DocumentState {
        let mut doc = DocumentState::new();
        doc.update(text, Some(1), &NakoLexer);
        doc
    }

    #[test]
    fn new_document_is_empty() {
        let doc = DocumentState::new();
        assert!(doc.tokens().is_empty());
        assert!(!doc.has_valid_semantic_tokens());
    }

    #[test]
    fn cache_is_reused_until_update() {
        let legend = Legend::standard();
        let mut doc = document("名前を表示");
        assert!(!doc.has_valid_semantic_tokens());

        let first = doc.semantic_tokens(&legend);
        assert!(doc.has_valid_semantic_tokens());
        let second = doc.semantic_tokens(&legend);
        assert!(Arc::ptr_eq(&first, &second));

        doc.update("1を表示", Some(2), &NakoLexer);
        assert!(!doc.has_valid_semantic_tokens());
        let third = doc.semantic_tokens(&legend);
        assert!(!Arc::ptr_eq(&first, &third));
        assert_ne!(first.result_id, third.result_id);
        assert_eq!(doc.version(), Some(2));
    }

    #[test]
    fn recomputation_matches_cache() {
        let legend = Legend::standard();
        let mut doc = document("「あ\nい」を表示");
        let cached = doc.semantic_tokens(&legend);
        let rebuilt = build_semantic_tokens(
            doc.tokens(),
            doc.line_lengths(),
            &legend,
            cached.result_id.clone(),
        );
        assert_eq!(*cached, rebuilt);
    }

    #[test]
    fn point_queries_use_live_tokens() {
        let doc = document("名前を表示");
        assert_eq!(doc.token_at(Position::new(0, 1)).map(|t| t.kind.as_str()), Some("word"));
        assert_eq!(
            doc.highlight_at(Position::new(0, 2)),
            Some(Range::new(Position::new(0, 2), Position::new(0, 3)))
        );
        assert_eq!(doc.highlight_at(Position::new(3, 0)), None);
    }
}
