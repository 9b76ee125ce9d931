//! Open documents keyed by URI.

use std::collections::HashMap;
use std::sync::Arc;

use tower_lsp::lsp_types::{Position, Range, SemanticTokens, Url};

use super::document::DocumentState;
use super::legend::Legend;
use super::token::Token;
use crate::lexer::{NakoLexer, Tokenizer};

/// Registry of open documents.
///
/// Queries for documents that are not open return `None`; that is an
/// ordinary outcome, not an error.
pub struct DocumentRegistry {
    documents: HashMap<Url, DocumentState>,
    tokenizer: Arc<dyn Tokenizer>,
    legend: Legend,
}

impl Default for DocumentRegistry {
    fn default() -> Self {
        Self::new(Arc::new(NakoLexer))
    }
}

impl DocumentRegistry {
    pub fn new(tokenizer: Arc<dyn Tokenizer>) -> Self {
        Self::with_legend(tokenizer, Legend::standard())
    }

    pub fn with_legend(tokenizer: Arc<dyn Tokenizer>, legend: Legend) -> Self {
        Self {
            documents: HashMap::new(),
            tokenizer,
            legend,
        }
    }

    pub fn legend(&self) -> &Legend {
        &self.legend
    }

    /// Open a document, replacing any previous state under the same URI.
    pub fn open(&mut self, uri: Url, text: &str, version: Option<i32>) {
        tracing::debug!("open {}", uri);
        let mut state = DocumentState::new();
        state.update(text, version, self.tokenizer.as_ref());
        self.documents.insert(uri, state);
    }

    /// Replace a document's full text. An unknown URI is opened.
    pub fn update(&mut self, uri: Url, text: &str, version: Option<i32>) {
        match self.documents.get_mut(&uri) {
            Some(state) => {
                tracing::debug!("update {}", uri);
                state.update(text, version, self.tokenizer.as_ref());
            }
            None => {
                tracing::debug!("update for unopened document {}; opening it", uri);
                self.open(uri, text, version);
            }
        }
    }

    /// Drop a document. Returns whether it was open.
    pub fn close(&mut self, uri: &Url) -> bool {
        tracing::debug!("close {}", uri);
        self.documents.remove(uri).is_some()
    }

    pub fn get(&self, uri: &Url) -> Option<&DocumentState> {
        self.documents.get(uri)
    }

    pub fn contains(&self, uri: &Url) -> bool {
        self.documents.contains_key(uri)
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Semantic buffer of a document, computed on demand and cached.
    pub fn semantic_tokens(&mut self, uri: &Url) -> Option<Arc<SemanticTokens>> {
        let legend = &self.legend;
        self.documents
            .get_mut(uri)
            .map(|state| state.semantic_tokens(legend))
    }

    pub fn token_at(&self, uri: &Url, position: Position) -> Option<&Token> {
        self.documents.get(uri)?.token_at(position)
    }

    pub fn highlight_at(&self, uri: &Url, position: Position) -> Option<Range> {
        self.documents.get(uri)?.highlight_at(position)
    }
}
