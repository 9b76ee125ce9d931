//! Document highlight handler.

use tower_lsp::lsp_types::*;

use crate::analysis::DocumentState;

/// Highlight for the token under the cursor: at most one range, either the
/// token's main content or its trailing particle.
pub fn get_document_highlights(
    doc: &DocumentState,
    position: Position,
) -> Option<Vec<DocumentHighlight>> {
    let range = doc.highlight_at(position)?;
    Some(vec![DocumentHighlight {
        range,
        kind: Some(DocumentHighlightKind::TEXT),
    }])
}
