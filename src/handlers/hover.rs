//! Hover handler.

use tower_lsp::lsp_types::*;

use crate::analysis::classify::classify;
use crate::analysis::position::highlight_range;
use crate::analysis::{DocumentState, Token};

/// Describe the token under the cursor.
pub fn get_hover(doc: &DocumentState, position: Position) -> Option<Hover> {
    let token = doc.token_at(position)?;
    Some(Hover {
        contents: HoverContents::Markup(MarkupContent {
            kind: MarkupKind::Markdown,
            value: format_token_hover(token),
        }),
        range: Some(highlight_range(token, position.character)),
    })
}

fn format_token_hover(token: &Token) -> String {
    let mut parts = Vec::new();

    parts.push(format!("`{}` ({})", token.stem(), token.kind));
    match classify(&token.kind) {
        Some(classification) => {
            let modifiers: Vec<_> = classification
                .modifiers()
                .iter()
                .map(|m| m.as_str())
                .collect();
            if modifiers.is_empty() {
                parts.push(format!("category: {}", classification.category()));
            } else {
                parts.push(format!(
                    "category: {} [{}]",
                    classification.category(),
                    modifiers.join(", ")
                ));
            }
        }
        None => parts.push("category: none".to_string()),
    }
    if token.has_josi() {
        parts.push(format!("particle: 「{}」", token.josi));
    }

    parts.join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::NakoLexer;

    fn hover_text(text: &str, position: Position) -> Option<(String, Option<Range>)> {
        let mut doc = DocumentState::new();
        doc.update(text, None, &NakoLexer);
        get_hover(&doc, position).map(|hover| match hover.contents {
            HoverContents::Markup(markup) => (markup.value, hover.range),
            other => panic!("unexpected hover contents: {other:?}"),
        })
    }

    #[test]
    fn describes_word_with_particle() {
        let (value, range) = hover_text("名前を表示", Position::new(0, 1)).unwrap();
        assert!(value.contains("`名前` (word)"), "{value}");
        assert!(value.contains("category: variable"), "{value}");
        assert!(value.contains("particle: 「を」"), "{value}");
        assert_eq!(range, Some(Range::new(Position::new(0, 0), Position::new(0, 2))));
    }

    #[test]
    fn lists_modifiers() {
        let (value, _) = hover_text("名前を表示", Position::new(0, 4)).unwrap();
        assert!(value.contains("category: function [defaultLibrary]"), "{value}");
    }

    #[test]
    fn unclassified_token() {
        let (value, _) = hover_text("A。", Position::new(0, 1)).unwrap();
        assert!(value.contains("category: none"), "{value}");
    }

    #[test]
    fn no_hover_outside_tokens() {
        assert!(hover_text("A", Position::new(4, 0)).is_none());
    }
}
