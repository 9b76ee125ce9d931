//! LSP request handlers.

pub mod highlight;
pub mod hover;
pub mod semantic_tokens;
