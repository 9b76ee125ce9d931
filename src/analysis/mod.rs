//! Document analysis for the language server.
//!
//! Classifies tokens into semantic highlight segments and answers position
//! queries against the token stream of each open document.

pub mod builder;
pub mod classify;
pub mod document;
pub mod legend;
pub mod position;
pub mod registry;
pub mod semantic;
pub mod spans;
pub mod token;

pub use document::DocumentState;
pub use legend::{Category, Legend, Modifier};
pub use registry::DocumentRegistry;
pub use token::Token;
