//! Error types for the language server.
//!
//! None of these reach the client: legend faults drop a single token's
//! annotation and configuration faults keep the previous settings.

use thiserror::Error;

use crate::analysis::legend::{Category, Modifier};

/// A classification entry names something the legend does not publish.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegendError {
    #[error("category '{0}' is not in the semantic token legend")]
    UnknownCategory(Category),

    #[error("modifier '{0}' is not in the semantic token legend")]
    UnknownModifier(Modifier),
}

/// Invalid server settings.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid settings: {0}")]
    Settings(#[from] serde_json::Error),
}
