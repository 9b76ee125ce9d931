//! Highlight categories, modifiers and the legend advertised to clients.
//!
//! Legend order is the wire contract: indices in the semantic buffer refer
//! to positions in these arrays. Never reorder without a protocol bump.

use std::fmt;

use tower_lsp::lsp_types::{SemanticTokenModifier, SemanticTokenType, SemanticTokensLegend};

use crate::error::LegendError;

/// Highlight category of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Function,
    Variable,
    Comment,
    String,
    Number,
    Keyword,
    Operator,
    Type,
    Parameter,
    Decorator,
}

/// Every category, in legend order.
pub const CATEGORIES: [Category; 10] = [
    Category::Function,
    Category::Variable,
    Category::Comment,
    Category::String,
    Category::Number,
    Category::Keyword,
    Category::Operator,
    Category::Type,
    Category::Parameter,
    Category::Decorator,
];

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Function => "function",
            Category::Variable => "variable",
            Category::Comment => "comment",
            Category::String => "string",
            Category::Number => "number",
            Category::Keyword => "keyword",
            Category::Operator => "operator",
            Category::Type => "type",
            Category::Parameter => "parameter",
            Category::Decorator => "decorator",
        }
    }

    /// Identifier and value categories highlight without their trailing particle.
    pub fn excludes_josi(self) -> bool {
        matches!(
            self,
            Category::Function | Category::Variable | Category::String | Category::Number
        )
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Semantic modifier attached to a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Modifier {
    Declaration,
    Documentation,
    DefaultLibrary,
    Deprecated,
    Readonly,
}

/// Every modifier, in legend order.
pub const MODIFIERS: [Modifier; 5] = [
    Modifier::Declaration,
    Modifier::Documentation,
    Modifier::DefaultLibrary,
    Modifier::Deprecated,
    Modifier::Readonly,
];

impl Modifier {
    pub fn as_str(self) -> &'static str {
        match self {
            Modifier::Declaration => "declaration",
            Modifier::Documentation => "documentation",
            Modifier::DefaultLibrary => "defaultLibrary",
            Modifier::Deprecated => "deprecated",
            Modifier::Readonly => "readonly",
        }
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered category and modifier names used to index the semantic buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Legend {
    categories: Vec<Category>,
    modifiers: Vec<Modifier>,
}

impl Default for Legend {
    fn default() -> Self {
        Self::standard()
    }
}

impl Legend {
    /// The legend published at session start.
    pub fn standard() -> Self {
        Self::new(CATEGORIES.to_vec(), MODIFIERS.to_vec())
    }

    pub fn new(categories: Vec<Category>, modifiers: Vec<Modifier>) -> Self {
        Self {
            categories,
            modifiers,
        }
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn modifiers(&self) -> &[Modifier] {
        &self.modifiers
    }

    /// Legend index of a category.
    pub fn category_index(&self, category: Category) -> Result<u32, LegendError> {
        self.categories
            .iter()
            .position(|c| *c == category)
            .map(|i| i as u32)
            .ok_or(LegendError::UnknownCategory(category))
    }

    /// Encode a modifier set as a bitset, one bit per legend modifier index.
    pub fn modifier_bits(&self, modifiers: &[Modifier]) -> Result<u32, LegendError> {
        modifiers.iter().try_fold(0u32, |bits, modifier| {
            let index = self
                .modifiers
                .iter()
                .position(|m| m == modifier)
                .ok_or(LegendError::UnknownModifier(*modifier))?;
            Ok(bits | (1 << index))
        })
    }

    /// Category name at a legend index, for trace output.
    pub fn category_name(&self, index: u32) -> Option<&'static str> {
        self.categories.get(index as usize).map(|c| c.as_str())
    }

    /// Legend in the shape advertised in the `initialize` response.
    pub fn to_lsp(&self) -> SemanticTokensLegend {
        SemanticTokensLegend {
            token_types: self
                .categories
                .iter()
                .map(|c| SemanticTokenType::new(c.as_str()))
                .collect(),
            token_modifiers: self
                .modifiers
                .iter()
                .map(|m| SemanticTokenModifier::new(m.as_str()))
                .collect(),
        }
    }
}
