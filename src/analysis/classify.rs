//! Classification table: raw lexical type -> highlight category and modifiers.
//!
//! The key space covers structural tags emitted by the lexer (`word`,
//! `string`, ...) as well as keyword and operator spellings, which the lexer
//! uses verbatim as their raw type.

use super::legend::{Category, Modifier};

/// Result of classifying a raw token type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// A category with no modifiers.
    Plain(Category),
    /// A category together with one or more modifiers.
    Modified(Category, &'static [Modifier]),
}

impl Classification {
    pub fn category(&self) -> Category {
        match self {
            Classification::Plain(category) | Classification::Modified(category, _) => *category,
        }
    }

    pub fn modifiers(&self) -> &'static [Modifier] {
        match self {
            Classification::Plain(_) => &[],
            Classification::Modified(_, modifiers) => modifiers,
        }
    }
}

/// Raw type the lexer assigns to plain words.
pub const GENERIC_WORD: &str = "word";

/// Whether a raw type is the generic word tag.
pub fn is_generic_word(kind: &str) -> bool {
    kind == GENERIC_WORD
}

/// Look up the classification of a raw token type.
///
/// Unknown types return `None`; such tokens are left unannotated.
pub fn classify(kind: &str) -> Option<Classification> {
    use Category::*;
    use Classification::{Modified, Plain};

    let classification = match kind {
        // Identifiers
        "word" => Plain(Variable),
        "func" => Modified(Function, &[Modifier::Declaration]),
        "user_func" => Plain(Function),
        "sys_func" => Modified(Function, &[Modifier::DefaultLibrary]),
        "sys_var" => Modified(Variable, &[Modifier::DefaultLibrary]),
        "sys_const" => Modified(Variable, &[Modifier::DefaultLibrary, Modifier::Readonly]),
        "arg" => Modified(Parameter, &[Modifier::Declaration]),

        // Literals
        "number" | "bigint" => Plain(Number),
        "string" | "string_ex" => Plain(String),

        // Comments
        "line_comment" | "range_comment" => Plain(Comment),
        "doc_comment" => Modified(Comment, &[Modifier::Documentation]),

        // Declarations and directives
        "def_func" => Modified(Keyword, &[Modifier::Declaration]),
        "変数" | "定数" => Modified(Keyword, &[Modifier::Declaration]),
        "pragma" => Plain(Decorator),

        // Keywords
        "もし" | "ならば" | "違えば" | "でなければ" | "ここまで" | "回" | "間" | "繰返"
        | "増繰返" | "減繰返" | "反復" | "抜ける" | "続ける" | "戻る" | "条件分岐"
        | "エラー監視" | "エラーならば" | "後判定" | "取込" | "逐次実行" | "とは" => {
            Plain(Keyword)
        }

        // Operators and punctuation
        "+" | "-" | "*" | "/" | "%" | "^" | "=" | "==" | "!=" | "<>" | "<" | ">" | "<="
        | ">=" | "&&" | "||" | "&" | "!" | "(" | ")" | "[" | "]" | "{" | "}" | "," | ":"
        | "＋" | "－" | "×" | "÷" | "＝" | "≠" | "＜" | "＞" | "≦" | "≧" | "（" | "）" => {
            Plain(Operator)
        }

        _ => return None,
    };

    Some(classification)
}

/// Whether the highlighted span of a token stops before its trailing particle.
pub fn excludes_josi(kind: &str, classification: &Classification) -> bool {
    classification.category().excludes_josi() || is_generic_word(kind)
}
