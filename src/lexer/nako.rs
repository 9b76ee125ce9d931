//! Lexer for Nadesiko-style source text.

use std::collections::HashSet;

use super::cursor::{is_blank, Cursor};
use super::words::{builtin, is_hiragana, keyword, match_josi, OPERATORS, SUFFIX_KEYWORDS};
use super::Tokenizer;
use crate::analysis::token::Token;

/// Default tokenizer used by the server.
#[derive(Debug, Default, Clone, Copy)]
pub struct NakoLexer;

impl Tokenizer for NakoLexer {
    fn tokenize(&self, text: &str) -> Vec<Token> {
        Lexer::new(text).run()
    }
}

/// Where we are inside a `●` function header. `named` records whether the
/// function name has been read; parameters may come before or after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Definition {
    None,
    /// After `●`, outside the parameter list.
    Header { named: bool },
    /// Inside the parameter list of a header.
    Params { named: bool },
}

struct Lexer {
    cursor: Cursor,
    tokens: Vec<Token>,
    definition: Definition,
    user_funcs: HashSet<String>,
}

impl Lexer {
    fn new(text: &str) -> Self {
        Self {
            cursor: Cursor::new(text),
            tokens: Vec::new(),
            definition: Definition::None,
            user_funcs: HashSet::new(),
        }
    }

    fn run(mut self) -> Vec<Token> {
        while let Some(c) = self.cursor.peek() {
            let start = self.cursor.position();
            let start_index = self.cursor.index();

            let (kind, allow_josi) = match c {
                '\n' => {
                    self.cursor.bump();
                    self.definition = Definition::None;
                    continue;
                }
                c if is_blank(c) => {
                    self.cursor.bump();
                    continue;
                }
                c if is_word_char(c) && !is_digit(c) => {
                    self.word();
                    continue;
                }
                '、' => {
                    self.cursor.bump();
                    ("comma".to_string(), false)
                }
                '。' => {
                    self.cursor.bump();
                    ("eol".to_string(), false)
                }
                '#' | '＃' | '※' => {
                    self.cursor.eat_while(|c| c != '\n');
                    ("line_comment".to_string(), false)
                }
                '/' if self.cursor.peek_nth(1) == Some('/') => {
                    self.cursor.eat_while(|c| c != '\n');
                    ("line_comment".to_string(), false)
                }
                '/' if self.cursor.peek_nth(1) == Some('*') => {
                    let doc = self.cursor.starts_with("/**") && !self.cursor.starts_with("/**/");
                    self.cursor.bump_n(2);
                    self.cursor.eat_through("*/");
                    let kind = if doc { "doc_comment" } else { "range_comment" };
                    (kind.to_string(), false)
                }
                '!' | '！' if self.cursor.at_line_start() => {
                    self.cursor.eat_while(|c| c != '\n');
                    ("pragma".to_string(), false)
                }
                '「' => self.string("」", "string"),
                '『' => self.string("』", "string"),
                '"' => self.string("\"", "string_ex"),
                '“' => self.string("”", "string_ex"),
                c if is_digit(c) => {
                    self.number();
                    ("number".to_string(), true)
                }
                '●' => {
                    self.cursor.bump();
                    self.definition = Definition::Header { named: false };
                    ("def_func".to_string(), false)
                }
                _ => match OPERATORS.iter().find(|op| self.cursor.starts_with(op)) {
                    Some(op) => {
                        self.cursor.bump_n(op.chars().count());
                        self.track_params(op);
                        (op.to_string(), false)
                    }
                    None => {
                        self.cursor.bump();
                        ("unknown".to_string(), false)
                    }
                },
            };

            self.finish(kind, start, start_index, allow_josi);
        }

        let Self {
            mut tokens,
            user_funcs,
            ..
        } = self;
        for token in tokens.iter_mut().filter(|t| t.kind == "word") {
            if user_funcs.contains(token.stem()) {
                token.kind = "user_func".to_string();
            }
        }
        tokens
    }

    fn finish(&mut self, kind: String, start: (u32, u32), start_index: usize, allow_josi: bool) {
        let josi_col = self.cursor.position().1;
        let josi = if allow_josi {
            match_josi(self.cursor.rest())
        } else {
            None
        };
        if let Some(josi) = josi {
            self.cursor.bump_n(josi.chars().count());
        }

        let text = self.cursor.slice(start_index, self.cursor.index());
        let token = Token::new(kind, text, start, self.cursor.position());
        self.tokens.push(match josi {
            Some(josi) => token.with_josi(josi, josi_col),
            None => token,
        });
    }

    fn string(&mut self, close: &str, kind: &str) -> (String, bool) {
        self.cursor.bump();
        self.cursor.eat_through(close);
        (kind.to_string(), true)
    }

    fn number(&mut self) {
        self.cursor.eat_while(is_digit);
        if matches!(self.cursor.peek(), Some('.' | '．'))
            && self.cursor.peek_nth(1).map_or(false, is_digit)
        {
            self.cursor.bump();
            self.cursor.eat_while(is_digit);
        }
    }

    fn word(&mut self) {
        let start = self.cursor.position();
        let start_index = self.cursor.index();
        let (stem_len, josi) = split_word(self.cursor.rest());
        let stem = self.cursor.slice(start_index, start_index + stem_len);

        self.cursor.bump_n(stem_len);
        let kind = self.word_kind(&stem);
        let josi_col = self.cursor.position().1;
        if let Some(josi) = josi {
            self.cursor.bump_n(josi.chars().count());
        }

        let text = self.cursor.slice(start_index, self.cursor.index());
        let token = Token::new(kind, text, start, self.cursor.position());
        self.tokens.push(match josi {
            Some(josi) => token.with_josi(josi, josi_col),
            None => token,
        });
    }

    fn word_kind(&mut self, stem: &str) -> String {
        match self.definition {
            Definition::Params { .. } => return "arg".to_string(),
            Definition::Header { named: false } => {
                self.definition = Definition::Header { named: true };
                self.user_funcs.insert(stem.to_string());
                return "func".to_string();
            }
            Definition::Header { named: true } | Definition::None => {}
        }
        keyword(stem)
            .or_else(|| builtin(stem))
            .unwrap_or("word")
            .to_string()
    }

    fn track_params(&mut self, op: &str) {
        self.definition = match (self.definition, op) {
            (Definition::Header { named }, "(" | "（") => Definition::Params { named },
            (Definition::Params { named }, ")" | "）") => Definition::Header { named },
            (state, _) => state,
        };
    }
}

/// Longest keyword or built-in spelling, okurigana included, in characters.
const MAX_KNOWN_LEN: usize = 12;

/// Split the word at the start of `chars` from an optional particle.
///
/// `chars` starts with a word character; the word ends at the first
/// non-word character at the latest. Returns the length of the word in
/// characters. A particle is only split
/// off after a non-hiragana character or after a known keyword/builtin, so
/// okurigana such as the `す` of `足す` stays part of the word. A kana
/// keyword such as `もし` is split from a directly following non-kana word.
fn split_word(chars: &[char]) -> (usize, Option<&'static str>) {
    let mut prefix = String::new();
    let mut i = 1;
    while i < chars.len() && is_word_char(chars[i]) {
        let rest = &chars[i..];
        let prev_is_kana = is_hiragana(chars[i - 1]);
        let (is_keyword, is_builtin) = if i <= MAX_KNOWN_LEN {
            prefix.push(chars[i - 1]);
            (keyword(&prefix).is_some(), builtin(&prefix).is_some())
        } else {
            (false, false)
        };

        if !prev_is_kana || is_keyword || is_builtin {
            if let Some(josi) = match_josi(rest) {
                return (i, Some(josi));
            }
        }
        if !prev_is_kana && SUFFIX_KEYWORDS.iter().any(|kw| starts_with(rest, kw)) {
            return (i, None);
        }
        if prev_is_kana && is_keyword && !is_hiragana(rest[0]) {
            return (i, None);
        }
        i += 1;
    }
    (i, None)
}

fn starts_with(chars: &[char], prefix: &str) -> bool {
    let mut chars = chars.iter();
    prefix.chars().all(|c| chars.next() == Some(&c))
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn is_digit(c: char) -> bool {
    c.is_ascii_digit() || ('０'..='９').contains(&c)
}
