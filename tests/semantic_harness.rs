//! Semantic highlighting harness over the default lexer.
//!
//! Each case lexes a source snippet, builds its semantic buffer and checks
//! the decoded segments, or queries the highlight range at a position.
//!
//! Run with: cargo test --test semantic_harness

use nako_lsp::analysis::builder::decode;
use nako_lsp::analysis::legend::MODIFIERS;
use nako_lsp::analysis::{DocumentState, Legend};
use nako_lsp::lexer::NakoLexer;
use tower_lsp::lsp_types::{Position, Range};

// =============================================================================
// SEMANTIC SEGMENTS
// =============================================================================

/// Decoded segment: line, column, length, category, modifiers
type Segment = (u32, u32, u32, &'static str, &'static [&'static str]);

struct TestCase {
    name: &'static str,
    input: &'static str,
    expected: &'static [Segment],
}

const SEGMENT_CASES: &[TestCase] = &[
    TestCase {
        name: "word_with_particle",
        input: "名前を表示",
        expected: &[
            (0, 0, 2, "variable", &[]),
            (0, 3, 2, "function", &["defaultLibrary"]),
        ],
    },
    TestCase {
        name: "string_with_particle",
        input: "「あ」を表示",
        expected: &[
            (0, 0, 3, "string", &[]),
            (0, 4, 2, "function", &["defaultLibrary"]),
        ],
    },
    TestCase {
        name: "multi_line_string",
        input: "「あ\nいう」と表示",
        expected: &[
            (0, 0, 2, "string", &[]),
            (1, 0, 3, "string", &[]),
            (1, 4, 2, "function", &["defaultLibrary"]),
        ],
    },
    TestCase {
        name: "numbers_and_operators",
        input: "A=1+2",
        expected: &[
            (0, 0, 1, "variable", &[]),
            (0, 1, 1, "operator", &[]),
            (0, 2, 1, "number", &[]),
            (0, 3, 1, "operator", &[]),
            (0, 4, 1, "number", &[]),
        ],
    },
    TestCase {
        name: "comment_then_code",
        input: "# メモ\n1",
        expected: &[(0, 0, 4, "comment", &[]), (1, 0, 1, "number", &[])],
    },
    TestCase {
        name: "unclassified_punctuation",
        input: "A、B。",
        expected: &[(0, 0, 1, "variable", &[]), (0, 2, 1, "variable", &[])],
    },
    TestCase {
        name: "function_definition",
        input: "●(AとBを)加算とは",
        expected: &[
            (0, 0, 1, "keyword", &["declaration"]),
            (0, 1, 1, "operator", &[]),
            // parameters keep their particle highlighted
            (0, 2, 2, "parameter", &["declaration"]),
            (0, 4, 2, "parameter", &["declaration"]),
            (0, 6, 1, "operator", &[]),
            (0, 7, 2, "function", &["declaration"]),
        ],
    },
    TestCase {
        name: "function_definition_name_first",
        input: "●加算(AとB)",
        expected: &[
            (0, 0, 1, "keyword", &["declaration"]),
            (0, 1, 2, "function", &["declaration"]),
            (0, 3, 1, "operator", &[]),
            (0, 4, 2, "parameter", &["declaration"]),
            (0, 6, 1, "parameter", &["declaration"]),
            (0, 7, 1, "operator", &[]),
        ],
    },
    TestCase {
        name: "constants_are_readonly",
        input: "はいを表示",
        expected: &[
            (0, 0, 2, "variable", &["defaultLibrary", "readonly"]),
            (0, 3, 2, "function", &["defaultLibrary"]),
        ],
    },
    TestCase {
        name: "empty_document",
        input: "",
        expected: &[],
    },
];

fn segments(input: &str) -> Vec<(u32, u32, u32, String, Vec<String>)> {
    let legend = Legend::standard();
    let mut doc = DocumentState::new();
    doc.update(input, Some(1), &NakoLexer);
    let tokens = doc.semantic_tokens(&legend);

    decode(&tokens.data)
        .into_iter()
        .map(|t| {
            let category = legend
                .category_name(t.token_type)
                .unwrap_or_else(|| panic!("type index {} outside legend", t.token_type))
                .to_string();
            let modifiers = MODIFIERS
                .iter()
                .enumerate()
                .filter(|(i, _)| (t.modifiers & (1 << i)) != 0)
                .map(|(_, m)| m.as_str().to_string())
                .collect();
            (t.line, t.col, t.length, category, modifiers)
        })
        .collect()
}

#[test]
fn semantic_segments() {
    let mut failures = Vec::new();

    for case in SEGMENT_CASES {
        let actual = segments(case.input);
        let expected: Vec<_> = case
            .expected
            .iter()
            .map(|(line, col, len, category, modifiers)| {
                (
                    *line,
                    *col,
                    *len,
                    category.to_string(),
                    modifiers.iter().map(|m| m.to_string()).collect::<Vec<_>>(),
                )
            })
            .collect();
        if actual != expected {
            failures.push(format!(
                "{}:\n  expected {:?}\n  actual   {:?}",
                case.name, expected, actual
            ));
        }
    }

    assert!(failures.is_empty(), "failures:\n{}", failures.join("\n"));
}

#[test]
fn modifier_bits_stay_inside_legend() {
    let legend = Legend::standard();
    let all_bits = (1u32 << legend.modifiers().len()) - 1;
    for case in SEGMENT_CASES {
        let mut doc = DocumentState::new();
        doc.update(case.input, None, &NakoLexer);
        for token in decode(&doc.semantic_tokens(&legend).data) {
            assert!((token.token_type as usize) < legend.categories().len());
            assert_eq!(token.modifiers & !all_bits, 0, "{}", case.name);
        }
    }
}

// =============================================================================
// HIGHLIGHT QUERIES
// =============================================================================

struct HighlightCase {
    name: &'static str,
    input: &'static str,
    at: (u32, u32),
    expected: Option<((u32, u32), (u32, u32))>,
}

const HIGHLIGHT_CASES: &[HighlightCase] = &[
    HighlightCase {
        name: "word_content",
        input: "名前を表示",
        at: (0, 1),
        expected: Some(((0, 0), (0, 2))),
    },
    HighlightCase {
        name: "word_particle",
        input: "名前を表示",
        at: (0, 2),
        expected: Some(((0, 2), (0, 3))),
    },
    HighlightCase {
        name: "token_end_belongs_to_next",
        input: "名前を表示",
        at: (0, 3),
        expected: Some(((0, 3), (0, 5))),
    },
    HighlightCase {
        name: "gap_between_tokens",
        input: "名前  表示",
        at: (0, 3),
        expected: None,
    },
    HighlightCase {
        name: "multi_line_string_content",
        input: "「あ\nいう」と表示",
        at: (1, 1),
        expected: Some(((0, 0), (1, 3))),
    },
    HighlightCase {
        name: "multi_line_string_particle",
        input: "「あ\nいう」と表示",
        at: (1, 3),
        expected: Some(((1, 3), (1, 4))),
    },
    HighlightCase {
        name: "past_end_of_document",
        input: "表示",
        at: (5, 0),
        expected: None,
    },
];

#[test]
fn highlight_queries() {
    for case in HIGHLIGHT_CASES {
        let mut doc = DocumentState::new();
        doc.update(case.input, None, &NakoLexer);
        let actual = doc.highlight_at(Position::new(case.at.0, case.at.1));
        let expected = case.expected.map(|(start, end)| {
            Range::new(Position::new(start.0, start.1), Position::new(end.0, end.1))
        });
        assert_eq!(actual, expected, "{}", case.name);
    }
}

#[test]
fn repeated_builds_are_identical() {
    let legend = Legend::standard();
    let source = "●(AとBを)加算とは\n  「結果」を表示\nここまで\n1と2を加算";

    let mut first = DocumentState::new();
    first.update(source, Some(1), &NakoLexer);
    let mut second = DocumentState::new();
    second.update(source, Some(1), &NakoLexer);

    assert_eq!(
        first.semantic_tokens(&legend).data,
        second.semantic_tokens(&legend).data
    );
}
