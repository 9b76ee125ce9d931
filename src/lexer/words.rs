//! Word tables for the Nadesiko lexer.

/// Particles recognised after a word, longest first.
pub const JOSI: &[&str] = &[
    "について",
    "くらい",
    "なのか",
    "までを",
    "までの",
    "による",
    "とは",
    "から",
    "まで",
    "だけ",
    "より",
    "ほど",
    "など",
    "では",
    "には",
    "は",
    "を",
    "に",
    "へ",
    "で",
    "と",
    "が",
    "の",
    "や",
    "も",
];

/// Longest particle that `rest` starts with.
pub fn match_josi(rest: &[char]) -> Option<&'static str> {
    JOSI.iter()
        .copied()
        .filter(|josi| {
            let mut chars = rest.iter();
            josi.chars().all(|c| chars.next() == Some(&c))
        })
        .max_by_key(|josi| josi.chars().count())
}

/// Canonical keyword for a word spelling, including common okurigana forms.
pub fn keyword(word: &str) -> Option<&'static str> {
    let canonical = match word {
        "もし" => "もし",
        "ならば" | "なら" => "ならば",
        "違えば" => "違えば",
        "でなければ" => "でなければ",
        "ここまで" => "ここまで",
        "回" => "回",
        "間" => "間",
        "繰返" | "繰り返す" | "繰返す" => "繰返",
        "増繰返" | "増やし繰り返す" => "増繰返",
        "減繰返" | "減らし繰り返す" => "減繰返",
        "反復" => "反復",
        "抜ける" => "抜ける",
        "続ける" => "続ける",
        "戻る" => "戻る",
        "条件分岐" => "条件分岐",
        "エラー監視" => "エラー監視",
        "エラーならば" => "エラーならば",
        "後判定" => "後判定",
        "取込" | "取り込む" => "取込",
        "逐次実行" => "逐次実行",
        "変数" => "変数",
        "定数" => "定数",
        "とは" => "とは",
        _ => return None,
    };
    Some(canonical)
}

/// Keywords that may follow a word without separating space.
pub const SUFFIX_KEYWORDS: &[&str] = &["でなければ", "ならば", "ここまで"];

/// Raw type for built-in names, looked up by okurigana-stripped stem.
pub fn builtin(word: &str) -> Option<&'static str> {
    const FUNCS: &[&str] = &[
        "表示",
        "足",
        "引",
        "掛",
        "割",
        "連続",
        "文字数",
        "置換",
        "今日",
        "乱数",
        "四捨五入",
        "切上",
        "切捨",
        "文字列分解",
        "配列結合",
        "要素数",
        "秒待",
        "言",
        "尋",
        "整数変換",
        "文字列変換",
        "大文字変換",
        "小文字変換",
    ];
    const VARS: &[&str] = &["それ", "対象", "対象キー", "回数"];
    const CONSTS: &[&str] = &["はい", "いいえ", "オン", "オフ", "改行", "タブ", "空", "真", "偽", "PI"];

    if VARS.contains(&word) {
        return Some("sys_var");
    }
    if CONSTS.contains(&word) {
        return Some("sys_const");
    }
    if FUNCS.contains(&strip_okurigana(word)) {
        return Some("sys_func");
    }
    None
}

/// Drop trailing hiragana from a word that does not consist of hiragana only.
pub fn strip_okurigana(word: &str) -> &str {
    let stem = word.trim_end_matches(is_hiragana);
    if stem.is_empty() {
        word
    } else {
        stem
    }
}

pub fn is_hiragana(c: char) -> bool {
    ('\u{3041}'..='\u{309F}').contains(&c)
}

/// Operator and punctuation spellings, longest first.
pub const OPERATORS: &[&str] = &[
    "==", "!=", "<>", "<=", ">=", "&&", "||", "+", "-", "*", "/", "%", "^", "=", "<", ">", "&",
    "!", "(", ")", "[", "]", "{", "}", ",", ":", "＋", "－", "×", "÷", "＝", "≠", "＜", "＞",
    "≦", "≧", "（", "）",
];
