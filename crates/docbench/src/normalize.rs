//! Whitespace collapsing and typographic-character normalization shared by
//! every text-based matcher.

use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

const REPLACEMENTS: &[(&str, &str)] = &[
    ("\u{2018}", "'"), // ‘
    ("\u{2019}", "'"), // ’
    ("\u{201A}", "'"), // ‚
    ("\u{201C}", "\""), // “
    ("\u{201D}", "\""), // ”
    ("\u{201E}", "\""), // „
    ("\u{FF3F}", "_"), // ＿
    ("\u{2013}", "-"), // –
    ("\u{2014}", "-"), // —
    ("\u{2011}", "-"), // ‑
    ("\u{2012}", "-"), // ‒
];

/// Collapse whitespace runs to a single space, then map typographic
/// punctuation to its ASCII equivalent. Idempotent: `normalize(normalize(s))
/// == normalize(s)`.
pub fn normalize(text: &str) -> String {
    let collapsed = WHITESPACE.replace_all(text, " ");
    let mut out = collapsed.into_owned();
    for (from, to) in REPLACEMENTS {
        out = out.replace(from, to);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_whitespace_runs() {
        assert_eq!(normalize("a   b\t\nc"), "a b c");
    }

    #[test]
    fn maps_curly_quotes_and_dashes() {
        assert_eq!(normalize("\u{2018}hi\u{2019}"), "'hi'");
        assert_eq!(normalize("\u{201C}hi\u{201D}"), "\"hi\"");
        assert_eq!(normalize("a\u{2013}b\u{2014}c"), "a-b-c");
    }

    #[test]
    fn is_idempotent() {
        let s = "  weird\u{2019}  spacing\u{2014}here  ";
        let once = normalize(s);
        let twice = normalize(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn leaves_plain_ascii_untouched() {
        assert_eq!(normalize("hello world"), "hello world");
    }
}
