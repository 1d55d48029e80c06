//! Math-equivalence matcher (§4.8).
//!
//! Delimiter styles are extracted and blanked in a fixed order — `$$…$$`,
//! `\(…\)`, `\[…\]`, `$…$` — so that, e.g., the outer `$` pair of a `$$…$$`
//! block is already gone by the time the single-`$` pattern runs (see
//! `DESIGN.md` for why this order was pinned).

use once_cell::sync::Lazy;
use regex::Regex;

use crate::equation::EquationRenderer;
use crate::model::MathTest;
use crate::similarity::ratio;

struct DelimiterPattern {
    find: Regex,
    strip: Regex,
}

static PATTERNS: Lazy<[DelimiterPattern; 4]> = Lazy::new(|| {
    [
        DelimiterPattern {
            find: Regex::new(r"(?s)\$\$(.+?)\$\$").unwrap(),
            strip: Regex::new(r"(?s)\$\$(.+?)\$\$").unwrap(),
        },
        DelimiterPattern {
            find: Regex::new(r"(?s)\\\((.+?)\\\)").unwrap(),
            strip: Regex::new(r"(?s)\\\((.+?)\\\)").unwrap(),
        },
        DelimiterPattern {
            find: Regex::new(r"(?s)\\\[(.+?)\\\]").unwrap(),
            strip: Regex::new(r"(?s)\\\[(.+?)\\\]").unwrap(),
        },
        DelimiterPattern {
            find: Regex::new(r"(?s)\$(.+?)\$").unwrap(),
            strip: Regex::new(r"(?s)\$(.+?)\$").unwrap(),
        },
    ]
});

/// Extract every candidate equation body from `content`, scanning delimiter
/// styles in fixed priority order and blanking each matched region before
/// the next style runs.
pub fn extract_candidates(content: &str) -> Vec<String> {
    let mut equations = Vec::new();
    let mut working = content.to_string();

    for pattern in PATTERNS.iter() {
        let found: Vec<String> = pattern
            .find
            .captures_iter(&working)
            .map(|captures| captures.get(1).unwrap().as_str().trim().to_string())
            .collect();
        equations.extend(found);
        working = pattern.strip.replace_all(&working, "").into_owned();
    }

    equations
}

pub fn run(test: &MathTest, content: &str, renderer: &dyn EquationRenderer) -> (bool, String) {
    let mut equations = extract_candidates(content);

    if equations.iter().any(|hyp| hyp == &test.math) {
        return (true, String::new());
    }

    equations.sort_by(|a, b| {
        ratio(b, &test.math)
            .partial_cmp(&ratio(a, &test.math))
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let reference = match &test.reference_render {
        Some(r) => r,
        None => return (false, format!("no match found for {} anywhere in content", test.math)),
    };

    for hypothesis in &equations {
        let Some(rendered) = renderer.render(hypothesis) else {
            continue;
        };
        if renderer.compare(reference, &rendered) {
            return (true, String::new());
        }
    }

    (false, format!("no match found for {} anywhere in content", test.math))
}
