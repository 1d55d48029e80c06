//! Presence/absence matcher (§4.4).

use crate::model::PresenceTest;
use crate::normalize::normalize;
use crate::similarity::{partial_ratio, threshold};

const ECHO_LEN: usize = 40;

fn truncate(s: &str) -> String {
    s.chars().take(ECHO_LEN).collect()
}

/// Runs a `present` test: passes iff the partial ratio of `text` against the
/// normalized content clears the threshold.
pub fn run_present(test: &PresenceTest, content: &str) -> (bool, String) {
    run(test, content, true)
}

/// Runs an `absent` test: passes iff the partial ratio falls *below* the
/// threshold.
pub fn run_absent(test: &PresenceTest, content: &str) -> (bool, String) {
    run(test, content, false)
}

fn run(test: &PresenceTest, content: &str, want_present: bool) -> (bool, String) {
    let normalized_content = normalize(content);
    let (reference, haystack) = if test.case_sensitive {
        (test.text.clone(), normalized_content)
    } else {
        (test.text.to_lowercase(), normalized_content.to_lowercase())
    };

    let score = partial_ratio(&reference, &haystack);
    let th = threshold(test.common.max_diffs_u32(), reference.chars().count());

    let passed = if want_present { score >= th } else { score < th };
    if passed {
        return (true, String::new());
    }

    let verb = if want_present { "find" } else { "avoid" };
    (
        false,
        format!(
            "failed to {verb} '{}' (threshold {th:.3}, observed {score:.3})",
            truncate(&reference)
        ),
    )
}
