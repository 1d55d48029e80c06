//! Ordering matcher (§4.5): `before` must occur strictly earlier than `after`.

use crate::model::OrderTest;
use crate::normalize::normalize;
use crate::similarity::near_matches;

const ECHO_LEN: usize = 40;

fn truncate(s: &str) -> String {
    s.chars().take(ECHO_LEN).collect()
}

pub fn run(test: &OrderTest, content: &str) -> (bool, String) {
    // §8 order irreflexivity: before == after must fail on any content, even
    // when the text occurs multiple times and an earlier occurrence could
    // otherwise be paired with a later one of "itself".
    if test.before == test.after {
        return (
            false,
            format!("'before' and 'after' are identical ('{}'); order is irreflexive", truncate(&test.before)),
        );
    }

    let normalized = normalize(content);
    let max_dist = test.common.max_diffs_u32();

    let before_matches = near_matches(&test.before, &normalized, max_dist);
    let after_matches = near_matches(&test.after, &normalized, max_dist);

    if before_matches.is_empty() {
        return (false, format!("could not locate 'before' text '{}'", truncate(&test.before)));
    }
    if after_matches.is_empty() {
        return (false, format!("could not locate 'after' text '{}'", truncate(&test.after)));
    }

    let earliest_before = before_matches.iter().map(|m| m.start).min().unwrap();
    let has_valid_pair = before_matches
        .iter()
        .any(|b| after_matches.iter().any(|a| b.start < a.start));

    if has_valid_pair {
        return (true, String::new());
    }

    (
        false,
        format!(
            "found 'before' at position {earliest_before} but no 'after' occurrence follows it"
        ),
    )
}
