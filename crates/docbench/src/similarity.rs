//! Fuzzy-matching primitives shared by every matcher: `ratio`, `partial_ratio`,
//! `near_matches`, and the threshold derivation from `max_diffs`.
//!
//! `ratio`/`partial_ratio` are built on [`strsim`]'s normalized Levenshtein
//! similarity rather than a vendored port of RapidFuzz; the scores are close
//! enough in practice and the crate is already in the teacher's dependency
//! orbit for string-similarity work.

/// Derive the minimum similarity score a fuzzy match must clear.
///
/// `1 - max_diffs / max(1, len(reference))`, clamped into `[0, 1]`.
pub fn threshold(max_diffs: u32, reference_len: usize) -> f64 {
    let denom = reference_len.max(1) as f64;
    (1.0 - (max_diffs as f64) / denom).clamp(0.0, 1.0)
}

/// Full-length normalized edit similarity in `[0, 1]`.
pub fn ratio(a: &str, b: &str) -> f64 {
    if a.is_empty() && b.is_empty() {
        return 1.0;
    }
    strsim::normalized_levenshtein(a, b)
}

/// Best alignment of `a` as a substring of `b`, as a normalized similarity in
/// `[0, 1]`. If `a` is longer than `b` the roles are swapped, matching the
/// convention that the shorter string is the pattern.
pub fn partial_ratio(a: &str, b: &str) -> f64 {
    let (needle, haystack) = if a.chars().count() <= b.chars().count() {
        (a, b)
    } else {
        (b, a)
    };

    let needle_chars: Vec<char> = needle.chars().collect();
    let haystack_chars: Vec<char> = haystack.chars().collect();

    if needle_chars.is_empty() {
        return if haystack_chars.is_empty() { 1.0 } else { 0.0 };
    }
    if haystack_chars.len() <= needle_chars.len() {
        return ratio(needle, haystack);
    }

    let window = needle_chars.len();
    let mut best = 0.0_f64;
    for start in 0..=(haystack_chars.len() - window) {
        let slice: String = haystack_chars[start..start + window].iter().collect();
        let score = ratio(needle, &slice);
        if score > best {
            best = score;
        }
        if best >= 1.0 {
            break;
        }
    }
    best
}

/// A single bounded-distance occurrence of `pattern` in `haystack`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NearMatch {
    pub start: usize,
    pub distance: usize,
}

/// Find every starting character-index in `haystack` where a window within
/// `max_dist` Levenshtein edits of `pattern` occurs. Window widths from
/// `pattern.len() - max_dist` to `pattern.len() + max_dist` are tried so that
/// insertions/deletions inside the match are tolerated, not just
/// substitutions.
pub fn near_matches(pattern: &str, haystack: &str, max_dist: u32) -> Vec<NearMatch> {
    let pattern_chars: Vec<char> = pattern.chars().collect();
    let haystack_chars: Vec<char> = haystack.chars().collect();
    let max_dist = max_dist as usize;

    if pattern_chars.is_empty() {
        return Vec::new();
    }

    let plen = pattern_chars.len();
    let min_window = plen.saturating_sub(max_dist).max(1);
    let max_window = (plen + max_dist).min(haystack_chars.len());

    let mut matches = Vec::new();
    for start in 0..haystack_chars.len() {
        let mut best_distance: Option<usize> = None;
        for window in min_window..=max_window.max(min_window) {
            if window == 0 || start + window > haystack_chars.len() {
                continue;
            }
            let slice: String = haystack_chars[start..start + window].iter().collect();
            let dist = strsim::levenshtein(pattern, &slice);
            if dist <= max_dist && best_distance.is_none_or(|d| dist < d) {
                best_distance = Some(dist);
            }
        }
        if let Some(distance) = best_distance {
            matches.push(NearMatch { start, distance });
        }
    }
    matches
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_clamps_into_unit_interval() {
        assert!((threshold(0, 10) - 1.0).abs() < 1e-9);
        assert!((threshold(5, 10) - 0.5).abs() < 1e-9);
        assert_eq!(threshold(100, 10), 0.0);
    }

    #[test]
    fn threshold_uses_at_least_one_for_empty_reference() {
        assert_eq!(threshold(1, 0), 0.0);
    }

    #[test]
    fn ratio_identical_strings_is_one() {
        assert_eq!(ratio("hello", "hello"), 1.0);
    }

    #[test]
    fn ratio_empty_vs_empty_is_one() {
        assert_eq!(ratio("", ""), 1.0);
    }

    #[test]
    fn partial_ratio_finds_substring() {
        let score = partial_ratio("Hello World", "...say Hello, World!...");
        assert!(score > 0.8, "score was {score}");
    }

    #[test]
    fn partial_ratio_is_symmetric_in_args() {
        let a = partial_ratio("cat", "a black cat sat");
        let b = partial_ratio("a black cat sat", "cat");
        assert!((a - b).abs() < 1e-9);
    }

    #[test]
    fn near_matches_finds_exact_occurrence() {
        let matches = near_matches("Results", "Introduction ... Results", 0);
        assert!(matches.iter().any(|m| m.distance == 0));
    }

    #[test]
    fn near_matches_respects_budget() {
        let matches = near_matches("xyz", "abcabcabc", 0);
        assert!(matches.is_empty());
    }
}
