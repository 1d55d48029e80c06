//! Typed configuration knobs for the loader and the baseline quality check.
//!
//! Nothing here performs I/O; constructing a [`Config`] is free. This mirrors
//! the teacher's preference for typed config structs over scattered constants
//! or environment variables read deep inside matcher code.

use std::ops::RangeInclusive;

/// Inclusive Unicode scalar-value ranges treated as disallowed by [`crate::matchers::baseline`].
///
/// The default set assumes a Latin-script, emoji-free benchmark corpus; swap
/// it out for multilingual corpora rather than editing the matcher.
pub fn default_disallowed_ranges() -> Vec<RangeInclusive<u32>> {
    vec![
        0x4E00..=0x9FFF,   // CJK Unified Ideographs
        0x3040..=0x309F,   // Hiragana
        0x30A0..=0x30FF,   // Katakana
        0x1F600..=0x1F64F, // Emoticons
        0x1F300..=0x1F5FF, // Misc symbols & pictographs
        0x1F680..=0x1F6FF, // Transport & map symbols
        0x1F1E0..=0x1F1FF, // Regional indicator symbols
    ]
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Caps the loader's parallelism regardless of host core count.
    pub loader_max_workers: usize,
    /// Unicode ranges BaselineTest rejects when found in content.
    pub baseline_disallowed_ranges: Vec<RangeInclusive<u32>>,
    /// Largest n-gram size the repeat detector tracks.
    pub repeat_detector_max_n: usize,
}

impl Default for Config {
    fn default() -> Self {
        let workers = num_cpus::get().min(64).max(1);
        Self {
            loader_max_workers: workers,
            baseline_disallowed_ranges: default_disallowed_ranges(),
            repeat_detector_max_n: 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_worker_cap_is_at_most_64() {
        let config = Config::default();
        assert!(config.loader_max_workers <= 64);
        assert!(config.loader_max_workers >= 1);
    }

    #[test]
    fn default_disallowed_ranges_cover_cjk_and_emoji() {
        let ranges = default_disallowed_ranges();
        assert!(ranges.iter().any(|r| r.contains(&0x4E2D))); // 中
        assert!(ranges.iter().any(|r| r.contains(&0x1F600))); // 😀
    }
}
