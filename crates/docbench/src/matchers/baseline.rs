//! Baseline quality matcher (§4.7).

use crate::config::Config;
use crate::model::BaselineTest;
use crate::repeat::RepeatDetector;

pub fn run(test: &BaselineTest, content: &str, config: &Config) -> (bool, String) {
    let alnum: String = content.chars().filter(|c| c.is_alphanumeric()).collect();
    if alnum.trim().is_empty() {
        return (false, "the text contains no alphanumeric characters".to_string());
    }

    let mut detector = RepeatDetector::new(config.repeat_detector_max_n);
    detector.add_letters(content);
    let repeats = detector.ngram_repeats();
    let max_repeats = test.max_repeats.max(0) as usize;

    for (idx, &count) in repeats.iter().enumerate() {
        let n = idx + 1;
        if count > max_repeats {
            return (
                false,
                format!("the text has {count} repeats of {n}-gram, which exceeds {max_repeats}"),
            );
        }
    }

    let offenders: Vec<char> = content
        .chars()
        .filter(|&c| {
            let code = c as u32;
            config.baseline_disallowed_ranges.iter().any(|range| range.contains(&code))
        })
        .collect();

    if !offenders.is_empty() {
        let listed: String = offenders.iter().collect();
        return (
            false,
            format!("the text contains disallowed characters: {listed}"),
        );
    }

    (true, String::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Common;

    fn baseline(max_repeats: i64) -> BaselineTest {
        BaselineTest {
            common: Common {
                pdf: "a.pdf".to_string(),
                page: 1,
                id: "t1".to_string(),
                max_diffs: 0,
                checked: None,
            },
            max_repeats,
        }
    }

    #[test]
    fn baseline_fail_scenario() {
        let test = baseline(30);
        let config = Config::default();
        let content = "abc".repeat(100);
        let (passed, explanation) = run(&test, &content, &config);
        assert!(!passed);
        assert!(explanation.contains("3-gram") || explanation.contains("exceeds"));
    }

    #[test]
    fn blank_content_fails_alnum_check() {
        let test = baseline(30);
        let config = Config::default();
        let (passed, explanation) = run(&test, "   ...   ", &config);
        assert!(!passed);
        assert!(explanation.contains("alphanumeric"));
    }

    #[test]
    fn normal_prose_passes() {
        let test = baseline(30);
        let config = Config::default();
        let (passed, _) = run(&test, "The quick brown fox jumps over the lazy dog.", &config);
        assert!(passed);
    }

    #[test]
    fn disallowed_script_fails() {
        let test = baseline(30);
        let config = Config::default();
        let (passed, explanation) = run(&test, "hello \u{4e2d}\u{6587}", &config);
        assert!(!passed);
        assert!(explanation.contains("disallowed"));
    }
}
