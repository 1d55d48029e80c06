//! Trivial fan-out: run every test against a content string and collect
//! pass/fail results (§2 "Runner / Report").

use crate::config::Config;
use crate::equation::EquationRenderer;
use crate::model::{PdfTest, TestKind};

#[derive(Debug, Clone)]
pub struct TestResult {
    pub id: String,
    pub kind: TestKind,
    pub passed: bool,
    pub explanation: String,
}

/// Run every test in `tests` against the same `content`, in submission
/// order. IDs are the stable identity across results.
pub fn run_all(tests: &[PdfTest], content: &str, renderer: &dyn EquationRenderer, config: &Config) -> Vec<TestResult> {
    tests
        .iter()
        .map(|test| {
            let (passed, explanation) = test.run(content, renderer, config);
            TestResult {
                id: test.id().to_string(),
                kind: test.kind(),
                passed,
                explanation,
            }
        })
        .collect()
}

impl TestResult {
    pub fn summary_line(&self) -> String {
        if self.passed {
            format!("PASS [{}] {}", self.kind, self.id)
        } else {
            format!("FAIL [{}] {}: {}", self.kind, self.id, self.explanation)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equation::PlainTextRenderer;
    use crate::model::{Common, PresenceTest};

    #[test]
    fn run_all_preserves_submission_order() {
        let tests = vec![
            PdfTest::Present(PresenceTest {
                common: Common { pdf: "a.pdf".into(), page: 1, id: "first".into(), max_diffs: 0, checked: None },
                text: "hello".into(),
                case_sensitive: true,
            }),
            PdfTest::Present(PresenceTest {
                common: Common { pdf: "a.pdf".into(), page: 1, id: "second".into(), max_diffs: 0, checked: None },
                text: "world".into(),
                case_sensitive: true,
            }),
        ];
        let renderer = PlainTextRenderer;
        let config = Config::default();
        let results = run_all(&tests, "hello world", &renderer, &config);
        assert_eq!(results[0].id, "first");
        assert_eq!(results[1].id, "second");
        assert!(results.iter().all(|r| r.passed));
    }
}
