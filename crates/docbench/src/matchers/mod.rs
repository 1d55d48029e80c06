//! One matcher per test variant (§4.4-§4.8), dispatched from [`PdfTest::run`].

pub mod baseline;
pub mod math;
pub mod order;
pub mod presence;
pub mod table;

use crate::config::Config;
use crate::equation::EquationRenderer;
use crate::model::PdfTest;

impl PdfTest {
    /// Evaluate this test against `content`. Never panics or returns an
    /// error: a matcher failure is a normal `(false, explanation)` value.
    pub fn run(&self, content: &str, renderer: &dyn EquationRenderer, config: &Config) -> (bool, String) {
        match self {
            PdfTest::Baseline(t) => baseline::run(t, content, config),
            PdfTest::Present(t) => presence::run_present(t, content),
            PdfTest::Absent(t) => presence::run_absent(t, content),
            PdfTest::Order(t) => order::run(t, content),
            PdfTest::Table(t) => table::run(t, content),
            PdfTest::Math(t) => math::run(t, content, renderer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equation::PlainTextRenderer;
    use crate::model::Common;
    use crate::model::PresenceTest;

    #[test]
    fn dispatch_runs_the_matching_variant() {
        let test = PdfTest::Present(PresenceTest {
            common: Common {
                pdf: "a.pdf".to_string(),
                page: 1,
                id: "t1".to_string(),
                max_diffs: 0,
                checked: None,
            },
            text: "hello".to_string(),
            case_sensitive: true,
        });
        let renderer = PlainTextRenderer;
        let config = Config::default();
        let (passed, _) = test.run("hello world", &renderer, &config);
        assert!(passed);
    }
}
