//! The test object model: a closed sum type of five test kinds sharing a
//! common field set, replacing the source's base-class-plus-subclasses
//! design with a tagged `enum`. The `type` JSON key is retained purely as
//! the serialization discriminant (see `SPEC_FULL.md` §9).

use serde::{Deserialize, Serialize};

use crate::equation::RenderedImage;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Checked {
    Verified,
    Rejected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TestKind {
    Baseline,
    Present,
    Absent,
    Order,
    Table,
    Math,
}

impl std::fmt::Display for TestKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            TestKind::Baseline => "baseline",
            TestKind::Present => "present",
            TestKind::Absent => "absent",
            TestKind::Order => "order",
            TestKind::Table => "table",
            TestKind::Math => "math",
        };
        f.write_str(s)
    }
}

/// Fields shared by every test variant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Common {
    pub pdf: String,
    pub page: i64,
    pub id: String,
    #[serde(default)]
    pub max_diffs: i64,
    #[serde(default)]
    pub checked: Option<Checked>,
}

impl Common {
    fn validate(&self) -> Result<(), String> {
        if self.pdf.trim().is_empty() {
            return Err("pdf filename cannot be empty".to_string());
        }
        if self.id.trim().is_empty() {
            return Err("test id cannot be empty".to_string());
        }
        if self.max_diffs < 0 {
            return Err("max_diffs must be zero or positive".to_string());
        }
        Ok(())
    }

    pub fn max_diffs_u32(&self) -> u32 {
        self.max_diffs.max(0) as u32
    }
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PresenceTest {
    #[serde(flatten)]
    pub common: Common,
    pub text: String,
    #[serde(default = "default_true")]
    pub case_sensitive: bool,
}

impl PresenceTest {
    fn validate(&self) -> Result<(), String> {
        self.common.validate()?;
        if self.text.trim().is_empty() {
            return Err("text field cannot be empty".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderTest {
    #[serde(flatten)]
    pub common: Common,
    pub before: String,
    pub after: String,
}

impl OrderTest {
    fn validate(&self) -> Result<(), String> {
        self.common.validate()?;
        if self.before.trim().is_empty() {
            return Err("before field cannot be empty".to_string());
        }
        if self.after.trim().is_empty() {
            return Err("after field cannot be empty".to_string());
        }
        Ok(())
    }
}

fn empty_string() -> String {
    String::new()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableTest {
    #[serde(flatten)]
    pub common: Common,
    pub cell: String,
    #[serde(default = "empty_string")]
    pub up: String,
    #[serde(default = "empty_string")]
    pub down: String,
    #[serde(default = "empty_string")]
    pub left: String,
    #[serde(default = "empty_string")]
    pub right: String,
    #[serde(default = "empty_string")]
    pub top_heading: String,
    #[serde(default = "empty_string")]
    pub left_heading: String,
}

impl TableTest {
    fn validate(&self) -> Result<(), String> {
        self.common.validate()?;
        if self.cell.trim().is_empty() {
            return Err("cell field cannot be empty".to_string());
        }
        Ok(())
    }
}

fn default_max_repeats() -> i64 {
    30
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BaselineTest {
    #[serde(flatten)]
    pub common: Common,
    #[serde(default = "default_max_repeats")]
    pub max_repeats: i64,
}

impl BaselineTest {
    fn validate(&self) -> Result<(), String> {
        self.common.validate()
    }
}

/// The cached rendered reference is populated once, at load time, by
/// [`crate::loader::load`], never by `serde`. It is intentionally absent
/// from the wire format (see `SPEC_FULL.md` §3 "Lifecycle").
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MathTest {
    #[serde(flatten)]
    pub common: Common,
    pub math: String,
    #[serde(skip, default)]
    pub reference_render: Option<RenderedImage>,
}

impl MathTest {
    fn validate(&self) -> Result<(), String> {
        self.common.validate()?;
        if self.math.trim().is_empty() {
            return Err("math test must have a non-empty expression".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PdfTest {
    Baseline(BaselineTest),
    Present(PresenceTest),
    Absent(PresenceTest),
    Order(OrderTest),
    Table(TableTest),
    Math(MathTest),
}

impl PdfTest {
    pub fn kind(&self) -> TestKind {
        match self {
            PdfTest::Baseline(_) => TestKind::Baseline,
            PdfTest::Present(_) => TestKind::Present,
            PdfTest::Absent(_) => TestKind::Absent,
            PdfTest::Order(_) => TestKind::Order,
            PdfTest::Table(_) => TestKind::Table,
            PdfTest::Math(_) => TestKind::Math,
        }
    }

    pub fn common(&self) -> &Common {
        match self {
            PdfTest::Baseline(t) => &t.common,
            PdfTest::Present(t) | PdfTest::Absent(t) => &t.common,
            PdfTest::Order(t) => &t.common,
            PdfTest::Table(t) => &t.common,
            PdfTest::Math(t) => &t.common,
        }
    }

    pub fn id(&self) -> &str {
        &self.common().id
    }

    /// Structural + field-level validation. Does not touch the equation
    /// renderer; math-expression renderability is checked separately by
    /// [`crate::loader::load`] since it needs a renderer instance.
    pub fn validate(&self) -> Result<(), String> {
        match self {
            PdfTest::Baseline(t) => t.validate(),
            PdfTest::Present(t) | PdfTest::Absent(t) => t.validate(),
            PdfTest::Order(t) => t.validate(),
            PdfTest::Table(t) => t.validate(),
            PdfTest::Math(t) => t.validate(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn present_and_absent_share_shape_but_distinct_tags() {
        let json = r#"{"type":"present","pdf":"a.pdf","page":1,"id":"t1","text":"hello"}"#;
        let test: PdfTest = serde_json::from_str(json).unwrap();
        assert_eq!(test.kind(), TestKind::Present);

        let json = r#"{"type":"absent","pdf":"a.pdf","page":1,"id":"t2","text":"hello"}"#;
        let test: PdfTest = serde_json::from_str(json).unwrap();
        assert_eq!(test.kind(), TestKind::Absent);
    }

    #[test]
    fn unknown_type_fails_to_parse() {
        let json = r#"{"type":"bogus","pdf":"a.pdf","page":1,"id":"t1"}"#;
        let result: Result<PdfTest, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn negative_max_diffs_fails_validation() {
        let json = r#"{"type":"present","pdf":"a.pdf","page":1,"id":"t1","text":"hi","max_diffs":-1}"#;
        let test: PdfTest = serde_json::from_str(json).unwrap();
        assert!(test.validate().is_err());
    }

    #[test]
    fn empty_pdf_fails_validation() {
        let json = r#"{"type":"present","pdf":"","page":1,"id":"t1","text":"hi"}"#;
        let test: PdfTest = serde_json::from_str(json).unwrap();
        assert!(test.validate().is_err());
    }

    #[test]
    fn table_constraints_default_to_unconstrained() {
        let json = r#"{"type":"table","pdf":"a.pdf","page":1,"id":"t1","cell":"x"}"#;
        let test: PdfTest = serde_json::from_str(json).unwrap();
        if let PdfTest::Table(t) = test {
            assert_eq!(t.up, "");
            assert_eq!(t.left_heading, "");
        } else {
            panic!("expected table test");
        }
    }

    #[test]
    fn baseline_max_repeats_defaults_to_thirty() {
        let json = r#"{"type":"baseline","pdf":"a.pdf","page":1,"id":"t1"}"#;
        let test: PdfTest = serde_json::from_str(json).unwrap();
        if let PdfTest::Baseline(t) = test {
            assert_eq!(t.max_repeats, 30);
        } else {
            panic!("expected baseline test");
        }
    }

    #[test]
    fn math_reference_render_round_trips_as_none() {
        let json = r#"{"type":"math","pdf":"a.pdf","page":1,"id":"t1","math":"E=mc^2"}"#;
        let test: PdfTest = serde_json::from_str(json).unwrap();
        let reserialized = serde_json::to_string(&test).unwrap();
        assert!(!reserialized.contains("reference_render"));
    }
}
