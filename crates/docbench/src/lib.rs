//! A document-extraction benchmark evaluator.
//!
//! Given a declarative test set describing what a PDF's extracted text must
//! (or must not) contain, this crate loads the tests, runs each against a
//! candidate extraction, and reports pass/fail with an explanation. See
//! `SPEC_FULL.md` for the full component breakdown.

pub mod config;
pub mod equation;
pub mod error;
pub mod loader;
pub mod matchers;
pub mod model;
pub mod normalize;
pub mod repeat;
pub mod runner;
pub mod similarity;
pub mod table;

pub use config::Config;
pub use equation::{EquationRenderer, PlainTextRenderer, RenderedImage};
pub use error::{Error, Result};
pub use model::{BaselineTest, Checked, Common, MathTest, OrderTest, PdfTest, PresenceTest, TableTest, TestKind};
pub use runner::{run_all, TestResult};
