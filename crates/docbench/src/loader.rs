//! Parallel JSONL loader (§4.9) and writer.

use std::collections::HashSet;
use std::path::Path;

use rayon::prelude::*;
use tracing::{debug, info, instrument};

use crate::config::Config;
use crate::equation::EquationRenderer;
use crate::error::{Error, Result};
use crate::model::PdfTest;

fn parse_line(line_number: usize, line: &str, renderer: &dyn EquationRenderer) -> Result<Option<PdfTest>> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let mut test: PdfTest = serde_json::from_str(trimmed).map_err(|source| Error::Parse { line: line_number, source })?;

    test.validate().map_err(|reason| Error::Validation { line: line_number, reason })?;

    if let PdfTest::Math(math_test) = &mut test {
        match renderer.render(&math_test.math) {
            Some(render) => math_test.reference_render = Some(render),
            None => {
                return Err(Error::Validation {
                    line: line_number,
                    reason: format!("math equation '{}' was not able to render", math_test.math),
                });
            }
        }
    }

    Ok(Some(test))
}

/// Read, parse, validate, and construct every test in `path`.
///
/// Parsing runs on a rayon thread pool capped at `config.loader_max_workers`.
/// A bad line is fatal to the whole load (§5 "Cancellation"); on success,
/// ids are checked for global uniqueness before returning.
#[instrument(skip(renderer, config), fields(path = %path.as_ref().display()))]
pub fn load(path: impl AsRef<Path>, renderer: &(dyn EquationRenderer + Sync), config: &Config) -> Result<Vec<PdfTest>> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(Error::TestFileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    let lines: Vec<(usize, &str)> = content.lines().enumerate().map(|(i, l)| (i + 1, l)).collect();

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.loader_max_workers)
        .build()
        .map_err(|e| Error::Validation { line: 0, reason: format!("failed to build loader thread pool: {e}") })?;

    let parsed: Result<Vec<Option<PdfTest>>> = pool.install(|| {
        lines
            .par_iter()
            .map(|(line_number, line)| parse_line(*line_number, line, renderer))
            .collect()
    });

    let tests: Vec<PdfTest> = parsed?.into_iter().flatten().collect();
    debug!(count = tests.len(), "parsed test objects");

    let mut seen = HashSet::with_capacity(tests.len());
    for test in &tests {
        if !seen.insert(test.id().to_string()) {
            return Err(Error::DuplicateId(test.id().to_string()));
        }
    }

    info!(count = tests.len(), "loaded test set");
    Ok(tests)
}

/// Write one JSON object per line, one line per test, preserving every field
/// (the cached math render is `#[serde(skip)]` and never round-trips).
pub fn save(tests: &[PdfTest], path: impl AsRef<Path>) -> Result<()> {
    use std::io::Write;

    let mut out = String::new();
    for test in tests {
        let line = serde_json::to_string(test)?;
        out.push_str(&line);
        out.push('\n');
    }

    let mut file = std::fs::File::create(path)?;
    file.write_all(out.as_bytes())?;
    Ok(())
}
