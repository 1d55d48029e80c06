//! Markdown pipe-table extraction (§4.6).
//!
//! Ported from the regex the original evaluator used; see `DESIGN.md` for
//! the open question on escaped pipes (`\|`) and pipes inside code spans —
//! this parser is intentionally lossy there, matching source behavior.

use once_cell::sync::Lazy;
use regex::Regex;

use super::Grid;

static TABLE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?m)(\|?(?:[^|\n]*\|)+[^|\n]*\|?)\s*\n\|?(?:[ :-]+\|)+[ :-]+\|?\s*\n((?:\|?(?:[^|\n]*\|)+[^|\n]*\|?\s*\n)+)",
    )
    .unwrap()
});

fn split_row(row: &str) -> Vec<String> {
    let mut cells: Vec<&str> = row.split('|').collect();
    if cells.first().is_some_and(|c| c.trim().is_empty()) {
        cells.remove(0);
    }
    if cells.last().is_some_and(|c| c.trim().is_empty()) {
        cells.pop();
    }
    cells.iter().map(|c| c.trim().to_string()).collect()
}

/// Extract every markdown pipe-table in `content`, in document order.
///
/// The matched region needs a trailing newline on its last body row, so a
/// synthetic one is appended to the input before matching (mirroring how
/// the source's regex is always run against content that ends in `\n`).
pub fn extract(content: &str) -> Vec<Grid> {
    let padded = if content.ends_with('\n') {
        content.to_string()
    } else {
        format!("{content}\n")
    };

    let mut grids = Vec::new();
    for captures in TABLE_PATTERN.captures_iter(&padded) {
        let header_row = captures.get(1).unwrap().as_str().trim();
        let body_rows = captures.get(2).unwrap().as_str().trim();

        let mut rows: Vec<Vec<String>> = Vec::new();
        rows.push(split_row(header_row));
        for line in body_rows.lines() {
            if !line.contains('|') {
                continue;
            }
            rows.push(split_row(line));
        }

        // The separator row (all dashes/colons/spaces) never reaches here
        // since it's consumed by the regex itself, not captured in group 2
        // beyond its role as a delimiter; nothing further to strip.

        if !rows.is_empty() {
            grids.push(Grid::new(rows));
        }
    }
    grids
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_simple_table() {
        let content = "| A | B |\n|---|---|\n| 1 | 2 |\n";
        let grids = extract(content);
        assert_eq!(grids.len(), 1);
        let grid = &grids[0];
        assert_eq!(grid.get(0, 0), Some("A"));
        assert_eq!(grid.get(1, 1), Some("2"));
    }

    #[test]
    fn tolerates_missing_outer_pipes() {
        let content = "A | B\n---|---\n1 | 2\n";
        let grids = extract(content);
        assert_eq!(grids.len(), 1);
        assert_eq!(grids[0].get(0, 1), Some("B"));
    }

    #[test]
    fn multiple_body_rows_are_all_captured() {
        let content = "| A | B |\n|---|---|\n| 1 | 2 |\n| 3 | 4 |\n";
        let grids = extract(content);
        assert_eq!(grids[0].row_count(), 3);
    }

    #[test]
    fn no_table_present_yields_empty() {
        assert!(extract("just some text, no tables here").is_empty());
    }

    #[test]
    fn appends_missing_trailing_newline() {
        let content = "| A | B |\n|---|---|\n| 1 | 2 |";
        let grids = extract(content);
        assert_eq!(grids.len(), 1);
    }
}
