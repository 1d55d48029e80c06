//! Table-cell relation matcher (§4.6).

use crate::model::TableTest;
use crate::similarity::{ratio, threshold};
use crate::table::{extract_all, Grid};

fn first_nonempty_upward(grid: &Grid, row: usize, col: usize) -> Option<String> {
    (0..row).find_map(|i| {
        let cell = grid.get(i, col)?;
        if cell.trim().is_empty() {
            None
        } else {
            Some(cell.to_string())
        }
    })
}

fn first_nonempty_leftward(grid: &Grid, row: usize, col: usize) -> Option<String> {
    (0..col).find_map(|j| {
        let cell = grid.get(row, j)?;
        if cell.trim().is_empty() {
            None
        } else {
            Some(cell.to_string())
        }
    })
}

pub fn run(test: &TableTest, content: &str) -> (bool, String) {
    let th = threshold(test.common.max_diffs_u32(), test.cell.chars().count());
    let grids = extract_all(content);

    if grids.is_empty() {
        return (false, "no tables found".to_string());
    }

    let mut failed_reasons: Vec<String> = Vec::new();

    for grid in &grids {
        let rows = grid.row_count();
        let cols = grid.col_count();

        let mut matches = Vec::new();
        for row in 0..rows {
            for col in 0..cols {
                let cell = grid.get(row, col).unwrap_or("");
                if ratio(&test.cell, cell) >= th {
                    matches.push((row, col));
                }
            }
        }

        if matches.is_empty() {
            continue;
        }

        for (row, col) in matches {
            let mut reasons = Vec::new();
            let mut ok = true;

            if !test.up.is_empty() && row > 0 {
                let neighbor = grid.get(row - 1, col).unwrap_or("");
                let score = ratio(&test.up, neighbor);
                if score < th {
                    ok = false;
                    reasons.push(format!(
                        "cell above '{neighbor}' doesn't match expected '{}' (similarity: {score:.2})",
                        test.up
                    ));
                }
            }

            if !test.down.is_empty() && row + 1 < rows {
                let neighbor = grid.get(row + 1, col).unwrap_or("");
                let score = ratio(&test.down, neighbor);
                if score < th {
                    ok = false;
                    reasons.push(format!(
                        "cell below '{neighbor}' doesn't match expected '{}' (similarity: {score:.2})",
                        test.down
                    ));
                }
            }

            if !test.left.is_empty() && col > 0 {
                let neighbor = grid.get(row, col - 1).unwrap_or("");
                let score = ratio(&test.left, neighbor);
                if score < th {
                    ok = false;
                    reasons.push(format!(
                        "cell to the left '{neighbor}' doesn't match expected '{}' (similarity: {score:.2})",
                        test.left
                    ));
                }
            }

            if !test.right.is_empty() && col + 1 < cols {
                let neighbor = grid.get(row, col + 1).unwrap_or("");
                let score = ratio(&test.right, neighbor);
                if score < th {
                    ok = false;
                    reasons.push(format!(
                        "cell to the right '{neighbor}' doesn't match expected '{}' (similarity: {score:.2})",
                        test.right
                    ));
                }
            }

            if !test.top_heading.is_empty() && row > 0 {
                match first_nonempty_upward(grid, row, col) {
                    None => {
                        ok = false;
                        reasons.push(format!("no non-empty top heading found in column {col}"));
                    }
                    Some(heading) => {
                        let score = ratio(&test.top_heading, &heading);
                        if score < th {
                            ok = false;
                            reasons.push(format!(
                                "top heading '{heading}' doesn't match expected '{}' (similarity: {score:.2})",
                                test.top_heading
                            ));
                        }
                    }
                }
            }

            if !test.left_heading.is_empty() && col > 0 {
                match first_nonempty_leftward(grid, row, col) {
                    None => {
                        ok = false;
                        reasons.push(format!("no non-empty left heading found in row {row}"));
                    }
                    Some(heading) => {
                        let score = ratio(&test.left_heading, &heading);
                        if score < th {
                            ok = false;
                            reasons.push(format!(
                                "left heading '{heading}' doesn't match expected '{}' (similarity: {score:.2})",
                                test.left_heading
                            ));
                        }
                    }
                }
            }

            if ok {
                return (true, String::new());
            }
            failed_reasons.extend(reasons);
        }
    }

    if failed_reasons.is_empty() {
        (
            false,
            format!("no cell matching '{}' found in any table (threshold {th:.3})", test.cell),
        )
    } else {
        (
            false,
            format!(
                "found cells matching '{}' but relationships were not satisfied: {}",
                test.cell,
                failed_reasons.join("; ")
            ),
        )
    }
}
