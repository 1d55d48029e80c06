//! Table extraction: a `Grid` is the common currency between the markdown
//! and HTML parsers and the table-cell matcher.

pub mod html;
pub mod markdown;

/// A rectangular 2-D array of trimmed cell strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    pub rows: Vec<Vec<String>>,
}

impl Grid {
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        let width = rows.iter().map(|r| r.len()).max().unwrap_or(0);
        let padded = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, String::new());
                row
            })
            .collect();
        Grid { rows: padded }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn col_count(&self) -> usize {
        self.rows.first().map_or(0, |r| r.len())
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row)?.get(col).map(|s| s.as_str())
    }

    pub fn is_rectangular(&self) -> bool {
        let width = self.col_count();
        self.rows.iter().all(|r| r.len() == width)
    }
}

/// Extract every grid found in `content`, markdown tables first, then HTML
/// tables, in document order within each kind.
pub fn extract_all(content: &str) -> Vec<Grid> {
    let mut grids = markdown::extract(content);
    grids.extend(html::extract(content));
    grids
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_pads_short_rows() {
        let grid = Grid::new(vec![vec!["a".to_string(), "b".to_string()], vec!["c".to_string()]]);
        assert!(grid.is_rectangular());
        assert_eq!(grid.get(1, 1), Some(""));
    }
}
