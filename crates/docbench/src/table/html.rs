//! HTML `<table>` extraction (§4.6), via `scraper`.

use once_cell::sync::Lazy;
use scraper::{Html, Selector};

use super::Grid;

static TABLE_SEL: Lazy<Selector> = Lazy::new(|| Selector::parse("table").unwrap());
static ROW_SEL: Lazy<Selector> = Lazy::new(|| Selector::parse("tr").unwrap());
static CELL_SEL: Lazy<Selector> = Lazy::new(|| Selector::parse("th, td").unwrap());

/// Extract every `<table>` in `content`, in document order. Rows are taken
/// in document order; `<th>` and `<td>` cells within a row are both
/// collected, preserving their relative order.
pub fn extract(content: &str) -> Vec<Grid> {
    let document = Html::parse_fragment(content);
    let mut grids = Vec::new();

    for table in document.select(&TABLE_SEL) {
        let mut rows = Vec::new();
        for row in table.select(&ROW_SEL) {
            let cells: Vec<String> = row
                .select(&CELL_SEL)
                .map(|cell| cell.text().collect::<String>().trim().to_string())
                .collect();
            rows.push(cells);
        }
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
    fn extracts_simple_html_table() {
        let content = "<table><tr><th>A</th><th>B</th></tr><tr><td>1</td><td>2</td></tr></table>";
        let grids = extract(content);
        assert_eq!(grids.len(), 1);
        assert_eq!(grids[0].get(0, 0), Some("A"));
        assert_eq!(grids[0].get(1, 1), Some("2"));
    }

    #[test]
    fn trims_cell_whitespace() {
        let content = "<table><tr><td>  spaced  </td></tr></table>";
        let grids = extract(content);
        assert_eq!(grids[0].get(0, 0), Some("spaced"));
    }

    #[test]
    fn no_table_yields_empty() {
        assert!(extract("<p>no tables here</p>").is_empty());
    }

    #[test]
    fn multiple_tables_are_all_collected() {
        let content = "<table><tr><td>a</td></tr></table><table><tr><td>b</td></tr></table>";
        let grids = extract(content);
        assert_eq!(grids.len(), 2);
    }
}
