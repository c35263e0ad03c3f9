//! Bounded plain-text table for console output.

use crate::storage::ColumnStore;

/// Column separator
const SEP: &str = " | ";

/// Render `store` as an aligned table
///
/// At most `table_max_row` rows and `table_max_col_in_console` columns are
/// shown; hidden rows are summarized in a trailing line and hidden columns by
/// a `...` column. Missing values print as `NaN`.
pub fn render(store: &ColumnStore) -> String {
    let config = store.config();
    let (rows, cols) = store.shape();
    let shown_rows = rows.min(config.table_max_row);
    let shown_cols = cols.min(config.table_max_col_in_console);
    let truncated_cols = shown_cols < cols;

    // One grid line per displayed row, the header first
    let mut grid: Vec<Vec<String>> = Vec::with_capacity(shown_rows + 1);
    let mut header = vec![String::new()];
    header.extend(store.column_names().iter().take(shown_cols).cloned());
    if truncated_cols {
        header.push("...".to_string());
    }
    grid.push(header);

    let labels = store.index().labels();
    for r in 0..shown_rows {
        let mut line = vec![labels[r].to_string()];
        for column in store.columns().iter().take(shown_cols) {
            line.push(column.scalar_at(r).to_string());
        }
        if truncated_cols {
            line.push("...".to_string());
        }
        grid.push(line);
    }

    let width = grid[0].len();
    let widths: Vec<usize> = (0..width)
        .map(|c| grid.iter().map(|line| line[c].chars().count()).max().unwrap_or(0))
        .collect();

    let mut out = String::new();
    for (i, line) in grid.iter().enumerate() {
        let cells: Vec<String> = line
            .iter()
            .zip(&widths)
            .map(|(cell, w)| format!("{:>w$}", cell, w = *w))
            .collect();
        out.push_str(cells.join(SEP).trim_end());
        out.push('\n');
        if i == 0 {
            let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
            out.push_str(&rule.join("-+-"));
            out.push('\n');
        }
    }
    if shown_rows < rows {
        out.push_str(&format!("... {} more row(s)\n", rows - shown_rows));
    }
    out.push_str(&format!("[{} rows x {} columns]", rows, cols));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::scalar::Scalar;
    use crate::storage::FrameOptions;

    #[test]
    fn test_render_small_frame() {
        let store = ColumnStore::from_rows(
            vec![vec![Scalar::Int(1), Scalar::from("a")], vec![Scalar::Null, Scalar::from("bb")]],
            &FrameOptions::new().columns(vec!["n", "s"]),
        )
        .unwrap();
        let text = render(&store);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "  |   n |  s");
        assert_eq!(lines[2], "0 |   1 |  a");
        assert_eq!(lines[3], "1 | NaN | bb");
        assert_eq!(lines[4], "[2 rows x 2 columns]");
    }

    #[test]
    fn test_render_is_bounded() {
        let config = Config {
            table_max_row: 2,
            table_max_col_in_console: 1,
            ..Config::default()
        };
        let rows = (0..5).map(|i| vec![Scalar::Int(i), Scalar::Int(i * 2)]).collect();
        let store = ColumnStore::from_rows(rows, &FrameOptions::new().config(config)).unwrap();
        let text = render(&store);
        assert!(text.contains("... 3 more row(s)"));
        assert!(text.lines().next().unwrap().ends_with("..."));
        assert_eq!(text.lines().count(), 6);
    }
}
