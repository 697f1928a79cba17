//! Rasterization of a row into a grid of sub-lines.
//!
//! Each column is independently expanded into an ordered list of
//! sub-lines (wrapped text, border rules, padding lines), then the lists
//! are transposed: sub-row *r* holds the *r*-th sub-line of every column,
//! with empty strings backfilled so cell positions stay aligned with the
//! row's column metadata.

use crate::resolve::ResolvedWidths;
use crate::types::Row;
use crate::util::wrap;

/// Expand one row into its grid of per-column sub-lines.
///
/// The grid has one entry per output line the row will occupy; each entry
/// lists the cell text for every column populated at that sub-line index.
/// A sub-row may be shorter than the column count when trailing columns
/// have no content at that index.
pub(crate) fn rasterize(row: &Row, widths: &ResolvedWidths, wrap_text: bool) -> Vec<Vec<String>> {
    let mut grid: Vec<Vec<String>> = Vec::new();

    for (c, col) in row.columns.iter().enumerate() {
        let width = widths.get(c).unwrap_or(0);
        let content_width = col.content_width(width);

        let mut cell_lines: Vec<String> = if wrap_text {
            wrap(&col.text, content_width)
                .split('\n')
                .map(String::from)
                .collect()
        } else {
            col.text.split('\n').map(String::from).collect()
        };

        if col.border {
            let rule = "-".repeat(content_width + 2);
            cell_lines.insert(0, format!(".{}.", rule));
            cell_lines.push(format!("'{}'", rule));
        }

        for _ in 0..col.padding.top {
            cell_lines.insert(0, String::new());
        }
        for _ in 0..col.padding.bottom {
            cell_lines.push(String::new());
        }

        for (r, line) in cell_lines.into_iter().enumerate() {
            if grid.len() <= r {
                grid.push(Vec::new());
            }
            let sub_row = &mut grid[r];
            while sub_row.len() < c {
                sub_row.push(String::new());
            }
            sub_row.push(line);
        }
    }

    grid
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolve::resolve_widths;
    use crate::types::{Column, Row};

    fn raster(row: Row, total_width: usize, wrap: bool) -> Vec<Vec<String>> {
        let widths = resolve_widths(&row.columns, total_width, wrap);
        rasterize(&row, &widths, wrap)
    }

    #[test]
    fn plain_row_is_one_sub_row() {
        let grid = raster(Row::new(vec![Column::new("AA"), Column::new("BB")]), 20, true);
        assert_eq!(grid, vec![vec!["AA".to_string(), "BB".to_string()]]);
    }

    #[test]
    fn wrapping_produces_stacked_sub_lines() {
        let grid = raster(Row::new(vec![Column::new("one two three")]), 7, true);
        assert_eq!(
            grid,
            vec![
                vec!["one two".to_string()],
                vec!["three".to_string()],
            ]
        );
    }

    #[test]
    fn shorter_columns_backfill_with_empty() {
        let row = Row::new(vec![Column::new("a"), Column::new("one two three")]);
        let grid = raster(row, 14, true);
        // column 1 gets width 7 and wraps to two lines; column 0 has one
        assert_eq!(grid.len(), 2);
        assert_eq!(grid[0], vec!["a".to_string(), "one two".to_string()]);
        assert_eq!(grid[1], vec!["".to_string(), "three".to_string()]);
    }

    #[test]
    fn sub_row_may_be_shorter_than_column_count() {
        // the wrapping column comes first, so the second sub-row has no
        // cell for column 1 at all
        let row = Row::new(vec![Column::new("one two three"), Column::new("b")]);
        let grid = raster(row, 14, true);
        assert_eq!(grid[0], vec!["one two".to_string(), "b".to_string()]);
        assert_eq!(grid[1], vec!["three".to_string()]);
    }

    #[test]
    fn border_adds_rule_lines() {
        let row = Row::new(vec![Column::new("x").width(5).border()]);
        let grid = raster(row, 20, true);
        assert_eq!(
            grid,
            vec![
                vec![".---.".to_string()],
                vec!["x".to_string()],
                vec!["'---'".to_string()],
            ]
        );
    }

    #[test]
    fn vertical_padding_adds_blank_lines() {
        let row = Row::new(vec![Column::new("x").padding([2, 0, 1, 0])]);
        let grid = raster(row, 10, true);
        assert_eq!(
            grid,
            vec![
                vec!["".to_string()],
                vec!["".to_string()],
                vec!["x".to_string()],
                vec!["".to_string()],
            ]
        );
    }

    #[test]
    fn no_wrap_splits_on_embedded_newlines_only() {
        let row = Row::new(vec![Column::new("first line\nsecond")]);
        let grid = raster(row, 5, false);
        assert_eq!(
            grid,
            vec![
                vec!["first line".to_string()],
                vec!["second".to_string()],
            ]
        );
    }

    #[test]
    fn empty_text_occupies_one_line() {
        let grid = raster(Row::new(vec![Column::new("")]), 10, true);
        assert_eq!(grid, vec![vec!["".to_string()]]);
    }
}
