//! Tab/newline layout shorthand.
//!
//! A single string with tab-separated columns and newline-separated rows
//! is a compact alternative to explicit [`Column`] records. The first
//! column of every multi-column row is sized to the widest first cell,
//! capped at half the total width so a long label cannot crowd out the
//! second column.

use crate::types::{Column, Padding};
use crate::util::display_width;

/// Parse shorthand `input` into rows of columns.
///
/// Each cell's text is trimmed; its padding is re-derived from the
/// untrimmed cell so surrounding whitespace survives as padding instead
/// of content.
pub(crate) fn parse(input: &str, total_width: usize) -> Vec<Vec<Column>> {
    let rows: Vec<Vec<&str>> = input
        .split('\n')
        .map(|row| row.split('\t').collect())
        .collect();

    let mut left_column_width = 0;
    for cells in &rows {
        if cells.len() > 1 && display_width(cells[0]) > left_column_width {
            left_column_width = (total_width / 2).min(display_width(cells[0]));
        }
    }

    rows.iter()
        .map(|cells| {
            cells
                .iter()
                .enumerate()
                .map(|(i, cell)| {
                    let mut col = Column {
                        text: cell.trim().to_string(),
                        padding: Padding::measure(cell),
                        ..Default::default()
                    };
                    if i == 0 && cells.len() > 1 {
                        col.width = Some(left_column_width);
                    }
                    col
                })
                .collect()
        })
        .collect()
}
