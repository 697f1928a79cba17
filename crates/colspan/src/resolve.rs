//! Width resolution for a row's columns.
//!
//! Resolution produces an immutable per-render plan; caller-supplied
//! [`Column`] records are never annotated or mutated.

use crate::types::Column;
use crate::util::display_width;

/// Resolved widths for all columns in a row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedWidths {
    /// Width for each column in display columns, insertion order.
    pub widths: Vec<usize>,
}

impl ResolvedWidths {
    /// Get the width of a specific column.
    pub fn get(&self, index: usize) -> Option<usize> {
        self.widths.get(index).copied()
    }

    /// Total width of all columns.
    pub fn total(&self) -> usize {
        self.widths.iter().sum()
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.widths.len()
    }

    /// Check if there are no columns.
    pub fn is_empty(&self) -> bool {
        self.widths.is_empty()
    }
}

/// Decide each column's rendered width for a row.
///
/// With wrapping disabled, a column is as wide as its explicit width or,
/// failing that, the display width of its raw text.
///
/// With wrapping enabled, explicit widths consume the total first and the
/// remainder is split evenly (integer floor) among the rest. Every
/// auto-sized column is floored at its minimum width — one content
/// character plus horizontal padding plus border glyphs — so a row whose
/// minimums exceed `total_width` renders wider than requested rather than
/// producing unusable zero-width columns.
///
/// # Example
///
/// ```rust
/// use colspan::{resolve_widths, Column};
///
/// let row = vec![Column::new("label").width(12), Column::new("description")];
/// let widths = resolve_widths(&row, 40, true);
/// assert_eq!(widths.widths, vec![12, 28]);
/// ```
pub fn resolve_widths(columns: &[Column], total_width: usize, wrap: bool) -> ResolvedWidths {
    if !wrap {
        return ResolvedWidths {
            widths: columns
                .iter()
                .map(|col| col.width.unwrap_or_else(|| display_width(&col.text)))
                .collect(),
        };
    }

    let unset = columns.iter().filter(|col| col.width.is_none()).count();
    let remaining = columns.iter().fold(total_width as isize, |acc, col| {
        acc - col.width.unwrap_or(0) as isize
    });
    // signed floor division keeps the minimum-width clamp meaningful when
    // explicit widths already exceed the total
    let even_share = if unset > 0 {
        remaining.div_euclid(unset as isize)
    } else {
        0
    };

    ResolvedWidths {
        widths: columns
            .iter()
            .map(|col| match col.width {
                Some(width) => width,
                None => even_share.max(min_width(col) as isize) as usize,
            })
            .collect(),
    }
}

/// Minimum usable width of a column: one content character plus its
/// horizontal padding, plus four for the border glyphs when bordered.
fn min_width(col: &Column) -> usize {
    1 + col.inset()
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn unset_columns_never_exceed_total(
            num_cols in 1usize..6,
            total_width in 1usize..200,
        ) {
            let row: Vec<Column> = (0..num_cols).map(|_| Column::new("x")).collect();
            let widths = resolve_widths(&row, total_width, true);

            if total_width >= num_cols {
                prop_assert!(widths.total() <= total_width);
                // floor division loses less than one column's worth
                prop_assert!(total_width - widths.total() < num_cols);
            } else {
                // minimum floor of one character per column wins
                prop_assert_eq!(widths.total(), num_cols);
            }
        }

        #[test]
        fn no_column_below_minimum(
            num_cols in 1usize..5,
            pad in 0usize..4,
            bordered in prop::bool::ANY,
            total_width in 1usize..100,
        ) {
            let row: Vec<Column> = (0..num_cols)
                .map(|_| {
                    let col = Column::new("x").padding([0, pad, 0, pad]);
                    if bordered { col.border() } else { col }
                })
                .collect();
            let widths = resolve_widths(&row, total_width, true);

            let minimum = 1 + 2 * pad + if bordered { 4 } else { 0 };
            for width in &widths.widths {
                prop_assert!(*width >= minimum);
            }
        }

        #[test]
        fn explicit_widths_are_verbatim(
            explicit in 1usize..40,
            total_width in 1usize..100,
        ) {
            let row = vec![Column::new("a").width(explicit), Column::new("b")];
            let widths = resolve_widths(&row, total_width, true);
            prop_assert_eq!(widths.get(0), Some(explicit));
        }
    }
}
