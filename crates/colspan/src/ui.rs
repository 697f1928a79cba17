//! The row buffer and rendering entry point.

use std::fmt;

use crate::compose::{compose_line, merge_span, RenderedLine};
use crate::raster::rasterize;
use crate::resolve::resolve_widths;
use crate::shorthand;
use crate::types::{Column, Row};

/// Configuration for a [`Ui`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UiOptions {
    /// Total rendered width of a row, in display columns.
    pub width: usize,
    /// Wrap column text to its allocated width. When disabled, text is
    /// split only on embedded newlines and alignment is not applied.
    pub wrap: bool,
}

impl Default for UiOptions {
    fn default() -> Self {
        UiOptions {
            width: detect_width().unwrap_or(80),
            wrap: true,
        }
    }
}

impl UiOptions {
    /// Set the total width.
    pub fn width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Enable or disable wrapping.
    pub fn wrap(mut self, wrap: bool) -> Self {
        self.wrap = wrap;
        self
    }
}

fn detect_width() -> Option<usize> {
    terminal_size::terminal_size().map(|(w, _)| w.0 as usize)
}

/// The column set of a single row, as produced by [`IntoColumns`].
pub enum ColumnSet {
    /// Explicit columns, pushed as one row.
    Columns(Vec<Column>),
    /// A bare string: either one plain column or, when it contains tabs
    /// or newlines and wrapping is enabled, layout shorthand.
    Text(String),
}

/// Conversion into the column set of a single row.
///
/// Implemented for strings (single column or layout shorthand),
/// [`Column`], tuples of column-convertible values, vectors, and arrays.
/// A one-element tuple keeps a tab- or newline-bearing string literal:
/// `ui.div(("a\tb",))` renders one column instead of invoking shorthand.
pub trait IntoColumns {
    /// Produce the row's column set.
    fn into_columns(self) -> ColumnSet;
}

impl IntoColumns for String {
    fn into_columns(self) -> ColumnSet {
        ColumnSet::Text(self)
    }
}

impl IntoColumns for &str {
    fn into_columns(self) -> ColumnSet {
        ColumnSet::Text(self.to_string())
    }
}

impl IntoColumns for Column {
    fn into_columns(self) -> ColumnSet {
        ColumnSet::Columns(vec![self])
    }
}

impl IntoColumns for () {
    fn into_columns(self) -> ColumnSet {
        ColumnSet::Columns(Vec::new())
    }
}

impl<C: Into<Column>> IntoColumns for Vec<C> {
    fn into_columns(self) -> ColumnSet {
        ColumnSet::Columns(self.into_iter().map(Into::into).collect())
    }
}

impl<C: Into<Column>, const N: usize> IntoColumns for [C; N] {
    fn into_columns(self) -> ColumnSet {
        ColumnSet::Columns(self.into_iter().map(Into::into).collect())
    }
}

macro_rules! impl_into_columns_for_tuple {
    ($($name:ident),+) => {
        impl<$($name: Into<Column>),+> IntoColumns for ($($name,)+) {
            fn into_columns(self) -> ColumnSet {
                #[allow(non_snake_case)]
                let ($($name,)+) = self;
                ColumnSet::Columns(vec![$($name.into()),+])
            }
        }
    };
}

impl_into_columns_for_tuple!(A);
impl_into_columns_for_tuple!(A, B);
impl_into_columns_for_tuple!(A, B, C);
impl_into_columns_for_tuple!(A, B, C, D);
impl_into_columns_for_tuple!(A, B, C, D, E);
impl_into_columns_for_tuple!(A, B, C, D, E, F);

/// An ordered buffer of rows rendered into fixed-width terminal output.
///
/// Rows are queued with [`div`](Ui::div) and [`span`](Ui::span) and
/// rendered by [`render`](Ui::render) (or the `Display` impl). Rendering
/// is a pure read over the buffer; it can be repeated and never mutates
/// the queued rows.
///
/// # Example
///
/// ```rust
/// use colspan::{Ui, UiOptions};
///
/// let mut ui = Ui::new(UiOptions { width: 20, wrap: true });
/// ui.div(("left", "right"));
/// assert_eq!(ui.render(), "left      right");
/// ```
///
/// Tab/newline shorthand builds labeled tables in one call:
///
/// ```rust
/// use colspan::{Ui, UiOptions};
///
/// let mut ui = Ui::new(UiOptions { width: 40, wrap: true });
/// ui.div("-h\t show help\n-v\t show version");
/// assert_eq!(ui.render(), "-h show help\n-v show version");
/// ```
#[derive(Clone, Debug, Default)]
pub struct Ui {
    opts: UiOptions,
    rows: Vec<Row>,
}

impl Ui {
    /// Create a `Ui` with the given options.
    pub fn new(opts: UiOptions) -> Self {
        Ui {
            opts,
            rows: Vec::new(),
        }
    }

    /// The configured options.
    pub fn options(&self) -> UiOptions {
        self.opts
    }

    /// The queued rows, in render order.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Queue a row of columns and return it for further adjustment.
    ///
    /// An empty column set queues one empty column (a blank output line).
    /// A single string containing a tab or newline is treated as layout
    /// shorthand when wrapping is enabled; shorthand may queue several
    /// rows, and the last one is returned.
    pub fn div(&mut self, cols: impl IntoColumns) -> &mut Row {
        match cols.into_columns() {
            ColumnSet::Text(text) => {
                if self.opts.wrap && (text.contains('\t') || text.contains('\n')) {
                    for columns in shorthand::parse(&text, self.opts.width) {
                        self.rows.push(Row::new(columns));
                    }
                } else {
                    self.rows.push(Row::new(vec![Column::from(text)]));
                }
            }
            ColumnSet::Columns(columns) => {
                let columns = if columns.is_empty() {
                    vec![Column::from("")]
                } else {
                    columns
                };
                self.rows.push(Row::new(columns));
            }
        }
        let last = self.rows.len() - 1;
        &mut self.rows[last]
    }

    /// Queue a row like [`div`](Ui::div), flagged so the next row's first
    /// rendered line may merge onto this row's last rendered line.
    pub fn span(&mut self, cols: impl IntoColumns) -> &mut Row {
        let row = self.div(cols);
        row.span = true;
        row
    }

    /// Clear all queued rows.
    pub fn reset_output(&mut self) {
        self.rows.clear();
    }

    /// Render every queued row into the final multi-line string.
    pub fn render(&self) -> String {
        let mut lines: Vec<RenderedLine> = Vec::new();

        for row in &self.rows {
            let widths = resolve_widths(&row.columns, self.opts.width, self.opts.wrap);
            let grid = rasterize(row, &widths, self.opts.wrap);
            for (r, cells) in grid.iter().enumerate() {
                let text = compose_line(cells, row, &widths, self.opts.wrap);
                if r == 0 {
                    merge_span(&mut lines, text, row.span, self.opts.wrap);
                } else {
                    lines.push(RenderedLine {
                        text,
                        span: row.span,
                    });
                }
            }
        }

        lines
            .into_iter()
            .map(|line| line.text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl fmt::Display for Ui {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Align, Padding};

    fn ui(width: usize, wrap: bool) -> Ui {
        Ui::new(UiOptions { width, wrap })
    }

    #[test]
    fn plain_strings_render_one_line() {
        let mut ui = ui(20, true);
        ui.div(("AA", "BB"));
        assert_eq!(ui.render(), "AA        BB");
    }

    #[test]
    fn empty_div_renders_blank_line() {
        let mut ui = ui(20, true);
        ui.div("before");
        ui.div(());
        ui.div("after");
        assert_eq!(ui.render(), "before\n\nafter");
    }

    #[test]
    fn long_text_wraps_to_width() {
        let mut ui = ui(12, true);
        ui.div("hello world foo bar");
        assert_eq!(ui.render(), "hello world\nfoo bar");
    }

    #[test]
    fn string_padding_derived_from_whitespace() {
        let mut ui = ui(20, false);
        ui.div((Column::new("AA"), Column::new("BB").padding([0, 0, 0, 1])));
        assert_eq!(ui.render(), "AA BB");
    }

    #[test]
    fn shorthand_triggers_on_tab() {
        let mut ui = ui(20, true);
        ui.div("Label:\tValue");
        assert_eq!(ui.rows()[0].columns[0].width, Some(6));
    }

    #[test]
    fn shorthand_queues_multiple_rows() {
        let mut ui = ui(40, true);
        ui.div("-h\t help\n-v\t version");
        assert_eq!(ui.rows().len(), 2);
        assert_eq!(ui.render(), "-h help\n-v version");
    }

    #[test]
    fn shorthand_skipped_without_wrap() {
        let mut ui = ui(20, false);
        ui.div("a\tb");
        assert_eq!(ui.rows().len(), 1);
        assert_eq!(ui.rows()[0].columns.len(), 1);
    }

    #[test]
    fn single_tuple_escapes_shorthand() {
        let mut ui = ui(20, true);
        ui.div(("a\nb",));
        assert_eq!(ui.rows().len(), 1);
        assert_eq!(ui.rows()[0].columns[0].text, "a\nb");
    }

    #[test]
    fn div_returns_row_for_adjustment() {
        let mut ui = ui(20, true);
        ui.div((Column::new("abcd"), Column::new("x").padding([0, 0, 0, 1])))
            .columns[0]
            .align = Align::Right;
        assert_eq!(ui.render(), "      abcd x");
    }

    #[test]
    fn span_merges_next_row_without_wrap() {
        let mut ui = ui(20, false);
        ui.span((Column::new("AA"), Column::new("BB").padding([0, 0, 0, 1])));
        ui.div(Column::new("CC"));
        assert_eq!(ui.render(), "AA BBCC");
    }

    #[test]
    fn span_merges_when_candidate_clears_previous_text() {
        let mut ui = ui(20, true);
        ui.span(Column::new("AA").width(10));
        ui.div(Column::new("BB").padding(Padding::new(0, 0, 0, 5)));
        assert_eq!(ui.render(), "AA   BB");
    }

    #[test]
    fn span_without_room_stays_on_own_line() {
        let mut ui = ui(20, true);
        ui.span(Column::new("AAAA").width(10));
        ui.div(Column::new("BB").padding([0, 0, 0, 1]));
        assert_eq!(ui.render(), "AAAA\n BB");
    }

    #[test]
    fn span_only_affects_adjacent_line() {
        let mut ui = ui(20, true);
        ui.span(Column::new("AA").width(10));
        ui.div(Column::new("BB").padding([0, 0, 0, 5]));
        ui.div(Column::new("CC").padding([0, 0, 0, 5]));
        assert_eq!(ui.render(), "AA   BB\n     CC");
    }

    #[test]
    fn reset_output_clears_rows() {
        let mut ui = ui(20, true);
        ui.div("hello");
        ui.reset_output();
        assert_eq!(ui.render(), "");
        assert!(ui.rows().is_empty());
    }

    #[test]
    fn render_is_repeatable() {
        let mut ui = ui(20, true);
        ui.div(("AA", "BB"));
        ui.span(Column::new("CC"));
        ui.div(Column::new("DD").padding([0, 0, 0, 10]));
        assert_eq!(ui.render(), ui.render());
    }

    #[test]
    fn display_matches_render() {
        let mut ui = ui(20, true);
        ui.div(("AA", "BB"));
        assert_eq!(ui.to_string(), ui.render());
    }

    #[test]
    fn no_rows_render_empty() {
        assert_eq!(ui(20, true).render(), "");
    }
}
