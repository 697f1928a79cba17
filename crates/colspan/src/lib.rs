//! Column-based line layout for fixed-width terminal output.
//!
//! `colspan` renders rows of text columns into aligned, wrapped terminal
//! output: multi-column help text, labeled key/value listings, and small
//! tables, without a full terminal UI framework. Text is measured and
//! wrapped with control-sequence awareness, so styled (ANSI-colored)
//! content lines up correctly.
//!
//! # Example
//!
//! ```rust
//! use colspan::{Ui, UiOptions};
//!
//! let mut ui = Ui::new(UiOptions { width: 40, wrap: true });
//! ui.div("Usage: prog [options]");
//! ui.div(());
//! ui.div("-h, --help\t show this help\n-V, --version\t show the version");
//!
//! // the first column is sized to its widest cell ("-V, --version")
//! assert_eq!(
//!     ui.render(),
//!     "Usage: prog [options]\n\
//!      \n\
//!      -h, --help    show this help\n\
//!      -V, --version show the version"
//! );
//! ```
//!
//! # Rows and columns
//!
//! [`Ui::div`] queues one row. Column sets come from anything
//! [`IntoColumns`]: plain strings (padding derived from their own
//! whitespace), [`Column`] records with explicit width, padding,
//! alignment, and borders, or tuples mixing both:
//!
//! ```rust
//! use colspan::{Align, Column, Ui, UiOptions};
//!
//! let mut ui = Ui::new(UiOptions { width: 30, wrap: true });
//! ui.div((
//!     Column::new("total").width(10),
//!     Column::new("42").align(Align::Right),
//! ));
//! assert_eq!(ui.render(), format!("total{}42", " ".repeat(23)));
//! ```
//!
//! # Layout shorthand
//!
//! A single string containing tabs (column separators) and newlines (row
//! separators) builds a two-column table whose first column is sized to
//! its widest cell, capped at half the configured width.
//!
//! # Spans
//!
//! [`Ui::span`] queues a row whose rendered tail may absorb the first
//! line of the following row, letting a short label and its continuation
//! share one output line.
//!
//! # Width allocation
//!
//! Columns with an explicit width keep it; the remaining width is split
//! evenly among the rest, floored at one content character each (plus
//! padding and border overhead). When those minimums exceed the
//! configured width the row overflows rather than erroring; the engine
//! favors degraded output over failure and has no error type.

mod compose;
mod raster;
mod resolve;
mod shorthand;
mod types;
mod ui;
pub mod util;

pub use resolve::{resolve_widths, ResolvedWidths};
pub use types::{Align, Column, Padding, Row};
pub use ui::{ColumnSet, IntoColumns, Ui, UiOptions};
pub use util::{display_width, strip_ctrl, wrap};
