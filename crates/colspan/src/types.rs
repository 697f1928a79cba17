//! Core types for row and column configuration.
//!
//! This module defines the data structures used to describe one row of
//! output: column text, per-side padding, alignment, and borders.

use serde::{Deserialize, Serialize};

use crate::util::{display_width, strip_ctrl};

/// Text alignment within a column.
///
/// Alignment is only applied when wrapping is enabled; without wrapping a
/// column renders its text as-is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    /// Left-align text (pad on the right).
    #[default]
    Left,
    /// Right-align text (pad on the left).
    Right,
    /// Center text (pad on both sides).
    Center,
}

impl Align {
    /// Re-flow `text` within `width` display columns.
    ///
    /// The text is trimmed and prefixed with enough spaces to push it to
    /// the right edge (`Right`) or the midpoint (`Center`, rounding the
    /// leading gap down). Text that already fills the width is returned
    /// trimmed but otherwise unchanged. `Left` is the identity.
    ///
    /// # Example
    ///
    /// ```rust
    /// use colspan::Align;
    ///
    /// assert_eq!(Align::Right.apply("abcd", 10), "      abcd");
    /// assert_eq!(Align::Center.apply("abcd", 10), "   abcd");
    /// ```
    pub fn apply(self, text: &str, width: usize) -> String {
        match self {
            Align::Left => text.to_string(),
            Align::Right => {
                let trimmed = text.trim();
                let text_width = display_width(trimmed);
                if text_width < width {
                    format!("{}{}", " ".repeat(width - text_width), trimmed)
                } else {
                    trimmed.to_string()
                }
            }
            Align::Center => {
                let trimmed = text.trim();
                let text_width = display_width(trimmed);
                if text_width < width {
                    format!("{}{}", " ".repeat((width - text_width) / 2), trimmed)
                } else {
                    trimmed.to_string()
                }
            }
        }
    }
}

/// Per-side padding for a column, in display columns.
///
/// Serializes as the classic `[top, right, bottom, left]` array.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "PaddingRaw", into = "PaddingRaw")]
pub struct Padding {
    /// Blank lines above the content.
    pub top: usize,
    /// Spaces after the content.
    pub right: usize,
    /// Blank lines below the content.
    pub bottom: usize,
    /// Spaces before the content.
    pub left: usize,
}

#[derive(Serialize, Deserialize)]
struct PaddingRaw(usize, usize, usize, usize);

impl From<PaddingRaw> for Padding {
    fn from(PaddingRaw(top, right, bottom, left): PaddingRaw) -> Self {
        Padding {
            top,
            right,
            bottom,
            left,
        }
    }
}

impl From<Padding> for PaddingRaw {
    fn from(padding: Padding) -> Self {
        PaddingRaw(padding.top, padding.right, padding.bottom, padding.left)
    }
}

impl From<[usize; 4]> for Padding {
    fn from([top, right, bottom, left]: [usize; 4]) -> Self {
        Padding {
            top,
            right,
            bottom,
            left,
        }
    }
}

impl Padding {
    /// Create padding from explicit `top`, `right`, `bottom`, `left` values.
    pub fn new(top: usize, right: usize, bottom: usize, left: usize) -> Self {
        Padding {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Derive left/right padding from the leading and trailing whitespace
    /// of `text`, with control sequences ignored. Top and bottom are zero.
    ///
    /// # Example
    ///
    /// ```rust
    /// use colspan::Padding;
    ///
    /// let padding = Padding::measure("  hello ");
    /// assert_eq!(padding.left, 2);
    /// assert_eq!(padding.right, 1);
    /// ```
    pub fn measure(text: &str) -> Self {
        let plain = strip_ctrl(text);
        Padding {
            top: 0,
            right: plain.chars().rev().take_while(|c| c.is_whitespace()).count(),
            bottom: 0,
            left: plain.chars().take_while(|c| c.is_whitespace()).count(),
        }
    }

    /// Horizontal padding total (left + right).
    pub fn horizontal(&self) -> usize {
        self.left + self.right
    }
}

/// Configuration for a single cell of output.
///
/// A `Column` created via [`Column::new`] has zero padding; conversion
/// from a plain string derives left/right padding from the string's own
/// whitespace instead:
///
/// ```rust
/// use colspan::Column;
///
/// let col = Column::from(" hello ");
/// assert_eq!(col.padding.left, 1);
/// assert_eq!(col.padding.right, 1);
///
/// let col = Column::new(" hello ");
/// assert_eq!(col.padding.horizontal(), 0);
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Column {
    /// Cell content. May contain embedded newlines.
    pub text: String,
    /// Fixed rendered width (content + padding + border). When `None`,
    /// the width allocator computes one.
    #[serde(default)]
    pub width: Option<usize>,
    /// Text alignment, honored when wrapping is enabled.
    #[serde(default)]
    pub align: Align,
    /// Per-side padding.
    #[serde(default)]
    pub padding: Padding,
    /// Draw a one-character box border around the wrapped content.
    #[serde(default)]
    pub border: bool,
}

impl Column {
    /// Create a column with the given text and zero padding.
    pub fn new(text: impl Into<String>) -> Self {
        Column {
            text: text.into(),
            ..Default::default()
        }
    }

    /// Set a fixed rendered width.
    pub fn width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }

    /// Set the text alignment.
    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    /// Set alignment to right (shorthand for `.align(Align::Right)`).
    pub fn right(self) -> Self {
        self.align(Align::Right)
    }

    /// Set alignment to center (shorthand for `.align(Align::Center)`).
    pub fn center(self) -> Self {
        self.align(Align::Center)
    }

    /// Set the padding.
    pub fn padding(mut self, padding: impl Into<Padding>) -> Self {
        self.padding = padding.into();
        self
    }

    /// Draw a border around this column.
    pub fn border(mut self) -> Self {
        self.border = true;
        self
    }

    /// Width consumed by padding and border glyphs, unavailable to text.
    pub(crate) fn inset(&self) -> usize {
        self.padding.horizontal() + if self.border { 4 } else { 0 }
    }

    /// Space available for text inside a column rendered at `width`.
    pub(crate) fn content_width(&self, width: usize) -> usize {
        width.saturating_sub(self.inset())
    }
}

impl From<&str> for Column {
    fn from(text: &str) -> Self {
        Column {
            padding: Padding::measure(text),
            text: text.to_string(),
            ..Default::default()
        }
    }
}

impl From<String> for Column {
    fn from(text: String) -> Self {
        Column {
            padding: Padding::measure(&text),
            text,
            ..Default::default()
        }
    }
}

/// An ordered set of columns rendered together.
///
/// Rows are created by [`Ui::div`](crate::Ui::div) and
/// [`Ui::span`](crate::Ui::span); the mutable reference those return lets
/// callers adjust column metadata before rendering.
#[derive(Clone, Debug, Default)]
pub struct Row {
    /// Columns in left-to-right order.
    pub columns: Vec<Column>,
    /// When set, the next row's first rendered line may be appended onto
    /// this row's last rendered line.
    pub span: bool,
}

impl Row {
    /// Create a row from columns, with the span flag cleared.
    pub fn new(columns: Vec<Column>) -> Self {
        Row {
            columns,
            span: false,
        }
    }
}
