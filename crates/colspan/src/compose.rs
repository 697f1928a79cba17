//! Per-line composition: padding, alignment, borders, and span merging.

use crate::resolve::ResolvedWidths;
use crate::types::{Align, Column, Row};
use crate::util::display_width;

/// One emitted output line plus its merge eligibility.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct RenderedLine {
    pub text: String,
    pub span: bool,
}

/// Compose one rasterized sub-row into a single output line.
///
/// Each cell is padded to its column's content width, re-flowed for
/// right/center alignment (wrap mode only), framed with border glyphs,
/// and wrapped in its left/right padding. Trailing spaces are stripped
/// from the finished line.
pub(crate) fn compose_line(
    cells: &[String],
    row: &Row,
    widths: &ResolvedWidths,
    wrap: bool,
) -> String {
    let mut out = String::new();

    for (c, cell) in cells.iter().enumerate() {
        let Some(col) = row.columns.get(c) else { break };
        let width = widths.get(c).unwrap_or(0);
        let content_width = col.content_width(width);

        let mut text = cell.clone();
        let cell_width = display_width(&text);
        if cell_width < content_width {
            text.push_str(&" ".repeat(content_width - cell_width));
        }

        if wrap && col.align != Align::Left {
            text = col.align.apply(&text, content_width);
            let aligned_width = display_width(&text);
            if aligned_width < content_width {
                text.push_str(&" ".repeat(content_width - aligned_width));
            }
        }

        if col.padding.left > 0 {
            out.push_str(&" ".repeat(col.padding.left));
        }
        out.push_str(border_glyph(col, &text, "| "));
        out.push_str(&text);
        out.push_str(border_glyph(col, &text, " |"));
        if col.padding.right > 0 {
            out.push_str(&" ".repeat(col.padding.right));
        }
    }

    out.trim_end_matches(' ').to_string()
}

/// Pick the border text for one side of a cell: the glyph for content
/// lines, two spaces for blank lines, nothing for rule lines or
/// borderless columns.
fn border_glyph<'a>(col: &Column, text: &str, glyph: &'a str) -> &'a str {
    if !col.border {
        return "";
    }
    if is_rule_line(text) {
        return "";
    }
    if text.trim().is_empty() {
        return "  ";
    }
    glyph
}

/// A horizontal border rule: a corner character, a run of dashes, and a
/// closing corner, as produced by the rasterizer.
fn is_rule_line(text: &str) -> bool {
    let bytes = text.trim().as_bytes();
    bytes.len() >= 3
        && (bytes[0] == b'.' || bytes[0] == b'\'')
        && (bytes[bytes.len() - 1] == b'.' || bytes[bytes.len() - 1] == b'\'')
        && bytes[1..bytes.len() - 1].iter().all(|&b| b == b'-')
}

/// Fold `candidate` (a row's first composed line) into the output list.
///
/// If the last emitted line is span-eligible the candidate may be merged
/// onto it: unconditionally when wrapping is disabled, or when the
/// candidate's leading spaces reach past the previous line's text when
/// wrapping is enabled. A merge replaces the previous line; otherwise the
/// candidate is appended as a new line. `span` is the current row's flag
/// and is carried on whichever line ends up last.
pub(crate) fn merge_span(lines: &mut Vec<RenderedLine>, candidate: String, span: bool, wrap: bool) {
    let merged = match lines.last() {
        Some(prev) if prev.span => {
            if !wrap {
                Some(format!("{}{}", prev.text, candidate))
            } else {
                let leading = candidate.chars().take_while(|&ch| ch == ' ').count();
                let target = prev.text.trim_end();
                let target_width = display_width(target);
                if leading >= target_width {
                    Some(format!(
                        "{}{}{}",
                        target,
                        " ".repeat(leading - target_width),
                        candidate.trim_start()
                    ))
                } else {
                    None
                }
            }
        }
        _ => None,
    };

    match merged {
        Some(text) => {
            lines.pop();
            lines.push(RenderedLine { text, span });
        }
        None => lines.push(RenderedLine {
            text: candidate,
            span,
        }),
    }
}
