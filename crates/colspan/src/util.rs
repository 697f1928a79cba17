//! Text measurement and wrapping services.
//!
//! Everything here is aware of terminal control sequences: escape codes
//! contribute zero display width, survive wrapping intact, and are
//! removed by [`strip_ctrl`] before whitespace is inspected.

use std::borrow::Cow;

use console::AnsiCodeIterator;
use unicode_width::UnicodeWidthChar;

/// Visual column count of `text`, ignoring control sequences.
///
/// # Example
///
/// ```rust
/// use colspan::display_width;
///
/// assert_eq!(display_width("hello"), 5);
/// assert_eq!(display_width("\x1b[31mhello\x1b[0m"), 5);
/// ```
pub fn display_width(text: &str) -> usize {
    console::measure_text_width(text)
}

/// Remove all terminal control sequences from `text`.
pub fn strip_ctrl(text: &str) -> Cow<'_, str> {
    console::strip_ansi_codes(text)
}

/// Hard-wrap `text` to `width` display columns, returning the wrapped
/// lines joined with `\n`.
///
/// Wrapping is greedy at word boundaries; a word wider than `width` is
/// broken mid-word so that no produced line exceeds the limit. Embedded
/// newlines are preserved and each segment is wrapped independently.
/// Control sequences are carried along without counting toward width.
/// A width of zero is treated as one.
///
/// # Example
///
/// ```rust
/// use colspan::wrap;
///
/// assert_eq!(wrap("hello world foo bar", 11), "hello world\nfoo bar");
/// assert_eq!(wrap("unbreakable", 6), "unbrea\nkable");
/// ```
pub fn wrap(text: &str, width: usize) -> String {
    let width = width.max(1);
    text.split('\n')
        .map(|line| wrap_line(line, width))
        .collect::<Vec<_>>()
        .join("\n")
}

fn wrap_line(line: &str, width: usize) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in line.split(' ') {
        let word_width = display_width(word);
        let pieces = if word_width > width {
            break_word(word, width)
        } else {
            vec![(word.to_string(), word_width)]
        };

        for (i, (piece, piece_width)) in pieces.into_iter().enumerate() {
            let separator = usize::from(!current.is_empty());
            if i == 0 && current_width + separator + piece_width <= width {
                if separator == 1 {
                    current.push(' ');
                }
                current.push_str(&piece);
                current_width += separator + piece_width;
            } else {
                if !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                }
                current = piece;
                current_width = piece_width;
            }
        }
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines.join("\n")
}

/// Break a single over-long word into chunks no wider than `width`.
/// Control sequences attach to the chunk in progress at zero width.
fn break_word(word: &str, width: usize) -> Vec<(String, usize)> {
    let mut chunks = Vec::new();
    let mut chunk = String::new();
    let mut chunk_width = 0;

    for (slice, is_ansi) in AnsiCodeIterator::new(word) {
        if is_ansi {
            chunk.push_str(slice);
            continue;
        }
        for ch in slice.chars() {
            let ch_width = ch.width().unwrap_or(0);
            if chunk_width + ch_width > width && chunk_width > 0 {
                chunks.push((std::mem::take(&mut chunk), chunk_width));
                chunk_width = 0;
            }
            chunk.push(ch);
            chunk_width += ch_width;
        }
    }

    if !chunk.is_empty() {
        chunks.push((chunk, chunk_width));
    }
    chunks
}
