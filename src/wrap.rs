//! # Column Wrapper
//!
//! Songs rarely fit a terminal vertically but usually fit twice horizontally.
//! When a rendered block is taller than the terminal, it is cut into a left
//! and a right column printed side by side:
//!
//! ```text
//! G     D            |  C        G
//! Hello world        |  Goodbye now
//! ```
//!
//! The cut is made at the first blank source line past the middle of the
//! block. Without such a line everything stays in the left column.

use crate::render::{Highlight, RenderedBlock};

/// Width and height of the output terminal in character cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalSize {
    pub width: u16,
    pub height: u16,
}

impl Default for TerminalSize {
    fn default() -> Self {
        Self {
            width: 80,
            height: 24,
        }
    }
}

impl TerminalSize {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Query the attached terminal, falling back to 80x24.
    pub fn detect() -> Self {
        match crossterm::terminal::size() {
            Ok((width, height)) => Self { width, height },
            Err(e) => {
                log::debug!("Terminal size unavailable ({}), assuming 80x24", e);
                Self::default()
            }
        }
    }

    /// Width of one of the two columns
    pub fn column_width(&self) -> usize {
        self.width as usize / 2
    }
}

/// Whether `line_count` lines plus `margin` overflow the terminal
pub fn needs_wrap(line_count: usize, margin: usize, size: TerminalSize) -> bool {
    line_count + margin > size.height as usize
}

/// Index of the first line of the right column: the first blank offset
/// strictly past half the block, or the end of the block.
pub fn split_index(block: &RenderedBlock) -> usize {
    let count = block.line_count();
    block
        .blank_offsets
        .iter()
        .copied()
        .find(|&offset| offset * 2 > count)
        .unwrap_or(count)
}

/// Lay `block` out in two columns if it overflows the terminal, otherwise
/// return its lines unchanged.
///
/// Left cells are padded to half the terminal width. A left cell carrying
/// `highlight` is padded further by the escape lengths so the separator stays
/// in the same visible column.
pub fn wrap_columns(
    block: &RenderedBlock,
    size: TerminalSize,
    margin: usize,
    highlight: &Highlight,
) -> Vec<String> {
    if !needs_wrap(block.line_count(), margin, size) {
        return block.lines.clone();
    }

    let index = split_index(block);
    log::debug!(
        "Wrapping {} lines into two columns at line {}",
        block.line_count(),
        index
    );

    let (left, right) = block.lines.split_at(index);
    let rows = left.len().max(right.len());
    let column_width = size.column_width();

    (0..rows)
        .map(|i| {
            let left = left.get(i).map(String::as_str).unwrap_or("");
            let right = right.get(i).map(String::as_str).unwrap_or("");
            let width = if highlight.marks(left) {
                column_width + highlight.escape_len()
            } else {
                column_width
            };
            format!("{:<width$}|  {}", left, right, width = width)
        })
        .collect()
}
