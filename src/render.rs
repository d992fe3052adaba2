//! # Renderer
//!
//! Runs the line splitter over a whole body and collects the printed lines.
//!
//! Besides the lines themselves the renderer remembers where the blank lines
//! of the source ended up in the output. Those offsets are the only places the
//! column wrapper is allowed to break a song into two columns, so a verse is
//! never cut in half.

use crate::splitter::split_line;
use crate::transpose::ChordMode;

/// Escape sequences wrapped around highlighted text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Highlight {
    pub start: String,
    pub end: String,
}

impl Highlight {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    /// No highlighting at all
    pub fn none() -> Self {
        Self::default()
    }

    pub fn is_none(&self) -> bool {
        self.start.is_empty() && self.end.is_empty()
    }

    pub fn apply(&self, text: &str) -> String {
        format!("{}{}{}", self.start, text, self.end)
    }

    /// Bytes the escapes add to a line without adding visible columns
    pub fn escape_len(&self) -> usize {
        self.start.len() + self.end.len()
    }

    /// Whether `line` carries this highlight
    pub fn marks(&self, line: &str) -> bool {
        !self.start.is_empty() && line.contains(&self.start)
    }
}

/// Highlights used for terminal output
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Style {
    /// Chord lines above lyrics
    pub chord: Highlight,
    /// Progression cells of the sheet table
    pub progression: Highlight,
}

impl Style {
    pub fn plain() -> Self {
        Self::default()
    }
}

/// What to render and how
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderOptions {
    pub chords: ChordMode,
    /// Use the configured escape sequences
    pub color: bool,
    /// Drop chord lines, print lyrics only
    pub lyrics_only: bool,
    /// Sheet mode: print the section table without the lyrics under it
    pub headers_only: bool,
}

/// Lines ready to print, plus the offsets where source blank lines landed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedBlock {
    pub lines: Vec<String>,
    pub blank_offsets: Vec<usize>,
}

impl RenderedBlock {
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// All lines joined, each terminated by a newline
    pub fn to_text(&self) -> String {
        let mut text = String::new();
        for line in &self.lines {
            text.push_str(line);
            text.push('\n');
        }
        text
    }
}

/// Accumulates rendered lines one source line at a time
pub struct Renderer<'a> {
    highlight: &'a Highlight,
    lyrics_only: bool,
    block: RenderedBlock,
}

impl<'a> Renderer<'a> {
    pub fn new(highlight: &'a Highlight, lyrics_only: bool) -> Self {
        Self {
            highlight,
            lyrics_only,
            block: RenderedBlock::default(),
        }
    }

    pub fn push_line(&mut self, line: &str) {
        if line.is_empty() {
            self.block.blank_offsets.push(self.block.lines.len());
        }

        let pair = split_line(line);
        if pair.shows_chords(self.lyrics_only) {
            self.block.lines.push(self.highlight.apply(&pair.chords));
        }
        if pair.shows_lyrics() {
            self.block.lines.push(pair.lyrics);
        }
    }

    pub fn finish(self) -> RenderedBlock {
        self.block
    }
}

/// Render every line of `text`.
///
/// # Example
/// ```rust
/// use lyr::{render_lines, Highlight};
///
/// let block = render_lines("[Am]Stay [F]here\n\nla la", &Highlight::none(), false);
/// assert_eq!(block.lines[1], "Stay here");
/// assert_eq!(block.blank_offsets, vec![2]);
/// ```
pub fn render_lines(text: &str, highlight: &Highlight, lyrics_only: bool) -> RenderedBlock {
    let mut renderer = Renderer::new(highlight, lyrics_only);
    for line in text.lines() {
        renderer.push_line(line);
    }
    renderer.finish()
}
