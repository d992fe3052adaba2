pub mod chord;
pub mod config;
pub mod document;
pub mod error;
pub mod render;
pub mod sheet;
pub mod splitter;
pub mod tex;
pub mod transpose;
pub mod wrap;

pub use chord::{Chord, Root, Spelling, FLAT, SHARP};
pub use config::RenderConfig;
pub use document::{Document, Header};
pub use error::*;
pub use render::{render_lines, Highlight, RenderOptions, RenderedBlock, Style};
pub use sheet::{collect_sections, is_sheet, layout, SectionEntry};
pub use splitter::{split_line, LinePair};
pub use transpose::{prepare, strip_chords, transpose_body, ChordMode, PreparedBody};
pub use wrap::{wrap_columns, TerminalSize};

/// Render a song for a terminal of the given size.
/// This is the main entry point for the library.
///
/// The first line is `title - artist (key)`. A body with section lines is laid
/// out as a sheet table; any other body is rendered as chord/lyric lines and
/// wrapped into two columns if it is taller than the terminal.
pub fn render_terminal(
    doc: &Document,
    options: &RenderOptions,
    config: &RenderConfig,
    size: TerminalSize,
) -> String {
    let prepared = prepare(&doc.header, &doc.body, &options.chords);
    let style = config.style(options.color);

    let lines = if is_sheet(&prepared.body, config.marker) {
        log::debug!("Body has section lines, rendering sheet table");
        let sections = collect_sections(&prepared.body, config, &style.chord, options);
        layout(&sections, &style.progression)
    } else {
        let block = render_lines(&prepared.body, &style.chord, options.lyrics_only);
        wrap_columns(&block, size, config.margin, &style.chord)
    };

    let mut out = format!(
        "{} - {} ({})\n",
        doc.header.title, doc.header.artist, prepared.key_label
    );
    for line in lines {
        out.push_str(&line);
        out.push('\n');
    }
    out
}

/// Render a song as a XeLaTeX document. Never colored, never wrapped.
pub fn render_tex(doc: &Document, options: &RenderOptions, config: &RenderConfig) -> String {
    let prepared = prepare(&doc.header, &doc.body, &options.chords);
    tex::to_tex(&doc.header, &prepared, config, options)
}
