//! # Sheet Table Layout
//!
//! Songs written as a form overview use section lines:
//!
//! ```text
//! > Intro ; 4 bars ; | [G] | [D] | [Em] | [C] |
//! > Verse 1 ; 8 bars
//! [G]Hello [D]world
//! > Chorus ; 2x
//! ```
//!
//! Each section line holds a label, a duration and optionally a progression,
//! separated by `" ; "`. Lyric lines following a section line belong to it.
//! The progression is printed as written, brackets included, so that it
//! follows transposition like any other chord token.
//! The result is a table:
//!
//! ```text
//! Intro   | 4 bars | | [G] | [D] | [Em] | [C] |
//! Verse 1 | 8 bars | G     D
//!         |        | Hello world
//! Chorus  |     2x |
//! ```
//!
//! Column widths depend on every section of the song, so all sections are
//! collected first and the table is emitted in a second pass.

use crate::config::RenderConfig;
use crate::render::{render_lines, Highlight, RenderOptions};

/// One row group of the sheet table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionEntry {
    pub label: String,
    pub duration: String,
    /// Third field, printed as is in the content cell
    pub progression: Option<String>,
    /// Fourth field, used by the document layout
    pub notes: Option<String>,
    /// Rendered lines of the lyrics under the section line
    pub body: Vec<String>,
}

impl SectionEntry {
    /// Read a section line. Returns `None` if `line` does not start with
    /// `marker`. Missing fields are left empty.
    pub fn parse_marker(line: &str, marker: char, separator: &str) -> Option<SectionEntry> {
        let rest = line.strip_prefix(marker)?;
        let rest = rest.strip_prefix(' ').unwrap_or(rest);

        let mut fields = rest.split(separator);
        Some(SectionEntry {
            label: fields.next().unwrap_or_default().to_string(),
            duration: fields.next().unwrap_or_default().to_string(),
            progression: fields.next().map(str::to_string),
            notes: fields.next().map(str::to_string),
            body: Vec::new(),
        })
    }
}

/// Whether `body` has any section lines
pub fn is_sheet(body: &str, marker: char) -> bool {
    body.lines().any(|line| line.starts_with(marker))
}

/// First pass: group the body into sections.
///
/// Lyric lines are rendered with `chord_highlight` and attached to the section
/// above them; blank lines are dropped. Lines before the first section line go
/// into an unlabeled section. With `headers_only` set, lyric lines are skipped.
pub fn collect_sections(
    body: &str,
    config: &RenderConfig,
    chord_highlight: &Highlight,
    options: &RenderOptions,
) -> Vec<SectionEntry> {
    let mut sections: Vec<SectionEntry> = Vec::new();

    for line in body.lines() {
        if line.is_empty() {
            continue;
        }
        if let Some(entry) = SectionEntry::parse_marker(line, config.marker, &config.separator) {
            sections.push(entry);
            continue;
        }
        if options.headers_only {
            continue;
        }

        if sections.is_empty() {
            sections.push(SectionEntry::default());
        }
        let rendered = render_lines(line, chord_highlight, options.lyrics_only);
        if let Some(section) = sections.last_mut() {
            section.body.extend(rendered.lines);
        }
    }

    log::debug!("Collected {} sections", sections.len());
    sections
}

/// Second pass: emit the table rows.
pub fn layout(sections: &[SectionEntry], progression_highlight: &Highlight) -> Vec<String> {
    let label_width = sections
        .iter()
        .map(|s| s.label.chars().count())
        .max()
        .unwrap_or(0);
    let duration_width = sections
        .iter()
        .map(|s| s.duration.chars().count())
        .max()
        .unwrap_or(0);

    let mut rows = Vec::new();
    for section in sections {
        let head = format!(
            "{:<lw$} | {:>dw$} | ",
            section.label,
            section.duration,
            lw = label_width,
            dw = duration_width
        );

        let mut body = section.body.iter();
        match &section.progression {
            Some(progression) => rows.push(head + &progression_highlight.apply(progression)),
            None => rows.push(head + body.next().map(String::as_str).unwrap_or("")),
        }

        for line in body {
            rows.push(format!(
                "{:<lw$} | {:>dw$} | {}",
                "",
                "",
                line,
                lw = label_width,
                dw = duration_width
            ));
        }
    }
    rows
}
