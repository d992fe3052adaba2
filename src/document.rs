//! # Song Documents
//!
//! A song file is a three-line header, a `---` separator and the body:
//!
//! ```text
//! # Hallelujah
//! ## Leonard Cohen
//! ### C+2
//! ---
//! [C]I heard there was a [Am]secret chord
//! ```
//!
//! The key line may end in `+n` or `-n`, the shift the song is usually played
//! with. A leading `#!` line (for launchers that pass extra options) is
//! ignored.

use std::fs;
use std::path::Path;

use crate::chord::Chord;
use crate::error::LyrError;

/// Title, artist and key of a song
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub title: String,
    pub artist: String,
    pub key: Chord,
    /// Default transposition in semitones
    pub shift: i32,
}

impl Header {
    fn parse(text: &str) -> Result<Header, LyrError> {
        let mut title = None;
        let mut artist = None;
        let mut key_line = None;

        for line in text.lines() {
            if line.starts_with("#!") {
                continue;
            }
            if let Some(rest) = line.strip_prefix("### ") {
                key_line.get_or_insert(rest.trim());
            } else if let Some(rest) = line.strip_prefix("## ") {
                artist.get_or_insert(rest.trim());
            } else if let Some(rest) = line.strip_prefix("# ") {
                title.get_or_insert(rest.trim());
            }
        }

        let title = title.ok_or(LyrError::MissingHeader("title"))?;
        let artist = artist.ok_or(LyrError::MissingHeader("artist"))?;
        let (key, shift) = parse_key(key_line.ok_or(LyrError::MissingHeader("key"))?)?;

        Ok(Header {
            title: title.to_string(),
            artist: artist.to_string(),
            key,
            shift,
        })
    }
}

/// Split `G+2` / `Am-3` / `D` into key chord and shift.
fn parse_key(line: &str) -> Result<(Chord, i32), LyrError> {
    let (key, shift) = if let Some((key, shift)) = line.split_once('+') {
        (key, parse_shift(shift)?)
    } else if let Some((key, shift)) = line.split_once('-') {
        let amount = parse_shift(shift)?
            .checked_neg()
            .ok_or_else(|| LyrError::InvalidShift(shift.trim().to_string()))?;
        (key, amount)
    } else {
        (line, 0)
    };

    let key = key.trim();
    if key.is_empty() {
        return Err(LyrError::MissingHeader("key"));
    }
    Ok((Chord::parse(key)?, shift))
}

fn parse_shift(text: &str) -> Result<i32, LyrError> {
    text.trim()
        .parse()
        .map_err(|_| LyrError::InvalidShift(text.trim().to_string()))
}

/// A loaded song: header plus the raw annotated body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub header: Header,
    pub body: String,
}

impl Document {
    /// Split `source` at its first `---` line and read the header.
    ///
    /// # Example
    /// ```rust
    /// use lyr::Document;
    ///
    /// let doc = Document::parse("# Song\n## Band\n### Am-2\n---\n[Am]la\n")?;
    /// assert_eq!(doc.header.title, "Song");
    /// assert_eq!(doc.header.shift, -2);
    /// assert_eq!(doc.body, "[Am]la\n");
    /// # Ok::<(), lyr::LyrError>(())
    /// ```
    pub fn parse(source: &str) -> Result<Document, LyrError> {
        let mut offset = 0;
        for line in source.split_inclusive('\n') {
            if line.trim_end_matches(['\n', '\r']) == "---" {
                let header = Header::parse(&source[..offset])?;
                let body = source[offset + line.len()..].to_string();
                return Ok(Document { header, body });
            }
            offset += line.len();
        }
        Err(LyrError::MissingSeparator)
    }

    pub fn load(path: &Path) -> Result<Document, LyrError> {
        let source = fs::read_to_string(path).map_err(|source| LyrError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Document::parse(&source)
    }
}
