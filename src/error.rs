//! # Error Types
//!
//! This module defines all error types for the lyr renderer.
//!
//! Only the edges of the pipeline can fail: loading a song file, reading a
//! configuration file and running the typesetter. The rendering core itself
//! degrades to a best-effort output instead of failing (unknown chord roots are
//! left untouched, missing sheet fields are rendered empty).
//!
//! ## Error Types
//! - `EmptyChord` - An empty chord symbol was handed to the chord parser
//! - `MissingSeparator` - The song file has no `---` line between header and body
//! - `MissingHeader` - A title, artist or key header line is absent
//! - `InvalidShift` - The `+n` / `-n` suffix of the key line is not a number
//! - `Config` - Invalid YAML configuration
//! - `Io` - Reading or writing a file failed
//! - `Typeset` - The external TeX compiler could not be run or failed
//!
//! ## Usage
//! ```rust
//! use lyr::{Document, LyrError};
//!
//! match Document::parse("# Title\n## Artist\nno separator here\n") {
//!     Ok(doc) => println!("{}", doc.header.title),
//!     Err(LyrError::MissingSeparator) => eprintln!("not a song file"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LyrError {
    /// An empty string was parsed as a chord symbol.
    #[error("Empty chord symbol")]
    EmptyChord,

    /// The song file has no `---` separator line.
    ///
    /// # Example
    /// ```
    /// # use lyr::LyrError;
    /// let err = LyrError::MissingSeparator;
    /// assert_eq!(err.to_string(), "Missing '---' separator between header and body");
    /// ```
    #[error("Missing '---' separator between header and body")]
    MissingSeparator,

    /// One of the three header lines is missing.
    ///
    /// # Example
    /// ```
    /// # use lyr::LyrError;
    /// let err = LyrError::MissingHeader("artist");
    /// assert_eq!(err.to_string(), "Missing header line: artist");
    /// ```
    #[error("Missing header line: {0}")]
    MissingHeader(&'static str),

    /// The key shift suffix could not be read as an integer.
    #[error("Invalid key shift: {0}")]
    InvalidShift(String),

    /// Invalid YAML configuration.
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("I/O error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TeX compiler could not be started or reported a failure.
    #[error("Typesetting failed: {0}")]
    Typeset(String),
}
