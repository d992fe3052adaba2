//! # Render Configuration
//!
//! Optional YAML file tuning the terminal output. Every key may be left out;
//! missing keys keep their defaults.
//!
//! ```yaml
//! chord-color: "\e[1;36m"
//! progression-color: "\e[2m"
//! reset: "\e[0m"
//! margin: 2
//! marker: ">"
//! separator: " ; "
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::LyrError;
use crate::render::{Highlight, Style};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct RenderConfig {
    /// Escape sequence opening a chord line
    pub chord_color: String,
    /// Escape sequence opening a progression cell in the sheet table
    pub progression_color: String,
    /// Escape sequence closing either highlight
    pub reset: String,
    /// Lines kept free below the output before wrapping into columns
    pub margin: usize,
    /// First character of a section line
    pub marker: char,
    /// Field separator inside a section line
    pub separator: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            chord_color: "\x1b[1;35m".to_string(),
            progression_color: "\x1b[2m".to_string(),
            reset: "\x1b[0;0m".to_string(),
            margin: 3,
            marker: '>',
            separator: " ; ".to_string(),
        }
    }
}

impl RenderConfig {
    pub fn from_yaml(content: &str) -> Result<Self, LyrError> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| LyrError::Config(e.to_string()))
    }

    pub fn load(path: &Path) -> Result<Self, LyrError> {
        let content = fs::read_to_string(path).map_err(|source| LyrError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("Loaded configuration from {}", path.display());
        Self::from_yaml(&content)
    }

    /// Highlights for terminal output; all empty when `color` is off.
    pub fn style(&self, color: bool) -> Style {
        if !color {
            return Style::plain();
        }
        Style {
            chord: Highlight::new(&self.chord_color, &self.reset),
            progression: Highlight::new(&self.progression_color, &self.reset),
        }
    }
}
