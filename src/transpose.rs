//! # Transposition Driver
//!
//! Applies a semitone shift to every `[chord]` token of a song body, or strips
//! the tokens altogether.
//!
//! ## Where the shift comes from
//! The key header line can carry a default shift (`### G+2`). By itself that
//! shift is only shown in the title line (`G + 2 = A`); the body is transposed
//! when the caller asks for it:
//!
//! | Mode | Shift applied to the body |
//! |---|---|
//! | `Keep` | none |
//! | `Transposed` | the header shift |
//! | `Shift(n)` | `n`, replacing the header shift |
//! | `ToKey(k)` | the upward distance from the header key to `k` |
//! | `Strip` | none, chords are removed |
//!
//! `ToKey` always moves up (G to F is +10, not -2); see [`Chord::distance_to`].

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::chord::Chord;
use crate::document::Header;

static CHORD_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([a-zA-Z0-9#/]+)\]").expect("chord token pattern is valid"));

/// What happens to the chords of a song
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ChordMode {
    /// Leave chords as written
    #[default]
    Keep,
    /// Apply the shift from the key header
    Transposed,
    /// Apply an explicit shift in semitones
    Shift(i32),
    /// Shift up until the key header reaches the named key
    ToKey(String),
    /// Remove every chord
    Strip,
}

/// A song body with its chords processed, and the key text for the title
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedBody {
    pub body: String,
    /// `G` or, with an active shift, `G + 2 = A`
    pub key_label: String,
    /// Shift in effect, 0 when chords are stripped
    pub shift: i32,
}

/// Replace every chord token with its transposed form.
///
/// # Example
/// ```rust
/// use lyr::transpose_body;
///
/// assert_eq!(transpose_body("[C]Hey [am]Jude", 2), "[D]Hey [bm]Jude");
/// ```
pub fn transpose_body(body: &str, amount: i32) -> Cow<'_, str> {
    if amount == 0 {
        return Cow::Borrowed(body);
    }
    CHORD_TOKEN.replace_all(body, |caps: &Captures| match Chord::parse(&caps[1]) {
        Ok(chord) => format!("[{}]", chord.transpose(amount)),
        Err(_) => caps[0].to_string(),
    })
}

/// Remove every chord token.
pub fn strip_chords(body: &str) -> Cow<'_, str> {
    CHORD_TOKEN.replace_all(body, "")
}

/// Upward shift taking `key` to `target`. A target without a known root
/// gives no shift.
pub fn resolve_target_shift(key: &Chord, target: &str) -> i32 {
    match Chord::parse(target) {
        Ok(chord) if chord.root.pitch_class().is_some() => key.distance_to(&chord) as i32,
        _ => {
            log::warn!("Target key '{}' has no known root, not transposing", target);
            0
        }
    }
}

/// Process the chords of `body` according to `mode`.
pub fn prepare(header: &Header, body: &str, mode: &ChordMode) -> PreparedBody {
    let shift = match mode {
        ChordMode::Shift(amount) => *amount,
        ChordMode::ToKey(target) => resolve_target_shift(&header.key, target),
        ChordMode::Keep | ChordMode::Transposed | ChordMode::Strip => header.shift,
    };

    let (shift, key_label) = if *mode != ChordMode::Strip && shift != 0 {
        let label = format!(
            "{} + {} = {}",
            header.key,
            shift,
            header.key.clone().transpose(shift)
        );
        (shift, label)
    } else {
        (0, header.key.to_string())
    };
    log::debug!("Chord mode {:?}, shift {}", mode, shift);

    let body = match mode {
        ChordMode::Transposed | ChordMode::Shift(_) | ChordMode::ToKey(_) => {
            transpose_body(body, shift).into_owned()
        }
        ChordMode::Strip => strip_chords(body).into_owned(),
        ChordMode::Keep => body.to_string(),
    };

    PreparedBody {
        body,
        key_label,
        shift,
    }
}
