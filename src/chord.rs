//! # Chord Module
//!
//! Chord symbols as they appear in lead sheets: a root note followed by a
//! free-form addition (`m7`, `sus4`, `maj7/G`, ...).
//!
//! The parser is permissive on purpose. Only the root is classified; the
//! addition is kept verbatim, and a root that is not one of the twelve pitch
//! names is carried through untouched and never transposed.
//!
//! ## Spelling
//! Every pitch class has a sharp name and a flat name, held in [`SHARP`] and
//! [`FLAT`] under the same 0-11 ordinal. A chord keeps the spelling it was
//! written with until it is transposed. Transposing upward picks the sharp
//! name, downward the flat name. This is a simple heuristic and not full
//! enharmonic theory (`C` down one semitone is `B`, up eleven it is also `B`,
//! but `D` down one is `Db` while up eleven it is `C#`).
//!
//! ## Example
//! ```rust
//! use lyr::Chord;
//!
//! let chord = Chord::parse("C/E").unwrap().transpose(2);
//! assert_eq!(chord.to_string(), "D/F#");
//!
//! let minor = Chord::parse("am").unwrap().transpose(-2);
//! assert_eq!(minor.to_string(), "gm");
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::LyrError;

/// Pitch names with sharp spelling, indexed by pitch class (C = 0).
pub const SHARP: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Pitch names with flat spelling, indexed by pitch class (C = 0).
pub const FLAT: [&str; 12] = [
    "C", "Db", "D", "Eb", "E", "F", "Gb", "G", "Ab", "A", "Bb", "B",
];

/// Which of the two name tables a root is spelled from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Spelling {
    Sharp,
    Flat,
}

/// Root of a chord symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Root {
    /// One of the twelve pitch classes
    Pitch { class: u8, spelling: Spelling },
    /// Anything else, kept verbatim
    Unknown(char),
}

impl Root {
    /// Look a root name up in the flat table first, then the sharp table.
    pub fn from_name(name: &str) -> Option<Root> {
        if let Some(class) = FLAT.iter().position(|n| *n == name) {
            return Some(Root::Pitch {
                class: class as u8,
                spelling: Spelling::Flat,
            });
        }
        SHARP.iter().position(|n| *n == name).map(|class| Root::Pitch {
            class: class as u8,
            spelling: Spelling::Sharp,
        })
    }

    pub fn pitch_class(&self) -> Option<u8> {
        match self {
            Root::Pitch { class, .. } => Some(*class),
            Root::Unknown(_) => None,
        }
    }
}

impl fmt::Display for Root {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Root::Pitch {
                class,
                spelling: Spelling::Sharp,
            } => f.write_str(SHARP[*class as usize]),
            Root::Pitch {
                class,
                spelling: Spelling::Flat,
            } => f.write_str(FLAT[*class as usize]),
            Root::Unknown(c) => write!(f, "{}", c),
        }
    }
}

/// A parsed chord symbol
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chord {
    pub root: Root,
    /// Everything after the root, verbatim (quality, extensions, slash bass)
    pub addition: String,
    /// Whether the symbol was written with a capital root. A lower-case root
    /// is the lead-sheet shorthand for a minor third and is rendered back in
    /// lower case.
    pub upper_third: bool,
}

impl Chord {
    /// Parse a chord symbol.
    ///
    /// The first character decides `upper_third` and is then upper-cased. A
    /// German `H` is read as `B`. If the first two characters form a pitch
    /// name (`C#`, `Db`, ...) they are the root, otherwise the first character
    /// is.
    ///
    /// # Errors
    /// Returns [`LyrError::EmptyChord`] for an empty symbol. Nothing else is
    /// rejected.
    pub fn parse(symbol: &str) -> Result<Chord, LyrError> {
        let mut chars = symbol.chars();
        let first = chars.next().ok_or(LyrError::EmptyChord)?;
        let upper_third = !first.is_lowercase();

        let mut normalized: String = first.to_uppercase().collect();
        if normalized == "H" {
            normalized = "B".to_string();
        }
        normalized.push_str(chars.as_str());

        let two: String = normalized.chars().take(2).collect();
        if two.chars().count() == 2 {
            if let Some(root) = Root::from_name(&two) {
                return Ok(Chord {
                    root,
                    addition: normalized[two.len()..].to_string(),
                    upper_third,
                });
            }
        }

        // normalized is never empty: it starts with the upper-cased first char
        let head = normalized.chars().next().unwrap_or(first);
        let root = Root::from_name(head.encode_utf8(&mut [0; 4])).unwrap_or(Root::Unknown(head));
        Ok(Chord {
            root,
            addition: normalized[head.len_utf8()..].to_string(),
            upper_third,
        })
    }

    /// Shift the chord by `amount` semitones.
    ///
    /// Upward shifts use sharp spelling and downward shifts flat spelling. The
    /// bass note of a slash chord moves by the same amount. A shift of zero,
    /// or a chord whose root is not a pitch name, comes back unchanged.
    pub fn transpose(mut self, amount: i32) -> Chord {
        if amount == 0 {
            return self;
        }
        let Some(class) = self.root.pitch_class() else {
            log::warn!("Chord '{}' has no known root, leaving it as is", self);
            return self;
        };

        let spelling = if amount < 0 {
            Spelling::Flat
        } else {
            Spelling::Sharp
        };
        self.root = Root::Pitch {
            class: (class as i32 + amount.rem_euclid(12)).rem_euclid(12) as u8,
            spelling,
        };

        if let Some((left, right)) = self.addition.split_once('/') {
            if let Ok(bass) = Chord::parse(right) {
                self.addition = format!("{}/{}", left, bass.transpose(amount));
            }
        }
        self
    }

    /// Semitones to move *up* from this chord's root to reach `target`'s root.
    ///
    /// Always in `0..12`. This never picks the shorter downward route: from
    /// `D` to `C` it answers 10, not -2. Unknown roots on either side give 0.
    pub fn distance_to(&self, target: &Chord) -> u8 {
        match (self.root.pitch_class(), target.root.pitch_class()) {
            (Some(from), Some(to)) => (to as i32 - from as i32).rem_euclid(12) as u8,
            _ => 0,
        }
    }

    /// [`Chord::distance_to`] for a target given as a symbol string.
    pub fn distance(&self, target: &str) -> u8 {
        Chord::parse(target)
            .map(|target| self.distance_to(&target))
            .unwrap_or(0)
    }
}

impl FromStr for Chord {
    type Err = LyrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Chord::parse(s)
    }
}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.upper_third {
            write!(f, "{}{}", self.root, self.addition)
        } else {
            write!(f, "{}{}", self.root.to_string().to_lowercase(), self.addition)
        }
    }
}
