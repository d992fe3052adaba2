//! # Line Splitter
//!
//! Turns one annotated line such as `[G]Hello [D]world` into two aligned
//! lines:
//!
//! ```text
//! G     D
//! Hello world
//! ```
//!
//! ## Alignment
//! Each chord starts in the column where its bracket stood, measured on the
//! lyric. A chord occupies its own width plus one placeholder space, and that
//! width becomes a debt the following lyric characters pay off one by one.
//! While the debt is open the chord line gets nothing (the chord text is
//! already there); once it is paid, the chord line grows by one space per
//! lyric character. If a word ends while debt is still open, the rest of the
//! debt is flushed into the lyric as padding so the next word cannot start
//! under the chord. Lyric characters are never dropped or moved left.
//!
//! ## Progression cells
//! A line starting with `|` is a chord progression (`| G | D | Em | C |`). It
//! is not scanned; it becomes the chord line with its brackets removed.

/// A chord line and the lyric line it sits above
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinePair {
    pub chords: String,
    pub lyrics: String,
}

impl LinePair {
    pub fn has_chords(&self) -> bool {
        !self.chords.trim().is_empty()
    }

    pub fn has_lyrics(&self) -> bool {
        !self.lyrics.trim().is_empty()
    }

    /// Chords but no lyric text, e.g. an instrumental line `[G] [D] [Em]`
    pub fn is_chord_only(&self) -> bool {
        self.has_chords() && !self.has_lyrics()
    }

    /// Whether the chord line is printed
    pub fn shows_chords(&self, lyrics_only: bool) -> bool {
        self.has_chords() && !lyrics_only
    }

    /// Whether the lyric line is printed. Blank lyric lines are kept (they
    /// are paragraph breaks) unless they belong to a chord-only line.
    pub fn shows_lyrics(&self) -> bool {
        !self.is_chord_only()
    }
}

/// Scanner state for a single line
#[derive(Default)]
struct Splitter {
    in_chord: bool,
    debt: usize,
    pair: LinePair,
}

impl Splitter {
    fn feed(&mut self, c: char) {
        match c {
            '[' => self.in_chord = true,
            ']' => {
                self.in_chord = false;
                self.pair.chords.push(' ');
                self.debt += 1;
            }
            _ if self.in_chord => {
                self.pair.chords.push(c);
                self.debt += 1;
            }
            _ => {
                if self.debt == 0 {
                    self.pair.chords.push(' ');
                } else {
                    self.debt -= 1;
                    if c == ' ' {
                        while self.debt > 0 {
                            self.pair.lyrics.push(' ');
                            self.debt -= 1;
                        }
                    }
                }
                self.pair.lyrics.push(c);
            }
        }
    }
}

/// Returns true for lines that hold a bar-separated chord progression. The
/// pipe must be the first character; an indented line is scanned as lyrics.
pub fn is_progression(line: &str) -> bool {
    line.starts_with('|')
}

/// Split one annotated line into its chord line and lyric line.
///
/// # Example
/// ```rust
/// use lyr::split_line;
///
/// let pair = split_line("[G]Hello [D]world");
/// assert_eq!(pair.chords.trim_end(), "G     D");
/// assert_eq!(pair.lyrics, "Hello world");
/// ```
pub fn split_line(line: &str) -> LinePair {
    if is_progression(line) {
        return LinePair {
            chords: line.replace(['[', ']'], ""),
            lyrics: String::new(),
        };
    }

    let mut splitter = Splitter::default();
    for c in line.chars() {
        splitter.feed(c);
    }
    splitter.pair
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column_of(line: &str, needle: &str) -> usize {
        line.find(needle).unwrap()
    }

    #[test]
    fn test_plain_lyric_line() {
        let pair = split_line("Just words");
        assert_eq!(pair.lyrics, "Just words");
        assert!(!pair.has_chords());
        assert!(pair.shows_lyrics());
    }

    #[test]
    fn test_chords_align_over_words() {
        let pair = split_line("[G]Hello [D]world");
        assert_eq!(pair.lyrics, "Hello world");
        assert_eq!(pair.chords.trim_end(), "G     D");
        assert_eq!(column_of(&pair.chords, "G"), column_of(&pair.lyrics, "Hello"));
        assert_eq!(column_of(&pair.chords, "D"), column_of(&pair.lyrics, "world"));
    }

    #[test]
    fn test_chord_in_the_middle_of_a_word() {
        let pair = split_line("Hal[C]le[G]lujah");
        assert_eq!(pair.lyrics, "Hallelujah");
        assert_eq!(column_of(&pair.chords, "C"), 3);
        assert_eq!(column_of(&pair.chords, "G"), 5);
    }

    #[test]
    fn test_long_chord_pads_short_word() {
        let pair = split_line("[Cmaj7]I am here");
        // "Cmaj7" plus its slot is six wide, so "am" moves to column 6
        assert_eq!(pair.lyrics, "I     am here");
        assert_eq!(pair.chords.trim_end(), "Cmaj7");
        assert_eq!(column_of(&pair.lyrics, "am"), 6);
    }

    #[test]
    fn test_adjacent_chords_keep_one_space() {
        let pair = split_line("[G][D]go");
        assert_eq!(pair.chords.trim_end(), "G D");
        assert_eq!(pair.lyrics, "go");
    }

    #[test]
    fn test_chord_only_line() {
        let pair = split_line("[G] [D] [Em]");
        assert_eq!(pair.chords.trim_end(), "G D Em");
        assert!(pair.is_chord_only());
        assert!(pair.shows_chords(false));
        assert!(!pair.shows_lyrics());
    }

    #[test]
    fn test_lyrics_only_hides_chords() {
        let pair = split_line("[Am]Stay [F]here");
        assert!(!pair.shows_chords(true));
        assert!(pair.shows_lyrics());
    }

    #[test]
    fn test_blank_line() {
        let pair = split_line("");
        assert_eq!(pair, LinePair::default());
        assert!(!pair.shows_chords(false));
        assert!(pair.shows_lyrics());
    }

    #[test]
    fn test_progression_line_is_not_scanned() {
        let pair = split_line("| [G] | [D] | [Em] [C] |");
        assert_eq!(pair.chords, "| G | D | Em C |");
        assert!(pair.lyrics.is_empty());
        assert!(pair.is_chord_only());
    }

    #[test]
    fn test_indented_pipe_is_a_lyric_line() {
        assert!(is_progression("| [G] |"));
        assert!(!is_progression("  | [G] |"));

        let pair = split_line("  | [G] |");
        assert_eq!(pair.chords.trim(), "G");
        assert!(pair.lyrics.starts_with("  |"));
        assert!(!pair.lyrics.contains('['));
    }

    #[test]
    fn test_unclosed_bracket_captures_rest_of_line() {
        let pair = split_line("la [G la");
        assert_eq!(pair.lyrics, "la ");
        assert_eq!(pair.chords, "   G la");
    }
}
