//! Integration tests for lyr
//!
//! Tests the full pipeline from a song file to terminal and TeX output.

use std::fs;

use lyr::{
    render_terminal, render_tex, ChordMode, Document, LyrError, RenderConfig, RenderOptions,
    TerminalSize,
};

fn plain(chords: ChordMode) -> RenderOptions {
    RenderOptions {
        chords,
        color: false,
        ..RenderOptions::default()
    }
}

fn render(source: &str, options: &RenderOptions) -> String {
    let doc = Document::parse(source).expect("song should parse");
    render_terminal(&doc, options, &RenderConfig::default(), TerminalSize::new(80, 40))
}

#[test]
fn test_render_chords_above_lyrics() {
    let source = r#"# Hey Jude
## The Beatles
### F
---
[F]Hey Jude, don't make it [C]bad
"#;
    let out = render(source, &plain(ChordMode::Keep));
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines[0], "Hey Jude - The Beatles (F)");
    assert_eq!(lines[2], "Hey Jude, don't make it bad");
    // chord columns line up with the bracket positions
    assert_eq!(lines[1].find('F'), Some(0));
    assert_eq!(lines[1].find('C'), lines[2].find("bad"));
}

#[test]
fn test_strip_chords() {
    let source = "# T\n## A\n### Am\n---\n[Am]Stay [F]here\n";
    let out = render(source, &plain(ChordMode::Strip));
    assert_eq!(out, "T - A (Am)\nStay here\n");
}

#[test]
fn test_lyrics_only_drops_chord_lines() {
    let source = "# T\n## A\n### Am\n---\n[Am]Stay [F]here\n[G] [D]\n";
    let options = RenderOptions {
        lyrics_only: true,
        ..plain(ChordMode::Keep)
    };
    assert_eq!(render(source, &options), "T - A (Am)\nStay here\n");
}

#[test]
fn test_header_shift_applied_on_request() {
    let source = "# T\n## A\n### G+2\n---\n[G]la [C]li\n";

    let kept = render(source, &plain(ChordMode::Keep));
    assert!(kept.starts_with("T - A (G + 2 = A)\n"));
    assert!(kept.contains("G  C"));

    let transposed = render(source, &plain(ChordMode::Transposed));
    assert!(transposed.starts_with("T - A (G + 2 = A)\n"));
    assert!(transposed.contains("A  D"));
}

#[test]
fn test_to_key_moves_up() {
    let source = "# T\n## A\n### C\n---\n[C]la [G]li\n";
    let out = render(source, &plain(ChordMode::ToKey("D".to_string())));
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines[0], "T - A (C + 2 = D)");
    assert_eq!(lines[1].trim_end(), "D  A");
    assert_eq!(lines[2], "la li");
}

#[test]
fn test_negative_shift_spells_flat() {
    let source = "# T\n## A\n### C\n---\n[C]la [G]li\n";
    let out = render(source, &plain(ChordMode::Shift(-1)));
    assert!(out.starts_with("T - A (C + -1 = B)\n"));
    assert!(out.contains("B  Gb"));
}

#[test]
fn test_colored_chord_lines() {
    let source = "# T\n## A\n### G\n---\n[G]Hello\n";
    let options = RenderOptions {
        color: true,
        ..RenderOptions::default()
    };
    let out = render(source, &options);
    assert!(out.contains("\x1b[1;35mG"));
    assert!(out.contains("\x1b[0;0m\nHello\n"));
}

#[test]
fn test_long_song_wraps_into_two_columns() {
    let mut source = String::from("# Long\n## Band\n### C\n---\n");
    for i in 0..50 {
        if [12, 24, 30, 44].contains(&i) {
            source.push('\n');
        } else {
            source.push_str(&format!("line {}\n", i));
        }
    }

    let doc = Document::parse(&source).unwrap();
    let out = render_terminal(
        &doc,
        &plain(ChordMode::Keep),
        &RenderConfig::default(),
        TerminalSize::new(40, 20),
    );
    let lines: Vec<&str> = out.lines().collect();

    assert_eq!(lines[0], "Long - Band (C)");
    assert_eq!(lines.len(), 31);
    assert_eq!(lines[1], format!("{:<20}|  ", "line 0"));
    assert_eq!(lines[2], format!("{:<20}|  {}", "line 1", "line 31"));
    assert_eq!(lines[30], format!("{:<20}|  ", "line 29"));
}

#[test]
fn test_short_song_is_not_wrapped() {
    let source = "# T\n## A\n### C\n---\none\n\ntwo\n";
    let doc = Document::parse(source).unwrap();
    let out = render_terminal(
        &doc,
        &plain(ChordMode::Keep),
        &RenderConfig::default(),
        TerminalSize::new(40, 20),
    );
    assert_eq!(out, "T - A (C)\none\n\ntwo\n");
}

#[test]
fn test_sheet_table() {
    let source = r#"# T
## A
### G
---
> Intro ; 4 bars ; | [G] | [D] |
> Verse 1 ; 8 bars
[G]Hello [D]world
"#;
    let out = render(source, &plain(ChordMode::Keep));
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines[1], "Intro   | 4 bars | | [G] | [D] |");
    assert_eq!(lines[2].trim_end(), "Verse 1 | 8 bars | G     D");
    assert_eq!(lines[3], "        |        | Hello world");
    assert_eq!(lines.len(), 4);
}

#[test]
fn test_sheet_headers_only() {
    let source = "# T\n## A\n### G\n---\n> Verse 1 ; 8 bars\n[G]Hello\n> Chorus ; 4 bars\nla\n";
    let options = RenderOptions {
        headers_only: true,
        ..plain(ChordMode::Keep)
    };
    assert_eq!(
        render(source, &options),
        "T - A (G)\nVerse 1 | 8 bars | \nChorus  | 4 bars | \n"
    );
}

#[test]
fn test_custom_marker_from_config() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("lyr.yaml");
    fs::write(&config_path, "marker: '@'\n").unwrap();
    let config = RenderConfig::load(&config_path).unwrap();

    let doc = Document::parse("# T\n## A\n### G\n---\n@ Solo ; 2x\n> not a section\n").unwrap();
    let out = render_terminal(&doc, &plain(ChordMode::Keep), &config, TerminalSize::new(80, 40));
    assert!(out.contains("Solo | 2x | "));
    assert!(out.contains("> not a section"));
}

#[test]
fn test_tex_document() {
    let source = r#"# Song
## Band
### G+2
---
> Intro ; 4 ; | [G] | [C] |
[G]la
"#;
    let doc = Document::parse(source).unwrap();
    let options = RenderOptions {
        chords: ChordMode::Transposed,
        color: true,
        ..RenderOptions::default()
    };
    let tex = render_tex(&doc, &options, &RenderConfig::default());

    assert!(tex.starts_with("\\documentclass"));
    assert!(tex.contains("\\Huge Song \\Large (G + 2 = A) & \\large Band"));
    assert!(tex.contains("\\large Intro & 4 & | A | D | &  \\\\\n"));
    assert!(tex.contains("la\n\\end{verbatim}\n"));
    assert!(!tex.contains("\x1b["));
}

#[test]
fn test_load_song_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("song.md");
    fs::write(&path, "#!lyr -t\n# T\n## A\n### D-2\n---\n[D]la\n").unwrap();

    let doc = Document::load(&path).unwrap();
    assert_eq!(doc.header.title, "T");
    assert_eq!(doc.header.shift, -2);
    assert_eq!(doc.body, "[D]la\n");
}

#[test]
fn test_load_errors() {
    let missing = Document::load(std::path::Path::new("/nonexistent/song.md"));
    assert!(matches!(missing, Err(LyrError::Io { .. })));

    let no_separator = Document::parse("# T\n## A\n### C\n[C]la\n");
    assert!(matches!(no_separator, Err(LyrError::MissingSeparator)));

    let no_key = Document::parse("# T\n## A\n---\nla\n");
    assert!(matches!(no_key, Err(LyrError::MissingHeader("key"))));
}
