use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{ArgAction, ArgGroup, Parser};
use log::{LevelFilter, Log, Metadata, Record};

use lyr::{tex, ChordMode, Document, RenderConfig, RenderOptions, TerminalSize};

/// Print chord sheets to the terminal or typeset them as PDF
#[derive(Parser, Debug)]
#[command(name = "lyr", version)]
#[command(group(ArgGroup::new("chords").multiple(false)))]
struct Cli {
    /// Song file (header, `---`, annotated body)
    file: PathBuf,

    /// Remove all chords
    #[arg(short = 'n', long, group = "chords")]
    no_chords: bool,

    /// Apply the shift given in the key header
    #[arg(short = 't', long, group = "chords")]
    transposed: bool,

    /// Shift chords by this many semitones
    #[arg(short = 'T', long, group = "chords", value_name = "SEMITONES", allow_negative_numbers = true)]
    transpose: Option<i32>,

    /// Shift chords up until the song is in this key
    #[arg(short = 'k', long, group = "chords", value_name = "KEY")]
    to_key: Option<String>,

    /// Disable colored chords
    #[arg(short = 'C', long)]
    no_color: bool,

    /// Only print the section table
    #[arg(short = 's', long)]
    sheet: bool,

    /// Create a PDF instead of printing to stdout
    #[arg(short = 'p', long)]
    pdf: bool,

    /// Only print the lyrics
    #[arg(short = 'l', long)]
    lyrics: bool,

    /// Output directory for --pdf (default: next to the song file)
    #[arg(short = 'o', long, value_name = "DIR")]
    out: Option<PathBuf>,

    /// YAML render configuration
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// More log output (-v, -vv, -vvv)
    #[arg(short = 'v', long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn chord_mode(&self) -> ChordMode {
        if self.no_chords {
            ChordMode::Strip
        } else if let Some(amount) = self.transpose {
            ChordMode::Shift(amount)
        } else if let Some(key) = &self.to_key {
            ChordMode::ToKey(key.clone())
        } else if self.transposed {
            ChordMode::Transposed
        } else {
            ChordMode::Keep
        }
    }

    fn render_options(&self) -> RenderOptions {
        RenderOptions {
            chords: self.chord_mode(),
            color: !self.no_color && !self.pdf,
            lyrics_only: self.lyrics,
            headers_only: self.sheet,
        }
    }

    fn output_dir(&self) -> PathBuf {
        if let Some(out) = &self.out {
            return out.clone();
        }
        match self.file.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }
}

struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{}] {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

fn load_config(path: Option<&Path>) -> Result<RenderConfig> {
    match path {
        Some(path) => RenderConfig::load(path)
            .with_context(|| format!("failed to load configuration '{}'", path.display())),
        None => Ok(RenderConfig::default()),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = load_config(cli.config.as_deref())?;
    let doc = Document::load(&cli.file)
        .with_context(|| format!("failed to read song '{}'", cli.file.display()))?;
    let options = cli.render_options();

    if cli.pdf {
        let stem = cli
            .file
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("song");
        let contents = lyr::render_tex(&doc, &options, &config);
        let tex_path = tex::write_tex(&cli.output_dir(), stem, &contents)?;
        let pdf = tex::compile_pdf(&tex_path)?;
        eprintln!("Wrote PDF to {}", pdf.display());
    } else {
        print!(
            "{}",
            lyr::render_terminal(&doc, &options, &config, TerminalSize::detect())
        );
    }

    Ok(())
}
