use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::config::RenderConfig;
use crate::document::Header;
use crate::error::LyrError;
use crate::render::{render_lines, Highlight, RenderOptions};
use crate::sheet::SectionEntry;
use crate::transpose::PreparedBody;

/// Convert a prepared song to a XeLaTeX document.
///
/// Section lines become rows of a four-column table; every other line of the
/// body is rendered as chord/lyric text into a verbatim block below it.
pub fn to_tex(
    header: &Header,
    prepared: &PreparedBody,
    config: &RenderConfig,
    options: &RenderOptions,
) -> String {
    let mut tex = String::new();

    tex.push_str(&preamble());
    tex.push_str("\\begin{document}\n");

    // Title row
    tex.push_str(&format!(
        "\\begin{{tabularx}}{{\\textwidth}}{{C r}}\\Huge {} \\Large ({}) & \\large {}\\end{{tabularx}}\n\n",
        escape_tex(&header.title),
        escape_tex(&prepared.key_label),
        escape_tex(&header.artist)
    ));
    tex.push_str("\\vspace{1em}\n");

    // Section table
    tex.push_str("\\renewcommand{\\arraystretch}{1.5}\n");
    tex.push_str("\\setlength{\\extrarowheight}{1.5em}\n");
    tex.push_str("\\begin{tabularx}{\\textwidth}{l r| l@{\\hspace{1em}}X}\n");

    let mut lyrics = String::new();
    for line in prepared.body.lines() {
        match SectionEntry::parse_marker(line, config.marker, &config.separator) {
            Some(section) => tex.push_str(&section_to_tex(&section)),
            None => {
                lyrics.push_str(line);
                lyrics.push('\n');
            }
        }
    }

    tex.push_str("\\hline\n");
    tex.push_str("\\end{tabularx}\n");
    tex.push_str("\\renewcommand{\\arraystretch}{1}\n");

    // Lyrics
    if !options.headers_only {
        let block = render_lines(&lyrics, &Highlight::none(), options.lyrics_only);
        tex.push_str("\\normalsize\\begin{verbatim}\n");
        tex.push_str(&block.to_text());
        tex.push_str("\\end{verbatim}\n");
    }

    tex.push_str("\\end{document}\n");
    tex
}

fn preamble() -> String {
    let mut tex = String::new();
    tex.push_str("\\documentclass[notitlepage,14pt]{extarticle}\n");
    tex.push_str("\\usepackage[a4paper,margin=0.8in]{geometry}\n");
    tex.push_str("\\usepackage{fontspec}\n");
    tex.push_str("\\usepackage{tabularx}\n");
    tex.push_str("\\usepackage{array}\n");
    tex.push_str("\\setmainfont[Ligatures=TeX]{MuseJazzText}\n");
    tex.push_str("\\newcolumntype{C}{>{\\centering\\arraybackslash}X}\n");
    tex.push_str("\\pagenumbering{gobble}\n");
    tex
}

/// One `\hline`-separated table row.
///
/// A progression in the third field stays in the third column. Otherwise the
/// fourth field (which may hold the progression) takes the third column and
/// the third field moves to the wide last column.
fn section_to_tex(section: &SectionEntry) -> String {
    let label = escape_tex(&section.label);
    let duration = escape_tex(&section.duration);
    let third = escape_tex(section.progression.as_deref().unwrap_or(""));
    let fourth = escape_tex(section.notes.as_deref().unwrap_or(""));

    let row = if third.contains('|') {
        format!("{} & {} & {} & {}", label, duration, progression_cell(&third), fourth)
    } else if fourth.contains('|') {
        format!("{} & {} & {} & {}", label, duration, progression_cell(&fourth), third)
    } else {
        format!("{} & {} & {} & {}", label, duration, fourth, third)
    };
    format!("\\hline\n\\large {} \\\\\n", row)
}

/// Brackets removed, double spaces widened to two en-spaces. The trailing
/// `{}` ends the control word before a following chord letter.
fn progression_cell(text: &str) -> String {
    text.replace(['[', ']'], "")
        .replace("  ", "\\enspace\\enspace{}")
}

fn escape_tex(s: &str) -> String {
    s.replace('#', "\\#").replace('&', "\\&")
}

/// Write `contents` to `<dir>/<stem>.tex`, creating `dir` if needed.
pub fn write_tex(dir: &Path, stem: &str, contents: &str) -> Result<PathBuf, LyrError> {
    fs::create_dir_all(dir).map_err(|source| LyrError::Io {
        path: dir.to_path_buf(),
        source,
    })?;
    let path = dir.join(format!("{}.tex", stem));
    fs::write(&path, contents).map_err(|source| LyrError::Io {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}

/// Run `xelatex` on `tex_path` and remove the `.tex`, `.aux` and `.log`
/// files afterwards. Returns the path of the PDF.
pub fn compile_pdf(tex_path: &Path) -> Result<PathBuf, LyrError> {
    let file_name = tex_path
        .file_name()
        .ok_or_else(|| LyrError::Typeset(format!("not a file: {}", tex_path.display())))?;
    let dir = match tex_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    log::info!("Running xelatex on {}", tex_path.display());
    let status = Command::new("xelatex")
        .arg("-interaction=nonstopmode")
        .arg(file_name)
        .current_dir(dir)
        .status()
        .map_err(|e| LyrError::Typeset(format!("could not run xelatex: {}", e)))?;
    if !status.success() {
        return Err(LyrError::Typeset(format!("xelatex exited with {}", status)));
    }

    for ext in ["tex", "aux", "log"] {
        let artifact = tex_path.with_extension(ext);
        if let Err(e) = fs::remove_file(&artifact) {
            log::warn!("Could not remove {}: {}", artifact.display(), e);
        }
    }
    Ok(tex_path.with_extension("pdf"))
}
