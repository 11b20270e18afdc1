//! The `fmt` command: format files like the corpus.
//!
//! The model is trained once and shared; files are formatted in parallel,
//! each run owning its own reconstruction state.

use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tessel_fmt::{Formatter, Model};
use tessel_parse::BraceVocabulary;
use tracing::debug;

use super::{load_document, CliError, ModelOptions};

/// What to do with a formatted file.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum OutputMode {
    /// Print the formatted text to stdout.
    #[default]
    Print,
    /// Report files that would change; exit 1 if any would.
    Check,
    /// Rewrite changed files in place.
    Write,
}

/// Parsed `fmt` arguments.
#[derive(Clone, Debug, Default)]
pub struct FmtOptions {
    pub model: ModelOptions,
    pub mode: OutputMode,
    pub files: Vec<PathBuf>,
}

/// Result of formatting a single file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Formatted {
    pub path: PathBuf,
    pub text: String,
    pub changed: bool,
}

pub fn parse_fmt_args(args: &[String]) -> Result<FmtOptions, CliError> {
    let mut options = FmtOptions::default();
    let mut rest = args.iter();
    while let Some(arg) = rest.next() {
        if options.model.accept(arg, &mut rest)? {
            continue;
        }
        match arg.as_str() {
            "--check" => options.mode = set_mode(options.mode, OutputMode::Check)?,
            "--write" => options.mode = set_mode(options.mode, OutputMode::Write)?,
            arg if arg.starts_with('-') => {
                return Err(CliError::Usage(format!(
                    "Unknown option: {arg}\nRun 'tessel help' for usage"
                )));
            }
            _ => options.files.push(PathBuf::from(arg)),
        }
    }
    if options.files.is_empty() {
        return Err(CliError::Usage(
            "Usage: tessel fmt --corpus <dir> [options] <files...>".to_string(),
        ));
    }
    options.model.corpus()?;
    // Analysis records are only for `explain`.
    options.model.config = options.model.config.with_analysis(false);
    Ok(options)
}

fn set_mode(current: OutputMode, mode: OutputMode) -> Result<OutputMode, CliError> {
    if current != OutputMode::Print && current != mode {
        return Err(CliError::Usage("Cannot use --check with --write".to_string()));
    }
    Ok(mode)
}

/// Format one file against `model`. Output always ends in a newline.
pub fn format_file(model: &Model, path: &Path, options: &FmtOptions) -> Result<Formatted, CliError> {
    let doc = load_document(path)?;
    let formatted = Formatter::new(model, BraceVocabulary, options.model.config)
        .format(&doc)
        .map_err(|source| CliError::Format {
            path: path.to_path_buf(),
            source,
        })?;
    let mut text = formatted.text;
    if !text.ends_with('\n') {
        text.push('\n');
    }
    Ok(Formatted {
        path: path.to_path_buf(),
        changed: text != doc.source,
        text,
    })
}

/// Run the format command. `Ok(false)` means some file failed or, with
/// `--check`, would change.
pub fn run_format(args: &[String]) -> Result<bool, CliError> {
    let options = parse_fmt_args(args)?;
    let model = options.model.train()?;
    debug!(files = options.files.len(), exemplars = model.corpus().len(), "formatting");

    let results: Vec<Result<Formatted, CliError>> = options
        .files
        .par_iter()
        .map(|path| format_file(&model, path, &options))
        .collect();

    let mut ok = true;
    let mut changed = 0;
    for result in results {
        let formatted = match result {
            Ok(formatted) => formatted,
            Err(err) => {
                eprintln!("error: {err}");
                ok = false;
                continue;
            }
        };
        match options.mode {
            OutputMode::Print => print!("{}", formatted.text),
            OutputMode::Check => {
                if formatted.changed {
                    println!("Would format: {}", formatted.path.display());
                    changed += 1;
                    ok = false;
                }
            }
            OutputMode::Write => {
                if formatted.changed {
                    std::fs::write(&formatted.path, &formatted.text).map_err(|source| {
                        CliError::Write {
                            path: formatted.path.clone(),
                            source,
                        }
                    })?;
                    println!("Formatted: {}", formatted.path.display());
                    changed += 1;
                }
            }
        }
    }

    if options.mode != OutputMode::Print && options.files.len() > 1 {
        let verb = if options.mode == OutputMode::Check {
            "would format"
        } else {
            "formatted"
        };
        println!("\n{changed} {verb}, {} unchanged", options.files.len() - changed);
    }
    Ok(ok)
}
