//! Command handlers for the Tessel CLI.
//!
//! Each submodule implements one command. Corpus discovery, training and the
//! model flags shared by `fmt` and `explain` live here in the module root.

use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tessel_fmt::{FormatConfig, FormatError, Model, ModelError};
use tessel_ir::InputDocument;
use tessel_parse::{parse_document, DocumentError};
use tracing::debug;

mod debug;
mod explain;
mod fmt;

pub use debug::{lex_file, parse_file};
pub use explain::explain_file;
pub use fmt::{parse_fmt_args, run_format, FmtOptions, OutputMode};

/// Everything a command can fail with.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),
    #[error("invalid value {value:?} for {flag}")]
    InvalidValue { flag: &'static str, value: String },
    #[error("error reading '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("error writing '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("no .{ext} files under '{}'", corpus.display())]
    EmptyCorpus { corpus: PathBuf, ext: String },
    #[error(transparent)]
    Document(#[from] DocumentError),
    #[error(transparent)]
    Model(#[from] ModelError),
    #[error("{}: {source}", path.display())]
    Format {
        path: PathBuf,
        #[source]
        source: FormatError,
    },
}

/// Flags that pick and tune the model.
#[derive(Clone, Debug)]
pub struct ModelOptions {
    pub corpus: Option<PathBuf>,
    pub ext: String,
    pub config: FormatConfig,
}

impl Default for ModelOptions {
    fn default() -> Self {
        ModelOptions {
            corpus: None,
            ext: "java".to_string(),
            config: FormatConfig::default(),
        }
    }
}

impl ModelOptions {
    /// Consume `arg` (and its value, taken from `rest` unless written as
    /// `--flag=value`) if it is a model flag. Returns `false` for anything
    /// else.
    pub fn accept<'a>(
        &mut self,
        arg: &str,
        rest: &mut impl Iterator<Item = &'a String>,
    ) -> Result<bool, CliError> {
        let (flag, inline) = match arg.split_once('=') {
            Some((flag, value)) => (flag, Some(value.to_string())),
            None => (arg, None),
        };
        let flag: &'static str = match flag {
            "--corpus" => "--corpus",
            "--ext" => "--ext",
            "--k" => "--k",
            "--threshold" => "--threshold",
            "--indent" => "--indent",
            "--tab-size" => "--tab-size",
            _ => return Ok(false),
        };
        let Some(value) = inline.or_else(|| rest.next().cloned()) else {
            return Err(CliError::Usage(format!("missing value for {flag}")));
        };

        match flag {
            "--corpus" => self.corpus = Some(PathBuf::from(value)),
            "--ext" => self.ext = value.trim_start_matches('.').to_string(),
            "--k" => {
                let k = parse_number::<usize>(flag, &value)?;
                if k == 0 {
                    return Err(CliError::InvalidValue { flag, value });
                }
                self.config = self.config.with_k(k);
            }
            "--threshold" => {
                let threshold = parse_number::<f64>(flag, &value)?;
                if !(0.0..=1.0).contains(&threshold) {
                    return Err(CliError::InvalidValue { flag, value });
                }
                self.config = self.config.with_max_context_distance(threshold);
            }
            "--indent" => self.config = self.config.with_indent_width(parse_number(flag, &value)?),
            _ => self.config = self.config.with_tab_size(parse_number(flag, &value)?),
        }
        Ok(true)
    }

    /// The corpus directory; required by every command that trains.
    pub fn corpus(&self) -> Result<&Path, CliError> {
        self.corpus
            .as_deref()
            .ok_or_else(|| CliError::Usage("missing --corpus <dir>".to_string()))
    }

    /// Load every corpus document and train a model on it.
    pub fn train(&self) -> Result<Model, CliError> {
        let corpus = self.corpus()?;
        let paths = corpus_files(corpus, &self.ext)?;
        if paths.is_empty() {
            return Err(CliError::EmptyCorpus {
                corpus: corpus.to_path_buf(),
                ext: self.ext.clone(),
            });
        }
        let documents = paths
            .par_iter()
            .map(|path| load_document(path))
            .collect::<Result<Vec<_>, _>>()?;
        debug!(corpus = %corpus.display(), documents = documents.len(), "corpus loaded");
        Ok(Model::train(&documents, &self.config)?)
    }
}

fn parse_number<T: std::str::FromStr>(flag: &'static str, value: &str) -> Result<T, CliError> {
    value.parse().map_err(|_| CliError::InvalidValue {
        flag,
        value: value.to_string(),
    })
}

pub(crate) fn read_file(path: &Path) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })
}

pub(crate) fn load_document(path: &Path) -> Result<InputDocument, CliError> {
    let source = read_file(path)?;
    Ok(parse_document(path.display().to_string(), source)?)
}

/// Every `*.{ext}` file under `dir`, recursively, sorted. Hidden entries and
/// `target` directories are skipped.
pub fn corpus_files(dir: &Path, ext: &str) -> Result<Vec<PathBuf>, CliError> {
    let mut files = Vec::new();
    visit(dir, ext, &mut files)?;
    files.sort();
    Ok(files)
}

fn visit(dir: &Path, ext: &str, files: &mut Vec<PathBuf>) -> Result<(), CliError> {
    let entries = std::fs::read_dir(dir).map_err(|source| CliError::Read {
        path: dir.to_path_buf(),
        source,
    })?;
    for entry in entries.flatten() {
        let path = entry.path();
        if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            if name.starts_with('.') || name == "target" {
                continue;
            }
        }
        if path.is_dir() {
            visit(&path, ext, files)?;
        } else if path.extension().is_some_and(|e| e == ext) {
            files.push(path);
        }
    }
    Ok(())
}
