//! The `explain` command: per-token analysis of one formatting run.

use std::path::PathBuf;

use tessel_fmt::Formatter;
use tessel_parse::BraceVocabulary;

use super::{load_document, CliError, ModelOptions};

/// Train, format `file` and print why every token landed where it did.
pub fn explain_file(args: &[String]) -> Result<(), CliError> {
    let mut model_options = ModelOptions::default();
    let mut file = None;
    let mut rest = args.iter();
    while let Some(arg) = rest.next() {
        if model_options.accept(arg, &mut rest)? {
            continue;
        }
        if arg.starts_with('-') || file.is_some() {
            return Err(CliError::Usage(
                "Usage: tessel explain --corpus <dir> [options] <file>".to_string(),
            ));
        }
        file = Some(PathBuf::from(arg));
    }
    let Some(path) = file else {
        return Err(CliError::Usage(
            "Usage: tessel explain --corpus <dir> [options] <file>".to_string(),
        ));
    };

    let model = model_options.train()?;
    let doc = load_document(&path)?;
    let config = model_options.config.with_analysis(true);
    let formatted = Formatter::new(&model, BraceVocabulary, config)
        .format(&doc)
        .map_err(|source| CliError::Format {
            path: path.clone(),
            source,
        })?;

    println!(
        "Analysis for '{}' ({} exemplars, k={}, threshold={}):",
        path.display(),
        model.corpus().len(),
        config.k,
        config.max_context_distance
    );
    let mut mismatches = 0;
    for analysis in formatted.analyses() {
        println!();
        print!("{analysis}");
        if !analysis.matches_observed() {
            mismatches += 1;
        }
    }
    println!();
    println!(
        "{} tokens decided, {mismatches} differ from the input layout",
        formatted.analyses().count()
    );
    println!();
    println!("{}", formatted.text);
    Ok(())
}
