//! Tessel CLI
//!
//! Corpus-trained code formatter.

use tesselc::commands::{explain_file, lex_file, parse_file, run_format, CliError};

fn main() {
    tesselc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let result = match args[1].as_str() {
        "fmt" => run_format(&args[2..]),
        "explain" => explain_file(&args[2..]).map(|()| true),
        "lex" => single_path(&args, "lex").and_then(|path| lex_file(path).map(|()| true)),
        "parse" => single_path(&args, "parse").and_then(|path| parse_file(path).map(|()| true)),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(true)
        }
        "--version" | "-V" => {
            println!("tessel {}", env!("CARGO_PKG_VERSION"));
            Ok(true)
        }
        other => {
            eprintln!("Unknown command: {other}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    };

    match result {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}

fn single_path<'a>(args: &'a [String], command: &str) -> Result<&'a str, CliError> {
    match args.get(2) {
        Some(path) if args.len() == 3 => Ok(path),
        _ => Err(CliError::Usage(format!("Usage: tessel {command} <file>"))),
    }
}

fn print_usage() {
    println!("Tessel - corpus-trained code formatter");
    println!();
    println!("Usage: tessel <command> [options]");
    println!();
    println!("Commands:");
    println!("  fmt --corpus <dir> <files...>      Format files like the corpus");
    println!("  explain --corpus <dir> <file>      Show why each token was placed");
    println!("  lex <file>                         Dump the token stream");
    println!("  parse <file>                       Dump the syntax tree");
    println!();
    println!("Model options (fmt, explain):");
    println!("  --corpus <dir>      Directory of already-formatted sources");
    println!("  --ext <ext>         Corpus file extension (default: java)");
    println!("  --k <n>             Neighbours per vote (default: 11)");
    println!("  --threshold <f>     Maximum context distance (default: 0.4)");
    println!("  --indent <n>        Indent width in columns (default: 4)");
    println!("  --tab-size <n>      Tab width in columns (default: 4)");
    println!();
    println!("Set RUST_LOG (e.g. RUST_LOG=tessel_fmt=debug) for tracing output.");
}
