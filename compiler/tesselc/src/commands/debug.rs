//! Debug commands: `lex` and `parse` for inspecting the reference frontend.

use std::path::Path;

use tessel_ir::{NodeId, NodeKind, SyntaxTree, TokenStream, Vocabulary};
use tessel_parse::{ensure_sufficient_stack, parse_document, BraceVocabulary};

use super::{read_file, CliError};

/// Lex a file and display the token stream, hidden tokens included.
pub fn lex_file(path: &str) -> Result<(), CliError> {
    let source = read_file(Path::new(path))?;
    let tokens = tessel_lexer::lex(&source).map_err(|source| {
        CliError::Document(tessel_parse::DocumentError::Lex {
            name: path.to_string(),
            source,
        })
    })?;

    println!("Tokens for '{path}' ({} tokens):", tokens.len());
    for token in tokens.iter() {
        let position = token
            .position
            .map(|p| format!("{}:{}", p.line, p.column))
            .unwrap_or_default();
        let channel = if token.is_real() { "" } else { " (hidden)" };
        println!(
            "  {} {} {:?} @ {} {position}{channel}",
            token.index,
            BraceVocabulary.token_name(token.kind),
            token.text,
            token.span
        );
    }
    Ok(())
}

/// Parse a file and display the syntax tree as an indented outline.
pub fn parse_file(path: &str) -> Result<(), CliError> {
    let source = read_file(Path::new(path))?;
    let doc = parse_document(path, source)?;

    println!("Syntax tree for '{path}' ({} nodes):", doc.tree.len());
    let mut out = String::new();
    outline(&doc.tree, &doc.tokens, doc.tree.root(), 1, &mut out);
    print!("{out}");
    Ok(())
}

fn outline(tree: &SyntaxTree, tokens: &TokenStream, node: NodeId, depth: usize, out: &mut String) {
    let indent = "  ".repeat(depth);
    match tree.node(node).kind {
        NodeKind::Leaf(idx) => {
            let text = tokens.get(idx).map_or("", |t| t.text.as_str());
            out.push_str(&format!("{indent}{text:?} {idx}\n"));
        }
        NodeKind::Rule(kind) => {
            out.push_str(&format!("{indent}{}\n", BraceVocabulary.rule_name(kind)));
            for &child in tree.children(node) {
                ensure_sufficient_stack(|| outline(tree, tokens, child, depth + 1, out));
            }
        }
    }
}
