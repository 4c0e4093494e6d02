//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fs;
use std::path::Path;

use pasc_syntax::parser::{self, Parse};
use pasc_syntax::resolver;
use pasc_syntax::tree::{NodeId, NodeKind, SyntaxTree};

use super::{CliError, CliResult, ExitCode};

/// Read and parse a source file.
fn load(path: &Path) -> CliResult<(String, Parse)> {
    let source = fs::read_to_string(path)
        .map_err(|e| CliError::failure(format!("cannot read {}: {}", path.display(), e)))?;
    let parse = parser::parse(&source);
    tracing::debug!(
        file = %path.display(),
        bytes = source.len(),
        diagnostics = parse.diagnostics.len(),
        "parsed"
    );
    Ok((source, parse))
}

fn file_name(path: &Path) -> String {
    path.display().to_string()
}

/// Parse a file and report its diagnostics with source context.
pub fn check_file(path: &Path) -> CliResult<ExitCode> {
    let (source, parse) = load(path)?;

    if parse.diagnostics.is_empty() {
        println!("{}: ok", file_name(path));
        return Ok(ExitCode::SUCCESS);
    }

    let name = file_name(path);
    for diagnostic in &parse.diagnostics {
        let report = miette::Report::new(diagnostic.to_report(&name, &source));
        eprintln!("{:?}", report);
    }
    eprintln!(
        "{}: {} diagnostic(s)",
        name,
        parse.diagnostics.len()
    );
    Ok(ExitCode::FAILURE)
}

/// Parse a file and print the tree structure.
pub fn dump_file(path: &Path) -> CliResult<ExitCode> {
    let (_, parse) = load(path)?;

    print!("{}", parse.tree.dump());
    if !parse.diagnostics.is_empty() {
        eprintln!("{}: {} diagnostic(s)", file_name(path), parse.diagnostics.len());
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

/// Resolve the identifier covering `offset` to its declaration.
pub fn resolve_at(path: &Path, offset: usize) -> CliResult<ExitCode> {
    let (source, parse) = load(path)?;
    let tree = &parse.tree;

    let use_site = identifier_at(tree, offset).ok_or_else(|| {
        CliError::failure(format!("no identifier at byte offset {} in {}", offset, file_name(path)))
    })?;

    let name = tree.identifier_text(use_site).unwrap_or_default();
    match resolver::resolve(tree, use_site) {
        Some(declaration) => {
            let span = tree.span(declaration);
            let (line, column) = line_column(&source, span.start);
            println!(
                "{} -> declared at {}:{}:{} ({}..{})",
                name,
                file_name(path),
                line,
                column,
                span.start,
                span.end
            );
        }
        None => println!("{} -> unresolved", name),
    }
    Ok(ExitCode::SUCCESS)
}

/// The `Identifier` node whose range covers `offset`, if any.
fn identifier_at(tree: &SyntaxTree, offset: usize) -> Option<NodeId> {
    tree.nodes()
        .find(|&n| tree.kind(n) == NodeKind::Identifier && tree.span(n).contains(offset))
}

/// 1-based line and column for a byte offset.
fn line_column(source: &str, offset: usize) -> (usize, usize) {
    let offset = offset.min(source.len());
    let mut line = 1;
    let mut line_start = 0;
    for (i, c) in source.char_indices() {
        if i >= offset {
            break;
        }
        if c == '\n' {
            line += 1;
            line_start = i + 1;
        }
    }
    (line, offset - line_start + 1)
}
