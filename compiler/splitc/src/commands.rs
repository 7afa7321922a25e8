//! `splitc` commands.

use std::fmt::Write as _;

use split_lexer_core::{Granularity, ScanOptions, Scanner, TokenKind};
use tracing::debug;

/// Print every token of the file at `path`.
pub fn lex_file(path: &str, granularity: Granularity) {
    let content = read_file(path);
    print!("{}", render_tokens(path, &content, granularity));
}

/// Print per-kind token counts and the final scan state of the file at `path`.
pub fn stats_file(path: &str) {
    let content = read_file(path);
    print!("{}", render_stats(path, &content));
}

/// Token listing, one token per line with its span and text.
pub fn render_tokens(path: &str, source: &str, granularity: Granularity) -> String {
    let options = ScanOptions::default().with_granularity(granularity);
    let mut scanner = Scanner::with_options(source, options);
    let mut lines = Vec::new();
    while let Some(token) = scanner.advance() {
        lines.push(format!(
            "  {:?} @ {} {:?}",
            token.kind,
            token.span,
            scanner.token_text()
        ));
    }

    let mut out = format!("Tokens for '{}' ({} tokens):\n", path, lines.len());
    for line in lines {
        out.push_str(&line);
        out.push('\n');
    }
    out
}

const KINDS: [TokenKind; 4] = [
    TokenKind::PlainContent,
    TokenKind::LineComment,
    TokenKind::BlockComment,
    TokenKind::DocComment,
];

/// Summary of a scan: tokens and bytes per kind, then the final state.
pub fn render_stats(path: &str, source: &str) -> String {
    let mut tokens = [0usize; KINDS.len()];
    let mut bytes = [0u64; KINDS.len()];
    let mut scanner = Scanner::new(source);
    while let Some(token) = scanner.advance() {
        let slot = token.kind as usize;
        tokens[slot] += 1;
        bytes[slot] += u64::from(token.len());
    }

    let mut out = String::new();
    let _ = writeln!(out, "Stats for '{path}' ({} bytes):", source.len());
    for kind in KINDS {
        let slot = kind as usize;
        let _ = writeln!(
            out,
            "  {:<14} {:>6} tokens {:>8} bytes",
            kind.name(),
            tokens[slot],
            bytes[slot]
        );
    }

    let state = scanner.state();
    if state.depth() == 0 {
        let _ = writeln!(out, "Final state: {:?}", state.mode());
    } else {
        let _ = writeln!(
            out,
            "Final state: {:?}, depth {}, {:?} comment",
            state.mode(),
            state.depth(),
            state.kind()
        );
        let _ = writeln!(
            out,
            "warning: end of input inside an unterminated {}",
            state.kind().token_kind()
        );
    }
    out
}

fn read_file(path: &str) -> String {
    match std::fs::read_to_string(path) {
        Ok(content) => {
            debug!(path, bytes = content.len(), "read source");
            content
        }
        Err(e) => {
            let msg = match e.kind() {
                std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
                std::io::ErrorKind::PermissionDenied => {
                    format!("permission denied reading '{path}'")
                }
                std::io::ErrorKind::InvalidData => {
                    format!("'{path}' contains invalid UTF-8 data")
                }
                _ => format!("error reading '{path}': {e}"),
            };
            eprintln!("{msg}");
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests;
