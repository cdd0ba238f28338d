//! Helpers for rendering command output.

use std::io::Write;

use eyre::{Context, Result};
use furrow::{Feature, Token, dump};

/// Write one tab-separated line per token: line, kind, keyword, text.
///
/// Newlines, tabs and backslashes in the text are escaped so every token
/// stays on one line.
pub fn write_tokens(writer: &mut dyn Write, tokens: &[Token]) -> Result<()> {
    for token in tokens {
        writeln!(
            writer,
            "{}\t{}\t{}\t{}",
            token.line,
            token.kind,
            token.keyword,
            escape(&token.text)
        )
        .wrap_err_with(|| format!("failed to write token at line {}", token.line))?;
    }
    Ok(())
}

/// Write the indented text dump of `features`.
pub fn write_tree(writer: &mut dyn Write, features: &[Feature]) -> Result<()> {
    write!(writer, "{}", dump::Dump(features)).wrap_err("failed to write feature tree")
}

/// Write `features` as pretty-printed JSON followed by a newline.
pub fn write_json(writer: &mut dyn Write, features: &[Feature]) -> Result<()> {
    serde_json::to_writer_pretty(&mut *writer, features)
        .wrap_err("failed to serialise feature tree")?;
    writeln!(writer).wrap_err("failed to terminate JSON output")
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            other => out.push(other),
        }
    }
    out
}
