//! Glyph table extraction from documentation markdown.
//!
//! Rows look like:
//!
//! ```text
//! | &#xE700; | E700 | :::no-loc text="GlobalNavigationButton"::: |
//! ```
//!
//! Header, separator and otherwise unparseable rows are skipped silently.

use std::{path::Path, sync::LazyLock};

use anyhow::Result;
use log::debug;
use regex::Regex;

use crate::{io::read_document, record::Record};

static ROW: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\|(.+)\|\s*$").expect("valid row pattern"));
static NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#":::no-loc\s+text="([^"]+)":::"#).expect("valid name pattern")
});
static HEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[0-9a-fA-F]{4,6}\b").expect("valid codepoint pattern"));

/// Extract records for `font` from markdown text.
pub fn parse_markdown(text: &str, font: &str) -> Vec<Record> {
    text.lines().filter_map(|line| parse_row(line, font)).collect()
}

/// Read a markdown file and extract its records.
pub fn parse_file(path: &Path, font: &str) -> Result<Vec<Record>> {
    let text = read_document(path)?;
    let records = parse_markdown(&text, font);
    debug!("{}: {} rows for {font}", path.display(), records.len());
    Ok(records)
}

fn parse_row(line: &str, font: &str) -> Option<Record> {
    let inner = ROW.captures(line)?.get(1)?.as_str();
    let cols: Vec<&str> = inner.split('|').map(str::trim).collect();
    if cols.len() < 3 || is_header(&cols) {
        return None;
    }

    let hex = HEX.find(cols[1])?;
    let name = NAME.captures(cols[2])?.get(1)?.as_str().trim();
    if name.is_empty() {
        return None;
    }
    let codepoint = u32::from_str_radix(hex.as_str(), 16).ok()?;
    Some(Record::new(codepoint, name, font))
}

fn is_header(cols: &[&str]) -> bool {
    cols[0].to_lowercase().starts_with("glyph") || cols[1].to_lowercase().starts_with("unicode")
}
