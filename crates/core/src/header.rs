//! C header assembly for a whole record set.

use std::{collections::HashMap, io::Write};

use anyhow::{Context, Result, bail};
use glyph_table::{DenseTable, header};
use indexmap::IndexMap;
use log::debug;

use crate::{
    fonts::{KNOWN_FONTS, header_prefix},
    record::Record,
};

/// Write one dense table per font group.
///
/// Known fonts come first and are always emitted, even without records. Other
/// families follow in the order they appear in `records`. Fails if two families
/// map to the same identifier prefix.
pub fn write_header<W: Write>(out: &mut W, records: &[Record]) -> Result<()> {
    let mut groups: IndexMap<&str, Vec<(u32, &str)>> =
        KNOWN_FONTS.iter().map(|font| (font.family, Vec::new())).collect();
    for record in records {
        groups.entry(record.font()).or_default().push((record.codepoint(), record.name()));
    }

    let mut owners: HashMap<String, &str> = HashMap::new();
    for &family in groups.keys() {
        let prefix = header_prefix(family);
        if let Some(other) = owners.get(&prefix) {
            bail!("Fonts \"{other}\" and \"{family}\" share the header prefix {prefix}");
        }
        owners.insert(prefix, family);
    }

    header::write_preamble(out)?;
    for (family, entries) in groups {
        let prefix = header_prefix(family);
        let table = DenseTable::encode(entries)
            .with_context(|| format!("Failed to encode table for {family}"))?;
        let tokens = table.tokens();
        debug!(
            "{prefix}: base={:#06X} count={} tokens={} top={:?}x{}",
            table.base(),
            table.count(),
            tokens.len(),
            tokens.token(0).unwrap_or_default(),
            tokens.occurrences(0).unwrap_or_default()
        );
        header::write_table(out, &table, &prefix)?;
    }
    Ok(())
}
