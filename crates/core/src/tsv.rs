//! Tab-separated record output.

use std::io::{self, Write};

use crate::record::Record;

/// Header line of the TSV output.
pub const TSV_HEADER: &str = "font\tcodepoint\tname";

/// Write records as `font<TAB>codepoint<TAB>name` lines with a header.
pub fn write_tsv<W: Write>(out: &mut W, records: &[Record]) -> io::Result<()> {
    writeln!(out, "{TSV_HEADER}")?;
    for record in records {
        writeln!(out, "{}\t{:04X}\t{}", record.font(), record.codepoint(), record.name())?;
    }
    Ok(())
}
