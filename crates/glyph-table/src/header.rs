//! C header serialization of dense tables.
//!
//! Every table is emitted under a caller-chosen identifier prefix `P`:
//! `PBase`, `PCount`, `PTokens`, `PTokenCount`, `PTokenIndexU8`,
//! `PTokenIndexT`, `PNameTokenOffset`, `PNameTokenCount` and `PTokenIndex`.

use std::{fmt::Display, io::Write};

use crate::{DenseTable, Result};

/// Write the include guard and standard includes.
pub fn write_preamble<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "#pragma once")?;
    writeln!(out, "#include <stdint.h>")?;
    writeln!(out)?;
    Ok(())
}

/// Write all declarations for one table.
///
/// Only tables with `count == 0` get placeholder elements. A table whose names
/// produced no tokens writes `PTokens` and `PTokenIndex` with empty initializers.
pub fn write_table<W: Write>(out: &mut W, table: &DenseTable, prefix: &str) -> Result<()> {
    if table.is_empty() {
        return write_empty_table(out, prefix);
    }

    writeln!(out, "static const uint32_t {prefix}Base = 0x{:04X};", table.base())?;
    writeln!(out, "static const uint32_t {prefix}Count = 0x{:04X};", table.count())?;

    writeln!(out, "static const char *{prefix}Tokens[] = {{")?;
    for token in table.tokens().tokens() {
        writeln!(out, "    \"{}\",", escape_c_string(token))?;
    }
    writeln!(out, "}};")?;
    writeln!(out, "static const uint16_t {prefix}TokenCount = {};", table.tokens().len())?;
    writeln!(out)?;

    let width = table.index_width();
    writeln!(out, "#define {prefix}TokenIndexU8 {}", u8::from(width.is_u8()))?;
    writeln!(out, "typedef {} {prefix}TokenIndexT;", width.c_type())?;

    write_array(out, "uint32_t", &format!("{prefix}NameTokenOffset"), table.offsets())?;
    write_array(out, "uint8_t", &format!("{prefix}NameTokenCount"), table.lengths())?;
    write_array(
        out,
        &format!("{prefix}TokenIndexT"),
        &format!("{prefix}TokenIndex"),
        table.stream(),
    )?;
    writeln!(out)?;
    Ok(())
}

/// Zero-sized declarations; arrays hold a single placeholder so they stay valid C.
fn write_empty_table<W: Write>(out: &mut W, prefix: &str) -> Result<()> {
    writeln!(out, "static const uint32_t {prefix}Base = 0;")?;
    writeln!(out, "static const uint32_t {prefix}Count = 0;")?;
    writeln!(out, "#define {prefix}TokenIndexU8 1")?;
    writeln!(out, "typedef uint8_t {prefix}TokenIndexT;")?;
    writeln!(out, "static const uint32_t {prefix}NameTokenOffset[] = {{ 0 }};")?;
    writeln!(out, "static const uint8_t {prefix}NameTokenCount[] = {{ 0 }};")?;
    writeln!(out, "static const {prefix}TokenIndexT {prefix}TokenIndex[] = {{ 0 }};")?;
    writeln!(out, "static const char *{prefix}Tokens[] = {{ 0 }};")?;
    writeln!(out)?;
    Ok(())
}

fn write_array<W: Write, T: Display>(
    out: &mut W,
    ty: &str,
    name: &str,
    values: &[T],
) -> Result<()> {
    writeln!(out, "static const {ty} {name}[] = {{")?;
    for value in values {
        writeln!(out, "    {value},")?;
    }
    writeln!(out, "}};")?;
    Ok(())
}

/// Escape backslashes and double quotes for a C string literal.
pub fn escape_c_string(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(table: &DenseTable, prefix: &str) -> String {
        let mut out = Vec::new();
        write_table(&mut out, table, prefix).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape_c_string(r#"a"b\c"#), r#"a\"b\\c"#);
        assert_eq!(escape_c_string("Home"), "Home");
    }

    #[test]
    fn test_preamble() {
        let mut out = Vec::new();
        write_preamble(&mut out).unwrap();
        assert_eq!(out, b"#pragma once\n#include <stdint.h>\n\n");
    }

    #[test]
    fn test_empty_table() {
        let text = render(&DenseTable::empty(), "kEmpty");
        assert_eq!(
            text,
            "static const uint32_t kEmptyBase = 0;\n\
             static const uint32_t kEmptyCount = 0;\n\
             #define kEmptyTokenIndexU8 1\n\
             typedef uint8_t kEmptyTokenIndexT;\n\
             static const uint32_t kEmptyNameTokenOffset[] = { 0 };\n\
             static const uint8_t kEmptyNameTokenCount[] = { 0 };\n\
             static const kEmptyTokenIndexT kEmptyTokenIndex[] = { 0 };\n\
             static const char *kEmptyTokens[] = { 0 };\n\n"
        );
    }

    #[test]
    fn test_table() {
        let table = DenseTable::encode([(0xE700, "Home"), (0xE701, "Settings16")]).unwrap();
        let text = render(&table, "kTest");
        assert_eq!(
            text,
            "static const uint32_t kTestBase = 0xE700;\n\
             static const uint32_t kTestCount = 0x0002;\n\
             static const char *kTestTokens[] = {\n    \"16\",\n    \"Home\",\n\
             \x20   \"Settings\",\n};\n\
             static const uint16_t kTestTokenCount = 3;\n\n\
             #define kTestTokenIndexU8 1\n\
             typedef uint8_t kTestTokenIndexT;\n\
             static const uint32_t kTestNameTokenOffset[] = {\n    0,\n    1,\n};\n\
             static const uint8_t kTestNameTokenCount[] = {\n    1,\n    2,\n};\n\
             static const kTestTokenIndexT kTestTokenIndex[] = {\n    1,\n    2,\n    0,\n};\n\n"
        );
    }

    #[test]
    fn test_tokenless_group_has_empty_initializers() {
        let table = DenseTable::encode([(0x10, "--")]).unwrap();
        let text = render(&table, "kDash");
        assert!(text.contains("static const uint32_t kDashCount = 0x0001;\n"));
        assert!(text.contains("static const char *kDashTokens[] = {\n};\n"));
        assert!(text.contains("static const uint16_t kDashTokenCount = 0;\n"));
        assert!(text.contains("static const uint8_t kDashNameTokenCount[] = {\n    0,\n};\n"));
        assert!(text.contains("static const kDashTokenIndexT kDashTokenIndex[] = {\n};\n"));
    }

    #[test]
    fn test_wide_index() {
        let names: Vec<(u32, String)> = (0..256u32).map(|i| (i, format!("Tok{i}"))).collect();
        let text = render(&DenseTable::encode(names).unwrap(), "kWide");
        assert!(text.contains("#define kWideTokenIndexU8 0\n"));
        assert!(text.contains("typedef uint16_t kWideTokenIndexT;\n"));
    }
}
