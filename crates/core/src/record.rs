//! Glyph name records.

use indexmap::{IndexMap, map::Entry};

/// One glyph name mapping extracted from documentation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Record {
    codepoint: u32,
    name: String,
    font: String,
}

impl Record {
    pub fn new(codepoint: u32, name: impl Into<String>, font: impl Into<String>) -> Self {
        Self { codepoint, name: name.into(), font: font.into() }
    }

    pub fn codepoint(&self) -> u32 {
        self.codepoint
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn font(&self) -> &str {
        &self.font
    }
}

/// Drop repeated `(codepoint, font)` pairs, keeping the first, then sort by
/// `(font, codepoint)`.
pub fn normalize(records: impl IntoIterator<Item = Record>) -> Vec<Record> {
    let mut unique: IndexMap<(u32, String), Record> = IndexMap::new();
    for record in records {
        if let Entry::Vacant(slot) = unique.entry((record.codepoint, record.font.clone())) {
            slot.insert(record);
        }
    }

    let mut records: Vec<Record> = unique.into_values().collect();
    records.sort_by(|a, b| a.font.cmp(&b.font).then(a.codepoint.cmp(&b.codepoint)));
    records
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_name_wins() {
        let records = normalize([
            Record::new(0xE700, "Home", "Icons"),
            Record::new(0xE700, "House", "Icons"),
        ]);
        assert_eq!(records, [Record::new(0xE700, "Home", "Icons")]);
    }

    #[test]
    fn test_same_codepoint_in_different_fonts() {
        let records =
            normalize([Record::new(0xE700, "Home", "B"), Record::new(0xE700, "Start", "A")]);
        assert_eq!(records, [Record::new(0xE700, "Start", "A"), Record::new(0xE700, "Home", "B")]);
    }

    #[test]
    fn test_sorted_by_font_then_codepoint() {
        let records = normalize([
            Record::new(0xE702, "C", "Icons"),
            Record::new(0xE700, "A", "Icons"),
            Record::new(0x10, "Z", "Glyphs"),
            Record::new(0xE701, "B", "Icons"),
        ]);
        let keys: Vec<(&str, u32)> = records.iter().map(|r| (r.font(), r.codepoint())).collect();
        assert_eq!(
            keys,
            [("Glyphs", 0x10), ("Icons", 0xE700), ("Icons", 0xE701), ("Icons", 0xE702)]
        );
    }
}
