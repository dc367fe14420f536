//! Known icon fonts and font-family naming.

use std::path::Path;

/// An icon font with a fixed header prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KnownFont {
    /// Font family name as it appears in records.
    pub family: &'static str,
    /// C identifier prefix for the font's header table.
    pub prefix: &'static str,
}

/// Segoe MDL2 Assets, the default family for documents without a hint.
pub const SEGOE_MDL2: KnownFont =
    KnownFont { family: "Segoe MDL2 Assets", prefix: "kUwpcharMdl2" };

/// Segoe Fluent Icons.
pub const SEGOE_FLUENT: KnownFont =
    KnownFont { family: "Segoe Fluent Icons", prefix: "kUwpcharFluent" };

/// Fonts whose tables are always present in generated headers, in output order.
pub const KNOWN_FONTS: &[KnownFont] = &[SEGOE_MDL2, SEGOE_FLUENT];

/// Guess the font family of a documentation file from its name.
pub fn guess_font(path: &Path) -> &'static str {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    if name.contains("fluent") { SEGOE_FLUENT.family } else { SEGOE_MDL2.family }
}

/// C identifier prefix for a font family's header table.
///
/// Known fonts use their fixed prefix. Other families become `k` followed by
/// their ASCII alphanumeric words in PascalCase (`"Test Icons"` -> `kTestIcons`).
pub fn header_prefix(family: &str) -> String {
    if let Some(known) = KNOWN_FONTS.iter().find(|f| f.family == family) {
        return known.prefix.to_owned();
    }

    let mut prefix = String::from("k");
    for word in family.split(|c: char| !c.is_ascii_alphanumeric()).filter(|w| !w.is_empty()) {
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            if prefix.len() == 1 && first.is_ascii_digit() {
                prefix.push('_');
            }
            prefix.push(first.to_ascii_uppercase());
            prefix.push_str(chars.as_str());
        }
    }
    prefix
}
