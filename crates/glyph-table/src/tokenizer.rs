//! CamelCase and digit aware name splitting.

/// Split a glyph name into sub-word tokens.
///
/// A token is one of:
/// - an uppercase run followed by an uppercase-then-lowercase pair, a digit, or
///   the end of the name (`"PDF"` in `"PDFReader"`),
/// - an optional capital followed by lowercase letters (`"Chevron"`, `"alt"`),
/// - a run of digits.
///
/// Bytes that start none of these (spaces, punctuation, non-ASCII) are skipped.
pub fn tokenize(name: &str) -> Vec<&str> {
    let bytes = name.as_bytes();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        match match_at(bytes, i) {
            Some(len) => {
                tokens.push(&name[i..i + len]);
                i += len;
            }
            None => i += 1,
        }
    }

    tokens
}

/// Length of the token starting at `start`, if one does.
fn match_at(bytes: &[u8], start: usize) -> Option<usize> {
    acronym(bytes, start)
        .or_else(|| word(bytes, start))
        .or_else(|| run(bytes, start, u8::is_ascii_digit))
}

fn acronym(bytes: &[u8], start: usize) -> Option<usize> {
    let upper = run(bytes, start, u8::is_ascii_uppercase)?;
    let end = start + upper;

    match bytes.get(end) {
        None => Some(upper),
        Some(b) if b.is_ascii_digit() => Some(upper),
        // The last capital begins the next word ("PDFReader" -> "PDF").
        Some(b) if b.is_ascii_lowercase() && upper >= 2 => Some(upper - 1),
        _ => None,
    }
}

fn word(bytes: &[u8], start: usize) -> Option<usize> {
    let capital = usize::from(bytes[start].is_ascii_uppercase());
    let lower = run(bytes, start + capital, u8::is_ascii_lowercase)?;
    Some(capital + lower)
}

fn run(bytes: &[u8], start: usize, class: fn(&u8) -> bool) -> Option<usize> {
    let len = bytes.get(start..)?.iter().take_while(|&b| class(b)).count();
    (len > 0).then_some(len)
}
