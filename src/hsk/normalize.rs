//! Word token normalization

/// Normalize one raw word-list line into a lookup key.
///
/// Trims surrounding whitespace, then strips all trailing ASCII decimal
/// digits. The source lists append digit suffixes to distinguish senses of
/// a homograph (`本1`, `本2`); the digits carry no meaning in the lookup
/// table. A word whose spelling legitimately ends in digits loses them
/// too; the lists contain none, so the simple rule stands.
///
/// Returns `None` when nothing remains (blank line, or digits only).
pub fn normalize(line: &str) -> Option<&str> {
    let word = line
        .trim()
        .trim_end_matches(|c: char| c.is_ascii_digit());
    if word.is_empty() {
        None
    } else {
        Some(word)
    }
}
