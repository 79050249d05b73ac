//! Normalization of raw input text.

/// Normalize a raw input line: surrounding whitespace removed, lower-cased.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}
