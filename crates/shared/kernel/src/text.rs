//! Text normalization shared by the generator, the trademark classifier and the
//! availability checks.

/// Lowercases and trims a keyword; `None` when nothing is left.
#[must_use]
pub fn normalize_keyword(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_lowercase())
}

/// Splits free text on whitespace into normalized keywords.
#[must_use]
pub fn split_keywords(input: &str) -> Vec<String> {
    input.split_whitespace().filter_map(normalize_keyword).collect()
}

/// Uppercases the first character and leaves the rest untouched.
#[must_use]
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| first.to_uppercase().chain(chars).collect())
}

/// Lowercases, then keeps ASCII letters and digits only. Used for domain labels,
/// handles and trademark comparison.
#[must_use]
pub fn clean_alphanumeric(name: &str) -> String {
    name.to_lowercase().chars().filter(char::is_ascii_alphanumeric).collect()
}
