// Clause extraction utilities for red-flag detection
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref GOVERNING_LAW_RE: Regex = Regex::new(
        r"governed by(?: and construed in accordance with)? the laws? of ([a-z][a-z ]*)"
    )
    .expect("governing-law pattern is valid");
}

/// Extracts the body named in a "governed by the laws of ..." clause.
/// Returns the lowercased name if such a clause is present.
pub fn extract_governing_law(text: &str) -> Option<String> {
    let text_lower = text.to_lowercase();
    GOVERNING_LAW_RE
        .captures(&text_lower)
        .and_then(|caps| caps.get(1))
        .map(|name| name.as_str().trim().to_string())
}
