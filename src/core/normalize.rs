//! Text normalization shared by queries and dictionary keys.
//!
//! - Lowercase conversion
//! - Unicode NFD decomposition
//! - Combining diacritical marks (U+0300..=U+036F) removed
//! - Leading/trailing whitespace trimmed
//!
//! Punctuation and inner whitespace are left untouched.

use unicode_normalization::UnicodeNormalization;

fn is_combining_diacritic(c: char) -> bool {
    ('\u{0300}'..='\u{036f}').contains(&c)
}

/// Normalize a product name or dictionary key for comparison.
///
/// ```
/// use catalog_core::core::normalize::normalize;
///
/// assert_eq!(normalize("  Túnel de Acrílico "), "tunel de acrilico");
/// ```
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    let stripped: String = lowered
        .nfd()
        .filter(|&c| !is_combining_diacritic(c))
        .collect();
    stripped.trim().to_string()
}
