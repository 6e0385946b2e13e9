//! Text normalization for topic search.
//!
//! Search must be lenient on accents, casing, and whitespace so that a user
//! typing `"kotlin coroutines"` or `"clean  architécture"` still finds the
//! matching topic title.

use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

/// Normalize a string for search comparison.
///
/// Applies the following transformations in order:
/// 1. Lowercase
/// 2. Ligature expansion (e.g. `ß` -> `ss`)
/// 3. Unicode NFD decomposition to separate base characters from combining marks
/// 4. Strip combining marks
/// 5. Collapse and trim whitespace
///
/// Punctuation and symbols are kept, so `"C++"` only matches titles that
/// contain `c++`.
pub fn normalize_for_search(s: &str) -> String {
    s.to_lowercase()
        .replace('ß', "ss")
        .replace('æ', "ae")
        .replace('œ', "oe")
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Whether `needle` occurs in `haystack` after both are normalized
///
/// An empty needle matches everything.
pub fn contains_normalized(haystack: &str, needle: &str) -> bool {
    let needle = normalize_for_search(needle);
    if needle.is_empty() {
        return true;
    }
    normalize_for_search(haystack).contains(&needle)
}
