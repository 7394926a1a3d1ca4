// crates/dinedb-core/src/text.rs

/// Lowercase a display string into the form used for substring matching.
///
/// Matching is case-insensitive only: accents and other diacritics are kept,
/// so `"café"` does not match `"cafe"`.
///
/// ```rust
/// use dinedb_core::text::fold_key;
///
/// assert_eq!(fold_key("Little Tokyo"), "little tokyo");
/// ```
#[inline]
pub fn fold_key(s: &str) -> String {
    s.to_lowercase()
}

/// Normalize user input for a filter stage.
///
/// Trims surrounding whitespace and lowercases the rest. Returns `None` when
/// nothing is left, which callers treat as "stage disabled".
///
/// ```rust
/// use dinedb_core::text::normalize_query;
///
/// assert_eq!(normalize_query("  Sushi "), Some("sushi".to_string()));
/// assert_eq!(normalize_query("   "), None);
/// ```
pub fn normalize_query(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(fold_key(trimmed))
    }
}

/// Case-insensitive substring test against an already-normalized needle.
#[inline]
pub fn contains_folded(haystack: &str, folded_needle: &str) -> bool {
    fold_key(haystack).contains(folded_needle)
}
