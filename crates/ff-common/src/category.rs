//! Component category normalization and matching.
//!
//! Operators enter free-text component labels ("Llantas", "ServicioC",
//! "Batería"). Both the record store and the interval table resolve them
//! through the same normalization, so the two layers cannot disagree on what
//! a category means.

/// Normalize a free-text category label: trim and Unicode-lowercase.
pub fn normalize_category(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Containment match between two normalized category strings.
///
/// True when either string contains the other. Used as the fallback tier
/// after exact matching, so "servicioc" still resolves against a "servicio"
/// table key. Empty strings never match: `str::contains("")` is vacuously
/// true and would turn a blank label into a wildcard.
pub fn keyword_match(a: &str, b: &str) -> bool {
    if a.is_empty() || b.is_empty() {
        return false;
    }
    a.contains(b) || b.contains(a)
}
