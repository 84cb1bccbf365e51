//! Per-field comparison functions
//!
//! Shared by the strict filter and the scorer. Free-text comparisons run on
//! the folded form (trimmed, lower-cased, underscores read as spaces) so
//! canonical tags like `gate_valve` line up with stored text like "Gate Valve".

use specmatch_core::{extract_pressure, fold, normalize_size};

/// Substring containment in either direction. Empty sides never match.
pub fn contains_either(requested: &str, stored: &str) -> bool {
    let requested = fold(requested);
    let stored = fold(stored);
    if requested.is_empty() || stored.is_empty() {
        return false;
    }
    stored.contains(&requested) || requested.contains(&stored)
}

/// One-directional containment: the stored text contains the requested text
pub fn contains_folded(stored: &str, requested: &str) -> bool {
    let requested = fold(requested);
    !requested.is_empty() && fold(stored).contains(&requested)
}

/// Case-insensitive equality on the folded form
pub fn equals_folded(requested: &str, stored: &str) -> bool {
    fold(requested) == fold(stored)
}

/// Stored size equals the normalized requested size once both are normalized
pub fn size_equals(requested_normalized: &str, stored: &str) -> bool {
    !requested_normalized.is_empty() && normalize_size(stored) == requested_normalized
}

/// Stored spellings accepted by the strict size filter: `n`, `n"` and `"n"`
pub fn size_variants(normalized: &str) -> [String; 3] {
    [
        normalized.to_string(),
        format!("{}\"", normalized),
        format!("\"{}\"", normalized),
    ]
}

/// Stored rating is at least the requested one. Unparseable stored text is insufficient.
pub fn pressure_sufficient(requested: u64, stored: &str) -> bool {
    extract_pressure(stored)
        .map(|available| available >= requested)
        .unwrap_or(false)
}
