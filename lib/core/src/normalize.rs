//! Value normalization
//!
//! Purely syntactic canonicalization of single attribute values. Sizes are
//! reshaped into one spelling and pressures reduced to an integer magnitude.
//! Vocabulary categories (materials, connections, valve types) are left to
//! the catalog and the synonym normalizer.

use crate::attribute::Category;

/// Decimal size spellings and their fractional equivalents
const DECIMAL_SIZES: &[(&str, &str)] = &[
    ("0.25", "1/4"),
    ("0.5", "1/2"),
    ("0.75", "3/4"),
    ("1.5", "1-1/2"),
    ("2.5", "2-1/2"),
];

/// Result of normalizing a single raw value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NormalizedValue {
    Size(String),
    /// `None` when the raw text has no digits
    Pressure(Option<u64>),
    /// Vocabulary categories pass through untouched
    Verbatim(String),
}

impl NormalizedValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            NormalizedValue::Size(s) | NormalizedValue::Verbatim(s) => Some(s),
            NormalizedValue::Pressure(_) => None,
        }
    }
}

pub fn normalize(category: Category, raw: &str) -> NormalizedValue {
    match category {
        Category::Size => NormalizedValue::Size(normalize_size(raw)),
        Category::PressureRating => NormalizedValue::Pressure(extract_pressure(raw)),
        _ => NormalizedValue::Verbatim(raw.to_string()),
    }
}

/// Canonical size spelling.
///
/// Strips whitespace and quote marks, hyphenates mixed numbers
/// (`1 1/2` -> `1-1/2`) and maps decimal spellings to fractions.
/// Idempotent; unrecognized formats come back trimmed but otherwise unchanged.
pub fn normalize_size(raw: &str) -> String {
    let unquoted: String = raw.chars().filter(|c| *c != '"' && *c != '\'').collect();
    let cleaned = unquoted.trim();

    if let Some((_, fraction)) = DECIMAL_SIZES.iter().find(|(decimal, _)| *decimal == cleaned) {
        return (*fraction).to_string();
    }

    hyphenate_mixed_number(cleaned).unwrap_or_else(|| cleaned.to_string())
}

fn hyphenate_mixed_number(value: &str) -> Option<String> {
    let mut parts = value.split_whitespace();
    let whole = parts.next()?;
    let fraction = parts.next()?;
    if parts.next().is_some() {
        return None;
    }
    if !is_digits(whole) || !is_fraction(fraction) {
        return None;
    }
    Some(format!("{}-{}", whole, fraction))
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

fn is_fraction(s: &str) -> bool {
    match s.split_once('/') {
        Some((num, den)) => is_digits(num) && is_digits(den),
        None => false,
    }
}

/// First run of decimal digits as an integer magnitude. Units are not validated.
pub fn extract_pressure(raw: &str) -> Option<u64> {
    let start = raw.find(|c: char| c.is_ascii_digit())?;
    let digits: &str = {
        let tail = &raw[start..];
        let end = tail.find(|c: char| !c.is_ascii_digit()).unwrap_or(tail.len());
        &tail[..end]
    };
    digits.parse().ok()
}

/// Numeric magnitude of a size, for ordering distinct sizes.
///
/// Understands `3/4`, `1-1/2`, `1 1/2` and plain numbers.
pub fn size_magnitude(raw: &str) -> Option<f64> {
    let size = normalize_size(raw);

    if let Some((whole, fraction)) = size.split_once('-') {
        let whole: f64 = whole.parse().ok()?;
        return Some(whole + fraction_value(fraction)?);
    }
    if size.contains('/') {
        return fraction_value(&size);
    }
    size.parse().ok()
}

fn fraction_value(s: &str) -> Option<f64> {
    let (num, den) = s.split_once('/')?;
    let num: f64 = num.trim().parse().ok()?;
    let den: f64 = den.trim().parse().ok()?;
    if den == 0.0 {
        return None;
    }
    Some(num / den)
}

/// Comparison form for free text: trimmed, lower-cased, underscores read as spaces.
///
/// Canonical tags such as `stainless_steel` compare equal to `Stainless Steel`.
pub fn fold(value: &str) -> String {
    value.trim().to_lowercase().replace('_', " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mixed_number_hyphenated() {
        assert_eq!(normalize_size("1 1/2"), "1-1/2");
        assert_eq!(normalize_size("  2   1/2 "), "2-1/2");
        assert_eq!(normalize_size("1 1/2\""), "1-1/2");
    }

    #[test]
    fn test_size_idempotent() {
        for raw in ["1 1/2", "1-1/2", "6\"", "'3/4'", "0.5", "DN50", "", "10 x 8", "1.5"] {
            let once = normalize_size(raw);
            assert_eq!(normalize_size(&once), once, "not idempotent for {:?}", raw);
        }
    }

    #[test]
    fn test_size_quotes_and_decimals() {
        assert_eq!(normalize_size("6\""), "6");
        assert_eq!(normalize_size("\"6\""), "6");
        assert_eq!(normalize_size("0.75"), "3/4");
        assert_eq!(normalize_size("DN50"), "DN50");
    }

    #[test]
    fn test_extract_pressure() {
        assert_eq!(extract_pressure("Class 300"), Some(300));
        assert_eq!(extract_pressure("150# / PN20"), Some(150));
        assert_eq!(extract_pressure("800"), Some(800));
        assert_eq!(extract_pressure("high"), None);
        assert_eq!(extract_pressure(""), None);
    }

    #[test]
    fn test_normalize_dispatch() {
        assert_eq!(normalize(Category::Size, "1 1/4"), NormalizedValue::Size("1-1/4".into()));
        assert_eq!(normalize(Category::PressureRating, "600 WOG"), NormalizedValue::Pressure(Some(600)));
        assert_eq!(
            normalize(Category::Material, " Forged Steel "),
            NormalizedValue::Verbatim(" Forged Steel ".into())
        );
    }

    #[test]
    fn test_size_magnitude() {
        assert_eq!(size_magnitude("3/4"), Some(0.75));
        assert_eq!(size_magnitude("1-1/2"), Some(1.5));
        assert_eq!(size_magnitude("1 1/2\""), Some(1.5));
        assert_eq!(size_magnitude("6"), Some(6.0));
        assert_eq!(size_magnitude("DN50"), None);
    }

    #[test]
    fn test_fold() {
        assert_eq!(fold(" Stainless_Steel "), "stainless steel");
    }
}
