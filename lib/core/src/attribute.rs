//! Attribute categories
//!
//! The closed set of searchable attribute dimensions. Each category owns an
//! independent vocabulary; values never cross categories.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One searchable attribute dimension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Material,
    SeatMaterial,
    EndConnection,
    ValveType,
    Size,
    PressureRating,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Material,
        Category::SeatMaterial,
        Category::EndConnection,
        Category::ValveType,
        Category::Size,
        Category::PressureRating,
    ];

    /// Canonical field name used in normalized query objects
    pub fn field_name(self) -> &'static str {
        match self {
            Category::Material => "material",
            Category::SeatMaterial => "seatMaterial",
            Category::EndConnection => "endConnection",
            Category::ValveType => "valveType",
            Category::Size => "size",
            Category::PressureRating => "pressureRating",
        }
    }

    /// Historical input key spellings accepted for this category
    pub fn input_keys(self) -> &'static [&'static str] {
        match self {
            Category::Material => &["material", "bodyMaterial", "body_material"],
            Category::SeatMaterial => &["seatMaterial", "seat_material", "seat"],
            Category::EndConnection => &["endConnection", "connection", "end_connection"],
            Category::ValveType => &["valveType", "valve_type", "type"],
            Category::Size => &["size", "size_nominal", "sizeNominal"],
            Category::PressureRating => &[
                "pressureRating",
                "pressure",
                "pressure_rating",
                "pressure_class",
                "pressureClass",
            ],
        }
    }

    /// Resolve an input field key (any accepted spelling, case-insensitive)
    pub fn from_field_key(key: &str) -> Option<Category> {
        let key = key.trim();
        Self::ALL.into_iter().find(|category| {
            category
                .input_keys()
                .iter()
                .any(|candidate| candidate.eq_ignore_ascii_case(key))
        })
    }

    /// Whether values are canonicalized by vocabulary lookup.
    ///
    /// Size uses format normalization instead.
    pub fn uses_vocabulary(self) -> bool {
        !matches!(self, Category::Size)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Category::Material => "material",
            Category::SeatMaterial => "seat_material",
            Category::EndConnection => "end_connection",
            Category::ValveType => "valve_type",
            Category::Size => "size",
            Category::PressureRating => "pressure_rating",
        };
        f.write_str(label)
    }
}

impl FromStr for Category {
    type Err = Error;

    /// Parses category labels as written in synonym files.
    /// `connection` is accepted for end connections.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "material" | "body_material" => Ok(Category::Material),
            "seat_material" | "seat" => Ok(Category::SeatMaterial),
            "end_connection" | "connection" => Ok(Category::EndConnection),
            "valve_type" | "type" => Ok(Category::ValveType),
            "size" => Ok(Category::Size),
            "pressure_rating" | "pressure" => Ok(Category::PressureRating),
            other => Err(Error::UnknownCategory(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_key_spellings() {
        assert_eq!(Category::from_field_key("bodyMaterial"), Some(Category::Material));
        assert_eq!(Category::from_field_key("BODY_MATERIAL"), Some(Category::Material));
        assert_eq!(Category::from_field_key("seat"), Some(Category::SeatMaterial));
        assert_eq!(Category::from_field_key("size_nominal"), Some(Category::Size));
        assert_eq!(Category::from_field_key("pressure_class"), Some(Category::PressureRating));
        assert_eq!(Category::from_field_key("sku"), None);
    }

    #[test]
    fn test_parse_labels() {
        assert_eq!("connection".parse::<Category>().unwrap(), Category::EndConnection);
        assert_eq!("seat_material".parse::<Category>().unwrap(), Category::SeatMaterial);
        assert!(matches!("colour".parse::<Category>(), Err(Error::UnknownCategory(_))));
    }

    #[test]
    fn test_only_size_skips_vocabulary() {
        let vocab: Vec<_> = Category::ALL.iter().filter(|c| !c.uses_vocabulary()).collect();
        assert_eq!(vocab, vec![&Category::Size]);
    }
}
