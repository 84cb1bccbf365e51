//! Strict hard filter for the multi-table path
//!
//! Every supplied field becomes a predicate and all predicates are ANDed.
//! Pressure is compared on the digits of the stored pressure text read as an
//! integer; a stored value that cannot be read that way fails the evaluation
//! instead of being skipped.

use crate::matching::{equals_folded, size_variants};
use specmatch_core::{extract_pressure, fold, normalize_size, CandidateRecord, CanonicalQuery, Category, Error, Result};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StrictFilter {
    size: Option<[String; 3]>,
    valve_type: Option<String>,
    pressure: Option<u64>,
    material: Option<String>,
    seat_material: Option<String>,
    connection: Option<String>,
}

impl StrictFilter {
    pub fn from_query(query: &CanonicalQuery) -> Self {
        let folded = |category: Category| query.get(category).map(fold).filter(|v| !v.is_empty());
        Self {
            size: query
                .get(Category::Size)
                .map(normalize_size)
                .filter(|s| !s.is_empty())
                .map(|s| size_variants(&s)),
            valve_type: folded(Category::ValveType),
            // a pressure query without digits imposes no filter
            pressure: query.get(Category::PressureRating).and_then(extract_pressure),
            material: folded(Category::Material),
            seat_material: folded(Category::SeatMaterial),
            connection: folded(Category::EndConnection),
        }
    }

    /// Number of active predicates
    pub fn len(&self) -> usize {
        [
            self.size.is_some(),
            self.valve_type.is_some(),
            self.pressure.is_some(),
            self.material.is_some(),
            self.seat_material.is_some(),
            self.connection.is_some(),
        ]
        .into_iter()
        .filter(|active| *active)
        .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Evaluate all predicates against a record.
    ///
    /// Fails with [`Error::PredicateEvaluation`] when the pressure predicate
    /// is active and the record's pressure text has no integer reading.
    pub fn evaluate(&self, record: &CandidateRecord) -> Result<bool> {
        let attrs = &record.attributes;

        // evaluated first so a cast failure is never masked by another predicate
        let pressure_ok = match self.pressure {
            Some(requested) => match stored_pressure(record)? {
                Some(stored) => stored == requested,
                None => false,
            },
            None => true,
        };

        let size_ok = match &self.size {
            Some(variants) => attrs
                .size
                .as_deref()
                .map(|stored| variants.iter().any(|v| v == stored))
                .unwrap_or(false),
            None => true,
        };

        let type_ok = match &self.valve_type {
            Some(requested) => [attrs.item.as_deref(), record.component_type.as_deref()]
                .into_iter()
                .flatten()
                .any(|stored| fold(stored).contains(requested.as_str())),
            None => true,
        };

        let material_ok = equals_opt(&self.material, attrs.body_material.as_deref());
        let seat_ok = equals_opt(&self.seat_material, attrs.seat_material.as_deref());

        let connection_ok = match &self.connection {
            Some(requested) => attrs.connections().any(|stored| equals_folded(requested, stored)),
            None => true,
        };

        Ok(pressure_ok && size_ok && type_ok && material_ok && seat_ok && connection_ok)
    }
}

fn equals_opt(requested: &Option<String>, stored: Option<&str>) -> bool {
    match requested {
        Some(requested) => stored.map(|s| equals_folded(requested, s)).unwrap_or(false),
        None => true,
    }
}

/// Integer reading of the stored pressure text: every digit kept, in order.
///
/// `Ok(None)` when the record has no pressure text at all.
fn stored_pressure(record: &CandidateRecord) -> Result<Option<u64>> {
    let Some(text) = record.attributes.pressure_text() else {
        return Ok(None);
    };
    let digits: String = text.chars().filter(|c| c.is_ascii_digit()).collect();
    let value: i32 = digits.parse().map_err(|_| Error::PredicateEvaluation {
        source_name: record.source.clone(),
        record: record.id.to_string(),
        reason: format!("pressure value {:?} is not an integer", text),
    })?;
    Ok(u64::try_from(value).ok())
}
