//! Caller-side relaxation: widen a query until the engine returns something.

use serde::Serialize;
use specmatch_core::{CanonicalQuery, Category, Result};
use specmatch_search::{SearchOptions, SearchResponse, TieredSearch};

/// Constraints given up first come first
pub const RELAX_ORDER: [Category; 5] = [
    Category::SeatMaterial,
    Category::EndConnection,
    Category::Material,
    Category::PressureRating,
    Category::ValveType,
];

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RelaxedResponse {
    #[serde(flatten)]
    pub response: SearchResponse,
    /// Constraints removed to get this result, in removal order
    pub dropped: Vec<Category>,
}

/// Strict search first, then drop one more constraint per retry.
///
/// Stops at the first non-empty result. Categories the query does not
/// constrain are skipped without a retry. Size is never dropped.
pub fn search_relaxed(
    engine: &TieredSearch,
    query: &CanonicalQuery,
    options: &SearchOptions,
) -> Result<RelaxedResponse> {
    let options = SearchOptions {
        relax_constraints: false,
        ..options.clone()
    };

    let mut current = query.clone();
    let mut dropped = Vec::new();
    let mut response = engine.search_with_stats(&current, &options)?;

    for category in RELAX_ORDER {
        if !response.result.is_empty() {
            break;
        }
        if !current.is_constrained(category) {
            continue;
        }
        current = current.without(category);
        dropped.push(category);
        tracing::info!(%category, "no results, retrying without constraint");
        response = engine.search_with_stats(&current, &options)?;
    }

    Ok(RelaxedResponse { response, dropped })
}
