//! The ranking pipeline: distance annotation, filtering, and ordering.
//!
//! Pure and synchronous. The owning controller calls [`rank_hospitals`]
//! whenever the origin, candidate set, filters, or sort mode change; there
//! is no implicit dependency tracking.

use std::cmp::Ordering;

use crate::geo::haversine_distance_km;
use crate::types::{Coordinate, FilterState, HospitalRecord, RankedHospital, SortMode, TypeFilter};

/// Annotates candidates with distance from `origin`, applies the filters,
/// and sorts per `sort`.
///
/// Sorting is stable, so records with equal keys keep their prior relative
/// order and the output is deterministic for a fixed input order.
#[must_use]
pub fn rank_hospitals(
    origin: Coordinate,
    records: &[HospitalRecord],
    filters: &FilterState,
    sort: SortMode,
) -> Vec<RankedHospital> {
    let query = filters.search_query.trim().to_lowercase();

    let mut ranked: Vec<RankedHospital> = records
        .iter()
        .filter(|r| match filters.type_filter {
            TypeFilter::All => true,
            TypeFilter::Only(t) => r.hospital_type == t,
        })
        .filter(|r| !filters.emergency_only || r.has_emergency)
        .filter(|r| query.is_empty() || matches_query(r, &query))
        .map(|r| RankedHospital {
            record: r.clone(),
            distance_km: haversine_distance_km(origin, r.coordinate),
        })
        .collect();

    match sort {
        SortMode::Distance => ranked.sort_by(|a, b| total_cmp_f64(a.distance_km, b.distance_km)),
        SortMode::Name => {
            ranked.sort_by(|a, b| compare_names(&a.record.name, &b.record.name));
        }
        SortMode::Rating => ranked.sort_by(|a, b| {
            // Missing rating sorts as 0, i.e. last under descending order.
            total_cmp_f64(b.record.rating.unwrap_or(0.0), a.record.rating.unwrap_or(0.0))
        }),
    }

    ranked
}

/// Case-insensitive substring match over name, city, and state.
fn matches_query(record: &HospitalRecord, query_lower: &str) -> bool {
    record.name.to_lowercase().contains(query_lower)
        || record.city.to_lowercase().contains(query_lower)
        || record.state.to_lowercase().contains(query_lower)
}

/// Case-insensitive lexicographic name comparison. Equal keys fall back to
/// the stable sort's input order.
fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

fn total_cmp_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}
