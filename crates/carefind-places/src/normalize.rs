//! Normalization from raw place results to [`HospitalRecord`].
//!
//! Classification of facility type and emergency availability is inferred
//! from the provider's free-text category tags. The heuristic is
//! approximate (a tagged `hospital` is assumed government, for instance)
//! and is kept as-is rather than treated as verified ground truth.

use carefind_core::{Coordinate, HospitalRecord, HospitalType};

use crate::types::PlaceResult;

/// Tags that carry no facility information and are dropped from specialties.
const BOILERPLATE_TAGS: [&str; 3] = ["point_of_interest", "establishment", "health"];

/// Converts a place result into the canonical [`HospitalRecord`].
///
/// The record id is namespaced as `external:{place_id}` so it can never
/// collide with an internal directory id within one aggregation pass.
#[must_use]
pub fn place_to_record(place: &PlaceResult) -> HospitalRecord {
    let (address, city, state) = parse_vicinity(&place.vicinity);
    let open_now = place
        .opening_hours
        .and_then(|h| h.open_now)
        .unwrap_or(false);
    let is_hospital = place.types.iter().any(|t| t == "hospital");

    HospitalRecord {
        id: format!("external:{}", place.place_id),
        name: place.name.clone(),
        hospital_type: classify_type(&place.types),
        address,
        city,
        state,
        // Postal code is not present in the basic nearby-search response.
        postal_code: String::new(),
        coordinate: Coordinate::new(place.geometry.location.lat, place.geometry.location.lng),
        phone_number: None,
        emergency_number: None,
        website: None,
        email: None,
        operating_hours: open_now.then(|| "Open Now".to_owned()),
        is_24_hours: open_now && is_hospital,
        has_emergency: has_emergency_services(place),
        specialties: specialties_from_tags(&place.types),
        facilities: vec![],
        rating: place.rating,
    }
}

/// Classifies the facility from its category tags.
fn classify_type(tags: &[String]) -> HospitalType {
    let has = |t: &str| tags.iter().any(|tag| tag == t);
    if has("hospital") {
        // The basic response cannot distinguish public from private.
        return HospitalType::Government;
    }
    if has("doctor") || has("dentist") || has("physiotherapist") {
        return HospitalType::Specialist;
    }
    HospitalType::Clinic
}

/// Whether the place likely offers emergency services: hospitals always,
/// otherwise general-health facilities that are currently open.
fn has_emergency_services(place: &PlaceResult) -> bool {
    if place.types.iter().any(|t| t == "hospital") {
        return true;
    }
    let open_now = place
        .opening_hours
        .and_then(|h| h.open_now)
        .unwrap_or(false);
    open_now && place.types.iter().any(|t| t == "health")
}

/// Splits the free-text vicinity string positionally on commas:
/// address, city (default "Unknown"), state (default "Malaysia").
fn parse_vicinity(vicinity: &str) -> (String, String, String) {
    let mut parts = vicinity.split(',').map(str::trim);
    let address = parts
        .next()
        .filter(|s| !s.is_empty())
        .unwrap_or(vicinity)
        .to_owned();
    let city = parts.next().filter(|s| !s.is_empty()).unwrap_or("Unknown");
    let state = parts.next().filter(|s| !s.is_empty()).unwrap_or("Malaysia");
    (address, city.to_owned(), state.to_owned())
}

/// Category tags minus boilerplate, title-cased with underscores replaced
/// by spaces.
fn specialties_from_tags(tags: &[String]) -> Vec<String> {
    tags.iter()
        .filter(|t| !BOILERPLATE_TAGS.contains(&t.as_str()))
        .map(|t| title_case_tag(t))
        .collect()
}

fn title_case_tag(tag: &str) -> String {
    let spaced = tag.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => spaced,
    }
}
