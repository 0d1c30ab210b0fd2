//! Wire types for the places nearby-search API.
//!
//! The API wraps every response in a `{"status": ..., "results": [...]}`
//! envelope. `"OK"` with results is success, `"ZERO_RESULTS"` is an empty
//! success, and any other status carries an optional `error_message`.

use serde::Deserialize;

/// Top-level envelope for nearby-search responses.
#[derive(Debug, Deserialize)]
pub struct PlacesResponse {
    pub status: String,
    #[serde(default)]
    pub results: Vec<PlaceResult>,
    #[serde(default)]
    pub error_message: Option<String>,
}

/// A single place returned by a nearby or keyword search.
#[derive(Debug, Clone, Deserialize)]
pub struct PlaceResult {
    pub place_id: String,
    pub name: String,
    /// Free-text locality string, e.g. `"Jalan Pahang, Kuala Lumpur"`.
    #[serde(default)]
    pub vicinity: String,
    pub geometry: PlaceGeometry,
    /// Category tags, e.g. `["hospital", "point_of_interest"]`.
    #[serde(default)]
    pub types: Vec<String>,
    #[serde(default)]
    pub opening_hours: Option<OpeningHours>,
    #[serde(default)]
    pub rating: Option<f64>,
    /// `"OPERATIONAL"` / `"CLOSED_TEMPORARILY"` / `"CLOSED_PERMANENTLY"`.
    #[serde(default)]
    pub business_status: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlaceGeometry {
    pub location: PlaceLocation,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PlaceLocation {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct OpeningHours {
    #[serde(default)]
    pub open_now: Option<bool>,
}
