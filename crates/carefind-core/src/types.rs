//! Canonical domain types shared across the workspace.
//!
//! Hospital candidates from both sources are normalized into
//! [`HospitalRecord`] before anything downstream sees them, so the ranking
//! pipeline never branches on where a record came from.

use serde::{Deserialize, Serialize};

/// Fallback origin when no device location has been resolved:
/// Kuala Lumpur city center.
pub const DEFAULT_ORIGIN: Coordinate = Coordinate {
    latitude: 3.139_003,
    longitude: 101.686_855,
};

/// A WGS84 coordinate pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Whether the coordinate falls within valid latitude/longitude ranges.
    ///
    /// Out-of-range coordinates are rejected at the source boundaries;
    /// the distance math assumes its inputs already passed this check.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }
}

/// Which tier of the location resolver produced a coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationSource {
    /// Last-known position read from the platform cache.
    Cached,
    /// Fresh GPS fix.
    Live,
    /// The fixed Kuala Lumpur fallback.
    Default,
}

/// One completed location resolution. Immutable; a refresh produces a new
/// value rather than mutating the previous one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResolvedLocation {
    pub coordinate: Coordinate,
    /// Horizontal accuracy in meters, when the provider reports one.
    pub accuracy: Option<f64>,
    /// Epoch milliseconds at which the fix was obtained.
    pub timestamp_ms: i64,
    pub source: LocationSource,
}

/// Facility classification, inferred for external results from the
/// provider's category tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HospitalType {
    Government,
    Private,
    Clinic,
    Specialist,
}

impl HospitalType {
    /// Human-readable label for list output.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            HospitalType::Government => "Government",
            HospitalType::Private => "Private",
            HospitalType::Clinic => "Clinic",
            HospitalType::Specialist => "Specialist",
        }
    }
}

impl std::str::FromStr for HospitalType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "government" => Ok(HospitalType::Government),
            "private" => Ok(HospitalType::Private),
            "clinic" => Ok(HospitalType::Clinic),
            "specialist" => Ok(HospitalType::Specialist),
            other => Err(format!("unknown hospital type: {other}")),
        }
    }
}

/// A normalized hospital candidate.
///
/// `id` is namespaced by source (`external:` / `internal:`) so ids from the
/// two sources can never collide within one aggregation pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HospitalRecord {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub hospital_type: HospitalType,
    pub address: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub coordinate: Coordinate,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub emergency_number: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub operating_hours: Option<String>,
    pub is_24_hours: bool,
    pub has_emergency: bool,
    #[serde(default)]
    pub specialties: Vec<String>,
    #[serde(default)]
    pub facilities: Vec<String>,
    #[serde(default)]
    pub rating: Option<f64>,
}

/// A hospital annotated with its distance from the active origin.
/// Recomputed whenever the origin or the candidate set changes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedHospital {
    #[serde(flatten)]
    pub record: HospitalRecord,
    pub distance_km: f64,
}

/// Type restriction applied by the ranking pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TypeFilter {
    #[default]
    All,
    Only(HospitalType),
}

impl std::str::FromStr for TypeFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            Ok(TypeFilter::All)
        } else {
            s.parse::<HospitalType>().map(TypeFilter::Only)
        }
    }
}

/// Filter inputs owned by the presentation layer and passed into the
/// ranking pipeline read-only.
#[derive(Debug, Clone, Default)]
pub struct FilterState {
    pub type_filter: TypeFilter,
    pub emergency_only: bool,
    pub search_query: String,
}

/// Active ordering for the ranked list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    #[default]
    Distance,
    Name,
    Rating,
}

impl std::str::FromStr for SortMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "distance" => Ok(SortMode::Distance),
            "name" => Ok(SortMode::Name),
            "rating" => Ok(SortMode::Rating),
            other => Err(format!("unknown sort mode: {other}")),
        }
    }
}

/// Which source produced the active candidate set. Reported alongside the
/// records so the consumer can badge data provenance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataSource {
    External,
    Internal,
    None,
}

impl std::fmt::Display for DataSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataSource::External => write!(f, "external"),
            DataSource::Internal => write!(f, "internal"),
            DataSource::None => write!(f, "none"),
        }
    }
}
