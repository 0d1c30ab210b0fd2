//! Client for the external places nearby-search API.
//!
//! Queries healthcare categories around an origin coordinate, deduplicates
//! across categories, and normalizes results into
//! [`carefind_core::HospitalRecord`]. Per-category failures are absorbed so
//! one bad query never sinks the others; a fully empty outcome is the
//! caller's signal to fall back to the internal directory.

mod client;
mod error;
pub mod normalize;
mod types;

pub use client::PlacesClient;
pub use error::PlacesError;
pub use types::{OpeningHours, PlaceGeometry, PlaceLocation, PlaceResult, PlacesResponse};

/// Healthcare categories queried per aggregation pass, in fixed order.
pub const HEALTHCARE_CATEGORIES: [&str; 4] = ["hospital", "health", "doctor", "clinic"];
