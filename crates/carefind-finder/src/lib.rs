//! Hospital aggregation and the finder controller.
//!
//! Combines the external places source with the internal seeded directory
//! in strict fallback order (never merged), and owns the application state
//! from which the ranked list is re-derived.

mod aggregate;
mod controller;
mod directory;
mod error;
pub mod seed;

pub use aggregate::aggregate_hospitals;
pub use controller::FinderController;
pub use directory::{HospitalDirectory, InMemoryDirectory};
pub use error::FinderError;
