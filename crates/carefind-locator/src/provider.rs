//! The platform permission/location collaborator seam.

use async_trait::async_trait;

use carefind_core::Coordinate;

use crate::error::LocatorError;

/// Location permission state as reported by the platform.
///
/// Read at resolver startup and updated only in response to an explicit
/// permission request; nothing is cached across process launches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionState {
    Undetermined,
    Granted,
    Denied,
}

/// A coordinate fix as reported by the provider, with optional horizontal
/// accuracy in meters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionFix {
    pub coordinate: Coordinate,
    pub accuracy: Option<f64>,
}

/// Platform permission and positioning collaborator.
///
/// Injected into [`crate::LocationResolver`] so tests can substitute fakes;
/// production implementations wrap whatever positioning stack the host
/// offers.
#[async_trait]
pub trait LocationProvider: Send + Sync {
    /// Current permission state, without prompting the user.
    async fn permission_state(&self) -> Result<PermissionState, LocatorError>;

    /// Prompts the user for location access and returns the resulting state.
    async fn request_permission(&self) -> Result<PermissionState, LocatorError>;

    /// Last-known cached fix, if the platform has one. Expected to return
    /// near-instantly.
    async fn cached_coordinate(&self) -> Result<Option<PositionFix>, LocatorError>;

    /// Fresh positioning fix. May be slow or hang; the resolver bounds it
    /// with a timeout.
    async fn live_coordinate(&self) -> Result<PositionFix, LocatorError>;
}
