use thiserror::Error;

/// Errors surfaced by the location resolver.
#[derive(Debug, Clone, Error)]
pub enum LocatorError {
    /// The user declined location access. Recoverable by calling
    /// `request_permission` again.
    #[error("permission to access location was denied")]
    PermissionDenied,

    /// The platform permission/location collaborator failed outright.
    #[error("location provider error: {0}")]
    Provider(String),
}
