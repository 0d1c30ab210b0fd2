use thiserror::Error;

/// Errors surfaced by the hospital directory and finder.
#[derive(Debug, Error)]
pub enum FinderError {
    /// The internal directory fetch or mutation failed.
    #[error("hospital directory error: {0}")]
    Directory(String),

    /// A directory mutation referenced an id that does not exist.
    #[error("hospital not found: {0}")]
    NotFound(String),
}
