//! Top-level error type.

/// Errors surfaced by the update channel and window façade.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Element tree serialization failed.
    #[error(transparent)]
    Core(#[from] brookui_core::Error),

    /// Update-message serialization failed.
    #[error("failed to serialize update message: {0}")]
    Json(#[from] serde_json::Error),

    /// The render surface rejected a submitted message.
    #[error("render surface rejected message: {0}")]
    Surface(String),
}
