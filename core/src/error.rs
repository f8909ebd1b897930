//! Error type for the core crate.

/// Errors produced while turning an element tree into its wire form.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The JSON serializer failed.
    ///
    /// Unreachable for nodes produced by the builder; invalid construction
    /// is rejected earlier, at the builder boundary.
    #[error("failed to serialize element tree: {0}")]
    Json(#[from] serde_json::Error),
}
