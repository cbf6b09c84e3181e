//! Error taxonomy for editor operations.
//!
//! Every failure an operation can produce is one of these variants. They are
//! all recovered at the UI boundary: logged, turned into a transient notice,
//! and dropped. Nothing here propagates past the dispatch layer and there is
//! no retry policy: the user re-invokes the action.

/// Error type for editor operations.
#[derive(Debug, Clone, thiserror::Error)]
pub enum EditorError {
    /// The live surface does not exist yet; the source must be rendered first.
    #[error("live surface not ready; render the source first")]
    SurfaceNotReady,

    /// Constructing the live surface failed.
    #[error("failed to construct the live surface: {0}")]
    RenderFailure(String),

    /// No block-level ancestor encloses the current selection.
    #[error("no block-level ancestor encloses the selection")]
    NoBlockTarget,

    /// The underlying editing capability call failed.
    #[error("editing operation failed: {0}")]
    OperationFailed(String),
}

impl EditorError {
    /// Shorthand for wrapping a platform failure message.
    pub fn operation(message: impl Into<String>) -> Self {
        Self::OperationFailed(message.into())
    }
}
