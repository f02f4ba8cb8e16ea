use thiserror::Error;

/// A browser capability the page needs is missing. None of these are fatal
/// to the page as a whole; callers log and carry on without the feature.
#[derive(Debug, Error)]
pub enum MountError {
    #[error("no window")]
    NoWindow,
    #[error("no document")]
    NoDocument,
    #[error("document has no body")]
    NoBody,
    #[error("2d canvas context unavailable")]
    NoCanvasContext,
    #[error("dom call failed: {0}")]
    Dom(String),
}
