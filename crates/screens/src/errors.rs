use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScreenError {
    /// An element the screen binds to is missing from the view. Fatal for
    /// that screen only; the screen stays inert.
    #[error("required element not found: {0}")]
    MissingElement(String),
    /// Guarded screen entered without a stored session.
    #[error("no active session")]
    NoSession,
    #[error(transparent)]
    Storage(#[from] service::errors::ServiceError),
}
