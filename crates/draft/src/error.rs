use quire_backend::BackendError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DraftError {
    /// Backend failures pass through unmodified; apply aborts on the first
    /// one with no rollback.
    #[error(transparent)]
    Backend(#[from] BackendError),
    #[error("image has no blob to insert")]
    MissingBlob,
    #[error("scale requires width and height to be set first")]
    ScaleWithoutDimensions,
}
