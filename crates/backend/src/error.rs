use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("insertion failed: {0}")]
    Insertion(String),
    #[error("attribute application failed: {0}")]
    Attribute(String),
    #[error("inverted character range: start {start} > end {end_inclusive}")]
    Range { start: usize, end_inclusive: usize },
    #[error("image operation failed: {0}")]
    Image(String),
    #[error("other backend error: {0}")]
    Other(String),
}

impl From<&str> for BackendError {
    fn from(s: &str) -> Self {
        BackendError::Other(s.to_string())
    }
}
