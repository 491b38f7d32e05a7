use thiserror::Error;

pub type Result<T> = std::result::Result<T, ImporterError>;

#[derive(Error, Debug)]
pub enum ImporterError {
    #[error("Standards error: {0}")]
    Standards(#[from] standards::StandardsError),

    #[error("Source error: {0}")]
    SourceError(String),

    #[error("Data transformation error: {0}")]
    TransformationError(String),
}
