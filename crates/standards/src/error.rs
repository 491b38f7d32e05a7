use thiserror::Error;

#[derive(Debug, Error)]
pub enum StandardsError {
    #[error("Invalid time string: {0}")]
    InvalidTime(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Unknown stroke: {0}")]
    UnknownStroke(String),

    #[error("Unknown course: {0}")]
    UnknownCourse(String),

    #[error("Unknown gender: {0}")]
    UnknownGender(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

pub type Result<T> = std::result::Result<T, StandardsError>;

impl From<validator::ValidationErrors> for StandardsError {
    fn from(errors: validator::ValidationErrors) -> Self {
        StandardsError::Validation(errors.to_string())
    }
}
