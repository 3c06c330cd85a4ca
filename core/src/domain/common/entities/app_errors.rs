use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("Invalid input: {0}")]
    Invalid(String),

    #[error("Invalid stored filename: {0}")]
    InvalidFilename(String),

    #[error("Not found")]
    NotFound,

    #[error("I/O error: {0}")]
    Io(String),

    #[error("External service error: {0}")]
    ExternalServiceError(String),
}

impl From<std::io::Error> for CoreError {
    fn from(error: std::io::Error) -> Self {
        if error.kind() == std::io::ErrorKind::NotFound {
            return CoreError::NotFound;
        }
        CoreError::Io(error.to_string())
    }
}
