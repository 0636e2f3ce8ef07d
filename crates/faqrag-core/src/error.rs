use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Source not found: {0}")]
    NotFound(String),

    #[error("Malformed input: {0}")]
    MalformedInput(String),

    #[error("Invalid schema: {0}")]
    Schema(String),

    #[error("Invalid query: {0}")]
    Validation(String),

    #[error("Missing field: {0}")]
    MissingField(String),

    #[error("Gateway error: {0}")]
    Gateway(String),

    #[error("Operation failed: {0}")]
    Operation(String),
}

pub type Result<T> = std::result::Result<T, Error>;
