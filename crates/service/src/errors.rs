use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("invalid range: {0}")]
    InvalidRange(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("database error: {0}")]
    Db(String),
    #[error("model error: {0}")]
    Model(#[from] models::errors::ModelError),
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self { Self::NotFound(format!("{} not found", entity)) }
    pub fn invalid_range(msg: impl Into<String>) -> Self { Self::InvalidRange(msg.into()) }
    pub fn invalid_input(msg: impl Into<String>) -> Self { Self::InvalidInput(msg.into()) }
}
