use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Invalid reference table: {0}")]
    Reference(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;

impl EngineError {
    pub fn is_validation(&self) -> bool {
        matches!(self, EngineError::Validation(_))
    }
}
