use crate::product::ValidationError;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A write would duplicate a value that must be unique.
    #[error("Duplicate key: {field} '{value}' already exists")]
    DuplicateKey { field: &'static str, value: String },
}
