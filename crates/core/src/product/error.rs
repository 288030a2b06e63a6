use serde_json::Value;

/// A product payload that breaks one of the product rules.
///
/// Every variant names the offending field so callers can report it
/// without parsing the message.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("Product payload must be a JSON object")]
    NotAnObject,

    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("{field} must be a {expected}")]
    InvalidType {
        field: &'static str,
        expected: &'static str,
    },

    /// Text holding a NUL character, which the store cannot keep.
    #[error("{field} must not contain NUL characters")]
    InvalidCharacter { field: &'static str },

    #[error("{field} must be between {min} and {max} characters, got {actual}")]
    InvalidLength {
        field: &'static str,
        min: u64,
        max: u64,
        actual: usize,
    },

    #[error("{field} can't be negative, got {value}")]
    InvalidRange { field: &'static str, value: f64 },

    #[error("{field} value can't be {value}, must be one of {}", .allowed.join("/"))]
    InvalidEnum {
        field: &'static str,
        value: String,
        allowed: &'static [&'static str],
    },

    #[error("Quantity must be a non-negative integer, got {0}")]
    InvalidQuantity(Value),

    #[error("Quantity can't exceed 9223372036854775807, got {0}")]
    QuantityOutOfRange(Value),
}

impl ValidationError {
    /// The payload field the violation concerns, if any.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            ValidationError::NotAnObject => None,
            ValidationError::MissingField(field) => Some(*field),
            ValidationError::InvalidType { field, .. }
            | ValidationError::InvalidCharacter { field }
            | ValidationError::InvalidLength { field, .. }
            | ValidationError::InvalidRange { field, .. }
            | ValidationError::InvalidEnum { field, .. } => Some(*field),
            ValidationError::InvalidQuantity(_) | ValidationError::QuantityOutOfRange(_) => {
                Some("quantity")
            }
        }
    }
}
