use thiserror::Error;

use crate::schema::types::FieldCategory;

/// Errors that can occur during form generation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// The field's declared category has no input representation
    #[error("Unsupported field type `{category}` for field `{field}`")]
    UnsupportedType {
        /// Name of the field that could not be dispatched
        field: String,
        /// Declared category with no matching handler
        category: FieldCategory,
    },
}

/// Result type for form generation operations
pub type FormResult<T> = Result<T, FormError>;
