// Internal modules
pub mod types;

// Public re-exports
pub use types::{FieldCategory, FieldType, Schema};
