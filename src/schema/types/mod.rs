pub mod field;
pub mod schema;

pub use field::{FieldCategory, FieldType};
pub use schema::Schema;
