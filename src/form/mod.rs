//! # Form Generation
//!
//! Derives renderable form-field descriptors from a [`Schema`]: per-category
//! defaults, caller overrides merged on top, and nested schemas mirrored as
//! nested groups.
//!
//! [`Schema`]: crate::schema::Schema

pub mod builder;
pub mod defaults;
pub mod descriptor;
pub mod error;
pub mod generator;
pub mod handlers;
pub mod options;

pub use builder::OptionsBuilder;
pub use defaults::default_options;
pub use descriptor::{FieldDescriptor, FormElement, FormFields};
pub use error::{FormError, FormResult};
pub use generator::{generate_fields, handle_field_type};
pub use options::{FieldOptions, FieldOptionsMap, OptionsEntry};
