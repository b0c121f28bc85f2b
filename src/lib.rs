//! # Formfold Library
//!
//! This library derives renderable form-field descriptors from declarative
//! data-shape schemas, so front-end code does not hand-write form markup for
//! every schema change.
//!
//! ## Core Components
//!
//! * `schema` - Schema definition: ordered field declarations, type
//!   categories, nesting
//! * `form` - Form generation: per-category defaults, override merging,
//!   type dispatch, recursive traversal, options builder
//!
//! ## Architecture
//!
//! A caller hands [`generate_fields`] a [`Schema`] plus an optional
//! [`FieldOptionsMap`] of overrides, possibly assembled with
//! [`OptionsBuilder`]. The walker visits fields in declared order: primitive
//! fields are dispatched to their category handler after defaults and
//! overrides are merged, and nested schemas recurse into named groups. The
//! result mirrors the schema's shape and serializes to plain JSON records
//! for whatever rendering layer consumes it.
//!
//! Generation is pure and synchronous: no shared state across calls, and a
//! declaration outside the supported categories fails the whole walk with
//! [`FormError::UnsupportedType`].
//!
//! ## Example
//!
//! ```
//! use formfold::{generate_fields, FieldOptions, FieldType, OptionsBuilder, Schema};
//!
//! let schema = Schema::new()
//!     .with_field("username", FieldType::String)
//!     .with_field("age", FieldType::Number);
//!
//! let options = OptionsBuilder::new()
//!     .with_field("username", FieldOptions::new().with_placeholder("Username"))
//!     .build();
//!
//! let elements = generate_fields(&schema, &options).unwrap();
//! assert_eq!(elements.len(), 2);
//! ```

pub mod form;
pub mod schema;

// Re-export main types for convenience
pub use form::{
    default_options, generate_fields, handle_field_type, FieldDescriptor, FieldOptions,
    FieldOptionsMap, FormElement, FormError, FormFields, FormResult, OptionsBuilder, OptionsEntry,
};
pub use schema::{FieldCategory, FieldType, Schema};
