//! Per-category finalizers for merged field options.
//!
//! Each handler receives the already-merged descriptor and returns the final
//! record. They are identity functions today and exist as the extension
//! point for category-specific post-processing, e.g. injecting validation
//! attributes. Handlers never consult the raw type declaration, only the
//! merged options. Adding a category means adding a defaults branch and a
//! handler here.

use crate::form::descriptor::FieldDescriptor;

/// Finalizes a string field's merged options.
#[must_use]
pub fn handle_string(options: FieldDescriptor) -> FieldDescriptor {
    options
}

/// Finalizes a number field's merged options.
#[must_use]
pub fn handle_number(options: FieldDescriptor) -> FieldDescriptor {
    options
}

/// Finalizes a boolean field's merged options.
#[must_use]
pub fn handle_boolean(options: FieldDescriptor) -> FieldDescriptor {
    options
}

/// Finalizes an enumeration field's merged options.
#[must_use]
pub fn handle_enum(options: FieldDescriptor) -> FieldDescriptor {
    options
}
