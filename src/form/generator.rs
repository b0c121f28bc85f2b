use log::debug;

use crate::form::defaults::default_options;
use crate::form::descriptor::{FieldDescriptor, FormElement, FormFields};
use crate::form::error::{FormError, FormResult};
use crate::form::handlers::{handle_boolean, handle_enum, handle_number, handle_string};
use crate::form::options::{FieldOptions, FieldOptionsMap, OptionsEntry};
use crate::schema::types::{FieldType, Schema};

/// Resolves one field into its final descriptor.
///
/// Computes the category defaults, shallow-merges `options` on top
/// (override keys win, unspecified keys keep their defaults), and hands the
/// merged record to the matching type handler.
///
/// # Errors
/// Returns [`FormError::UnsupportedType`] when the declared category is not
/// one of string, number, boolean, or enum.
pub fn handle_field_type(
    field_name: &str,
    field_type: &FieldType,
    options: Option<&FieldOptions>,
) -> FormResult<FieldDescriptor> {
    let mut merged = default_options(field_name, field_type);
    if let Some(options) = options {
        merged = merged.apply(options);
    }

    match field_type {
        FieldType::String => Ok(handle_string(merged)),
        FieldType::Number => Ok(handle_number(merged)),
        FieldType::Boolean => Ok(handle_boolean(merged)),
        FieldType::Enum { .. } => Ok(handle_enum(merged)),
        FieldType::Object(_) | FieldType::List(_) => {
            debug!(
                "No input handler for field '{}' with category {}",
                field_name,
                field_type.category()
            );
            Err(FormError::UnsupportedType {
                field: field_name.to_string(),
                category: field_type.category(),
            })
        }
    }
}

/// Generates the ordered form elements for `schema`.
///
/// Walks fields in declared order. Primitive fields dispatch through
/// [`handle_field_type`] with the overrides keyed by their name; object
/// fields recurse with their correspondingly-keyed nested overrides and
/// produce a [`FormElement::Group`]. Recursion is bounded only by the
/// schema's own nesting depth.
///
/// # Errors
/// Fails with the first [`FormError::UnsupportedType`] encountered; no
/// partial output is returned.
pub fn generate_fields(schema: &Schema, options: &FieldOptionsMap) -> FormResult<FormFields> {
    debug!("Generating form elements for {} field(s)", schema.len());

    let mut elements = Vec::with_capacity(schema.len());
    for (field_name, field_type) in &schema.fields {
        if let FieldType::Object(nested_schema) = field_type {
            let empty = FieldOptionsMap::new();
            let nested_options = match options.get(field_name) {
                Some(OptionsEntry::Nested(map)) => map,
                // Absent or mismatched entries mean no overrides below here
                _ => &empty,
            };

            let generated = generate_fields(nested_schema, nested_options)?;
            elements.push(FormElement::Group {
                name: field_name.clone(),
                elements: generated,
            });
            continue;
        }

        let field_options = options.get(field_name).and_then(OptionsEntry::as_field);
        elements.push(FormElement::Field(handle_field_type(
            field_name,
            field_type,
            field_options,
        )?));
    }

    Ok(elements)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_applies_defaults() {
        let descriptor = handle_field_type("username", &FieldType::String, None).unwrap();

        assert_eq!(descriptor.id, "username");
        assert_eq!(descriptor.label, "Username");
        assert_eq!(descriptor.field_type, "text");
    }

    #[test]
    fn test_dispatch_rejects_list() {
        let field_type = FieldType::List(Box::new(FieldType::String));
        let err = handle_field_type("tags", &field_type, None).unwrap_err();

        assert_eq!(
            err,
            FormError::UnsupportedType {
                field: "tags".to_string(),
                category: crate::schema::types::FieldCategory::List,
            }
        );
    }

    #[test]
    fn test_dispatch_rejects_object() {
        let field_type = FieldType::Object(Schema::new());
        assert!(handle_field_type("address", &field_type, None).is_err());
    }
}
