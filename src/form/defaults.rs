use crate::form::descriptor::FieldDescriptor;
use crate::schema::types::FieldType;

/// Baseline presentation metadata for a field, before any override.
///
/// Always sets `id` and `name` to the field name, `label` to its capitalized
/// form, and `tag` to `input` unless the category calls for another element.
/// Category-specific keys:
/// - string: `type = "text"`
/// - number: `type = "number"`, `inputMode = "numeric"`
/// - boolean: `type = "checkbox"`
/// - enum: `type = "select"`, `renderAs = "select"`, `tag = "select"`, and
///   the member list under `options` for the renderer to expand
///
/// Pure and deterministic.
#[must_use]
pub fn default_options(field_name: &str, field_type: &FieldType) -> FieldDescriptor {
    let mut descriptor = FieldDescriptor {
        id: field_name.to_string(),
        name: field_name.to_string(),
        label: capitalize(field_name),
        tag: "input".to_string(),
        ..FieldDescriptor::default()
    };

    match field_type {
        FieldType::String => {
            descriptor.field_type = "text".to_string();
        }
        FieldType::Number => {
            descriptor.field_type = "number".to_string();
            descriptor.input_mode = Some("numeric".to_string());
        }
        FieldType::Boolean => {
            descriptor.field_type = "checkbox".to_string();
        }
        FieldType::Enum { members } => {
            descriptor.field_type = "select".to_string();
            descriptor.render_as = Some("select".to_string());
            descriptor.tag = "select".to_string();
            descriptor.options = Some(members.clone());
        }
        // No input representation; the dispatcher rejects these before the
        // defaults are ever used.
        FieldType::Object(_) | FieldType::List(_) => {}
    }

    descriptor
}

/// First character uppercased, remainder unchanged.
fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
