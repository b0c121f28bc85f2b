use serde::{Deserialize, Serialize};
use std::fmt;

use crate::schema::types::Schema;

/// Declared type of a single schema field.
///
/// A field declaration is either a primitive descriptor carrying its
/// type-specific metadata, or a nested [`Schema`] that expands into a
/// grouped sub-form. `List` declarations exist in the model but have no
/// input representation; dispatching one fails with an unsupported-type
/// error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    /// Free-form text value
    String,
    /// Numeric value
    Number,
    /// True/false value
    Boolean,
    /// Closed set of named members
    Enum {
        /// The selectable members, in declaration order
        members: Vec<String>,
    },
    /// Nested schema rendered as a named group of its own fields
    Object(Schema),
    /// Homogeneous sequence of values
    List(Box<FieldType>),
}

impl FieldType {
    /// Returns the category tag for this declaration.
    #[must_use]
    pub fn category(&self) -> FieldCategory {
        match self {
            Self::String => FieldCategory::String,
            Self::Number => FieldCategory::Number,
            Self::Boolean => FieldCategory::Boolean,
            Self::Enum { .. } => FieldCategory::Enum,
            Self::Object(_) => FieldCategory::Object,
            Self::List(_) => FieldCategory::List,
        }
    }

    /// Returns the nested schema when this declaration is an object field.
    #[must_use]
    pub fn as_object(&self) -> Option<&Schema> {
        match self {
            Self::Object(schema) => Some(schema),
            _ => None,
        }
    }
}

/// Primitive classification of a field's declared type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldCategory {
    String,
    Number,
    Boolean,
    Enum,
    Object,
    List,
}

impl FieldCategory {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Enum => "enum",
            Self::Object => "object",
            Self::List => "list",
        }
    }
}

impl fmt::Display for FieldCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
