use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::schema::types::FieldType;

/// Ordered description of named fields and their declared types.
///
/// A Schema is the input contract for form generation. It defines:
/// - The set of renderable fields and their type declarations
/// - The order fields were declared in, which the generated form preserves
/// - Nesting, through fields whose declaration is itself a schema
///
/// Schemas are externally owned, immutable inputs; generation never mutates
/// them. Because nested schemas are held by value, a schema is always a
/// finite tree and cannot reference itself.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    /// Field declarations in insertion order
    pub fields: IndexMap<String, FieldType>,
}

impl Schema {
    /// Creates an empty schema.
    #[must_use]
    pub fn new() -> Self {
        Self {
            fields: IndexMap::new(),
        }
    }

    /// Adds a field declaration, keeping declaration order.
    ///
    /// This builder method allows assembling a schema field by field.
    ///
    /// # Arguments
    ///
    /// * `name` - Name of the field to add
    /// * `field_type` - The field's type declaration
    #[must_use]
    pub fn with_field(mut self, name: impl Into<String>, field_type: FieldType) -> Self {
        self.fields.insert(name.into(), field_type);
        self
    }

    /// Adds a single field declaration in place.
    pub fn add_field(&mut self, name: String, field_type: FieldType) {
        self.fields.insert(name, field_type);
    }

    /// Parses a schema from its JSON definition.
    ///
    /// Field order in the JSON document becomes the declared order.
    ///
    /// # Errors
    /// Returns the underlying `serde_json` error when the document does not
    /// describe a valid schema.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Number of fields declared at this level.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether this level declares no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
