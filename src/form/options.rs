use serde_json::{Map, Value};
use std::collections::HashMap;

/// Caller-supplied partial overrides for a single field's descriptor.
///
/// Every key is optional; keys left unset keep their computed defaults.
/// Overrides may set any key, including `tag`, `type`, and `label`. Keys the
/// core does not model go through `extra` and surface verbatim on the
/// generated descriptor.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldOptions {
    pub id: Option<String>,
    pub name: Option<String>,
    pub label: Option<String>,
    pub tag: Option<String>,
    pub field_type: Option<String>,
    pub placeholder: Option<String>,
    pub input_mode: Option<String>,
    pub render_as: Option<String>,
    pub options: Option<Vec<String>>,
    pub extra: Map<String, Value>,
}

impl FieldOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Overrides the `type` attribute of the generated element.
    #[must_use]
    pub fn with_field_type(mut self, field_type: impl Into<String>) -> Self {
        self.field_type = Some(field_type.into());
        self
    }

    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    #[must_use]
    pub fn with_input_mode(mut self, input_mode: impl Into<String>) -> Self {
        self.input_mode = Some(input_mode.into());
        self
    }

    #[must_use]
    pub fn with_render_as(mut self, render_as: impl Into<String>) -> Self {
        self.render_as = Some(render_as.into());
        self
    }

    /// Overrides the selectable members of an enumeration field.
    #[must_use]
    pub fn with_options(mut self, options: Vec<String>) -> Self {
        self.options = Some(options);
        self
    }

    /// Sets a passthrough key the core does not model.
    #[must_use]
    pub fn with_extra(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }
}

/// Override entry for one schema field.
///
/// Primitive fields take flat [`FieldOptions`]; object fields take a nested
/// [`FieldOptionsMap`] keyed like the nested schema.
#[derive(Debug, Clone, PartialEq)]
pub enum OptionsEntry {
    /// Overrides for a primitive field's descriptor
    Field(FieldOptions),
    /// Overrides for the fields of a nested schema
    Nested(FieldOptionsMap),
}

impl OptionsEntry {
    /// Returns the flat options when this entry targets a primitive field.
    #[must_use]
    pub fn as_field(&self) -> Option<&FieldOptions> {
        match self {
            Self::Field(options) => Some(options),
            Self::Nested(_) => None,
        }
    }

    /// Returns the nested map when this entry targets an object field.
    #[must_use]
    pub fn as_nested(&self) -> Option<&FieldOptionsMap> {
        match self {
            Self::Field(_) => None,
            Self::Nested(map) => Some(map),
        }
    }
}

impl From<FieldOptions> for OptionsEntry {
    fn from(options: FieldOptions) -> Self {
        Self::Field(options)
    }
}

impl From<FieldOptionsMap> for OptionsEntry {
    fn from(map: FieldOptionsMap) -> Self {
        Self::Nested(map)
    }
}

/// Overrides keyed by field name, partial at every level.
///
/// Keys naming fields absent from the schema are inert. Entries whose kind
/// does not match the field's declaration (flat options for an object field,
/// a nested map for a primitive field) are ignored rather than rejected.
pub type FieldOptionsMap = HashMap<String, OptionsEntry>;
