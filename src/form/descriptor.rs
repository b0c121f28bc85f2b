use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::form::options::FieldOptions;

/// Final metadata record describing one renderable input element.
///
/// Descriptors are built from per-category defaults with caller overrides
/// merged on top. `id` and `name` equal the field name and `label` is the
/// capitalized field name unless an override says otherwise. Keys the core
/// does not model travel through `extra` untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub id: String,
    pub name: String,
    pub label: String,
    /// Element tag the renderer should emit, e.g. `input` or `select`
    pub tag: String,
    /// Input type attribute, e.g. `text`, `number`, `checkbox`
    #[serde(rename = "type")]
    pub field_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(rename = "inputMode", skip_serializing_if = "Option::is_none")]
    pub input_mode: Option<String>,
    #[serde(rename = "renderAs", skip_serializing_if = "Option::is_none")]
    pub render_as: Option<String>,
    /// Selectable members of an enumeration field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    /// Passthrough keys not modeled by the core
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl FieldDescriptor {
    /// Applies a partial override record on top of this descriptor.
    ///
    /// Shallow merge: every key present in `options` wins, keys left unset
    /// keep their current value. `extra` keys are unioned, the override
    /// winning per key.
    #[must_use]
    pub fn apply(mut self, options: &FieldOptions) -> Self {
        if let Some(id) = &options.id {
            self.id = id.clone();
        }
        if let Some(name) = &options.name {
            self.name = name.clone();
        }
        if let Some(label) = &options.label {
            self.label = label.clone();
        }
        if let Some(tag) = &options.tag {
            self.tag = tag.clone();
        }
        if let Some(field_type) = &options.field_type {
            self.field_type = field_type.clone();
        }
        if let Some(placeholder) = &options.placeholder {
            self.placeholder = Some(placeholder.clone());
        }
        if let Some(input_mode) = &options.input_mode {
            self.input_mode = Some(input_mode.clone());
        }
        if let Some(render_as) = &options.render_as {
            self.render_as = Some(render_as.clone());
        }
        if let Some(members) = &options.options {
            self.options = Some(members.clone());
        }
        for (key, value) in &options.extra {
            self.extra.insert(key.clone(), value.clone());
        }
        self
    }
}

/// One entry of a generated form.
///
/// Either a descriptor for a single input, or the named group produced by a
/// nested schema, holding that level's own ordered elements.
#[derive(Debug, Clone, PartialEq)]
pub enum FormElement {
    /// Descriptor for a single input element
    Field(FieldDescriptor),
    /// Nested group keyed by the object field's name
    Group {
        name: String,
        elements: Vec<FormElement>,
    },
}

impl FormElement {
    /// Returns the descriptor when this element is a single field.
    #[must_use]
    pub fn as_field(&self) -> Option<&FieldDescriptor> {
        match self {
            Self::Field(descriptor) => Some(descriptor),
            Self::Group { .. } => None,
        }
    }

    /// Returns the group name and elements when this element is a group.
    #[must_use]
    pub fn as_group(&self) -> Option<(&str, &[FormElement])> {
        match self {
            Self::Field(_) => None,
            Self::Group { name, elements } => Some((name, elements)),
        }
    }
}

impl Serialize for FormElement {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Field(descriptor) => descriptor.serialize(serializer),
            // A group serializes as the single-entry record the rendering
            // layer expects: { "<name>": [ ...elements ] }
            Self::Group { name, elements } => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry(name, elements)?;
                map.end()
            }
        }
    }
}

/// Ordered sequence of generated elements, in schema order.
pub type FormFields = Vec<FormElement>;
