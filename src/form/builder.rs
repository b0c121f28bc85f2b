use crate::form::options::{FieldOptions, FieldOptionsMap, OptionsEntry};
use crate::schema::types::Schema;

/// Chainable accumulator for assembling a [`FieldOptionsMap`] incrementally.
///
/// Each call merges shallowly into the accumulated state: later calls win
/// per top-level field, and a nested map supplied for a key replaces any
/// earlier entry for that key wholesale. The builder holds no schema and
/// performs no validation; it only accumulates overrides for
/// [`generate_fields`](crate::form::generator::generate_fields).
#[derive(Debug, Clone, Default)]
pub struct OptionsBuilder {
    options: FieldOptionsMap,
}

impl OptionsBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Merges `overrides` into the accumulated state.
    #[must_use]
    pub fn with_overrides(mut self, overrides: FieldOptionsMap) -> Self {
        self.options.extend(overrides);
        self
    }

    /// Sets the overrides for a single primitive field.
    #[must_use]
    pub fn with_field(mut self, name: impl Into<String>, options: FieldOptions) -> Self {
        self.options.insert(name.into(), OptionsEntry::Field(options));
        self
    }

    /// Sets the nested overrides for an object field.
    #[must_use]
    pub fn with_nested(mut self, name: impl Into<String>, options: FieldOptionsMap) -> Self {
        self.options.insert(name.into(), OptionsEntry::Nested(options));
        self
    }

    /// Returns the accumulated overrides.
    #[must_use]
    pub fn build(self) -> FieldOptionsMap {
        self.options
    }
}

impl Schema {
    /// Starts an [`OptionsBuilder`] for assembling this schema's overrides.
    #[must_use]
    pub fn options_builder(&self) -> OptionsBuilder {
        OptionsBuilder::new()
    }
}
