//! Schema definitions
//!
//! A schema maps field names to either a `Checker` or an inline validator
//! that sees the whole props record. Which one a field uses is fixed when
//! the schema is built. Fields keep their declaration order.

use indexmap::IndexMap;
use std::fmt;
use std::sync::Arc;

use crate::checker::{Checker, Diagnostic};
use crate::value::Props;

type InlineFn = dyn Fn(&Props, &str) -> Result<(), Diagnostic> + Send + Sync;

/// A validator invoked with `(props, field_name)`
#[derive(Clone)]
pub struct InlineValidator(Arc<InlineFn>);

impl InlineValidator {
    pub fn new<F>(validate: F) -> Self
    where
        F: Fn(&Props, &str) -> Result<(), Diagnostic> + Send + Sync + 'static,
    {
        InlineValidator(Arc::new(validate))
    }

    pub fn call(&self, props: &Props, field: &str) -> Result<(), Diagnostic> {
        (self.0)(props, field)
    }
}

impl fmt::Debug for InlineValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("InlineValidator(..)")
    }
}

/// How a single schema field is validated
#[derive(Debug, Clone)]
pub enum SchemaField {
    /// Validate `props[name]` with a checker
    Checker(Checker),
    /// Validate with a function over the whole record
    Inline(InlineValidator),
}

impl From<Checker> for SchemaField {
    fn from(checker: Checker) -> Self {
        SchemaField::Checker(checker)
    }
}

impl From<InlineValidator> for SchemaField {
    fn from(validator: InlineValidator) -> Self {
        SchemaField::Inline(validator)
    }
}

/// Ordered mapping of field name to field validation
#[derive(Debug, Clone, Default)]
pub struct Schema {
    fields: IndexMap<String, SchemaField>,
}

impl Schema {
    /// Create an empty schema
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a field checked by `checker`
    pub fn field(mut self, name: impl Into<String>, checker: Checker) -> Self {
        self.insert(name, checker);
        self
    }

    /// Declare a field checked by a function over the whole record
    pub fn inline<F>(mut self, name: impl Into<String>, validate: F) -> Self
    where
        F: Fn(&Props, &str) -> Result<(), Diagnostic> + Send + Sync + 'static,
    {
        self.insert(name, InlineValidator::new(validate));
        self
    }

    /// Declare or replace a field. Replacing keeps the original position.
    pub fn insert(&mut self, name: impl Into<String>, field: impl Into<SchemaField>) {
        self.fields.insert(name.into(), field.into());
    }

    pub fn get(&self, name: &str) -> Option<&SchemaField> {
        self.fields.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Fields in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SchemaField)> {
        self.fields.iter().map(|(k, f)| (k.as_str(), f))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, Checker)> for Schema {
    fn from_iter<I: IntoIterator<Item = (K, Checker)>>(iter: I) -> Self {
        let mut schema = Schema::new();
        for (name, checker) in iter {
            schema.insert(name, checker);
        }
        schema
    }
}
