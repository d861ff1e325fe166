//! Schema walker
//!
//! Validation semantics:
//! - Fields are checked in declaration order
//! - Checker fields see `props[name]`, absent when not supplied
//! - Inline fields see the whole record
//! - The first diagnostic aborts the walk
//!
//! Undeclared props are not an error here; the component wrapper decides
//! what to do with them.

use tracing::debug;

use super::errors::{PropsError, PropsResult};
use super::types::{Schema, SchemaField};
use crate::checker::Diagnostic;
use crate::value::Props;

/// Validates a props record against a schema.
///
/// # Errors
///
/// Returns `PropsError::Invalid` carrying the first failing field's
/// diagnostic. Fields after it are not checked.
pub fn validate(schema: &Schema, props: &Props) -> PropsResult<()> {
    for (name, field) in schema.iter() {
        if let Err(diagnostic) = check_field(field, props, name) {
            debug!(
                field = name,
                path = diagnostic.field(),
                code = %diagnostic.code(),
                "prop validation failed"
            );
            return Err(PropsError::Invalid(diagnostic));
        }
    }
    Ok(())
}

fn check_field(field: &SchemaField, props: &Props, name: &str) -> Result<(), Diagnostic> {
    match field {
        SchemaField::Checker(checker) => checker.validate(props.get(name), name),
        SchemaField::Inline(validator) => validator.call(props, name),
    }
}

/// Props present in the record but not declared in the schema, in supply
/// order.
pub fn undeclared<'p>(schema: &'p Schema, props: &'p Props) -> impl Iterator<Item = &'p str> {
    props.keys().filter(move |key| !schema.contains(key))
}

impl Schema {
    /// Validates `props` against this schema; see [`validate`].
    pub fn validate(&self, props: &Props) -> PropsResult<()> {
        validate(self, props)
    }
}
