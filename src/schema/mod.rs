//! Prop schemas and the schema walker
//!
//! A schema declares the expected shape of a props record as an ordered
//! mapping of field name to checker (or inline validator).
//!
//! # Design Principles
//!
//! - Declaration order is validation order
//! - First failure aborts the walk
//! - Diagnostics become errors here and nowhere else

mod errors;
mod types;
mod validator;

pub use errors::{PropsError, PropsResult};
pub use types::{InlineValidator, Schema, SchemaField};
pub use validator::{undeclared, validate};
