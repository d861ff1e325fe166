//! Checker engine
//!
//! A `Checker` pairs a required flag with a rule. Primitive checkers
//! compare `typeof` tags; combinators compose nested checkers into checkers
//! for arrays, object maps, nested records, unions and class instances.
//!
//! # Principles
//!
//! - Absent values bypass rules; only `required` gates them
//! - `null` is present and has type `object`
//! - First failure wins, both within and across checkers
//! - Checkers return diagnostics, they never raise

mod errors;
mod factory;
mod library;
mod types;

pub use errors::{Diagnostic, DiagnosticCode};
pub use factory::Checker;
pub use library::{
    any, array, array_of, bool, func, instance_of, number, object, object_of, one_of,
    one_of_type, shape, string,
};
pub use types::{Kind, Predicate, Rule, TypeTag};
