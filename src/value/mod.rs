//! Dynamic values checked by prop types
//!
//! Props are untyped at the component boundary. This module provides:
//! - `Value`: the dynamic value tree
//! - `Class`: nominal constructors for instance checks
//! - `Props`: an ordered props record with absent-vs-null lookups

mod class;
mod convert;
mod errors;
mod props;
mod types;

pub use class::Class;
pub use errors::{ValueError, ValueResult};
pub use props::Props;
pub use types::{Function, Map, Object, Value};
