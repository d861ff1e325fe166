//! prop-types - runtime type checking for component props
//!
//! Declare a schema of checkers, then validate props records against it:
//!
//! ```ignore
//! use prop_types::{number, shape, string, Props, Schema};
//!
//! let schema = Schema::new()
//!     .field("age", number())
//!     .field("person", shape([("name", string().required())]));
//!
//! schema.validate(&Props::new().with("age", 25))?;
//! ```

pub mod checker;
pub mod component;
pub mod config;
pub mod schema;
pub mod value;

pub use checker::{
    any, array, array_of, bool, func, instance_of, number, object, object_of, one_of,
    one_of_type, shape, string, Checker, Diagnostic, DiagnosticCode,
};
pub use component::{Component, Validated};
pub use config::Config;
pub use schema::{validate, PropsError, PropsResult, Schema};
pub use value::{Class, Function, Props, Value};
