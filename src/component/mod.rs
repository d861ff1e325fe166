//! Component validation wrapper
//!
//! Wraps a component so its props are validated before every render.
//! Validation failure stops the render and the error goes to the caller.
//! In production mode the wrapper only forwards.
//!
//! # Usage
//!
//! ```ignore
//! use prop_types::{component, number, Props, Schema};
//!
//! let badge = component::from_fn(
//!     "Badge",
//!     Schema::new().field("count", number().required()),
//!     |props: &Props| props.len(),
//! );
//! let badge = component::wrap(badge);
//! badge.render(&Props::new().with("count", 3))?;
//! ```

mod function;
mod wrapper;

pub use function::{from_fn, FnComponent};
pub use wrapper::{wrap, wrap_with, Validated};

use crate::schema::Schema;
use crate::value::Props;

/// Something that renders from props and declares their schema
pub trait Component {
    type Output;

    /// Declared prop types
    fn prop_types(&self) -> &Schema;

    /// Render entry point
    fn render(&self, props: &Props) -> Self::Output;

    /// Name used in diagnostics and logs
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}
