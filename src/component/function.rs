//! Function components

use super::Component;
use crate::schema::Schema;
use crate::value::Props;

/// A render function with its declared prop types
pub struct FnComponent<F> {
    name: String,
    prop_types: Schema,
    render: F,
}

/// Build a component from a render function
pub fn from_fn<F, R>(name: impl Into<String>, prop_types: Schema, render: F) -> FnComponent<F>
where
    F: Fn(&Props) -> R,
{
    FnComponent {
        name: name.into(),
        prop_types,
        render,
    }
}

impl<F, R> Component for FnComponent<F>
where
    F: Fn(&Props) -> R,
{
    type Output = R;

    fn prop_types(&self) -> &Schema {
        &self.prop_types
    }

    fn render(&self, props: &Props) -> R {
        (self.render)(props)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checker::string;

    #[test]
    fn test_fn_component_renders_without_validation() {
        let echo = from_fn("Echo", Schema::new().field("name", string()), |props: &Props| {
            props.get("name").map(ToString::to_string)
        });

        assert_eq!(echo.name(), "Echo");
        assert_eq!(echo.prop_types().len(), 1);
        // Unwrapped components never validate.
        assert_eq!(echo.render(&Props::new().with("name", 3)), Some("3".to_string()));
    }
}
