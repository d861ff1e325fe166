//! Validate-then-render wrapper

use std::ops::Deref;
use tracing::{trace, warn};

use super::Component;
use crate::config::{self, Config, UnknownProps};
use crate::schema::{self, PropsError, PropsResult};
use crate::value::Props;

/// A component whose render validates props first.
///
/// Everything else on the component stays reachable through `Deref`.
pub struct Validated<C> {
    inner: C,
    config: Config,
}

/// Wrap a component using the process-wide configuration
pub fn wrap<C: Component>(component: C) -> Validated<C> {
    wrap_with(*config::global(), component)
}

/// Wrap a component using an explicit configuration
pub fn wrap_with<C: Component>(config: Config, component: C) -> Validated<C> {
    Validated {
        inner: component,
        config,
    }
}

impl<C: Component> Validated<C> {
    /// Validate `props`, then render.
    ///
    /// # Errors
    ///
    /// Returns the first validation failure; the inner render does not run.
    /// Never fails in production mode.
    pub fn render(&self, props: &Props) -> PropsResult<C::Output> {
        if self.config.is_production() {
            trace!(component = self.inner.name(), "production mode, skipping prop validation");
            return Ok(self.inner.render(props));
        }

        schema::validate(self.inner.prop_types(), props)?;
        self.check_undeclared(props)?;
        Ok(self.inner.render(props))
    }

    fn check_undeclared(&self, props: &Props) -> PropsResult<()> {
        let declared = self.inner.prop_types();
        match self.config.unknown_props {
            UnknownProps::Allow => Ok(()),
            UnknownProps::Warn => {
                for prop in schema::undeclared(declared, props) {
                    warn!(
                        component = self.inner.name(),
                        prop,
                        "prop supplied but not declared in prop types"
                    );
                }
                Ok(())
            }
            UnknownProps::Deny => match schema::undeclared(declared, props).next() {
                Some(prop) => Err(PropsError::UnknownProp {
                    component: self.inner.name().to_string(),
                    prop: prop.to_string(),
                }),
                None => Ok(()),
            },
        }
    }
}

impl<C> Validated<C> {
    pub fn inner(&self) -> &C {
        &self.inner
    }

    pub fn into_inner(self) -> C {
        self.inner
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl<C> Deref for Validated<C> {
    type Target = C;

    fn deref(&self) -> &C {
        &self.inner
    }
}
