//! Prop-types configuration
//!
//! Validation exists to catch programmer errors during development, so it
//! can be switched off for production builds without code changes.
//!
//! Environment:
//! - `PROP_TYPES_ENV=production` turns validation off
//! - `PROP_TYPES_UNKNOWN_PROPS=allow|warn|deny` sets the undeclared-prop policy
//!
//! The process-wide configuration is read once and never changes after.

use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;
use thiserror::Error;
use tracing::warn;

/// Environment variable selecting the mode
pub const ENV_MODE: &str = "PROP_TYPES_ENV";

/// Environment variable selecting the undeclared-prop policy
pub const ENV_UNKNOWN_PROPS: &str = "PROP_TYPES_UNKNOWN_PROPS";

static GLOBAL: OnceLock<Config> = OnceLock::new();

/// Result type for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown undeclared-prop policy `{0}` (expected allow, warn or deny)")]
    InvalidPolicy(String),

    #[error("malformed configuration: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("configuration already installed")]
    AlreadyInstalled,
}

/// Whether props are validated at all
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Validate every render
    #[default]
    Development,
    /// Wrappers are pure pass-throughs
    Production,
}

impl Mode {
    /// Only the exact value `production` selects production mode
    pub fn from_env_value(value: &str) -> Self {
        if value == "production" {
            Mode::Production
        } else {
            Mode::Development
        }
    }
}

/// What to do with props a component does not declare
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownProps {
    /// Ignore them
    #[default]
    Allow,
    /// Log a warning and continue
    Warn,
    /// Reject the render
    Deny,
}

impl FromStr for UnknownProps {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "allow" => Ok(UnknownProps::Allow),
            "warn" => Ok(UnknownProps::Warn),
            "deny" => Ok(UnknownProps::Deny),
            _ => Err(ConfigError::InvalidPolicy(s.to_string())),
        }
    }
}

impl fmt::Display for UnknownProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            UnknownProps::Allow => "allow",
            UnknownProps::Warn => "warn",
            UnknownProps::Deny => "deny",
        };
        write!(f, "{}", name)
    }
}

/// Validation configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub mode: Mode,
    pub unknown_props: UnknownProps,
}

impl Config {
    /// Development mode, undeclared props allowed
    pub fn development() -> Self {
        Self::default()
    }

    /// Production mode: no validation
    pub fn production() -> Self {
        Self {
            mode: Mode::Production,
            ..Self::default()
        }
    }

    /// Returns this config with the given undeclared-prop policy
    pub fn with_unknown_props(self, unknown_props: UnknownProps) -> Self {
        Self {
            unknown_props,
            ..self
        }
    }

    pub fn is_production(&self) -> bool {
        self.mode == Mode::Production
    }

    /// Build a config from the process environment.
    ///
    /// # Errors
    ///
    /// Fails when the undeclared-prop policy is not recognised.
    pub fn from_env() -> ConfigResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mode = lookup(ENV_MODE)
            .map(|value| Mode::from_env_value(&value))
            .unwrap_or_default();
        let unknown_props = match lookup(ENV_UNKNOWN_PROPS) {
            Some(value) => value.parse()?,
            None => UnknownProps::default(),
        };
        Ok(Self {
            mode,
            unknown_props,
        })
    }

    /// Parse a JSON document such as `{"mode": "production"}`
    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Returns the process-wide configuration.
///
/// Read from the environment on first use unless [`install`] ran first.
/// An unusable environment falls back to the defaults with a warning.
pub fn global() -> &'static Config {
    GLOBAL.get_or_init(|| {
        Config::from_env().unwrap_or_else(|err| {
            warn!(error = %err, "ignoring prop-types environment configuration");
            Config::default()
        })
    })
}

/// Install the process-wide configuration.
///
/// Must run before the first [`global`] read.
pub fn install(config: Config) -> ConfigResult<()> {
    GLOBAL.set(config).map_err(|_| ConfigError::AlreadyInstalled)
}
