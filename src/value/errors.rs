//! Value conversion errors

use thiserror::Error;

/// Result type for value conversions
pub type ValueResult<T> = Result<T, ValueError>;

#[derive(Debug, Clone, Error)]
pub enum ValueError {
    /// Props must be a keyed record
    #[error("props must be an object, got `{actual}`")]
    NotAnObject {
        /// `typeof` name of the offending document
        actual: &'static str,
    },
}
