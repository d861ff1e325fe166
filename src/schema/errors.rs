//! Errors raised by schema validation
//!
//! Checkers hand back `Diagnostic` values; this is the error those become
//! once validation of a props record is aborted.

use thiserror::Error;

use crate::checker::{Diagnostic, DiagnosticCode};

/// Result type for props validation
pub type PropsResult<T> = Result<T, PropsError>;

#[derive(Debug, Clone, Error)]
pub enum PropsError {
    /// The first field that failed its checker
    #[error(transparent)]
    Invalid(#[from] Diagnostic),

    /// A prop was supplied that the component does not declare
    #[error("`{prop}` was supplied to `{component}` but is not declared in its prop types")]
    UnknownProp { component: String, prop: String },
}

impl PropsError {
    /// Returns the diagnostic for validation failures
    pub fn diagnostic(&self) -> Option<&Diagnostic> {
        match self {
            PropsError::Invalid(diagnostic) => Some(diagnostic),
            PropsError::UnknownProp { .. } => None,
        }
    }

    /// Returns the diagnostic code for validation failures
    pub fn code(&self) -> Option<DiagnosticCode> {
        self.diagnostic().map(Diagnostic::code)
    }
}
