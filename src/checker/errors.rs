//! Diagnostics produced by checkers
//!
//! Diagnostic codes:
//! - PROPS_REQUIRED
//! - PROPS_TYPE_MISMATCH
//! - PROPS_NOT_AN_ARRAY
//! - PROPS_ELEMENT_INVALID
//! - PROPS_NESTED_INVALID
//! - PROPS_NOT_ALLOWED_VALUE
//! - PROPS_NO_MATCHING_TYPE
//! - PROPS_NOT_AN_INSTANCE
//! - PROPS_CUSTOM
//!
//! Checkers return diagnostics as values so composite checkers can inspect
//! and re-wrap them. Only the schema walker turns one into a raised error.

use std::fmt;
use thiserror::Error;

/// Stable codes for each kind of validation failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticCode {
    /// Required field not supplied
    RequiredFieldMissing,
    /// Runtime type differs from the expected type tag
    TypeMismatch,
    /// Value is not an array
    NotAnArray,
    /// An array element failed its checker
    CompositeElementInvalid,
    /// A nested object field failed its checker
    NestedFieldInvalid,
    /// Value is not one of the allowed values
    NotInAllowedSet,
    /// No allowed checker accepted the value
    NoMatchingType,
    /// Value is not an instance of the expected class
    NotAnInstance,
    /// Caller-defined validator rejected the value
    CustomValidatorFailure,
}

impl DiagnosticCode {
    /// Returns the string code
    pub fn code(&self) -> &'static str {
        match self {
            DiagnosticCode::RequiredFieldMissing => "PROPS_REQUIRED",
            DiagnosticCode::TypeMismatch => "PROPS_TYPE_MISMATCH",
            DiagnosticCode::NotAnArray => "PROPS_NOT_AN_ARRAY",
            DiagnosticCode::CompositeElementInvalid => "PROPS_ELEMENT_INVALID",
            DiagnosticCode::NestedFieldInvalid => "PROPS_NESTED_INVALID",
            DiagnosticCode::NotInAllowedSet => "PROPS_NOT_ALLOWED_VALUE",
            DiagnosticCode::NoMatchingType => "PROPS_NO_MATCHING_TYPE",
            DiagnosticCode::NotAnInstance => "PROPS_NOT_AN_INSTANCE",
            DiagnosticCode::CustomValidatorFailure => "PROPS_CUSTOM",
        }
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A single validation failure
#[derive(Debug, Clone, Error)]
pub enum Diagnostic {
    #[error("{field} is required")]
    RequiredFieldMissing { field: String },

    #[error("Expected {field} to be of type `{expected}`, but got `{actual}`")]
    TypeMismatch {
        field: String,
        expected: &'static str,
        actual: &'static str,
    },

    #[error("Expected {field} to be an `Array`, but got `{actual}`")]
    NotAnArray { field: String, actual: &'static str },

    /// `element` carries the first failing element at `<field>.<index>`
    #[error("{field} does not consist of the correct type")]
    CompositeElementInvalid {
        field: String,
        #[source]
        element: Box<Diagnostic>,
    },

    /// `path` is the full dotted path of the innermost failure
    #[error("{source}")]
    NestedFieldInvalid {
        path: String,
        source: Box<Diagnostic>,
    },

    #[error("Expected {field} to be {}, but got `{actual}`", conjunction(.allowed))]
    NotInAllowedSet {
        field: String,
        allowed: Vec<String>,
        actual: String,
    },

    #[error("Expected {field} to be {}, but got `{actual}`", conjunction(.allowed))]
    NoMatchingType {
        field: String,
        allowed: Vec<String>,
        actual: &'static str,
    },

    #[error("Expected {field} to be an instance of `{expected}`, but got `{actual}`")]
    NotAnInstance {
        field: String,
        expected: String,
        actual: String,
    },

    #[error("{message}")]
    CustomValidatorFailure { field: String, message: String },
}

impl Diagnostic {
    pub fn required(field: impl Into<String>) -> Self {
        Diagnostic::RequiredFieldMissing {
            field: field.into(),
        }
    }

    pub fn type_mismatch(
        field: impl Into<String>,
        expected: &'static str,
        actual: &'static str,
    ) -> Self {
        Diagnostic::TypeMismatch {
            field: field.into(),
            expected,
            actual,
        }
    }

    /// A failure reported by a caller-defined validator
    pub fn custom(field: impl Into<String>, message: impl Into<String>) -> Self {
        Diagnostic::CustomValidatorFailure {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Wrap as a nested field failure. Already-nested diagnostics keep
    /// their innermost path and are not wrapped again.
    pub fn nested(self) -> Self {
        match self {
            nested @ Diagnostic::NestedFieldInvalid { .. } => nested,
            other => Diagnostic::NestedFieldInvalid {
                path: other.field().to_string(),
                source: Box::new(other),
            },
        }
    }

    /// Returns the diagnostic code
    pub fn code(&self) -> DiagnosticCode {
        match self {
            Diagnostic::RequiredFieldMissing { .. } => DiagnosticCode::RequiredFieldMissing,
            Diagnostic::TypeMismatch { .. } => DiagnosticCode::TypeMismatch,
            Diagnostic::NotAnArray { .. } => DiagnosticCode::NotAnArray,
            Diagnostic::CompositeElementInvalid { .. } => DiagnosticCode::CompositeElementInvalid,
            Diagnostic::NestedFieldInvalid { .. } => DiagnosticCode::NestedFieldInvalid,
            Diagnostic::NotInAllowedSet { .. } => DiagnosticCode::NotInAllowedSet,
            Diagnostic::NoMatchingType { .. } => DiagnosticCode::NoMatchingType,
            Diagnostic::NotAnInstance { .. } => DiagnosticCode::NotAnInstance,
            Diagnostic::CustomValidatorFailure { .. } => DiagnosticCode::CustomValidatorFailure,
        }
    }

    /// Returns the (possibly dotted) field path this diagnostic names
    pub fn field(&self) -> &str {
        match self {
            Diagnostic::NestedFieldInvalid { path, .. } => path,
            Diagnostic::RequiredFieldMissing { field }
            | Diagnostic::TypeMismatch { field, .. }
            | Diagnostic::NotAnArray { field, .. }
            | Diagnostic::CompositeElementInvalid { field, .. }
            | Diagnostic::NotInAllowedSet { field, .. }
            | Diagnostic::NoMatchingType { field, .. }
            | Diagnostic::NotAnInstance { field, .. }
            | Diagnostic::CustomValidatorFailure { field, .. } => field,
        }
    }

    /// Follows nested and element wrappers down to the failure that
    /// started the chain.
    pub fn root_cause(&self) -> &Diagnostic {
        match self {
            Diagnostic::NestedFieldInvalid { source, .. } => source.root_cause(),
            Diagnostic::CompositeElementInvalid { element, .. } => element.root_cause(),
            other => other,
        }
    }
}

/// Joins items as `a`, `a` or `b`, or `a`, `b`, or `c`.
fn conjunction(items: &[String]) -> String {
    let quoted: Vec<String> = items.iter().map(|item| format!("`{}`", item)).collect();
    match quoted.as_slice() {
        [] => String::new(),
        [only] => only.clone(),
        [first, second] => format!("{} or {}", first, second),
        [init @ .., last] => format!("{}, or {}", init.join(", "), last),
    }
}
