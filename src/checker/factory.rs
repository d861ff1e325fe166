//! Checker construction and validation
//!
//! A checker is built once when a schema is declared and reused for every
//! validation afterwards. It holds no per-call state.

use super::errors::Diagnostic;
use super::types::{Kind, Rule};
use crate::value::Value;

/// A reusable validation rule with a required flag.
///
/// Cloning is cheap: predicate rules are shared by reference.
#[derive(Debug, Clone)]
pub struct Checker {
    kind: Kind,
    required: bool,
    /// `None` only for `any`, which never rejects by type
    rule: Option<Rule>,
}

impl Checker {
    /// Create an optional checker of the given kind
    pub fn new(kind: Kind, rule: Rule) -> Self {
        Self {
            kind,
            required: false,
            rule: Some(rule),
        }
    }

    /// A checker that accepts every present value
    pub(crate) fn untyped(kind: Kind) -> Self {
        Self {
            kind,
            required: false,
            rule: None,
        }
    }

    /// Create a checker from a caller-defined predicate
    pub fn custom<F>(check: F) -> Self
    where
        F: Fn(&Value, &str) -> Result<(), Diagnostic> + Send + Sync + 'static,
    {
        Self::new(Kind::Custom, Rule::predicate(check))
    }

    /// Returns this checker with the required flag set.
    ///
    /// Clones taken before the call keep their own flag.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Name reported in `one_of_type` diagnostics
    pub fn name(&self) -> &'static str {
        self.kind.as_str()
    }

    pub fn rule(&self) -> Option<&Rule> {
        self.rule.as_ref()
    }

    /// Validates a possibly absent value.
    ///
    /// Absent values never reach the rule: they fail only when the checker
    /// is required.
    ///
    /// # Errors
    ///
    /// Returns the first `Diagnostic` found.
    pub fn validate(&self, value: Option<&Value>, field: &str) -> Result<(), Diagnostic> {
        let Some(value) = value else {
            if self.required {
                return Err(Diagnostic::required(field));
            }
            return Ok(());
        };

        match &self.rule {
            None => Ok(()),
            Some(Rule::PrimitiveType(tag)) => {
                if tag.matches(value) {
                    Ok(())
                } else {
                    Err(Diagnostic::type_mismatch(field, tag.as_str(), value.type_of()))
                }
            }
            Some(Rule::Predicate(predicate)) => predicate.check(value, field),
        }
    }

    /// Validates a value that is known to be present
    pub fn check(&self, value: &Value, field: &str) -> Result<(), Diagnostic> {
        self.validate(Some(value), field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checker::errors::DiagnosticCode;
    use crate::checker::types::TypeTag;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_optional_absent_passes() {
        let checker = Checker::new(Kind::Number, Rule::PrimitiveType(TypeTag::Number));
        assert!(checker.validate(None, "age").is_ok());
    }

    #[test]
    fn test_required_absent_fails() {
        let checker = Checker::new(Kind::Number, Rule::PrimitiveType(TypeTag::Number)).required();
        let err = checker.validate(None, "day").unwrap_err();
        assert_eq!(err.code(), DiagnosticCode::RequiredFieldMissing);
        assert_eq!(err.to_string(), "day is required");
    }

    #[test]
    fn test_type_tag_mismatch() {
        let checker = Checker::new(Kind::Bool, Rule::PrimitiveType(TypeTag::Boolean));
        let err = checker.check(&Value::Number(25.0), "age").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Expected age to be of type `boolean`, but got `number`"
        );
    }

    #[test]
    fn test_required_does_not_touch_clones() {
        let base = Checker::new(Kind::String, Rule::PrimitiveType(TypeTag::String));
        let required = base.clone().required();

        assert!(!base.is_required());
        assert!(required.is_required());
        assert!(base.validate(None, "name").is_ok());
        assert!(required.validate(None, "name").is_err());
    }

    #[test]
    fn test_rule_never_runs_on_absent_values() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let checker = Checker::custom(move |_, field| {
            counter.fetch_add(1, Ordering::SeqCst);
            Err(Diagnostic::custom(field, "rule ran"))
        })
        .required();

        let err = checker.validate(None, "f").unwrap_err();
        assert_eq!(err.code(), DiagnosticCode::RequiredFieldMissing);
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        assert!(checker.check(&Value::Null, "f").is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_untyped_accepts_everything_present() {
        let checker = Checker::untyped(Kind::Any);
        assert!(checker.check(&Value::Null, "x").is_ok());
        assert!(checker.check(&Value::Array(vec![]), "x").is_ok());
        assert_eq!(checker.name(), "any");
    }
}
