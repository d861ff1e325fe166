//! Checker kinds and rules
//!
//! `Kind` is a label for diagnostics only. Dispatch always happens on the
//! `Rule` variant: a primitive type tag or a predicate.

use std::fmt;
use std::sync::Arc;

use super::errors::Diagnostic;
use crate::value::Value;

/// Label naming the constructor that built a checker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Any,
    Array,
    ArrayOf,
    Bool,
    /// Named `function`, matching its type tag
    Func,
    InstanceOf,
    Number,
    Object,
    ObjectOf,
    OneOf,
    OneOfType,
    Shape,
    String,
    /// Built from a caller-supplied predicate
    Custom,
}

impl Kind {
    /// Returns the kind name used in diagnostics
    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Any => "any",
            Kind::Array => "array",
            Kind::ArrayOf => "arrayOf",
            Kind::Bool => "bool",
            Kind::Func => "function",
            Kind::InstanceOf => "instanceOf",
            Kind::Number => "number",
            Kind::Object => "object",
            Kind::ObjectOf => "objectOf",
            Kind::OneOf => "oneOf",
            Kind::OneOfType => "oneOfType",
            Kind::Shape => "shape",
            Kind::String => "string",
            Kind::Custom => "custom",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Primitive type names as reported by `typeof`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeTag {
    Boolean,
    Function,
    Number,
    Object,
    String,
}

impl TypeTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeTag::Boolean => "boolean",
            TypeTag::Function => "function",
            TypeTag::Number => "number",
            TypeTag::Object => "object",
            TypeTag::String => "string",
        }
    }

    /// Whether the value's `typeof` name equals this tag
    pub fn matches(&self, value: &Value) -> bool {
        value.type_of() == self.as_str()
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

type PredicateFn = dyn Fn(&Value, &str) -> Result<(), Diagnostic> + Send + Sync;

/// A validator function `(value, field) -> diagnostic-or-ok`
#[derive(Clone)]
pub struct Predicate(Arc<PredicateFn>);

impl Predicate {
    pub fn new<F>(check: F) -> Self
    where
        F: Fn(&Value, &str) -> Result<(), Diagnostic> + Send + Sync + 'static,
    {
        Predicate(Arc::new(check))
    }

    pub fn check(&self, value: &Value, field: &str) -> Result<(), Diagnostic> {
        (self.0)(value, field)
    }
}

impl fmt::Debug for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Predicate(..)")
    }
}

/// How a present value is checked
#[derive(Debug, Clone)]
pub enum Rule {
    /// Compare the value's `typeof` name against a tag
    PrimitiveType(TypeTag),
    /// Run an arbitrary validator
    Predicate(Predicate),
}

impl Rule {
    pub fn predicate<F>(check: F) -> Self
    where
        F: Fn(&Value, &str) -> Result<(), Diagnostic> + Send + Sync + 'static,
    {
        Rule::Predicate(Predicate::new(check))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_tag_matches() {
        assert!(TypeTag::Number.matches(&Value::Number(1.0)));
        assert!(TypeTag::Object.matches(&Value::Null));
        assert!(TypeTag::Object.matches(&Value::Array(vec![])));
        assert!(!TypeTag::String.matches(&Value::Number(1.0)));
        assert!(!TypeTag::Boolean.matches(&Value::Null));
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(Kind::ArrayOf.as_str(), "arrayOf");
        assert_eq!(Kind::OneOfType.to_string(), "oneOfType");
        assert_eq!(Kind::Bool.as_str(), "bool");
        assert_eq!(Kind::Func.as_str(), "function");
    }

    #[test]
    fn test_predicate_is_shared() {
        let rule = Rule::predicate(|_, field| Err(Diagnostic::custom(field, "nope")));
        let copy = rule.clone();
        match copy {
            Rule::Predicate(p) => {
                let err = p.check(&Value::Null, "x").unwrap_err();
                assert_eq!(err.to_string(), "nope");
            }
            Rule::PrimitiveType(_) => panic!("expected predicate rule"),
        }
    }
}
