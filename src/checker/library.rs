//! Checker library
//!
//! Primitive checkers bind a `typeof` tag; combinators build composite
//! checkers whose predicates delegate to nested checkers. Composite
//! checkers stop at the first failing element, key or field.

use indexmap::IndexMap;

use super::errors::Diagnostic;
use super::factory::Checker;
use super::types::{Kind, Rule, TypeTag};
use crate::value::{Class, Object, Value};

/// Accepts any present value
pub fn any() -> Checker {
    Checker::untyped(Kind::Any)
}

/// Accepts arrays
pub fn array() -> Checker {
    Checker::new(
        Kind::Array,
        Rule::predicate(|value, field| expect_array(value, field).map(|_| ())),
    )
}

pub fn bool() -> Checker {
    Checker::new(Kind::Bool, Rule::PrimitiveType(TypeTag::Boolean))
}

pub fn func() -> Checker {
    Checker::new(Kind::Func, Rule::PrimitiveType(TypeTag::Function))
}

pub fn number() -> Checker {
    Checker::new(Kind::Number, Rule::PrimitiveType(TypeTag::Number))
}

/// Accepts anything whose `typeof` is `object`, including null and arrays
pub fn object() -> Checker {
    Checker::new(Kind::Object, Rule::PrimitiveType(TypeTag::Object))
}

pub fn string() -> Checker {
    Checker::new(Kind::String, Rule::PrimitiveType(TypeTag::String))
}

/// Accepts arrays whose every element passes `element`.
///
/// Elements are checked as `<field>.<index>`; the first failure is kept as
/// the source of the aggregate diagnostic.
pub fn array_of(element: Checker) -> Checker {
    Checker::new(
        Kind::ArrayOf,
        Rule::predicate(move |value, field| {
            let items = expect_array(value, field)?;
            for (index, item) in items.iter().enumerate() {
                element
                    .check(item, &format!("{}.{}", field, index))
                    .map_err(|err| Diagnostic::CompositeElementInvalid {
                        field: field.to_string(),
                        element: Box::new(err),
                    })?;
            }
            Ok(())
        }),
    )
}

/// Accepts objects whose every own value passes `checker`, checked in key
/// order as `<field>.<key>`.
pub fn object_of(checker: Checker) -> Checker {
    Checker::new(
        Kind::ObjectOf,
        Rule::predicate(move |value, field| {
            let obj = expect_object(value, field)?;
            for (key, item) in obj.fields() {
                checker
                    .check(item, &format!("{}.{}", field, key))
                    .map_err(Diagnostic::nested)?;
            }
            Ok(())
        }),
    )
}

/// Accepts values strictly equal to one of `allowed`
pub fn one_of<I, V>(allowed: I) -> Checker
where
    I: IntoIterator<Item = V>,
    V: Into<Value>,
{
    let allowed: Vec<Value> = allowed.into_iter().map(Into::into).collect();
    Checker::new(
        Kind::OneOf,
        Rule::predicate(move |value, field| {
            if allowed.iter().any(|candidate| candidate.strict_eq(value)) {
                return Ok(());
            }
            Err(Diagnostic::NotInAllowedSet {
                field: field.to_string(),
                allowed: allowed.iter().map(ToString::to_string).collect(),
                actual: value.to_string(),
            })
        }),
    )
}

/// Accepts values that at least one of `allowed` accepts
pub fn one_of_type<I>(allowed: I) -> Checker
where
    I: IntoIterator<Item = Checker>,
{
    let allowed: Vec<Checker> = allowed.into_iter().collect();
    Checker::new(
        Kind::OneOfType,
        Rule::predicate(move |value, field| {
            if allowed.iter().any(|checker| checker.check(value, field).is_ok()) {
                return Ok(());
            }
            Err(Diagnostic::NoMatchingType {
                field: field.to_string(),
                allowed: allowed.iter().map(|c| c.name().to_string()).collect(),
                actual: value.type_of(),
            })
        }),
    )
}

/// Accepts objects whose declared keys pass their checkers.
///
/// Keys are checked in declaration order as `<field>.<key>`; keys missing
/// from the value are absent, so only required nested checkers reject them.
pub fn shape<I, K>(fields: I) -> Checker
where
    I: IntoIterator<Item = (K, Checker)>,
    K: Into<String>,
{
    let fields: IndexMap<String, Checker> =
        fields.into_iter().map(|(k, c)| (k.into(), c)).collect();
    Checker::new(
        Kind::Shape,
        Rule::predicate(move |value, field| {
            let obj = expect_object(value, field)?;
            for (key, checker) in &fields {
                checker
                    .validate(obj.get(key), &format!("{}.{}", field, key))
                    .map_err(Diagnostic::nested)?;
            }
            Ok(())
        }),
    )
}

/// Accepts values with `class` on their prototype chain
pub fn instance_of(class: &Class) -> Checker {
    let class = class.clone();
    Checker::new(
        Kind::InstanceOf,
        Rule::predicate(move |value, field| {
            if value.is_instance_of(&class) {
                return Ok(());
            }
            Err(Diagnostic::NotAnInstance {
                field: field.to_string(),
                expected: class.name().to_string(),
                actual: value.constructor_name().unwrap_or("null").to_string(),
            })
        }),
    )
}

fn expect_array<'v>(value: &'v Value, field: &str) -> Result<&'v [Value], Diagnostic> {
    value.as_array().ok_or_else(|| Diagnostic::NotAnArray {
        field: field.to_string(),
        actual: value.type_of(),
    })
}

/// Keyed records only; null and arrays are reported by name.
fn expect_object<'v>(value: &'v Value, field: &str) -> Result<&'v Object, Diagnostic> {
    value.as_object().ok_or_else(|| {
        let actual = match value {
            Value::Null => "null",
            Value::Array(_) => "array",
            other => other.type_of(),
        };
        Diagnostic::type_mismatch(field, TypeTag::Object.as_str(), actual)
    })
}
