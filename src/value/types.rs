//! Dynamic prop values
//!
//! Props arrive untyped, so they are modeled as a value tree that mirrors
//! the host semantics the checkers reason about:
//! - `typeof` names (`object` for null, arrays and objects)
//! - constructor names and prototype chains for instance checks
//! - strict equality for allowed-value checks

use indexmap::IndexMap;
use std::fmt;
use std::sync::Arc;

use super::class::Class;

/// Ordered string-keyed map of values
pub type Map = IndexMap<String, Value>;

/// A dynamically typed prop value
#[derive(Debug, Clone)]
pub enum Value {
    /// Explicit null; present, unlike an absent field
    Null,
    /// Boolean
    Bool(bool),
    /// 64-bit floating point number
    Number(f64),
    /// UTF-8 string
    String(String),
    /// Ordered list of values
    Array(Vec<Value>),
    /// Keyed record, optionally tagged with a class
    Object(Object),
    /// Callable value
    Function(Function),
}

impl Value {
    /// Create a plain object from its fields
    pub fn object(fields: Map) -> Self {
        Value::Object(Object::plain(fields))
    }

    /// Create an object constructed by `class`
    pub fn instance(class: &Class, fields: Map) -> Self {
        Value::Object(Object::instance(class, fields))
    }

    /// Returns the `typeof` name of this value
    pub fn type_of(&self) -> &'static str {
        match self {
            Value::Null | Value::Array(_) | Value::Object(_) => "object",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Function(_) => "function",
        }
    }

    /// Returns the constructor name, `None` for null
    pub fn constructor_name(&self) -> Option<&str> {
        match self {
            Value::Null => None,
            Value::Bool(_) => Some("Boolean"),
            Value::Number(_) => Some("Number"),
            Value::String(_) => Some("String"),
            Value::Array(_) => Some(Class::array().name()),
            Value::Object(obj) => Some(obj.class().name()),
            Value::Function(_) => Some(Class::function().name()),
        }
    }

    /// Whether `class` appears on this value's prototype chain.
    ///
    /// Primitives and null are never instances of anything.
    pub fn is_instance_of(&self, class: &Class) -> bool {
        match self {
            Value::Array(_) => Class::array().is_subclass_of(class),
            Value::Function(_) => Class::function().is_subclass_of(class),
            Value::Object(obj) => obj.class().is_subclass_of(class),
            _ => false,
        }
    }

    /// Strict equality.
    ///
    /// Primitives compare by value (`NaN` never equals itself), functions
    /// by identity, arrays and objects structurally.
    pub fn strict_eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => {
                a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.strict_eq(y))
            }
            (Value::Object(a), Value::Object(b)) => a.strict_eq(b),
            (Value::Function(a), Value::Function(b)) => a == b,
            _ => false,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_function(&self) -> Option<&Function> {
        match self {
            Value::Function(func) => Some(func),
            _ => None,
        }
    }
}

/// Renders the value the way string interpolation would.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Number(n) => write_number(f, *n),
            Value::String(s) => write!(f, "{}", s),
            Value::Array(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    // null elements render empty
                    if !item.is_null() {
                        write!(f, "{}", item)?;
                    }
                }
                Ok(())
            }
            Value::Object(_) => write!(f, "[object Object]"),
            Value::Function(func) => write!(f, "function {}()", func.name()),
        }
    }
}

fn write_number(f: &mut fmt::Formatter<'_>, n: f64) -> fmt::Result {
    if n.is_nan() {
        write!(f, "NaN")
    } else if n.is_infinite() {
        write!(f, "{}Infinity", if n < 0.0 { "-" } else { "" })
    } else if n == 0.0 {
        write!(f, "0")
    } else if n.abs() >= 1e21 || n.abs() < 1e-6 {
        // Exponent form with an explicit sign, e.g. `1e+21`, `1.5e-7`
        let exp = format!("{:e}", n);
        match exp.split_once('e') {
            Some((mantissa, power)) if !power.starts_with('-') => {
                write!(f, "{}e+{}", mantissa, power)
            }
            _ => write!(f, "{}", exp),
        }
    } else {
        write!(f, "{}", n)
    }
}

/// A keyed record with the class that constructed it.
#[derive(Debug, Clone)]
pub struct Object {
    class: Option<Class>,
    fields: Map,
}

impl Object {
    /// A plain object, constructed by `Object`
    pub fn plain(fields: Map) -> Self {
        Self {
            class: None,
            fields,
        }
    }

    /// An object constructed by `class`
    pub fn instance(class: &Class, fields: Map) -> Self {
        Self {
            class: Some(class.clone()),
            fields,
        }
    }

    /// Returns the constructing class
    pub fn class(&self) -> &Class {
        self.class.as_ref().unwrap_or_else(|| Class::object())
    }

    /// Returns own fields in insertion order
    pub fn fields(&self) -> &Map {
        &self.fields
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    fn strict_eq(&self, other: &Object) -> bool {
        self.class() == other.class()
            && self.fields.len() == other.fields.len()
            && self
                .fields
                .iter()
                .all(|(k, v)| other.fields.get(k).is_some_and(|o| v.strict_eq(o)))
    }
}

type Callable = dyn Fn(&[Value]) -> Value + Send + Sync;

/// A named callable value. Equality is by identity.
#[derive(Clone)]
pub struct Function {
    name: String,
    call: Arc<Callable>,
}

impl Function {
    pub fn new<F>(name: impl Into<String>, call: F) -> Self
    where
        F: Fn(&[Value]) -> Value + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            call: Arc::new(call),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Invoke the function with positional arguments
    pub fn call(&self, args: &[Value]) -> Value {
        (self.call)(args)
    }
}

impl PartialEq for Function {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.call, &other.call)
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Function").field("name", &self.name).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(pairs: &[(&str, Value)]) -> Map {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_type_of_names() {
        assert_eq!(Value::Null.type_of(), "object");
        assert_eq!(Value::Bool(true).type_of(), "boolean");
        assert_eq!(Value::Number(1.0).type_of(), "number");
        assert_eq!(Value::String("a".into()).type_of(), "string");
        assert_eq!(Value::Array(vec![]).type_of(), "object");
        assert_eq!(Value::object(Map::new()).type_of(), "object");
        assert_eq!(
            Value::Function(Function::new("f", |_| Value::Null)).type_of(),
            "function"
        );
    }

    #[test]
    fn test_constructor_names() {
        let error = Class::new("Error");
        assert_eq!(Value::Null.constructor_name(), None);
        assert_eq!(Value::Number(3.0).constructor_name(), Some("Number"));
        assert_eq!(Value::Array(vec![]).constructor_name(), Some("Array"));
        assert_eq!(Value::object(Map::new()).constructor_name(), Some("Object"));
        assert_eq!(
            Value::instance(&error, Map::new()).constructor_name(),
            Some("Error")
        );
    }

    #[test]
    fn test_instance_chain() {
        let error = Class::new("Error");
        let range_error = Class::extends("RangeError", &error);
        let value = Value::instance(&range_error, Map::new());

        assert!(value.is_instance_of(&range_error));
        assert!(value.is_instance_of(&error));
        assert!(value.is_instance_of(Class::object()));
        assert!(!value.is_instance_of(Class::array()));

        assert!(Value::Array(vec![]).is_instance_of(Class::array()));
        assert!(Value::Array(vec![]).is_instance_of(Class::object()));
        assert!(!Value::object(Map::new()).is_instance_of(Class::array()));
    }

    #[test]
    fn test_primitives_are_not_instances() {
        assert!(!Value::Null.is_instance_of(Class::object()));
        assert!(!Value::String("x".into()).is_instance_of(Class::object()));
        assert!(!Value::Number(1.0).is_instance_of(Class::object()));
    }

    #[test]
    fn test_strict_eq_primitives() {
        assert!(Value::Number(1.0).strict_eq(&Value::Number(1.0)));
        assert!(!Value::Number(f64::NAN).strict_eq(&Value::Number(f64::NAN)));
        assert!(!Value::Number(1.0).strict_eq(&Value::String("1".into())));
        assert!(Value::Null.strict_eq(&Value::Null));
    }

    #[test]
    fn test_strict_eq_functions_by_identity() {
        let f = Function::new("f", |_| Value::Null);
        let g = Function::new("f", |_| Value::Null);
        assert!(Value::Function(f.clone()).strict_eq(&Value::Function(f.clone())));
        assert!(!Value::Function(f).strict_eq(&Value::Function(g)));
    }

    #[test]
    fn test_strict_eq_objects_structural() {
        let a = Value::object(fields(&[("x", Value::Number(1.0))]));
        let b = Value::object(fields(&[("x", Value::Number(1.0))]));
        let c = Value::object(fields(&[("x", Value::Number(2.0))]));
        assert!(a.strict_eq(&b));
        assert!(!a.strict_eq(&c));
    }

    #[test]
    fn test_display_like_interpolation() {
        assert_eq!(Value::Number(25.0).to_string(), "25");
        assert_eq!(Value::Number(2.5).to_string(), "2.5");
        assert_eq!(Value::Number(f64::NAN).to_string(), "NaN");
        assert_eq!(Value::String("blue".into()).to_string(), "blue");
        assert_eq!(
            Value::Array(vec![Value::Number(1.0), Value::Number(2.0)]).to_string(),
            "1,2"
        );
        assert_eq!(Value::object(Map::new()).to_string(), "[object Object]");
    }

    #[test]
    fn test_display_null_elements_are_empty() {
        let items = Value::Array(vec![Value::Null, Value::Number(1.0)]);
        assert_eq!(items.to_string(), ",1");
        assert_eq!(Value::Null.to_string(), "null");
    }

    #[test]
    fn test_display_exponent_numbers() {
        assert_eq!(Value::Number(-1e21).to_string(), "-1e+21");
        assert_eq!(Value::Number(1.5e21).to_string(), "1.5e+21");
        assert_eq!(Value::Number(1e-7).to_string(), "1e-7");
        assert_eq!(Value::Number(1e20).to_string(), "100000000000000000000");
        assert_eq!(Value::Number(-0.0).to_string(), "0");
    }

    #[test]
    fn test_plain_object_class() {
        let plain = Object::plain(Map::new());
        assert_eq!(plain.class(), Class::object());

        let point = Class::new("Point");
        assert_eq!(Object::instance(&point, Map::new()).class(), &point);
    }

    #[test]
    fn test_function_call() {
        let double = Function::new("double", |args| {
            Value::Number(args.first().and_then(Value::as_f64).unwrap_or(0.0) * 2.0)
        });
        assert_eq!(double.call(&[Value::Number(4.0)]).as_f64(), Some(8.0));
    }
}
