//! Nominal constructor references for `instance_of` checks
//!
//! A `Class` is identified by reference, never by name: two classes that
//! happen to share a name are distinct. Every user class extends the
//! built-in `Object` class unless another parent is given.

use std::fmt;
use std::sync::{Arc, OnceLock};

struct ClassDef {
    name: String,
    parent: Option<Class>,
}

/// A named constructor with an optional parent class.
#[derive(Clone)]
pub struct Class(Arc<ClassDef>);

static OBJECT: OnceLock<Class> = OnceLock::new();
static ARRAY: OnceLock<Class> = OnceLock::new();
static FUNCTION: OnceLock<Class> = OnceLock::new();

impl Class {
    /// Create a class extending `Object`
    pub fn new(name: impl Into<String>) -> Self {
        Self::extends(name, Self::object())
    }

    /// Create a class extending the given parent
    pub fn extends(name: impl Into<String>, parent: &Class) -> Self {
        Class(Arc::new(ClassDef {
            name: name.into(),
            parent: Some(parent.clone()),
        }))
    }

    /// The built-in `Object` class, root of every prototype chain
    pub fn object() -> &'static Class {
        OBJECT.get_or_init(|| {
            Class(Arc::new(ClassDef {
                name: "Object".into(),
                parent: None,
            }))
        })
    }

    /// The built-in `Array` class
    pub fn array() -> &'static Class {
        ARRAY.get_or_init(|| Self::extends("Array", Self::object()))
    }

    /// The built-in `Function` class
    pub fn function() -> &'static Class {
        FUNCTION.get_or_init(|| Self::extends("Function", Self::object()))
    }

    /// Returns the constructor name
    pub fn name(&self) -> &str {
        &self.0.name
    }

    /// Returns the parent class, `None` only for `Object`
    pub fn parent(&self) -> Option<&Class> {
        self.0.parent.as_ref()
    }

    /// Whether `self` is `other` or inherits from it.
    pub fn is_subclass_of(&self, other: &Class) -> bool {
        let mut current = Some(self);
        while let Some(class) = current {
            if class == other {
                return true;
            }
            current = class.parent();
        }
        false
    }
}

impl PartialEq for Class {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for Class {}

impl fmt::Debug for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Class").field(&self.0.name).finish()
    }
}

impl fmt::Display for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtins_are_singletons() {
        assert_eq!(Class::object(), Class::object());
        assert_eq!(Class::array(), Class::array());
        assert_ne!(Class::array(), Class::function());
    }

    #[test]
    fn test_identity_not_name() {
        let a = Class::new("Error");
        let b = Class::new("Error");
        assert_ne!(a, b);
        assert_eq!(a, a.clone());
    }

    #[test]
    fn test_subclass_chain() {
        let error = Class::new("Error");
        let type_error = Class::extends("TypeError", &error);

        assert!(type_error.is_subclass_of(&error));
        assert!(type_error.is_subclass_of(Class::object()));
        assert!(!error.is_subclass_of(&type_error));
        assert!(!type_error.is_subclass_of(Class::array()));
    }

    #[test]
    fn test_object_has_no_parent() {
        assert!(Class::object().parent().is_none());
        assert_eq!(Class::array().parent(), Some(Class::object()));
    }
}
