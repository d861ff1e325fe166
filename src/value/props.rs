//! Props records
//!
//! A props record is the ordered key-value data handed to a component.
//! Looking up a key that was not supplied yields `None` (absent), which
//! checkers treat differently from an explicit `null`.

use serde::{Deserialize, Deserializer};

use super::convert::map_from_json;
use super::errors::ValueError;
use super::types::{Map, Value};

/// Ordered props record
#[derive(Debug, Clone, Default)]
pub struct Props(Map);

impl Props {
    /// Create an empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a prop, returning the record for chaining
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    /// Look up a prop; `None` means the prop was not supplied
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Prop names in supply order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_map(self) -> Map {
        self.0
    }
}

impl From<Map> for Props {
    fn from(map: Map) -> Self {
        Props(map)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Props {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Props(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl TryFrom<serde_json::Value> for Props {
    type Error = ValueError;

    fn try_from(json: serde_json::Value) -> Result<Self, Self::Error> {
        match json {
            serde_json::Value::Object(obj) => Ok(Props(map_from_json(obj))),
            other => Err(ValueError::NotAnObject {
                actual: Value::from(other).type_of(),
            }),
        }
    }
}

impl<'de> Deserialize<'de> for Props {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let json = serde_json::Value::deserialize(deserializer)?;
        Props::try_from(json).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_absent_vs_null() {
        let props = Props::try_from(json!({ "name": null })).unwrap();
        assert!(props.get("name").unwrap().is_null());
        assert!(props.get("age").is_none());
    }

    #[test]
    fn test_non_object_rejected() {
        let err = Props::try_from(json!([1, 2])).unwrap_err();
        assert!(err.to_string().contains("object"));
    }

    #[test]
    fn test_builder_preserves_order() {
        let props = Props::new().with("b", 1).with("a", "x");
        assert_eq!(props.keys().collect::<Vec<_>>(), vec!["b", "a"]);
        assert_eq!(props.len(), 2);
    }

    #[test]
    fn test_deserialize_props() {
        let props: Props = serde_json::from_str(r#"{"age": "25"}"#).unwrap();
        assert_eq!(props.get("age").unwrap().as_str(), Some("25"));

        let err = serde_json::from_str::<Props>("3");
        assert!(err.is_err());
    }
}
