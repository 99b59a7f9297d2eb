use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Value stored in a free-form JSON column (`details`, `preferences`).
///
/// Recursive and closed under its own definition: every nested value is
/// again a `Json`. Serializes transparently — `Json::Null` is `null`,
/// objects are plain JSON objects, no tagging.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Json {
    #[default]
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Array(Vec<Json>),
    Object(BTreeMap<String, Json>),
}

impl Json {
    pub fn is_null(&self) -> bool {
        matches!(self, Json::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Json::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Json::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Json::String(s) => Some(s),
            _ => None,
        }
    }

    /// Object member lookup. Returns `None` for non-objects and missing keys.
    pub fn get(&self, key: &str) -> Option<&Json> {
        match self {
            Json::Object(map) => map.get(key),
            _ => None,
        }
    }
}

impl From<bool> for Json {
    fn from(b: bool) -> Self {
        Json::Bool(b)
    }
}

impl From<f64> for Json {
    fn from(n: f64) -> Self {
        Json::Number(n)
    }
}

impl From<i64> for Json {
    fn from(n: i64) -> Self {
        Json::Number(n as f64)
    }
}

impl From<&str> for Json {
    fn from(s: &str) -> Self {
        Json::String(s.to_string())
    }
}

impl From<String> for Json {
    fn from(s: String) -> Self {
        Json::String(s)
    }
}

impl From<Vec<Json>> for Json {
    fn from(items: Vec<Json>) -> Self {
        Json::Array(items)
    }
}

impl From<BTreeMap<String, Json>> for Json {
    fn from(map: BTreeMap<String, Json>) -> Self {
        Json::Object(map)
    }
}

impl From<serde_json::Value> for Json {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Json::Null,
            serde_json::Value::Bool(b) => Json::Bool(b),
            // Postgres json numbers land here as f64; integers beyond 2^53
            // lose precision the same way they would in the generated client.
            serde_json::Value::Number(n) => Json::Number(n.as_f64().unwrap_or(0.0)),
            serde_json::Value::String(s) => Json::String(s),
            serde_json::Value::Array(items) => {
                Json::Array(items.into_iter().map(Json::from).collect())
            }
            serde_json::Value::Object(map) => Json::Object(
                map.into_iter().map(|(k, v)| (k, Json::from(v))).collect(),
            ),
        }
    }
}

impl From<Json> for serde_json::Value {
    fn from(value: Json) -> Self {
        match value {
            Json::Null => serde_json::Value::Null,
            Json::Bool(b) => serde_json::Value::Bool(b),
            Json::Number(n) => serde_json::Number::from_f64(n)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Json::String(s) => serde_json::Value::String(s),
            Json::Array(items) => {
                serde_json::Value::Array(items.into_iter().map(Into::into).collect())
            }
            Json::Object(map) => serde_json::Value::Object(
                map.into_iter().map(|(k, v)| (k, v.into())).collect(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_without_tags() {
        let value = Json::Object(BTreeMap::from([
            ("theme".to_string(), Json::from("dark")),
            ("notifications".to_string(), Json::Bool(true)),
            ("limit".to_string(), Json::from(20i64)),
            ("extra".to_string(), Json::Null),
        ]));

        let text = serde_json::to_string(&value).unwrap();
        assert_eq!(
            text,
            r#"{"extra":null,"limit":20.0,"notifications":true,"theme":"dark"}"#
        );
    }

    #[test]
    fn deserializes_nested_values() {
        let value: Json =
            serde_json::from_str(r#"{"tags":["travel","eu"],"meta":{"v":1}}"#).unwrap();

        let tags = value.get("tags").unwrap();
        assert_eq!(tags, &Json::Array(vec![Json::from("travel"), Json::from("eu")]));
        assert_eq!(value.get("meta").unwrap().get("v").unwrap().as_f64(), Some(1.0));
    }

    #[test]
    fn null_roundtrips() {
        let value: Json = serde_json::from_str("null").unwrap();
        assert!(value.is_null());
        assert_eq!(serde_json::to_string(&value).unwrap(), "null");
    }

    #[test]
    fn value_conversion_roundtrips() {
        let original: serde_json::Value =
            serde_json::from_str(r#"{"a":[1.5,false,null],"b":"x"}"#).unwrap();
        let through: serde_json::Value = Json::from(original.clone()).into();
        assert_eq!(through, original);
    }
}
