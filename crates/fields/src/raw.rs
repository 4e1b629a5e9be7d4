use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Any shape a list-valued field may legally arrive in.
///
/// The backend stores these fields as JSON arrays, but historical records
/// also hold JSON-encoded strings (occasionally encoded twice) and
/// newline-delimited text typed into admin forms. Decoding is total: every
/// JSON value maps onto one of these variants, so reading a field never
/// fails.
#[derive(Debug, Clone, PartialEq)]
pub enum RawFieldValue {
    /// Absent field or explicit `null`.
    Null,
    Bool(bool),
    Number(serde_json::Number),
    /// A single string: plain text, newline-delimited lines, or JSON text.
    Text(String),
    /// A wire array; elements may themselves be JSON-encoded arrays.
    Sequence(Vec<RawFieldValue>),
}

impl RawFieldValue {
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl From<Value> for RawFieldValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(b),
            Value::Number(n) => Self::Number(n),
            Value::String(s) => Self::Text(s),
            Value::Array(items) => Self::Sequence(items.into_iter().map(Self::from).collect()),
            // Objects have no list reading; keep the data as literal text
            // rather than dropping it.
            object @ Value::Object(_) => Self::Text(object.to_string()),
        }
    }
}

impl From<&str> for RawFieldValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for RawFieldValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Vec<String>> for RawFieldValue {
    fn from(items: Vec<String>) -> Self {
        Self::Sequence(items.into_iter().map(Self::Text).collect())
    }
}

impl From<Vec<&str>> for RawFieldValue {
    fn from(items: Vec<&str>) -> Self {
        Self::Sequence(items.into_iter().map(Self::from).collect())
    }
}

impl<T> From<Option<T>> for RawFieldValue
where
    T: Into<RawFieldValue>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl<'de> Deserialize<'de> for RawFieldValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(Self::from)
    }
}
