//! Wire types of the Firestore REST API

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A typed field value.
///
/// Serialized externally tagged, which is exactly the REST encoding:
/// `{"stringValue": "..."}`, `{"integerValue": "42"}` and so on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Value {
    NullValue(Option<String>),
    BooleanValue(bool),
    /// 64-bit integers travel as decimal strings
    IntegerValue(String),
    DoubleValue(f64),
    TimestampValue(String),
    StringValue(String),
    BytesValue(String),
    ReferenceValue(String),
    GeoPointValue(GeoPoint),
    MapValue(MapValue),
    ArrayValue(ArrayValue),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    #[serde(default)]
    pub latitude: f64,
    #[serde(default)]
    pub longitude: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MapValue {
    #[serde(default)]
    pub fields: BTreeMap<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArrayValue {
    #[serde(default)]
    pub values: Vec<Value>,
}

impl Value {
    /// Render scalar values as text; composite values have no text form
    pub fn as_text(&self) -> Option<String> {
        match self {
            Value::StringValue(s) | Value::IntegerValue(s) => Some(s.clone()),
            Value::DoubleValue(d) => Some(d.to_string()),
            Value::BooleanValue(b) => Some(b.to_string()),
            Value::NullValue(_) => Some(String::new()),
            _ => None,
        }
    }
}

/// A stored document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Full resource name; empty when writing a new document
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,

    #[serde(default)]
    pub fields: BTreeMap<String, Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_time: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_time: Option<String>,
}

impl Document {
    /// The document identifier: last segment of the resource name
    pub fn id(&self) -> Option<&str> {
        self.name
            .rsplit('/')
            .next()
            .filter(|segment| !segment.is_empty() && self.name.contains('/'))
    }
}

/// One page of a collection listing
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListDocumentsResponse {
    #[serde(default)]
    pub documents: Vec<Document>,

    #[serde(default)]
    pub next_page_token: Option<String>,
}
