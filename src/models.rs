//! Data models for sprite parameter tables and the descriptors built from them

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

use crate::identifier::SpriteId;

/// Fields of one sprite parameter entry, passed through untouched.
pub type ParameterRecord = Map<String, Value>;

/// Sprite parameters keyed by object key, in source order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParameterTable {
    entries: IndexMap<String, ParameterRecord>,
}

impl ParameterTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the record for `key`.
    ///
    /// Replacing keeps the key's original position.
    pub fn insert(&mut self, key: impl Into<String>, record: ParameterRecord) {
        self.entries.insert(key.into(), record);
    }

    pub fn get(&self, key: &str) -> Option<&ParameterRecord> {
        self.entries.get(key)
    }

    /// Entries in iteration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParameterRecord)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, ParameterRecord)> for ParameterTable {
    fn from_iter<T: IntoIterator<Item = (K, ParameterRecord)>>(iter: T) -> Self {
        let mut table = Self::new();
        for (key, record) in iter {
            table.insert(key, record);
        }
        table
    }
}

/// One board object as consumed by the editor: `id`, `name`, then every
/// field of its parameter record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpriteDescriptor {
    fields: Map<String, Value>,
}

impl SpriteDescriptor {
    /// The `id` field (`null` for keys that did not parse).
    pub fn id(&self) -> Option<&Value> {
        self.fields.get("id")
    }

    /// The `name` field as text, if it is a string.
    pub fn name(&self) -> Option<&str> {
        self.fields.get("name").and_then(Value::as_str)
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Field names in output order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.fields
    }
}

/// Builds a [`SpriteDescriptor`].
///
/// `id` and `name` are written first. Each later field overwrites an earlier
/// one with the same name but keeps the earlier position, so a record field
/// called `name` replaces the looked-up name in place.
#[derive(Debug, Clone)]
pub struct DescriptorBuilder {
    fields: Map<String, Value>,
}

impl DescriptorBuilder {
    pub fn new(id: SpriteId, name: impl Into<String>) -> Self {
        let mut fields = Map::new();
        let id = match id.value() {
            Some(n) => Value::from(n),
            None => Value::Null,
        };
        fields.insert("id".to_string(), id);
        fields.insert("name".to_string(), Value::String(name.into()));
        Self { fields }
    }

    pub fn field(mut self, name: impl Into<String>, value: Value) -> Self {
        self.fields.insert(name.into(), value);
        self
    }

    /// Copy every field of `record`, in record order.
    pub fn record(mut self, record: &ParameterRecord) -> Self {
        for (name, value) in record {
            self.fields.insert(name.clone(), value.clone());
        }
        self
    }

    pub fn build(self) -> SpriteDescriptor {
        SpriteDescriptor { fields: self.fields }
    }
}

/// A non-fatal problem found while projecting a table entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Warning {
    /// Table key (or object name) the warning refers to.
    pub key: String,
    pub message: String,
}

impl Warning {
    pub fn new(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self { key: key.into(), message: message.into() }
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "key '{}': {}", self.key, self.message)
    }
}
