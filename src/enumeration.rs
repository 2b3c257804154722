//! Object name table
//!
//! Maps table keys to the symbolic names of board objects. The table is built
//! once at startup, either from forward members (`Tower = 3`) or from direct
//! reverse entries (`"3" -> "Tower"`), and is read-only afterwards.

use std::collections::HashMap;

/// Lookup from object key (numeric string) to display name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnumerationTable {
    names: HashMap<String, String>,
}

impl EnumerationTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from enum members given as `(name, value)` pairs.
    ///
    /// Each member is registered under the decimal text of its value. When
    /// two members share a value, the later one wins.
    pub fn from_members<I, S>(members: I) -> Self
    where
        I: IntoIterator<Item = (S, i64)>,
        S: Into<String>,
    {
        let mut table = Self::new();
        for (name, value) in members {
            table.insert_member(name, value);
        }
        table
    }

    /// Register a forward member `name = value`.
    pub fn insert_member(&mut self, name: impl Into<String>, value: i64) {
        self.names.insert(value.to_string(), name.into());
    }

    /// Register a direct `key -> name` entry.
    pub fn insert(&mut self, key: impl Into<String>, name: impl Into<String>) {
        self.names.insert(key.into(), name.into());
    }

    /// Name registered for `key`, if any.
    ///
    /// The key is matched as written: `"03"` does not find an entry
    /// registered under `"3"`.
    pub fn lookup(&self, key: &str) -> Option<&str> {
        self.names.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.names.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for EnumerationTable
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut table = Self::new();
        for (key, name) in iter {
            table.insert(key, name);
        }
        table
    }
}
