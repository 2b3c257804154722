//! Loading of the parameter and name tables
//!
//! Both tables are JSON5 documents (comments, trailing commas and unquoted
//! keys allowed). The board object tables shipped with the crate are
//! compiled into the binary and used unless other files are given.

use serde_json::Value;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::enumeration::EnumerationTable;
use crate::models::ParameterTable;

const BUNDLED_PARAMETERS: &str = include_str!("../assets/sprite_parameters.json5");
const BUNDLED_ENUMERATION: &str = include_str!("../assets/strategy_board_objects.json5");

/// Which of the two input tables an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableKind {
    Parameters,
    Enumeration,
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableKind::Parameters => write!(f, "parameter table"),
            TableKind::Enumeration => write!(f, "enumeration table"),
        }
    }
}

/// Error type for table loading failures.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TableError {
    #[error("cannot read {kind} '{}': {source}", path.display())]
    Io {
        kind: TableKind,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{kind}: {message}")]
    Parse { kind: TableKind, message: String },
    #[error("{kind}: {message}")]
    Shape { kind: TableKind, message: String },
}

/// Parse a parameter table: an object whose values are all objects.
pub fn parse_parameters(text: &str) -> Result<ParameterTable, TableError> {
    let kind = TableKind::Parameters;
    let mut table = ParameterTable::new();
    for (key, value) in parse_object(text, kind)? {
        match value {
            Value::Object(record) => table.insert(key, record),
            other => {
                return Err(TableError::Shape {
                    kind,
                    message: format!("entry '{}' must be an object, found {}", key, type_name(&other)),
                })
            }
        }
    }
    Ok(table)
}

/// Parse a name table.
///
/// Accepts both directions of a numeric enum declaration, applied in source
/// order:
/// - `Tower: 3` registers the member name under key `"3"`
/// - `"3": "Tower"` registers the name under key `"3"` directly
pub fn parse_enumeration(text: &str) -> Result<EnumerationTable, TableError> {
    let kind = TableKind::Enumeration;
    let mut table = EnumerationTable::new();
    for (key, value) in parse_object(text, kind)? {
        match value {
            Value::String(name) => table.insert(key, name),
            Value::Number(ref n) => match n.as_i64() {
                Some(member_value) => table.insert_member(key, member_value),
                None => {
                    return Err(TableError::Shape {
                        kind,
                        message: format!("member '{}' must have an integer value, found {}", key, n),
                    })
                }
            },
            other => {
                return Err(TableError::Shape {
                    kind,
                    message: format!(
                        "entry '{}' must be an integer or a string, found {}",
                        key,
                        type_name(&other)
                    ),
                })
            }
        }
    }
    Ok(table)
}

pub fn load_parameters(path: &Path) -> Result<ParameterTable, TableError> {
    parse_parameters(&read_table(path, TableKind::Parameters)?)
}

pub fn load_enumeration(path: &Path) -> Result<EnumerationTable, TableError> {
    parse_enumeration(&read_table(path, TableKind::Enumeration)?)
}

/// The sprite parameter table shipped with the crate.
pub fn bundled_parameters() -> Result<ParameterTable, TableError> {
    parse_parameters(BUNDLED_PARAMETERS)
}

/// The board object name table shipped with the crate.
pub fn bundled_enumeration() -> Result<EnumerationTable, TableError> {
    parse_enumeration(BUNDLED_ENUMERATION)
}

fn read_table(path: &Path, kind: TableKind) -> Result<String, TableError> {
    fs::read_to_string(path).map_err(|source| TableError::Io {
        kind,
        path: path.to_path_buf(),
        source,
    })
}

fn parse_object(
    text: &str,
    kind: TableKind,
) -> Result<serde_json::Map<String, Value>, TableError> {
    let value: Value =
        json5::from_str(text).map_err(|e| TableError::Parse { kind, message: e.to_string() })?;
    match value {
        Value::Object(map) => Ok(map),
        other => Err(TableError::Shape {
            kind,
            message: format!("top level must be an object, found {}", type_name(&other)),
        }),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
