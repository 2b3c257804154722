//! Projection of the parameter table onto sprite descriptors
//!
//! Joins each parameter entry with its name from the [`EnumerationTable`] and
//! produces one [`SpriteDescriptor`] per entry, in table order.

use thiserror::Error;

use crate::enumeration::EnumerationTable;
use crate::identifier::{parse_identifier, SpriteId};
use crate::models::{DescriptorBuilder, ParameterTable, SpriteDescriptor, Warning};

/// Fatal projection errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ExtractError {
    /// A parameter key has no entry in the name table.
    #[error("no enumeration entry for key '{key}'")]
    MissingEnumerationEntry { key: String },
    /// A key is not a plain decimal integer (strict identifiers only).
    #[error("key '{key}' is not a decimal integer")]
    MalformedIdentifier { key: String },
}

/// How keys that are not plain decimal integers are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdPolicy {
    /// Use the leading-digit prefix (or a `null` id) and record a warning.
    #[default]
    Lenient,
    /// Fail with [`ExtractError::MalformedIdentifier`].
    Strict,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ProjectOptions {
    pub ids: IdPolicy,
}

/// Descriptors plus any warnings raised while building them.
#[derive(Debug, Clone, Default)]
pub struct Projection {
    pub descriptors: Vec<SpriteDescriptor>,
    pub warnings: Vec<Warning>,
}

/// Project `parameters` with the default (lenient) options.
///
/// # Example
/// ```
/// use serde_json::json;
/// use strategy_board_assets::enumeration::EnumerationTable;
/// use strategy_board_assets::models::ParameterTable;
/// use strategy_board_assets::project::project;
///
/// let record = json!({"width": 10, "height": 20}).as_object().cloned().unwrap();
/// let parameters: ParameterTable = [("3", record)].into_iter().collect();
/// let names: EnumerationTable = [("3", "Tower")].into_iter().collect();
///
/// let descriptors = project(&parameters, &names).unwrap();
/// assert_eq!(
///     serde_json::to_string(&descriptors).unwrap(),
///     r#"[{"id":3,"name":"Tower","width":10,"height":20}]"#
/// );
/// ```
pub fn project(
    parameters: &ParameterTable,
    enumeration: &EnumerationTable,
) -> Result<Vec<SpriteDescriptor>, ExtractError> {
    project_with(parameters, enumeration, &ProjectOptions::default())
        .map(|projection| projection.descriptors)
}

/// Project `parameters`, joining each key with its name.
///
/// Either every entry projects or the first failing key is returned as an
/// error; no partial result is produced.
pub fn project_with(
    parameters: &ParameterTable,
    enumeration: &EnumerationTable,
    options: &ProjectOptions,
) -> Result<Projection, ExtractError> {
    let mut projection = Projection {
        descriptors: Vec::with_capacity(parameters.len()),
        warnings: Vec::new(),
    };

    for (key, record) in parameters.iter() {
        let parsed = parse_identifier(key);
        if !parsed.exact {
            match options.ids {
                IdPolicy::Strict => {
                    return Err(ExtractError::MalformedIdentifier { key: key.to_string() })
                }
                IdPolicy::Lenient => projection.warnings.push(malformed_warning(key, parsed.id)),
            }
        }

        let name = enumeration
            .lookup(key)
            .ok_or_else(|| ExtractError::MissingEnumerationEntry { key: key.to_string() })?;

        projection.descriptors.push(DescriptorBuilder::new(parsed.id, name).record(record).build());
    }

    Ok(projection)
}

fn malformed_warning(key: &str, id: SpriteId) -> Warning {
    let message = match id {
        SpriteId::Numeric(n) => format!("not a plain decimal integer, using id {}", n),
        SpriteId::NotANumber => "not a number, id emitted as null".to_string(),
    };
    Warning::new(key, message)
}
