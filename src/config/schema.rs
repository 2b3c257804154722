//! Configuration schema types for `extract.toml`
//!
//! Defines the structure and validation rules for extraction settings.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::manifest::DEFAULT_OBJECT_SCALE;
use crate::output::OutputFormat;

/// Input table locations. Unset tables use the bundled assets.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TablesConfig {
    /// Sprite parameter table (JSON5)
    #[serde(default)]
    pub parameters: Option<PathBuf>,
    /// Object name table (JSON5)
    #[serde(default)]
    pub enumeration: Option<PathBuf>,
}

/// Output settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Output file; stdout when unset
    #[serde(default)]
    pub path: Option<PathBuf>,
    /// Document shape
    #[serde(default)]
    pub format: OutputFormat,
    /// Manifest scale for objects without one
    #[serde(default = "default_scale")]
    pub default_scale: f64,
}

fn default_scale() -> f64 {
    DEFAULT_OBJECT_SCALE
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { path: None, format: OutputFormat::default(), default_scale: default_scale() }
    }
}

/// Identifier parsing settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IdentifiersConfig {
    /// Fail on keys that are not plain decimal integers
    #[serde(default)]
    pub strict: bool,
}

/// Complete `extract.toml` configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExtractConfig {
    #[serde(default)]
    pub tables: TablesConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub identifiers: IdentifiersConfig,
}

/// Configuration validation error
#[derive(Debug, Clone)]
pub struct ConfigValidationError {
    /// Path to the invalid field (e.g., "output.default_scale")
    pub field: String,
    /// Error message
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "extract.toml: '{}' {}", self.field, self.message)
    }
}

impl ExtractConfig {
    /// Validate the configuration and return any errors
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut errors = Vec::new();

        if !(self.output.default_scale.is_finite() && self.output.default_scale > 0.0) {
            errors.push(ConfigValidationError {
                field: "output.default_scale".to_string(),
                message: "must be a positive number".to_string(),
            });
        }

        let paths = [
            ("tables.parameters", &self.tables.parameters),
            ("tables.enumeration", &self.tables.enumeration),
            ("output.path", &self.output.path),
        ];
        for (field, path) in paths {
            if path.as_ref().is_some_and(|p| p.as_os_str().is_empty()) {
                errors.push(ConfigValidationError {
                    field: field.to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }

        errors
    }

    /// Check if validation passed
    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}
