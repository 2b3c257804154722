//! Configuration loading for `extract.toml`
//!
//! Loads an explicitly named config file and merges CLI overrides into it.
//! There is no discovery: without `--config` the defaults apply.

use super::schema::ExtractConfig;
use crate::output::OutputFormat;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Configuration loading error
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// File I/O error
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error
    #[error("Failed to parse extract.toml: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error
    #[error("Config validation failed:\n{}", .0.iter().map(|e| format!("  - {}", e)).collect::<Vec<_>>().join("\n"))]
    Validation(Vec<String>),
}

/// CLI arguments that can override config values
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    /// Override the parameter table
    pub parameters: Option<PathBuf>,
    /// Override the name table
    pub enumeration: Option<PathBuf>,
    /// Override the output file
    pub output: Option<PathBuf>,
    /// Override the output format
    pub format: Option<OutputFormat>,
    /// Enable strict identifiers
    pub strict_ids: Option<bool>,
}

/// Load configuration.
///
/// With a path, loads and validates that file; relative paths inside it are
/// resolved against the file's directory. Without one, returns the defaults.
///
/// # Example
/// ```ignore
/// let config = load_config(Some(Path::new("tools/extract.toml")))?;
/// ```
pub fn load_config(path: Option<&Path>) -> Result<ExtractConfig, ConfigError> {
    match path {
        Some(p) => load_config_file(p),
        None => Ok(ExtractConfig::default()),
    }
}

/// Load configuration from a specific file path.
fn load_config_file(path: &Path) -> Result<ExtractConfig, ConfigError> {
    let contents = fs::read_to_string(path)?;
    let mut config: ExtractConfig = toml::from_str(&contents)?;

    let errors = config.validate();
    if !errors.is_empty() {
        return Err(ConfigError::Validation(errors.into_iter().map(|e| e.to_string()).collect()));
    }

    if let Some(base) = path.parent() {
        resolve_relative_paths(&mut config, base);
    }

    Ok(config)
}

fn resolve_relative_paths(config: &mut ExtractConfig, base: &Path) {
    let slots = [
        &mut config.tables.parameters,
        &mut config.tables.enumeration,
        &mut config.output.path,
    ];
    for slot in slots {
        if let Some(p) = slot.as_mut() {
            if p.is_relative() {
                *p = base.join(&*p);
            }
        }
    }
}

/// Merge CLI overrides into a configuration.
///
/// CLI arguments take precedence over config file values.
pub fn merge_cli_overrides(config: &mut ExtractConfig, overrides: &CliOverrides) {
    if let Some(ref parameters) = overrides.parameters {
        config.tables.parameters = Some(parameters.clone());
    }

    if let Some(ref enumeration) = overrides.enumeration {
        config.tables.enumeration = Some(enumeration.clone());
    }

    if let Some(ref output) = overrides.output {
        config.output.path = Some(output.clone());
    }

    if let Some(format) = overrides.format {
        config.output.format = format;
    }

    if let Some(strict) = overrides.strict_ids {
        config.identifiers.strict = strict;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_config(dir: &Path, contents: &str) -> PathBuf {
        let config_path = dir.join("extract.toml");
        File::create(&config_path)
            .expect("should create config file")
            .write_all(contents.as_bytes())
            .expect("should write config content");
        config_path
    }

    #[test]
    fn test_load_config_none_uses_defaults() {
        let config = load_config(None).expect("defaults should load");
        assert_eq!(config, ExtractConfig::default());
    }

    #[test]
    fn test_load_config_resolves_relative_paths() {
        let temp = TempDir::new().expect("should create temp dir");
        let config_path = write_config(
            temp.path(),
            r#"
[tables]
parameters = "data/params.json5"

[output]
path = "build/objects.json"
format = "manifest"
"#,
        );

        let config = load_config(Some(&config_path)).expect("should load valid config");
        assert_eq!(config.tables.parameters, Some(temp.path().join("data/params.json5")));
        assert_eq!(config.tables.enumeration, None);
        assert_eq!(config.output.path, Some(temp.path().join("build/objects.json")));
        assert_eq!(config.output.format, OutputFormat::Manifest);
    }

    #[test]
    fn test_load_config_keeps_absolute_paths() {
        let temp = TempDir::new().expect("should create temp dir");
        let absolute = temp.path().join("elsewhere").join("names.json5");
        let config_path = write_config(
            temp.path(),
            &format!("[tables]\nenumeration = {:?}\n", absolute.display().to_string()),
        );

        let config = load_config(Some(&config_path)).expect("should load valid config");
        assert_eq!(config.tables.enumeration, Some(absolute));
    }

    #[test]
    fn test_load_config_missing_file() {
        let temp = TempDir::new().expect("should create temp dir");
        let result = load_config(Some(&temp.path().join("nonexistent.toml")));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_load_config_invalid_toml() {
        let temp = TempDir::new().expect("should create temp dir");
        let config_path = write_config(temp.path(), "[output\nformat = ");
        let result = load_config(Some(&config_path));
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_config_validation_error() {
        let temp = TempDir::new().expect("should create temp dir");
        let config_path = write_config(temp.path(), "[output]\ndefault_scale = -1.0\n");
        let err = load_config(Some(&config_path)).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(err.to_string().contains("output.default_scale"));
    }

    #[test]
    fn test_merge_cli_overrides() {
        let mut config = ExtractConfig::default();
        config.tables.parameters = Some(PathBuf::from("from-config.json5"));

        let overrides = CliOverrides {
            parameters: Some(PathBuf::from("from-cli.json5")),
            output: Some(PathBuf::from("out.json")),
            format: Some(OutputFormat::Manifest),
            strict_ids: Some(true),
            ..Default::default()
        };
        merge_cli_overrides(&mut config, &overrides);

        assert_eq!(config.tables.parameters, Some(PathBuf::from("from-cli.json5")));
        assert_eq!(config.tables.enumeration, None);
        assert_eq!(config.output.path, Some(PathBuf::from("out.json")));
        assert_eq!(config.output.format, OutputFormat::Manifest);
        assert!(config.identifiers.strict);
    }

    #[test]
    fn test_merge_empty_overrides_is_noop() {
        let mut config = ExtractConfig::default();
        config.identifiers.strict = true;
        merge_cli_overrides(&mut config, &CliOverrides::default());
        assert!(config.identifiers.strict);
    }
}
