//! JSON rendering and document output

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::io::{self, Write};
use std::path::Path;
use thiserror::Error;

use crate::manifest::ManifestEntry;
use crate::models::SpriteDescriptor;

/// Shape of the emitted document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Every descriptor with all of its record fields
    #[default]
    Descriptors,
    /// `id`, `name` and `scale` of objects that have a sprite image
    Manifest,
}

/// Error type for output operations
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum OutputError {
    /// The document could not be serialized
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
    /// IO error while writing the document
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Render descriptors as a compact JSON array.
pub fn render_descriptors(descriptors: &[SpriteDescriptor]) -> Result<String, OutputError> {
    Ok(serde_json::to_string(descriptors)?)
}

/// Render manifest entries as a compact JSON array.
pub fn render_manifest(entries: &[ManifestEntry]) -> Result<String, OutputError> {
    Ok(serde_json::to_string(entries)?)
}

/// Write a rendered document followed by a newline.
///
/// With no path the document goes to stdout. With a path, parent directories
/// are created as needed and the file is replaced.
pub fn write_document(document: &str, path: Option<&Path>) -> Result<(), OutputError> {
    match path {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            std::fs::write(path, format!("{}\n", document))?;
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            writeln!(handle, "{}", document)?;
            handle.flush()?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identifier::SpriteId;
    use crate::models::DescriptorBuilder;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_render_descriptors_compact() {
        let descriptors = vec![
            DescriptorBuilder::new(SpriteId::Numeric(3), "Tower")
                .field("width", json!(10))
                .field("height", json!(20))
                .build(),
            DescriptorBuilder::new(SpriteId::NotANumber, "Odd").build(),
        ];
        assert_eq!(
            render_descriptors(&descriptors).unwrap(),
            r#"[{"id":3,"name":"Tower","width":10,"height":20},{"id":null,"name":"Odd"}]"#
        );
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render_descriptors(&[]).unwrap(), "[]");
        assert_eq!(render_manifest(&[]).unwrap(), "[]");
    }

    #[test]
    fn test_write_document_creates_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("build").join("objects.json");

        write_document("[]", Some(&path)).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[]\n");
    }

    #[test]
    fn test_write_document_replaces_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("objects.json");
        std::fs::write(&path, "stale content that is longer").unwrap();

        write_document(r#"[{"id":1}]"#, Some(&path)).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[{\"id\":1}]\n");
    }

    #[test]
    fn test_format_names() {
        assert_eq!(serde_json::to_string(&OutputFormat::Manifest).unwrap(), r#""manifest""#);
        let parsed: OutputFormat = serde_json::from_str(r#""descriptors""#).unwrap();
        assert_eq!(parsed, OutputFormat::Descriptors);
    }
}
