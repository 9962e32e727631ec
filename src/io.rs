use std::path::PathBuf;

use thiserror::Error;

use crate::document::ComponentsDocument;

/// Loads and parses a components document from a JSON file.
///
/// # Arguments
///
/// * `path` - The path to the JSON file containing the components document
///
/// # Errors
///
/// This function will return an error if:
/// * The file cannot be found or opened (`IOError::FileNotFound`)
/// * The file contents cannot be parsed as valid JSON (`IOError::JsonParseError`)
pub fn load_components(path: impl Into<PathBuf>) -> Result<ComponentsDocument, IOError> {
    let path = path.into();
    let file = std::fs::File::open(path).map_err(IOError::FileNotFound)?;
    serde_json::from_reader(file).map_err(IOError::JsonParseError)
}

/// Saves a components document to a JSON file.
///
/// # Arguments
///
/// * `path` - The path to the JSON file to save the components document to
/// * `doc` - A reference to the components document to save
///
/// # Errors
///
/// This function will return an error if the file cannot be created or the
/// document cannot be serialized.
pub fn save_components(path: impl Into<PathBuf>, doc: &ComponentsDocument) -> Result<(), IOError> {
    let path = path.into();
    let file = std::fs::File::create(path).map_err(IOError::FileNotFound)?;
    serde_json::to_writer_pretty(file, doc).map_err(IOError::JsonParseError)
}

/// Represents errors that can occur during components document I/O
/// operations.
#[derive(Error, Debug)]
pub enum IOError {
    /// Indicates that the specified file could not be found or opened.
    #[error("File not found: {0}")]
    FileNotFound(#[from] std::io::Error),

    /// Indicates that the file contents could not be parsed as valid JSON.
    #[error("Failed to parse JSON: {0}")]
    JsonParseError(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{CompartmentDocumentBuilder, ComponentsDocumentBuilder};
    use indexmap::IndexMap;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("components.json");

        let doc = ComponentsDocumentBuilder::default()
            .compartments(IndexMap::from([(
                "c".to_string(),
                CompartmentDocumentBuilder::default()
                    .notes("cytosol".to_string())
                    .build()
                    .unwrap(),
            )]))
            .build()
            .unwrap();

        save_components(&path, &doc).unwrap();
        let loaded = load_components(&path).unwrap();

        assert_eq!(loaded, doc);
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_components("does/not/exist.json");
        assert!(matches!(result, Err(IOError::FileNotFound(_))));
    }
}
