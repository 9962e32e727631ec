//! Validation of components documents.
//!
//! Two layers are provided: JSON-Schema validation of the raw document shape
//! via [`validate_json`], and semantic checks via [`check_consistency`] —
//! qualifier strings against the BioModels controlled vocabulary, annotation
//! identifiers against their namespace's pattern, and the single-entry shape
//! of the reserved structural annotation keys. The converters themselves do
//! not validate; callers are expected to run these checks before building
//! entities from untrusted documents.

use std::collections::HashMap;
use std::error::Error;
use std::fmt;

use indexmap::IndexMap;
use jsonschema::validator_for;
use regex::Regex;
use schemars::schema_for;
use serde_json::Value;

use crate::convert::compound::{INCHI_KEY_PREFIX, INCHI_PREFIX, SMILES_PREFIX};
use crate::document::{AnnotationEntry, ComponentsDocument};
use crate::registry::{NamespaceRegistry, BIOLOGY_QUALIFIERS};

/// Report containing validation results.
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct ValidationReport {
    /// Whether the document is valid.
    pub valid: bool,
    /// List of validation errors if any.
    pub errors: Vec<ValidationError>,
}

/// Individual validation error details.
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct ValidationError {
    /// Path to the offending value within the document.
    pub location: String,
    /// Description of the validation error.
    pub message: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.location, self.message)
    }
}

/// Validates a components document against its JSON schema.
///
/// # Arguments
/// * `content` - JSON string containing the components document
///
/// # Returns
/// * `Result<ValidationReport, Box<dyn Error>>` - Validation report or error if validation fails
pub fn validate_json(content: &str) -> Result<ValidationReport, Box<dyn Error>> {
    let json: Value = serde_json::from_str(content)?;
    let schema = serde_json::to_value(schema_for!(ComponentsDocument))?;
    let validator = validator_for(&schema).expect("Error compiling schema");

    if validator.is_valid(&json) {
        Ok(ValidationReport {
            valid: true,
            errors: vec![],
        })
    } else {
        let mut validation_errors = vec![];
        for error in validator.iter_errors(&json) {
            validation_errors.push(ValidationError {
                location: error.instance_path.to_string(),
                message: error.to_string().replace('"', "'"),
            });
        }

        Ok(ValidationReport {
            valid: false,
            errors: validation_errors,
        })
    }
}

/// Checks the semantic consistency of a components document against a
/// namespace registry.
pub fn check_consistency(
    doc: &ComponentsDocument,
    namespaces: &NamespaceRegistry,
) -> ValidationReport {
    let mut checker = ConsistencyChecker::new(namespaces);

    for (id, compartment) in &doc.compartments {
        checker.check_annotation(&format!("/compartments/{id}"), &compartment.annotation);
    }
    for (id, compound) in &doc.compounds {
        let location = format!("/compounds/{id}");
        checker.check_annotation(&location, &compound.annotation);
        checker.check_structural_keys(&location, &compound.annotation);
    }
    for (id, reaction) in &doc.reactions {
        checker.check_annotation(&format!("/reactions/{id}"), &reaction.annotation);
    }

    ValidationReport {
        valid: checker.errors.is_empty(),
        errors: checker.errors,
    }
}

struct ConsistencyChecker<'a> {
    namespaces: &'a NamespaceRegistry,
    // Compiled namespace patterns, None for patterns that fail to compile.
    patterns: HashMap<String, Option<Regex>>,
    errors: Vec<ValidationError>,
}

impl<'a> ConsistencyChecker<'a> {
    fn new(namespaces: &'a NamespaceRegistry) -> Self {
        Self {
            namespaces,
            patterns: HashMap::new(),
            errors: Vec::new(),
        }
    }

    fn check_annotation(
        &mut self,
        location: &str,
        annotation: &IndexMap<String, Vec<AnnotationEntry>>,
    ) {
        for (prefix, entries) in annotation {
            for (index, entry) in entries.iter().enumerate() {
                let entry_location = format!("{location}/annotation/{prefix}/{index}");
                if !BIOLOGY_QUALIFIERS.contains(&entry.biology_qualifier.as_str()) {
                    self.errors.push(ValidationError {
                        location: entry_location.clone(),
                        message: format!(
                            "'{}' is not a valid biology qualifier",
                            entry.biology_qualifier
                        ),
                    });
                }
                if is_reserved_prefix(prefix) {
                    continue;
                }
                self.check_identifier(&entry_location, prefix, &entry.identifier);
            }
        }
    }

    fn check_identifier(&mut self, location: &str, prefix: &str, identifier: &str) {
        let Some(namespace) = self.namespaces.get(prefix) else {
            return;
        };
        let pattern = self
            .patterns
            .entry(prefix.to_string())
            .or_insert_with(|| Regex::new(&namespace.pattern).ok());
        match pattern {
            Some(pattern) if !pattern.is_match(identifier) => {
                self.errors.push(ValidationError {
                    location: location.to_string(),
                    message: format!(
                        "identifier '{identifier}' does not match the namespace pattern '{}'",
                        namespace.pattern
                    ),
                });
            }
            None => {
                self.errors.push(ValidationError {
                    location: location.to_string(),
                    message: format!(
                        "the namespace pattern '{}' is not a valid regular expression",
                        namespace.pattern
                    ),
                });
            }
            _ => {}
        }
    }

    fn check_structural_keys(
        &mut self,
        location: &str,
        annotation: &IndexMap<String, Vec<AnnotationEntry>>,
    ) {
        for prefix in [INCHI_PREFIX, INCHI_KEY_PREFIX, SMILES_PREFIX] {
            if let Some(entries) = annotation.get(prefix) {
                if entries.len() != 1 {
                    self.errors.push(ValidationError {
                        location: format!("{location}/annotation/{prefix}"),
                        message: format!("expected exactly one entry, found {}", entries.len()),
                    });
                }
            }
        }
    }
}

fn is_reserved_prefix(prefix: &str) -> bool {
    matches!(prefix, INCHI_PREFIX | INCHI_KEY_PREFIX | SMILES_PREFIX)
}
