//! Read-only lookup registries for namespaces and biology qualifiers.
//!
//! Converters borrow these registries at construction time and treat them as
//! frozen snapshots; nothing in this crate mutates a registry during
//! conversion. Populating them from reference data tables is the caller's
//! concern.

use std::collections::HashMap;
use std::sync::Arc;

use crate::entity::{BiologyQualifier, Namespace};

/// The BioModels biology qualifier controlled vocabulary, taken from
/// <https://co.mbine.org/standards/qualifiers>.
pub const BIOLOGY_QUALIFIERS: &[&str] = &[
    "encodes",
    "hasPart",
    "hasProperty",
    "hasTaxon",
    "hasVersion",
    "is",
    "isDescribedBy",
    "isEncodedBy",
    "isHomologTo",
    "isPartOf",
    "isPropertyOf",
    "isVersionOf",
    "occursIn",
];

/// A mapping from namespace prefixes to shared namespace handles.
#[derive(Debug, Clone, Default)]
pub struct NamespaceRegistry {
    namespaces: HashMap<String, Arc<Namespace>>,
}

impl NamespaceRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a namespace under its prefix, returning the shared handle.
    ///
    /// A namespace registered earlier under the same prefix is replaced.
    pub fn insert(&mut self, namespace: Namespace) -> Arc<Namespace> {
        let handle = Arc::new(namespace);
        self.namespaces
            .insert(handle.prefix.clone(), Arc::clone(&handle));
        handle
    }

    /// Look up the namespace registered under the given prefix.
    pub fn get(&self, prefix: &str) -> Option<&Arc<Namespace>> {
        self.namespaces.get(prefix)
    }

    /// Whether a namespace is registered under the given prefix.
    pub fn contains(&self, prefix: &str) -> bool {
        self.namespaces.contains_key(prefix)
    }

    /// The number of registered namespaces.
    pub fn len(&self) -> usize {
        self.namespaces.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.namespaces.is_empty()
    }

    /// Iterate over the registered prefixes and their namespace handles.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Arc<Namespace>)> {
        self.namespaces.iter()
    }
}

impl FromIterator<Namespace> for NamespaceRegistry {
    fn from_iter<I: IntoIterator<Item = Namespace>>(iter: I) -> Self {
        let mut registry = Self::new();
        for namespace in iter {
            registry.insert(namespace);
        }
        registry
    }
}

/// A mapping from qualifier strings to shared biology qualifier handles.
#[derive(Debug, Clone, Default)]
pub struct QualifierRegistry {
    qualifiers: HashMap<String, Arc<BiologyQualifier>>,
}

impl QualifierRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry pre-populated with the full BioModels controlled
    /// vocabulary.
    pub fn standard() -> Self {
        BIOLOGY_QUALIFIERS
            .iter()
            .map(|qualifier| BiologyQualifier {
                qualifier: (*qualifier).to_string(),
            })
            .collect()
    }

    /// Register a qualifier, returning the shared handle.
    pub fn insert(&mut self, qualifier: BiologyQualifier) -> Arc<BiologyQualifier> {
        let handle = Arc::new(qualifier);
        self.qualifiers
            .insert(handle.qualifier.clone(), Arc::clone(&handle));
        handle
    }

    /// Look up the handle for the given qualifier string.
    pub fn get(&self, qualifier: &str) -> Option<&Arc<BiologyQualifier>> {
        self.qualifiers.get(qualifier)
    }

    /// Whether the given qualifier string is registered.
    pub fn contains(&self, qualifier: &str) -> bool {
        self.qualifiers.contains_key(qualifier)
    }

    /// The number of registered qualifiers.
    pub fn len(&self) -> usize {
        self.qualifiers.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.qualifiers.is_empty()
    }
}

impl FromIterator<BiologyQualifier> for QualifierRegistry {
    fn from_iter<I: IntoIterator<Item = BiologyQualifier>>(iter: I) -> Self {
        let mut registry = Self::new();
        for qualifier in iter {
            registry.insert(qualifier);
        }
        registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::NamespaceBuilder;

    #[test]
    fn test_standard_vocabulary() {
        let registry = QualifierRegistry::standard();
        assert_eq!(registry.len(), BIOLOGY_QUALIFIERS.len());
        assert!(registry.contains("is"));
        assert!(registry.contains("isVersionOf"));
        assert!(!registry.contains("resembles"));
    }

    #[test]
    fn test_namespace_lookup_by_prefix() {
        let registry: NamespaceRegistry = [NamespaceBuilder::default()
            .miriam_id("MIR:00000002")
            .prefix("chebi")
            .pattern(r"^CHEBI:\d+$")
            .build()
            .unwrap()]
        .into_iter()
        .collect();
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("chebi").unwrap().prefix, "chebi");
        assert!(registry.get("rhea").is_none());
    }

    #[test]
    fn test_insert_replaces_prefix() {
        let mut registry = NamespaceRegistry::new();
        registry.insert(
            NamespaceBuilder::default()
                .miriam_id("MIR:00000002")
                .prefix("chebi")
                .pattern(r"^CHEBI:\d+$")
                .build()
                .unwrap(),
        );
        let replacement = registry.insert(
            NamespaceBuilder::default()
                .miriam_id("MIR:00000002")
                .prefix("chebi")
                .pattern(r"^.+$")
                .build()
                .unwrap(),
        );
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("chebi").unwrap().pattern, replacement.pattern);
    }
}
