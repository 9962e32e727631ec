//! Shared folding of name and annotation collections.
//!
//! The persisted form keeps flat record lists, each record carrying its
//! namespace handle; the exchange form groups records into a mapping from
//! namespace prefix to entry lists. The four operations here perform that
//! transformation in both directions and are used identically by all three
//! component converters.
//!
//! Folding preserves input order within each prefix bucket and never
//! deduplicates. Unfolding fails fast on prefixes or qualifiers that are
//! missing from the supplied registries rather than silently dropping
//! records.

use std::sync::Arc;

use indexmap::IndexMap;

use crate::convert::error::ConversionError;
use crate::document::{AnnotationEntry, NameEntry};
use crate::entity::{Annotation, Name};
use crate::registry::{NamespaceRegistry, QualifierRegistry};

/// Group name records by their namespace prefix.
pub fn fold_names(names: &[Name]) -> IndexMap<String, Vec<NameEntry>> {
    let mut grouped: IndexMap<String, Vec<NameEntry>> = IndexMap::new();
    for name in names {
        grouped
            .entry(name.namespace.prefix.clone())
            .or_default()
            .push(NameEntry {
                name: name.name.clone(),
                is_preferred: name.is_preferred,
            });
    }
    grouped
}

/// Group annotation records by their namespace prefix, carrying the
/// qualifier string through.
pub fn fold_annotations(annotation: &[Annotation]) -> IndexMap<String, Vec<AnnotationEntry>> {
    let mut grouped: IndexMap<String, Vec<AnnotationEntry>> = IndexMap::new();
    for record in annotation {
        grouped
            .entry(record.namespace.prefix.clone())
            .or_default()
            .push(AnnotationEntry {
                identifier: record.identifier.clone(),
                biology_qualifier: record.biology_qualifier.qualifier.clone(),
                is_deprecated: record.is_deprecated,
            });
    }
    grouped
}

/// Resolve grouped names back into flat records.
///
/// # Errors
///
/// Returns [`ConversionError::UnknownNamespace`] if a prefix is absent from
/// the registry.
pub fn unfold_names(
    grouped: &IndexMap<String, Vec<NameEntry>>,
    namespaces: &NamespaceRegistry,
) -> Result<Vec<Name>, ConversionError> {
    let mut records = Vec::new();
    for (prefix, entries) in grouped {
        let namespace = namespaces
            .get(prefix)
            .ok_or_else(|| ConversionError::UnknownNamespace(prefix.clone()))?;
        for entry in entries {
            records.push(Name {
                name: entry.name.clone(),
                namespace: Arc::clone(namespace),
                is_preferred: entry.is_preferred,
            });
        }
    }
    Ok(records)
}

/// Resolve grouped annotations back into flat records.
///
/// # Errors
///
/// Returns [`ConversionError::UnknownNamespace`] if a prefix is absent from
/// the namespace registry, or [`ConversionError::UnknownQualifier`] if an
/// entry's qualifier is absent from the qualifier registry.
pub fn unfold_annotations(
    grouped: &IndexMap<String, Vec<AnnotationEntry>>,
    namespaces: &NamespaceRegistry,
    qualifiers: &QualifierRegistry,
) -> Result<Vec<Annotation>, ConversionError> {
    let mut records = Vec::new();
    for (prefix, entries) in grouped {
        let namespace = namespaces
            .get(prefix)
            .ok_or_else(|| ConversionError::UnknownNamespace(prefix.clone()))?;
        for entry in entries {
            let qualifier = qualifiers
                .get(&entry.biology_qualifier)
                .ok_or_else(|| ConversionError::UnknownQualifier(entry.biology_qualifier.clone()))?;
            records.push(Annotation {
                identifier: entry.identifier.clone(),
                biology_qualifier: Arc::clone(qualifier),
                namespace: Arc::clone(namespace),
                is_deprecated: entry.is_deprecated,
            });
        }
    }
    Ok(records)
}
