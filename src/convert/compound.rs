//! Compound conversion, including structural identifiers.
//!
//! Compounds extend the baseline pattern with three dedicated scalar fields
//! (InChI, InChIKey, SMILES) that travel inside the annotation mapping of
//! the exchange form under reserved prefixes, one entry each. The reserved
//! prefixes are expected not to collide with genuine namespace prefixes; a
//! namespace registered under one of them would be shadowed.

use indexmap::IndexMap;

use crate::convert::converter::ComponentConverter;
use crate::convert::error::ConversionError;
use crate::convert::fold::{fold_annotations, fold_names, unfold_annotations, unfold_names};
use crate::document::{AnnotationEntry, CompoundDocument};
use crate::entity::Compound;
use crate::registry::{NamespaceRegistry, QualifierRegistry};

/// Reserved annotation prefix for the InChI structural identifier.
pub const INCHI_PREFIX: &str = "inchi";
/// Reserved annotation prefix for the InChIKey structural identifier.
pub const INCHI_KEY_PREFIX: &str = "inchikey";
/// Reserved annotation prefix for the SMILES structural identifier.
pub const SMILES_PREFIX: &str = "smiles";

/// Converts compounds between their persisted and exchange forms.
pub struct CompoundConverter<'a> {
    namespaces: &'a NamespaceRegistry,
    qualifiers: &'a QualifierRegistry,
}

impl<'a> CompoundConverter<'a> {
    /// Create a converter over the given registry snapshots.
    pub fn new(namespaces: &'a NamespaceRegistry, qualifiers: &'a QualifierRegistry) -> Self {
        Self {
            namespaces,
            qualifiers,
        }
    }
}

impl ComponentConverter for CompoundConverter<'_> {
    type Entity = Compound;
    type Document = CompoundDocument;

    fn to_document(&self, compound: &Compound) -> Result<CompoundDocument, ConversionError> {
        let names = fold_names(&compound.names);
        let mut annotation = fold_annotations(&compound.annotation);
        if let Some(inchi) = non_empty(&compound.inchi) {
            annotation.insert(INCHI_PREFIX.to_string(), vec![structural_entry(inchi)]);
        }
        if let Some(inchi_key) = non_empty(&compound.inchi_key) {
            annotation.insert(INCHI_KEY_PREFIX.to_string(), vec![structural_entry(inchi_key)]);
        }
        if let Some(smiles) = non_empty(&compound.smiles) {
            // SMILES are not yet Identifiers.org conform.
            annotation.insert(SMILES_PREFIX.to_string(), vec![structural_entry(smiles)]);
        }
        Ok(CompoundDocument {
            id: compound.id.map(|id| id.to_string()),
            sbo_term: None,
            notes: compound.notes.clone(),
            charge: compound.charge,
            chemical_formula: compound.chemical_formula.clone(),
            names,
            annotation,
        })
    }

    fn to_entity(&self, document: &CompoundDocument) -> Result<Compound, ConversionError> {
        let (annotation, structures) = split_structural(&document.annotation)?;
        Ok(Compound {
            id: None,
            inchi: structures.inchi,
            inchi_key: structures.inchi_key,
            smiles: structures.smiles,
            charge: document.charge,
            chemical_formula: document.chemical_formula.clone(),
            notes: document.notes.clone(),
            names: unfold_names(&document.names, self.namespaces)?,
            annotation: unfold_annotations(&annotation, self.namespaces, self.qualifiers)?,
        })
    }
}

/// The structural identifiers extracted from an annotation mapping.
#[derive(Debug, Default)]
struct StructuralIdentifiers {
    inchi: Option<String>,
    inchi_key: Option<String>,
    smiles: Option<String>,
}

/// Partition an annotation grouping into its generic part and the entries
/// stored under the reserved structural prefixes.
///
/// The input mapping is left untouched.
///
/// # Errors
///
/// Returns [`ConversionError::MalformedStructuralAnnotation`] if a reserved
/// prefix is present but does not hold exactly one entry.
fn split_structural(
    annotation: &IndexMap<String, Vec<AnnotationEntry>>,
) -> Result<(IndexMap<String, Vec<AnnotationEntry>>, StructuralIdentifiers), ConversionError> {
    let mut remaining = IndexMap::with_capacity(annotation.len());
    let mut structures = StructuralIdentifiers::default();
    for (prefix, entries) in annotation {
        let slot = match prefix.as_str() {
            INCHI_PREFIX => &mut structures.inchi,
            INCHI_KEY_PREFIX => &mut structures.inchi_key,
            SMILES_PREFIX => &mut structures.smiles,
            _ => {
                remaining.insert(prefix.clone(), entries.clone());
                continue;
            }
        };
        match entries.as_slice() {
            [entry] => *slot = Some(entry.identifier.clone()),
            _ => {
                return Err(ConversionError::MalformedStructuralAnnotation {
                    prefix: prefix.clone(),
                    found: entries.len(),
                })
            }
        }
    }
    Ok((remaining, structures))
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|value| !value.is_empty())
}

fn structural_entry(identifier: &str) -> AnnotationEntry {
    AnnotationEntry {
        identifier: identifier.to_string(),
        biology_qualifier: "is".to_string(),
        is_deprecated: false,
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::entity::{Annotation, CompoundBuilder, Name, NamespaceBuilder};
    use pretty_assertions::assert_eq;

    const ETHANOL_INCHI: &str = "InChI=1S/C2H6O/c1-2-3/h3H,2H2,1H3";
    const ETHANOL_INCHI_KEY: &str = "LFQSCWFLJHTTHZ-UHFFFAOYSA-N";
    const ETHANOL_SMILES: &str = "CCO";

    fn registries() -> (NamespaceRegistry, QualifierRegistry) {
        let mut namespaces = NamespaceRegistry::new();
        namespaces.insert(
            NamespaceBuilder::default()
                .miriam_id("MIR:00000002")
                .prefix("chebi")
                .pattern(r"^CHEBI:\d+$")
                .build()
                .unwrap(),
        );
        (namespaces, QualifierRegistry::standard())
    }

    fn ethanol(namespaces: &NamespaceRegistry, qualifiers: &QualifierRegistry) -> Compound {
        let chebi = Arc::clone(namespaces.get("chebi").unwrap());
        let is = Arc::clone(qualifiers.get("is").unwrap());
        CompoundBuilder::default()
            .inchi(ETHANOL_INCHI.to_string())
            .inchi_key(ETHANOL_INCHI_KEY.to_string())
            .smiles(ETHANOL_SMILES.to_string())
            .charge(0.0)
            .chemical_formula("C2H6O".to_string())
            .notes("bla bla bla".to_string())
            .names(
                ["ethanol", "Aethanol", "Alkohol"]
                    .map(|name| Name {
                        name: name.to_string(),
                        namespace: Arc::clone(&chebi),
                        is_preferred: false,
                    })
                    .to_vec(),
            )
            .annotation(
                ["CHEBI:16236", "CHEBI:44594", "CHEBI:42377"]
                    .map(|identifier| Annotation {
                        identifier: identifier.to_string(),
                        biology_qualifier: Arc::clone(&is),
                        namespace: Arc::clone(&chebi),
                        is_deprecated: false,
                    })
                    .to_vec(),
            )
            .build()
            .unwrap()
    }

    #[test]
    fn test_empty_compound_to_document() {
        let (namespaces, qualifiers) = registries();
        let converter = CompoundConverter::new(&namespaces, &qualifiers);

        let document = converter
            .to_document(&CompoundBuilder::default().build().unwrap())
            .unwrap();

        assert!(document.id.is_none());
        assert!(document.charge.is_none());
        assert!(document.chemical_formula.is_none());
        assert!(document.notes.is_none());
        assert!(document.names.is_empty());
        assert!(document.annotation.is_empty());
    }

    #[test]
    fn test_structural_fields_become_reserved_annotation() {
        let (namespaces, qualifiers) = registries();
        let converter = CompoundConverter::new(&namespaces, &qualifiers);

        let document = converter.to_document(&ethanol(&namespaces, &qualifiers)).unwrap();

        for (prefix, identifier) in [
            (INCHI_PREFIX, ETHANOL_INCHI),
            (INCHI_KEY_PREFIX, ETHANOL_INCHI_KEY),
            (SMILES_PREFIX, ETHANOL_SMILES),
        ] {
            assert_eq!(document.annotation[prefix].len(), 1);
            assert_eq!(document.annotation[prefix][0].identifier, identifier);
            assert_eq!(document.annotation[prefix][0].biology_qualifier, "is");
        }
        assert_eq!(document.annotation["chebi"].len(), 3);
    }

    #[test]
    fn test_empty_structural_fields_are_not_injected() {
        let (namespaces, qualifiers) = registries();
        let converter = CompoundConverter::new(&namespaces, &qualifiers);

        let compound = CompoundBuilder::default()
            .inchi(String::new())
            .build()
            .unwrap();
        let document = converter.to_document(&compound).unwrap();

        assert!(document.annotation.is_empty());
    }

    #[test]
    fn test_structural_round_trip() {
        let (namespaces, qualifiers) = registries();
        let converter = CompoundConverter::new(&namespaces, &qualifiers);

        let document = converter.to_document(&ethanol(&namespaces, &qualifiers)).unwrap();
        let rebuilt = converter.to_entity(&document).unwrap();

        assert_eq!(rebuilt.inchi.as_deref(), Some(ETHANOL_INCHI));
        assert_eq!(rebuilt.inchi_key.as_deref(), Some(ETHANOL_INCHI_KEY));
        assert_eq!(rebuilt.smiles.as_deref(), Some(ETHANOL_SMILES));
        assert_eq!(rebuilt.charge, Some(0.0));
        assert_eq!(rebuilt.chemical_formula.as_deref(), Some("C2H6O"));
        assert_eq!(rebuilt.notes.as_deref(), Some("bla bla bla"));
        // The reserved prefixes must not leak into the generic annotation.
        assert!(rebuilt
            .annotation
            .iter()
            .all(|record| record.namespace.prefix == "chebi"));
        assert_eq!(rebuilt.annotation.len(), 3);
        assert_eq!(rebuilt.names.len(), 3);
    }

    #[test]
    fn test_malformed_structural_annotation_rejected() {
        let (namespaces, qualifiers) = registries();
        let converter = CompoundConverter::new(&namespaces, &qualifiers);

        let document = CompoundDocument {
            annotation: IndexMap::from([(
                INCHI_PREFIX.to_string(),
                vec![structural_entry("InChI=1S/a"), structural_entry("InChI=1S/b")],
            )]),
            ..Default::default()
        };

        assert!(matches!(
            converter.to_entity(&document),
            Err(ConversionError::MalformedStructuralAnnotation { prefix, found: 2 })
                if prefix == INCHI_PREFIX
        ));
    }

    #[test]
    fn test_split_structural_leaves_input_untouched() {
        let annotation = IndexMap::from([
            (INCHI_PREFIX.to_string(), vec![structural_entry(ETHANOL_INCHI)]),
            ("chebi".to_string(), vec![structural_entry("CHEBI:16236")]),
        ]);

        let (remaining, structures) = split_structural(&annotation).unwrap();

        assert_eq!(structures.inchi.as_deref(), Some(ETHANOL_INCHI));
        assert!(!remaining.contains_key(INCHI_PREFIX));
        assert!(remaining.contains_key("chebi"));
        // The caller's mapping still holds both keys.
        assert_eq!(annotation.len(), 2);
    }
}
