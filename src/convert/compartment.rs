//! Compartment conversion.
//!
//! Compartments are the baseline case: names, annotation, and notes only,
//! with no extra fields and no cross-references. The compound and reaction
//! converters extend this pattern.

use crate::convert::converter::ComponentConverter;
use crate::convert::error::ConversionError;
use crate::convert::fold::{fold_annotations, fold_names, unfold_annotations, unfold_names};
use crate::document::CompartmentDocument;
use crate::entity::Compartment;
use crate::registry::{NamespaceRegistry, QualifierRegistry};

/// Converts compartments between their persisted and exchange forms.
pub struct CompartmentConverter<'a> {
    namespaces: &'a NamespaceRegistry,
    qualifiers: &'a QualifierRegistry,
}

impl<'a> CompartmentConverter<'a> {
    /// Create a converter over the given registry snapshots.
    pub fn new(namespaces: &'a NamespaceRegistry, qualifiers: &'a QualifierRegistry) -> Self {
        Self {
            namespaces,
            qualifiers,
        }
    }
}

impl ComponentConverter for CompartmentConverter<'_> {
    type Entity = Compartment;
    type Document = CompartmentDocument;

    fn to_document(&self, compartment: &Compartment) -> Result<CompartmentDocument, ConversionError> {
        Ok(CompartmentDocument {
            id: compartment.id.map(|id| id.to_string()),
            sbo_term: None,
            notes: compartment.notes.clone(),
            names: fold_names(&compartment.names),
            annotation: fold_annotations(&compartment.annotation),
        })
    }

    fn to_entity(&self, document: &CompartmentDocument) -> Result<Compartment, ConversionError> {
        Ok(Compartment {
            id: None,
            notes: document.notes.clone(),
            names: unfold_names(&document.names, self.namespaces)?,
            annotation: unfold_annotations(&document.annotation, self.namespaces, self.qualifiers)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::document::{AnnotationEntry, NameEntry};
    use crate::entity::{Annotation, CompartmentBuilder, Name, NamespaceBuilder};
    use indexmap::IndexMap;
    use pretty_assertions::assert_eq;

    fn registries() -> (NamespaceRegistry, QualifierRegistry) {
        let mut namespaces = NamespaceRegistry::new();
        namespaces.insert(
            NamespaceBuilder::default()
                .miriam_id("MIR:00000022")
                .prefix("go")
                .pattern(r"^GO:\d{7}$")
                .build()
                .unwrap(),
        );
        (namespaces, QualifierRegistry::standard())
    }

    #[test]
    fn test_empty_compartment_to_document() {
        let (namespaces, qualifiers) = registries();
        let converter = CompartmentConverter::new(&namespaces, &qualifiers);

        let document = converter
            .to_document(&CompartmentBuilder::default().build().unwrap())
            .unwrap();

        assert!(document.id.is_none());
        assert!(document.sbo_term.is_none());
        assert!(document.notes.is_none());
        assert!(document.names.is_empty());
        assert!(document.annotation.is_empty());
    }

    #[test]
    fn test_persisted_id_is_stringified() {
        let (namespaces, qualifiers) = registries();
        let converter = CompartmentConverter::new(&namespaces, &qualifiers);

        let document = converter
            .to_document(&CompartmentBuilder::default().id(1_i64).build().unwrap())
            .unwrap();

        assert_eq!(document.id.as_deref(), Some("1"));
    }

    #[test]
    fn test_compartment_round_trip() {
        let (namespaces, qualifiers) = registries();
        let go = Arc::clone(namespaces.get("go").unwrap());
        let is = Arc::clone(qualifiers.get("is").unwrap());
        let converter = CompartmentConverter::new(&namespaces, &qualifiers);

        let compartment = CompartmentBuilder::default()
            .notes("cytosolic compartment".to_string())
            .to_names(Name {
                name: "cytosol".to_string(),
                namespace: Arc::clone(&go),
                is_preferred: true,
            })
            .to_annotation(Annotation {
                identifier: "GO:0005829".to_string(),
                biology_qualifier: is,
                namespace: go,
                is_deprecated: false,
            })
            .build()
            .unwrap();

        let document = converter.to_document(&compartment).unwrap();
        assert_eq!(
            document.names["go"],
            vec![NameEntry {
                name: "cytosol".to_string(),
                is_preferred: true,
            }]
        );
        assert_eq!(
            document.annotation["go"],
            vec![AnnotationEntry {
                identifier: "GO:0005829".to_string(),
                biology_qualifier: "is".to_string(),
                is_deprecated: false,
            }]
        );

        let rebuilt = converter.to_entity(&document).unwrap();
        assert!(rebuilt.id.is_none());
        assert_eq!(rebuilt.notes, compartment.notes);
        assert_eq!(rebuilt.names.len(), 1);
        assert_eq!(rebuilt.names[0].name, "cytosol");
        assert_eq!(rebuilt.annotation.len(), 1);
        assert_eq!(rebuilt.annotation[0].identifier, "GO:0005829");
        assert_eq!(rebuilt.annotation[0].namespace.prefix, "go");
    }

    #[test]
    fn test_unknown_prefix_propagates() {
        let (namespaces, qualifiers) = registries();
        let converter = CompartmentConverter::new(&namespaces, &qualifiers);

        let document = CompartmentDocument {
            annotation: IndexMap::from([(
                "unknownprefix".to_string(),
                vec![AnnotationEntry {
                    identifier: "X:1".to_string(),
                    biology_qualifier: "is".to_string(),
                    is_deprecated: false,
                }],
            )]),
            ..Default::default()
        };

        assert!(matches!(
            converter.to_entity(&document),
            Err(ConversionError::UnknownNamespace(prefix)) if prefix == "unknownprefix"
        ));
    }
}
