//! Reaction conversion, including participant resolution.
//!
//! Reactions extend the baseline pattern with a participant list that is
//! partitioned into reactant and product mappings keyed by external compound
//! identifiers. The converter does not own or populate the identifier maps;
//! the caller builds them while converting compounds and compartments, which
//! therefore must be converted before the reactions that reference them.

use std::collections::HashMap;
use std::sync::Arc;

use indexmap::IndexMap;
use log::warn;

use crate::convert::converter::ComponentConverter;
use crate::convert::error::ConversionError;
use crate::convert::fold::{fold_annotations, fold_names, unfold_annotations, unfold_names};
use crate::document::{ParticipantEntry, ReactionDocument};
use crate::entity::{Compartment, Compound, EntityKey, Participant, Reaction};
use crate::registry::{NamespaceRegistry, QualifierRegistry};

/// Map from compound handles to their external identifiers.
pub type CompoundIds = HashMap<EntityKey<Compound>, String>;
/// Map from compartment handles to their external identifiers.
pub type CompartmentIds = HashMap<EntityKey<Compartment>, String>;
/// Map from external identifiers to compound handles.
pub type CompoundsById = HashMap<String, Arc<Compound>>;
/// Map from external identifiers to compartment handles.
pub type CompartmentsById = HashMap<String, Arc<Compartment>>;

/// Converts reactions between their persisted and exchange forms.
///
/// The entity-to-identifier maps are needed for [`ComponentConverter::to_document`]
/// only, the identifier-to-entity maps for [`ComponentConverter::to_entity`]
/// only; a map that is not supplied behaves as empty and any lookup in it
/// fails with an unresolved-reference error.
pub struct ReactionConverter<'a> {
    namespaces: &'a NamespaceRegistry,
    qualifiers: &'a QualifierRegistry,
    compound_ids: Option<&'a CompoundIds>,
    compartment_ids: Option<&'a CompartmentIds>,
    compounds_by_id: Option<&'a CompoundsById>,
    compartments_by_id: Option<&'a CompartmentsById>,
}

impl<'a> ReactionConverter<'a> {
    /// Create a converter over the given registry snapshots, without any
    /// identifier maps.
    pub fn new(namespaces: &'a NamespaceRegistry, qualifiers: &'a QualifierRegistry) -> Self {
        Self {
            namespaces,
            qualifiers,
            compound_ids: None,
            compartment_ids: None,
            compounds_by_id: None,
            compartments_by_id: None,
        }
    }

    /// Supply the entity-to-identifier maps needed to build documents.
    pub fn with_entity_ids(
        mut self,
        compound_ids: &'a CompoundIds,
        compartment_ids: &'a CompartmentIds,
    ) -> Self {
        self.compound_ids = Some(compound_ids);
        self.compartment_ids = Some(compartment_ids);
        self
    }

    /// Supply the identifier-to-entity maps needed to build entities.
    pub fn with_entities_by_id(
        mut self,
        compounds_by_id: &'a CompoundsById,
        compartments_by_id: &'a CompartmentsById,
    ) -> Self {
        self.compounds_by_id = Some(compounds_by_id);
        self.compartments_by_id = Some(compartments_by_id);
        self
    }

    /// Partition participants into reactant and product mappings keyed by
    /// compound identifier.
    ///
    /// If two participants share the same compound and role, the last one in
    /// input order wins; the overwrite is logged.
    fn fold_participants(
        &self,
        participants: &[Participant],
    ) -> Result<
        (
            IndexMap<String, ParticipantEntry>,
            IndexMap<String, ParticipantEntry>,
        ),
        ConversionError,
    > {
        let mut reactants = IndexMap::new();
        let mut products = IndexMap::new();
        for participant in participants {
            let compound_id = self.compound_id(&participant.compound)?;
            let entry = ParticipantEntry {
                stoichiometry: participant.stoichiometry.clone(),
                compartment: self.compartment_id(&participant.compartment)?.to_string(),
            };
            let (side, role) = if participant.is_product {
                (&mut products, "product")
            } else {
                (&mut reactants, "reactant")
            };
            if side.insert(compound_id.to_string(), entry).is_some() {
                warn!("Overwriting duplicate {role} entry for compound '{compound_id}'.");
            }
        }
        Ok((reactants, products))
    }

    /// Resolve participant entries back into participant records with the
    /// given role.
    fn unfold_participants(
        &self,
        entries: &IndexMap<String, ParticipantEntry>,
        is_product: bool,
    ) -> Result<Vec<Participant>, ConversionError> {
        let mut participants = Vec::with_capacity(entries.len());
        for (compound_id, entry) in entries {
            participants.push(Participant {
                compound: Arc::clone(self.compound_by_id(compound_id)?),
                compartment: Arc::clone(self.compartment_by_id(&entry.compartment)?),
                stoichiometry: entry.stoichiometry.clone(),
                is_product,
            });
        }
        Ok(participants)
    }

    fn compound_id(&self, compound: &Arc<Compound>) -> Result<&'a str, ConversionError> {
        self.compound_ids
            .and_then(|ids| ids.get(&EntityKey::new(compound)))
            .map(String::as_str)
            .ok_or_else(|| ConversionError::UnresolvedCompound(compound.to_string()))
    }

    fn compartment_id(&self, compartment: &Arc<Compartment>) -> Result<&'a str, ConversionError> {
        self.compartment_ids
            .and_then(|ids| ids.get(&EntityKey::new(compartment)))
            .map(String::as_str)
            .ok_or_else(|| ConversionError::UnresolvedCompartment(compartment.to_string()))
    }

    fn compound_by_id(&self, id: &str) -> Result<&'a Arc<Compound>, ConversionError> {
        self.compounds_by_id
            .and_then(|map| map.get(id))
            .ok_or_else(|| ConversionError::UnresolvedCompound(id.to_string()))
    }

    fn compartment_by_id(&self, id: &str) -> Result<&'a Arc<Compartment>, ConversionError> {
        self.compartments_by_id
            .and_then(|map| map.get(id))
            .ok_or_else(|| ConversionError::UnresolvedCompartment(id.to_string()))
    }
}

impl ComponentConverter for ReactionConverter<'_> {
    type Entity = Reaction;
    type Document = ReactionDocument;

    fn to_document(&self, reaction: &Reaction) -> Result<ReactionDocument, ConversionError> {
        let (reactants, products) = self.fold_participants(&reaction.participants)?;
        Ok(ReactionDocument {
            id: reaction.id.map(|id| id.to_string()),
            sbo_term: None,
            notes: reaction.notes.clone(),
            names: fold_names(&reaction.names),
            annotation: fold_annotations(&reaction.annotation),
            reactants,
            products,
        })
    }

    fn to_entity(&self, document: &ReactionDocument) -> Result<Reaction, ConversionError> {
        let mut participants = self.unfold_participants(&document.reactants, false)?;
        participants.extend(self.unfold_participants(&document.products, true)?);
        Ok(Reaction {
            id: None,
            notes: document.notes.clone(),
            names: unfold_names(&document.names, self.namespaces)?,
            annotation: unfold_annotations(&document.annotation, self.namespaces, self.qualifiers)?,
            participants,
        })
    }
}
