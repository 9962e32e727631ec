//! The exchange document model.
//!
//! These structs describe the wire shape of component data: names and
//! annotations are grouped into mappings from namespace prefix to lists of
//! entries, and reaction participants are keyed by external compound
//! identifiers. All documents serialize to and from JSON with camelCase
//! field names where the exchange format requires them.

use derive_builder::Builder;
use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A single name entry within a namespace prefix group.
///
/// Names are simple strings and should be interpretable by human beings.
/// One of them may be marked as the preferred name of the component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema, Builder, Default)]
pub struct NameEntry {
    /// A common name for the component.
    #[builder(setter(into))]
    pub name: String,

    /// Whether this is the preferred name of the component.
    #[serde(rename = "isPreferred", default)]
    #[builder(default)]
    pub is_preferred: bool,
}

/// A single annotation entry within a namespace prefix group.
///
/// An annotation pairs an identifier from a specific namespace with a
/// biology qualifier describing its relation to the component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema, Builder, Default)]
pub struct AnnotationEntry {
    /// The annotation identifier, e.g., "CHEBI:16236".
    #[builder(setter(into))]
    pub identifier: String,

    /// The biology qualifier relating the identifier to the component.
    /// Defaults to "is".
    #[serde(rename = "biologyQualifier", default = "default_qualifier")]
    #[builder(default = "default_qualifier()", setter(into))]
    pub biology_qualifier: String,

    /// Whether the identifier is deprecated in its namespace.
    #[serde(rename = "isDeprecated", default)]
    #[builder(default)]
    pub is_deprecated: bool,
}

fn default_qualifier() -> String {
    "is".to_string()
}

/// A reaction participant as it appears in the exchange form, keyed by its
/// compound identifier in the surrounding mapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema, Builder, Default)]
pub struct ParticipantEntry {
    /// The stoichiometric coefficient as a string, preserving arbitrary
    /// precision.
    #[builder(setter(into))]
    pub stoichiometry: String,

    /// The external identifier of the compartment the participant is
    /// located in.
    #[builder(setter(into))]
    pub compartment: String,
}

/// The exchange document for a compartment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema, Builder, Default)]
pub struct CompartmentDocument {
    /// The stringified persisted identifier, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into))]
    pub id: Option<String>,

    /// An SBO term describing the component.
    #[serde(rename = "sboTerm", default, skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into))]
    pub sbo_term: Option<String>,

    /// Free-form notes on the component.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into))]
    pub notes: Option<String>,

    /// Names grouped by namespace prefix.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    #[builder(default, setter(into))]
    pub names: IndexMap<String, Vec<NameEntry>>,

    /// Annotations grouped by namespace prefix.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    #[builder(default, setter(into))]
    pub annotation: IndexMap<String, Vec<AnnotationEntry>>,
}

/// The exchange document for a compound.
///
/// In addition to the common fields, a compound document carries its charge
/// and chemical formula, and its structural identifiers (InChI, InChIKey,
/// SMILES) travel inside the annotation mapping under the reserved prefixes
/// "inchi", "inchikey", and "smiles".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema, Builder, Default)]
pub struct CompoundDocument {
    /// The stringified persisted identifier, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into))]
    pub id: Option<String>,

    /// An SBO term describing the component.
    #[serde(rename = "sboTerm", default, skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into))]
    pub sbo_term: Option<String>,

    /// Free-form notes on the component.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into))]
    pub notes: Option<String>,

    /// The charge of the compound.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into))]
    pub charge: Option<f64>,

    /// The chemical formula of the compound, e.g., "C2H6O".
    #[serde(
        rename = "chemicalFormula",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    #[builder(default, setter(into))]
    pub chemical_formula: Option<String>,

    /// Names grouped by namespace prefix.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    #[builder(default, setter(into))]
    pub names: IndexMap<String, Vec<NameEntry>>,

    /// Annotations grouped by namespace prefix.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    #[builder(default, setter(into))]
    pub annotation: IndexMap<String, Vec<AnnotationEntry>>,
}

/// The exchange document for a reaction.
///
/// Reactants and products are mappings from external compound identifiers
/// to participant entries; resolving those identifiers to compound and
/// compartment entities is the job of the reaction converter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema, Builder, Default)]
pub struct ReactionDocument {
    /// The stringified persisted identifier, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into))]
    pub id: Option<String>,

    /// An SBO term describing the component.
    #[serde(rename = "sboTerm", default, skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into))]
    pub sbo_term: Option<String>,

    /// Free-form notes on the component.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into))]
    pub notes: Option<String>,

    /// Names grouped by namespace prefix.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    #[builder(default, setter(into))]
    pub names: IndexMap<String, Vec<NameEntry>>,

    /// Annotations grouped by namespace prefix.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    #[builder(default, setter(into))]
    pub annotation: IndexMap<String, Vec<AnnotationEntry>>,

    /// Reactants keyed by compound identifier.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    #[builder(default, setter(into))]
    pub reactants: IndexMap<String, ParticipantEntry>,

    /// Products keyed by compound identifier.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    #[builder(default, setter(into))]
    pub products: IndexMap<String, ParticipantEntry>,
}

/// The top-level collection document aggregating all components of a model,
/// each keyed by its external identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema, Builder, Default)]
pub struct ComponentsDocument {
    /// Reactions keyed by external identifier.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    #[builder(default, setter(into))]
    pub reactions: IndexMap<String, ReactionDocument>,

    /// Compartments keyed by external identifier.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    #[builder(default, setter(into))]
    pub compartments: IndexMap<String, CompartmentDocument>,

    /// Compounds keyed by external identifier.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    #[builder(default, setter(into))]
    pub compounds: IndexMap<String, CompoundDocument>,
}
