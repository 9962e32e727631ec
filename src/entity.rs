//! The persisted entity model.
//!
//! These structs mirror the relational shape of component data: flat
//! collections of name and annotation records, each carrying a direct
//! handle to its namespace (and, for annotations, its biology qualifier).
//! Shared ownership of namespaces, qualifiers, compounds, and compartments
//! is expressed with [`Arc`], standing in for the foreign-key relationships
//! of the storage layer.
//!
//! Entities built by the converters carry no identity; assigning primary
//! keys is the persistence layer's responsibility.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use derive_builder::Builder;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref MIRIAM_ID_PATTERN: Regex = Regex::new(r"^MIR:\d{8}$").unwrap();
}

/// A MIRIAM compliant Identifiers.org namespace.
///
/// The prefix is the grouping key used throughout the exchange form and must
/// be unique within a registry snapshot.
#[derive(Debug, Clone, Builder, Default)]
pub struct Namespace {
    /// The MIRIAM identifier of the namespace itself, e.g., "MIR:00000002".
    #[builder(setter(into))]
    pub miriam_id: String,

    /// The namespace prefix, e.g., "chebi" or "metanetx.chemical".
    #[builder(setter(into))]
    pub prefix: String,

    /// The regular expression pattern that identifiers in this namespace
    /// match, e.g., `^CHEBI:\d+$`.
    #[builder(setter(into))]
    pub pattern: String,

    /// Whether identifiers of this namespace carry an embedded prefix,
    /// e.g., "CHEBI:52971".
    #[builder(default)]
    pub embedded_prefix: bool,

    /// The namespace's common name.
    #[builder(default, setter(into))]
    pub name: Option<String>,

    /// A short description of the namespace.
    #[builder(default, setter(into))]
    pub description: Option<String>,
}

impl Namespace {
    /// Whether the given value is a well-formed MIRIAM registry identifier.
    pub fn is_miriam_id(value: &str) -> bool {
        MIRIAM_ID_PATTERN.is_match(value)
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Namespace(prefix={})", self.prefix)
    }
}

/// A BioModels biology qualifier, e.g., "is" or "isVersionOf".
///
/// Qualifier strings are drawn from a fixed controlled vocabulary; see
/// [`crate::registry::BIOLOGY_QUALIFIERS`].
#[derive(Debug, Clone, Builder, Default)]
pub struct BiologyQualifier {
    /// The text value of the qualifier.
    #[builder(setter(into))]
    pub qualifier: String,
}

impl fmt::Display for BiologyQualifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BiologyQualifier(qualifier={})", self.qualifier)
    }
}

/// A component name record, associated with exactly one namespace.
#[derive(Debug, Clone)]
pub struct Name {
    /// A common name for the component.
    pub name: String,

    /// The namespace the name belongs to.
    pub namespace: Arc<Namespace>,

    /// Whether this is the preferred name of the component.
    pub is_preferred: bool,
}

/// A component annotation record, associated with exactly one namespace
/// and one biology qualifier.
#[derive(Debug, Clone)]
pub struct Annotation {
    /// The annotation identifier.
    pub identifier: String,

    /// The qualifier relating the identifier to the component.
    pub biology_qualifier: Arc<BiologyQualifier>,

    /// The namespace the identifier belongs to.
    pub namespace: Arc<Namespace>,

    /// Whether the identifier is deprecated in its namespace.
    pub is_deprecated: bool,
}

/// Read access to the name and annotation collections shared by all
/// component kinds.
pub trait Component {
    /// The component's name records.
    fn names(&self) -> &[Name];

    /// The component's annotation records.
    fn annotation(&self) -> &[Annotation];
}

/// A persisted compartment.
#[derive(Debug, Clone, Builder, Default)]
pub struct Compartment {
    /// The primary key assigned by the persistence layer, if any.
    #[builder(default, setter(into))]
    pub id: Option<i64>,

    /// Free-form notes on the compartment.
    #[builder(default, setter(into))]
    pub notes: Option<String>,

    /// The compartment's name records.
    #[builder(default, setter(into, each(name = "to_names")))]
    pub names: Vec<Name>,

    /// The compartment's annotation records.
    #[builder(default, setter(into, each(name = "to_annotation")))]
    pub annotation: Vec<Annotation>,
}

impl Component for Compartment {
    fn names(&self) -> &[Name] {
        &self.names
    }

    fn annotation(&self) -> &[Annotation] {
        &self.annotation
    }
}

impl fmt::Display for Compartment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.id {
            Some(id) => write!(f, "Compartment(id={id})"),
            None => write!(f, "Compartment(id=?)"),
        }
    }
}

/// A persisted compound.
///
/// The structural identifiers (InChI, InChIKey, SMILES) are dedicated scalar
/// fields rather than generic annotation records; the compound converter
/// splices them into and out of the annotation mapping of the exchange form.
#[derive(Debug, Clone, Builder, Default)]
pub struct Compound {
    /// The primary key assigned by the persistence layer, if any.
    #[builder(default, setter(into))]
    pub id: Option<i64>,

    /// The InChI encoding of the compound.
    #[builder(default, setter(into))]
    pub inchi: Option<String>,

    /// The hashed InChIKey encoding of the compound.
    #[builder(default, setter(into))]
    pub inchi_key: Option<String>,

    /// The SMILES encoding of the compound.
    #[builder(default, setter(into))]
    pub smiles: Option<String>,

    /// The charge of the compound.
    #[builder(default, setter(into))]
    pub charge: Option<f64>,

    /// The chemical formula of the compound.
    #[builder(default, setter(into))]
    pub chemical_formula: Option<String>,

    /// Free-form notes on the compound.
    #[builder(default, setter(into))]
    pub notes: Option<String>,

    /// The compound's name records.
    #[builder(default, setter(into, each(name = "to_names")))]
    pub names: Vec<Name>,

    /// The compound's annotation records.
    #[builder(default, setter(into, each(name = "to_annotation")))]
    pub annotation: Vec<Annotation>,
}

impl Component for Compound {
    fn names(&self) -> &[Name] {
        &self.names
    }

    fn annotation(&self) -> &[Annotation] {
        &self.annotation
    }
}

impl fmt::Display for Compound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Compound(id={}, inchi_key={})",
            self.id.map_or_else(|| "?".to_string(), |id| id.to_string()),
            self.inchi_key.as_deref().unwrap_or("?"),
        )
    }
}

/// A reaction's link to a compound at a compartment, with a role
/// (reactant/product) and a stoichiometric coefficient.
#[derive(Debug, Clone)]
pub struct Participant {
    /// The participating compound.
    pub compound: Arc<Compound>,

    /// The compartment the compound is located in.
    pub compartment: Arc<Compartment>,

    /// The stoichiometric coefficient as a string, preserving arbitrary
    /// precision.
    pub stoichiometry: String,

    /// Whether the compound is a product (true) or a reactant (false).
    pub is_product: bool,
}

/// A persisted reaction.
#[derive(Debug, Clone, Builder, Default)]
pub struct Reaction {
    /// The primary key assigned by the persistence layer, if any.
    #[builder(default, setter(into))]
    pub id: Option<i64>,

    /// Free-form notes on the reaction.
    #[builder(default, setter(into))]
    pub notes: Option<String>,

    /// The reaction's name records.
    #[builder(default, setter(into, each(name = "to_names")))]
    pub names: Vec<Name>,

    /// The reaction's annotation records.
    #[builder(default, setter(into, each(name = "to_annotation")))]
    pub annotation: Vec<Annotation>,

    /// The reaction's participants.
    #[builder(default, setter(into, each(name = "to_participants")))]
    pub participants: Vec<Participant>,
}

impl Component for Reaction {
    fn names(&self) -> &[Name] {
        &self.names
    }

    fn annotation(&self) -> &[Annotation] {
        &self.annotation
    }
}

/// Keys an identifier map by entity instance rather than by value.
///
/// Freshly built entities carry no primary key, so the identifier maps used
/// for reaction conversion are keyed by the shared handle itself. Equality
/// and hashing follow pointer identity of the underlying allocation.
#[derive(Debug, Clone)]
pub struct EntityKey<T>(Arc<T>);

impl<T> EntityKey<T> {
    /// Create a key for the given entity handle.
    pub fn new(entity: &Arc<T>) -> Self {
        Self(Arc::clone(entity))
    }

    /// The underlying entity handle.
    pub fn entity(&self) -> &Arc<T> {
        &self.0
    }
}

impl<T> From<Arc<T>> for EntityKey<T> {
    fn from(entity: Arc<T>) -> Self {
        Self(entity)
    }
}

impl<T> PartialEq for EntityKey<T> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl<T> Eq for EntityKey<T> {}

impl<T> Hash for EntityKey<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (Arc::as_ptr(&self.0) as usize).hash(state);
    }
}
