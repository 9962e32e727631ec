use thiserror::Error;

/// Errors that can occur while converting components between their persisted
/// and exchange forms.
///
/// All of these are unrecoverable at the point of occurrence: a single
/// unresolvable reference or missing registry entry aborts the conversion of
/// the whole entity, with no partial result.
#[derive(Debug, Error)]
pub enum ConversionError {
    /// A document references a namespace prefix absent from the namespace
    /// registry.
    #[error("Unknown namespace prefix: {0}")]
    UnknownNamespace(String),

    /// A document references a biology qualifier absent from the qualifier
    /// registry.
    #[error("Unknown biology qualifier: {0}")]
    UnknownQualifier(String),

    /// A reaction participant's compound is absent from the supplied
    /// identifier map.
    #[error("Unresolved compound reference: {0}")]
    UnresolvedCompound(String),

    /// A reaction participant's compartment is absent from the supplied
    /// identifier map.
    #[error("Unresolved compartment reference: {0}")]
    UnresolvedCompartment(String),

    /// A reserved structural annotation key (inchi/inchikey/smiles) is
    /// present but does not hold exactly one entry.
    #[error(
        "Malformed structural annotation '{prefix}': expected exactly one entry, found {found}"
    )]
    MalformedStructuralAnnotation { prefix: String, found: usize },
}
