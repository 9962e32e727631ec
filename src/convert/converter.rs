use crate::convert::error::ConversionError;

/// Two-way conversion between a persisted entity and its exchange document.
///
/// Converters are pure transformation functions over already-materialized
/// inputs: they never fetch data, never mutate their arguments, and hold no
/// state across calls beyond the registries and identifier maps they borrow
/// at construction. Given frozen registries they may be invoked concurrently
/// on disjoint entities.
pub trait ComponentConverter {
    /// The persisted form.
    type Entity;

    /// The exchange form.
    type Document;

    /// Build an exchange document from a persisted entity.
    ///
    /// The entity's relationship collections (names, annotation and, for
    /// reactions, participants) must already be fully loaded; converters do
    /// not fetch lazily-linked records.
    fn to_document(&self, entity: &Self::Entity) -> Result<Self::Document, ConversionError>;

    /// Build a fresh persisted entity from an exchange document.
    ///
    /// The returned entity carries no identity yet; assigning primary keys
    /// is the persistence layer's responsibility.
    fn to_entity(&self, document: &Self::Document) -> Result<Self::Entity, ConversionError>;
}
