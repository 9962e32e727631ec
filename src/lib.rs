//! Data models for the components of biochemical reaction networks.
//!
//! This library provides two parallel representations of compartments,
//! compounds, and reactions used in metabolic model exchange:
//! - An exchange document model that groups names and annotations by
//!   namespace prefix and is suitable for validation and transport
//! - A persisted entity model with flat record collections, each record
//!   carrying a direct handle to its namespace and biology qualifier
//!
//! Bidirectional converters translate between the two shapes, and the
//! [`io`] and [`validation`] modules cover JSON (de)serialization and
//! document validation of whole component collections.

#![warn(unused_imports)]

/// Exchange document model
pub mod document;

/// Persisted entity model
pub mod entity;

/// Namespace and biology qualifier registries
pub mod registry;

/// Conversion between persisted entities and exchange documents
pub mod convert {
    pub use self::compartment::CompartmentConverter;
    pub use self::compound::CompoundConverter;
    pub use self::converter::ComponentConverter;
    pub use self::error::ConversionError;
    pub use self::reaction::{
        CompartmentIds, CompartmentsById, CompoundIds, CompoundsById, ReactionConverter,
    };

    /// Compartment conversion
    pub mod compartment;
    /// Compound conversion, including structural identifiers
    pub mod compound;
    /// The common converter interface
    pub mod converter;
    /// Conversion error types
    pub mod error;
    /// Shared folding of name and annotation collections
    pub mod fold;
    /// Reaction conversion, including participant resolution
    pub mod reaction;
}

/// IO functionality
pub mod io;

/// Validation of components documents
pub mod validation;

/// Commonly used types and functionality re-exported for convenience
pub mod prelude {
    pub use crate::convert::*;
    pub use crate::document::*;
    pub use crate::entity::*;
    pub use crate::io::*;
    pub use crate::registry::*;
}
