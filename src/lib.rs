//! Lazy, unit-aware access to halo and galaxy catalogues.
//!
//! Two on-disk layouts are supported behind one query surface:
//!
//! - the legacy flat layout, where every quantity is a root-level dataset
//!   whose raw name is classified by a [`FieldRegistry`] and which may be
//!   split across `.0`, `.1`, … shard files;
//! - the hierarchical successor layout, mirrored into a [`SchemaTree`] whose
//!   datasets carry their own base-unit conversions.
//!
//! Values are read on first access and cached per field. [`Catalogue`]
//! resolves dotted paths against either layout, falling back to the legacy
//! → native [`NameTranslator`] table so analysis code written against the
//! old names keeps working on new catalogues.

pub mod catalogue;
pub mod error;
pub mod flat;
pub mod quantity;
pub mod reader;
pub mod registry;
pub mod store;
pub mod translate;
pub mod tree;
pub mod units;

pub use catalogue::{Catalogue, CatalogueOptions, DEFAULT_ALLOW_MISSING, Schema};
pub use error::{CatalogueError, Result, StoreError};
pub use flat::{FieldMetadata, FlatCatalogue};
pub use quantity::{CachedField, Quantity};
pub use reader::ShardedReader;
pub use registry::{Classification, FieldRegistry, RegistrationRule, Resolution, RuleMatch};
pub use store::{KeyedStore, StoreOpener, default_opener};
pub use translate::{Column, NameTranslator, Translation, TranslationCoverage};
pub use tree::{DerivedField, Lookup, SchemaTree, UsageReport};
pub use units::{Unit, UnitKind, UnitSystem};

use std::path::Path;

/// Open the catalogue at `path` with default options.
pub fn load(path: impl AsRef<Path>) -> Result<Catalogue> {
    Catalogue::open(path.as_ref(), CatalogueOptions::default())
}
