//! Error taxonomy for catalogue access.
//!
//! Soft outcomes are not errors: a field whose storage key is absent at read
//! time comes back as `Ok(None)`, and raw names that no rule classifies are
//! collected in the binder's invalid list. Everything here is something the
//! caller has to decide about.

use std::path::PathBuf;
use thiserror::Error;

/// Failures raised by a keyed-array store backend.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("unable to open {path}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("unable to parse container {path}: {detail}")]
    Parse { path: PathBuf, detail: String },

    #[error("container {path} failed schema validation:\n{details}")]
    Invalid { path: PathBuf, details: String },

    #[error("dataset {key} is corrupt: {detail}")]
    Corrupt { key: String, detail: String },

    #[error("unable to write container {path}: {detail}")]
    Write { path: PathBuf, detail: String },

    #[cfg(feature = "hdf5")]
    #[error("hdf5: {0}")]
    Hdf5(#[from] hdf5::Error),
}

/// Top-level error for opening catalogues and resolving quantities.
#[derive(Error, Debug)]
pub enum CatalogueError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("{file}: header is missing '{name}'")]
    MissingHeader { file: PathBuf, name: String },

    #[error("{path} reports several files but does not end in a '.<n>' shard suffix")]
    BadShardName { path: PathBuf },

    #[error("shards disagree on '{field}': {detail}")]
    AmbiguousShardSchema { field: String, detail: String },

    #[error("'{path}' is not a field of this catalogue")]
    NotFound { path: String },

    #[error("no native analogue for legacy quantity '{path}'")]
    Untranslatable { path: String },

    #[error("legacy quantity '{legacy}' maps to '{native}', which this catalogue does not contain")]
    TranslatedFieldMissing { legacy: String, native: String },

    #[error("no such quantity '{path}'")]
    NoSuchQuantity { path: String },

    #[error("column {column} requested from '{name}', which has {columns} columns")]
    ColumnOutOfRange {
        name: String,
        column: usize,
        columns: usize,
    },

    #[error("'{name}' is {ndim}-dimensional; column selection needs a 2-D array")]
    NotTwoDimensional { name: String, ndim: usize },

    #[error("derived field '{name}' could not be computed: {detail}")]
    DerivedCompute { name: String, detail: String },

    #[error("{path} is neither a flat nor a hierarchical catalogue")]
    UnknownFormat { path: PathBuf },
}

impl CatalogueError {
    /// True when the error means "this resolution step has nothing under that
    /// name", which the facade treats as a cue to try the next step.
    pub fn is_not_found(&self) -> bool {
        matches!(self, CatalogueError::NotFound { .. })
    }
}

pub type Result<T, E = CatalogueError> = std::result::Result<T, E>;
