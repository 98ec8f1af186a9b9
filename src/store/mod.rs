//! Keyed-array store seam.
//!
//! Catalogue code never touches a file format directly. It asks a
//! `StoreOpener` for a `KeyedStore` per request, reads the keys it needs, and
//! drops the store again, so a field read is a scoped open-read-close. The
//! default backend is the JSON container in [`json`]; the `hdf5` feature adds
//! an HDF5 backend with the same contract.

pub mod json;
mod schema;

#[cfg(feature = "hdf5")]
pub mod hdf5;

use crate::error::StoreError;
use ndarray::ArrayD;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::env;
use std::path::Path;
use std::sync::Arc;

pub use json::{ContainerDataset, ContainerFile, ContainerGroup, ContainerNode, JsonStoreOpener};

/// Attribute map attached to the file root, a group, or a dataset.
pub type Attributes = BTreeMap<String, AttrValue>;

/// Attribute payload. HDF5-style writers often store scalars as length-1
/// arrays; numeric accessors read the first element in that case.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    Bool(bool),
    Number(f64),
    Text(String),
    Array(Vec<f64>),
}

impl AttrValue {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            AttrValue::Number(value) => Some(*value),
            AttrValue::Array(values) => values.first().copied(),
            AttrValue::Bool(flag) => Some(if *flag { 1.0 } else { 0.0 }),
            AttrValue::Text(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttrValue::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl From<f64> for AttrValue {
    fn from(value: f64) -> Self {
        AttrValue::Number(value)
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        AttrValue::Bool(value)
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::Text(value.to_string())
    }
}

/// Numeric view of a named attribute.
pub fn attr_f64(attrs: &Attributes, name: &str) -> Option<f64> {
    attrs.get(name).and_then(AttrValue::as_f64)
}

/// On-disk element type of a dataset. Values are materialised as `f64`; the
/// tag is kept so shards can be checked for agreement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DType {
    Float32,
    Float64,
    Int32,
    Int64,
    Uint32,
    Uint64,
    Bool,
}

impl DType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DType::Float32 => "float32",
            DType::Float64 => "float64",
            DType::Int32 => "int32",
            DType::Int64 => "int64",
            DType::Uint32 => "uint32",
            DType::Uint64 => "uint64",
            DType::Bool => "bool",
        }
    }
}

/// Shape and element type of a dataset, available without reading values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DatasetInfo {
    pub dtype: DType,
    pub shape: Vec<usize>,
}

impl DatasetInfo {
    /// Size of the leading (row) dimension; scalars count as one row.
    pub fn rows(&self) -> usize {
        self.shape.first().copied().unwrap_or(1)
    }

    /// Everything after the leading dimension.
    pub fn trailing(&self) -> &[usize] {
        self.shape.get(1..).unwrap_or(&[])
    }
}

/// A dataset read from a store.
#[derive(Clone, Debug, PartialEq)]
pub struct RawArray {
    pub dtype: DType,
    pub values: ArrayD<f64>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MemberKind {
    Group,
    Dataset,
}

/// One child of a group.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Member {
    pub name: String,
    pub kind: MemberKind,
}

/// Read access to one open catalogue file.
///
/// Paths are slash-delimited; the empty string (or `/`) is the file root.
/// Every lookup returns `Ok(None)` when the key is absent so callers can
/// tell "not there" apart from a broken file.
pub trait KeyedStore {
    fn attrs(&self, path: &str) -> Result<Option<Attributes>, StoreError>;

    /// Children of a group in name order; `None` when `path` is not a group.
    fn members(&self, path: &str) -> Result<Option<Vec<Member>>, StoreError>;

    fn info(&self, path: &str) -> Result<Option<DatasetInfo>, StoreError>;

    fn read(&self, path: &str) -> Result<Option<RawArray>, StoreError>;
}

/// Opens catalogue files. Shared by every reader of one catalogue.
pub trait StoreOpener: Send + Sync {
    fn open(&self, path: &Path) -> Result<Box<dyn KeyedStore>, StoreError>;
}

/// Opener used when the caller does not supply one.
///
/// Container validation is on unless `HALOCAT_VALIDATE_CONTAINER` is set to
/// `0` or an empty string.
pub fn default_opener() -> Arc<dyn StoreOpener> {
    let validate = env::var("HALOCAT_VALIDATE_CONTAINER")
        .map(|v| !v.trim().is_empty() && v != "0")
        .unwrap_or(true);
    Arc::new(JsonStoreOpener::new().validate(validate))
}

/// Split a slash-delimited key into its non-empty parts.
pub fn split_key(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|part| !part.is_empty())
}

/// Join a parent key and a child name.
pub fn join_key(parent: &str, child: &str) -> String {
    let parent = parent.trim_end_matches('/');
    if parent.is_empty() {
        child.to_string()
    } else {
        format!("{parent}/{child}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attr_value_accepts_scalar_array_and_text() {
        let parsed: Attributes =
            serde_json::from_str(r#"{"a": 2.5, "b": [3.0, 4.0], "c": "kpc", "d": true}"#).unwrap();
        assert_eq!(attr_f64(&parsed, "a"), Some(2.5));
        assert_eq!(attr_f64(&parsed, "b"), Some(3.0));
        assert_eq!(attr_f64(&parsed, "c"), None);
        assert_eq!(parsed["c"].as_str(), Some("kpc"));
        assert_eq!(attr_f64(&parsed, "d"), Some(1.0));
    }

    #[test]
    fn keys_split_and_join() {
        assert_eq!(split_key("/SO/200_crit/").collect::<Vec<_>>(), vec!["SO", "200_crit"]);
        assert_eq!(join_key("", "SO"), "SO");
        assert_eq!(join_key("SO/", "200_crit"), "SO/200_crit");
    }

    #[test]
    fn dataset_info_rows_and_trailing() {
        let info = DatasetInfo {
            dtype: DType::Float32,
            shape: vec![10, 3],
        };
        assert_eq!(info.rows(), 10);
        assert_eq!(info.trailing(), &[3]);
        let scalar = DatasetInfo {
            dtype: DType::Int64,
            shape: vec![],
        };
        assert_eq!(scalar.rows(), 1);
        assert!(scalar.trailing().is_empty());
    }
}
