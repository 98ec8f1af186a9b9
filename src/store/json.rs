//! JSON container backend.
//!
//! A container is a self-describing tree of groups and datasets with
//! attributes at every level, the same shape as an HDF5 file:
//!
//! ```text
//! {"format": "halocat-container-v1",
//!  "attrs": {"Time": [1.0]},
//!  "members": {"Mass_tot": {"dataset": {"dtype": "float32", "shape": [3],
//!                                        "data": [1, 2, 3], "attrs": {}}},
//!              "SWIFT": {"group": {"attrs": {}, "members": {}}}}}
//! ```

use crate::error::StoreError;
use crate::store::schema::validate_container;
use crate::store::{
    AttrValue, Attributes, DType, DatasetInfo, KeyedStore, Member, MemberKind, RawArray,
    StoreOpener, split_key,
};
use ndarray::{ArrayD, IxDyn};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

pub const CONTAINER_FORMAT: &str = "halocat-container-v1";

#[derive(Clone, Debug, Serialize, Deserialize)]
/// A whole container file; the root behaves like a group.
pub struct ContainerFile {
    pub format: String,
    #[serde(flatten)]
    pub root: ContainerGroup,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContainerNode {
    Group(ContainerGroup),
    Dataset(ContainerDataset),
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ContainerGroup {
    #[serde(default)]
    pub attrs: Attributes,
    #[serde(default)]
    pub members: BTreeMap<String, ContainerNode>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ContainerDataset {
    pub dtype: DType,
    pub shape: Vec<usize>,
    pub data: Vec<f64>,
    #[serde(default)]
    pub attrs: Attributes,
}

impl ContainerDataset {
    pub fn new(dtype: DType, shape: Vec<usize>, data: Vec<f64>) -> Self {
        Self {
            dtype,
            shape,
            data,
            attrs: Attributes::new(),
        }
    }

    /// One value per row.
    pub fn column(dtype: DType, data: Vec<f64>) -> Self {
        let rows = data.len();
        Self::new(dtype, vec![rows], data)
    }

    /// `rows` rows of `width` values, row-major.
    pub fn table(dtype: DType, width: usize, data: Vec<f64>) -> Self {
        let rows = if width == 0 { 0 } else { data.len() / width };
        Self::new(dtype, vec![rows, width], data)
    }

    pub fn with_attr(mut self, name: &str, value: impl Into<AttrValue>) -> Self {
        self.attrs.insert(name.to_string(), value.into());
        self
    }
}

enum Found<'a> {
    Group(&'a ContainerGroup),
    Dataset(&'a ContainerDataset),
}

impl ContainerGroup {
    fn find(&self, path: &str) -> Option<Found<'_>> {
        let mut current = Found::Group(self);
        for part in split_key(path) {
            current = match current {
                Found::Group(group) => match group.members.get(part)? {
                    ContainerNode::Group(child) => Found::Group(child),
                    ContainerNode::Dataset(child) => Found::Dataset(child),
                },
                Found::Dataset(_) => return None,
            };
        }
        Some(current)
    }
}

fn ensure_group<'a>(
    group: &'a mut ContainerGroup,
    parts: &[&str],
) -> Option<&'a mut ContainerGroup> {
    let Some((first, rest)) = parts.split_first() else {
        return Some(group);
    };
    match group
        .members
        .entry((*first).to_string())
        .or_insert_with(|| ContainerNode::Group(ContainerGroup::default()))
    {
        ContainerNode::Group(child) => ensure_group(child, rest),
        ContainerNode::Dataset(_) => None,
    }
}

impl Default for ContainerFile {
    fn default() -> Self {
        Self::new()
    }
}

impl ContainerFile {
    pub fn new() -> Self {
        Self {
            format: CONTAINER_FORMAT.to_string(),
            root: ContainerGroup::default(),
        }
    }

    /// Set a root attribute.
    pub fn insert_attr(&mut self, name: &str, value: impl Into<AttrValue>) {
        self.root.attrs.insert(name.to_string(), value.into());
    }

    /// Set an attribute on a group, creating the group path as needed.
    pub fn insert_group_attr(
        &mut self,
        group: &str,
        name: &str,
        value: impl Into<AttrValue>,
    ) -> Result<(), StoreError> {
        let parts: Vec<&str> = split_key(group).collect();
        let target = ensure_group(&mut self.root, &parts).ok_or_else(|| StoreError::Corrupt {
            key: group.to_string(),
            detail: "path runs through a dataset".to_string(),
        })?;
        target.attrs.insert(name.to_string(), value.into());
        Ok(())
    }

    /// Place a dataset at `path`, creating parent groups as needed.
    pub fn insert_dataset(
        &mut self,
        path: &str,
        dataset: ContainerDataset,
    ) -> Result<(), StoreError> {
        let parts: Vec<&str> = split_key(path).collect();
        let Some((leaf, parents)) = parts.split_last() else {
            return Err(StoreError::Corrupt {
                key: path.to_string(),
                detail: "empty dataset path".to_string(),
            });
        };
        let parent = ensure_group(&mut self.root, parents).ok_or_else(|| StoreError::Corrupt {
            key: path.to_string(),
            detail: "path runs through a dataset".to_string(),
        })?;
        parent
            .members
            .insert((*leaf).to_string(), ContainerNode::Dataset(dataset));
        Ok(())
    }

    pub fn write_to(&self, path: &Path) -> Result<(), StoreError> {
        let write_err = |detail: String| StoreError::Write {
            path: path.to_path_buf(),
            detail,
        };
        let file = File::create(path).map_err(|err| write_err(err.to_string()))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer(&mut writer, self).map_err(|err| write_err(err.to_string()))?;
        writer.flush().map_err(|err| write_err(err.to_string()))
    }
}

/// An opened container, held in memory until dropped.
pub struct JsonStore {
    path: PathBuf,
    root: ContainerGroup,
}

impl JsonStore {
    pub fn from_container(path: &Path, container: ContainerFile) -> Self {
        Self {
            path: path.to_path_buf(),
            root: container.root,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl KeyedStore for JsonStore {
    fn attrs(&self, path: &str) -> Result<Option<Attributes>, StoreError> {
        Ok(self.root.find(path).map(|found| match found {
            Found::Group(group) => group.attrs.clone(),
            Found::Dataset(dataset) => dataset.attrs.clone(),
        }))
    }

    fn members(&self, path: &str) -> Result<Option<Vec<Member>>, StoreError> {
        let Some(Found::Group(group)) = self.root.find(path) else {
            return Ok(None);
        };
        Ok(Some(
            group
                .members
                .iter()
                .map(|(name, node)| Member {
                    name: name.clone(),
                    kind: match node {
                        ContainerNode::Group(_) => MemberKind::Group,
                        ContainerNode::Dataset(_) => MemberKind::Dataset,
                    },
                })
                .collect(),
        ))
    }

    fn info(&self, path: &str) -> Result<Option<DatasetInfo>, StoreError> {
        let Some(Found::Dataset(dataset)) = self.root.find(path) else {
            return Ok(None);
        };
        Ok(Some(DatasetInfo {
            dtype: dataset.dtype,
            shape: dataset.shape.clone(),
        }))
    }

    fn read(&self, path: &str) -> Result<Option<RawArray>, StoreError> {
        let Some(Found::Dataset(dataset)) = self.root.find(path) else {
            return Ok(None);
        };
        let values = ArrayD::from_shape_vec(IxDyn(&dataset.shape), dataset.data.clone())
            .map_err(|err| StoreError::Corrupt {
                key: format!("{}:{path}", self.path.display()),
                detail: format!(
                    "shape {:?} does not fit {} values ({err})",
                    dataset.shape,
                    dataset.data.len()
                ),
            })?;
        Ok(Some(RawArray {
            dtype: dataset.dtype,
            values,
        }))
    }
}

/// Opens JSON containers, optionally checking them against the bundled
/// container schema first.
#[derive(Clone, Debug)]
pub struct JsonStoreOpener {
    validate: bool,
}

impl Default for JsonStoreOpener {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonStoreOpener {
    pub fn new() -> Self {
        Self { validate: true }
    }

    pub fn validate(mut self, validate: bool) -> Self {
        self.validate = validate;
        self
    }

    pub fn load(&self, path: &Path) -> Result<ContainerFile, StoreError> {
        let data = fs::read_to_string(path).map_err(|source| StoreError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let value: Value = serde_json::from_str(&data).map_err(|err| StoreError::Parse {
            path: path.to_path_buf(),
            detail: err.to_string(),
        })?;
        if self.validate {
            validate_container(path, &value)?;
        }
        let container: ContainerFile =
            serde_json::from_value(value).map_err(|err| StoreError::Parse {
                path: path.to_path_buf(),
                detail: err.to_string(),
            })?;
        if container.format != CONTAINER_FORMAT {
            return Err(StoreError::Parse {
                path: path.to_path_buf(),
                detail: format!(
                    "unsupported format '{}', expected '{CONTAINER_FORMAT}'",
                    container.format
                ),
            });
        }
        Ok(container)
    }
}

impl StoreOpener for JsonStoreOpener {
    fn open(&self, path: &Path) -> Result<Box<dyn KeyedStore>, StoreError> {
        let container = self.load(path)?;
        Ok(Box::new(JsonStore::from_container(path, container)))
    }
}
