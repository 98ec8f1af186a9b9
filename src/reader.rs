//! Reads one logical field from a catalogue that may be split into shards.
//!
//! A catalogue written by several ranks is a set of files `base.0` …
//! `base.N-1`, each holding a contiguous block of rows and a `Num_of_files`
//! header giving `N`. Opening any one of them opens the whole set. Field
//! reads concatenate the per-shard blocks along the leading axis in shard
//! order.

use crate::error::{CatalogueError, Result, StoreError};
use crate::store::{Attributes, DatasetInfo, KeyedStore, MemberKind, RawArray, StoreOpener};
use ndarray::{ArrayD, Axis, IxDyn, Slice};
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, warn};

const FILE_COUNT: &str = "Num_of_files";

static SHARD_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(.+)\.([0-9]+)$").expect("shard name regex"));

/// File count from the `Num_of_files` dataset, falling back to a root
/// attribute of the same name.
fn file_count(store: &dyn KeyedStore) -> std::result::Result<Option<usize>, StoreError> {
    if let Some(raw) = store.read(FILE_COUNT)? {
        return Ok(raw.values.iter().next().map(|v| *v as usize));
    }
    Ok(store
        .attrs("")?
        .and_then(|attrs| crate::store::attr_f64(&attrs, FILE_COUNT))
        .map(|v| v as usize))
}

fn shard_names(path: &Path, count: usize) -> Result<Vec<PathBuf>> {
    let bad = || CatalogueError::BadShardName {
        path: path.to_path_buf(),
    };
    let text = path.to_str().ok_or_else(bad)?;
    let caps = SHARD_NAME.captures(text).ok_or_else(bad)?;
    let base = &caps[1];
    Ok((0..count)
        .map(|index| PathBuf::from(format!("{base}.{index}")))
        .collect())
}

/// Reader over one or more shard files sharing a store opener.
#[derive(Clone)]
pub struct ShardedReader {
    shards: Vec<PathBuf>,
    opener: Arc<dyn StoreOpener>,
}

impl std::fmt::Debug for ShardedReader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShardedReader")
            .field("shards", &self.shards)
            .finish_non_exhaustive()
    }
}

impl ShardedReader {
    /// Open the catalogue containing `path`.
    ///
    /// Every shard named by the header must open and report the same file
    /// count; otherwise the open fails with `AmbiguousShardSchema`.
    pub fn open(path: &Path, opener: Arc<dyn StoreOpener>) -> Result<Self> {
        let count = {
            let store = opener.open(path)?;
            file_count(store.as_ref())?.unwrap_or(1)
        };
        if count <= 1 {
            debug!(path = %path.display(), "single-file catalogue");
            return Ok(Self {
                shards: vec![path.to_path_buf()],
                opener,
            });
        }

        let shards = shard_names(path, count)?;
        for shard in &shards {
            let store = opener.open(shard).map_err(|err| match err {
                StoreError::Open { .. } => CatalogueError::AmbiguousShardSchema {
                    field: FILE_COUNT.to_string(),
                    detail: format!("{} cannot be opened: {err}", shard.display()),
                },
                other => other.into(),
            })?;
            let reported = file_count(store.as_ref())?;
            if reported != Some(count) {
                return Err(CatalogueError::AmbiguousShardSchema {
                    field: FILE_COUNT.to_string(),
                    detail: format!(
                        "{} reports {:?} files, expected {count}",
                        shard.display(),
                        reported
                    ),
                });
            }
        }
        debug!(path = %path.display(), shards = count, "sharded catalogue");
        Ok(Self { shards, opener })
    }

    pub fn shards(&self) -> &[PathBuf] {
        &self.shards
    }

    pub fn is_sharded(&self) -> bool {
        self.shards.len() > 1
    }

    /// The first shard; header metadata and the field listing come from it.
    pub fn primary(&self) -> &Path {
        &self.shards[0]
    }

    pub fn opener(&self) -> &Arc<dyn StoreOpener> {
        &self.opener
    }

    /// Root attributes of the first shard.
    pub fn header(&self) -> Result<Attributes> {
        let store = self.opener.open(self.primary())?;
        Ok(store.attrs("")?.unwrap_or_default())
    }

    /// Names of the datasets at the root of the first shard.
    pub fn field_names(&self) -> Result<Vec<String>> {
        let store = self.opener.open(self.primary())?;
        Ok(store
            .members("")?
            .unwrap_or_default()
            .into_iter()
            .filter(|member| member.kind == MemberKind::Dataset)
            .map(|member| member.name)
            .collect())
    }

    /// Read `key` across every shard.
    ///
    /// `Ok(None)` when the first shard lacks the key. A key present in the
    /// first shard but absent from, or shaped differently in, a later one is
    /// an error.
    pub fn read_field(&self, key: &str) -> Result<Option<RawArray>> {
        if !self.is_sharded() {
            let store = self.opener.open(self.primary())?;
            let raw = store.read(key)?;
            if raw.is_none() {
                warn!(field = key, "could not read field");
            }
            return Ok(raw);
        }

        let mut infos: Vec<DatasetInfo> = Vec::with_capacity(self.shards.len());
        for (index, shard) in self.shards.iter().enumerate() {
            let store = self.opener.open(shard)?;
            match store.info(key)? {
                Some(info) => infos.push(info),
                None if index == 0 => {
                    warn!(field = key, "could not read field");
                    return Ok(None);
                }
                None => {
                    return Err(CatalogueError::AmbiguousShardSchema {
                        field: key.to_string(),
                        detail: format!(
                            "present in {} but missing from {}",
                            self.primary().display(),
                            shard.display()
                        ),
                    });
                }
            }
        }

        let first = &infos[0];
        if first.shape.is_empty() {
            let store = self.opener.open(self.primary())?;
            return Ok(store.read(key)?);
        }
        for (info, shard) in infos.iter().zip(&self.shards).skip(1) {
            if info.dtype != first.dtype {
                return Err(CatalogueError::AmbiguousShardSchema {
                    field: key.to_string(),
                    detail: format!(
                        "{} stores {} but {} stores {}",
                        self.primary().display(),
                        first.dtype.as_str(),
                        shard.display(),
                        info.dtype.as_str()
                    ),
                });
            }
            if info.shape.is_empty() || info.trailing() != first.trailing() {
                return Err(CatalogueError::AmbiguousShardSchema {
                    field: key.to_string(),
                    detail: format!(
                        "per-row shape {:?} in {} differs from {:?} in {}",
                        info.trailing(),
                        shard.display(),
                        first.trailing(),
                        self.primary().display()
                    ),
                });
            }
        }

        let total: usize = infos.iter().map(DatasetInfo::rows).sum();
        let mut shape = first.shape.clone();
        shape[0] = total;
        let mut values = ArrayD::<f64>::zeros(IxDyn(&shape));

        let mut offset = 0;
        for (info, shard) in infos.iter().zip(&self.shards) {
            let store = self.opener.open(shard)?;
            let block = store
                .read(key)?
                .ok_or_else(|| CatalogueError::AmbiguousShardSchema {
                    field: key.to_string(),
                    detail: format!("{} vanished from {}", key, shard.display()),
                })?;
            let rows = info.rows();
            if block.values.shape() != info.shape.as_slice() {
                return Err(StoreError::Corrupt {
                    key: key.to_string(),
                    detail: format!(
                        "{} declares shape {:?} but holds {:?}",
                        shard.display(),
                        info.shape,
                        block.values.shape()
                    ),
                }
                .into());
            }
            values
                .slice_axis_mut(Axis(0), Slice::from(offset..offset + rows))
                .assign(&block.values);
            offset += rows;
        }
        debug!(field = key, rows = total, shards = self.shards.len(), "read sharded field");

        Ok(Some(RawArray {
            dtype: first.dtype,
            values,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{ContainerDataset, ContainerFile, DType, JsonStoreOpener};
    use tempfile::TempDir;

    fn opener() -> Arc<dyn StoreOpener> {
        Arc::new(JsonStoreOpener::new())
    }

    fn write_shard(dir: &TempDir, name: &str, count: usize, rows: &[f64]) -> PathBuf {
        let mut file = ContainerFile::new();
        file.insert_dataset(
            FILE_COUNT,
            ContainerDataset::column(DType::Int32, vec![count as f64]),
        )
        .unwrap();
        file.insert_dataset("Mass_tot", ContainerDataset::column(DType::Float32, rows.to_vec()))
            .unwrap();
        let triples: Vec<f64> = rows.iter().flat_map(|r| [*r, *r + 0.1, *r + 0.2]).collect();
        file.insert_dataset("Xc", ContainerDataset::table(DType::Float32, 3, triples))
            .unwrap();
        let path = dir.path().join(name);
        file.write_to(&path).unwrap();
        path
    }

    #[test]
    fn single_file_reads_directly() {
        let dir = TempDir::new().unwrap();
        let path = write_shard(&dir, "halos.properties", 1, &[1.0, 2.0]);
        let reader = ShardedReader::open(&path, opener()).unwrap();
        assert!(!reader.is_sharded());
        let raw = reader.read_field("Mass_tot").unwrap().unwrap();
        assert_eq!(raw.values.as_slice().unwrap(), &[1.0, 2.0]);
        assert!(reader.read_field("Mass_gas").unwrap().is_none());
    }

    #[test]
    fn shards_concatenate_in_order_for_vectors() {
        let dir = TempDir::new().unwrap();
        write_shard(&dir, "halos.properties.0", 2, &[1.0, 2.0]);
        let second = write_shard(&dir, "halos.properties.1", 2, &[3.0]);
        let reader = ShardedReader::open(&second, opener()).unwrap();
        assert_eq!(reader.shards().len(), 2);

        let raw = reader.read_field("Xc").unwrap().unwrap();
        assert_eq!(raw.values.shape(), &[3, 3]);
        assert_eq!(raw.values[[2, 0]], 3.0);
        assert_eq!(raw.values[[1, 2]], 2.2);
    }

    #[test]
    fn missing_shard_aborts_open() {
        let dir = TempDir::new().unwrap();
        let first = write_shard(&dir, "halos.properties.0", 3, &[1.0]);
        write_shard(&dir, "halos.properties.1", 3, &[2.0]);
        let err = ShardedReader::open(&first, opener()).unwrap_err();
        assert!(matches!(err, CatalogueError::AmbiguousShardSchema { .. }));
    }

    #[test]
    fn disagreeing_file_count_aborts_open() {
        let dir = TempDir::new().unwrap();
        let first = write_shard(&dir, "halos.properties.0", 2, &[1.0]);
        write_shard(&dir, "halos.properties.1", 3, &[2.0]);
        let err = ShardedReader::open(&first, opener()).unwrap_err();
        assert!(err.to_string().contains("expected 2"));
    }

    #[test]
    fn multi_file_header_needs_shard_suffix() {
        let dir = TempDir::new().unwrap();
        let path = write_shard(&dir, "halos.properties", 2, &[1.0]);
        let err = ShardedReader::open(&path, opener()).unwrap_err();
        assert!(matches!(err, CatalogueError::BadShardName { .. }));
    }

    #[test]
    fn dtype_disagreement_is_fatal() {
        let dir = TempDir::new().unwrap();
        let first = write_shard(&dir, "halos.properties.0", 2, &[1.0]);
        let mut other = ContainerFile::new();
        other
            .insert_dataset(FILE_COUNT, ContainerDataset::column(DType::Int32, vec![2.0]))
            .unwrap();
        other
            .insert_dataset("Mass_tot", ContainerDataset::column(DType::Float64, vec![2.0]))
            .unwrap();
        other
            .write_to(&dir.path().join("halos.properties.1"))
            .unwrap();

        let reader = ShardedReader::open(&first, opener()).unwrap();
        let err = reader.read_field("Mass_tot").unwrap_err();
        assert!(err.to_string().contains("float64"));
        let err = reader.read_field("Xc").unwrap_err();
        assert!(matches!(err, CatalogueError::AmbiguousShardSchema { .. }));
    }
}
