//! Hierarchical (successor-format) catalogue adapter.
//!
//! The on-disk group/dataset tree is mirrored once at open time into a tree
//! of [`Node`]s. Groups map accessor names to children, datasets carry their
//! base-unit conversion and a demand-loaded cache, and derived nodes compute
//! their value from sibling datasets. The structure never changes after
//! construction; only leaf caches do.
//!
//! Every leaf that is successfully dereferenced is recorded, so a session can
//! report which fields it actually touched.

mod derived;
mod node;

pub use derived::{Compute, DerivedField, default_derived_fields, dispersion_from_tensor};
pub use node::{DatasetNode, DerivedNode, GroupNode, Node, accessor_name, provenance_name};

use crate::error::{CatalogueError, Result};
use crate::quantity::Quantity;
use crate::store::StoreOpener;
use crate::translate::{NameTranslator, TranslationCoverage, build_translation_coverage};
use node::Source;
use serde::Serialize;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

/// Which leaves a session dereferenced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UsageReport {
    pub used: Vec<String>,
    pub unused: Vec<String>,
    pub total_leaves: usize,
}

/// How a dotted path is matched against accessor names.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lookup {
    /// Parts must equal accessor names exactly.
    Direct,
    /// Parts are lowercased and digit-leading parts get the `v` prefix.
    Rebased,
}

impl Lookup {
    fn part(&self, part: &str) -> String {
        match self {
            Lookup::Direct => part.to_string(),
            Lookup::Rebased => accessor_name(part),
        }
    }
}

/// The mirrored tree of one catalogue file.
pub struct SchemaTree {
    file: PathBuf,
    root: GroupNode,
    opener: Arc<dyn StoreOpener>,
    used: BTreeSet<String>,
}

impl std::fmt::Debug for SchemaTree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SchemaTree")
            .field("file", &self.file)
            .field("root", &self.root.path())
            .field("used", &self.used)
            .finish_non_exhaustive()
    }
}

impl SchemaTree {
    /// Mirror the tree under `root` (empty for the file root).
    pub fn open(
        file: &Path,
        root: &str,
        opener: Arc<dyn StoreOpener>,
        derived: &[DerivedField],
    ) -> Result<Self> {
        let root = {
            let store = opener.open(file)?;
            GroupNode::build(store.as_ref(), root.trim_matches('/'), derived)?
        };
        debug!(file = %file.display(), "mirrored catalogue tree");
        Ok(Self {
            file: file.to_path_buf(),
            root,
            opener,
            used: BTreeSet::new(),
        })
    }

    pub fn file(&self) -> &Path {
        &self.file
    }

    pub fn root(&self) -> &GroupNode {
        &self.root
    }

    fn split(path: &str, lookup: Lookup) -> Result<(Vec<String>, String)> {
        let mut parts: Vec<String> = path
            .split('.')
            .filter(|p| !p.is_empty())
            .map(|p| lookup.part(p))
            .collect();
        let leaf = parts.pop().ok_or_else(|| CatalogueError::NotFound {
            path: path.to_string(),
        })?;
        Ok((parts, leaf))
    }

    fn group_mut(&mut self, parts: &[String], path: &str) -> Result<&mut GroupNode> {
        let mut group = &mut self.root;
        for part in parts {
            group = match group.child_mut(part) {
                Some(Node::Group(child)) => child,
                _ => {
                    return Err(CatalogueError::NotFound {
                        path: path.to_string(),
                    });
                }
            };
        }
        Ok(group)
    }

    /// Node at a dotted path, if any.
    pub fn node(&self, path: &str, lookup: Lookup) -> Option<&Node> {
        let (parts, leaf) = Self::split(path, lookup).ok()?;
        let mut group = &self.root;
        for part in &parts {
            match group.child(part)? {
                Node::Group(child) => group = child,
                _ => return None,
            }
        }
        group.child(&leaf)
    }

    /// Value of the leaf at `path`.
    ///
    /// `NotFound` when the path does not name a leaf. `Ok(None)` when the
    /// dataset exists in the tree but could not be read. Successful reads
    /// are recorded in the usage set, along with the sources of a derived
    /// leaf.
    pub fn get(&mut self, path: &str, lookup: Lookup) -> Result<Option<Arc<Quantity>>> {
        let (parts, leaf) = Self::split(path, lookup)?;
        let file = self.file.clone();
        let opener = Arc::clone(&self.opener);
        let prefix = self.root.path().to_string();
        let group = self.group_mut(&parts, path)?;
        let touched: Vec<String> = match group.child(&leaf) {
            Some(Node::Dataset(node)) => vec![node::native_path(&prefix, node.path())],
            Some(Node::Derived(node)) => std::iter::once(node.path())
                .chain(node.sources().iter().filter_map(|name| match group.child(name) {
                    Some(Node::Dataset(sibling)) => Some(sibling.path()),
                    _ => None,
                }))
                .map(|disk| node::native_path(&prefix, disk))
                .collect(),
            _ => {
                return Err(CatalogueError::NotFound {
                    path: path.to_string(),
                });
            }
        };
        let source = Source {
            file: &file,
            opener: &opener,
        };
        let value = group.load(&leaf, &source)?;
        if value.is_some() {
            self.used.extend(touched);
        }
        Ok(value)
    }

    /// Overwrite a leaf's cached value without touching disk.
    pub fn set(&mut self, path: &str, lookup: Lookup, value: Quantity) -> Result<()> {
        let (parts, leaf) = Self::split(path, lookup)?;
        self.group_mut(&parts, path)?.set(&leaf, value)
    }

    /// Clear a leaf's cached value.
    pub fn invalidate(&mut self, path: &str, lookup: Lookup) -> Result<()> {
        let (parts, leaf) = Self::split(path, lookup)?;
        self.group_mut(&parts, path)?.invalidate(&leaf)
    }

    /// Dotted native paths of every leaf, derived ones included.
    pub fn leaf_paths(&self) -> BTreeSet<String> {
        let mut out = Vec::new();
        self.root.collect_leaves(self.root.path(), &mut out);
        out.into_iter().collect()
    }

    /// Native paths dereferenced so far.
    pub fn used_fields(&self) -> &BTreeSet<String> {
        &self.used
    }

    pub fn usage_report(&self) -> UsageReport {
        let leaves = self.leaf_paths();
        UsageReport {
            used: self.used.iter().cloned().collect(),
            unused: leaves.difference(&self.used).cloned().collect(),
            total_leaves: leaves.len(),
        }
    }

    /// Drift between this tree and the translation table.
    pub fn translation_coverage(&self, translator: &NameTranslator) -> TranslationCoverage {
        build_translation_coverage(translator, &self.leaf_paths())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{AttrValue, ContainerDataset, ContainerFile, DType, JsonStoreOpener};
    use tempfile::TempDir;

    const CGS_ATTR: &str = "Conversion factor to CGS (including cosmological corrections)";

    fn in_solar_masses(dataset: ContainerDataset, cgs: f64) -> ContainerDataset {
        dataset
            .with_attr(CGS_ATTR, AttrValue::Array(vec![cgs]))
            .with_attr("U_I exponent", AttrValue::Array(vec![0.0]))
            .with_attr("U_L exponent", AttrValue::Array(vec![0.0]))
            .with_attr("U_M exponent", AttrValue::Array(vec![1.0]))
            .with_attr("U_T exponent", AttrValue::Array(vec![0.0]))
            .with_attr("U_t exponent", AttrValue::Array(vec![0.0]))
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-9 * b.abs()
    }

    fn open_sample(dir: &TempDir) -> SchemaTree {
        let mut file = ContainerFile::new();
        file.insert_dataset(
            "SO/200_crit/TotalMass",
            in_solar_masses(
                ContainerDataset::column(DType::Float32, vec![1.0, 2.0]),
                1.0e10 * crate::units::MSUN_IN_G,
            ),
        )
        .unwrap();
        file.insert_dataset(
            "ExclusiveSphere/30kpc/StellarVelocityDispersionMatrix",
            ContainerDataset::table(
                DType::Float32,
                6,
                vec![9.0, 16.0, 1.0, 0.0, 0.0, 0.0, 1.0, 3.0, 5.0, 0.0, 0.0, 0.0],
            ),
        )
        .unwrap();
        file.insert_dataset(
            "InputHalos/HaloCatalogueIndex",
            ContainerDataset::column(DType::Int64, vec![0.0, 1.0]),
        )
        .unwrap();
        let path = dir.path().join("halo_properties_0077.json");
        file.write_to(&path).unwrap();
        SchemaTree::open(
            &path,
            "",
            Arc::new(JsonStoreOpener::new()),
            &default_derived_fields(),
        )
        .unwrap()
    }

    #[test]
    fn direct_lookup_needs_exact_accessor_names() {
        let dir = TempDir::new().unwrap();
        let mut tree = open_sample(&dir);
        let mass = tree.get("so.v200_crit.totalmass", Lookup::Direct).unwrap().unwrap();
        let values = mass.values().as_slice().unwrap();
        assert!(close(values[0], 1.0e10) && close(values[1], 2.0e10));
        assert_eq!(mass.unit().dims().mass, 1.0);
        assert_eq!(mass.name(), "SO 200crit TotalMass");
        assert!(matches!(
            tree.get("so.200_crit.totalmass", Lookup::Direct),
            Err(CatalogueError::NotFound { .. })
        ));
    }

    #[test]
    fn rebased_lookup_lowercases_and_prefixes() {
        let dir = TempDir::new().unwrap();
        let mut tree = open_sample(&dir);
        let mass = tree.get("SO.200_crit.TotalMass", Lookup::Rebased).unwrap().unwrap();
        assert_eq!(mass.len(), 2);
        assert!(tree.node("so.200_crit", Lookup::Rebased).is_some());
        assert!(!tree.node("so.200_crit", Lookup::Rebased).unwrap().is_leaf());
    }

    #[test]
    fn missing_conversion_is_dimensionless() {
        let dir = TempDir::new().unwrap();
        let mut tree = open_sample(&dir);
        let index = tree
            .get("inputhalos.halocatalogueindex", Lookup::Direct)
            .unwrap()
            .unwrap();
        assert!(index.unit().is_dimensionless());
        assert_eq!(index.values().as_slice().unwrap(), &[0.0, 1.0]);
    }

    #[test]
    fn derived_dispersion_is_computed_from_the_tensor() {
        let dir = TempDir::new().unwrap();
        let mut tree = open_sample(&dir);
        let sigma = tree
            .get("exclusivesphere.30kpc.stellarvelocitydispersion", Lookup::Rebased)
            .unwrap()
            .unwrap();
        assert_eq!(sigma.values().as_slice().unwrap(), &[5.0, 2.0]);
        assert!(
            tree.used_fields()
                .contains("exclusivesphere.30kpc.stellarvelocitydispersionmatrix")
        );
        assert!(
            tree.used_fields()
                .contains("exclusivesphere.30kpc.stellarvelocitydispersion")
        );
        // no gas tensor, so no gas dispersion
        assert!(
            tree.node("exclusivesphere.30kpc.gasvelocitydispersion", Lookup::Rebased)
                .is_none()
        );
    }

    #[test]
    fn set_and_invalidate_touch_only_the_cache() {
        let dir = TempDir::new().unwrap();
        let mut tree = open_sample(&dir);
        let path = "so.v200_crit.totalmass";
        let original = tree.get(path, Lookup::Direct).unwrap().unwrap();

        let replacement = original.as_ref().clone().with_name("scaled");
        tree.set(path, Lookup::Direct, replacement).unwrap();
        assert_eq!(tree.get(path, Lookup::Direct).unwrap().unwrap().name(), "scaled");

        tree.invalidate(path, Lookup::Direct).unwrap();
        assert!(!tree.node(path, Lookup::Direct).unwrap().is_loaded());
        assert_eq!(*tree.get(path, Lookup::Direct).unwrap().unwrap(), *original);

        assert!(tree.set("so.v200_crit", Lookup::Direct, original.as_ref().clone()).is_err());
    }

    #[test]
    fn usage_report_splits_used_and_unused_leaves() {
        let dir = TempDir::new().unwrap();
        let mut tree = open_sample(&dir);
        assert_eq!(tree.leaf_paths().len(), 4);
        tree.get("so.v200_crit.totalmass", Lookup::Direct).unwrap();

        let report = tree.usage_report();
        assert_eq!(report.total_leaves, 4);
        assert_eq!(report.used, vec!["so.200_crit.totalmass".to_string()]);
        assert_eq!(report.unused.len(), 3);
        assert!(report.unused.contains(&"inputhalos.halocatalogueindex".to_string()));
    }

    #[test]
    fn coverage_lists_native_leaves_without_a_legacy_name() {
        let dir = TempDir::new().unwrap();
        let tree = open_sample(&dir);
        let coverage = tree.translation_coverage(&NameTranslator::new());
        assert!(
            !coverage
                .untranslated_native
                .contains(&"so.200_crit.totalmass".to_string())
        );
        assert!(
            coverage
                .untranslated_native
                .contains(&"inputhalos.halocatalogueindex".to_string())
        );
    }
}
