//! Group, dataset, and derived nodes of a schema tree.

use super::derived::DerivedField;
use crate::error::{CatalogueError, Result};
use crate::quantity::{CachedField, Quantity};
use crate::store::{Attributes, KeyedStore, MemberKind, StoreOpener, attr_f64, join_key};
use crate::units::{CgsExponents, Unit};
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, warn};

const CGS_FACTOR: &str = "Conversion factor to CGS (including cosmological corrections)";

/// Accessor name of an on-disk child: lowercased, with a `v` prefix when it
/// would otherwise start with a digit.
pub fn accessor_name(part: &str) -> String {
    let lower = part.to_lowercase();
    if lower.starts_with(|c: char| c.is_ascii_digit()) {
        format!("v{lower}")
    } else {
        lower
    }
}

/// Display name of a tree path: separators become spaces, underscores go.
pub fn provenance_name(path: &str) -> String {
    path.replace('/', " ").replace('_', "").trim().to_string()
}

/// Where dataset reads go: the catalogue file and its opener.
pub(crate) struct Source<'a> {
    pub file: &'a Path,
    pub opener: &'a Arc<dyn StoreOpener>,
}

#[derive(Debug)]
pub enum Node {
    Group(GroupNode),
    Dataset(DatasetNode),
    Derived(DerivedNode),
}

impl Node {
    pub fn is_leaf(&self) -> bool {
        !matches!(self, Node::Group(_))
    }

    fn cache_mut(&mut self) -> Option<&mut CachedField> {
        match self {
            Node::Group(_) => None,
            Node::Dataset(node) => Some(&mut node.cache),
            Node::Derived(node) => Some(&mut node.cache),
        }
    }

    pub fn is_loaded(&self) -> bool {
        match self {
            Node::Group(_) => false,
            Node::Dataset(node) => node.cache.is_loaded(),
            Node::Derived(node) => node.cache.is_loaded(),
        }
    }
}

/// A stored dataset and its conversion into base units.
#[derive(Debug)]
pub struct DatasetNode {
    path: String,
    name: String,
    factor: f64,
    unit: Unit,
    cache: CachedField,
}

impl DatasetNode {
    fn new(path: String, attrs: &Attributes) -> Self {
        let (factor, unit) = conversion(attrs).unwrap_or_else(|| {
            debug!(dataset = %path, "no conversion metadata; treating as dimensionless");
            (1.0, Unit::dimensionless())
        });
        Self {
            name: provenance_name(&path),
            path,
            factor,
            unit,
            cache: CachedField::new(),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn unit(&self) -> &Unit {
        &self.unit
    }

    pub fn factor(&self) -> f64 {
        self.factor
    }

    fn load(&mut self, source: &Source<'_>) -> Result<Option<Arc<Quantity>>> {
        let (path, name, factor, unit) = (&self.path, &self.name, self.factor, &self.unit);
        self.cache.get_or_load(|| {
            debug!(dataset = %path, "loading dataset");
            let store = source.opener.open(source.file)?;
            let Some(raw) = store.read(path)? else {
                warn!(dataset = %path, "could not read dataset");
                return Ok(None);
            };
            Ok(Some(Quantity::new(
                name.clone(),
                unit.clone(),
                raw.values.mapv(|v| v * factor),
            )))
        })
    }
}

fn conversion(attrs: &Attributes) -> Option<(f64, Unit)> {
    let cgs = attr_f64(attrs, CGS_FACTOR)?;
    let exponents = CgsExponents {
        current: attr_f64(attrs, "U_I exponent")?,
        length: attr_f64(attrs, "U_L exponent")?,
        mass: attr_f64(attrs, "U_M exponent")?,
        temperature: attr_f64(attrs, "U_T exponent")?,
        time: attr_f64(attrs, "U_t exponent")?,
    };
    Some(Unit::from_cgs(cgs, exponents))
}

/// A leaf computed from sibling datasets.
#[derive(Debug)]
pub struct DerivedNode {
    path: String,
    name: String,
    field: DerivedField,
    cache: CachedField,
}

impl DerivedNode {
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn sources(&self) -> &[String] {
        &self.field.sources
    }
}

/// A group and its children keyed by accessor name.
#[derive(Debug, Default)]
pub struct GroupNode {
    path: String,
    children: BTreeMap<String, Node>,
}

impl GroupNode {
    /// Mirror the group at `path` and everything under it.
    pub(crate) fn build(
        store: &dyn KeyedStore,
        path: &str,
        derived: &[DerivedField],
    ) -> Result<Self> {
        let members = store
            .members(path)?
            .ok_or_else(|| CatalogueError::NotFound {
                path: path.to_string(),
            })?;
        let mut group = GroupNode {
            path: path.to_string(),
            children: BTreeMap::new(),
        };
        for member in members {
            let child_path = join_key(path, &member.name);
            let node = match member.kind {
                MemberKind::Group => Node::Group(GroupNode::build(store, &child_path, derived)?),
                MemberKind::Dataset => {
                    let attrs = store.attrs(&child_path)?.unwrap_or_default();
                    Node::Dataset(DatasetNode::new(child_path, &attrs))
                }
            };
            let accessor = accessor_name(&member.name);
            if group.children.contains_key(&accessor) {
                warn!(path = %path, child = %member.name, "children collide after lowercasing; keeping the first");
                continue;
            }
            group.children.insert(accessor, node);
        }
        group.attach_derived(derived);
        Ok(group)
    }

    fn attach_derived(&mut self, derived: &[DerivedField]) {
        for field in derived {
            if self.children.contains_key(&field.name) {
                continue;
            }
            let complete = field.sources.iter().all(|source| {
                matches!(self.children.get(source), Some(Node::Dataset(_)))
            });
            if !complete {
                continue;
            }
            let path = join_key(&self.path, &field.name);
            self.children.insert(
                field.name.clone(),
                Node::Derived(DerivedNode {
                    name: provenance_name(&path),
                    path,
                    field: field.clone(),
                    cache: CachedField::new(),
                }),
            );
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn children(&self) -> &BTreeMap<String, Node> {
        &self.children
    }

    pub fn child(&self, name: &str) -> Option<&Node> {
        self.children.get(name)
    }

    pub(crate) fn child_mut(&mut self, name: &str) -> Option<&mut Node> {
        self.children.get_mut(name)
    }

    /// Value of the leaf child `name`, loading (or computing) it on first
    /// access.
    pub(crate) fn load(
        &mut self,
        name: &str,
        source: &Source<'_>,
    ) -> Result<Option<Arc<Quantity>>> {
        let sources = match self.children.get_mut(name) {
            Some(Node::Dataset(node)) => return node.load(source),
            Some(Node::Derived(node)) => {
                if let Some(value) = node.cache.cached() {
                    return Ok(Some(value));
                }
                node.field.sources.clone()
            }
            Some(Node::Group(_)) | None => {
                return Err(CatalogueError::NotFound {
                    path: join_key(&self.path, name),
                });
            }
        };

        let mut inputs = Vec::with_capacity(sources.len());
        for source_name in &sources {
            match self.load(source_name, source)? {
                Some(value) => inputs.push(value),
                None => return Ok(None),
            }
        }
        let Some(Node::Derived(node)) = self.children.get_mut(name) else {
            return Ok(None);
        };
        let (field, shown) = (&node.field, &node.name);
        node.cache.get_or_load(|| {
            debug!(field = %shown, "computing derived field");
            Ok(Some(field.compute(&inputs)?.with_name(shown.clone())))
        })
    }

    /// Overwrite the cached value of leaf `name`.
    pub(crate) fn set(&mut self, name: &str, value: Quantity) -> Result<()> {
        let path = join_key(&self.path, name);
        let cache = self
            .children
            .get_mut(name)
            .and_then(Node::cache_mut)
            .ok_or(CatalogueError::NotFound { path })?;
        cache.set(value);
        Ok(())
    }

    /// Clear the cached value of leaf `name`.
    pub(crate) fn invalidate(&mut self, name: &str) -> Result<()> {
        let path = join_key(&self.path, name);
        let cache = self
            .children
            .get_mut(name)
            .and_then(Node::cache_mut)
            .ok_or(CatalogueError::NotFound { path })?;
        cache.invalidate();
        Ok(())
    }

    /// Dotted native paths (lowercase, not rebased) of every leaf below.
    pub(crate) fn collect_leaves(&self, prefix: &str, out: &mut Vec<String>) {
        for node in self.children.values() {
            match node {
                Node::Group(group) => group.collect_leaves(prefix, out),
                Node::Dataset(dataset) => out.push(native_path(prefix, &dataset.path)),
                Node::Derived(derived) => out.push(native_path(prefix, &derived.path)),
            }
        }
    }
}

/// `SO/200_crit/TotalMass` below root `prefix` → `so.200_crit.totalmass`.
pub(crate) fn native_path(prefix: &str, disk_path: &str) -> String {
    let relative = disk_path
        .strip_prefix(prefix.trim_matches('/'))
        .unwrap_or(disk_path);
    crate::store::split_key(relative)
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(".")
}
