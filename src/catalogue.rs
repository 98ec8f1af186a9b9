//! One query surface over both catalogue layouts.
//!
//! [`Catalogue::get_quantity`] resolves a dotted path in four steps, moving
//! on only when a step reports "not found":
//!
//! 1. the catalogue's own accessor names,
//! 2. the same path rebased onto tree accessor names (or the lowercased raw
//!    key of a flat catalogue),
//! 3. the legacy → native translation table, with an optional column slice,
//! 4. the allow-list of quantities some catalogues legitimately lack.

use crate::error::{CatalogueError, Result};
use crate::flat::FlatCatalogue;
use crate::quantity::Quantity;
use crate::registry::{FieldRegistry, RegistrationRule};
use crate::store::{KeyedStore, MemberKind, StoreOpener, default_opener};
use crate::translate::{Column, NameTranslator, Translation};
use crate::tree::{DerivedField, Lookup, SchemaTree, UsageReport, default_derived_fields};
use crate::units::UnitSystem;
use std::collections::BTreeSet;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};

/// Group whose presence marks a successor-format catalogue.
const SWIFT_GROUP: &str = "SWIFT";

/// Legacy quantities that some catalogues do not carry at all.
pub const DEFAULT_ALLOW_MISSING: &[&str] = &[
    "apertures.veldisp_star_10_kpc",
    "apertures.veldisp_star_30_kpc",
];

/// Knobs for [`Catalogue::open`].
#[derive(Clone)]
pub struct CatalogueOptions {
    /// Rules tried before the default rule set.
    pub extra_rules: Vec<RegistrationRule>,
    /// Fields computed from sibling datasets in hierarchical catalogues.
    pub derived: Vec<DerivedField>,
    /// Paths that resolve to "missing" instead of an error.
    pub allow_missing: BTreeSet<String>,
    /// Group the hierarchical tree is mirrored from; empty for the file root.
    pub tree_root: String,
    pub opener: Arc<dyn StoreOpener>,
}

impl Default for CatalogueOptions {
    fn default() -> Self {
        Self {
            extra_rules: Vec::new(),
            derived: default_derived_fields(),
            allow_missing: DEFAULT_ALLOW_MISSING
                .iter()
                .map(|path| path.to_string())
                .collect(),
            tree_root: String::new(),
            opener: default_opener(),
        }
    }
}

impl fmt::Debug for CatalogueOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CatalogueOptions")
            .field("extra_rules", &self.extra_rules)
            .field("derived", &self.derived)
            .field("allow_missing", &self.allow_missing)
            .field("tree_root", &self.tree_root)
            .finish_non_exhaustive()
    }
}

impl CatalogueOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rule(mut self, rule: RegistrationRule) -> Self {
        self.extra_rules.push(rule);
        self
    }

    pub fn with_derived(mut self, field: DerivedField) -> Self {
        self.derived.push(field);
        self
    }

    pub fn allow_missing(mut self, path: impl Into<String>) -> Self {
        self.allow_missing.insert(path.into());
        self
    }

    pub fn tree_root(mut self, root: impl Into<String>) -> Self {
        self.tree_root = root.into();
        self
    }

    pub fn opener(mut self, opener: Arc<dyn StoreOpener>) -> Self {
        self.opener = opener;
        self
    }
}

/// The schema behind a catalogue.
#[derive(Debug)]
pub enum Schema {
    Flat(FlatCatalogue),
    Tree(SchemaTree),
}

impl Schema {
    pub fn kind(&self) -> &'static str {
        match self {
            Schema::Flat(_) => "flat",
            Schema::Tree(_) => "hierarchical",
        }
    }
}

/// A catalogue of either layout behind one `get_quantity` surface.
#[derive(Debug)]
pub struct Catalogue {
    path: PathBuf,
    schema: Schema,
    units: Arc<UnitSystem>,
    translator: NameTranslator,
    allow_missing: BTreeSet<String>,
}

impl fmt::Display for Catalogue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "catalogue at {}", self.path.display())
    }
}

fn is_hierarchical(path: &Path, store: &dyn KeyedStore) -> Result<bool> {
    let members = store
        .members("")?
        .ok_or_else(|| CatalogueError::UnknownFormat {
            path: path.to_path_buf(),
        })?;
    if members
        .iter()
        .any(|m| m.name == SWIFT_GROUP && m.kind == MemberKind::Group)
    {
        return Ok(true);
    }
    if members.iter().any(|m| m.kind == MemberKind::Dataset) {
        return Ok(false);
    }
    Err(CatalogueError::UnknownFormat {
        path: path.to_path_buf(),
    })
}

impl Catalogue {
    /// Open the catalogue at `path`, detecting its layout.
    pub fn open(path: &Path, options: CatalogueOptions) -> Result<Self> {
        let CatalogueOptions {
            extra_rules,
            derived,
            allow_missing,
            tree_root,
            opener,
        } = options;

        let swift_units = {
            let store = opener.open(path)?;
            if is_hierarchical(path, store.as_ref())? {
                Some(UnitSystem::from_swift_metadata(path, store.as_ref())?)
            } else {
                None
            }
        };

        let (schema, units) = match swift_units {
            Some(units) => {
                let tree = SchemaTree::open(path, &tree_root, opener, &derived)?;
                info!(
                    catalogue = %path.display(),
                    format = "hierarchical",
                    leaves = tree.leaf_paths().len(),
                    "opened catalogue"
                );
                (Schema::Tree(tree), Arc::new(units))
            }
            None => {
                let registry = FieldRegistry::with_extensions(extra_rules);
                let flat = FlatCatalogue::open(path, &registry, opener)?;
                info!(
                    catalogue = %path.display(),
                    format = "flat",
                    shards = flat.shards().len(),
                    valid = flat.valid_field_count(),
                    invalid = flat.invalid_field_names().len(),
                    "opened catalogue"
                );
                let units = Arc::clone(flat.units());
                (Schema::Flat(flat), units)
            }
        };

        Ok(Self {
            path: path.to_path_buf(),
            schema,
            units,
            translator: NameTranslator::new(),
            allow_missing,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn schema_mut(&mut self) -> &mut Schema {
        &mut self.schema
    }

    pub fn flat(&self) -> Option<&FlatCatalogue> {
        match &self.schema {
            Schema::Flat(flat) => Some(flat),
            Schema::Tree(_) => None,
        }
    }

    pub fn flat_mut(&mut self) -> Option<&mut FlatCatalogue> {
        match &mut self.schema {
            Schema::Flat(flat) => Some(flat),
            Schema::Tree(_) => None,
        }
    }

    pub fn tree(&self) -> Option<&SchemaTree> {
        match &self.schema {
            Schema::Tree(tree) => Some(tree),
            Schema::Flat(_) => None,
        }
    }

    pub fn tree_mut(&mut self) -> Option<&mut SchemaTree> {
        match &mut self.schema {
            Schema::Tree(tree) => Some(tree),
            Schema::Flat(_) => None,
        }
    }

    pub fn units(&self) -> &Arc<UnitSystem> {
        &self.units
    }

    pub fn scale_factor(&self) -> f64 {
        self.units.scale_factor
    }

    pub fn redshift(&self) -> f64 {
        self.units.redshift
    }

    pub fn translator(&self) -> &NameTranslator {
        &self.translator
    }

    /// Leaves touched so far; `None` for flat catalogues.
    pub fn usage_report(&self) -> Option<UsageReport> {
        self.tree().map(SchemaTree::usage_report)
    }

    /// Resolve `path` to a quantity.
    ///
    /// `Ok(None)` means "missing": a bound field whose key is absent on
    /// disk, or an allow-listed path nothing resolves.
    pub fn get_quantity(&mut self, path: &str) -> Result<Option<Arc<Quantity>>> {
        match self.direct(path) {
            Err(err) if err.is_not_found() => {}
            other => return other,
        }
        match self.rebased(path) {
            Err(err) if err.is_not_found() => {}
            other => return other,
        }
        let failure = match self.translated(path) {
            Err(
                err @ (CatalogueError::Untranslatable { .. }
                | CatalogueError::TranslatedFieldMissing { .. }),
            ) => err,
            other => return other,
        };
        if self.allow_missing.contains(path) {
            warn!(quantity = path, reason = %failure, "allow-listed quantity is missing");
            return Ok(None);
        }
        match failure {
            CatalogueError::TranslatedFieldMissing { .. } => Err(failure),
            _ => Err(CatalogueError::NoSuchQuantity {
                path: path.to_string(),
            }),
        }
    }

    fn direct(&mut self, path: &str) -> Result<Option<Arc<Quantity>>> {
        match &mut self.schema {
            Schema::Flat(flat) => flat.get(path),
            Schema::Tree(tree) => tree.get(path, Lookup::Direct),
        }
    }

    fn rebased(&mut self, path: &str) -> Result<Option<Arc<Quantity>>> {
        match &mut self.schema {
            Schema::Flat(flat) => flat.get(&path.to_lowercase()),
            Schema::Tree(tree) => tree.get(path, Lookup::Rebased),
        }
    }

    fn translated(&mut self, path: &str) -> Result<Option<Arc<Quantity>>> {
        let Translation {
            native_path,
            column,
        } = self.translator.translate(path)?;
        let Schema::Tree(tree) = &mut self.schema else {
            return Err(CatalogueError::Untranslatable {
                path: path.to_string(),
            });
        };
        let value = match tree.get(native_path, Lookup::Rebased) {
            Err(err) if err.is_not_found() => {
                return Err(CatalogueError::TranslatedFieldMissing {
                    legacy: path.to_string(),
                    native: native_path.to_string(),
                });
            }
            other => other?,
        };
        match (value, column) {
            (Some(value), Column::Index(index)) => Ok(Some(Arc::new(value.column(index)?))),
            (value, _) => Ok(value),
        }
    }
}
