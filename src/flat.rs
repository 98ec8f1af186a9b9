//! Flat (legacy) catalogue binding.
//!
//! Every dataset at the root of the catalogue is classified once at open
//! time. Classified fields get an entry in an explicit name → binding table
//! holding the field metadata and a [`CachedField`]; unclassified names are
//! kept in an invalid list. Lookups accept the canonical name
//! (`aperture_mass_star_30_kpc`) or the legacy dotted path
//! (`apertures.mass_star_30_kpc`).

use crate::error::{CatalogueError, Result};
use crate::quantity::{CachedField, Quantity};
use crate::reader::ShardedReader;
use crate::registry::{Classification, FieldRegistry};
use crate::store::StoreOpener;
use crate::units::{Unit, UnitSystem};
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, warn};

/// How to load and label one classified field.
#[derive(Clone, Debug)]
pub struct FieldMetadata {
    /// Storage key, or the canonical name for attached fields.
    pub raw_name: String,
    pub classification: Classification,
    /// Rule that classified the field (`attached` for post-hoc fields).
    pub rule: String,
    units: Arc<UnitSystem>,
}

impl FieldMetadata {
    pub fn canonical_name(&self) -> &str {
        &self.classification.canonical_name
    }

    pub fn label(&self) -> &str {
        &self.classification.label
    }

    /// The classified unit, dimensionless when the rule left it unresolved.
    pub fn unit(&self) -> Unit {
        self.classification
            .unit
            .clone()
            .unwrap_or_else(Unit::dimensionless)
    }

    pub fn has_unit(&self) -> bool {
        self.classification.unit.is_some()
    }

    pub fn dotted_path(&self) -> String {
        self.classification.dotted_path()
    }

    pub fn units(&self) -> &Arc<UnitSystem> {
        &self.units
    }
}

#[derive(Debug)]
enum Source {
    Disk,
    Attached,
}

#[derive(Debug)]
struct Binding {
    meta: FieldMetadata,
    source: Source,
    cache: CachedField,
}

/// A legacy catalogue with one lazily-loaded accessor per classified field.
#[derive(Debug)]
pub struct FlatCatalogue {
    reader: ShardedReader,
    units: Arc<UnitSystem>,
    bindings: Vec<Binding>,
    index: BTreeMap<String, usize>,
    invalid: Vec<String>,
    ambiguous: BTreeMap<String, Vec<String>>,
    missing: BTreeSet<String>,
}

impl FlatCatalogue {
    /// Open the (possibly sharded) catalogue at `path` and bind its fields.
    pub fn open(
        path: &Path,
        registry: &FieldRegistry,
        opener: Arc<dyn StoreOpener>,
    ) -> Result<Self> {
        let reader = ShardedReader::open(path, opener)?;
        let header = reader.header()?;
        let units = Arc::new(UnitSystem::from_header(reader.primary(), &header)?);
        Self::bind(reader, units, registry)
    }

    /// Classify every raw field name the reader lists and build the
    /// accessor table. Runs exactly once per catalogue.
    pub fn bind(
        reader: ShardedReader,
        units: Arc<UnitSystem>,
        registry: &FieldRegistry,
    ) -> Result<Self> {
        let mut catalogue = Self {
            reader,
            units,
            bindings: Vec::new(),
            index: BTreeMap::new(),
            invalid: Vec::new(),
            ambiguous: BTreeMap::new(),
            missing: BTreeSet::new(),
        };

        for raw in catalogue.reader.field_names()? {
            let resolution = registry.resolve(&raw, &catalogue.units);
            let (Some(classification), Some(rule)) = (resolution.classification, resolution.rule)
            else {
                warn!(field = %raw, "no registration rule matches field");
                catalogue.invalid.push(raw);
                continue;
            };
            if !resolution.shadowed.is_empty() {
                catalogue.ambiguous.insert(raw.clone(), resolution.shadowed);
            }
            let meta = FieldMetadata {
                raw_name: raw,
                classification,
                rule,
                units: Arc::clone(&catalogue.units),
            };
            catalogue.insert(meta, Source::Disk);
        }
        Ok(catalogue)
    }

    /// Bind `meta` under its canonical name and dotted path. A name already
    /// held by an earlier field stays with that field; the loser is listed
    /// in `ambiguous_fields` against the holder's raw name.
    fn insert(&mut self, meta: FieldMetadata, source: Source) {
        let canonical = meta.canonical_name().to_string();
        if let Some(held) = self.index.get(&canonical).copied() {
            let holder = self.bindings[held].meta.raw_name.clone();
            warn!(field = %meta.raw_name, name = %canonical, holder = %holder, "canonical name already bound; skipping");
            self.ambiguous.entry(meta.raw_name).or_default().push(holder);
            return;
        }
        let dotted = meta.dotted_path();
        let raw = meta.raw_name.clone();
        let slot = self.bindings.len();
        self.bindings.push(Binding {
            meta,
            source,
            cache: CachedField::new(),
        });
        self.index.insert(canonical, slot);
        match self.index.get(&dotted).copied() {
            Some(held) if held != slot => {
                let holder = self.bindings[held].meta.raw_name.clone();
                warn!(field = %raw, path = %dotted, holder = %holder, "dotted path already bound; reachable by canonical name only");
                self.ambiguous.entry(raw).or_default().push(holder);
            }
            _ => {
                self.index.insert(dotted, slot);
            }
        }
    }

    fn slot(&self, name: &str) -> Result<usize> {
        self.index
            .get(name)
            .copied()
            .ok_or_else(|| CatalogueError::NotFound {
                path: name.to_string(),
            })
    }

    pub fn path(&self) -> &Path {
        self.reader.primary()
    }

    pub fn shards(&self) -> &[PathBuf] {
        self.reader.shards()
    }

    pub fn units(&self) -> &Arc<UnitSystem> {
        &self.units
    }

    /// Metadata of every bound field in binding order.
    pub fn fields(&self) -> impl Iterator<Item = &FieldMetadata> {
        self.bindings.iter().map(|binding| &binding.meta)
    }

    pub fn valid_field_count(&self) -> usize {
        self.bindings.len()
    }

    /// Raw names no rule classified.
    pub fn invalid_field_names(&self) -> &[String] {
        &self.invalid
    }

    /// Raw names matched by more than one rule, with the rules that lost,
    /// and raw names that lost a canonical name or dotted path to an earlier
    /// field, with that field's raw name.
    pub fn ambiguous_fields(&self) -> &BTreeMap<String, Vec<String>> {
        &self.ambiguous
    }

    /// Canonical names whose storage key was absent when read.
    pub fn missing_fields(&self) -> &BTreeSet<String> {
        &self.missing
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn metadata(&self, name: &str) -> Option<&FieldMetadata> {
        self.index.get(name).map(|slot| &self.bindings[*slot].meta)
    }

    pub fn is_loaded(&self, name: &str) -> bool {
        self.index
            .get(name)
            .is_some_and(|slot| self.bindings[*slot].cache.is_loaded())
    }

    /// Value of a bound field, loading it on first access.
    ///
    /// `NotFound` when `name` is not bound. `Ok(None)` when the storage key
    /// is missing on disk; the field is then listed in `missing_fields`.
    pub fn get(&mut self, name: &str) -> Result<Option<Arc<Quantity>>> {
        let slot = self.slot(name)?;
        let reader = &self.reader;
        let binding = &mut self.bindings[slot];
        if binding.cache.is_loaded() {
            debug!(field = name, "cache hit");
        }
        let meta = &binding.meta;
        let source = &binding.source;
        let value = binding.cache.get_or_load(|| {
            if matches!(source, Source::Attached) {
                return Ok(None);
            }
            debug!(field = %meta.raw_name, "loading field");
            Ok(reader
                .read_field(&meta.raw_name)?
                .map(|raw| Quantity::new(meta.label(), meta.unit(), raw.values)))
        })?;
        if value.is_none() {
            self.missing.insert(self.bindings[slot].meta.canonical_name().to_string());
        }
        Ok(value)
    }

    /// Overwrite the cached value without touching disk.
    pub fn set(&mut self, name: &str, value: Quantity) -> Result<()> {
        let slot = self.slot(name)?;
        self.bindings[slot].cache.set(value);
        Ok(())
    }

    /// Drop the cached value; the next `get` reads from disk again.
    pub fn invalidate(&mut self, name: &str) -> Result<()> {
        let slot = self.slot(name)?;
        self.bindings[slot].cache.invalidate();
        Ok(())
    }

    /// Register a quantity computed after opening under `canonical`.
    ///
    /// An existing binding of that name keeps its metadata and only has its
    /// cached value replaced.
    pub fn attach(&mut self, canonical: &str, label: &str, value: Quantity) {
        if let Some(slot) = self.index.get(canonical).copied() {
            self.bindings[slot].cache.set(value);
            return;
        }
        let meta = FieldMetadata {
            raw_name: canonical.to_string(),
            classification: Classification {
                unit: Some(value.unit().clone()),
                label: label.to_string(),
                canonical_name: canonical.to_string(),
                category: "derived".to_string(),
                member: canonical.to_string(),
            },
            rule: "attached".to_string(),
            units: Arc::clone(&self.units),
        };
        self.insert(meta, Source::Attached);
        if let Some(slot) = self.index.get(canonical).copied() {
            self.bindings[slot].cache.set(value);
        }
    }
}
