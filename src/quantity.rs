//! Unit-tagged arrays and the single-slot cache that holds them.

use crate::error::{CatalogueError, Result};
use crate::units::Unit;
use ndarray::{ArrayD, Axis};
use std::sync::Arc;

/// A named, unit-tagged n-dimensional array.
///
/// `name` is the provenance string shown in plot legends: the display label
/// for flat-catalogue fields, a path-derived name for hierarchical ones.
#[derive(Clone, Debug, PartialEq)]
pub struct Quantity {
    name: String,
    unit: Unit,
    values: ArrayD<f64>,
}

impl Quantity {
    pub fn new(name: impl Into<String>, unit: Unit, values: ArrayD<f64>) -> Self {
        Self {
            name: name.into(),
            unit,
            values,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn unit(&self) -> &Unit {
        &self.unit
    }

    pub fn values(&self) -> &ArrayD<f64> {
        &self.values
    }

    pub fn into_values(self) -> ArrayD<f64> {
        self.values
    }

    pub fn shape(&self) -> &[usize] {
        self.values.shape()
    }

    pub fn ndim(&self) -> usize {
        self.values.ndim()
    }

    /// Number of rows (entries along the leading axis).
    pub fn len(&self) -> usize {
        self.values.shape().first().copied().unwrap_or(1)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Values rescaled so the unit factor is one (galactic base system).
    pub fn in_base_units(&self) -> Quantity {
        let factor = self.unit.factor();
        Quantity {
            name: self.name.clone(),
            unit: Unit::base(self.unit.dims()),
            values: self.values.mapv(|v| v * factor),
        }
    }

    /// One column of a 2-D quantity, keeping name and unit.
    pub fn column(&self, index: usize) -> Result<Quantity> {
        if self.values.ndim() != 2 {
            return Err(CatalogueError::NotTwoDimensional {
                name: self.name.clone(),
                ndim: self.values.ndim(),
            });
        }
        let columns = self.values.shape()[1];
        if index >= columns {
            return Err(CatalogueError::ColumnOutOfRange {
                name: self.name.clone(),
                column: index,
                columns,
            });
        }
        Ok(Quantity {
            name: self.name.clone(),
            unit: self.unit.clone(),
            values: self.values.index_axis(Axis(1), index).to_owned(),
        })
    }

    /// Axis label: the name followed by the unit in LaTeX.
    pub fn full_label(&self) -> String {
        format!("{} [${}$]", self.name, self.unit.latex())
    }
}

/// Demand-loaded cache slot owned by exactly one field.
///
/// Empty until the first successful load, refilled only after `invalidate`.
/// `set` overwrites the slot without touching disk.
#[derive(Debug, Default)]
pub struct CachedField {
    value: Option<Arc<Quantity>>,
    loads: usize,
}

impl CachedField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loaded(&self) -> bool {
        self.value.is_some()
    }

    /// Number of times the loader actually ran.
    pub fn loads(&self) -> usize {
        self.loads
    }

    pub fn cached(&self) -> Option<Arc<Quantity>> {
        self.value.clone()
    }

    /// Return the cached value, or run `load` and cache what it produces.
    ///
    /// A loader returning `Ok(None)` (no data) leaves the slot empty, so the
    /// next call tries again.
    pub fn get_or_load<F>(&mut self, load: F) -> Result<Option<Arc<Quantity>>>
    where
        F: FnOnce() -> Result<Option<Quantity>>,
    {
        if let Some(value) = &self.value {
            return Ok(Some(Arc::clone(value)));
        }
        self.loads += 1;
        let loaded = load()?.map(Arc::new);
        self.value = loaded.clone();
        Ok(loaded)
    }

    pub fn set(&mut self, value: Quantity) {
        self.value = Some(Arc::new(value));
    }

    pub fn invalidate(&mut self) {
        self.value = None;
    }
}
