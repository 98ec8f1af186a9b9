//! Fields computed from other datasets of the same group.

use crate::error::{CatalogueError, Result};
use crate::quantity::Quantity;
use std::fmt;
use std::sync::Arc;

pub type Compute = Arc<dyn Fn(&[Arc<Quantity>]) -> Result<Quantity> + Send + Sync>;

/// A leaf computed lazily from sibling datasets.
///
/// The field is added to every group that contains all of `sources`
/// (accessor names, lowercase) and does not already have a child called
/// `name`.
#[derive(Clone)]
pub struct DerivedField {
    pub name: String,
    pub sources: Vec<String>,
    compute: Compute,
}

impl fmt::Debug for DerivedField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DerivedField")
            .field("name", &self.name)
            .field("sources", &self.sources)
            .finish_non_exhaustive()
    }
}

impl DerivedField {
    pub fn new<F>(name: impl Into<String>, sources: &[&str], compute: F) -> Self
    where
        F: Fn(&[Arc<Quantity>]) -> Result<Quantity> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            sources: sources.iter().map(|s| s.to_string()).collect(),
            compute: Arc::new(compute),
        }
    }

    pub fn compute(&self, sources: &[Arc<Quantity>]) -> Result<Quantity> {
        (self.compute)(sources)
    }
}

/// Scalar dispersion from the first two diagonal entries of a stored
/// dispersion tensor (`sqrt(xx + yy)`).
pub fn dispersion_from_tensor(name: &str, sources: &[Arc<Quantity>]) -> Result<Quantity> {
    let tensor = sources.first().ok_or_else(|| CatalogueError::DerivedCompute {
        name: name.to_string(),
        detail: "no source tensor".to_string(),
    })?;
    let xx = tensor.column(0)?;
    let yy = tensor.column(1)?;
    let values = (xx.values() + yy.values()).mapv(f64::sqrt);
    Ok(Quantity::new(tensor.name(), tensor.unit().sqrt(), values))
}

/// Derived fields installed when the caller supplies none.
pub fn default_derived_fields() -> Vec<DerivedField> {
    vec![
        DerivedField::new(
            "stellarvelocitydispersion",
            &["stellarvelocitydispersionmatrix"],
            |sources| dispersion_from_tensor("stellarvelocitydispersion", sources),
        ),
        DerivedField::new(
            "gasvelocitydispersion",
            &["gasvelocitydispersionmatrix"],
            |sources| dispersion_from_tensor("gasvelocitydispersion", sources),
        ),
    ]
}
