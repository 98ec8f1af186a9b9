//! Legacy-to-native name translation.
//!
//! The legacy flat catalogue addresses quantities as `category.member`
//! (`apertures.mass_star_30_kpc`); the hierarchical format stores them
//! under a group path (`exclusivesphere.30kpc.stellarmass`), sometimes as
//! one column of a multi-column dataset. The mapping is a fixed, curated
//! table. Nothing is inferred: a legacy path that is not in the table is
//! untranslatable.

mod coverage;
mod table;

pub use coverage::{TranslationCoverage, build_translation_coverage};

use crate::error::{CatalogueError, Result};
use std::collections::BTreeMap;

/// Which part of the native dataset a legacy quantity refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Column {
    /// The whole array.
    Whole,
    /// One column of a 2-D array.
    Index(usize),
}

impl Column {
    /// Numeric form with -1 for the whole array.
    pub fn as_index(&self) -> i64 {
        match self {
            Column::Whole => -1,
            Column::Index(index) => *index as i64,
        }
    }
}

/// A successful translation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Translation {
    pub native_path: &'static str,
    pub column: Column,
}

/// Keywords that appear misspelt in some catalogue generations.
const TYPOS: &[(&str, &str)] = &[("veldips", "veldisp")];

/// Replace a known misspelt keyword with its correct spelling. Any other
/// input is returned unchanged.
pub fn typo_correct(keyword: &str) -> String {
    TYPOS
        .iter()
        .find(|(typo, _)| *typo == keyword)
        .map(|(_, fixed)| (*fixed).to_string())
        .unwrap_or_else(|| keyword.to_string())
}

/// Read-only view over the static translation table.
#[derive(Clone, Debug)]
pub struct NameTranslator {
    entries: &'static [(&'static str, &'static str, Column)],
    reverse: BTreeMap<&'static str, Vec<(&'static str, Column)>>,
}

impl Default for NameTranslator {
    fn default() -> Self {
        Self::new()
    }
}

impl NameTranslator {
    pub fn new() -> Self {
        let entries = table::TABLE;
        let mut reverse: BTreeMap<&'static str, Vec<(&'static str, Column)>> = BTreeMap::new();
        for (legacy, native, column) in entries {
            reverse.entry(*native).or_default().push((*legacy, *column));
        }
        Self { entries, reverse }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Map a legacy dotted path onto the native schema.
    pub fn translate(&self, legacy: &str) -> Result<Translation> {
        self.entries
            .binary_search_by(|(key, _, _)| (*key).cmp(legacy))
            .map(|index| {
                let (_, native_path, column) = self.entries[index];
                Translation {
                    native_path,
                    column,
                }
            })
            .map_err(|_| CatalogueError::Untranslatable {
                path: legacy.to_string(),
            })
    }

    /// Legacy paths that resolve to `native` (possibly several, one per
    /// column).
    pub fn legacy_paths_for(&self, native: &str) -> &[(&'static str, Column)] {
        self.reverse.get(native).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Every (legacy, native, column) entry in legacy-path order.
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, Translation)> + '_ {
        self.entries.iter().map(|(legacy, native_path, column)| {
            (
                *legacy,
                Translation {
                    native_path: *native_path,
                    column: *column,
                },
            )
        })
    }

    /// Distinct native paths the table points at.
    pub fn native_targets(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.reverse.keys().copied()
    }
}
