//! Consistency audit between the translation table and a native catalogue.
//!
//! The table is maintained by hand, so two kinds of drift are reported:
//! native leaves no legacy path reaches, and table entries whose target the
//! catalogue does not contain.

use super::NameTranslator;
use serde::Serialize;
use std::collections::BTreeSet;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TranslationCoverage {
    /// Native leaf paths with no legacy name mapping onto them.
    pub untranslated_native: Vec<String>,
    /// Legacy paths whose native target is absent from the catalogue.
    pub dangling_legacy: Vec<String>,
}

impl TranslationCoverage {
    pub fn is_complete(&self) -> bool {
        self.untranslated_native.is_empty() && self.dangling_legacy.is_empty()
    }
}

/// Compare `leaf_paths` (dotted native paths, lowercase) with the table.
pub fn build_translation_coverage(
    translator: &NameTranslator,
    leaf_paths: &BTreeSet<String>,
) -> TranslationCoverage {
    let targets: BTreeSet<&str> = translator.native_targets().collect();
    let untranslated_native = leaf_paths
        .iter()
        .filter(|leaf| !targets.contains(leaf.as_str()))
        .cloned()
        .collect();
    let dangling_legacy = translator
        .entries()
        .filter(|(_, translation)| !leaf_paths.contains(translation.native_path))
        .map(|(legacy, _)| legacy.to_string())
        .collect();
    TranslationCoverage {
        untranslated_native,
        dangling_legacy,
    }
}
