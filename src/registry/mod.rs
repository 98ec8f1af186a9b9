//! Field classification.
//!
//! A `FieldRegistry` is an ordered list of `RegistrationRule` records. Each
//! rule pairs a structural pattern over raw on-disk names with an extraction
//! function that assembles the unit, display label, and canonical accessor
//! name. Classification walks the list in order and the first rule that
//! produces a result wins. Later rules that would also have matched are
//! reported as shadowed so overlapping rule sets are visible instead of
//! silently resolved.
//!
//! The default rule set lives in [`rules`]; callers extend it by prepending
//! their own rules with [`FieldRegistry::with_extensions`].

pub mod rules;
mod suffix;

use crate::units::{Unit, UnitKind, UnitSystem};
use regex::{Captures, Regex};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

pub use suffix::{Overdensity, ParticleType, StarForming, Suffix, parse_suffix};

/// What a rule produces for a raw name it recognises.
///
/// `unit` is `None` when the name has the rule's shape but its quantity
/// keyword is not in the rule's unit table. That is still a match.
#[derive(Clone, Debug, PartialEq)]
pub struct Classification {
    pub unit: Option<Unit>,
    pub label: String,
    pub canonical_name: String,
    /// Legacy dotted-path group (`apertures`, `masses`, ...).
    pub category: String,
    /// Member name inside `category`.
    pub member: String,
}

impl Classification {
    /// `category.member`, the legacy dotted path of this field.
    pub fn dotted_path(&self) -> String {
        format!("{}.{}", self.category, self.member)
    }
}

/// Inputs handed to a rule's extraction function.
pub struct RuleMatch<'a> {
    pub raw: &'a str,
    pub captures: &'a Captures<'a>,
    pub units: &'a UnitSystem,
    unit_table: &'static [(&'static str, UnitKind)],
}

impl<'a> RuleMatch<'a> {
    /// Capture group `index`, treating an empty group as absent.
    pub fn group(&self, index: usize) -> Option<&'a str> {
        self.captures
            .get(index)
            .map(|m| m.as_str())
            .filter(|s| !s.is_empty())
    }

    /// Look a quantity keyword up in the rule's unit table.
    ///
    /// Keywords are typo-corrected and compared case-insensitively.
    pub fn unit_for(&self, keyword: &str) -> Option<Unit> {
        let keyword = crate::translate::typo_correct(&keyword.to_ascii_lowercase());
        self.unit_table
            .iter()
            .find(|(name, _)| *name == keyword)
            .map(|(_, kind)| self.units.resolve(*kind))
    }

    pub fn unit_of(&self, kind: UnitKind) -> Unit {
        self.units.resolve(kind)
    }
}

pub type Extract = Arc<dyn Fn(&RuleMatch<'_>) -> Option<Classification> + Send + Sync>;

#[derive(Clone, Debug)]
pub enum Matcher {
    Pattern(Regex),
    /// Matches nothing. Used by the terminating rule.
    Never,
}

/// One classifier in the ordered chain.
#[derive(Clone)]
pub struct RegistrationRule {
    name: String,
    matcher: Matcher,
    unit_table: &'static [(&'static str, UnitKind)],
    extract: Extract,
}

impl fmt::Debug for RegistrationRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistrationRule")
            .field("name", &self.name)
            .field("matcher", &self.matcher)
            .finish_non_exhaustive()
    }
}

impl RegistrationRule {
    pub fn new<F>(
        name: impl Into<String>,
        pattern: Regex,
        unit_table: &'static [(&'static str, UnitKind)],
        extract: F,
    ) -> Self
    where
        F: Fn(&RuleMatch<'_>) -> Option<Classification> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            matcher: Matcher::Pattern(pattern),
            unit_table,
            extract: Arc::new(extract),
        }
    }

    /// The rule that closes every chain: it never matches, so reaching it
    /// means "no match".
    pub fn terminator() -> Self {
        Self {
            name: "terminator".to_string(),
            matcher: Matcher::Never,
            unit_table: &[],
            extract: Arc::new(|_| None),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_terminator(&self) -> bool {
        matches!(self.matcher, Matcher::Never)
    }

    /// Apply this rule to one raw name.
    ///
    /// A pattern hit whose extraction fails is a malformed match: it is
    /// logged and treated as no match.
    pub fn apply(&self, raw: &str, units: &UnitSystem) -> Option<Classification> {
        let Matcher::Pattern(pattern) = &self.matcher else {
            return None;
        };
        let captures = pattern.captures(raw)?;
        let input = RuleMatch {
            raw,
            captures: &captures,
            units,
            unit_table: self.unit_table,
        };
        let result = (self.extract)(&input);
        if result.is_none() {
            debug!(rule = %self.name, field = raw, "pattern matched but fields could not be extracted");
        }
        result
    }
}

/// Result of running a raw name through the whole chain.
#[derive(Clone, Debug, PartialEq)]
pub struct Resolution {
    pub classification: Option<Classification>,
    /// Name of the rule that produced `classification`.
    pub rule: Option<String>,
    /// Later rules that would also have matched.
    pub shadowed: Vec<String>,
}

impl Resolution {
    pub fn is_ambiguous(&self) -> bool {
        !self.shadowed.is_empty()
    }
}

/// Ordered rule chain. The terminator is always last.
#[derive(Clone, Debug)]
pub struct FieldRegistry {
    rules: Vec<RegistrationRule>,
}

impl Default for FieldRegistry {
    fn default() -> Self {
        Self::from_rules(rules::default_rules())
    }
}

impl FieldRegistry {
    /// Build a registry from `rules` in priority order. Any terminator in
    /// the input is dropped and a single one appended.
    pub fn from_rules(rules: Vec<RegistrationRule>) -> Self {
        let mut rules: Vec<_> = rules.into_iter().filter(|r| !r.is_terminator()).collect();
        rules.push(RegistrationRule::terminator());
        Self { rules }
    }

    /// Default rules with `extra` taking priority over them.
    pub fn with_extensions(extra: Vec<RegistrationRule>) -> Self {
        let mut all = extra;
        all.extend(rules::default_rules());
        Self::from_rules(all)
    }

    pub fn rules(&self) -> &[RegistrationRule] {
        &self.rules
    }

    /// Run `raw` through every rule, keeping the first result and noting
    /// any later rule that also matched.
    pub fn resolve(&self, raw: &str, units: &UnitSystem) -> Resolution {
        let mut resolution = Resolution {
            classification: None,
            rule: None,
            shadowed: Vec::new(),
        };
        for rule in &self.rules {
            let Some(classification) = rule.apply(raw, units) else {
                continue;
            };
            if resolution.classification.is_none() {
                resolution.classification = Some(classification);
                resolution.rule = Some(rule.name.clone());
            } else {
                resolution.shadowed.push(rule.name.clone());
            }
        }
        if let (Some(winner), false) = (&resolution.rule, resolution.shadowed.is_empty()) {
            warn!(
                field = raw,
                rule = %winner,
                shadowed = ?resolution.shadowed,
                "field matched by more than one registration rule"
            );
        }
        resolution
    }

    /// First-match classification of one raw name.
    pub fn classify(&self, raw: &str, units: &UnitSystem) -> Option<Classification> {
        self.resolve(raw, units).classification
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catch_all(name: &str) -> RegistrationRule {
        let label = name.to_string();
        RegistrationRule::new(name, Regex::new("^.*$").unwrap(), &[], move |m| {
            Some(Classification {
                unit: None,
                label: label.clone(),
                canonical_name: m.raw.to_lowercase(),
                category: "custom".to_string(),
                member: m.raw.to_lowercase(),
            })
        })
    }

    #[test]
    fn terminator_is_always_last_and_never_matches() {
        let registry = FieldRegistry::from_rules(vec![
            RegistrationRule::terminator(),
            catch_all("first"),
        ]);
        let names: Vec<_> = registry.rules().iter().map(|r| r.name()).collect();
        assert_eq!(names, vec!["first", "terminator"]);
        assert!(
            RegistrationRule::terminator()
                .apply("anything", &UnitSystem::galactic())
                .is_none()
        );
    }

    #[test]
    fn earlier_rule_wins_and_later_ones_are_reported() {
        let registry = FieldRegistry::from_rules(vec![catch_all("first"), catch_all("second")]);
        let resolution = registry.resolve("Whatever", &UnitSystem::galactic());
        assert_eq!(resolution.rule.as_deref(), Some("first"));
        assert_eq!(resolution.shadowed, vec!["second".to_string()]);
        assert_eq!(resolution.classification.unwrap().label, "first");
    }

    #[test]
    fn extensions_take_priority_over_defaults() {
        let registry = FieldRegistry::with_extensions(vec![catch_all("mine")]);
        let resolution = registry.resolve("Aperture_mass_star_30_kpc", &UnitSystem::galactic());
        assert_eq!(resolution.rule.as_deref(), Some("mine"));
        assert!(resolution.shadowed.contains(&"apertures".to_string()));
    }

    #[test]
    fn malformed_match_fails_closed() {
        let rule = RegistrationRule::new("broken", Regex::new("^X(.*)$").unwrap(), &[], |_| None);
        let registry = FieldRegistry::from_rules(vec![rule, catch_all("fallback")]);
        let resolution = registry.resolve("Xyz", &UnitSystem::galactic());
        assert_eq!(resolution.rule.as_deref(), Some("fallback"));
        assert!(resolution.shadowed.is_empty());
    }
}
