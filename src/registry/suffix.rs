//! Structural suffix tokens shared by every rule.
//!
//! Raw names end in a run of underscore-separated tokens: a particle type,
//! the interloper-exclusion flag, the star-forming flag, an overdensity, and
//! a few qualifiers. Parsing is all-or-nothing: one unknown token rejects
//! the whole suffix so the owning rule fails closed.

use once_cell::sync::Lazy;
use regex::Regex;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParticleType {
    Gas,
    Star,
    BlackHole,
    DarkMatter,
    Interloper,
}

impl ParticleType {
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "gas" => Some(Self::Gas),
            "star" | "stars" => Some(Self::Star),
            "bh" => Some(Self::BlackHole),
            "dm" => Some(Self::DarkMatter),
            "interloper" => Some(Self::Interloper),
            _ => None,
        }
    }

    /// Key used by the label tables.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Gas => "gas",
            Self::Star => "star",
            Self::BlackHole => "bh",
            Self::DarkMatter => "dm",
            Self::Interloper => "interloper",
        }
    }

    /// Capitalised display form.
    pub fn display(&self) -> &'static str {
        match self {
            Self::Gas => "Gas",
            Self::Star => "Stellar",
            Self::BlackHole => "Black Hole",
            Self::DarkMatter => "Dark Matter",
            Self::Interloper => "Interloper",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StarForming {
    Sf,
    Nsf,
}

impl StarForming {
    /// Label prefix including its trailing space.
    pub fn prefix(&self) -> &'static str {
        match self {
            Self::Sf => "SF ",
            Self::Nsf => "NSF ",
        }
    }
}

/// Overdensity of a spherical-overdensity radius.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Overdensity {
    Critical(u32),
    Mean(u32),
    BryanNorman,
}

impl Overdensity {
    /// Accepts `200crit`, `200c`, `500mean`, `200m`, `BN98`, case-insensitive.
    pub fn parse(token: &str) -> Option<Self> {
        static OVERDENSITY: Lazy<Regex> = Lazy::new(|| {
            Regex::new(r"^([0-9]+)(crit|c|rhocrit|mean|m|rhomean)$").expect("overdensity regex")
        });
        let token = token.to_ascii_lowercase();
        if token == "bn98" {
            return Some(Self::BryanNorman);
        }
        let caps = OVERDENSITY.captures(&token)?;
        let value: u32 = caps[1].parse().ok()?;
        match &caps[2] {
            "crit" | "c" | "rhocrit" => Some(Self::Critical(value)),
            _ => Some(Self::Mean(value)),
        }
    }

    pub fn display(&self) -> String {
        match self {
            Self::Critical(n) => format!(r"$\Delta = {n}\rho_{{\rm crit}}$"),
            Self::Mean(n) => format!(r"$\Delta = {n}\rho_{{\rm mean}}$"),
            Self::BryanNorman => "BN98".to_string(),
        }
    }
}

const QUALIFIERS: &[&str] = &[
    "tot", "fof", "halfmass", "size", "hight", "incl", "excl_hight", "mbp", "minpot", "max",
];

/// Parsed suffix tokens.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Suffix {
    pub ptype: Option<ParticleType>,
    pub excluded: bool,
    pub star_forming: Option<StarForming>,
    pub overdensity: Option<Overdensity>,
    pub qualifiers: Vec<String>,
}

impl Suffix {
    /// `"SF "`, `"NSF "` or `""`.
    pub fn sf_prefix(&self) -> &'static str {
        self.star_forming.map(|sf| sf.prefix()).unwrap_or("")
    }

    pub fn excl_prefix(&self) -> &'static str {
        if self.excluded { "Excl. " } else { "" }
    }

    /// Particle-type key, empty when no type was given.
    pub fn ptype_key(&self) -> &'static str {
        self.ptype.map(|p| p.key()).unwrap_or("")
    }
}

/// Parse an underscore-separated token run. `None` on any unknown token or
/// on a repeated slot.
pub fn parse_suffix(tokens: &str) -> Option<Suffix> {
    let mut suffix = Suffix::default();
    for token in tokens.split('_').filter(|t| !t.is_empty()) {
        let lower = token.to_ascii_lowercase();
        if let Some(ptype) = ParticleType::parse(&lower) {
            if suffix.ptype.replace(ptype).is_some() {
                return None;
            }
        } else if lower == "excl" {
            if suffix.excluded {
                return None;
            }
            suffix.excluded = true;
        } else if lower == "sf" || lower == "nsf" {
            let flag = if lower == "sf" {
                StarForming::Sf
            } else {
                StarForming::Nsf
            };
            if suffix.star_forming.replace(flag).is_some() {
                return None;
            }
        } else if let Some(overdensity) = Overdensity::parse(&lower) {
            if suffix.overdensity.replace(overdensity).is_some() {
                return None;
            }
        } else if QUALIFIERS.contains(&lower.as_str()) {
            suffix.qualifiers.push(lower);
        } else {
            return None;
        }
    }
    Some(suffix)
}
