//! Default registration rules for flat halo catalogues.
//!
//! Order matters: [`default_rules`] lists them in priority order and
//! [`FieldRegistry`](super::FieldRegistry) appends the terminator.

use super::suffix::{Suffix, parse_suffix};
use super::{Classification, RegistrationRule, RuleMatch};
use crate::translate::typo_correct;
use crate::units::{Unit, UnitKind};
use once_cell::sync::Lazy;
use regex::Regex;

/// Quantity keyword to unit, for aperture and overdensity families.
pub const APERTURE_UNITS: &[(&str, UnitKind)] = &[
    ("sfr", UnitKind::StarFormationRate),
    ("zmet", UnitKind::Metallicity),
    ("mass", UnitKind::Mass),
    ("npart", UnitKind::Dimensionless),
    ("rhalfmass", UnitKind::Length),
    ("veldisp", UnitKind::Velocity),
    ("r", UnitKind::Length),
    ("lx", UnitKind::SpecificAngularMomentum),
    ("ly", UnitKind::SpecificAngularMomentum),
    ("lz", UnitKind::SpecificAngularMomentum),
];

/// `{quantity}_{ptype}` to legend text.
const PROPERTY_LABELS: &[(&str, &str)] = &[
    ("sfr_", r"SFR $\dot{\rho}_*$"),
    ("sfr_gas", r"Gas SFR $\dot{\rho}_*$"),
    ("zmet_", r"Metallicity $Z$"),
    ("zmet_gas", r"Gas Metallicity $Z_{\rm g}$"),
    ("zmet_star", r"Stellar Metallicity $Z_*$"),
    ("zmet_bh", r"Black Hole Metallicity $Z_{\rm BH}$"),
    ("mass_", r"Mass $M$"),
    ("mass_gas", r"Gas Mass $M_{\rm g}$"),
    ("mass_star", r"Stellar Mass $M_*$"),
    ("mass_bh", r"Black Hole Mass $M_{\rm BH}$"),
    ("mass_interloper", "Mass of Interlopers"),
    ("npart_", r"Number of Particles $N$"),
    ("npart_gas", r"Number of Gas Particles $N_{\rm g}$"),
    ("npart_star", r"Number of Stellar Particles $N_*$"),
    ("npart_bh", r"Number of Black Hole Particles $N_{\rm BH}$"),
    ("npart_interloper", "Number of Interlopers"),
    ("rhalfmass_", r"Half-mass Radius $R_{50}$"),
    ("rhalfmass_gas", r"Gas Half-mass Radius $R_{50, {\rm g}}$"),
    ("rhalfmass_star", r"Stellar Half-mass Radius $R_{50, *}$"),
    ("rhalfmass_bh", r"Black Hole Half-mass Radius $R_{50, {\rm BH}}$"),
    ("r_", r"Radius $R_{\rm SO}$"),
    ("veldisp_", r"Velocity Dispersion $\sigma$"),
    ("veldisp_gas", r"Gas Velocity Dispersion $\sigma_{\rm g}$"),
    ("veldisp_star", r"Stellar Velocity Dispersion $\sigma_{*}$"),
    ("veldisp_bh", r"Black Hole Velocity Dispersion $\sigma_{\rm BH}$"),
];

/// Legend text for a quantity keyword and particle type.
///
/// Falls back to the particle type followed by the corrected keyword.
pub fn property_label(quantity: &str, suffix: &Suffix) -> String {
    let quantity = typo_correct(&quantity.to_ascii_lowercase());
    let key = format!("{quantity}_{}", suffix.ptype_key());
    if let Some((_, label)) = PROPERTY_LABELS.iter().find(|(k, _)| *k == key) {
        return (*label).to_string();
    }
    match suffix.ptype {
        Some(ptype) => format!("{} {quantity}", ptype.display()),
        None => quantity,
    }
}

fn ptype_prefix(suffix: &Suffix) -> String {
    suffix
        .ptype
        .map(|p| format!("{} ", p.display()))
        .unwrap_or_default()
}

fn overdensity_note(suffix: &Suffix) -> String {
    suffix
        .overdensity
        .as_ref()
        .map(|o| format!(" ({})", o.display()))
        .unwrap_or_default()
}

fn classified(
    m: &RuleMatch<'_>,
    unit: Option<Unit>,
    label: String,
    category: &str,
    member: String,
) -> Option<Classification> {
    Some(Classification {
        unit,
        label,
        canonical_name: m.raw.to_lowercase(),
        category: category.to_string(),
        member,
    })
}

fn suffix_at(m: &RuleMatch<'_>, index: usize) -> Option<Suffix> {
    parse_suffix(m.group(index).unwrap_or(""))
}

macro_rules! pattern {
    ($name:ident, $re:expr) => {
        static $name: Lazy<Regex> = Lazy::new(|| Regex::new($re).expect("rule pattern"));
    };
}

pattern!(IDS, r"^(?:ID(?:_([A-Za-z]+))?|([A-Za-z]+)ID)$");
pattern!(ENERGIES, r"^E(frac|kin|pot|tot)?(?:_([A-Za-z0-9_]+))?$");
pattern!(ROTATIONAL, r"^Krot(?:_([A-Za-z_]+))?$");
pattern!(
    PROJECTED,
    r"^Projected_aperture_([0-9]+)_([A-Za-z]+)(?:_([A-Za-z_]+))?_([0-9]+)_kpc$"
);
pattern!(APERTURES, r"^Aperture_([A-Za-z]+)(?:_([A-Za-z_]+))?_([0-9]+)_kpc$");
pattern!(OVERDENSITIES, r"^SO_([A-Za-z]+)(?:_([A-Za-z_]+))?_([0-9]+)_rho(crit|mean)$");
pattern!(MASSES, r"^M(?:ass)?_([A-Za-z0-9_]+)$");
pattern!(RADII, r"^R(?:_([A-Za-z0-9_]+)|(max))$");
pattern!(ANGULAR_MOMENTUM, r"^L([xyz])(?:_([A-Za-z0-9_]+))?$");
pattern!(VELOCITIES, r"^(?:V([XYZ])c(mbp|minpot)?(?:_([A-Za-z_]+))?|(Vmax))$");
pattern!(POSITIONS, r"^([XYZ])c(mbp|minpot)?(?:_([A-Za-z_]+))?$");
pattern!(VELDISP, r"^(?:veldisp_([xyz]{2})|(sigV))(?:_([A-Za-z_]+))?$");
pattern!(TEMPERATURE, r"^T(?:_([A-Za-z_]+))?$");
pattern!(METALLICITY, r"^Zmet(?:_([A-Za-z_]+))?$");
pattern!(SFR, r"^SFR(?:_([A-Za-z_]+))?$");
pattern!(NUMBERS, r"^n(?:part|_([A-Za-z_]+))$");
pattern!(STELLAR_AGE, r"^tage(?:_([A-Za-z_]+))?$");
pattern!(STRUCTURE_TYPE, r"^Structuretype$");

fn particle_ids() -> RegistrationRule {
    RegistrationRule::new("ids", IDS.clone(), &[], |m| {
        let label = match m.raw {
            "ID" => "Halo ID",
            "ID_mpb" => "ID of Most Bound Particle",
            "ID_minpot" => "ID of Particle at Potential Minimum",
            "hostHaloID" => "Host Halo ID",
            _ => "Generic ID",
        };
        classified(
            m,
            Some(m.unit_of(UnitKind::Dimensionless)),
            label.to_string(),
            "ids",
            m.raw.to_lowercase(),
        )
    })
}

fn energies() -> RegistrationRule {
    RegistrationRule::new("energies", ENERGIES.clone(), &[], |m| {
        let suffix = suffix_at(m, 2)?;
        let (name, kind) = match m.group(1) {
            Some("frac") => ("Energy Fraction", UnitKind::Dimensionless),
            Some("kin") => ("Kinetic Energy", UnitKind::Energy),
            Some("pot") => ("Potential Energy", UnitKind::Energy),
            _ => ("Energy", UnitKind::Energy),
        };
        let label = format!(
            "{}{}{}{name}",
            suffix.sf_prefix(),
            suffix.excl_prefix(),
            ptype_prefix(&suffix)
        );
        classified(
            m,
            Some(m.unit_of(kind)),
            label,
            "energies",
            m.raw.to_lowercase(),
        )
    })
}

/// κ_rot of Sales et al. (2010), a dimensionless ratio.
fn rotational_support() -> RegistrationRule {
    RegistrationRule::new("rotational_support", ROTATIONAL.clone(), &[], |m| {
        let suffix = suffix_at(m, 1)?;
        let mut label = match suffix.ptype {
            Some(ptype) => format!(r"$\kappa_{{\rm rot, {{\rm {}}}}}$", ptype.key()),
            None => r"$\kappa_{\rm rot}$".to_string(),
        };
        if let Some(sf) = suffix.star_forming {
            label.push_str(&format!(" ({})", sf.prefix().trim_end()));
        }
        classified(
            m,
            Some(m.unit_of(UnitKind::Dimensionless)),
            label,
            "rotational_support",
            m.raw.to_lowercase(),
        )
    })
}

fn projected_apertures() -> RegistrationRule {
    RegistrationRule::new(
        "projected_apertures",
        PROJECTED.clone(),
        APERTURE_UNITS,
        |m| {
            let projection = m.group(1)?;
            let quantity = m.group(2)?;
            let suffix = suffix_at(m, 3)?;
            let size: u32 = m.group(4)?.parse().ok()?;
            let label = format!(
                "{}{}{} (Projection {projection}, {size} kpc)",
                suffix.sf_prefix(),
                suffix.excl_prefix(),
                property_label(quantity, &suffix)
            );
            let lower = m.raw.to_lowercase();
            let member = format!(
                "projected_{}",
                lower.strip_prefix("projected_aperture_")?
            );
            classified(
                m,
                m.unit_for(quantity),
                label,
                "projected_apertures",
                member,
            )
        },
    )
}

fn apertures() -> RegistrationRule {
    RegistrationRule::new("apertures", APERTURES.clone(), APERTURE_UNITS, |m| {
        let quantity = m.group(1)?;
        let suffix = suffix_at(m, 2)?;
        let size: u32 = m.group(3)?.parse().ok()?;
        let label = format!(
            "{}{}{} ({size} kpc)",
            suffix.sf_prefix(),
            suffix.excl_prefix(),
            property_label(quantity, &suffix)
        );
        let lower = m.raw.to_lowercase();
        let member = lower.strip_prefix("aperture_")?.to_string();
        classified(m, m.unit_for(quantity), label, "apertures", member)
    })
}

fn spherical_overdensities() -> RegistrationRule {
    RegistrationRule::new(
        "spherical_overdensities",
        OVERDENSITIES.clone(),
        APERTURE_UNITS,
        |m| {
            let quantity = m.group(1)?;
            let suffix = suffix_at(m, 2)?;
            let overdensity = super::Overdensity::parse(&format!(
                "{}{}",
                m.group(3)?,
                m.group(4)?
            ))?;
            let label = format!(
                "{}{}{} ({})",
                suffix.sf_prefix(),
                suffix.excl_prefix(),
                property_label(quantity, &suffix),
                overdensity.display()
            );
            let lower = m.raw.to_lowercase();
            let member = lower.strip_prefix("so_")?.to_string();
            classified(
                m,
                m.unit_for(quantity),
                label,
                "spherical_overdensities",
                member,
            )
        },
    )
}

fn masses() -> RegistrationRule {
    RegistrationRule::new("masses", MASSES.clone(), &[], |m| {
        let tokens = m.group(1)?;
        let suffix = parse_suffix(tokens)?;
        let mut label = format!(
            "{}{}{}",
            suffix.sf_prefix(),
            suffix.excl_prefix(),
            property_label("mass", &suffix)
        );
        label.push_str(&overdensity_note(&suffix));
        if suffix.qualifiers.iter().any(|q| q == "fof") {
            label.push_str(" (FOF)");
        }
        classified(
            m,
            Some(m.unit_of(UnitKind::Mass)),
            label,
            "masses",
            format!("mass_{}", tokens.to_lowercase()),
        )
    })
}

fn radii() -> RegistrationRule {
    RegistrationRule::new("radii", RADII.clone(), &[], |m| {
        let label = if m.group(2).is_some() {
            r"Radius of Maximum Circular Velocity $R_{\rm max}$".to_string()
        } else {
            let suffix = suffix_at(m, 1)?;
            let has = |q: &str| suffix.qualifiers.iter().any(|x| x == q);
            if has("halfmass") {
                property_label("rhalfmass", &suffix)
            } else if has("size") {
                format!("{}Size $R_{{\\rm size}}$", ptype_prefix(&suffix))
            } else if suffix.overdensity.is_some() {
                format!(
                    "{}{}",
                    property_label("r", &suffix),
                    overdensity_note(&suffix)
                )
            } else {
                format!("{}Radius $R$", ptype_prefix(&suffix))
            }
        };
        classified(
            m,
            Some(m.unit_of(UnitKind::Length)),
            label,
            "radii",
            m.raw.to_lowercase(),
        )
    })
}

fn angular_momentum() -> RegistrationRule {
    RegistrationRule::new("angular_momentum", ANGULAR_MOMENTUM.clone(), &[], |m| {
        let axis = m.group(1)?;
        let suffix = suffix_at(m, 2)?;
        let label = format!(
            "{}{}{}Angular Momentum $L_{axis}${}",
            suffix.sf_prefix(),
            suffix.excl_prefix(),
            ptype_prefix(&suffix),
            overdensity_note(&suffix)
        );
        classified(
            m,
            Some(m.unit_of(UnitKind::SpecificAngularMomentum)),
            label,
            "angular_momentum",
            m.raw.to_lowercase(),
        )
    })
}

fn centre_variant(variant: Option<&str>) -> &'static str {
    match variant {
        Some("mbp") => " (Most Bound Particle)",
        Some("minpot") => " (Potential Minimum)",
        _ => "",
    }
}

fn velocities() -> RegistrationRule {
    RegistrationRule::new("velocities", VELOCITIES.clone(), &[], |m| {
        let label = if m.group(4).is_some() {
            r"Maximum Circular Velocity $v_{\rm max}$".to_string()
        } else {
            let axis = m.group(1)?.to_ascii_lowercase();
            let suffix = suffix_at(m, 3)?;
            format!(
                "{}Velocity $v_{axis}${}",
                ptype_prefix(&suffix),
                centre_variant(m.group(2))
            )
        };
        classified(
            m,
            Some(m.unit_of(UnitKind::Velocity)),
            label,
            "velocities",
            m.raw.to_lowercase(),
        )
    })
}

fn positions() -> RegistrationRule {
    RegistrationRule::new("positions", POSITIONS.clone(), &[], |m| {
        let axis = m.group(1)?.to_ascii_lowercase();
        let suffix = suffix_at(m, 3)?;
        let label = format!(
            "{}Position ${axis}${}",
            ptype_prefix(&suffix),
            centre_variant(m.group(2))
        );
        classified(
            m,
            Some(m.unit_of(UnitKind::Length)),
            label,
            "positions",
            m.raw.to_lowercase(),
        )
    })
}

/// Tensor components carry velocity squared; `sigV` is already a dispersion.
fn velocity_dispersion() -> RegistrationRule {
    RegistrationRule::new("velocity_dispersion", VELDISP.clone(), &[], |m| {
        let suffix = suffix_at(m, 3)?;
        let (label, unit) = match m.group(1) {
            Some(component) => (
                format!(
                    "{}{}Velocity Dispersion $\\sigma_{{{component}}}^2$",
                    suffix.sf_prefix(),
                    ptype_prefix(&suffix)
                ),
                m.unit_of(UnitKind::Velocity).powf(2.0),
            ),
            None => (
                format!(
                    "{}{}Velocity Dispersion $\\sigma_v$",
                    suffix.sf_prefix(),
                    ptype_prefix(&suffix)
                ),
                m.unit_of(UnitKind::Velocity),
            ),
        };
        classified(m, Some(unit), label, "veldisp", m.raw.to_lowercase())
    })
}

fn temperature() -> RegistrationRule {
    RegistrationRule::new("temperature", TEMPERATURE.clone(), &[], |m| {
        let suffix = suffix_at(m, 1)?;
        let label = format!(
            "{}{}Temperature $T$",
            suffix.sf_prefix(),
            ptype_prefix(&suffix)
        );
        classified(
            m,
            Some(m.unit_of(UnitKind::Temperature)),
            label,
            "temperature",
            m.raw.to_lowercase(),
        )
    })
}

fn metallicity() -> RegistrationRule {
    RegistrationRule::new("metallicity", METALLICITY.clone(), &[], |m| {
        let suffix = suffix_at(m, 1)?;
        let label = format!(
            "{}{}",
            suffix.sf_prefix(),
            property_label("zmet", &suffix)
        );
        classified(
            m,
            Some(m.unit_of(UnitKind::Metallicity)),
            label,
            "metallicity",
            m.raw.to_lowercase(),
        )
    })
}

fn star_formation_rate() -> RegistrationRule {
    RegistrationRule::new("star_formation_rate", SFR.clone(), &[], |m| {
        let suffix = suffix_at(m, 1)?;
        let label = format!(
            "{}{}",
            suffix.sf_prefix(),
            property_label("sfr", &suffix)
        );
        classified(
            m,
            Some(m.unit_of(UnitKind::StarFormationRate)),
            label,
            "star_formation_rate",
            m.raw.to_lowercase(),
        )
    })
}

fn particle_numbers() -> RegistrationRule {
    RegistrationRule::new("particle_numbers", NUMBERS.clone(), &[], |m| {
        let suffix = suffix_at(m, 1)?;
        let member = match m.group(1) {
            Some(tokens) => tokens.to_lowercase(),
            None => m.raw.to_lowercase(),
        };
        classified(
            m,
            Some(m.unit_of(UnitKind::Dimensionless)),
            property_label("npart", &suffix),
            "number",
            member,
        )
    })
}

fn stellar_age() -> RegistrationRule {
    RegistrationRule::new("stellar_age", STELLAR_AGE.clone(), &[], |m| {
        let suffix = suffix_at(m, 1)?;
        let label = format!("{}Age $t$", ptype_prefix(&suffix));
        classified(
            m,
            Some(m.unit_of(UnitKind::Age)),
            label,
            "stellar_age",
            m.raw.to_lowercase(),
        )
    })
}

fn structure_type() -> RegistrationRule {
    RegistrationRule::new("structure_type", STRUCTURE_TYPE.clone(), &[], |m| {
        classified(
            m,
            Some(m.unit_of(UnitKind::Dimensionless)),
            "Structure Type".to_string(),
            "structure_type",
            m.raw.to_lowercase(),
        )
    })
}

/// The built-in chain, highest priority first. The terminator is appended
/// by the registry.
pub fn default_rules() -> Vec<RegistrationRule> {
    vec![
        particle_ids(),
        energies(),
        rotational_support(),
        projected_apertures(),
        apertures(),
        spherical_overdensities(),
        masses(),
        radii(),
        angular_momentum(),
        velocities(),
        positions(),
        velocity_dispersion(),
        temperature(),
        metallicity(),
        star_formation_rate(),
        particle_numbers(),
        stellar_age(),
        structure_type(),
    ]
}

#[cfg(test)]
mod tests {
    use super::super::FieldRegistry;
    use crate::units::{Unit, UnitSystem};

    fn classify(raw: &str) -> Option<super::Classification> {
        FieldRegistry::default().classify(raw, &UnitSystem::galactic())
    }

    #[test]
    fn aperture_sfr_with_star_forming_flag() {
        let units = UnitSystem::galactic();
        let c = classify("Aperture_SFR_gas_sf_30_kpc").unwrap();
        assert_eq!(c.unit, Some(units.star_formation_rate.clone()));
        assert!(c.label.starts_with("SF "));
        assert!(c.label.contains("30 kpc"));
        assert_eq!(c.canonical_name, "aperture_sfr_gas_sf_30_kpc");
        assert_eq!(c.dotted_path(), "apertures.sfr_gas_sf_30_kpc");
    }

    #[test]
    fn aperture_star_forming_prefix_is_exclusive() {
        for (raw, prefix) in [
            ("Aperture_mass_gas_sf_50_kpc", "SF "),
            ("Aperture_mass_gas_nsf_50_kpc", "NSF "),
            ("Aperture_mass_gas_50_kpc", ""),
        ] {
            let c = classify(raw).unwrap();
            let prefixes = ["SF ", "NSF "]
                .iter()
                .filter(|p| c.label.starts_with(*p))
                .count();
            assert_eq!(prefixes, usize::from(!prefix.is_empty()), "{raw}");
            assert!(c.label.starts_with(prefix));
            assert_eq!(c.canonical_name, raw.to_lowercase());
        }
    }

    #[test]
    fn aperture_with_unknown_quantity_keeps_label_without_unit() {
        let c = classify("Aperture_SubgridMasses_bh_30_kpc").unwrap();
        assert_eq!(c.unit, None);
        assert!(c.label.contains("30 kpc"));
    }

    #[test]
    fn typo_in_dispersion_keyword_is_corrected() {
        let c = classify("Aperture_veldips_star_10_kpc").unwrap();
        assert_eq!(c.unit, Some(Unit::km_per_s()));
        assert!(c.label.starts_with("Stellar Velocity Dispersion"));
    }

    #[test]
    fn excluded_flag_follows_star_forming_prefix() {
        let c = classify("Aperture_mass_gas_excl_sf_30_kpc").unwrap();
        assert!(c.label.starts_with("SF Excl. Gas Mass"));
    }

    #[test]
    fn projected_aperture_member_and_label() {
        let c = classify("Projected_aperture_1_mass_star_30_kpc").unwrap();
        assert_eq!(c.dotted_path(), "projected_apertures.projected_1_mass_star_30_kpc");
        assert!(c.label.contains("(Projection 1, 30 kpc)"));
    }

    #[test]
    fn family_rules_map_to_legacy_paths() {
        for (raw, path) in [
            ("Mass_200crit", "masses.mass_200crit"),
            ("M_gas", "masses.mass_gas"),
            ("Mass_FOF", "masses.mass_fof"),
            ("R_HalfMass_star", "radii.r_halfmass_star"),
            ("Lx_200c_gas", "angular_momentum.lx_200c_gas"),
            ("VXc", "velocities.vxc"),
            ("Vmax", "velocities.vmax"),
            ("Xcminpot", "positions.xcminpot"),
            ("veldisp_xx_star", "veldisp.veldisp_xx_star"),
            ("T_gas_highT_incl", "temperature.t_gas_hight_incl"),
            ("Zmet_star", "metallicity.zmet_star"),
            ("SFR_gas", "star_formation_rate.sfr_gas"),
            ("n_gas", "number.gas"),
            ("hostHaloID", "ids.hosthaloid"),
            ("Structuretype", "structure_type.structuretype"),
            ("SO_Mass_gas_500_rhocrit", "spherical_overdensities.mass_gas_500_rhocrit"),
        ] {
            let c = classify(raw).unwrap_or_else(|| panic!("{raw} should classify"));
            assert_eq!(c.dotted_path(), path);
        }
    }

    #[test]
    fn unknown_names_do_not_classify() {
        for raw in ["Num_of_files", "File_id", "Aperture_mass_wibble_30_kpc", "Krot_gas_sf_x"] {
            assert!(classify(raw).is_none(), "{raw}");
        }
    }

    #[test]
    fn default_rules_do_not_overlap() {
        let registry = FieldRegistry::default();
        let units = UnitSystem::galactic();
        for raw in [
            "ID",
            "ID_mpb",
            "hostHaloID",
            "Efrac",
            "Ekin",
            "Krot_star",
            "Projected_aperture_2_SFR_gas_10_kpc",
            "Aperture_npart_bh_100_kpc",
            "SO_R_2500_rhocrit",
            "Mass_tot",
            "R_200mean",
            "Rmax",
            "Lz_BN98_star",
            "VZcmbp",
            "Yc",
            "sigV_gas_nsf",
            "T",
            "Zmet",
            "SFR_gas",
            "npart",
            "tage_star",
            "Structuretype",
        ] {
            let resolution = registry.resolve(raw, &units);
            assert!(resolution.classification.is_some(), "{raw}");
            assert!(!resolution.is_ambiguous(), "{raw}: {:?}", resolution.shadowed);
        }
    }
}
