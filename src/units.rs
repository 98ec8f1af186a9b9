//! Physical units and the per-catalogue unit system.
//!
//! This is deliberately small: a `Unit` is a scale factor relative to the
//! "galactic" base system (kpc, M☉, Myr, K, A), a set of dimension exponents,
//! and a LaTeX symbol for labels. `UnitSystem` is resolved once per catalogue
//! file from its header metadata and shared read-only by every field.

use crate::error::{CatalogueError, Result};
use crate::store::{Attributes, KeyedStore, attr_f64};
use serde::Serialize;
use std::fmt;
use std::ops::{Div, Mul};
use std::path::Path;

pub const KPC_IN_CM: f64 = 3.085_677_581_491_367_3e21;
pub const MSUN_IN_G: f64 = 1.988_415_86e33;
pub const YEAR_IN_S: f64 = 3.155_76e7;
pub const MYR_IN_S: f64 = 3.155_76e13;

// Used when a successor-format file carries no SWIFT/Header BoxSize.
const DEFAULT_BOX_SIZE_MPC: f64 = 1000.0;

/// Exponents of the five base dimensions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct Dimensions {
    pub length: f64,
    pub mass: f64,
    pub time: f64,
    pub temperature: f64,
    pub current: f64,
}

impl Dimensions {
    pub const NONE: Dimensions = Dimensions {
        length: 0.0,
        mass: 0.0,
        time: 0.0,
        temperature: 0.0,
        current: 0.0,
    };

    fn combine(self, other: Dimensions, sign: f64) -> Dimensions {
        Dimensions {
            length: self.length + sign * other.length,
            mass: self.mass + sign * other.mass,
            time: self.time + sign * other.time,
            temperature: self.temperature + sign * other.temperature,
            current: self.current + sign * other.current,
        }
    }

    fn scale(self, power: f64) -> Dimensions {
        Dimensions {
            length: self.length * power,
            mass: self.mass * power,
            time: self.time * power,
            temperature: self.temperature * power,
            current: self.current * power,
        }
    }

    pub fn is_dimensionless(&self) -> bool {
        *self == Dimensions::NONE
    }
}

/// Exponents stored per dataset by the successor format (`U_I`, `U_L`,
/// `U_M`, `U_T`, `U_t`).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CgsExponents {
    pub current: f64,
    pub length: f64,
    pub mass: f64,
    pub temperature: f64,
    pub time: f64,
}

/// A physical unit relative to the galactic base system.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Unit {
    factor: f64,
    dims: Dimensions,
    symbol: String,
}

impl Unit {
    pub fn new(factor: f64, dims: Dimensions, symbol: impl Into<String>) -> Self {
        Self {
            factor,
            dims,
            symbol: symbol.into(),
        }
    }

    pub fn dimensionless() -> Self {
        Self::new(1.0, Dimensions::NONE, "")
    }

    pub fn kpc() -> Self {
        Self::new(
            1.0,
            Dimensions {
                length: 1.0,
                ..Dimensions::NONE
            },
            r"{\rm kpc}",
        )
    }

    pub fn mpc() -> Self {
        Self::new(1.0e3, Unit::kpc().dims, r"{\rm Mpc}")
    }

    pub fn msun() -> Self {
        Self::new(
            1.0,
            Dimensions {
                mass: 1.0,
                ..Dimensions::NONE
            },
            r"M_\odot",
        )
    }

    pub fn myr() -> Self {
        Self::new(
            1.0,
            Dimensions {
                time: 1.0,
                ..Dimensions::NONE
            },
            r"{\rm Myr}",
        )
    }

    pub fn year() -> Self {
        Self::new(1.0e-6, Unit::myr().dims, r"{\rm yr}")
    }

    pub fn km_per_s() -> Self {
        Self::new(
            1.0e5 * MYR_IN_S / KPC_IN_CM,
            Dimensions {
                length: 1.0,
                time: -1.0,
                ..Dimensions::NONE
            },
            r"{\rm km}/{\rm s}",
        )
    }

    pub fn kelvin() -> Self {
        Self::new(
            1.0,
            Dimensions {
                temperature: 1.0,
                ..Dimensions::NONE
            },
            r"{\rm K}",
        )
    }

    /// Unit with factor one in the base system for the given dimensions.
    pub fn base(dims: Dimensions) -> Self {
        let parts = [
            (r"{\rm kpc}", dims.length),
            (r"M_\odot", dims.mass),
            (r"{\rm Myr}", dims.time),
            (r"{\rm K}", dims.temperature),
            (r"{\rm A}", dims.current),
        ];
        let symbol = parts
            .iter()
            .filter(|(_, exp)| *exp != 0.0)
            .map(|(sym, exp)| {
                if *exp == 1.0 {
                    (*sym).to_string()
                } else {
                    format!("{sym}^{{{}}}", format_exponent(*exp))
                }
            })
            .collect::<Vec<_>>()
            .join(r"\,");
        Self::new(1.0, dims, symbol)
    }

    /// Conversion of a dataset stored with a CGS factor and five dimension
    /// exponents into the galactic base system.
    ///
    /// Returns the scalar to multiply raw values by, and the base unit the
    /// scaled values carry. The product is accumulated in log space so that
    /// large exponents of the gram/centimetre conversions cannot overflow.
    pub fn from_cgs(cgs_factor: f64, exponents: CgsExponents) -> (f64, Unit) {
        let dims = Dimensions {
            length: exponents.length,
            mass: exponents.mass,
            time: exponents.time,
            temperature: exponents.temperature,
            current: exponents.current,
        };
        let factor = if cgs_factor == 0.0 {
            0.0
        } else {
            let log_factor = cgs_factor.abs().ln()
                - exponents.length * KPC_IN_CM.ln()
                - exponents.mass * MSUN_IN_G.ln()
                - exponents.time * MYR_IN_S.ln();
            cgs_factor.signum() * log_factor.exp()
        };
        (factor, Unit::base(dims))
    }

    pub fn factor(&self) -> f64 {
        self.factor
    }

    pub fn dims(&self) -> Dimensions {
        self.dims
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn is_dimensionless(&self) -> bool {
        self.dims.is_dimensionless()
    }

    /// LaTeX representation used in axis labels.
    pub fn latex(&self) -> String {
        if self.symbol.is_empty() && self.factor != 1.0 {
            format_factor(self.factor)
        } else {
            self.symbol.clone()
        }
    }

    /// Same dimensions, factor multiplied by `by`.
    pub fn scaled(&self, by: f64) -> Unit {
        if by == 1.0 {
            return self.clone();
        }
        let symbol = if self.symbol.is_empty() {
            String::new()
        } else {
            format!(r"{}\times{}", format_factor(by), self.symbol)
        };
        Unit::new(self.factor * by, self.dims, symbol)
    }

    /// Same as `scaled`, but with a caller-chosen symbol.
    pub fn scaled_as(&self, by: f64, symbol: impl Into<String>) -> Unit {
        Unit::new(self.factor * by, self.dims, symbol)
    }

    pub fn powf(&self, power: f64) -> Unit {
        let symbol = if self.symbol.is_empty() || power == 1.0 {
            self.symbol.clone()
        } else if is_atomic(&self.symbol) {
            format!("{}^{{{}}}", self.symbol, format_exponent(power))
        } else {
            format!("({})^{{{}}}", self.symbol, format_exponent(power))
        };
        Unit::new(self.factor.powf(power), self.dims.scale(power), symbol)
    }

    pub fn sqrt(&self) -> Unit {
        self.powf(0.5)
    }

    /// Factor converting values in `self` into values in `other`, or `None`
    /// when the dimensions differ.
    pub fn conversion_to(&self, other: &Unit) -> Option<f64> {
        if self.dims != other.dims {
            return None;
        }
        Some(self.factor / other.factor)
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.latex())
    }
}

impl Mul for &Unit {
    type Output = Unit;

    fn mul(self, rhs: &Unit) -> Unit {
        let symbol = match (self.symbol.is_empty(), rhs.symbol.is_empty()) {
            (true, _) => rhs.symbol.clone(),
            (_, true) => self.symbol.clone(),
            _ => format!(r"{}\,{}", self.symbol, rhs.symbol),
        };
        Unit::new(
            self.factor * rhs.factor,
            self.dims.combine(rhs.dims, 1.0),
            symbol,
        )
    }
}

impl Mul for Unit {
    type Output = Unit;

    fn mul(self, rhs: Unit) -> Unit {
        &self * &rhs
    }
}

impl Div for &Unit {
    type Output = Unit;

    fn div(self, rhs: &Unit) -> Unit {
        let symbol = match (self.symbol.is_empty(), rhs.symbol.is_empty()) {
            (_, true) => self.symbol.clone(),
            (true, false) => rhs.powf(-1.0).symbol,
            _ if is_atomic(&rhs.symbol) => format!("{}/{}", self.symbol, rhs.symbol),
            _ => format!("{}/({})", self.symbol, rhs.symbol),
        };
        Unit::new(
            self.factor / rhs.factor,
            self.dims.combine(rhs.dims, -1.0),
            symbol,
        )
    }
}

impl Div for Unit {
    type Output = Unit;

    fn div(self, rhs: Unit) -> Unit {
        &self / &rhs
    }
}

fn is_atomic(symbol: &str) -> bool {
    !symbol.contains(r"\,") && !symbol.contains('/') && !symbol.contains('^')
}

fn format_exponent(exp: f64) -> String {
    if exp.fract() == 0.0 {
        format!("{}", exp as i64)
    } else {
        format!("{exp}")
    }
}

fn format_factor(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1.0e6 {
        format!("{}", value as i64)
    } else {
        format!("{value:e}")
    }
}

/// Which of the unit system's units a classified field carries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UnitKind {
    Length,
    Mass,
    Velocity,
    Metallicity,
    Age,
    StarFormationRate,
    Temperature,
    Energy,
    SpecificAngularMomentum,
    Dimensionless,
}

/// Cosmological parameters read from a successor-format file.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CosmologyParameters {
    pub h0: f64,
    pub omega_m: f64,
    pub omega_lambda: f64,
    pub omega_b: f64,
    pub w0: f64,
}

/// Background model handed to downstream consumers.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum CosmologyModel {
    FlatLambdaCdm {
        h0: f64,
        omega_m: f64,
        omega_b: f64,
    },
    WCdm {
        h0: f64,
        omega_m: f64,
        omega_de: f64,
        w0: f64,
        omega_b: f64,
    },
}

impl CosmologyParameters {
    /// A constant dark-energy equation of state (w0 = -1) is a flat ΛCDM
    /// model; anything else is a wCDM model.
    pub fn model(&self) -> CosmologyModel {
        if self.w0 == -1.0 {
            CosmologyModel::FlatLambdaCdm {
                h0: self.h0,
                omega_m: self.omega_m,
                omega_b: self.omega_b,
            }
        } else {
            CosmologyModel::WCdm {
                h0: self.h0,
                omega_m: self.omega_m,
                omega_de: self.omega_lambda,
                w0: self.w0,
                omega_b: self.omega_b,
            }
        }
    }
}

/// Simulation box extent, all values in Mpc (volumes in Mpc³).
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BoxGeometry {
    pub box_length: f64,
    pub comoving_box_volume: f64,
    pub period: f64,
    pub physical_box_volume: f64,
}

impl BoxGeometry {
    fn new(comoving_length_mpc: f64, scale_factor: f64) -> Self {
        let period = scale_factor * comoving_length_mpc;
        Self {
            box_length: comoving_length_mpc,
            comoving_box_volume: comoving_length_mpc.powi(3),
            period,
            physical_box_volume: period.powi(3),
        }
    }
}

/// Units and cosmological bookkeeping for one catalogue file.
#[derive(Clone, Debug, Serialize)]
pub struct UnitSystem {
    pub length: Unit,
    pub mass: Unit,
    pub velocity: Unit,
    pub metallicity: Unit,
    pub age: Unit,
    pub star_formation_rate: Unit,
    pub scale_factor: f64,
    pub redshift: f64,
    pub cosmological: bool,
    pub comoving: bool,
    pub cosmology: Option<CosmologyParameters>,
    pub geometry: Option<BoxGeometry>,
}

impl UnitSystem {
    /// Build the unit system of a legacy flat catalogue from its root
    /// attributes.
    pub fn from_header(file: &Path, attrs: &Attributes) -> Result<Self> {
        let header = |name: &str| {
            attr_f64(attrs, name).ok_or_else(|| CatalogueError::MissingHeader {
                file: file.to_path_buf(),
                name: name.to_string(),
            })
        };

        let length = Unit::kpc().scaled(header("Length_unit_to_kpc")?);
        let mass = Unit::msun().scaled(header("Mass_unit_to_solarmass")?);
        let metallicity = Unit::dimensionless()
            .scaled_as(header("Metallicity_unit_to_solar")?, r"Z_\odot");
        let age = Unit::year().scaled(header("Stellar_age_unit_to_yr")?);
        let velocity = Unit::km_per_s().scaled(header("Velocity_to_kms")?);
        let star_formation_rate = (&Unit::msun() / &Unit::year())
            .scaled(header("SFR_unit_to_solarmassperyear")?);

        let scale_factor = header("Time")?;
        let redshift = 1.0 / scale_factor - 1.0;
        let cosmological = header("Cosmological_Sim")? != 0.0;
        let comoving = header("Comoving_or_Physical")? != 0.0;

        Ok(Self {
            length,
            mass,
            velocity,
            metallicity,
            age,
            star_formation_rate,
            scale_factor,
            redshift,
            cosmological,
            comoving,
            cosmology: None,
            geometry: None,
        })
    }

    /// Build the unit system of a successor-format catalogue.
    ///
    /// Field values in that format are already converted into the base
    /// system dataset by dataset, so only the cosmology and box metadata
    /// come from the file.
    pub fn from_swift_metadata(file: &Path, store: &dyn KeyedStore) -> Result<Self> {
        let cosmology_attrs =
            store
                .attrs("SWIFT/Cosmology")?
                .ok_or_else(|| CatalogueError::MissingHeader {
                    file: file.to_path_buf(),
                    name: "SWIFT/Cosmology".to_string(),
                })?;
        let cosmo = |name: &str| {
            attr_f64(&cosmology_attrs, name).ok_or_else(|| CatalogueError::MissingHeader {
                file: file.to_path_buf(),
                name: format!("SWIFT/Cosmology/{name}"),
            })
        };

        let scale_factor = cosmo("Scale-factor")?;
        let redshift = cosmo("Redshift")?;
        let cosmology = CosmologyParameters {
            h0: cosmo("H0 [internal units]")?,
            omega_m: cosmo("Omega_m")?,
            omega_lambda: cosmo("Omega_lambda")?,
            omega_b: cosmo("Omega_b")?,
            w0: cosmo("w_0")?,
        };

        let box_size = store
            .attrs("SWIFT/Header")?
            .and_then(|attrs| attr_f64(&attrs, "BoxSize"))
            .unwrap_or(DEFAULT_BOX_SIZE_MPC);

        Ok(Self {
            length: Unit::kpc(),
            mass: Unit::msun(),
            velocity: Unit::km_per_s(),
            metallicity: Unit::dimensionless(),
            age: Unit::year(),
            star_formation_rate: &Unit::msun() / &Unit::year(),
            scale_factor,
            redshift,
            cosmological: true,
            comoving: false,
            cosmology: Some(cosmology),
            geometry: Some(BoxGeometry::new(box_size, scale_factor)),
        })
    }

    /// Plain galactic units at z = 0 with no cosmology attached.
    pub fn galactic() -> Self {
        Self {
            length: Unit::kpc(),
            mass: Unit::msun(),
            velocity: Unit::km_per_s(),
            metallicity: Unit::dimensionless(),
            age: Unit::year(),
            star_formation_rate: &Unit::msun() / &Unit::year(),
            scale_factor: 1.0,
            redshift: 0.0,
            cosmological: false,
            comoving: false,
            cosmology: None,
            geometry: None,
        }
    }

    /// Resolve a unit kind against this system.
    pub fn resolve(&self, kind: UnitKind) -> Unit {
        match kind {
            UnitKind::Length => self.length.clone(),
            UnitKind::Mass => self.mass.clone(),
            UnitKind::Velocity => self.velocity.clone(),
            UnitKind::Metallicity => self.metallicity.clone(),
            UnitKind::Age => self.age.clone(),
            UnitKind::StarFormationRate => self.star_formation_rate.clone(),
            UnitKind::Temperature => Unit::kelvin(),
            UnitKind::Energy => &(&self.mass * &self.velocity) * &self.velocity,
            UnitKind::SpecificAngularMomentum => &self.length * &self.velocity,
            UnitKind::Dimensionless => Unit::dimensionless(),
        }
    }

    /// Short alias for the scale factor.
    pub fn a(&self) -> f64 {
        self.scale_factor
    }

    /// Short alias for the redshift.
    pub fn z(&self) -> f64 {
        self.redshift
    }
}
