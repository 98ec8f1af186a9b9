#![allow(dead_code)]

use anyhow::{Context, Result, bail};
use halocat::StoreError;
use halocat::store::{
    AttrValue, Attributes, ContainerDataset, ContainerFile, DType, DatasetInfo, JsonStoreOpener,
    KeyedStore, Member, RawArray, StoreOpener,
};
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::sync::{Arc, Mutex};

const CGS_FACTOR: &str = "Conversion factor to CGS (including cosmological corrections)";

/// Legacy header with kpc lengths and 1e10 Msun masses.
pub fn flat_header(file: &mut ContainerFile) {
    for (name, value) in [
        ("Length_unit_to_kpc", 1.0),
        ("Mass_unit_to_solarmass", 1.0e10),
        ("Metallicity_unit_to_solar", 1.0),
        ("Stellar_age_unit_to_yr", 1.0e6),
        ("Velocity_to_kms", 1.0),
        ("SFR_unit_to_solarmassperyear", 1.0),
        ("Time", 0.5),
        ("Cosmological_Sim", 1.0),
        ("Comoving_or_Physical", 0.0),
    ] {
        file.insert_attr(name, AttrValue::Array(vec![value]));
    }
}

/// A single-file legacy catalogue with a handful of fields.
pub fn write_flat(dir: &Path) -> Result<PathBuf> {
    let mut file = ContainerFile::new();
    flat_header(&mut file);
    file.insert_dataset(
        "Aperture_mass_star_30_kpc",
        ContainerDataset::column(DType::Float32, vec![1.0, 2.0, 3.0]),
    )?;
    file.insert_dataset(
        "Aperture_SFR_gas_sf_30_kpc",
        ContainerDataset::column(DType::Float32, vec![0.1, 0.2, 0.3]),
    )?;
    file.insert_dataset(
        "Mass_tot",
        ContainerDataset::column(DType::Float64, vec![10.0, 20.0, 30.0]),
    )?;
    file.insert_dataset("ID", ContainerDataset::column(DType::Int64, vec![1.0, 2.0, 3.0]))?;
    file.insert_dataset("File_id", ContainerDataset::column(DType::Int32, vec![0.0; 3]))?;
    file.insert_dataset("Krot_gas_sf_x", ContainerDataset::column(DType::Float32, vec![0.0; 3]))?;
    let path = dir.join("halos.properties");
    file.write_to(&path)?;
    Ok(path)
}

/// Shards `base.0` … `base.N-1` where shard `i` holds `sizes[i]` rows of
/// `Mass_tot` numbered consecutively from zero.
pub fn write_sharded(dir: &Path, base: &str, sizes: &[usize]) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    let mut next = 0.0;
    for (index, rows) in sizes.iter().enumerate() {
        let mut file = ContainerFile::new();
        flat_header(&mut file);
        file.insert_attr("Num_of_files", AttrValue::Array(vec![sizes.len() as f64]));
        let data: Vec<f64> = (0..*rows).map(|row| next + row as f64).collect();
        next += *rows as f64;
        file.insert_dataset("Mass_tot", ContainerDataset::column(DType::Float32, data))?;
        let path = dir.join(format!("{base}.{index}"));
        file.write_to(&path)?;
        paths.push(path);
    }
    Ok(paths)
}

fn with_cgs(dataset: ContainerDataset, cgs: f64, exponents: [f64; 5]) -> ContainerDataset {
    let [current, length, mass, temperature, time] = exponents;
    dataset
        .with_attr(CGS_FACTOR, AttrValue::Array(vec![cgs]))
        .with_attr("U_I exponent", AttrValue::Array(vec![current]))
        .with_attr("U_L exponent", AttrValue::Array(vec![length]))
        .with_attr("U_M exponent", AttrValue::Array(vec![mass]))
        .with_attr("U_T exponent", AttrValue::Array(vec![temperature]))
        .with_attr("U_t exponent", AttrValue::Array(vec![time]))
}

fn swift_metadata(file: &mut ContainerFile) -> Result<()> {
    for (name, value) in [
        ("Scale-factor", 1.0),
        ("Redshift", 0.0),
        ("H0 [internal units]", 68.0),
        ("Omega_m", 0.3),
        ("Omega_lambda", 0.7),
        ("Omega_b", 0.048),
        ("w_0", -1.0),
    ] {
        file.insert_group_attr("SWIFT/Cosmology", name, AttrValue::Array(vec![value]))?;
    }
    file.insert_group_attr("SWIFT/Header", "BoxSize", AttrValue::Array(vec![25.0]))?;
    Ok(())
}

/// A successor-format catalogue with SWIFT metadata and a few groups.
pub fn write_hierarchical(dir: &Path) -> Result<PathBuf> {
    let mut file = ContainerFile::new();
    swift_metadata(&mut file)?;
    file.insert_dataset(
        "ExclusiveSphere/30kpc/StellarMass",
        ContainerDataset::column(DType::Float32, vec![5.0, 6.0, 7.0]),
    )?;
    file.insert_dataset(
        "ExclusiveSphere/30kpc/StellarVelocityDispersionMatrix",
        ContainerDataset::table(
            DType::Float32,
            6,
            vec![
                9.0, 16.0, 0.0, 0.0, 0.0, 0.0, //
                1.0, 3.0, 0.0, 0.0, 0.0, 0.0, //
                0.0, 0.0, 0.0, 0.0, 0.0, 0.0,
            ],
        ),
    )?;
    file.insert_dataset(
        "SO/200_crit/TotalMass",
        with_cgs(
            ContainerDataset::column(DType::Float32, vec![1.0, 2.0, 3.0]),
            1.988_415_86e43,
            [0.0, 0.0, 1.0, 0.0, 0.0],
        ),
    )?;
    file.insert_dataset(
        "SO/200_crit/AngularMomentumStars",
        ContainerDataset::table(
            DType::Float32,
            3,
            vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0],
        ),
    )?;
    let path = dir.join("halo_properties_0077.json");
    file.write_to(&path)?;
    Ok(path)
}

/// A successor-format catalogue whose halo groups sit under `root`.
pub fn write_rooted(dir: &Path, root: &str) -> Result<PathBuf> {
    let mut file = ContainerFile::new();
    swift_metadata(&mut file)?;
    file.insert_dataset(
        &format!("{root}/ExclusiveSphere/30kpc/StellarMass"),
        ContainerDataset::column(DType::Float32, vec![1.0]),
    )?;
    file.insert_dataset(
        "Unrelated/Counter",
        ContainerDataset::column(DType::Int64, vec![3.0]),
    )?;
    let path = dir.join("rooted_0001.json");
    file.write_to(&path)?;
    Ok(path)
}

/// Store opener that counts `read` calls per key and can pretend keys are
/// absent from storage.
#[derive(Clone, Default)]
pub struct CountingOpener {
    inner: JsonStoreOpener,
    reads: Arc<Mutex<BTreeMap<String, usize>>>,
    hidden: Arc<BTreeSet<String>>,
}

impl CountingOpener {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads of `key` report it as absent. Listings still show it.
    pub fn hiding(mut self, key: &str) -> Self {
        Arc::make_mut(&mut self.hidden).insert(key.to_string());
        self
    }

    pub fn reads(&self, key: &str) -> usize {
        self.reads
            .lock()
            .unwrap_or_else(|err| err.into_inner())
            .get(key)
            .copied()
            .unwrap_or(0)
    }
}

struct CountingStore {
    inner: Box<dyn KeyedStore>,
    reads: Arc<Mutex<BTreeMap<String, usize>>>,
    hidden: Arc<BTreeSet<String>>,
}

impl KeyedStore for CountingStore {
    fn attrs(&self, path: &str) -> Result<Option<Attributes>, StoreError> {
        self.inner.attrs(path)
    }

    fn members(&self, path: &str) -> Result<Option<Vec<Member>>, StoreError> {
        self.inner.members(path)
    }

    fn info(&self, path: &str) -> Result<Option<DatasetInfo>, StoreError> {
        self.inner.info(path)
    }

    fn read(&self, path: &str) -> Result<Option<RawArray>, StoreError> {
        *self
            .reads
            .lock()
            .unwrap_or_else(|err| err.into_inner())
            .entry(path.to_string())
            .or_default() += 1;
        if self.hidden.contains(path) {
            return Ok(None);
        }
        self.inner.read(path)
    }
}

impl StoreOpener for CountingOpener {
    fn open(&self, path: &Path) -> Result<Box<dyn KeyedStore>, StoreError> {
        Ok(Box::new(CountingStore {
            inner: self.inner.open(path)?,
            reads: Arc::clone(&self.reads),
            hidden: Arc::clone(&self.hidden),
        }))
    }
}

pub fn run_command(mut cmd: Command) -> Result<Output> {
    let output = cmd
        .output()
        .with_context(|| format!("failed to run command: {:?}", cmd))?;
    if output.status.success() {
        Ok(output)
    } else {
        bail!(
            "command {:?} failed: status {:?}\nstdout: {}\nstderr: {}",
            cmd,
            output.status.code(),
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        )
    }
}
