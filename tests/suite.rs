// Integration suite: opens fixture catalogues of both layouts through the
// public facade and checks resolution, caching, sharding, and the CLI.
mod support;

use anyhow::{Context, Result};
use halocat::store::{AttrValue, ContainerDataset, ContainerFile, DType};
use halocat::{
    Catalogue, CatalogueError, CatalogueOptions, Classification, DerivedField, Lookup, Quantity,
    RegistrationRule, Schema, UnitKind,
};
use regex::Regex;
use serde_json::Value;
use std::path::Path;
use std::process::Command;
use std::sync::Arc;
use support::{
    CountingOpener, flat_header, run_command, write_flat, write_hierarchical, write_rooted,
    write_sharded,
};
use tempfile::TempDir;

fn open_with(path: &Path, opener: &CountingOpener) -> Result<Catalogue> {
    let options = CatalogueOptions::new().opener(Arc::new(opener.clone()));
    Catalogue::open(path, options).with_context(|| format!("opening {}", path.display()))
}

fn values(quantity: &Quantity) -> Vec<f64> {
    quantity.values().iter().copied().collect()
}

#[test]
fn flat_catalogue_partitions_valid_and_invalid_names() -> Result<()> {
    let dir = TempDir::new()?;
    let path = write_flat(dir.path())?;
    let catalogue = open_with(&path, &CountingOpener::new())?;
    let flat = catalogue.flat().context("expected a flat catalogue")?;

    assert_eq!(catalogue.schema().kind(), "flat");
    assert_eq!(
        flat.invalid_field_names(),
        &["File_id".to_string(), "Krot_gas_sf_x".to_string()]
    );
    assert_eq!(flat.valid_field_count(), 4);
    for invalid in flat.invalid_field_names() {
        assert!(!flat.contains(&invalid.to_lowercase()));
    }
    assert_eq!(catalogue.redshift(), 1.0);
    Ok(())
}

#[test]
fn aperture_sfr_is_classified_end_to_end() -> Result<()> {
    let dir = TempDir::new()?;
    let path = write_flat(dir.path())?;
    let catalogue = open_with(&path, &CountingOpener::new())?;
    let flat = catalogue.flat().context("expected a flat catalogue")?;

    let meta = flat
        .metadata("aperture_sfr_gas_sf_30_kpc")
        .context("SFR aperture should be bound")?;
    assert!(meta.label().starts_with("SF "));
    assert!(meta.label().contains("30 kpc"));
    let sfr = catalogue.units().resolve(UnitKind::StarFormationRate);
    assert_eq!(meta.unit().dims(), sfr.dims());
    assert_eq!(meta.unit().factor(), sfr.factor());
    Ok(())
}

#[test]
fn flat_lookups_accept_canonical_dotted_and_raw_names() -> Result<()> {
    let dir = TempDir::new()?;
    let path = write_flat(dir.path())?;
    let mut catalogue = open_with(&path, &CountingOpener::new())?;

    for name in [
        "aperture_mass_star_30_kpc",
        "apertures.mass_star_30_kpc",
        "Aperture_mass_star_30_kpc",
    ] {
        let mass = catalogue
            .get_quantity(name)?
            .with_context(|| format!("{name} should resolve"))?;
        assert_eq!(values(&mass), vec![1.0, 2.0, 3.0], "{name}");
        assert_eq!(mass.unit().factor(), 1.0e10);
    }
    assert!(matches!(
        catalogue.get_quantity("masses.mass_200crit"),
        Err(CatalogueError::NoSuchQuantity { .. })
    ));
    Ok(())
}

#[test]
fn cached_values_short_circuit_disk_reads() -> Result<()> {
    let dir = TempDir::new()?;
    let path = write_flat(dir.path())?;
    let opener = CountingOpener::new();
    let mut catalogue = open_with(&path, &opener)?;
    let key = "Aperture_mass_star_30_kpc";
    let name = "aperture_mass_star_30_kpc";
    let flat = catalogue.flat_mut().context("expected a flat catalogue")?;

    let first = flat.get(name)?.context("field should load")?;
    assert_eq!(opener.reads(key), 1);

    flat.set(name, first.as_ref().clone())?;
    let again = flat.get(name)?.context("field should stay cached")?;
    assert_eq!(*again, *first);
    assert_eq!(opener.reads(key), 1);

    flat.invalidate(name)?;
    assert!(!flat.is_loaded(name));
    flat.get(name)?.context("field should reload")?;
    assert_eq!(opener.reads(key), 2);
    Ok(())
}

#[test]
fn absent_storage_key_resolves_to_missing() -> Result<()> {
    let dir = TempDir::new()?;
    let path = write_flat(dir.path())?;
    let opener = CountingOpener::new().hiding("Mass_tot");
    let mut catalogue = open_with(&path, &opener)?;

    assert!(catalogue.get_quantity("masses.mass_tot")?.is_none());
    assert!(catalogue.get_quantity("mass_tot")?.is_none());
    let flat = catalogue.flat().context("expected a flat catalogue")?;
    assert!(flat.contains("mass_tot"));
    assert!(!flat.is_loaded("mass_tot"));
    assert_eq!(
        flat.missing_fields().iter().collect::<Vec<_>>(),
        vec!["mass_tot"]
    );
    assert_eq!(opener.reads("Mass_tot"), 2);
    Ok(())
}

#[test]
fn caller_rules_take_priority_over_defaults() -> Result<()> {
    let dir = TempDir::new()?;
    let path = write_flat(dir.path())?;
    let spin = RegistrationRule::new("spin", Regex::new("^Krot_(.*)$")?, &[], |m| {
        let rest = m.group(1)?;
        Some(Classification {
            unit: None,
            label: format!("Spin parameter {rest}"),
            canonical_name: m.raw.to_lowercase(),
            category: "spin".to_string(),
            member: format!("krot_{}", rest.to_lowercase()),
        })
    });
    let options = CatalogueOptions::new()
        .opener(Arc::new(CountingOpener::new()))
        .with_rule(spin);
    let mut catalogue = Catalogue::open(&path, options)?;

    let flat = catalogue.flat().context("expected a flat catalogue")?;
    assert_eq!(flat.invalid_field_names(), &["File_id".to_string()]);
    assert_eq!(flat.valid_field_count(), 5);
    let meta = flat.metadata("krot_gas_sf_x").context("spin field bound")?;
    assert_eq!(meta.rule, "spin");
    assert!(!meta.has_unit());

    let spin = catalogue
        .get_quantity("spin.krot_gas_sf_x")?
        .context("spin field loads")?;
    assert_eq!(values(&spin), vec![0.0, 0.0, 0.0]);
    assert_eq!(spin.name(), "Spin parameter gas_sf_x");
    Ok(())
}

#[test]
fn three_shards_concatenate_in_block_order() -> Result<()> {
    let dir = TempDir::new()?;
    let shards = write_sharded(dir.path(), "base.properties", &[10, 20, 5])?;
    let mut catalogue = open_with(&shards[1], &CountingOpener::new())?;
    assert_eq!(catalogue.flat().map(|f| f.shards().len()), Some(3));

    let mass = catalogue.get_quantity("mass_tot")?.context("mass_tot")?;
    assert_eq!(mass.len(), 35);
    let expected: Vec<f64> = (0..35).map(f64::from).collect();
    assert_eq!(values(&mass), expected);
    Ok(())
}

#[test]
fn shards_with_disagreeing_dtypes_abort_the_read() -> Result<()> {
    let dir = TempDir::new()?;
    let shards = write_sharded(dir.path(), "base.properties", &[2, 2])?;
    let mut file = ContainerFile::new();
    flat_header(&mut file);
    file.insert_attr("Num_of_files", AttrValue::Array(vec![2.0]));
    file.insert_dataset("Mass_tot", ContainerDataset::column(DType::Float64, vec![7.0, 8.0]))?;
    file.write_to(&shards[1])?;

    let mut catalogue = open_with(&shards[0], &CountingOpener::new())?;
    assert!(matches!(
        catalogue.get_quantity("mass_tot"),
        Err(CatalogueError::AmbiguousShardSchema { .. })
    ));
    Ok(())
}

#[test]
fn legacy_name_resolves_on_hierarchical_catalogue() -> Result<()> {
    let dir = TempDir::new()?;
    let path = write_hierarchical(dir.path())?;
    let mut catalogue = open_with(&path, &CountingOpener::new())?;
    assert!(matches!(catalogue.schema(), Schema::Tree(_)));

    let mass = catalogue
        .get_quantity("apertures.mass_star_30_kpc")?
        .context("translated mass")?;
    assert_eq!(values(&mass), vec![5.0, 6.0, 7.0]);

    let direct = catalogue
        .get_quantity("exclusivesphere.30kpc.stellarmass")?
        .context("native mass")?;
    assert_eq!(*direct, *mass);
    Ok(())
}

#[test]
fn translated_columns_select_one_axis() -> Result<()> {
    let dir = TempDir::new()?;
    let path = write_hierarchical(dir.path())?;
    let mut catalogue = open_with(&path, &CountingOpener::new())?;

    let whole = catalogue
        .get_quantity("so.200_crit.angularmomentumstars")?
        .context("whole tensor")?;
    assert_eq!(whole.shape(), &[3, 3]);
    for (legacy, column) in [
        ("angular_momentum.lx_200c_star", 0),
        ("angular_momentum.ly_200c_star", 1),
        ("angular_momentum.lz_200c_star", 2),
    ] {
        let sliced = catalogue.get_quantity(legacy)?.context("sliced column")?;
        assert_eq!(*sliced, whole.column(column)?, "{legacy}");
    }
    Ok(())
}

#[test]
fn derived_dispersion_and_usage_report() -> Result<()> {
    let dir = TempDir::new()?;
    let path = write_hierarchical(dir.path())?;
    let mut catalogue = open_with(&path, &CountingOpener::new())?;

    let sigma = catalogue
        .get_quantity("exclusivesphere.30kpc.stellarvelocitydispersion")?
        .context("derived dispersion")?;
    assert_eq!(values(&sigma), vec![5.0, 2.0, 0.0]);

    let mass = catalogue
        .get_quantity("SO.200_crit.TotalMass")?
        .context("converted mass")?;
    assert!((values(&mass)[0] - 1.0e10).abs() < 1.0);
    assert_eq!(mass.name(), "SO 200crit TotalMass");

    let report = catalogue.usage_report().context("tree catalogues track usage")?;
    assert_eq!(
        report.used,
        vec![
            "exclusivesphere.30kpc.stellarvelocitydispersion".to_string(),
            "exclusivesphere.30kpc.stellarvelocitydispersionmatrix".to_string(),
            "so.200_crit.totalmass".to_string(),
        ]
    );
    assert_eq!(report.total_leaves, 5);
    assert_eq!(report.unused.len(), 2);
    Ok(())
}

#[test]
fn caller_derived_field_combines_two_siblings() -> Result<()> {
    let dir = TempDir::new()?;
    let path = write_hierarchical(dir.path())?;
    let weighted = DerivedField::new(
        "stellarmassweightedxx",
        &["stellarmass", "stellarvelocitydispersionmatrix"],
        |sources| {
            let mass = &sources[0];
            let xx = sources[1].column(0)?;
            Ok(Quantity::new(
                "Mass weighted xx",
                mass.unit().clone(),
                mass.values() * xx.values(),
            ))
        },
    );
    let options = CatalogueOptions::new()
        .opener(Arc::new(CountingOpener::new()))
        .with_derived(weighted);
    let mut catalogue = Catalogue::open(&path, options)?;

    let tree = catalogue.tree().context("expected a hierarchical catalogue")?;
    assert!(tree.node("so.200_crit.stellarmassweightedxx", Lookup::Direct).is_none());

    let product = catalogue
        .get_quantity("exclusivesphere.30kpc.stellarmassweightedxx")?
        .context("derived product")?;
    assert_eq!(values(&product), vec![45.0, 6.0, 0.0]);

    let report = catalogue.usage_report().context("tree catalogues track usage")?;
    assert_eq!(
        report.used,
        vec![
            "exclusivesphere.30kpc.stellarmass".to_string(),
            "exclusivesphere.30kpc.stellarmassweightedxx".to_string(),
            "exclusivesphere.30kpc.stellarvelocitydispersionmatrix".to_string(),
        ]
    );
    assert_eq!(report.total_leaves, 6);
    Ok(())
}

#[test]
fn tree_root_scopes_the_mirrored_groups() -> Result<()> {
    let dir = TempDir::new()?;
    let path = write_rooted(dir.path(), "Halos")?;
    let options = CatalogueOptions::new()
        .opener(Arc::new(CountingOpener::new()))
        .tree_root("Halos");
    let mut catalogue = Catalogue::open(&path, options)?;

    let mass = catalogue
        .get_quantity("apertures.mass_star_30_kpc")?
        .context("translated mass under the root")?;
    assert_eq!(values(&mass), vec![1.0]);
    assert!(matches!(
        catalogue.get_quantity("unrelated.counter"),
        Err(CatalogueError::NoSuchQuantity { .. })
    ));

    let report = catalogue.usage_report().context("tree catalogues track usage")?;
    assert_eq!(report.used, vec!["exclusivesphere.30kpc.stellarmass".to_string()]);
    assert_eq!(report.total_leaves, 1);
    Ok(())
}

#[test]
fn allow_listed_quantities_are_quietly_missing() -> Result<()> {
    let dir = TempDir::new()?;
    for path in [write_flat(dir.path())?, write_hierarchical(dir.path())?] {
        let mut catalogue = open_with(&path, &CountingOpener::new())?;
        assert!(catalogue.get_quantity("apertures.veldisp_star_10_kpc")?.is_none());
        assert!(catalogue.get_quantity("apertures.veldisp_star_30_kpc")?.is_none());
        assert!(catalogue.get_quantity("apertures.veldisp_star_50_kpc").is_err());
    }

    let path = write_hierarchical(dir.path())?;
    let options = CatalogueOptions::new()
        .opener(Arc::new(CountingOpener::new()))
        .allow_missing("apertures.mass_gas_30_kpc");
    let mut catalogue = Catalogue::open(&path, options)?;
    assert!(catalogue.get_quantity("apertures.mass_gas_30_kpc")?.is_none());
    Ok(())
}

#[test]
fn inspect_reports_usage_as_json() -> Result<()> {
    let dir = TempDir::new()?;
    let path = write_hierarchical(dir.path())?;
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_halocat-inspect"));
    cmd.arg(&path)
        .arg("--get")
        .arg("apertures.mass_star_30_kpc")
        .arg("--used")
        .env("HALOCAT_LOG", "quiet");
    let output = run_command(cmd)?;
    let report: Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(
        report["used"],
        serde_json::json!(["exclusivesphere.30kpc.stellarmass"])
    );
    assert_eq!(report["total_leaves"], 5);
    Ok(())
}

#[test]
fn inspect_lists_invalid_flat_fields() -> Result<()> {
    let dir = TempDir::new()?;
    let path = write_flat(dir.path())?;
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_halocat-inspect"));
    cmd.arg(&path).arg("--invalid").env("HALOCAT_LOG", "quiet");
    let output = run_command(cmd)?;
    let report: Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(
        report["invalid"],
        serde_json::json!(["File_id", "Krot_gas_sf_x"])
    );

    let mut cmd = Command::new(env!("CARGO_BIN_EXE_halocat-inspect"));
    cmd.arg(dir.path().join("absent.json"));
    assert!(run_command(cmd).is_err());
    Ok(())
}
