//! Inspect a halo catalogue from the command line.
//!
//! Prints a JSON report to stdout: an open summary by default, the bound
//! fields (`--fields`), the names no rule classified or the translation
//! drift (`--invalid`), resolved quantities (`--get PATH`, repeatable), or
//! the leaves a run of `--get`s touched (`--used`). Logs go to stderr; set
//! `HALOCAT_LOG=verbose|quiet` to change the level.

use anyhow::{Context, Result, bail};
use halocat::{Catalogue, CatalogueOptions, Quantity, Schema};
use serde_json::{Value, json};
use std::env;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = CliArgs::parse(env::args().skip(1))?;
    setup_logging(env::var("HALOCAT_LOG").ok().as_deref());

    let mut catalogue = Catalogue::open(&args.file, CatalogueOptions::default())
        .with_context(|| format!("opening {}", args.file.display()))?;

    let mut quantities = Vec::new();
    for path in &args.gets {
        let value = catalogue
            .get_quantity(path)
            .with_context(|| format!("resolving '{path}'"))?;
        quantities.push(match value {
            Some(quantity) => quantity_json(path, &quantity),
            None => json!({ "path": path, "missing": true }),
        });
    }

    let output = match args.report {
        Report::Summary if !quantities.is_empty() => Value::Array(quantities),
        Report::Summary => summary(&catalogue),
        Report::Fields => fields(&catalogue),
        Report::Invalid => invalid(&catalogue),
        Report::Used => match catalogue.usage_report() {
            Some(report) => serde_json::to_value(report)?,
            None => bail!("{catalogue} is flat; usage is only tracked for hierarchical catalogues"),
        },
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn setup_logging(level: Option<&str>) {
    let level = match level {
        Some("quiet") => Level::ERROR,
        Some("verbose") => Level::DEBUG,
        _ => Level::INFO,
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("halocat-inspect: logging already initialised");
    }
}

fn summary(catalogue: &Catalogue) -> Value {
    let mut out = json!({
        "path": catalogue.path(),
        "format": catalogue.schema().kind(),
        "scale_factor": catalogue.scale_factor(),
        "redshift": catalogue.redshift(),
    });
    match catalogue.schema() {
        Schema::Flat(flat) => {
            out["shards"] = json!(flat.shards());
            out["valid_fields"] = json!(flat.valid_field_count());
            out["invalid_fields"] = json!(flat.invalid_field_names().len());
        }
        Schema::Tree(tree) => {
            out["leaves"] = json!(tree.leaf_paths().len());
        }
    }
    out
}

fn fields(catalogue: &Catalogue) -> Value {
    match catalogue.schema() {
        Schema::Flat(flat) => Value::Array(
            flat.fields()
                .map(|meta| {
                    json!({
                        "raw": meta.raw_name,
                        "name": meta.canonical_name(),
                        "path": meta.dotted_path(),
                        "label": meta.label(),
                        "rule": meta.rule,
                        "unit": meta.has_unit().then(|| meta.unit().latex()),
                    })
                })
                .collect(),
        ),
        Schema::Tree(tree) => json!(tree.leaf_paths()),
    }
}

fn invalid(catalogue: &Catalogue) -> Value {
    match catalogue.schema() {
        Schema::Flat(flat) => json!({
            "invalid": flat.invalid_field_names(),
            "ambiguous": flat.ambiguous_fields(),
            "missing": flat.missing_fields(),
        }),
        Schema::Tree(tree) => json!(tree.translation_coverage(catalogue.translator())),
    }
}

fn quantity_json(path: &str, quantity: &Quantity) -> Value {
    json!({
        "path": path,
        "name": quantity.name(),
        "unit": quantity.unit().latex(),
        "shape": quantity.shape(),
        "values": quantity.values().iter().copied().collect::<Vec<f64>>(),
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Report {
    Summary,
    Fields,
    Invalid,
    Used,
}

#[derive(Debug)]
struct CliArgs {
    file: PathBuf,
    report: Report,
    gets: Vec<String>,
}

impl CliArgs {
    fn parse(args: impl IntoIterator<Item = String>) -> Result<Self> {
        let mut args = args.into_iter();
        let mut file: Option<PathBuf> = None;
        let mut report = Report::Summary;
        let mut gets = Vec::new();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--fields" => report = Report::Fields,
                "--invalid" => report = Report::Invalid,
                "--used" => report = Report::Used,
                "--get" => {
                    let path = args
                        .next()
                        .ok_or_else(|| anyhow::anyhow!("missing value for --get"))?;
                    gets.push(path);
                }
                "--help" | "-h" => {
                    print!("{}", usage());
                    std::process::exit(0);
                }
                flag if flag.starts_with("--") => bail!("unknown flag: {flag}\n{}", usage()),
                positional => {
                    if file.is_some() {
                        bail!("only one catalogue file may be given");
                    }
                    file = Some(PathBuf::from(positional));
                }
            }
        }

        let file = file.ok_or_else(|| anyhow::anyhow!("missing catalogue file\n{}", usage()))?;
        Ok(CliArgs { file, report, gets })
    }
}

fn usage() -> &'static str {
    "Usage: halocat-inspect <file> [--fields|--invalid|--used] [--get PATH]...\n"
}
