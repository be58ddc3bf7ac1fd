//! Exports JSON Schemas for the wire DTOs.
//!
//! The thin HTTP layer in front of the engine maps query-string
//! parameters onto `ComparisonQuery` and serializes `ComparisonResponse`;
//! this binary writes the JSON Schemas of both so clients can validate
//! against the contract.
//!
//! ```text
//! cargo run --features cli --bin export_schemas -- --out-dir schemas
//! ```

use anyhow::Context;
use clap::Parser;
use schemars::JsonSchema;
use std::fs;
use std::path::{Path, PathBuf};
use wash_compare::application::query::{ComparisonQuery, ComparisonResponse};

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "export_schemas", about = "Export wire-DTO JSON Schemas")]
struct Args {
    /// Output directory for the generated schema files.
    #[arg(long, default_value = "schemas")]
    out_dir: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("creating {}", args.out_dir.display()))?;

    write_schema::<ComparisonQuery>(&args.out_dir, "comparison_query")?;
    write_schema::<ComparisonResponse>(&args.out_dir, "comparison_response")?;

    tracing::info!(dir = %args.out_dir.display(), "schemas exported");
    Ok(())
}

/// Writes the schema of `T` as `<name>.schema.json`.
fn write_schema<T: JsonSchema>(dir: &Path, name: &str) -> anyhow::Result<()> {
    let schema = schemars::schema_for!(T);
    let path = dir.join(format!("{name}.schema.json"));
    let body = serde_json::to_string_pretty(&schema)?;
    fs::write(&path, body).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
