use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use scribe_server::openapi;

/// Write each versioned OpenAPI document to disk as `{label}.swagger.json`.
#[derive(Parser)]
#[command(name = "export", version, about = "Export versioned OpenAPI documents")]
struct Cli {
    /// Output directory for the exported documents
    #[arg(short, long, default_value = "openapi")]
    out_dir: PathBuf,

    /// Public path prefix recorded in each document's server list
    #[arg(long, env = "SCRIBE_BASE_PATH")]
    base_path: Option<String>,

    /// Directory scanned for Markdown documentation sources
    #[arg(long, env = "SCRIBE_DOCS_DIR")]
    docs_dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("scribe_core=info".parse()?))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let docs = openapi::build_docs(cli.base_path.as_deref(), cli.docs_dir.as_deref())?;

    std::fs::create_dir_all(&cli.out_dir)
        .with_context(|| format!("Failed to create {}", cli.out_dir.display()))?;

    for (version, _) in docs.entries() {
        let json = docs.pretty_json(&version.label)?;
        let path = cli.out_dir.join(format!("{}.swagger.json", version.label));
        std::fs::write(&path, json).with_context(|| format!("Failed to write {}", path.display()))?;
        tracing::info!("Exported {}", path.display());
    }

    Ok(())
}
