//! schemaflat CLI
//!
//! # Usage
//!
//! ```bash
//! # Flatten the public schema, keeping Update operations
//! schemaflat database.types.ts -o types.ts --updates
//!
//! # Read stdin, use a config file, print the report
//! supabase gen types typescript --local | schemaflat - -c schemaflat.yaml --report
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use schemaflat::{transform_with_report, OperationFlags, TransformConfig};
use std::io::{Read, Write};
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "schemaflat")]
#[command(about = "Flatten a generated `Database` type into standalone type declarations", long_about = None)]
struct Cli {
    /// Input `.ts` file (`-` or omitted: stdin)
    input: Option<PathBuf>,

    /// Output file (omitted: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Schema to extract (overrides the config file)
    #[arg(short, long)]
    schema: Option<String>,

    /// YAML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Emit `Relationships`
    #[arg(long)]
    relationships: bool,

    /// Emit `Insert`
    #[arg(long)]
    inserts: bool,

    /// Emit `Update`
    #[arg(long)]
    updates: bool,

    /// Emit `Delete`
    #[arg(long)]
    deletes: bool,

    /// Print a JSON report to stderr
    #[arg(long)]
    report: bool,

    /// Debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn operation_flags(&self) -> OperationFlags {
        OperationFlags {
            relationships: self.relationships,
            inserts: self.inserts,
            updates: self.updates,
            deletes: self.deletes,
        }
    }

    /// Config file first, then CLI overrides
    fn transform_config(&self) -> Result<TransformConfig> {
        let mut config = match &self.config {
            Some(path) => TransformConfig::from_yaml_file(path)
                .with_context(|| format!("failed to load config {}", path.display()))?,
            None => TransformConfig::new(),
        };
        if let Some(schema) = &self.schema {
            config = config.schema(schema.clone());
        }
        let operations = config.get_operations().union(self.operation_flags());
        Ok(config.operations(operations))
    }

    fn read_input(&self) -> Result<String> {
        match self.input.as_deref() {
            Some(path) if path.as_os_str() != "-" => {
                std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
            }
            _ => {
                let mut source = String::new();
                std::io::stdin()
                    .read_to_string(&mut source)
                    .context("failed to read stdin")?;
                Ok(source)
            }
        }
    }

    fn write_output(&self, text: &str) -> Result<()> {
        match &self.output {
            Some(path) => {
                std::fs::write(path, text).with_context(|| format!("failed to write {}", path.display()))?;
                info!(path = %path.display(), bytes = text.len(), "output written");
            }
            None => {
                let mut stdout = std::io::stdout().lock();
                stdout.write_all(text.as_bytes())?;
                stdout.flush()?;
            }
        }
        Ok(())
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "schemaflat=debug" } else { "schemaflat=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = cli.transform_config()?;
    debug!(?config, "resolved configuration");

    let source = cli.read_input()?;
    let transformed = transform_with_report(&source, config)?;

    cli.write_output(&transformed.output)?;
    if cli.report {
        eprintln!("{}", serde_json::to_string_pretty(&transformed.report)?);
    }
    Ok(())
}
