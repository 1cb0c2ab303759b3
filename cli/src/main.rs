mod catalog;
mod generate;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use obabaz_core::ComposerConfig;
use tracing_subscriber::EnvFilter;

use crate::generate::OutputFormat;

#[derive(Parser)]
#[command(name = "obabaz")]
#[command(about = "Compose a home-style recipe and an AI prompt from your picks", long_about = None)]
struct Cli {
    /// Log debug output (RUST_LOG takes precedence when set)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a recipe from a selection JSON file
    Generate {
        /// Selection file in the wizard's form-data shape
        selection: PathBuf,
        /// Catalog JSON file (default: OBABAZ_CATALOG_PATH, then the embedded catalog)
        #[arg(long)]
        catalog: Option<PathBuf>,
        /// Seed for the tip draw (default: OBABAZ_TIP_SEED, then random)
        #[arg(long)]
        seed: Option<u64>,
        /// What to print
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
        /// Reject selections with more than three or duplicate vegetables
        #[arg(long)]
        strict: bool,
    },
    /// Print the selectable options
    Catalog {
        /// Catalog JSON file (default: OBABAZ_CATALOG_PATH, then the embedded catalog)
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
}

fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = ComposerConfig::from_env()?;

    match cli.command {
        Commands::Generate {
            selection,
            catalog: catalog_path,
            seed,
            format,
            strict,
        } => {
            if catalog_path.is_some() {
                config.catalog_path = catalog_path;
            }
            if seed.is_some() {
                config.tip_seed = seed;
            }
            generate::generate(&config, &selection, format, strict)?;
        }
        Commands::Catalog {
            catalog: catalog_path,
        } => {
            if catalog_path.is_some() {
                config.catalog_path = catalog_path;
            }
            catalog::print_catalog(&config)?;
        }
    }

    Ok(())
}
