//! CLI for itemlink.

mod commands;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use itemlink_core::catalog::Catalog;
use itemlink_core::config::{self, ItemlinkConfig};
use std::path::PathBuf;

use commands::{run_check, run_describe, run_digest, run_resolve};

/// Top-level CLI for itemlink.
#[derive(Debug, Parser)]
#[command(name = "itemlink")]
#[command(about = "itemlink: resolve item action references from a field catalog", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Resolve catalog actions for every item in a JSON file.
    Resolve {
        /// JSON file with an array of items (or a single item).
        items: PathBuf,
        /// Catalog TOML file (defaults to `catalog` in config.toml).
        #[arg(long, value_name = "PATH")]
        catalog: Option<PathBuf>,
        /// Only resolve the action with this name.
        #[arg(long, value_name = "NAME")]
        action: Option<String>,
    },

    /// Validate every action in a catalog and list its placeholders.
    Check {
        /// Catalog TOML file (defaults to `catalog` in config.toml).
        #[arg(long, value_name = "PATH")]
        catalog: Option<PathBuf>,
    },

    /// Print the catalog field values of every item in a JSON file.
    Describe {
        /// JSON file with an array of items (or a single item).
        items: PathBuf,
        /// Catalog TOML file (defaults to `catalog` in config.toml).
        #[arg(long, value_name = "PATH")]
        catalog: Option<PathBuf>,
    },

    /// Print the SHA-512 hex digest of a string.
    Digest {
        /// Text to hash.
        text: String,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Resolve {
                items,
                catalog,
                action,
            } => {
                let catalog = open_catalog(catalog, &cfg)?;
                run_resolve(&catalog, &items, action.as_deref())?;
            }
            CliCommand::Check { catalog } => {
                let path = catalog_path(catalog, &cfg)?;
                run_check(&path, &cfg)?;
            }
            CliCommand::Describe { items, catalog } => {
                let catalog = open_catalog(catalog, &cfg)?;
                run_describe(&catalog, &items)?;
            }
            CliCommand::Digest { text } => run_digest(&text),
        }

        Ok(())
    }
}

fn catalog_path(arg: Option<PathBuf>, cfg: &ItemlinkConfig) -> Result<PathBuf> {
    arg.or_else(|| cfg.catalog.clone())
        .context("no catalog given; pass --catalog or set `catalog` in config.toml")
}

fn open_catalog(arg: Option<PathBuf>, cfg: &ItemlinkConfig) -> Result<Catalog> {
    let path = catalog_path(arg, cfg)?;
    Catalog::load(&path, cfg)
}

#[cfg(test)]
mod tests;
