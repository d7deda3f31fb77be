//! # Zonefile Node
//!
//! Operates the local zonefile cache of a node.
//!
//! ## Startup Sequence
//!
//! 1. Load configuration (TOML file, then `ZC_*` environment overrides)
//! 2. Install the tracing subscriber
//! 3. Open the cache directory
//! 4. Run the requested command
//!
//! Durable storage and peer retrieval need host-provided ports and are not
//! attached by this binary; lookups here are cache-only.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use node_runtime::{logging, NodeConfig, SubsystemContainer};
use shared_types::{Record, RecordHash};
use zc_01_zonefile_cache::ZonefileCacheApi;

/// Zonefile Node: content-addressed zonefile cache
#[derive(Parser, Debug)]
#[command(name = "zonefile-node")]
#[command(about = "Inspect and maintain the local zonefile cache")]
struct Args {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the verified zonefile cached under HASH
    Get { hash: String },
    /// Cache the zonefile in FILE (a JSON object) and print its hash
    Put { file: PathBuf },
    /// Remove the entry under HASH
    Remove { hash: String },
    /// Remove every entry in the cache
    Sweep,
    /// List cache entries
    List,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = NodeConfig::load(args.config.as_deref())?;
    logging::init(&config.logging)?;

    let container = SubsystemContainer::new(config).context("Opening zonefile cache")?;
    let service = container.zonefile_service();

    match args.command {
        Command::Get { hash } => match service.lookup_hex(&hash)? {
            Some(record) => println!("{}", serde_json::to_string_pretty(&record)?),
            None => bail!("No verified zonefile for {}", hash),
        },
        Command::Put { file } => {
            let bytes = std::fs::read(&file)
                .with_context(|| format!("Reading {}", file.display()))?;
            let record = Record::from_json_bytes(&bytes)
                .with_context(|| format!("Parsing {}", file.display()))?;
            let hash = service.store(&record)?;
            println!("{}", hash);
        }
        Command::Remove { hash } => {
            let hash: RecordHash = hash.parse()?;
            if !container.cache.remove(&hash) {
                bail!("Nothing removed for {}", hash);
            }
        }
        Command::Sweep => {
            let report = container.cache.sweep()?;
            info!(
                "Swept cache: {} removed, {} failed",
                report.removed,
                report.failed.len()
            );
            for name in &report.failed {
                eprintln!("could not remove {}", name);
            }
        }
        Command::List => {
            for name in container.cache.list()? {
                println!("{}", name);
            }
        }
    }

    Ok(())
}
