mod cli;
mod driver;
mod query;

use std::fs::File;
use std::io::{self, BufReader};

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use bplustree_kv::BPlusTreeMap;
use cli::Cli;
use driver::DriverError;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut tree = BPlusTreeMap::new(cli.order)?;

    let summary = match &cli.file {
        Some(path) => {
            let file = File::open(path).map_err(|source| DriverError::Io {
                path: path.display().to_string(),
                source,
            })?;
            driver::run(&mut tree, BufReader::new(file), io::stdout().lock())?
        }
        None => driver::run(&mut tree, io::stdin().lock(), io::stdout().lock())?,
    };

    info!(?summary, "run complete");
    Ok(())
}

fn init_logging(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_level.into()))
        .with_writer(io::stderr)
        .init();
}
