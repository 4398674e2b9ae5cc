//! Command-line argument parsing (§4.9).

use clap::Parser;

use bplustree_kv::DEFAULT_ORDER;

#[derive(Debug, Parser)]
#[command(name = "kvstore", about = "Line-protocol front end for the B+ tree key-value store")]
pub struct Cli {
    /// Read commands from this file instead of stdin.
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<std::path::PathBuf>,

    /// Tree order `d` (CAPACITY = 2 * d).
    #[arg(short = 'd', long = "order", default_value_t = DEFAULT_ORDER)]
    pub order: usize,

    /// Increase log verbosity. Repeat for more (-vv for trace-level).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
