//! CLI argument parsing

use crate::config::{DEFAULT_ASSET_TYPE, DEFAULT_DELAY_MS, DEFAULT_ENDPOINT, DEFAULT_PAGE_LIMIT, DEFAULT_TOP_N};
use clap::Parser;
use std::path::PathBuf;

/// Fungible asset balance harvester CLI
#[derive(Parser, Debug)]
#[command(name = "balance-harvest")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Asset type to query balances for
    #[arg(short, long, default_value = DEFAULT_ASSET_TYPE)]
    pub asset_type: String,

    /// GraphQL endpoint URL
    #[arg(short, long, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Records per page (1-100)
    #[arg(short, long, default_value_t = DEFAULT_PAGE_LIMIT)]
    pub limit: u32,

    /// Minimum delay between page requests, in milliseconds (0 = none)
    #[arg(long, default_value_t = DEFAULT_DELAY_MS)]
    pub delay_ms: u64,

    /// Output file path (default: data/balances_YYYYMMDD.json)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Number of top balances to show in the summary
    #[arg(short, long, default_value_t = DEFAULT_TOP_N)]
    pub top: usize,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
