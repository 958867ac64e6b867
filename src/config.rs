//! Run configuration
//!
//! All knobs for a harvest run: endpoint, asset-type filter, page limit,
//! inter-request delay, and output location. Values come from the CLI (or
//! library callers) and are validated once here; downstream components treat
//! them as preconditions.

use crate::error::{Error, Result};
use chrono::Local;
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

/// Default GraphQL endpoint (Aptos mainnet indexer)
pub const DEFAULT_ENDPOINT: &str = "https://api.mainnet.aptoslabs.com/v1/graphql";

/// Default asset type filter
pub const DEFAULT_ASSET_TYPE: &str =
    "0x821c94e69bc7ca058c913b7b5e6b0a5c9fd1523d58723a966fb8c1f5ea888105";

/// API-enforced ceiling on page size
pub const MAX_PAGE_LIMIT: u32 = 100;

/// Default records per page
pub const DEFAULT_PAGE_LIMIT: u32 = 100;

/// Default delay between page requests, in milliseconds
pub const DEFAULT_DELAY_MS: u64 = 100;

/// Default size of the top-balances listing
pub const DEFAULT_TOP_N: usize = 5;

/// Validated configuration for a harvest run
#[derive(Debug, Clone)]
pub struct HarvestConfig {
    /// GraphQL endpoint URL
    pub endpoint: Url,
    /// Asset type to filter balances by
    pub asset_type: String,
    /// Records per page (1..=MAX_PAGE_LIMIT)
    pub limit: u32,
    /// Delay between page requests
    pub delay: Duration,
    /// Output artifact path
    pub output: PathBuf,
    /// Number of top balances to report
    pub top_n: usize,
}

impl HarvestConfig {
    /// Build a validated config.
    ///
    /// `limit` outside `1..=100` is rejected here so the query executor can
    /// treat the ceiling as a caller precondition.
    pub fn new(
        endpoint: &str,
        asset_type: impl Into<String>,
        limit: u32,
        delay_ms: u64,
        output: Option<PathBuf>,
        top_n: usize,
    ) -> Result<Self> {
        let endpoint = Url::parse(endpoint)?;

        if limit == 0 || limit > MAX_PAGE_LIMIT {
            return Err(Error::invalid_value(
                "limit",
                format!("must be between 1 and {MAX_PAGE_LIMIT}, got {limit}"),
            ));
        }

        let asset_type = asset_type.into();
        if asset_type.is_empty() {
            return Err(Error::invalid_value("asset-type", "must not be empty"));
        }

        Ok(Self {
            endpoint,
            asset_type,
            limit,
            delay: Duration::from_millis(delay_ms),
            output: output.unwrap_or_else(default_output_path),
            top_n,
        })
    }
}

impl Default for HarvestConfig {
    fn default() -> Self {
        Self {
            endpoint: Url::parse(DEFAULT_ENDPOINT).expect("default endpoint is valid"),
            asset_type: DEFAULT_ASSET_TYPE.to_string(),
            limit: DEFAULT_PAGE_LIMIT,
            delay: Duration::from_millis(DEFAULT_DELAY_MS),
            output: default_output_path(),
            top_n: DEFAULT_TOP_N,
        }
    }
}

/// Dated default output path, e.g. `data/balances_20250823.json`
pub fn default_output_path() -> PathBuf {
    let date = Local::now().format("%Y%m%d");
    PathBuf::from(format!("data/balances_{date}.json"))
}
