//! # balance-harvest
//!
//! Fetches every holder balance for a fungible asset from a GraphQL indexer,
//! one offset-paginated page at a time, then summarizes and exports the
//! result.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use balance_harvest::{
//!     CancelFlag, GraphqlClient, GraphqlClientConfig, HarvestConfig, Paginator, QueryExecutor,
//!     TracingObserver,
//! };
//!
//! #[tokio::main]
//! async fn main() -> balance_harvest::Result<()> {
//!     let config = HarvestConfig::default();
//!     let client = GraphqlClient::with_config(GraphqlClientConfig::default());
//!     let executor = QueryExecutor::new(client, config.endpoint.clone(), config.asset_type);
//!
//!     let paginator = Paginator::new(executor, config.limit, config.delay);
//!     let report = paginator.drain(&TracingObserver, &CancelFlag::default()).await;
//!
//!     let stats = balance_harvest::stats::summarize(&report.records, config.top_n);
//!     println!("{} records, {} owners", stats.total_records, stats.unique_owners);
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                          CLI runner                        │
//! │   parse args → drain pages → summarize → export → exit    │
//! └────────────────────────────────────────────────────────────┘
//!                               │
//! ┌───────────┬────────────────┴──────────┬────────────────────┐
//! │ Paginator │       QueryExecutor       │   Stats / Export   │
//! ├───────────┼───────────────────────────┼────────────────────┤
//! │ offset    │ GraphqlClient (reqwest)   │ BigUint totals     │
//! │ pacing    │ errors-array detection    │ stable top-N       │
//! │ cancel    │ row extraction            │ JSON artifact      │
//! └───────────┴───────────────────────────┴────────────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::cast_precision_loss)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Run configuration and defaults
pub mod config;

/// Balance record data model
pub mod model;

/// HTTP client and request pacing
pub mod http;

/// Balances query execution
pub mod query;

/// Offset pagination loop
pub mod pagination;

/// Summary statistics
pub mod stats;

/// JSON artifact export
pub mod export;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};

pub use config::HarvestConfig;
pub use http::{GraphqlClient, GraphqlClientConfig, RequestPacer};
pub use model::{BalanceRecord, PageResult};
pub use pagination::{
    CancelFlag, FetchReport, FetchStatus, PageFetcher, Paginator, ProgressObserver,
    TracingObserver,
};
pub use query::QueryExecutor;
pub use stats::{summarize, SummaryStats};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
