//! CLI runner - executes the harvest

use crate::cli::commands::Cli;
use crate::config::HarvestConfig;
use crate::error::Result;
use crate::export;
use crate::http::{GraphqlClient, GraphqlClientConfig};
use crate::pagination::{CancelFlag, FetchReport, FetchStatus, Paginator, TracingObserver};
use crate::query::QueryExecutor;
use crate::stats::{summarize, SummaryStats};
use tracing::{error, warn};

/// Run finished with all pages fetched and the artifact written
pub const EXIT_SUCCESS: i32 = 0;
/// A page request or the export failed
pub const EXIT_FAILURE: i32 = 1;
/// Run was interrupted; partial results were still written
pub const EXIT_INTERRUPTED: i32 = 130;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the harvest and return the process exit code
    pub async fn run(&self) -> Result<i32> {
        let config = HarvestConfig::new(
            &self.cli.endpoint,
            &self.cli.asset_type,
            self.cli.limit,
            self.cli.delay_ms,
            self.cli.output.clone(),
            self.cli.top,
        )?;

        let client = GraphqlClient::with_config(GraphqlClientConfig::default());
        let executor = QueryExecutor::new(client, config.endpoint.clone(), config.asset_type.clone());
        let paginator = Paginator::new(executor, config.limit, config.delay);

        // First Ctrl-C requests a stop between pages; the in-flight request
        // is allowed to finish so its records are kept.
        let cancel = CancelFlag::default();
        let signal_flag = cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                warn!("Interrupt received, stopping after the current page");
                signal_flag.cancel();
            }
        });

        println!("Fetching balances for asset type:");
        println!("  {}", config.asset_type);
        println!("Endpoint: {}", config.endpoint);
        println!();

        let report = paginator.drain(&TracingObserver, &cancel).await;

        let mut exit_code = match &report.status {
            FetchStatus::Complete => EXIT_SUCCESS,
            FetchStatus::Cancelled => {
                warn!(
                    "Interrupted after {} pages; keeping {} records",
                    report.pages_fetched,
                    report.records.len()
                );
                EXIT_INTERRUPTED
            }
            FetchStatus::Failed(e) => {
                error!(
                    "Fetch failed after {} pages: {e}; keeping {} records",
                    report.pages_fetched,
                    report.records.len()
                );
                EXIT_FAILURE
            }
        };

        let stats = summarize(&report.records, config.top_n);
        print_summary(&report, &stats);

        // The summary above stands even if the write fails
        match export::write_records(&config.output, &report.records) {
            Ok(()) => println!("Saved {} records to {}", report.records.len(), config.output.display()),
            Err(e) => {
                error!("Export failed: {e}");
                if exit_code == EXIT_SUCCESS {
                    exit_code = EXIT_FAILURE;
                }
            }
        }

        Ok(exit_code)
    }
}

fn print_summary(report: &FetchReport, stats: &SummaryStats) {
    println!();
    println!("=== Summary ===");
    println!("Pages fetched:   {}", report.pages_fetched);
    println!("Total records:   {}", stats.total_records);
    println!("Unique owners:   {}", stats.unique_owners);
    println!("Total amount:    {}", stats.total_amount);
    println!("Average balance: {}", stats.average_balance_display());

    if !stats.top_n.is_empty() {
        println!();
        println!("Top {} balances:", stats.top_n.len());
        for (i, record) in stats.top_n.iter().enumerate() {
            println!("  {}. {}  {}", i + 1, record.owner_address, record.amount);
        }
    }
    println!();
}
