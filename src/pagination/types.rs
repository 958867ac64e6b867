//! Pagination types and traits

use crate::error::{Error, Result};
use crate::model::{BalanceRecord, PageResult};
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

/// Source of pages for the paginator.
///
/// The production implementation is [`crate::query::QueryExecutor`]; tests
/// substitute scripted in-memory fetchers.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch one page of records at the given offset
    async fn fetch_page(&self, limit: u32, offset: u64) -> Result<PageResult>;
}

/// Observer for per-page progress reporting
pub trait ProgressObserver: Send + Sync {
    /// Called after each successfully fetched page
    fn on_page(&self, page: u32, offset: u64, page_records: usize, total_records: usize);
}

/// Progress observer that logs via tracing
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl ProgressObserver for TracingObserver {
    fn on_page(&self, page: u32, offset: u64, page_records: usize, total_records: usize) {
        info!("Page {page} (offset {offset}): {page_records} records (total so far: {total_records})");
    }
}

/// Cooperative cancellation flag, polled between pages.
///
/// Cloning shares the underlying flag, so a signal handler can hold one
/// clone while the paginator polls another.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag {
    cancelled: Arc<AtomicBool>,
}

impl CancelFlag {
    /// Create a new, unset flag
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    /// Check whether cancellation was requested
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

/// How a pagination run ended
#[derive(Debug)]
pub enum FetchStatus {
    /// A short page signalled the end of data
    Complete,
    /// Cancellation was observed between pages; the result is partial
    Cancelled,
    /// A page fetch failed; records gathered before the failure are kept
    Failed(Error),
}

impl FetchStatus {
    /// Check if the run drained the full data set
    pub fn is_complete(&self) -> bool {
        matches!(self, Self::Complete)
    }

    /// Check if the run was cancelled
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }

    /// Check if the run failed
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

/// Outcome of a pagination run.
///
/// The accumulated records are present in every case; on failure or
/// cancellation they hold the pages gathered before the stop.
#[derive(Debug)]
pub struct FetchReport {
    /// Records accumulated across all fetched pages, in fetch order
    pub records: Vec<BalanceRecord>,
    /// Number of requests that returned a page
    pub pages_fetched: u32,
    /// How the run ended
    pub status: FetchStatus,
}

impl FetchReport {
    /// Create a new report
    pub fn new(records: Vec<BalanceRecord>, pages_fetched: u32, status: FetchStatus) -> Self {
        Self {
            records,
            pages_fetched,
            status,
        }
    }
}
