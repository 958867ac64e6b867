//! Offset pagination driver
//!
//! The paginator repeatedly invokes a [`PageFetcher`] with increasing
//! offsets (`offset += limit` after each full page) until a page returns
//! fewer records than `limit`, a cancellation is observed, or the fetcher
//! fails. Partial results survive every termination path: the
//! [`FetchReport`] always carries the records accumulated so far.

mod types;

pub use types::{
    CancelFlag, FetchReport, FetchStatus, PageFetcher, ProgressObserver, TracingObserver,
};

use crate::http::RequestPacer;
use crate::model::BalanceRecord;
use std::time::Duration;
use tracing::{info, warn};

/// Drives a [`PageFetcher`] until the data set is drained.
///
/// The paginator owns no HTTP state; it only sequences fetches, paces them,
/// accumulates records, and reports progress.
pub struct Paginator<F> {
    fetcher: F,
    limit: u32,
    pacer: RequestPacer,
}

impl<F: PageFetcher> Paginator<F> {
    /// Create a paginator over `fetcher` with the given page size and
    /// inter-request delay.
    ///
    /// `limit` must already be within the API ceiling; see
    /// [`crate::config::HarvestConfig`].
    pub fn new(fetcher: F, limit: u32, delay: Duration) -> Self {
        Self {
            fetcher,
            limit,
            pacer: RequestPacer::new(delay),
        }
    }

    /// Fetch every page starting at offset 0.
    ///
    /// Cancellation is cooperative: the flag is polled at the top of each
    /// iteration, so an in-flight request always completes (or fails) before
    /// the stop takes effect. Any fetcher error aborts the loop; no retry is
    /// attempted, and no deduplication is performed across pages.
    pub async fn drain(&self, observer: &dyn ProgressObserver, cancel: &CancelFlag) -> FetchReport {
        let mut records: Vec<BalanceRecord> = Vec::new();
        let mut offset: u64 = 0;
        let mut page: u32 = 1;
        let mut pages_fetched: u32 = 0;

        loop {
            if cancel.is_cancelled() {
                warn!("Cancellation requested, stopping after {pages_fetched} pages");
                return FetchReport::new(records, pages_fetched, FetchStatus::Cancelled);
            }

            self.pacer.wait().await;

            let result = self.fetcher.fetch_page(self.limit, offset).await;
            let page_result = match result {
                Ok(page_result) => page_result,
                Err(e) => {
                    return FetchReport::new(records, pages_fetched, FetchStatus::Failed(e));
                }
            };

            pages_fetched += 1;
            let count = page_result.len();
            records.extend(page_result.records);

            observer.on_page(page, offset, count, records.len());

            // A short page (including an empty first page) means end of data.
            if count < self.limit as usize {
                info!(
                    "Received fewer records than limit ({count} < {}), end of data",
                    self.limit
                );
                return FetchReport::new(records, pages_fetched, FetchStatus::Complete);
            }

            offset += u64::from(self.limit);
            page += 1;
        }
    }
}

#[cfg(test)]
mod tests;
