//! Paginator unit tests over scripted in-memory fetchers

use super::*;
use crate::error::{Error, Result};
use crate::model::{BalanceRecord, PageResult};
use async_trait::async_trait;
use pretty_assertions::assert_eq;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

fn record(owner: &str, amount: &str) -> BalanceRecord {
    BalanceRecord {
        amount: amount.to_string(),
        asset_type: "0xasset".to_string(),
        owner_address: owner.to_string(),
        storage_id: format!("store-{owner}"),
        is_frozen: false,
        is_primary: true,
        last_transaction_timestamp: "2024-05-01T12:00:00".to_string(),
        last_transaction_version: 1,
        token_standard: "v2".to_string(),
    }
}

fn page_of(size: usize, tag: &str) -> Vec<BalanceRecord> {
    (0..size)
        .map(|i| record(&format!("0x{tag}-{i}"), &i.to_string()))
        .collect()
}

/// One scripted response per expected request
enum Script {
    Page(Vec<BalanceRecord>),
    Fail,
}

/// Fetcher replaying a fixed script; clones share call counters
#[derive(Clone)]
struct ScriptedFetcher {
    script: Arc<Vec<Script>>,
    calls: Arc<AtomicUsize>,
    offsets: Arc<Mutex<Vec<u64>>>,
}

impl ScriptedFetcher {
    fn new(script: Vec<Script>) -> Self {
        Self {
            script: Arc::new(script),
            calls: Arc::new(AtomicUsize::new(0)),
            offsets: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn offsets(&self) -> Vec<u64> {
        self.offsets.lock().unwrap().clone()
    }
}

#[async_trait]
impl PageFetcher for ScriptedFetcher {
    async fn fetch_page(&self, _limit: u32, offset: u64) -> Result<PageResult> {
        let index = self.calls.fetch_add(1, Ordering::SeqCst);
        self.offsets.lock().unwrap().push(offset);
        match self.script.get(index) {
            Some(Script::Page(records)) => Ok(PageResult::new(records.clone())),
            Some(Script::Fail) => Err(Error::http_status(503, "unavailable")),
            None => panic!("unexpected request #{index} at offset {offset}"),
        }
    }
}

/// Observer recording every callback
#[derive(Default)]
struct RecordingObserver {
    pages: Mutex<Vec<(u32, u64, usize, usize)>>,
}

impl ProgressObserver for RecordingObserver {
    fn on_page(&self, page: u32, offset: u64, page_records: usize, total_records: usize) {
        self.pages
            .lock()
            .unwrap()
            .push((page, offset, page_records, total_records));
    }
}

struct NoopObserver;

impl ProgressObserver for NoopObserver {
    fn on_page(&self, _page: u32, _offset: u64, _page_records: usize, _total_records: usize) {}
}

#[tokio::test]
async fn test_full_pages_then_short_page() {
    let fetcher = ScriptedFetcher::new(vec![
        Script::Page(page_of(5, "a")),
        Script::Page(page_of(5, "b")),
        Script::Page(page_of(3, "c")),
    ]);
    let paginator = Paginator::new(fetcher.clone(), 5, Duration::ZERO);
    let observer = RecordingObserver::default();

    let report = paginator.drain(&observer, &CancelFlag::new()).await;

    assert!(report.status.is_complete());
    assert_eq!(report.records.len(), 13);
    assert_eq!(report.pages_fetched, 3);
    assert_eq!(fetcher.calls(), 3);
    assert_eq!(
        observer.pages.lock().unwrap().clone(),
        vec![(1, 0, 5, 5), (2, 5, 5, 10), (3, 10, 3, 13)]
    );
}

#[tokio::test]
async fn test_limit_100_scenario() {
    // limit=100, page sizes [100, 100, 37] => 237 records, exactly 3 requests
    let fetcher = ScriptedFetcher::new(vec![
        Script::Page(page_of(100, "p1")),
        Script::Page(page_of(100, "p2")),
        Script::Page(page_of(37, "p3")),
    ]);
    let paginator = Paginator::new(fetcher.clone(), 100, Duration::ZERO);

    let report = paginator.drain(&NoopObserver, &CancelFlag::new()).await;

    assert!(report.status.is_complete());
    assert_eq!(report.records.len(), 237);
    assert_eq!(report.pages_fetched, 3);
    assert_eq!(fetcher.calls(), 3);
}

#[tokio::test]
async fn test_empty_first_page_completes_immediately() {
    let fetcher = ScriptedFetcher::new(vec![Script::Page(Vec::new())]);
    let paginator = Paginator::new(fetcher.clone(), 100, Duration::ZERO);

    let report = paginator.drain(&NoopObserver, &CancelFlag::new()).await;

    assert!(report.status.is_complete());
    assert!(report.records.is_empty());
    assert_eq!(report.pages_fetched, 1);
    assert_eq!(fetcher.calls(), 1);
}

#[tokio::test]
async fn test_offsets_advance_by_limit() {
    let fetcher = ScriptedFetcher::new(vec![
        Script::Page(page_of(4, "a")),
        Script::Page(page_of(4, "b")),
        Script::Page(Vec::new()),
    ]);
    let paginator = Paginator::new(fetcher.clone(), 4, Duration::ZERO);

    let report = paginator.drain(&NoopObserver, &CancelFlag::new()).await;

    assert!(report.status.is_complete());
    assert_eq!(fetcher.offsets(), vec![0, 4, 8]);
}

#[tokio::test]
async fn test_failure_preserves_prior_pages() {
    let fetcher = ScriptedFetcher::new(vec![
        Script::Page(page_of(3, "a")),
        Script::Page(page_of(3, "b")),
        Script::Fail,
    ]);
    let paginator = Paginator::new(fetcher, 3, Duration::ZERO);

    let report = paginator.drain(&NoopObserver, &CancelFlag::new()).await;

    assert_eq!(report.records.len(), 6);
    assert_eq!(report.pages_fetched, 2);
    match report.status {
        FetchStatus::Failed(ref e) => assert!(e.is_transient()),
        ref other => panic!("expected Failed, got {other:?}"),
    }
}

#[tokio::test]
async fn test_failure_on_first_page_yields_empty_partial() {
    let fetcher = ScriptedFetcher::new(vec![Script::Fail]);
    let paginator = Paginator::new(fetcher, 10, Duration::ZERO);

    let report = paginator.drain(&NoopObserver, &CancelFlag::new()).await;

    assert!(report.records.is_empty());
    assert_eq!(report.pages_fetched, 0);
    assert!(report.status.is_failed());
}

#[tokio::test]
async fn test_cancellation_before_first_request() {
    let fetcher = ScriptedFetcher::new(vec![]);
    let cancel = CancelFlag::new();
    cancel.cancel();
    let paginator = Paginator::new(fetcher.clone(), 10, Duration::ZERO);

    let report = paginator.drain(&NoopObserver, &cancel).await;

    assert!(report.status.is_cancelled());
    assert!(report.records.is_empty());
    assert_eq!(fetcher.calls(), 0);
}

#[tokio::test]
async fn test_cancellation_between_pages_keeps_partial() {
    // Observer cancels after the first page; the flag is polled at the top
    // of the next iteration, so exactly one page lands.
    struct CancellingObserver {
        cancel: CancelFlag,
    }
    impl ProgressObserver for CancellingObserver {
        fn on_page(&self, _p: u32, _o: u64, _n: usize, _t: usize) {
            self.cancel.cancel();
        }
    }

    let fetcher = ScriptedFetcher::new(vec![
        Script::Page(page_of(2, "a")),
        Script::Page(page_of(2, "b")),
    ]);
    let cancel = CancelFlag::new();
    let observer = CancellingObserver {
        cancel: cancel.clone(),
    };
    let paginator = Paginator::new(fetcher.clone(), 2, Duration::ZERO);

    let report = paginator.drain(&observer, &cancel).await;

    assert!(report.status.is_cancelled());
    assert_eq!(report.records.len(), 2);
    assert_eq!(report.pages_fetched, 1);
    assert_eq!(fetcher.calls(), 1);
}

#[tokio::test]
async fn test_duplicates_across_pages_propagate() {
    // Overlapping pages are not deduplicated
    let dup = page_of(2, "same");
    let fetcher = ScriptedFetcher::new(vec![
        Script::Page(dup.clone()),
        Script::Page(dup),
        Script::Page(Vec::new()),
    ]);
    let paginator = Paginator::new(fetcher, 2, Duration::ZERO);

    let report = paginator.drain(&NoopObserver, &CancelFlag::new()).await;

    assert!(report.status.is_complete());
    assert_eq!(report.records.len(), 4);
    assert_eq!(
        report.records[0].owner_address,
        report.records[2].owner_address
    );
}
