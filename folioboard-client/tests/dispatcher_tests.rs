/// Dispatcher ordering tests
///
/// Verifies the debounce and last-write-wins contracts with paused tokio
/// time: rapid keystrokes coalesce, a slow older search that finishes
/// after a newer one is discarded, and closing the dispatcher turns
/// in-flight work into a no-op.

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tokio_stream::StreamExt;

use folioboard_client::dispatcher::{SearchBackend, SearchDispatcher};
use folioboard_engine::search::{SearchFilters, SearchResults};

/// Backend where "abc" is slow and everything else is fast, so an older
/// request can finish after a newer one.
struct VariableLatencyBackend;

#[async_trait]
impl SearchBackend for VariableLatencyBackend {
    async fn execute(&self, query: &str, _filters: &SearchFilters) -> SearchResults {
        let delay_ms = if query == "abc" { 500 } else { 10 };
        tokio::time::sleep(Duration::from_millis(delay_ms)).await;

        let mut results = SearchResults::default();
        results.total = query.len();
        results
    }
}

/// Backend that answers immediately
struct InstantBackend;

#[async_trait]
impl SearchBackend for InstantBackend {
    async fn execute(&self, query: &str, _filters: &SearchFilters) -> SearchResults {
        let mut results = SearchResults::default();
        results.total = query.len();
        results
    }
}

#[tokio::test(start_paused = true)]
async fn stale_result_never_overwrites_newer() {
    let (dispatcher, mut outcomes) =
        SearchDispatcher::with_debounce(Arc::new(VariableLatencyBackend), Duration::from_millis(50));

    // Request #1 ("abc") and let its debounce elapse so the slow search
    // is in flight.
    let first_seq = dispatcher.request("abc", SearchFilters::default());
    tokio::time::sleep(Duration::from_millis(60)).await;

    // Request #2 ("abcd") supersedes while #1 is still running.
    let second_seq = dispatcher.request("abcd", SearchFilters::default());
    assert!(second_seq > first_seq);

    // #2's response arrives first and is the one delivered.
    let outcome = outcomes.next().await.expect("an outcome");
    assert_eq!(outcome.query, "abcd");
    assert_eq!(outcome.seq, second_seq);

    // #1's response arrives later and must be dropped, never delivered.
    let extra = tokio::time::timeout(Duration::from_secs(2), outcomes.next()).await;
    assert!(extra.is_err(), "stale result was delivered");
}

#[tokio::test(start_paused = true)]
async fn rapid_keystrokes_coalesce_to_the_last_query() {
    let (dispatcher, mut outcomes) =
        SearchDispatcher::with_debounce(Arc::new(InstantBackend), Duration::from_millis(300));

    dispatcher.request("re", SearchFilters::default());
    tokio::time::sleep(Duration::from_millis(100)).await;
    dispatcher.request("rea", SearchFilters::default());
    tokio::time::sleep(Duration::from_millis(100)).await;
    dispatcher.request("reac", SearchFilters::default());

    let outcome = outcomes.next().await.expect("an outcome");
    assert_eq!(outcome.query, "reac");

    let extra = tokio::time::timeout(Duration::from_secs(2), outcomes.next()).await;
    assert!(extra.is_err(), "superseded keystrokes produced outcomes");
}

#[tokio::test(start_paused = true)]
async fn distinct_settled_queries_each_deliver() {
    let (dispatcher, mut outcomes) =
        SearchDispatcher::with_debounce(Arc::new(InstantBackend), Duration::from_millis(50));

    dispatcher.request("first", SearchFilters::default());
    let first = outcomes.next().await.expect("first outcome");
    assert_eq!(first.query, "first");

    dispatcher.request("second", SearchFilters::default());
    let second = outcomes.next().await.expect("second outcome");
    assert_eq!(second.query, "second");
    assert!(second.seq > first.seq);
}

#[tokio::test(start_paused = true)]
async fn close_cancels_pending_work() {
    let (dispatcher, mut outcomes) =
        SearchDispatcher::with_debounce(Arc::new(VariableLatencyBackend), Duration::from_millis(50));

    dispatcher.request("abc", SearchFilters::default());
    dispatcher.close();

    let extra = tokio::time::timeout(Duration::from_secs(2), outcomes.next()).await;
    assert!(extra.is_err(), "closed dispatcher delivered an outcome");
}

#[tokio::test(start_paused = true)]
async fn invalidate_discards_in_flight_requests() {
    let (dispatcher, mut outcomes) =
        SearchDispatcher::with_debounce(Arc::new(VariableLatencyBackend), Duration::from_millis(50));

    dispatcher.request("abc", SearchFilters::default());
    // Past the debounce, the slow search is running.
    tokio::time::sleep(Duration::from_millis(60)).await;
    dispatcher.invalidate();

    let extra = tokio::time::timeout(Duration::from_secs(2), outcomes.next()).await;
    assert!(extra.is_err(), "invalidated request still delivered");
}
