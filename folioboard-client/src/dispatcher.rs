/// Debounced search dispatch
///
/// Typing produces a burst of queries; the dispatcher coalesces them
/// with a quiet period and guarantees that a stale in-flight search can
/// never overwrite a newer one. The mechanism is a monotonically
/// increasing sequence number: every request claims the next sequence,
/// and a result is delivered only while its sequence is still the
/// latest. The check runs twice, after the debounce sleep and again
/// after the backend await, so a slow older search that completes late
/// is discarded silently.
///
/// Closing the dispatcher cancels the shared token; pending work becomes
/// a no-op on arrival. No backend-side cancellation is attempted.
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use folioboard_client::dispatcher::{SearchDispatcher, SnapshotBackend};
/// use folioboard_client::state::CorpusSnapshot;
/// use folioboard_engine::search::SearchFilters;
/// use tokio::sync::RwLock;
/// use tokio_stream::StreamExt;
///
/// # async fn example() {
/// let corpus = Arc::new(RwLock::new(CorpusSnapshot::default()));
/// let backend = Arc::new(SnapshotBackend::new(corpus));
/// let (dispatcher, mut outcomes) = SearchDispatcher::new(backend);
///
/// dispatcher.request("rust", SearchFilters::default());
/// if let Some(outcome) = outcomes.next().await {
///     println!("{} matches for {:?}", outcome.results.total, outcome.query);
/// }
/// dispatcher.close();
/// # }
/// ```

use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, RwLock};
use tokio_stream::wrappers::UnboundedReceiverStream;
use tokio_util::sync::CancellationToken;

use folioboard_engine::search::{search, SearchFilters, SearchResults};

use crate::state::CorpusSnapshot;

/// Default quiet period before a query is dispatched
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// Executes one search; the await point between request and result
///
/// The dispatcher is generic over this seam so tests can control when a
/// search completes relative to newer requests.
#[async_trait]
pub trait SearchBackend: Send + Sync {
    /// Runs the query and returns the grouped results
    async fn execute(&self, query: &str, filters: &SearchFilters) -> SearchResults;
}

/// Search backend over the shared in-memory corpus snapshot
pub struct SnapshotBackend {
    corpus: Arc<RwLock<CorpusSnapshot>>,
}

impl SnapshotBackend {
    /// Wraps a shared snapshot
    pub fn new(corpus: Arc<RwLock<CorpusSnapshot>>) -> Self {
        SnapshotBackend { corpus }
    }
}

#[async_trait]
impl SearchBackend for SnapshotBackend {
    async fn execute(&self, query: &str, filters: &SearchFilters) -> SearchResults {
        let snapshot = self.corpus.read().await;
        search(query, filters, &snapshot.as_corpus())
    }
}

/// A delivered search result, tagged with its request sequence
#[derive(Debug)]
pub struct SearchOutcome {
    /// Sequence number of the request that produced this result
    pub seq: u64,

    /// The query as dispatched (trimmed by the engine, not here)
    pub query: String,

    /// Grouped results
    pub results: SearchResults,
}

/// Debounced, last-write-wins search dispatcher
pub struct SearchDispatcher {
    backend: Arc<dyn SearchBackend>,
    debounce: Duration,
    latest: Arc<AtomicU64>,
    outcome_tx: mpsc::UnboundedSender<SearchOutcome>,
    shutdown: CancellationToken,
}

impl SearchDispatcher {
    /// Creates a dispatcher with the default debounce
    ///
    /// Returns the dispatcher and the stream its outcomes arrive on.
    pub fn new(
        backend: Arc<dyn SearchBackend>,
    ) -> (Self, UnboundedReceiverStream<SearchOutcome>) {
        Self::with_debounce(backend, DEFAULT_DEBOUNCE)
    }

    /// Creates a dispatcher with a custom debounce
    pub fn with_debounce(
        backend: Arc<dyn SearchBackend>,
        debounce: Duration,
    ) -> (Self, UnboundedReceiverStream<SearchOutcome>) {
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
        let dispatcher = SearchDispatcher {
            backend,
            debounce,
            latest: Arc::new(AtomicU64::new(0)),
            outcome_tx,
            shutdown: CancellationToken::new(),
        };
        (dispatcher, UnboundedReceiverStream::new(outcome_rx))
    }

    /// Requests a search for the given query and filters
    ///
    /// Returns the sequence number assigned to this request. The search
    /// runs after the quiet period unless a newer request supersedes it
    /// first; its result is delivered on the outcome stream only if it
    /// is still the latest when the backend finishes.
    pub fn request(&self, query: impl Into<String>, filters: SearchFilters) -> u64 {
        let seq = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        let query = query.into();

        let backend = Arc::clone(&self.backend);
        let latest = Arc::clone(&self.latest);
        let outcome_tx = self.outcome_tx.clone();
        let shutdown = self.shutdown.clone();
        let debounce = self.debounce;

        tokio::spawn(async move {
            tokio::select! {
                _ = tokio::time::sleep(debounce) => {}
                _ = shutdown.cancelled() => {
                    tracing::debug!(seq, "Search dispatcher closed during debounce");
                    return;
                }
            }

            if latest.load(Ordering::SeqCst) != seq {
                tracing::debug!(seq, query = %query, "Query superseded during debounce");
                return;
            }

            let results = tokio::select! {
                results = backend.execute(&query, &filters) => results,
                _ = shutdown.cancelled() => {
                    tracing::debug!(seq, "Search dispatcher closed mid-flight");
                    return;
                }
            };

            // The request may have been superseded while the backend ran.
            if latest.load(Ordering::SeqCst) != seq {
                tracing::debug!(seq, query = %query, "Discarded stale search result");
                return;
            }

            tracing::debug!(seq, query = %query, total = results.total, "Search completed");
            let _ = outcome_tx.send(SearchOutcome {
                seq,
                query,
                results,
            });
        });

        seq
    }

    /// Invalidates all in-flight requests without dispatching a new one
    ///
    /// Used when the search UI closes: anything still running resolves
    /// to a no-op on arrival.
    pub fn invalidate(&self) {
        self.latest.fetch_add(1, Ordering::SeqCst);
    }

    /// Sequence number of the most recent request
    pub fn latest_seq(&self) -> u64 {
        self.latest.load(Ordering::SeqCst)
    }

    /// Shuts the dispatcher down
    ///
    /// Pending debounces and in-flight searches stop without delivering.
    pub fn close(&self) {
        self.shutdown.cancel();
    }
}
