use std::sync::Arc;

use dispatch_reviews::ReviewLog;
use dispatch_saved::{SavedKind, SavedLedger};
use dispatch_store::{DataDir, RecordStore};
use dispatch_types::Clock;

use crate::auth::{AuthProvider, BearerAuth};

/// Shared state behind every handler: the record store, the three saved
/// ledgers, the review log, and the auth seam.
pub struct AppState {
    pub store: RecordStore,
    pub saved_events: SavedLedger,
    pub saved_venues: SavedLedger,
    pub saved_hosts: SavedLedger,
    pub reviews: ReviewLog,
    pub auth: Arc<dyn AuthProvider>,
}

impl AppState {
    /// State over a data directory with the default auth provider and
    /// system clock.
    pub fn new(dir: DataDir) -> Self {
        Self::with_parts(dir, Arc::new(BearerAuth), None)
    }

    /// State with an explicit auth provider and, optionally, an injected
    /// clock shared by the store cache and review timestamps.
    pub fn with_parts(
        dir: DataDir,
        auth: Arc<dyn AuthProvider>,
        clock: Option<Arc<dyn Clock>>,
    ) -> Self {
        let root = dir.root().to_path_buf();
        let reviews_path = dir.reviews();
        let (store, reviews) = match clock {
            Some(clock) => (
                RecordStore::with_clock(dir, clock.clone()),
                ReviewLog::with_clock(reviews_path, clock),
            ),
            None => (RecordStore::new(dir), ReviewLog::new(reviews_path)),
        };
        Self {
            store,
            saved_events: SavedLedger::open(SavedKind::Events, &root),
            saved_venues: SavedLedger::open(SavedKind::Venues, &root),
            saved_hosts: SavedLedger::open(SavedKind::Hosts, &root),
            reviews,
            auth,
        }
    }

    /// The ledger for one saved-entity kind.
    pub fn ledger(&self, kind: SavedKind) -> &SavedLedger {
        match kind {
            SavedKind::Events => &self.saved_events,
            SavedKind::Venues => &self.saved_venues,
            SavedKind::Hosts => &self.saved_hosts,
        }
    }
}
