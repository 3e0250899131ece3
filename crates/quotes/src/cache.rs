//! Snapshot cache with freshness tracking

use parking_lot::RwLock;
use std::time::Duration;

use muscadine_core::PriceSnapshot;

/// Owns the last successful snapshot.
///
/// Critical sections are short reads and wholesale writes; the upstream
/// fetch happens outside the lock, so concurrent misses may each fetch and
/// the last write wins.
#[derive(Debug)]
pub struct SnapshotCache {
    snapshot: RwLock<Option<PriceSnapshot>>,
    freshness_window_ms: u64,
}

impl SnapshotCache {
    pub fn new(freshness_window: Duration) -> Self {
        Self {
            snapshot: RwLock::new(None),
            freshness_window_ms: freshness_window.as_millis() as u64,
        }
    }

    /// Snapshot still inside the freshness window, if any.
    pub fn fresh(&self, now_ms: u64) -> Option<PriceSnapshot> {
        (*self.snapshot.read()).filter(|s| s.is_fresh(self.freshness_window_ms, now_ms))
    }

    /// Last snapshot regardless of age, for stale-serving.
    pub fn latest(&self) -> Option<PriceSnapshot> {
        *self.snapshot.read()
    }

    /// Overwrite wholesale with the result of a successful fetch.
    pub fn store(&self, snapshot: PriceSnapshot) {
        *self.snapshot.write() = Some(snapshot);
    }
}
