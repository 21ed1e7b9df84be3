use crate::cards::hand::Hand;
use crate::RankValue;
use std::collections::HashMap;
use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;
use std::sync::RwLock;

/// Memoization of (hole, board) -> rank lookups.
///
/// exhaustive equity on a turn or river revisits the same made hands
/// across many run-outs, so the map pays for itself quickly there.
/// writers take the lock briefly; hit accounting is lock-free.
#[derive(Debug, Default)]
pub struct RankCache {
    map: RwLock<HashMap<(Hand, Hand), RankValue>>,
    hits: AtomicU64,
    asks: AtomicU64,
}

impl RankCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, hole: Hand, board: Hand) -> Option<RankValue> {
        self.asks.fetch_add(1, Ordering::Relaxed);
        let found = self
            .map
            .read()
            .expect("rank cache lock poisoned")
            .get(&(hole, board))
            .copied();
        if found.is_some() {
            self.hits.fetch_add(1, Ordering::Relaxed);
        }
        found
    }

    pub(crate) fn put(&self, hole: Hand, board: Hand, rank: RankValue) {
        self.map
            .write()
            .expect("rank cache lock poisoned")
            .insert((hole, board), rank);
    }

    pub fn clear(&self) {
        self.map.write().expect("rank cache lock poisoned").clear();
        self.hits.store(0, Ordering::Relaxed);
        self.asks.store(0, Ordering::Relaxed);
    }

    pub fn len(&self) -> usize {
        self.map.read().expect("rank cache lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// fraction of lookups answered from the map, 0 when never asked
    pub fn hit_rate(&self) -> f64 {
        let asks = self.asks.load(Ordering::Relaxed);
        let hits = self.hits.load(Ordering::Relaxed);
        if asks == 0 {
            0.0
        } else {
            hits as f64 / asks as f64
        }
    }
}
