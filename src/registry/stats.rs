//! Lifetime win/loss counters.
//!
//! Only decisive, non-practice results reach the ledger. Draws and
//! practice matches are filtered out by the registry before
//! `record_result` is called.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::Principal;

/// Counters for one principal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerStats {
    pub wins: u64,
    pub losses: u64,
}

impl PlayerStats {
    /// Matches counted in the ledger.
    #[must_use]
    pub fn games(&self) -> u64 {
        self.wins + self.losses
    }
}

impl From<PlayerStats> for (u64, u64) {
    fn from(stats: PlayerStats) -> Self {
        (stats.wins, stats.losses)
    }
}

/// Per-principal counters.
///
/// ```
/// use gomoku_engine::core::Principal;
/// use gomoku_engine::registry::StatsLedger;
///
/// let (alice, bob) = (Principal::from_index(1), Principal::from_index(2));
/// let mut ledger = StatsLedger::new();
/// ledger.record_result(alice, bob);
///
/// assert_eq!(ledger.get_stats(alice).wins, 1);
/// assert_eq!(ledger.get_stats(bob).losses, 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct StatsLedger {
    entries: FxHashMap<Principal, PlayerStats>,
}

impl StatsLedger {
    /// Create an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one decisive result.
    pub fn record_result(&mut self, winner: Principal, loser: Principal) {
        self.entries.entry(winner).or_default().wins += 1;
        self.entries.entry(loser).or_default().losses += 1;
    }

    /// Counters for `principal`; zero if never recorded.
    #[must_use]
    pub fn get_stats(&self, principal: Principal) -> PlayerStats {
        self.entries.get(&principal).copied().unwrap_or_default()
    }

    /// Number of principals with a recorded result.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// No results recorded yet?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over recorded principals, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&Principal, &PlayerStats)> {
        self.entries.iter()
    }
}
