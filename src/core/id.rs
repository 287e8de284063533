//! Match identification.
//!
//! Every match gets a `GameId` from its registry. Ids start at 1, increase
//! by one per created match and are never reused: matches are retained for
//! historical queries after they finish or are cancelled.

use serde::{Deserialize, Serialize};

/// Unique, monotonically assigned match identifier.
///
/// ```
/// use gomoku_engine::core::GameId;
///
/// let first = GameId::FIRST;
/// assert_eq!(first.raw(), 1);
/// assert_eq!(first.next(), GameId::new(2));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameId(pub u64);

impl GameId {
    /// The id handed out to the first match of a fresh registry.
    pub const FIRST: Self = Self(1);

    /// Create a game ID.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }

    /// The id allocated after this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl std::fmt::Display for GameId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Game({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_id_basics() {
        let id = GameId::new(5);
        assert_eq!(id.raw(), 5);
        assert_eq!(format!("{}", id), "Game(5)");
        assert_eq!(id.next().raw(), 6);
    }

    #[test]
    fn test_game_id_serializes_as_number() {
        let json = serde_json::to_string(&GameId::new(12)).unwrap();
        assert_eq!(json, "12");
    }
}
