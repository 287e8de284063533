//! External record of a match.
//!
//! `GameView` is what `get_game` returns: a fixed, explicitly typed
//! snapshot with a tagged status and explicit optionals for the fields
//! that may be unset. It serializes cleanly for loosely typed callers.

use serde::{Deserialize, Serialize};

use crate::core::{GameId, Principal};
use crate::game::{Match, MatchStatus};

/// Snapshot of one match's summary fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameView {
    pub id: GameId,
    pub player1: Principal,
    /// Unset while waiting; equals `player1` for practice matches.
    pub player2: Option<Principal>,
    pub status: MatchStatus,
    /// Set only while playing.
    pub current_player: Option<Principal>,
    /// Set only on a decisive finish.
    pub winner: Option<Principal>,
    pub move_count: usize,
    pub is_practice_mode: bool,
}

impl From<&Match> for GameView {
    fn from(game: &Match) -> Self {
        Self {
            id: game.id(),
            player1: game.player1(),
            player2: game.player2(),
            status: game.status(),
            current_player: game.current_player(),
            winner: game.winner(),
            move_count: game.move_count(),
            is_practice_mode: game.is_practice(),
        }
    }
}
