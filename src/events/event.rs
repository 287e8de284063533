//! Notifications emitted by registry actions.
//!
//! Events describe state changes a caller may want to observe (a frontend
//! refreshing its view, an indexer, a test). They carry only ids and
//! principals; the current state is always available through queries.

use serde::{Deserialize, Serialize};

use crate::board::Piece;
use crate::core::{GameId, Principal};
use crate::game::{GameResult, Move};

/// A state change in some match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameEvent {
    /// A match was created.
    GameCreated { id: GameId, creator: Principal },

    /// A second participant was seated. Practice matches report the
    /// creator as the joiner.
    GameJoined {
        id: GameId,
        creator: Principal,
        joiner: Principal,
    },

    /// A waiting match was withdrawn.
    GameCancelled { id: GameId },

    /// A stone was placed.
    MoveMade {
        id: GameId,
        player: Principal,
        x: u8,
        y: u8,
        piece: Piece,
    },

    /// The match ended. `winner` is `None` exactly when `is_draw`.
    GameFinished {
        id: GameId,
        winner: Option<Principal>,
        is_draw: bool,
    },
}

impl GameEvent {
    /// Event for an accepted move.
    #[must_use]
    pub fn move_made(id: GameId, mv: &Move) -> Self {
        GameEvent::MoveMade {
            id,
            player: mv.player,
            x: mv.x,
            y: mv.y,
            piece: mv.piece,
        }
    }

    /// Event for a finished match.
    #[must_use]
    pub fn finished(id: GameId, result: GameResult) -> Self {
        GameEvent::GameFinished {
            id,
            winner: result.winner(),
            is_draw: result.is_draw(),
        }
    }

    /// The match this event concerns.
    #[must_use]
    pub fn game_id(&self) -> GameId {
        match *self {
            GameEvent::GameCreated { id, .. }
            | GameEvent::GameJoined { id, .. }
            | GameEvent::GameCancelled { id }
            | GameEvent::MoveMade { id, .. }
            | GameEvent::GameFinished { id, .. } => id,
        }
    }
}
