//! Caller-visible failures.
//!
//! Every action either succeeds or fails synchronously with one of these.
//! A failure never leaves partial state behind, in the failing match or
//! anywhere else in the registry.

use thiserror::Error;

use super::id::GameId;

/// Why an action was rejected.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    /// The id does not resolve to any known match.
    #[error("{0} does not exist")]
    GameNotFound(GameId),

    /// The action needs a match that is still waiting for an opponent.
    #[error("game is not waiting for an opponent")]
    NotWaiting,

    /// The action needs a match that is being played.
    #[error("game is not in progress")]
    GameNotPlaying,

    /// The creator tried to join their own match.
    #[error("cannot join your own game")]
    SelfJoin,

    /// The match already has a second participant.
    #[error("game is already full")]
    AlreadyFull,

    /// Only the creator may cancel a waiting match.
    #[error("only creator can cancel")]
    NotCreator,

    /// A move by the participant whose turn it is not.
    #[error("not your turn")]
    NotYourTurn,

    /// A move in a practice match by someone other than its controller.
    #[error("only practice game creator can move")]
    NotPracticeOwner,

    /// Coordinates outside the board.
    #[error("invalid coordinates ({x}, {y})")]
    InvalidCoordinate { x: usize, y: usize },

    /// The target cell already holds a stone.
    #[error("position ({x}, {y}) already occupied")]
    CellOccupied { x: usize, y: usize },

    /// Batch coordinate sequences differ in length.
    #[error("coordinate arrays length mismatch: {xs} xs, {ys} ys")]
    LengthMismatch { xs: usize, ys: usize },

    /// Batch longer than the configured maximum.
    #[error("batch of {len} moves exceeds the limit of {max}")]
    BatchTooLarge { len: usize, max: usize },

    /// The reserved all-zero principal was used as a participant.
    #[error("the zero principal cannot take part in a game")]
    ZeroPrincipal,

    /// Practice matches are switched off in this engine's configuration.
    #[error("practice games are disabled")]
    PracticeDisabled,
}

/// Invalid `EngineConfig`.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Win length must fit on the board and be at least 2.
    #[error("win length {win_length} must be between 2 and {board_size}")]
    WinLength { win_length: usize, board_size: usize },

    /// A batch must be allowed at least one move.
    #[error("max batch moves must be at least 1")]
    EmptyBatchLimit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_carry_context() {
        assert_eq!(GameError::GameNotFound(GameId::new(999)).to_string(), "Game(999) does not exist");
        assert_eq!(
            GameError::CellOccupied { x: 7, y: 7 }.to_string(),
            "position (7, 7) already occupied"
        );
        assert_eq!(
            GameError::LengthMismatch { xs: 3, ys: 2 }.to_string(),
            "coordinate arrays length mismatch: 3 xs, 2 ys"
        );
    }
}
