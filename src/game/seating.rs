//! Who sits at a match, and who may move.
//!
//! A practice match is not modelled as "both seats hold the same
//! principal". It has a single `controller`, and the seat to move is
//! derived from move parity. Turn authorization for two distinct seats
//! therefore never applies to practice matches.

use serde::{Deserialize, Serialize};

use crate::board::Piece;
use crate::core::{GameError, Principal};

/// Participants of a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Seating {
    /// Created, waiting for an opponent. The creator will play Black.
    Open { creator: Principal },

    /// Two distinct participants; the creator plays Black.
    Duel { black: Principal, white: Principal },

    /// One principal plays both colours.
    Practice { controller: Principal },
}

impl Seating {
    /// The creator.
    #[must_use]
    pub const fn player1(&self) -> Principal {
        match *self {
            Seating::Open { creator } => creator,
            Seating::Duel { black, .. } => black,
            Seating::Practice { controller } => controller,
        }
    }

    /// The second participant, if seated. A practice match reports its
    /// controller here so external views keep the "player2 == player1"
    /// shape callers expect.
    #[must_use]
    pub const fn player2(&self) -> Option<Principal> {
        match *self {
            Seating::Open { .. } => None,
            Seating::Duel { white, .. } => Some(white),
            Seating::Practice { controller } => Some(controller),
        }
    }

    /// Is this a single-operator match?
    #[must_use]
    pub const fn is_practice(&self) -> bool {
        matches!(self, Seating::Practice { .. })
    }

    /// The principal who places `piece` stones, once seated.
    #[must_use]
    pub const fn holder(&self, piece: Piece) -> Option<Principal> {
        match (*self, piece) {
            (Seating::Open { .. }, _) => None,
            (Seating::Duel { black, .. }, Piece::Black) => Some(black),
            (Seating::Duel { white, .. }, Piece::White) => Some(white),
            (Seating::Practice { controller }, _) => Some(controller),
        }
    }

    /// Check `caller` may place the next stone, whose colour is `piece`.
    pub fn authorize(&self, caller: Principal, piece: Piece) -> Result<(), GameError> {
        match *self {
            Seating::Open { .. } => Err(GameError::GameNotPlaying),
            Seating::Practice { controller } if caller != controller => Err(GameError::NotPracticeOwner),
            Seating::Practice { .. } => Ok(()),
            Seating::Duel { .. } if self.holder(piece) != Some(caller) => Err(GameError::NotYourTurn),
            Seating::Duel { .. } => Ok(()),
        }
    }

    /// In a duel, the participant facing `player`.
    #[must_use]
    pub fn opponent_of(&self, player: Principal) -> Option<Principal> {
        match *self {
            Seating::Duel { black, white } if player == black => Some(white),
            Seating::Duel { black, white } if player == white => Some(black),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(n: u64) -> Principal {
        Principal::from_index(n)
    }

    #[test]
    fn test_open_seating() {
        let seating = Seating::Open { creator: p(1) };
        assert_eq!(seating.player1(), p(1));
        assert_eq!(seating.player2(), None);
        assert_eq!(seating.holder(Piece::Black), None);
        assert_eq!(seating.authorize(p(1), Piece::Black), Err(GameError::GameNotPlaying));
    }

    #[test]
    fn test_duel_authorization_follows_colour() {
        let seating = Seating::Duel { black: p(1), white: p(2) };
        assert!(seating.authorize(p(1), Piece::Black).is_ok());
        assert!(seating.authorize(p(2), Piece::White).is_ok());
        assert_eq!(seating.authorize(p(2), Piece::Black), Err(GameError::NotYourTurn));
        assert_eq!(seating.authorize(p(1), Piece::White), Err(GameError::NotYourTurn));
        assert_eq!(seating.authorize(p(3), Piece::Black), Err(GameError::NotYourTurn));
    }

    #[test]
    fn test_practice_single_controller() {
        let seating = Seating::Practice { controller: p(1) };
        assert!(seating.is_practice());
        assert_eq!(seating.player2(), Some(p(1)));
        assert!(seating.authorize(p(1), Piece::Black).is_ok());
        assert!(seating.authorize(p(1), Piece::White).is_ok());
        assert_eq!(seating.authorize(p(2), Piece::Black), Err(GameError::NotPracticeOwner));
        assert_eq!(seating.opponent_of(p(1)), None);
    }

    #[test]
    fn test_opponent_of() {
        let seating = Seating::Duel { black: p(1), white: p(2) };
        assert_eq!(seating.opponent_of(p(1)), Some(p(2)));
        assert_eq!(seating.opponent_of(p(2)), Some(p(1)));
        assert_eq!(seating.opponent_of(p(3)), None);
    }
}
