//! Move records.
//!
//! A match keeps every accepted move, in order, for replay and history
//! queries. Records are immutable once appended.

use serde::{Deserialize, Serialize};

use crate::board::Piece;
use crate::core::Principal;

/// One accepted move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Row.
    pub x: u8,

    /// Column.
    pub y: u8,

    /// Who placed the stone.
    pub player: Principal,

    /// Stone colour, fixed by `sequence` parity.
    pub piece: Piece,

    /// 0-based position in the match's move log.
    pub sequence: u32,
}

impl Move {
    /// Create a move record.
    ///
    /// Coordinates must already be validated against the board.
    #[must_use]
    pub fn new(x: usize, y: usize, player: Principal, piece: Piece, sequence: u32) -> Self {
        Self {
            x: x as u8,
            y: y as u8,
            player,
            piece,
            sequence,
        }
    }

    /// Coordinates as board indices.
    #[must_use]
    pub fn coords(&self) -> (usize, usize) {
        (self.x as usize, self.y as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_record() {
        let player = Principal::from_index(3);
        let mv = Move::new(7, 11, player, Piece::Black, 8);

        assert_eq!(mv.coords(), (7, 11));
        assert_eq!(mv.player, player);
        assert_eq!(mv.piece, Piece::Black);
        assert_eq!(mv.sequence, 8);
    }

    #[test]
    fn test_move_serialization() {
        let mv = Move::new(0, 14, Principal::from_index(9), Piece::White, 1);
        let json = serde_json::to_string(&mv).unwrap();
        let back: Move = serde_json::from_str(&json).unwrap();
        assert_eq!(mv, back);
    }
}
