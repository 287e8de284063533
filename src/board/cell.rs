//! Cell states and stone colours.

use serde::{Deserialize, Serialize};

/// Colour of a placed stone. Black always moves first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Piece {
    Black,
    White,
}

impl Piece {
    /// Colour of the move with 0-based sequence index `index`.
    ///
    /// ```
    /// use gomoku_engine::board::Piece;
    ///
    /// assert_eq!(Piece::for_move(0), Piece::Black);
    /// assert_eq!(Piece::for_move(1), Piece::White);
    /// assert_eq!(Piece::for_move(2), Piece::Black);
    /// ```
    #[must_use]
    pub const fn for_move(index: usize) -> Self {
        if index % 2 == 0 {
            Piece::Black
        } else {
            Piece::White
        }
    }

    /// The other colour.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Piece::Black => Piece::White,
            Piece::White => Piece::Black,
        }
    }

    /// Wire value: 1 for black, 2 for white.
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        match self {
            Piece::Black => 1,
            Piece::White => 2,
        }
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Piece::Black => f.write_str("Black"),
            Piece::White => f.write_str("White"),
        }
    }
}

/// State of one board cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Black,
    White,
}

impl Cell {
    /// Is this cell free?
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// The stone in this cell, if any.
    #[must_use]
    pub const fn piece(self) -> Option<Piece> {
        match self {
            Cell::Empty => None,
            Cell::Black => Some(Piece::Black),
            Cell::White => Some(Piece::White),
        }
    }

    /// Wire value: 0 empty, 1 black, 2 white.
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::Black => 1,
            Cell::White => 2,
        }
    }
}

impl From<Piece> for Cell {
    fn from(piece: Piece) -> Self {
        match piece {
            Piece::Black => Cell::Black,
            Piece::White => Cell::White,
        }
    }
}
