//! The 15x15 playing grid.
//!
//! `Board` is a plain value: a fixed array of cells plus a stone counter,
//! so copying it for a scratch batch is a memcpy. Cells are addressed as
//! `(x, y)` with `x` the row and `y` the column, both in `[0, BOARD_SIZE)`.

use serde::{Deserialize, Serialize};

use super::cell::{Cell, Piece};
use crate::core::{GameError, BOARD_CELLS, BOARD_SIZE};

/// Row-major grid of cells.
pub type Grid = [[Cell; BOARD_SIZE]; BOARD_SIZE];

/// Square playing board.
///
/// Cells only ever go from `Empty` to a stone; nothing is removed.
///
/// ```
/// use gomoku_engine::board::{Board, Cell, Piece};
///
/// let mut board = Board::new();
/// board.place(7, 7, Piece::Black).unwrap();
///
/// assert_eq!(board.get(7, 7).unwrap(), Cell::Black);
/// assert!(board.place(7, 7, Piece::White).is_err());
/// assert_eq!(board.stone_count(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: Grid,
    stones: usize,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
            stones: 0,
        }
    }

    /// Are `(x, y)` on the board?
    #[must_use]
    pub const fn in_bounds(x: usize, y: usize) -> bool {
        x < BOARD_SIZE && y < BOARD_SIZE
    }

    /// Fail with `InvalidCoordinate` unless `(x, y)` are on the board.
    pub fn check_bounds(x: usize, y: usize) -> Result<(), GameError> {
        if Self::in_bounds(x, y) {
            Ok(())
        } else {
            Err(GameError::InvalidCoordinate { x, y })
        }
    }

    /// Read a cell.
    pub fn get(&self, x: usize, y: usize) -> Result<Cell, GameError> {
        Self::check_bounds(x, y)?;
        Ok(self.cells[x][y])
    }

    /// Read a cell through signed coordinates; `None` off the board.
    ///
    /// Used by line scans that step past the edges.
    #[must_use]
    pub fn probe(&self, x: isize, y: isize) -> Option<Cell> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        Self::in_bounds(x, y).then(|| self.cells[x][y])
    }

    /// Put a stone on an empty cell.
    pub fn place(&mut self, x: usize, y: usize, piece: Piece) -> Result<(), GameError> {
        if !self.get(x, y)?.is_empty() {
            return Err(GameError::CellOccupied { x, y });
        }
        self.cells[x][y] = Cell::from(piece);
        self.stones += 1;
        Ok(())
    }

    /// Number of stones on the board.
    #[must_use]
    pub fn stone_count(&self) -> usize {
        self.stones
    }

    /// No empty cells left?
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.stones == BOARD_CELLS
    }

    /// The whole grid, indexed `[x][y]`.
    #[must_use]
    pub fn cells(&self) -> &Grid {
        &self.cells
    }

    /// Wire form: `[x][y]` of 0 (empty), 1 (black), 2 (white).
    #[must_use]
    pub fn to_u8_grid(&self) -> [[u8; BOARD_SIZE]; BOARD_SIZE] {
        self.cells.map(|row| row.map(Cell::as_u8))
    }
}
