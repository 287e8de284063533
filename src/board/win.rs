//! Win and draw detection.
//!
//! A new winning line must pass through the stone just placed, so only the
//! four lines through that cell are scanned. Each scan walks outward in
//! both senses until it meets a different cell or the edge, which bounds
//! the work by the board width instead of its area.
//!
//! Runs longer than the win length (overlines) win too.

use super::cell::{Cell, Piece};
use super::grid::Board;
use crate::core::DEFAULT_WIN_LENGTH;

/// One of the four lines through a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Along a row: `y` varies.
    Horizontal,
    /// Along a column: `x` varies.
    Vertical,
    /// `x` and `y` grow together.
    Diagonal,
    /// `x` grows while `y` shrinks.
    AntiDiagonal,
}

impl Direction {
    /// All four lines.
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::Diagonal,
        Direction::AntiDiagonal,
    ];

    /// Unit step `(dx, dy)`; the opposite sense is the negation.
    #[must_use]
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::Diagonal => (1, 1),
            Direction::AntiDiagonal => (1, -1),
        }
    }
}

/// Decides whether the last move ended the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WinDetector {
    win_length: usize,
}

impl Default for WinDetector {
    fn default() -> Self {
        Self::new(DEFAULT_WIN_LENGTH)
    }
}

impl WinDetector {
    /// Detector for runs of at least `win_length`.
    #[must_use]
    pub const fn new(win_length: usize) -> Self {
        Self { win_length }
    }

    /// The run length that wins.
    #[must_use]
    pub const fn win_length(&self) -> usize {
        self.win_length
    }

    /// Length of the contiguous `piece` run through `(x, y)` along
    /// `direction`, counting `(x, y)` itself.
    #[must_use]
    pub fn run_length(&self, board: &Board, x: usize, y: usize, piece: Piece, direction: Direction) -> usize {
        let (dx, dy) = direction.delta();
        1 + Self::extent(board, x, y, piece, dx, dy) + Self::extent(board, x, y, piece, -dx, -dy)
    }

    /// Does the stone at `(x, y)` complete a winning run?
    ///
    /// ```
    /// use gomoku_engine::board::{Board, Piece, WinDetector};
    ///
    /// let mut board = Board::new();
    /// for y in 3..8 {
    ///     board.place(7, y, Piece::Black).unwrap();
    /// }
    /// assert!(WinDetector::default().check_win(&board, 7, 5, Piece::Black));
    /// ```
    #[must_use]
    pub fn check_win(&self, board: &Board, x: usize, y: usize, piece: Piece) -> bool {
        Direction::ALL
            .iter()
            .any(|&direction| self.run_length(board, x, y, piece, direction) >= self.win_length)
    }

    /// Full board. Only meaningful once `check_win` failed for the last move.
    #[must_use]
    pub fn is_draw(&self, board: &Board) -> bool {
        board.is_full()
    }

    /// Stones of `piece` beyond `(x, y)` stepping by `(dx, dy)`.
    fn extent(board: &Board, x: usize, y: usize, piece: Piece, dx: isize, dy: isize) -> usize {
        let target = Cell::from(piece);
        let (mut cx, mut cy) = (x as isize + dx, y as isize + dy);
        let mut count = 0;
        while board.probe(cx, cy) == Some(target) {
            count += 1;
            cx += dx;
            cy += dy;
        }
        count
    }
}
