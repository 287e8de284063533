//! One match and its state machine.
//!
//! ```text
//! create ──► Waiting ──join──► Playing ──win/draw──► Finished
//!               │                 ▲
//!             cancel       createPractice
//!               ▼
//!           Cancelled
//! ```
//!
//! Every transition validates first and mutates last, so a rejected
//! action leaves the match exactly as it was. Batches go through a
//! scratch copy that replaces the match only when every move in it was
//! accepted.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use thiserror::Error;

use super::moves::Move;
use super::seating::Seating;
use crate::board::{Board, Cell, Piece, WinDetector};
use crate::core::{GameError, GameId, Principal};

/// Lifecycle state. `Finished` and `Cancelled` are terminal.
///
/// Serialized as its numeric form (see `as_u8`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum MatchStatus {
    Waiting,
    Playing,
    Finished,
    Cancelled,
}

impl MatchStatus {
    /// Is this a terminal state?
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, MatchStatus::Finished | MatchStatus::Cancelled)
    }

    /// Stable numeric form: 0 waiting, 1 playing, 2 finished, 3 cancelled.
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        match self {
            MatchStatus::Waiting => 0,
            MatchStatus::Playing => 1,
            MatchStatus::Finished => 2,
            MatchStatus::Cancelled => 3,
        }
    }
}

impl From<MatchStatus> for u8 {
    fn from(status: MatchStatus) -> Self {
        status.as_u8()
    }
}

/// A numeric status outside `0..=3`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("unknown match status {0}")]
pub struct UnknownStatus(pub u8);

impl TryFrom<u8> for MatchStatus {
    type Error = UnknownStatus;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(MatchStatus::Waiting),
            1 => Ok(MatchStatus::Playing),
            2 => Ok(MatchStatus::Finished),
            3 => Ok(MatchStatus::Cancelled),
            other => Err(UnknownStatus(other)),
        }
    }
}

/// How a finished match ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// The mover completed a winning run.
    Winner(Principal),
    /// The board filled up without a winning run.
    Draw,
}

impl GameResult {
    /// The winner, for a decisive result.
    #[must_use]
    pub const fn winner(self) -> Option<Principal> {
        match self {
            GameResult::Winner(p) => Some(p),
            GameResult::Draw => None,
        }
    }

    /// Was this a draw?
    #[must_use]
    pub const fn is_draw(self) -> bool {
        matches!(self, GameResult::Draw)
    }
}

/// An accepted move and whether it ended the match.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveReport {
    pub mv: Move,
    pub result: Option<GameResult>,
}

/// Outcome of an accepted batch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BatchReport {
    /// Moves placed, in order.
    pub moves: SmallVec<[Move; 8]>,

    /// Set when a move in the batch ended the match.
    pub result: Option<GameResult>,

    /// Requested moves after the ending move that were not placed.
    pub skipped: usize,
}

/// Full state of one match.
#[derive(Clone, Debug)]
pub struct Match {
    id: GameId,
    seating: Seating,
    status: MatchStatus,
    board: Board,
    /// Persistent vector so scratch copies for batches clone in O(1).
    moves: Vector<Move>,
    result: Option<GameResult>,
    detector: WinDetector,
}

impl Match {
    /// A new match waiting for an opponent.
    #[must_use]
    pub fn new(id: GameId, creator: Principal, detector: WinDetector) -> Self {
        Self {
            id,
            seating: Seating::Open { creator },
            status: MatchStatus::Waiting,
            board: Board::new(),
            moves: Vector::new(),
            result: None,
            detector,
        }
    }

    /// A practice match, playing immediately, controlled by `creator`.
    #[must_use]
    pub fn new_practice(id: GameId, creator: Principal, detector: WinDetector) -> Self {
        Self {
            seating: Seating::Practice { controller: creator },
            status: MatchStatus::Playing,
            ..Self::new(id, creator, detector)
        }
    }

    // === Queries ===

    #[must_use]
    pub fn id(&self) -> GameId {
        self.id
    }

    #[must_use]
    pub fn seating(&self) -> &Seating {
        &self.seating
    }

    #[must_use]
    pub fn player1(&self) -> Principal {
        self.seating.player1()
    }

    #[must_use]
    pub fn player2(&self) -> Option<Principal> {
        self.seating.player2()
    }

    #[must_use]
    pub fn status(&self) -> MatchStatus {
        self.status
    }

    #[must_use]
    pub fn is_practice(&self) -> bool {
        self.seating.is_practice()
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Move log, oldest first.
    #[must_use]
    pub fn moves(&self) -> &Vector<Move> {
        &self.moves
    }

    #[must_use]
    pub fn move_count(&self) -> usize {
        self.moves.len()
    }

    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.result
    }

    /// Decisive winner; `None` while unfinished or on a draw.
    #[must_use]
    pub fn winner(&self) -> Option<Principal> {
        self.result.and_then(GameResult::winner)
    }

    /// Colour of the next stone, by move-count parity.
    #[must_use]
    pub fn next_piece(&self) -> Piece {
        Piece::for_move(self.moves.len())
    }

    /// Who may move next; `None` unless the match is being played.
    #[must_use]
    pub fn current_player(&self) -> Option<Principal> {
        match self.status {
            MatchStatus::Playing => self.seating.holder(self.next_piece()),
            _ => None,
        }
    }

    /// Would a move by `principal` pass turn authorization right now?
    #[must_use]
    pub fn is_turn_of(&self, principal: Principal) -> bool {
        self.status == MatchStatus::Playing && self.seating.authorize(principal, self.next_piece()).is_ok()
    }

    /// Read one cell.
    pub fn cell(&self, x: usize, y: usize) -> Result<Cell, GameError> {
        self.board.get(x, y)
    }

    // === Transitions ===

    /// Seat `joiner` as White and start play.
    pub fn join(&mut self, joiner: Principal) -> Result<(), GameError> {
        if self.seating.player2().is_some() {
            return Err(GameError::AlreadyFull);
        }
        if self.status != MatchStatus::Waiting {
            return Err(GameError::NotWaiting);
        }
        let creator = self.seating.player1();
        if joiner == creator {
            return Err(GameError::SelfJoin);
        }

        self.seating = Seating::Duel {
            black: creator,
            white: joiner,
        };
        self.status = MatchStatus::Playing;
        Ok(())
    }

    /// Withdraw a match nobody has joined.
    pub fn cancel(&mut self, caller: Principal) -> Result<(), GameError> {
        if caller != self.seating.player1() {
            return Err(GameError::NotCreator);
        }
        if self.status != MatchStatus::Waiting {
            return Err(GameError::NotWaiting);
        }
        self.status = MatchStatus::Cancelled;
        Ok(())
    }

    /// Place the next stone at `(x, y)`.
    ///
    /// Checks run in order: match is playing, caller may move, coordinates
    /// are on the board, cell is empty. On a win the mover becomes the
    /// winner; on a full board without a win the match is drawn.
    pub fn make_move(&mut self, caller: Principal, x: usize, y: usize) -> Result<MoveReport, GameError> {
        if self.status != MatchStatus::Playing {
            return Err(GameError::GameNotPlaying);
        }
        let piece = self.next_piece();
        self.seating.authorize(caller, piece)?;

        self.board.place(x, y, piece)?;
        let mv = Move::new(x, y, caller, piece, self.moves.len() as u32);
        self.moves.push_back(mv);

        let result = if self.detector.check_win(&self.board, x, y, piece) {
            Some(GameResult::Winner(caller))
        } else if self.detector.is_draw(&self.board) {
            Some(GameResult::Draw)
        } else {
            None
        };

        if result.is_some() {
            self.status = MatchStatus::Finished;
            self.result = result;
        }

        Ok(MoveReport { mv, result })
    }

    /// Apply moves `(xs[i], ys[i])` in order, all or nothing.
    ///
    /// If any move would be rejected the whole batch is rejected with that
    /// move's error and the match is untouched. A move that ends the match
    /// is not a failure: the batch commits up to and including it, and the
    /// remaining requested moves are skipped.
    pub fn make_batch_moves(&mut self, caller: Principal, xs: &[usize], ys: &[usize]) -> Result<BatchReport, GameError> {
        if xs.len() != ys.len() {
            return Err(GameError::LengthMismatch {
                xs: xs.len(),
                ys: ys.len(),
            });
        }
        if self.status != MatchStatus::Playing {
            return Err(GameError::GameNotPlaying);
        }

        let mut scratch = self.clone();
        let mut moves = SmallVec::new();
        let mut result = None;

        for (&x, &y) in xs.iter().zip(ys) {
            let report = scratch.make_move(caller, x, y)?;
            moves.push(report.mv);
            if report.result.is_some() {
                result = report.result;
                break;
            }
        }

        *self = scratch;
        let skipped = xs.len() - moves.len();
        Ok(BatchReport { moves, result, skipped })
    }
}
