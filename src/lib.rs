//! # gomoku-engine
//!
//! Authoritative, deterministic engine for concurrent two-player Gomoku
//! matches on a 15x15 board.
//!
//! ## Design Principles
//!
//! 1. **Single Authority**: Every state change goes through `MatchRegistry`.
//!    A rejected action leaves no trace.
//!
//! 2. **Derived Turn Order**: The side to move is a function of the move
//!    count. Black always moves on even counts.
//!
//! 3. **Observable**: Each successful transition emits a `GameEvent` to a
//!    pluggable `EventSink`.
//!
//! ## Architecture
//!
//! - **Value Boards**: The board is a fixed array, copied freely.
//!
//! - **Persistent Move Logs**: O(1) cloning via `im-rs`, so a batch runs
//!   against a scratch copy and commits by swapping it in.
//!
//! ## Modules
//!
//! - `core`: Principals, game ids, configuration, errors
//! - `board`: Cells, the board and win detection
//! - `game`: The per-match state machine
//! - `events`: Event variants and sinks
//! - `registry`: The match registry, stats ledger and query views

pub mod core;
pub mod board;
pub mod game;
pub mod events;
pub mod registry;

#[cfg(feature = "python")]
mod python;

// Re-export commonly used types
pub use crate::core::{
    Principal, GameId,
    EngineConfig, BOARD_SIZE, BOARD_CELLS, DEFAULT_WIN_LENGTH,
    GameError, ConfigError,
};

pub use crate::board::{Cell, Piece, Board, Grid, Direction, WinDetector};

pub use crate::game::{Move, Seating, Match, MatchStatus, GameResult, MoveReport, BatchReport};

pub use crate::events::{GameEvent, EventSink, NullSink, FnSink};

pub use crate::registry::{MatchRegistry, SharedRegistry, GameView, PlayerStats, StatsLedger};
