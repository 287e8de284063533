//! Engine configuration.
//!
//! The board side is fixed (`BOARD_SIZE`); everything else a host may want
//! to tune lives in `EngineConfig`, which is handed to the registry at
//! construction and validated there.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Side length of the square board.
pub const BOARD_SIZE: usize = 15;

/// Number of cells on the board.
pub const BOARD_CELLS: usize = BOARD_SIZE * BOARD_SIZE;

/// Default run length that wins.
pub const DEFAULT_WIN_LENGTH: usize = 5;

/// Registry-wide configuration.
///
/// ## Example
///
/// ```
/// use gomoku_engine::core::EngineConfig;
///
/// let config = EngineConfig::default()
///     .with_max_batch_moves(16)
///     .without_practice();
///
/// assert_eq!(config.win_length, 5);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// A run of at least this many same-coloured stones wins.
    /// Longer runs (overlines) also win.
    pub win_length: usize,

    /// Longest accepted batch.
    pub max_batch_moves: usize,

    /// Whether single-operator practice matches may be created.
    pub allow_practice: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            win_length: DEFAULT_WIN_LENGTH,
            max_batch_moves: BOARD_CELLS,
            allow_practice: true,
        }
    }
}

impl EngineConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the winning run length.
    #[must_use]
    pub fn with_win_length(mut self, win_length: usize) -> Self {
        self.win_length = win_length;
        self
    }

    /// Set the batch size limit.
    #[must_use]
    pub fn with_max_batch_moves(mut self, max: usize) -> Self {
        self.max_batch_moves = max;
        self
    }

    /// Disable practice matches.
    #[must_use]
    pub fn without_practice(mut self) -> Self {
        self.allow_practice = false;
        self
    }

    /// Check the configuration is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(2..=BOARD_SIZE).contains(&self.win_length) {
            return Err(ConfigError::WinLength {
                win_length: self.win_length,
                board_size: BOARD_SIZE,
            });
        }
        if self.max_batch_moves == 0 {
            return Err(ConfigError::EmptyBatchLimit);
        }
        Ok(())
    }
}
