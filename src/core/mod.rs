//! Core engine types: identities, ids, configuration, errors.
//!
//! Everything else in the crate builds on these.

pub mod principal;
pub mod id;
pub mod config;
pub mod error;

pub use principal::{ParsePrincipalError, Principal};
pub use id::GameId;
pub use config::{EngineConfig, BOARD_CELLS, BOARD_SIZE, DEFAULT_WIN_LENGTH};
pub use error::{ConfigError, GameError};
