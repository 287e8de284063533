//! Thread-safe registry handle.
//!
//! Actions take the write lock, so mutations are applied one at a time
//! (which also serializes them per match id). Queries take the read lock
//! and run in parallel with each other. An action returns only after its
//! lock is released, so a caller that queries right after a successful
//! action always sees its effect.
//!
//! Engine actions never leave partial state when they fail, so a poisoned
//! lock is recovered rather than propagated.
//!
//! Like `MatchRegistry`, the handle is generic over its `EventSink`. The
//! default collects events until `drain_events`; long-running hosts that
//! never drain should pass a forwarding or discarding sink to `with_sink`.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::registry::MatchRegistry;
use super::stats::PlayerStats;
use super::view::GameView;
use crate::board::Grid;
use crate::core::{ConfigError, EngineConfig, GameError, GameId, Principal};
use crate::events::{EventSink, GameEvent};
use crate::game::{BatchReport, Move, MoveReport};

/// Cloneable handle to one registry; `Send + Sync` whenever `S` is.
#[derive(Debug)]
pub struct SharedRegistry<S = Vec<GameEvent>> {
    inner: Arc<RwLock<MatchRegistry<S>>>,
}

impl<S> Clone for SharedRegistry<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl Default for SharedRegistry<Vec<GameEvent>> {
    fn default() -> Self {
        Self::from(MatchRegistry::new())
    }
}

impl SharedRegistry<Vec<GameEvent>> {
    /// Handle to a fresh default registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle to a fresh registry with `config`.
    pub fn with_config(config: EngineConfig) -> Result<Self, ConfigError> {
        Ok(Self::from(MatchRegistry::with_config(config)?))
    }

    /// Take all events emitted so far, oldest first.
    pub fn drain_events(&self) -> Vec<GameEvent> {
        self.write().drain_events()
    }
}

impl<S: EventSink> SharedRegistry<S> {
    /// Handle to a fresh registry with `config`, emitting into `sink`.
    pub fn with_sink(config: EngineConfig, sink: S) -> Result<Self, ConfigError> {
        Ok(Self::from(MatchRegistry::with_sink(config, sink)?))
    }

    fn read(&self) -> RwLockReadGuard<'_, MatchRegistry<S>> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, MatchRegistry<S>> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Run `f` with shared access, for queries not covered below.
    pub fn with_read<R>(&self, f: impl FnOnce(&MatchRegistry<S>) -> R) -> R {
        f(&self.read())
    }

    // === Actions ===

    pub fn create_game(&self, creator: Principal) -> Result<GameId, GameError> {
        self.write().create_game(creator)
    }

    pub fn create_practice_game(&self, creator: Principal) -> Result<GameId, GameError> {
        self.write().create_practice_game(creator)
    }

    pub fn join_game(&self, id: GameId, joiner: Principal) -> Result<(), GameError> {
        self.write().join_game(id, joiner)
    }

    pub fn cancel_game(&self, id: GameId, caller: Principal) -> Result<(), GameError> {
        self.write().cancel_game(id, caller)
    }

    pub fn make_move(&self, id: GameId, caller: Principal, x: usize, y: usize) -> Result<MoveReport, GameError> {
        self.write().make_move(id, caller, x, y)
    }

    pub fn make_batch_moves(
        &self,
        id: GameId,
        caller: Principal,
        xs: &[usize],
        ys: &[usize],
    ) -> Result<BatchReport, GameError> {
        self.write().make_batch_moves(id, caller, xs, ys)
    }

    // === Queries ===

    pub fn get_game(&self, id: GameId) -> Result<GameView, GameError> {
        self.read().get_game(id)
    }

    pub fn get_board(&self, id: GameId) -> Result<Grid, GameError> {
        self.read().get_board(id)
    }

    pub fn get_moves(&self, id: GameId) -> Result<Vec<Move>, GameError> {
        self.read().get_moves(id)
    }

    pub fn get_waiting_games(&self) -> Vec<GameId> {
        self.read().get_waiting_games()
    }

    pub fn get_player_games(&self, principal: Principal) -> Vec<GameId> {
        self.read().get_player_games(principal)
    }

    pub fn get_player_stats(&self, principal: Principal) -> PlayerStats {
        self.read().get_player_stats(principal)
    }
}

impl<S> From<MatchRegistry<S>> for SharedRegistry<S> {
    fn from(registry: MatchRegistry<S>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(registry)),
        }
    }
}
