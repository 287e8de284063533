//! The match registry: every action and query goes through here.
//!
//! `MatchRegistry` owns all matches, allocates ids, keeps the waiting list
//! and per-principal index current, settles finished matches into the
//! `StatsLedger`, and emits a `GameEvent` for every state change.
//!
//! All state is owned by the registry value; there are no globals. Hosts
//! create one registry and pass it (or a `SharedRegistry` handle) to
//! whatever drives the engine.

use im::OrdSet;
use rustc_hash::FxHashMap;
use tracing::{debug, info, instrument};

use super::stats::{PlayerStats, StatsLedger};
use super::view::GameView;
use crate::board::{Cell, Grid, WinDetector};
use crate::core::{ConfigError, EngineConfig, GameError, GameId, Principal};
use crate::events::{EventSink, GameEvent};
use crate::game::{BatchReport, GameResult, Match, Move, MoveReport};

/// Registry of all matches.
///
/// ## Example
///
/// ```
/// use gomoku_engine::core::Principal;
/// use gomoku_engine::game::MatchStatus;
/// use gomoku_engine::registry::MatchRegistry;
///
/// let (alice, bob) = (Principal::from_index(1), Principal::from_index(2));
/// let mut registry = MatchRegistry::new();
///
/// let id = registry.create_game(alice).unwrap();
/// registry.join_game(id, bob).unwrap();
/// registry.make_move(id, alice, 7, 7).unwrap();
///
/// let game = registry.get_game(id).unwrap();
/// assert_eq!(game.status, MatchStatus::Playing);
/// assert_eq!(game.current_player, Some(bob));
/// ```
#[derive(Debug)]
pub struct MatchRegistry<S = Vec<GameEvent>> {
    config: EngineConfig,
    detector: WinDetector,
    matches: FxHashMap<GameId, Match>,
    next_id: GameId,
    /// Ids of waiting matches; id order is creation order.
    waiting: OrdSet<GameId>,
    player_games: FxHashMap<Principal, Vec<GameId>>,
    ledger: StatsLedger,
    sink: S,
}

impl MatchRegistry<Vec<GameEvent>> {
    /// Registry with the default configuration, collecting events.
    #[must_use]
    pub fn new() -> Self {
        Self::build(EngineConfig::default(), Vec::new())
    }

    /// Registry with `config`, collecting events.
    pub fn with_config(config: EngineConfig) -> Result<Self, ConfigError> {
        Self::with_sink(config, Vec::new())
    }

    /// Take all events emitted so far, oldest first.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.sink)
    }
}

impl Default for MatchRegistry<Vec<GameEvent>> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: EventSink> MatchRegistry<S> {
    /// Registry with `config`, emitting into `sink`.
    pub fn with_sink(config: EngineConfig, sink: S) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config, sink))
    }

    fn build(config: EngineConfig, sink: S) -> Self {
        Self {
            detector: WinDetector::new(config.win_length),
            config,
            matches: FxHashMap::default(),
            next_id: GameId::FIRST,
            waiting: OrdSet::new(),
            player_games: FxHashMap::default(),
            ledger: StatsLedger::new(),
            sink,
        }
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    // === Actions ===

    /// Open a match and wait for an opponent.
    #[instrument(skip_all, fields(creator = %creator))]
    pub fn create_game(&mut self, creator: Principal) -> Result<GameId, GameError> {
        creator.ensure_valid()?;

        let id = self.alloc_id();
        self.matches.insert(id, Match::new(id, creator, self.detector));
        self.player_games.entry(creator).or_default().push(id);
        self.waiting.insert(id);

        info!(%id, "game created");
        self.sink.emit(GameEvent::GameCreated { id, creator });
        Ok(id)
    }

    /// Start a practice match in which `creator` plays both colours.
    #[instrument(skip_all, fields(creator = %creator))]
    pub fn create_practice_game(&mut self, creator: Principal) -> Result<GameId, GameError> {
        creator.ensure_valid()?;
        if !self.config.allow_practice {
            return Err(GameError::PracticeDisabled);
        }

        let id = self.alloc_id();
        self.matches.insert(id, Match::new_practice(id, creator, self.detector));
        self.player_games.entry(creator).or_default().push(id);

        info!(%id, "practice game created");
        self.sink.emit(GameEvent::GameCreated { id, creator });
        self.sink.emit(GameEvent::GameJoined {
            id,
            creator,
            joiner: creator,
        });
        Ok(id)
    }

    /// Take the second seat of a waiting match.
    #[instrument(skip_all, fields(id = %id, joiner = %joiner))]
    pub fn join_game(&mut self, id: GameId, joiner: Principal) -> Result<(), GameError> {
        joiner.ensure_valid()?;
        let game = self.matches.get_mut(&id).ok_or(GameError::GameNotFound(id))?;
        game.join(joiner).inspect_err(|error| debug!(%error, "join rejected"))?;
        let creator = game.player1();

        self.waiting.remove(&id);
        self.player_games.entry(joiner).or_default().push(id);

        info!("game joined");
        self.sink.emit(GameEvent::GameJoined { id, creator, joiner });
        Ok(())
    }

    /// Withdraw a waiting match.
    #[instrument(skip_all, fields(id = %id, caller = %caller))]
    pub fn cancel_game(&mut self, id: GameId, caller: Principal) -> Result<(), GameError> {
        let game = self.matches.get_mut(&id).ok_or(GameError::GameNotFound(id))?;
        game.cancel(caller).inspect_err(|error| debug!(%error, "cancel rejected"))?;

        self.waiting.remove(&id);

        info!("game cancelled");
        self.sink.emit(GameEvent::GameCancelled { id });
        Ok(())
    }

    /// Place the next stone in match `id`.
    #[instrument(skip_all, fields(id = %id, caller = %caller, x = x, y = y))]
    pub fn make_move(&mut self, id: GameId, caller: Principal, x: usize, y: usize) -> Result<MoveReport, GameError> {
        let game = self.matches.get_mut(&id).ok_or(GameError::GameNotFound(id))?;
        let report = game
            .make_move(caller, x, y)
            .inspect_err(|error| debug!(%error, "move rejected"))?;

        debug!(piece = %report.mv.piece, sequence = report.mv.sequence, "move accepted");
        self.sink.emit(GameEvent::move_made(id, &report.mv));
        if let Some(result) = report.result {
            Self::settle(&mut self.ledger, &mut self.sink, game, result);
        }
        Ok(report)
    }

    /// Place several stones in one atomic step.
    ///
    /// Rejected as a whole, with no state change, if any move would be
    /// rejected. A move that ends the match commits the batch up to it.
    #[instrument(skip_all, fields(id = %id, caller = %caller, len = xs.len()))]
    pub fn make_batch_moves(
        &mut self,
        id: GameId,
        caller: Principal,
        xs: &[usize],
        ys: &[usize],
    ) -> Result<BatchReport, GameError> {
        if xs.len() != ys.len() {
            return Err(GameError::LengthMismatch {
                xs: xs.len(),
                ys: ys.len(),
            });
        }
        if xs.len() > self.config.max_batch_moves {
            return Err(GameError::BatchTooLarge {
                len: xs.len(),
                max: self.config.max_batch_moves,
            });
        }

        let game = self.matches.get_mut(&id).ok_or(GameError::GameNotFound(id))?;
        let report = game
            .make_batch_moves(caller, xs, ys)
            .inspect_err(|error| debug!(%error, "batch rejected"))?;

        debug!(applied = report.moves.len(), skipped = report.skipped, "batch accepted");
        for mv in &report.moves {
            self.sink.emit(GameEvent::move_made(id, mv));
        }
        if let Some(result) = report.result {
            Self::settle(&mut self.ledger, &mut self.sink, game, result);
        }
        Ok(report)
    }

    // === Queries ===

    /// Summary record of a match.
    pub fn get_game(&self, id: GameId) -> Result<GameView, GameError> {
        self.get_match(id).map(GameView::from)
    }

    /// Full match state.
    pub fn get_match(&self, id: GameId) -> Result<&Match, GameError> {
        self.matches.get(&id).ok_or(GameError::GameNotFound(id))
    }

    /// Board of a match, indexed `[x][y]`.
    pub fn get_board(&self, id: GameId) -> Result<Grid, GameError> {
        Ok(*self.get_match(id)?.board().cells())
    }

    /// One cell of a match's board.
    pub fn get_cell(&self, id: GameId, x: usize, y: usize) -> Result<Cell, GameError> {
        self.get_match(id)?.cell(x, y)
    }

    /// Move log of a match, oldest first.
    pub fn get_moves(&self, id: GameId) -> Result<Vec<Move>, GameError> {
        Ok(self.get_match(id)?.moves().iter().copied().collect())
    }

    /// Matches waiting for an opponent, oldest first.
    #[must_use]
    pub fn get_waiting_games(&self) -> Vec<GameId> {
        self.waiting.iter().copied().collect()
    }

    /// Matches `principal` created or joined, oldest first.
    #[must_use]
    pub fn get_player_games(&self, principal: Principal) -> Vec<GameId> {
        self.player_games.get(&principal).cloned().unwrap_or_default()
    }

    /// Lifetime counters of `principal`.
    #[must_use]
    pub fn get_player_stats(&self, principal: Principal) -> PlayerStats {
        self.ledger.get_stats(principal)
    }

    /// Number of matches ever created.
    #[must_use]
    pub fn game_count(&self) -> usize {
        self.matches.len()
    }

    #[must_use]
    pub fn ledger(&self) -> &StatsLedger {
        &self.ledger
    }

    // === Internals ===

    fn alloc_id(&mut self) -> GameId {
        let id = self.next_id;
        self.next_id = id.next();
        id
    }

    /// Record a finished match. Practice matches and draws leave the
    /// ledger alone.
    fn settle(ledger: &mut StatsLedger, sink: &mut S, game: &Match, result: GameResult) {
        let id = game.id();
        match result {
            GameResult::Winner(winner) => {
                info!(%id, %winner, "game won");
                if let Some(loser) = game.seating().opponent_of(winner) {
                    ledger.record_result(winner, loser);
                }
            }
            GameResult::Draw => info!(%id, "game drawn"),
        }
        sink.emit(GameEvent::finished(id, result));
    }
}
