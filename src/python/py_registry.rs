//! Registry bindings for Python.

use pyo3::prelude::*;

use crate::core::EngineConfig;
use crate::registry::MatchRegistry;

use super::py_core::{game_error, game_id, parse_principal, value_error, PyGameEvent, PyGameView};

/// Python wrapper for MatchRegistry.
///
/// One instance holds any number of independent matches.
#[pyclass(name = "MatchRegistry")]
pub struct PyMatchRegistry {
    inner: MatchRegistry,
}

#[pymethods]
impl PyMatchRegistry {
    /// Create a registry.
    ///
    /// # Arguments
    /// - win_length: run length that wins (overlines also win)
    /// - max_batch_moves: longest accepted batch
    /// - allow_practice: whether practice games may be created
    #[new]
    #[pyo3(signature = (win_length = 5, max_batch_moves = 225, allow_practice = true))]
    fn new(win_length: usize, max_batch_moves: usize, allow_practice: bool) -> PyResult<Self> {
        let mut config = EngineConfig::new()
            .with_win_length(win_length)
            .with_max_batch_moves(max_batch_moves);
        if !allow_practice {
            config = config.without_practice();
        }
        let inner = MatchRegistry::with_config(config).map_err(value_error)?;
        Ok(Self { inner })
    }

    fn create_game(&mut self, creator: &str) -> PyResult<u64> {
        let creator = parse_principal(creator)?;
        self.inner.create_game(creator).map(|id| id.raw()).map_err(game_error)
    }

    fn create_practice_game(&mut self, creator: &str) -> PyResult<u64> {
        let creator = parse_principal(creator)?;
        self.inner
            .create_practice_game(creator)
            .map(|id| id.raw())
            .map_err(game_error)
    }

    fn join_game(&mut self, id: u64, joiner: &str) -> PyResult<()> {
        let joiner = parse_principal(joiner)?;
        self.inner.join_game(game_id(id), joiner).map_err(game_error)
    }

    fn cancel_game(&mut self, id: u64, caller: &str) -> PyResult<()> {
        let caller = parse_principal(caller)?;
        self.inner.cancel_game(game_id(id), caller).map_err(game_error)
    }

    /// Place a stone. Returns True if the move ended the game.
    fn make_move(&mut self, id: u64, caller: &str, x: usize, y: usize) -> PyResult<bool> {
        let caller = parse_principal(caller)?;
        self.inner
            .make_move(game_id(id), caller, x, y)
            .map(|report| report.result.is_some())
            .map_err(game_error)
    }

    /// Place several stones atomically. Returns the number placed.
    fn make_batch_moves(&mut self, id: u64, caller: &str, xs: Vec<usize>, ys: Vec<usize>) -> PyResult<usize> {
        let caller = parse_principal(caller)?;
        self.inner
            .make_batch_moves(game_id(id), caller, &xs, &ys)
            .map(|report| report.moves.len())
            .map_err(game_error)
    }

    fn get_game(&self, id: u64) -> PyResult<PyGameView> {
        self.inner.get_game(game_id(id)).map(PyGameView::from).map_err(game_error)
    }

    /// Board as rows of 0 (empty), 1 (black), 2 (white).
    fn get_board(&self, id: u64) -> PyResult<Vec<Vec<u8>>> {
        let grid = self.inner.get_match(game_id(id)).map_err(game_error)?.board().to_u8_grid();
        Ok(grid.iter().map(|row| row.to_vec()).collect())
    }

    /// Moves as (x, y, player, piece, sequence) tuples.
    fn get_moves(&self, id: u64) -> PyResult<Vec<(u8, u8, String, u8, u32)>> {
        let moves = self.inner.get_moves(game_id(id)).map_err(game_error)?;
        Ok(moves
            .into_iter()
            .map(|mv| (mv.x, mv.y, mv.player.to_string(), mv.piece.as_u8(), mv.sequence))
            .collect())
    }

    fn get_waiting_games(&self) -> Vec<u64> {
        self.inner.get_waiting_games().into_iter().map(|id| id.raw()).collect()
    }

    fn get_player_games(&self, principal: &str) -> PyResult<Vec<u64>> {
        let principal = parse_principal(principal)?;
        Ok(self
            .inner
            .get_player_games(principal)
            .into_iter()
            .map(|id| id.raw())
            .collect())
    }

    /// (wins, losses) for a principal.
    fn get_player_stats(&self, principal: &str) -> PyResult<(u64, u64)> {
        let principal = parse_principal(principal)?;
        Ok(self.inner.get_player_stats(principal).into())
    }

    /// Take all events emitted so far, oldest first.
    fn drain_events(&mut self) -> Vec<PyGameEvent> {
        self.inner.drain_events().into_iter().map(PyGameEvent::from).collect()
    }

    #[getter]
    fn game_count(&self) -> usize {
        self.inner.game_count()
    }

    fn __repr__(&self) -> String {
        format!(
            "MatchRegistry(games={}, waiting={})",
            self.inner.game_count(),
            self.inner.get_waiting_games().len()
        )
    }
}
