//! Core type bindings for Python.
//!
//! Principals cross the boundary as `0x`-prefixed hex strings, ids as
//! plain integers, and engine errors as `ValueError`.

use pyo3::prelude::*;

use crate::core::{GameError, GameId, Principal};
use crate::events::GameEvent;
use crate::registry::GameView;

pub(crate) fn value_error(e: impl std::fmt::Display) -> PyErr {
    PyErr::new::<pyo3::exceptions::PyValueError, _>(format!("{}", e))
}

pub(crate) fn game_error(e: GameError) -> PyErr {
    value_error(e)
}

pub(crate) fn parse_principal(text: &str) -> PyResult<Principal> {
    text.parse::<Principal>().map_err(value_error)
}

/// Python view of a match summary.
#[pyclass(name = "GameView", get_all)]
#[derive(Clone, Debug)]
pub struct PyGameView {
    pub id: u64,
    pub player1: String,
    pub player2: Option<String>,
    /// One of "Waiting", "Playing", "Finished", "Cancelled".
    pub status: String,
    pub current_player: Option<String>,
    pub winner: Option<String>,
    pub move_count: usize,
    pub is_practice_mode: bool,
}

#[pymethods]
impl PyGameView {
    fn __repr__(&self) -> String {
        format!(
            "GameView(id={}, status={}, moves={}, practice={})",
            self.id, self.status, self.move_count, self.is_practice_mode
        )
    }
}

impl From<GameView> for PyGameView {
    fn from(view: GameView) -> Self {
        Self {
            id: view.id.raw(),
            player1: view.player1.to_string(),
            player2: view.player2.map(|p| p.to_string()),
            status: format!("{:?}", view.status),
            current_player: view.current_player.map(|p| p.to_string()),
            winner: view.winner.map(|p| p.to_string()),
            move_count: view.move_count,
            is_practice_mode: view.is_practice_mode,
        }
    }
}

/// Python view of an emitted event.
///
/// Fields that do not apply to `kind` are `None`.
#[pyclass(name = "GameEvent", get_all)]
#[derive(Clone, Debug, Default)]
pub struct PyGameEvent {
    /// "GameCreated", "GameJoined", "GameCancelled", "MoveMade" or "GameFinished".
    pub kind: String,
    pub id: u64,
    pub player: Option<String>,
    pub joiner: Option<String>,
    pub x: Option<u8>,
    pub y: Option<u8>,
    /// 1 black, 2 white.
    pub piece: Option<u8>,
    pub winner: Option<String>,
    pub is_draw: Option<bool>,
}

#[pymethods]
impl PyGameEvent {
    fn __repr__(&self) -> String {
        format!("GameEvent(kind={}, id={})", self.kind, self.id)
    }
}

impl From<GameEvent> for PyGameEvent {
    fn from(event: GameEvent) -> Self {
        let id = event.game_id().raw();
        match event {
            GameEvent::GameCreated { creator, .. } => Self {
                kind: "GameCreated".into(),
                id,
                player: Some(creator.to_string()),
                ..Self::default()
            },
            GameEvent::GameJoined { creator, joiner, .. } => Self {
                kind: "GameJoined".into(),
                id,
                player: Some(creator.to_string()),
                joiner: Some(joiner.to_string()),
                ..Self::default()
            },
            GameEvent::GameCancelled { .. } => Self {
                kind: "GameCancelled".into(),
                id,
                ..Self::default()
            },
            GameEvent::MoveMade { player, x, y, piece, .. } => Self {
                kind: "MoveMade".into(),
                id,
                player: Some(player.to_string()),
                x: Some(x),
                y: Some(y),
                piece: Some(piece.as_u8()),
                ..Self::default()
            },
            GameEvent::GameFinished { winner, is_draw, .. } => Self {
                kind: "GameFinished".into(),
                id,
                winner: winner.map(|p| p.to_string()),
                is_draw: Some(is_draw),
                ..Self::default()
            },
        }
    }
}

pub(crate) fn game_id(id: u64) -> GameId {
    GameId::new(id)
}
