//! Python bindings for the gomoku engine.
//!
//! Lets a Python harness or bot drive matches directly.
//!
//! # Quick Start
//!
//! ```python
//! import gomoku_engine as gomoku
//!
//! alice = "0x" + "00" * 19 + "01"
//! bob = "0x" + "00" * 19 + "02"
//!
//! registry = gomoku.MatchRegistry()
//! game = registry.create_game(alice)
//! registry.join_game(game, bob)
//! registry.make_move(game, alice, 7, 7)
//!
//! print(registry.get_game(game).current_player)  # bob
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_registry;

pub use py_core::*;
pub use py_registry::*;

/// gomoku_engine: authoritative Gomoku match engine.
#[pymodule]
fn gomoku_engine(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyMatchRegistry>()?;
    m.add_class::<PyGameView>()?;
    m.add_class::<PyGameEvent>()?;
    Ok(())
}
