//! Board model and line detection.
//!
//! - `cell`: `Cell` and `Piece`
//! - `grid`: the `Board` value type
//! - `win`: `WinDetector`, the four-direction run scan

pub mod cell;
pub mod grid;
pub mod win;

pub use cell::{Cell, Piece};
pub use grid::{Board, Grid};
pub use win::{Direction, WinDetector};
