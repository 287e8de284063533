//! Match registry, statistics and the external query surface.
//!
//! - `registry`: `MatchRegistry`, which routes every action and query
//! - `stats`: `StatsLedger` lifetime win/loss counters
//! - `view`: `GameView`, the fixed record returned by `get_game`
//! - `shared`: `SharedRegistry`, a thread-safe handle

#[allow(clippy::module_inception)]
pub mod registry;
pub mod shared;
pub mod stats;
pub mod view;

pub use registry::MatchRegistry;
pub use shared::SharedRegistry;
pub use stats::{PlayerStats, StatsLedger};
pub use view::GameView;
