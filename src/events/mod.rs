//! Match notifications.
//!
//! - `event`: the `GameEvent` variants
//! - `sink`: `EventSink`, the observer interface the registry emits into

pub mod event;
pub mod sink;

pub use event::GameEvent;
pub use sink::{EventSink, FnSink, NullSink};
