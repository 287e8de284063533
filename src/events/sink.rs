//! Event delivery.
//!
//! The registry is generic over an `EventSink`, so where its notifications
//! go is part of its type rather than a hidden side effect. Events are
//! delivered only after the action that produced them has committed.

use super::event::GameEvent;

/// Receiver of registry notifications.
pub trait EventSink {
    /// Deliver one event.
    fn emit(&mut self, event: GameEvent);
}

/// Collects events in order; drain with `std::mem::take` or the
/// registry's `drain_events`.
impl EventSink for Vec<GameEvent> {
    fn emit(&mut self, event: GameEvent) {
        self.push(event);
    }
}

/// Discards every event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NullSink;

impl EventSink for NullSink {
    fn emit(&mut self, _event: GameEvent) {}
}

/// Forward to a closure, for hosts that push events onward as they
/// happen.
///
/// ```
/// use gomoku_engine::core::GameId;
/// use gomoku_engine::events::{EventSink, FnSink, GameEvent};
///
/// let mut count = 0;
/// let mut sink = FnSink(|_event: GameEvent| count += 1);
/// sink.emit(GameEvent::GameCancelled { id: GameId::FIRST });
/// drop(sink);
/// assert_eq!(count, 1);
/// ```
pub struct FnSink<F>(pub F);

impl<F: FnMut(GameEvent)> EventSink for FnSink<F> {
    fn emit(&mut self, event: GameEvent) {
        (self.0)(event);
    }
}
