//! Concurrency tests for the thread-safe registry handle.

use std::sync::mpsc;
use std::thread;

use gomoku_engine::core::{EngineConfig, GameError, GameId, Principal};
use gomoku_engine::events::{FnSink, GameEvent, NullSink};
use gomoku_engine::game::{GameResult, MatchStatus};
use gomoku_engine::registry::SharedRegistry;

/// Stones per colour placed by each practice thread, short of a winning run.
const STONES_PER_COLOUR: usize = 4;

#[test]
fn test_concurrent_creation_allocates_unique_ids() {
    let registry = SharedRegistry::new();

    let handles: Vec<_> = (1..=8u64)
        .map(|n| {
            let registry = registry.clone();
            thread::spawn(move || {
                (0..25)
                    .map(|_| registry.create_game(Principal::from_index(n)).unwrap())
                    .collect::<Vec<GameId>>()
            })
        })
        .collect();

    let mut ids: Vec<GameId> = handles.into_iter().flat_map(|h| h.join().unwrap()).collect();
    ids.sort();
    ids.dedup();

    assert_eq!(ids.len(), 200);
    assert_eq!(ids.first(), Some(&GameId::new(1)));
    assert_eq!(ids.last(), Some(&GameId::new(200)));
    assert_eq!(registry.get_waiting_games().len(), 200);
}

#[test]
fn test_racing_joiners_only_one_wins() {
    let registry = SharedRegistry::new();
    let id = registry.create_game(Principal::from_index(1)).unwrap();

    let handles: Vec<_> = (2..=9u64)
        .map(|n| {
            let registry = registry.clone();
            thread::spawn(move || registry.join_game(id, Principal::from_index(n)))
        })
        .collect();

    let results: Vec<Result<(), GameError>> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    let joined = results.iter().filter(|r| r.is_ok()).count();

    assert_eq!(joined, 1);
    assert!(results
        .iter()
        .filter_map(|r| r.as_ref().err())
        .all(|e| *e == GameError::AlreadyFull));
    assert_eq!(registry.get_game(id).unwrap().status, MatchStatus::Playing);
}

#[test]
fn test_independent_matches_progress_in_parallel() {
    let registry = SharedRegistry::new();

    let handles: Vec<_> = (0..4u64)
        .map(|n| {
            let registry = registry.clone();
            thread::spawn(move || {
                let owner = Principal::from_index(n + 1);
                let id = registry.create_practice_game(owner).unwrap();
                for y in 0..STONES_PER_COLOUR {
                    registry.make_move(id, owner, 0, y).unwrap();
                    registry.make_move(id, owner, 1, y).unwrap();
                }
                id
            })
        })
        .collect();

    for handle in handles {
        let id = handle.join().unwrap();
        assert_eq!(registry.get_game(id).unwrap().move_count, 2 * STONES_PER_COLOUR);
        assert_eq!(registry.get_moves(id).unwrap().len(), 2 * STONES_PER_COLOUR);
    }
}

#[test]
fn test_reader_sees_completed_write() {
    let registry = SharedRegistry::new();
    let writer = registry.clone();

    let id = thread::spawn(move || {
        let id = writer.create_game(Principal::from_index(1)).unwrap();
        writer.join_game(id, Principal::from_index(2)).unwrap();
        id
    })
    .join()
    .unwrap();

    let view = registry.get_game(id).unwrap();
    assert_eq!(view.player2, Some(Principal::from_index(2)));
    assert_eq!(registry.drain_events().len(), 2);
}

// =============================================================================
// Pluggable sinks
// =============================================================================

#[test]
fn test_null_sink_duel_across_threads() {
    let registry = SharedRegistry::with_sink(EngineConfig::default(), NullSink).unwrap();
    let (alice, bob) = (Principal::from_index(1), Principal::from_index(2));
    let id = registry.create_game(alice).unwrap();
    registry.join_game(id, bob).unwrap();

    for i in 0..4 {
        let black = registry.clone();
        thread::spawn(move || black.make_move(id, alice, 7, 3 + i).unwrap())
            .join()
            .unwrap();
        let white = registry.clone();
        thread::spawn(move || white.make_move(id, bob, 0, i).unwrap())
            .join()
            .unwrap();
    }
    let report = registry.make_move(id, alice, 7, 7).unwrap();

    assert_eq!(report.result, Some(GameResult::Winner(alice)));
    assert_eq!(registry.get_game(id).unwrap().status, MatchStatus::Finished);
    assert_eq!(registry.get_player_stats(alice).wins, 1);
}

#[test]
fn test_channel_sink_forwards_events_as_they_happen() {
    let (tx, rx) = mpsc::channel::<GameEvent>();
    let sink = FnSink(move |event: GameEvent| {
        let _ = tx.send(event);
    });
    let registry = SharedRegistry::with_sink(EngineConfig::default(), sink).unwrap();

    let handles: Vec<_> = (1..=4u64)
        .map(|n| {
            let registry = registry.clone();
            thread::spawn(move || {
                let owner = Principal::from_index(n);
                let id = registry.create_practice_game(owner).unwrap();
                registry.make_move(id, owner, 7, 7).unwrap();
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    // Created, joined and one move per practice game.
    let events: Vec<GameEvent> = rx.try_iter().collect();
    assert_eq!(events.len(), 12);
    assert_eq!(events.iter().filter(|e| matches!(e, GameEvent::MoveMade { .. })).count(), 4);
}
