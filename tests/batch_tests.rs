//! Batch move tests: all-or-nothing application and early finish.

use gomoku_engine::board::{Cell, Piece};
use gomoku_engine::core::{EngineConfig, GameError, GameId, Principal};
use gomoku_engine::events::GameEvent;
use gomoku_engine::game::{GameResult, MatchStatus};
use gomoku_engine::registry::MatchRegistry;

fn alice() -> Principal {
    Principal::from_index(1)
}

fn bob() -> Principal {
    Principal::from_index(2)
}

fn practice() -> (MatchRegistry, GameId) {
    let mut registry = MatchRegistry::new();
    let id = registry.create_practice_game(alice()).unwrap();
    registry.drain_events();
    (registry, id)
}

// =============================================================================
// Validation
// =============================================================================

#[test]
fn test_length_mismatch_rejected() {
    let (mut registry, id) = practice();
    assert_eq!(
        registry.make_batch_moves(id, alice(), &[0, 1], &[0]),
        Err(GameError::LengthMismatch { xs: 2, ys: 1 })
    );
}

#[test]
fn test_length_mismatch_checked_before_lookup() {
    let mut registry = MatchRegistry::new();
    assert_eq!(
        registry.make_batch_moves(GameId::new(42), alice(), &[0], &[]),
        Err(GameError::LengthMismatch { xs: 1, ys: 0 })
    );
}

#[test]
fn test_oversized_batch_rejected() {
    let mut registry = MatchRegistry::with_config(EngineConfig::new().with_max_batch_moves(3)).unwrap();
    let id = registry.create_practice_game(alice()).unwrap();

    assert_eq!(
        registry.make_batch_moves(id, alice(), &[0, 0, 0, 0], &[0, 1, 2, 3]),
        Err(GameError::BatchTooLarge { len: 4, max: 3 })
    );
    assert_eq!(registry.get_game(id).unwrap().move_count, 0);
}

#[test]
fn test_batch_on_waiting_game_rejected() {
    let mut registry = MatchRegistry::new();
    let id = registry.create_game(alice()).unwrap();
    assert_eq!(
        registry.make_batch_moves(id, alice(), &[0], &[0]),
        Err(GameError::GameNotPlaying)
    );
}

// =============================================================================
// Atomicity
// =============================================================================

#[test]
fn test_occupied_cell_mid_batch_rolls_back_everything() {
    let (mut registry, id) = practice();
    registry.make_move(id, alice(), 7, 7).unwrap();
    registry.drain_events();

    let result = registry.make_batch_moves(id, alice(), &[0, 1, 7, 2, 3], &[0, 1, 7, 2, 3]);

    assert_eq!(result, Err(GameError::CellOccupied { x: 7, y: 7 }));
    assert_eq!(registry.get_game(id).unwrap().move_count, 1);
    assert_eq!(registry.get_cell(id, 0, 0), Ok(Cell::Empty));
    assert_eq!(registry.get_cell(id, 1, 1), Ok(Cell::Empty));
    assert_eq!(registry.get_moves(id).unwrap().len(), 1);
    assert!(registry.drain_events().is_empty());
}

#[test]
fn test_invalid_coordinate_mid_batch_rolls_back_everything() {
    let (mut registry, id) = practice();
    let result = registry.make_batch_moves(id, alice(), &[0, 15], &[0, 0]);

    assert_eq!(result, Err(GameError::InvalidCoordinate { x: 15, y: 0 }));
    assert_eq!(registry.get_game(id).unwrap().move_count, 0);
}

#[test]
fn test_duplicate_cell_within_batch_rejected() {
    let (mut registry, id) = practice();
    let result = registry.make_batch_moves(id, alice(), &[4, 4], &[4, 4]);

    assert_eq!(result, Err(GameError::CellOccupied { x: 4, y: 4 }));
    assert_eq!(registry.get_cell(id, 4, 4), Ok(Cell::Empty));
}

#[test]
fn test_duel_batch_fails_on_opponents_turn() {
    let mut registry = MatchRegistry::new();
    let id = registry.create_game(alice()).unwrap();
    registry.join_game(id, bob()).unwrap();

    let result = registry.make_batch_moves(id, alice(), &[7, 7], &[7, 8]);

    assert_eq!(result, Err(GameError::NotYourTurn));
    assert_eq!(registry.get_game(id).unwrap().move_count, 0);
}

#[test]
fn test_duel_single_move_batch_allowed() {
    let mut registry = MatchRegistry::new();
    let id = registry.create_game(alice()).unwrap();
    registry.join_game(id, bob()).unwrap();

    let report = registry.make_batch_moves(id, alice(), &[7], &[7]).unwrap();
    assert_eq!(report.moves.len(), 1);
    assert_eq!(registry.get_game(id).unwrap().current_player, Some(bob()));
}

// =============================================================================
// Successful batches
// =============================================================================

#[test]
fn test_practice_batch_alternates_colours() {
    let (mut registry, id) = practice();
    let report = registry
        .make_batch_moves(id, alice(), &[7, 7, 8], &[7, 8, 8])
        .unwrap();

    assert_eq!(report.moves.len(), 3);
    assert_eq!(report.skipped, 0);
    assert_eq!(report.result, None);
    assert_eq!(registry.get_cell(id, 7, 7), Ok(Cell::Black));
    assert_eq!(registry.get_cell(id, 7, 8), Ok(Cell::White));
    assert_eq!(registry.get_cell(id, 8, 8), Ok(Cell::Black));

    let events = registry.drain_events();
    assert_eq!(events.len(), 3);
    assert!(matches!(
        events[1],
        GameEvent::MoveMade { x: 7, y: 8, piece: Piece::White, .. }
    ));
}

#[test]
fn test_empty_batch_is_a_no_op() {
    let (mut registry, id) = practice();
    let report = registry.make_batch_moves(id, alice(), &[], &[]).unwrap();

    assert!(report.moves.is_empty());
    assert_eq!(report.result, None);
    assert_eq!(registry.get_game(id).unwrap().move_count, 0);
    assert!(registry.drain_events().is_empty());
}

#[test]
fn test_win_mid_batch_commits_prefix_and_skips_rest() {
    let (mut registry, id) = practice();
    // Black: (7,3)..(7,6). White: (0,0)..(0,2). Next to move is White.
    registry
        .make_batch_moves(id, alice(), &[7, 0, 7, 0, 7, 0, 7], &[3, 0, 4, 1, 5, 2, 6])
        .unwrap();
    registry.drain_events();

    let report = registry
        .make_batch_moves(id, alice(), &[1, 7, 2, 3, 4], &[0, 7, 0, 0, 0])
        .unwrap();

    assert_eq!(report.moves.len(), 2);
    assert_eq!(report.skipped, 3);
    assert_eq!(report.result, Some(GameResult::Winner(alice())));

    let game = registry.get_game(id).unwrap();
    assert_eq!(game.status, MatchStatus::Finished);
    assert_eq!(game.move_count, 9);
    assert_eq!(registry.get_cell(id, 2, 0), Ok(Cell::Empty));

    let events = registry.drain_events();
    assert_eq!(events.len(), 3);
    assert_eq!(
        events[2],
        GameEvent::GameFinished {
            id,
            winner: Some(alice()),
            is_draw: false,
        }
    );
}

#[test]
fn test_batch_after_finish_rejected() {
    let (mut registry, id) = practice();
    registry
        .make_batch_moves(id, alice(), &[7, 0, 7, 0, 7, 0, 7, 0, 7], &[3, 0, 4, 1, 5, 2, 6, 3, 7])
        .unwrap();
    assert_eq!(registry.get_game(id).unwrap().status, MatchStatus::Finished);

    assert_eq!(
        registry.make_batch_moves(id, alice(), &[9], &[9]),
        Err(GameError::GameNotPlaying)
    );
    assert_eq!(
        registry.make_batch_moves(id, alice(), &[], &[]),
        Err(GameError::GameNotPlaying)
    );
}
