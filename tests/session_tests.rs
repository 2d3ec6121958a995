//! Session driver tests: full games through the loop contract.

use rust_2048::core::{Direction, EngineConfig, GameState, ScriptedSource, SpawnPolicy};
use rust_2048::rules::BoardEngine;
use rust_2048::session::{RandomMoves, ScriptedMoves, Session, SessionEnd, TurnStatus};

/// Random playouts on a small board reach a terminal state.
#[test]
fn test_random_playout_terminates() {
    for seed in 0..10 {
        let config = EngineConfig::default().with_size(3).with_seed(seed);
        let mut session = Session::new(BoardEngine::new(config).unwrap()).unwrap();
        let mut moves = RandomMoves::new(seed + 100);

        let summary = session.run(&mut moves, 100_000);

        assert_eq!(summary.end, SessionEnd::Terminal);
        assert!(session.is_finished());
        assert!(session.state().is_terminal());
        assert_eq!(summary.score, session.state().score());
        assert_eq!(summary.max_tile, session.state().grid().max_tile());
        assert_eq!(session.history().len() as u32, summary.moves);
    }
}

/// The history's score deltas add up to the final score.
#[test]
fn test_history_accounts_for_score() {
    let config = EngineConfig::default().with_seed(5);
    let mut session = Session::new(BoardEngine::new(config).unwrap()).unwrap();
    let mut moves = RandomMoves::new(6);

    session.run(&mut moves, 300);

    let total: u64 = session.history().iter().map(|r| r.score_gained).sum();
    assert_eq!(total, session.state().score());

    let turns: Vec<u32> = session.history().iter().map(|r| r.turn).collect();
    let expected: Vec<u32> = (1..=session.history().len() as u32).collect();
    assert_eq!(turns, expected);
}

/// Stats line up with the history.
#[test]
fn test_stats_match_history() {
    let config = EngineConfig::default().with_seed(12).with_spawn_policy(SpawnPolicy::OnChange);
    let mut session = Session::new(BoardEngine::new(config).unwrap()).unwrap();
    let mut moves = RandomMoves::new(13);

    session.run(&mut moves, 200);

    let stats = session.stats();
    let history = session.history();
    assert_eq!(stats.moves as usize, history.len());
    assert_eq!(stats.noop_moves as usize, history.iter().filter(|r| !r.changed).count());

    let tiles_on_board = 16 - session.state().grid().count_empty() as u32;
    assert!(stats.spawns >= tiles_on_board);
}

/// Under `OnChange`, a no-op move is never followed by a spawn.
#[test]
fn test_on_change_spawns_only_after_change() {
    let config = EngineConfig::default().with_seed(77).with_spawn_policy(SpawnPolicy::OnChange);
    let mut session = Session::new(BoardEngine::new(config).unwrap()).unwrap();
    let mut moves = RandomMoves::new(78);

    session.run(&mut moves, 200);

    for pair in session.history().windows(2) {
        if !pair[0].changed {
            assert_eq!(pair[1].spawned, None);
        }
    }
}

/// Under `Always`, every move answers a turn that spawned while space remained.
#[test]
fn test_always_spawns_every_turn() {
    let config = EngineConfig::default().with_seed(3);
    let mut session = Session::new(BoardEngine::new(config).unwrap()).unwrap();
    let mut moves = ScriptedMoves::new([Direction::Up; 6]);

    session.run(&mut moves, 10);

    // Up repeated on a 4x4 board cannot fill the grid in six turns.
    assert!(session.history().iter().all(|r| r.spawned.is_some()));
}

/// Interactive-style loop with text input.
#[test]
fn test_text_driven_loop() {
    let config = EngineConfig::default().with_size(2);
    let engine = BoardEngine::with_source(config, ScriptedSource::first_cell(2)).unwrap();
    let mut session = Session::new(engine).unwrap();

    let inputs = ["a", "jump", "d", "w", "s"];
    let mut rejected = 0;

    for input in inputs {
        if let TurnStatus::Finished { .. } = session.begin_turn() {
            break;
        }
        if session.submit_token(input).is_err() {
            rejected += 1;
        }
    }

    assert_eq!(rejected, 1);
    assert_eq!(session.history().len(), 4);
    assert_eq!(session.history()[0].direction, Direction::Left);
    assert!(session.state().score() >= 4);
}

/// A resumed session picks up score and grid.
#[test]
fn test_resume_from_state() {
    let state = GameState::from_rows(&[[4, 4], [0, 0]], 100).unwrap();
    let engine = BoardEngine::with_source(EngineConfig::default().with_size(2), ScriptedSource::default()).unwrap();
    let mut session = Session::from_state(engine, state);

    session.begin_turn();
    session.submit(Direction::Right);

    assert_eq!(session.state().score(), 108);
    assert_eq!(session.stats().max_tile, 8);
    assert_eq!(session.into_state().grid().row(0), &[0, 8]);
}
