//! Tests for the session controllers.

use gridplay::{
    ErrorKind, GameMode, ScoreTally, SessionError, SnakeConfig, SnakeSession, TicTacToeConfig,
    TicTacToeSession,
};
use gridplay_snake::{CrashKind, Heading, SnakeStatus};
use gridplay_tictactoe::{Coord, FirstAvailable, GreedyPolicy, Move, RoundStatus, Side};

fn two_human() -> TicTacToeSession {
    TicTacToeSession::new(TicTacToeConfig::default().with_seed(3)).unwrap()
}

fn play(session: &mut TicTacToeSession, cells: &[(usize, usize)]) {
    for &(row, col) in cells {
        let side = session.round().to_move().expect("round in progress");
        session.submit_move(side, Coord::new(row, col)).unwrap();
    }
}

const X_WINS: [(usize, usize); 5] = [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)];
const O_WINS: [(usize, usize); 6] = [(0, 0), (1, 0), (0, 1), (1, 1), (2, 2), (1, 2)];
const DRAW: [(usize, usize); 9] = [
    (0, 0),
    (1, 1),
    (0, 2),
    (0, 1),
    (1, 0),
    (1, 2),
    (2, 1),
    (2, 0),
    (2, 2),
];

#[test]
fn test_won_round_reports_line_and_scores() {
    let mut session = two_human();
    play(&mut session, &X_WINS);

    let view = session.current_view();
    assert_eq!(view.status, RoundStatus::Won(Side::X));
    assert_eq!(
        view.winning_cells,
        vec![Coord::new(0, 0), Coord::new(0, 1), Coord::new(0, 2)]
    );
    assert_eq!(session.current_score(), ScoreTally::new(1, 0, 0));
}

#[test]
fn test_move_after_terminal_leaves_tally() {
    let mut session = two_human();
    play(&mut session, &X_WINS);
    let before = session.current_view();

    let err = session.submit_move(Side::O, Coord::new(2, 2)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::RoundAlreadyOver);
    assert_eq!(session.current_view(), before);
    assert_eq!(session.current_score().total(), 1);
}

#[test]
fn test_rejected_moves_leave_round_unchanged() {
    let mut session = two_human();
    play(&mut session, &[(1, 1)]);
    let before = session.current_view();

    let occupied = session.submit_move(Side::O, Coord::new(1, 1)).unwrap_err();
    assert_eq!(occupied.kind(), ErrorKind::IllegalMove);

    let out = session.submit_move(Side::O, Coord::new(3, 1)).unwrap_err();
    assert_eq!(out.kind(), ErrorKind::OutOfBounds);

    let turn = session.submit_move(Side::X, Coord::new(0, 0)).unwrap_err();
    assert_eq!(turn.kind(), ErrorKind::IllegalMove);

    assert_eq!(session.current_view(), before);
}

#[test]
fn test_reset_then_rounds_counts_exactly() {
    let mut session = two_human();
    play(&mut session, &X_WINS);
    session.reset_scores();
    assert_eq!(session.current_score(), ScoreTally::default());

    for cells in [&X_WINS[..], &O_WINS[..], &DRAW[..], &X_WINS[..]] {
        session.start_new_round(GameMode::TwoHuman).unwrap();
        play(&mut session, cells);
        assert!(session.round().is_over());
    }
    assert_eq!(session.current_score(), ScoreTally::new(2, 1, 1));
}

#[test]
fn test_mode_switch_rebuilds_round() {
    let mut session = two_human();
    play(&mut session, &[(0, 0), (1, 1)]);

    let view = session.start_new_round(GameMode::HumanVsPolicy).unwrap();
    assert!(view.history.is_empty());
    assert_eq!(view.mode, GameMode::HumanVsPolicy);
    assert_eq!(view.board.filled(), 0);
}

#[test]
fn test_greedy_policy_blocks_through_session() {
    let mut session = TicTacToeSession::with_policy(
        TicTacToeConfig::default(),
        Box::new(GreedyPolicy::seeded(17)),
    )
    .unwrap();
    session.start_new_round(GameMode::HumanVsPolicy).unwrap();

    session.submit_move(Side::X, Coord::new(0, 0)).unwrap();
    let reply = session.round().history()[1].coord;
    let (second, threat) = [
        (Coord::new(0, 1), Coord::new(0, 2)),
        (Coord::new(1, 0), Coord::new(2, 0)),
        (Coord::new(1, 1), Coord::new(2, 2)),
    ]
    .into_iter()
    .find(|(cell, open)| *cell != reply && *open != reply)
    .expect("one line stays open");
    let view = session.submit_move(Side::X, second).unwrap();

    assert_eq!(view.history[3], Move::new(Side::O, threat));
}

#[test]
fn test_policy_side_wins_through_session() {
    let mut session =
        TicTacToeSession::with_policy(TicTacToeConfig::default(), Box::new(FirstAvailable))
            .unwrap();
    session.start_new_round(GameMode::HumanVsPolicy).unwrap();

    // FirstAvailable fills row 0 left to right while X plays elsewhere.
    session.submit_move(Side::X, Coord::new(2, 2)).unwrap();
    session.submit_move(Side::X, Coord::new(2, 1)).unwrap();
    let view = session.submit_move(Side::X, Coord::new(1, 1)).unwrap();

    assert_eq!(view.status, RoundStatus::Won(Side::O));
    assert_eq!(session.current_score(), ScoreTally::new(0, 1, 0));
}

#[test]
fn test_replay_replaces_round() {
    let mut session = two_human();
    let moves: Vec<Move> = X_WINS
        .iter()
        .enumerate()
        .map(|(i, &(row, col))| {
            let side = if i % 2 == 0 { Side::X } else { Side::O };
            Move::new(side, Coord::new(row, col))
        })
        .collect();

    let view = session.replay(&moves).unwrap();
    assert_eq!(view.status, RoundStatus::Won(Side::X));
    assert_eq!(view.history, moves);
    assert_eq!(session.current_score(), ScoreTally::new(1, 0, 0));
}

#[test]
fn test_invalid_dimensions_rejected() {
    let config = TicTacToeConfig::default().with_run_length(5);
    let err = TicTacToeSession::new(config).unwrap_err();
    assert!(matches!(err, SessionError::Dimensions(_)));
    assert_eq!(err.kind(), ErrorKind::InvalidSetup);
}

#[test]
fn test_oversized_board_rejected() {
    let config = TicTacToeConfig::default().with_board_size(usize::MAX);
    let err = TicTacToeSession::new(config).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidSetup);
}

#[test]
fn test_snake_session_crash_and_records() {
    let mut session =
        SnakeSession::new(SnakeConfig::default().with_grid_size(6).with_seed(8)).unwrap();
    session.submit_move(Heading::Up).unwrap();

    let mut view = session.current_view();
    while !view.is_over() {
        view = session.tick().unwrap();
    }
    assert_eq!(view.status, SnakeStatus::Crashed(CrashKind::Wall));
    assert_eq!(*view.records.rounds_played(), 1);

    let err = session.tick().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::RoundAlreadyOver);
    let err = session.submit_move(Heading::Left).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::RoundAlreadyOver);

    let fresh = session.start_new_round().unwrap();
    assert_eq!(fresh.status, SnakeStatus::Running);
    assert_eq!(fresh.length, 1);
    assert_eq!(*fresh.records.rounds_played(), 1);

    session.reset_scores();
    assert_eq!(*session.records().rounds_played(), 0);
}

#[test]
fn test_snake_reverse_heading_ignored() {
    let mut session = SnakeSession::new(SnakeConfig::default().with_seed(2)).unwrap();
    let view = session.submit_move(Heading::Left).unwrap();
    assert_eq!(view.heading, Heading::Right);
}
