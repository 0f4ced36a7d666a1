//! Tests for cross-round tallies.

use gridplay::{ScoreBoard, ScoreBucket, ScoreTally};
use gridplay_tictactoe::{Outcome, Side};
use strum::IntoEnumIterator;

#[test]
fn test_each_result_counts_once() {
    let mut board = ScoreBoard::new();
    let results = [
        Outcome::Winner(Side::O),
        Outcome::Draw,
        Outcome::Winner(Side::X),
        Outcome::Winner(Side::O),
        Outcome::Draw,
    ];
    for outcome in results {
        board.record_result(outcome);
    }

    let tally = board.snapshot();
    assert_eq!(tally, ScoreTally::new(1, 2, 2));
    assert_eq!(tally.total(), results.len() as u32);
    let summed: u32 = ScoreBucket::iter().map(|b| tally.get(b)).sum();
    assert_eq!(summed, tally.total());
}

#[test]
fn test_reset_zeroes_every_bucket() {
    let mut board = ScoreBoard::new();
    board.record_result(Outcome::Winner(Side::X));
    board.record_result(Outcome::Draw);
    board.reset();

    for bucket in ScoreBucket::iter() {
        assert_eq!(board.count(bucket), 0);
    }
    board.record_result(Outcome::Winner(Side::O));
    assert_eq!(board.snapshot(), ScoreTally::new(0, 1, 0));
}

#[test]
fn test_tally_display() {
    assert_eq!(ScoreTally::new(3, 1, 2).to_string(), "X: 3  O: 1  Ties: 2");
}
