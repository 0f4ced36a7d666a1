//! Tests for the snake round through its public surface.

use gridplay_snake::{
    AdvanceOutcome, CrashKind, Grid, Heading, Point, SnakeError, SnakeRound, SnakeStatus,
    SteerOutcome,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn run_until_crash(round: &mut SnakeRound, rng: &mut StdRng) -> (CrashKind, Grid) {
    loop {
        let before = round.grid().clone();
        match round.advance(rng).expect("round is live") {
            AdvanceOutcome::Crashed(kind) => return (kind, before),
            AdvanceOutcome::Moved | AdvanceOutcome::Ate => {}
            AdvanceOutcome::Paused => panic!("round was never paused"),
        }
    }
}

#[test]
fn test_new_round_layout() {
    let mut rng = StdRng::seed_from_u64(1);
    let round = SnakeRound::new(12, 10, &mut rng).unwrap();

    assert_eq!(round.grid().head(), Point::new(6, 6));
    assert_eq!(round.grid().len(), 1);
    assert_eq!(round.heading(), &Heading::Right);
    assert_eq!(round.status(), &SnakeStatus::Running);
    let food = round.grid().food().expect("food placed");
    assert_ne!(food, round.grid().head());
}

#[test]
fn test_wall_crash_leaves_body_in_place() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut round = SnakeRound::new(8, 10, &mut rng).unwrap();
    round.steer(Heading::Up).unwrap();

    let (kind, before) = run_until_crash(&mut round, &mut rng);
    assert_eq!(kind, CrashKind::Wall);
    assert_eq!(round.grid(), &before);
    assert_eq!(round.grid().head().y, 0);
    assert!(round.is_over());
}

#[test]
fn test_crashed_round_rejects_everything() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut round = SnakeRound::new(4, 10, &mut rng).unwrap();
    run_until_crash(&mut round, &mut rng);
    let crashed = round.clone();

    assert_eq!(round.advance(&mut rng), Err(SnakeError::RoundAlreadyOver));
    assert_eq!(round.steer(Heading::Down), Err(SnakeError::RoundAlreadyOver));
    assert_eq!(round.pause(), Err(SnakeError::RoundAlreadyOver));
    assert_eq!(round, crashed);
}

#[test]
fn test_reversal_is_ignored() {
    let mut rng = StdRng::seed_from_u64(9);
    let mut round = SnakeRound::new(10, 10, &mut rng).unwrap();

    assert_eq!(round.steer(Heading::Left), Ok(SteerOutcome::IgnoredReversal));
    assert_eq!(round.heading(), &Heading::Right);
    assert_eq!(round.steer(Heading::Down), Ok(SteerOutcome::Turned));
    assert_eq!(round.steer(Heading::Up), Ok(SteerOutcome::IgnoredReversal));
    assert_eq!(round.heading(), &Heading::Down);
}

#[test]
fn test_pause_freezes_ticks() {
    let mut rng = StdRng::seed_from_u64(11);
    let mut round = SnakeRound::new(10, 10, &mut rng).unwrap();
    round.pause().unwrap();
    let paused = round.clone();

    assert_eq!(round.advance(&mut rng), Ok(AdvanceOutcome::Paused));
    assert_eq!(round, paused);

    round.resume().unwrap();
    assert!(round.advance(&mut rng).is_ok());
    assert_eq!(*round.ticks(), 1);
}

#[test]
fn test_score_tracks_food_eaten() {
    let mut rng = StdRng::seed_from_u64(21);
    let mut round = SnakeRound::new(6, 7, &mut rng).unwrap();
    run_until_crash(&mut round, &mut rng);

    assert_eq!(*round.score(), *round.food_eaten() * 7);
    assert_eq!(round.grid().len() as u32, 1 + *round.food_eaten());
}
