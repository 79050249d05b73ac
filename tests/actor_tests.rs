//! Actor tests - movement clamping, lives and position labels

use minewalk::core::{Actor, ActorError, Step};
use minewalk::types::Command;

#[test]
fn test_position_labels() {
    assert_eq!(Actor::new(0, 2, 3).unwrap().position(), "C1");
    assert_eq!(Actor::new(7, 0, 3).unwrap().position(), "A8");
    assert_eq!(Actor::new(7, 7, 3).unwrap().position(), "H8");
}

#[test]
fn test_initial_lives_must_be_positive() {
    assert_eq!(Actor::new(0, 0, 0), Err(ActorError::InvalidLives));
    assert_eq!(Actor::with_lives(1).unwrap().lives(), 1);
}

#[test]
fn test_walk_to_corner_and_back() {
    let mut actor = Actor::default();
    for _ in 0..10 {
        actor.move_down(8);
        actor.move_right(8);
    }
    assert_eq!((actor.row(), actor.col()), (7, 7));
    assert_eq!(actor.moves(), 14);
    assert!(actor.has_reached_goal(8, 8));

    assert_eq!(actor.move_down(8), Step::Blocked(Command::Down));
    assert_eq!(actor.move_right(8), Step::Blocked(Command::Right));
    assert_eq!(actor.moves(), 14);

    assert_eq!(actor.move_up(), Step::Moved);
    assert_eq!(actor.move_left(), Step::Moved);
    assert_eq!(actor.position(), "G7");
    assert!(!actor.has_reached_goal(8, 8));
}

#[test]
fn test_repeated_move_up_at_top_stays() {
    let mut actor = Actor::default();
    for _ in 0..5 {
        assert_eq!(actor.move_up(), Step::Blocked(Command::Up));
    }
    assert_eq!(actor.row(), 0);
    assert_eq!(actor.moves(), 0);
}

#[test]
fn test_lose_life_with_none_left_is_error() {
    let mut actor = Actor::with_lives(1).unwrap();
    assert_eq!(actor.lose_life(), Ok(()));
    assert_eq!(actor.lose_life(), Err(ActorError::NoLivesLeft));
    assert_eq!(actor.lives(), 0);
}
