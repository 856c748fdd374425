//! Per-tick classification of the snake's new head

use super::grid::Grid;
use super::state::{Cell, Snake};

/// Type of collision that occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    /// Snake hit a wall
    Wall,
    /// Snake hit itself
    SelfCollision,
}

/// What happened to the snake on a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Plain move; the tail must be dropped
    Continue,
    /// Head landed on food; the tail stays and the snake grows by one
    Eat,
    /// The game is over
    Collide(CollisionType),
}

/// Classify a snake whose head has already been advanced.
///
/// Collisions are checked before food, so a head on the food cell outside
/// the board still collides.
pub fn evaluate(snake: &Snake, food: Option<Cell>, grid: &Grid) -> Outcome {
    let head = snake.head();

    if !grid.contains(head) {
        return Outcome::Collide(CollisionType::Wall);
    }

    if snake.collides_with_body(head) {
        return Outcome::Collide(CollisionType::SelfCollision);
    }

    if food == Some(head) {
        return Outcome::Eat;
    }

    Outcome::Continue
}
