use thiserror::Error;

/// Rejections and terminal conditions raised by the game core.
///
/// None of these are fatal; the session handles each one locally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    /// Every cell is occupied by the snake, so food cannot be placed
    #[error("no free cell left for food")]
    NoSpaceAvailable,

    /// The requested turn would reverse the snake into itself
    #[error("cannot reverse direction")]
    InvalidDirectionChange,

    /// Input arrived while no game is running
    #[error("no game is running")]
    NoActiveGame,
}
