//! Core game logic module for Snake
//!
//! This module contains all the game logic without any terminal or rendering
//! dependencies. The [`GameSession`] controller drives everything else.

pub mod action;
pub mod collision;
pub mod config;
pub mod error;
pub mod food;
pub mod grid;
pub mod session;
pub mod state;
pub mod timer;

// Re-export commonly used types
pub use action::{Action, Direction};
pub use collision::{CollisionType, Outcome};
pub use config::{Difficulty, GameConfig};
pub use error::GameError;
pub use grid::{Grid, PixelRect};
pub use session::GameSession;
pub use state::{Cell, EndReason, GameState, Snake};
pub use timer::TickTimer;
