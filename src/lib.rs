//! Grid Snake - a single-player snake game for the terminal
//!
//! This library provides:
//! - Core game logic and the tick-driven session controller (game module)
//! - High-score persistence (persistence module)
//! - Keyboard and swipe input mapping (input module)
//! - TUI rendering (render module)
//! - The interactive play loop (modes module)

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod persistence;
pub mod render;
