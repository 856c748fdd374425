//! High-score persistence
//!
//! The game core only sees the [`HighScoreStore`] trait; the binary plugs in
//! a JSON file, tests use the in-memory store.

pub mod high_score;

pub use high_score::{HighScoreStore, JsonFileStore, MemoryStore};
