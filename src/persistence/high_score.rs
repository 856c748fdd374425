use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Key-value storage for the single high-score scalar
pub trait HighScoreStore {
    /// Stored high score, or 0 when nothing has been saved yet
    fn load(&self) -> Result<u32>;

    /// Overwrite the stored high score
    fn save(&mut self, score: u32) -> Result<()>;
}

/// On-disk layout of the high-score file
#[derive(Debug, Clone, Serialize, Deserialize)]
struct HighScoreRecord {
    high_score: u32,
    /// Version identifier of the writer
    version: String,
}

/// Stores the high score as a small JSON document
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl HighScoreStore for JsonFileStore {
    fn load(&self) -> Result<u32> {
        if !self.path.exists() {
            return Ok(0);
        }

        let json = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read high score from {:?}", self.path))?;
        let record: HighScoreRecord =
            serde_json::from_str(&json).context("Failed to deserialize high score")?;

        Ok(record.high_score)
    }

    fn save(&mut self, score: u32) -> Result<()> {
        // Create parent directories if needed
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {:?}", parent))?;
        }

        let record = HighScoreRecord {
            high_score: score,
            version: env!("CARGO_PKG_VERSION").to_string(),
        };
        let json =
            serde_json::to_string_pretty(&record).context("Failed to serialize high score")?;
        std::fs::write(&self.path, json)
            .with_context(|| format!("Failed to write high score to {:?}", self.path))?;

        Ok(())
    }
}

/// Keeps the high score in memory.
///
/// Clones share the same value, so a test can keep a handle while the
/// session owns another.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    score: Arc<Mutex<u32>>,
}

impl MemoryStore {
    pub fn new(initial: u32) -> Self {
        Self {
            score: Arc::new(Mutex::new(initial)),
        }
    }

    pub fn get(&self) -> u32 {
        *self.score.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl HighScoreStore for MemoryStore {
    fn load(&self) -> Result<u32> {
        Ok(self.get())
    }

    fn save(&mut self, score: u32) -> Result<()> {
        *self.score.lock().unwrap_or_else(|poisoned| poisoned.into_inner()) = score;
        Ok(())
    }
}
