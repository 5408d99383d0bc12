//! High score persistence
//!
//! A single non-negative integer stored as JSON at a fixed path. Reads
//! recover to 0 on any failure; writes are best-effort and never fatal.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Default save location, relative to the working directory
pub const DEFAULT_SAVE_PATH: &str = "data/save.json";

#[derive(Debug, Serialize, Deserialize)]
struct SaveData {
    high_score: u32,
}

/// File-backed store for the single high score integer
#[derive(Debug, Clone)]
pub struct HighScoreStore {
    path: PathBuf,
}

impl HighScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the default fixed path
    pub fn at_default_path() -> Self {
        Self::new(DEFAULT_SAVE_PATH)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored high score. A missing or unreadable file means
    /// "no high score yet" and reads as 0.
    pub fn load(&self) -> u32 {
        match fs::read_to_string(&self.path) {
            Ok(raw) => match serde_json::from_str::<SaveData>(&raw) {
                Ok(data) => data.high_score,
                Err(err) => {
                    log::warn!("ignoring malformed save file {}: {err}", self.path.display());
                    0
                }
            },
            Err(_) => 0,
        }
    }

    /// Overwrite the stored high score, creating parent directories as
    /// needed. Failures are logged and swallowed; the in-memory value
    /// stays the source of truth for the rest of the session.
    pub fn save(&self, high_score: u32) {
        if let Err(err) = self.try_save(high_score) {
            log::warn!(
                "failed to save high score to {}: {err}",
                self.path.display()
            );
        }
    }

    fn try_save(&self, high_score: u32) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(&SaveData { high_score })
            .map_err(std::io::Error::other)?;
        fs::write(&self.path, json)
    }
}
