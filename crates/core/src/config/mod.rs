use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::Result;

/// Top-level configuration structure for the application.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub playback: PlaybackConfig,
}

impl AppConfig {
    /// Loads a configuration file in JSON format.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }
}

/// Configuration for the generated input array.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    /// Number of elements; the input is a shuffled permutation of `1..=length`.
    pub length: usize,
    /// Shuffle seed; a fresh one is drawn when absent.
    pub seed: Option<u64>,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            length: 50,
            seed: None,
        }
    }
}

/// Configuration for frame pacing in the terminal renderer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaybackConfig {
    /// Delay between consecutive frames, in milliseconds.
    pub interval_ms: u64,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self { interval_ms: 10 }
    }
}
