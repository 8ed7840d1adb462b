//! Audio configuration: master volume and streaming parameters.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path, time::Duration};
use tracing::{debug, warn};

/// Default master volume applied to every gain sent to the native layer.
pub const GLOBAL_VOLUME: f32 = 1.0;

/// Default chunk size, in bytes, for streamed decode/upload.
pub const STREAM_BUF_SIZE: usize = 32768;

/// Default idle-poll interval, in milliseconds, for streaming state checks.
pub const AUDIO_SLEEP_MS: u64 = 10;

/// Process-wide audio configuration.
///
/// Only `global_volume` is consumed by this crate; the streaming values are
/// read by the streaming layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioConfig {
    /// Master volume (0.0 to 1.0).
    pub global_volume: f32,
    /// Bytes decoded and uploaded per streaming chunk.
    pub stream_buffer_size: usize,
    /// Sleep between streaming state polls, in milliseconds.
    pub stream_poll_interval_ms: u64,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            global_volume: GLOBAL_VOLUME,
            stream_buffer_size: STREAM_BUF_SIZE,
            stream_poll_interval_ms: AUDIO_SLEEP_MS,
        }
    }
}

impl AudioConfig {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set master volume (clamped to 0.0-1.0).
    pub fn set_global_volume(&mut self, volume: f32) {
        self.global_volume = volume.clamp(0.0, 1.0);
    }

    /// Streaming poll interval as a `Duration`.
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.stream_poll_interval_ms)
    }

    /// Parse a configuration from TOML text. Master volume is clamped to
    /// 0.0-1.0 the same way the setter clamps it.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let mut cfg: Self = toml::from_str(contents)?;
        cfg.set_global_volume(cfg.global_volume);
        Ok(cfg)
    }

    /// Load configuration from `path`, falling back to defaults on errors.
    pub fn load_from_path(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => match Self::from_toml_str(&contents) {
                Ok(cfg) => {
                    debug!("Loaded audio config from {}", path.display());
                    cfg
                }
                Err(err) => {
                    warn!("Failed to parse {}: {err}. Using defaults", path.display());
                    Self::default()
                }
            },
            Err(err) => {
                if err.kind() == std::io::ErrorKind::NotFound {
                    debug!("Audio config not found at {}. Using defaults", path.display());
                } else {
                    warn!("Failed to read {}: {err}. Using defaults", path.display());
                }
                Self::default()
            }
        }
    }

    /// Save configuration to `path` as TOML.
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        let toml = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)?;
        Ok(())
    }
}
