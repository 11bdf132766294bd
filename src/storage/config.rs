//! JSON configuration file.
//!
//! Read from `$SLOCK_COVER_CONFIG`, else
//! `$XDG_CONFIG_HOME/slock-cover/config.json`, else
//! `$HOME/.config/slock-cover/config.json`.
//!
//! A missing file means defaults. A file that does not parse is logged and
//! also falls back to defaults: the overlay must never keep a locker from
//! starting.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::{debug, warn};

use crate::model::constants::*;
use crate::model::PackedColor;
use crate::{color_to_hex, parse_hex_color};

/// Overlay settings.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct CoverConfig {
    /// Lock glyph PNG.
    pub lock_image: PathBuf,
    /// Ring and glyph colour, `#RRGGBBAA` or `#RRGGBB`.
    pub base_color: String,
    /// Fade tick period in milliseconds.
    pub tick_interval_ms: u64,
    /// Let pointer input fall through the overlay.
    pub input_passthrough: bool,
    /// Verbose logging.
    pub debug: bool,
}

impl Default for CoverConfig {
    fn default() -> Self {
        Self {
            lock_image: PathBuf::from(LOCK_IMAGE_PATH),
            base_color: color_to_hex(PackedColor(SLATE)),
            tick_interval_ms: TICK_INTERVAL_MS,
            input_passthrough: true,
            debug: false,
        }
    }
}

impl CoverConfig {
    /// Clamps values to valid ranges.
    pub fn validate(&mut self) {
        self.tick_interval_ms = self
            .tick_interval_ms
            .clamp(MIN_TICK_INTERVAL_MS, MAX_TICK_INTERVAL_MS);
        if parse_hex_color(&self.base_color).is_none() {
            warn!(color = %self.base_color, "invalid base_color, using slate");
            self.base_color = color_to_hex(PackedColor(SLATE));
        }
    }

    /// The base colour as a packed word.
    pub fn base_color(&self) -> PackedColor {
        parse_hex_color(&self.base_color).unwrap_or(PackedColor(SLATE))
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

/// Resolve the config file location.
pub fn config_path() -> PathBuf {
    if let Some(path) = std::env::var_os("SLOCK_COVER_CONFIG") {
        return PathBuf::from(path);
    }
    let base = std::env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| std::env::var_os("HOME").map(|h| PathBuf::from(h).join(".config")))
        .unwrap_or_else(|| PathBuf::from("."));
    base.join("slock-cover").join("config.json")
}

/// Parse config JSON, returning a validated config.
pub fn parse_config(contents: &str) -> Result<CoverConfig, serde_json::Error> {
    let mut config: CoverConfig = serde_json::from_str(contents)?;
    config.validate();
    Ok(config)
}

/// Load config from `path`, returning defaults if not found or invalid.
pub fn load_config_from(path: &Path) -> CoverConfig {
    match fs::read_to_string(path) {
        Ok(contents) => match parse_config(&contents) {
            Ok(config) => {
                debug!(path = %path.display(), "config loaded");
                config
            }
            Err(e) => {
                warn!(path = %path.display(), "invalid config, using defaults: {}", e);
                CoverConfig::default()
            }
        },
        Err(_) => CoverConfig::default(),
    }
}

/// Load config from the default location.
pub fn load_config() -> CoverConfig {
    load_config_from(&config_path())
}
