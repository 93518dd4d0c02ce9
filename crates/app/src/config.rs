use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use drill_core::model::{
    DEFAULT_ADVANCE_GAP_MS, DEFAULT_PROMPT_MS, DEFAULT_REVEAL_FIRST_MS, DEFAULT_REVEAL_SECOND_MS,
    PhaseTimings, SettingsError,
};
use serde::{Deserialize, Serialize};

/// User configuration, read from `<config dir>/sentence-drill/config.json`.
///
/// Every field is optional in the file; missing ones take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// JSON catalog to drill from. The built-in sample is used when unset.
    pub catalog_path: Option<PathBuf>,
    pub prompt_ms: u32,
    pub reveal_first_ms: u32,
    pub reveal_second_ms: u32,
    pub advance_gap_ms: u32,
    /// Fixed shuffle seed, for repeatable drills.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_path: None,
            prompt_ms: DEFAULT_PROMPT_MS,
            reveal_first_ms: DEFAULT_REVEAL_FIRST_MS,
            reveal_second_ms: DEFAULT_REVEAL_SECOND_MS,
            advance_gap_ms: DEFAULT_ADVANCE_GAP_MS,
            seed: None,
        }
    }
}

impl Config {
    fn dir() -> PathBuf {
        let mut p = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        p.push("sentence-drill");
        p
    }

    pub fn path() -> PathBuf {
        Self::dir().join("config.json")
    }

    /// Load from the default location.
    pub fn load() -> Self {
        Self::load_from(&Self::path())
    }

    /// Load from `path`, falling back to defaults if it is missing or invalid.
    pub fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(data) => serde_json::from_str(&data).unwrap_or_else(|e| {
                log::warn!("ignoring invalid config {}: {e}", path.display());
                Self::default()
            }),
            Err(e) if e.kind() == ErrorKind::NotFound => Self::default(),
            Err(e) => {
                log::warn!("could not read config {}: {e}", path.display());
                Self::default()
            }
        }
    }

    /// Validated phase timings.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError` if a duration is out of range.
    pub fn timings(&self) -> Result<PhaseTimings, SettingsError> {
        PhaseTimings::new(
            self.prompt_ms,
            self.reveal_first_ms,
            self.reveal_second_ms,
            self.advance_gap_ms,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_defaults() {
        let config: Config = serde_json::from_str(r#"{ "prompt_ms": 4000, "seed": 7 }"#).unwrap();
        assert_eq!(config.prompt_ms, 4_000);
        assert_eq!(config.reveal_first_ms, DEFAULT_REVEAL_FIRST_MS);
        assert_eq!(config.seed, Some(7));
        assert!(config.timings().is_ok());
    }

    #[test]
    fn missing_file_gives_defaults() {
        let path = std::env::temp_dir().join("sentence-drill-no-such-config.json");
        assert_eq!(Config::load_from(&path), Config::default());
    }

    #[test]
    fn zero_duration_is_rejected_at_validation() {
        let config = Config {
            reveal_second_ms: 0,
            ..Config::default()
        };
        assert!(config.timings().is_err());
    }
}
