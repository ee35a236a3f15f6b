//! Configuration file loading.
//!
//! Both binaries read the same JSON file: API credentials plus the list
//! of routes to watch. The file is loaded once per run and validated up
//! front, so a bad departure time or offset fails before any network or
//! crontab work happens.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::domain::{DayTime, Offset, OffsetError, TimeError};

/// Default config path when none is given on the command line.
pub const DEFAULT_CONFIG_PATH: &str = "config.json";

/// Errors from loading or validating the configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("cannot read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid JSON or misses required keys
    #[error("invalid config: {0}")]
    Json(#[from] serde_json::Error),

    /// A route's departure_time is not a valid HH:MM string
    #[error("route {route}: {source}")]
    InvalidDepartureTime {
        route: String,
        #[source]
        source: TimeError,
    },

    /// A route's cron offset does not parse
    #[error("route {route}: {source}")]
    InvalidOffset {
        route: String,
        #[source]
        source: OffsetError,
    },
}

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// NS Reisinformatie subscription key.
    pub ns_api_key: String,
    /// Telegram bot token.
    pub telegram_api_key: String,
    /// Telegram chat to notify.
    pub telegram_chat_id: String,
    /// Routes to watch.
    pub routes: Vec<Route>,
}

/// One watched route.
#[derive(Debug, Clone, Deserialize)]
pub struct Route {
    /// Origin station code or name, passed through to the NS API.
    pub departure_station: String,
    /// Destination station code or name.
    pub arrival_station: String,
    /// Requested departure time, "HH:MM" 24h local wall clock.
    pub departure_time: String,
    /// Lead-time offsets for the cron triggers, e.g. `["1h", "30m"]`.
    pub cron_offsets: Vec<String>,
}

impl Config {
    /// Load and validate a config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    /// Parse and validate config JSON.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for route in &self.routes {
            route
                .departure()
                .map_err(|source| ConfigError::InvalidDepartureTime {
                    route: route.describe(),
                    source,
                })?;
            route.offsets().map_err(|source| ConfigError::InvalidOffset {
                route: route.describe(),
                source,
            })?;
        }
        Ok(())
    }
}

impl Route {
    /// The requested departure time as a parsed wall-clock time.
    pub fn departure(&self) -> Result<DayTime, TimeError> {
        DayTime::parse_hhmm(&self.departure_time)
    }

    /// The route's parsed lead-time offsets, in config order.
    pub fn offsets(&self) -> Result<Vec<Offset>, OffsetError> {
        self.cron_offsets.iter().map(|s| Offset::parse(s)).collect()
    }

    /// Short route description for error messages.
    fn describe(&self) -> String {
        format!("{} → {}", self.departure_station, self.arrival_station)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = r#"{
        "ns_api_key": "ns-key",
        "telegram_api_key": "123:abc",
        "telegram_chat_id": "42",
        "routes": [
            {
                "departure_station": "Asd",
                "arrival_station": "Ut",
                "departure_time": "08:15",
                "cron_offsets": ["1h", "30m", "15"]
            }
        ]
    }"#;

    #[test]
    fn parse_valid_config() {
        let config = Config::from_json(VALID).unwrap();
        assert_eq!(config.ns_api_key, "ns-key");
        assert_eq!(config.telegram_chat_id, "42");
        assert_eq!(config.routes.len(), 1);

        let route = &config.routes[0];
        assert_eq!(route.departure().unwrap().to_string(), "08:15");
        let offsets: Vec<u32> = route.offsets().unwrap().iter().map(|o| o.minutes()).collect();
        assert_eq!(offsets, vec![60, 30, 15]);
    }

    #[test]
    fn missing_key_is_an_error() {
        let err = Config::from_json(r#"{"ns_api_key": "k"}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn bad_departure_time_is_rejected_at_load() {
        let text = VALID.replace("08:15", "8:15");
        let err = Config::from_json(&text).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidDepartureTime { .. }));
        assert!(err.to_string().contains("Asd → Ut"));
    }

    #[test]
    fn bad_offset_is_rejected_at_load() {
        let text = VALID.replace("\"30m\"", "\"soon\"");
        let err = Config::from_json(&text).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidOffset { .. }));
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, VALID).unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.routes[0].arrival_station, "Ut");
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = Config::load("/nonexistent/config.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/config.json"));
    }
}
