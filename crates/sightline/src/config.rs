//! Configuration management for sightline.
//!
//! This module provides configuration loading and validation using figment,
//! supporting TOML config files, environment variables, and defaults.

use std::path::PathBuf;
use std::time::Duration;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Default config directory name.
const CONFIG_DIR_NAME: &str = "sightline";

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `SIGHTLINE_`, sections separated
///    by `__`, e.g. `SIGHTLINE_SIMULATION__PROGRESS_TICK_MS`)
/// 2. TOML config file at `~/.config/sightline/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Simulation configuration.
    pub simulation: SimulationConfig,
    /// Geocoding configuration.
    pub geocoding: GeocodingConfig,
}

/// Simulation timing and probability knobs.
///
/// The defaults reproduce the original demo's observable behavior: a 250 ms
/// progress/statistics tick, a 3 s status tick, a 2 s discovery tick, a 0.3
/// per-tick discovery probability, a 0.1 warning probability, and a rolling
/// 50-entry activity log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Interval between progress/statistics ticks in milliseconds.
    pub progress_tick_ms: u64,
    /// Interval between status message ticks in milliseconds.
    pub status_tick_ms: u64,
    /// Interval between sighting discovery ticks in milliseconds.
    pub discovery_tick_ms: u64,
    /// Probability that a discovery tick produces a new sighting.
    pub discovery_probability: f64,
    /// Probability that a status tick logs the privacy-limitation warning
    /// instead of the selected status phrase.
    pub warning_probability: f64,
    /// Maximum number of retained activity log entries.
    pub log_capacity: usize,
    /// Delay between progress reaching 100 and the completion signal,
    /// in milliseconds.
    pub completion_delay_ms: u64,
    /// How long a newly discovered sighting stays highlighted,
    /// in milliseconds.
    pub highlight_ms: u64,
    /// Optional seed for the session's random source. Unset means a fresh
    /// entropy seed per session; set it for reproducible runs.
    pub seed: Option<u64>,
}

/// Geocoding lookup configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeocodingConfig {
    /// Search endpoint of a Nominatim-compatible geocoding service.
    pub endpoint: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
    /// User agent sent with lookup requests.
    pub user_agent: String,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            progress_tick_ms: 250,
            status_tick_ms: 3000,
            discovery_tick_ms: 2000,
            discovery_probability: 0.3,
            warning_probability: 0.1,
            log_capacity: 50,
            completion_delay_ms: 1000,
            highlight_ms: 2000,
            seed: None,
        }
    }
}

impl Default for GeocodingConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://nominatim.openstreetmap.org/search".to_string(),
            timeout_secs: 10,
            user_agent: concat!("sightline/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// Configuration is loaded in this order (later sources override earlier):
    /// 1. Default values
    /// 2. TOML config file (if exists)
    /// 3. Environment variables (prefixed with `SIGHTLINE_`, `__` between
    ///    the section and the key, so snake_case keys stay addressable)
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration with an optional custom config path.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file).nested())
            .merge(Env::prefixed("SIGHTLINE_").split("__"));

        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        self.simulation.validate()?;

        if self.geocoding.endpoint.is_empty() {
            return Err(Error::validation("geocoding endpoint must not be empty"));
        }
        if self.geocoding.timeout_secs == 0 {
            return Err(Error::validation(
                "geocoding timeout_secs must be greater than 0",
            ));
        }

        Ok(())
    }
}

impl SimulationConfig {
    /// Validate the simulation knobs.
    ///
    /// # Errors
    ///
    /// Returns an error if an interval is zero, a probability falls outside
    /// [0, 1], or the log capacity is zero.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("progress_tick_ms", self.progress_tick_ms),
            ("status_tick_ms", self.status_tick_ms),
            ("discovery_tick_ms", self.discovery_tick_ms),
        ] {
            if value == 0 {
                return Err(Error::validation(format!(
                    "{name} must be greater than 0"
                )));
            }
        }

        for (name, value) in [
            ("discovery_probability", self.discovery_probability),
            ("warning_probability", self.warning_probability),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(Error::validation(format!(
                    "{name} must be within [0, 1], got {value}"
                )));
            }
        }

        if self.log_capacity == 0 {
            return Err(Error::validation("log_capacity must be greater than 0"));
        }

        Ok(())
    }

    /// Get the progress/statistics tick period as a Duration.
    #[must_use]
    pub fn progress_tick(&self) -> Duration {
        Duration::from_millis(self.progress_tick_ms)
    }

    /// Get the status tick period as a Duration.
    #[must_use]
    pub fn status_tick(&self) -> Duration {
        Duration::from_millis(self.status_tick_ms)
    }

    /// Get the discovery tick period as a Duration.
    #[must_use]
    pub fn discovery_tick(&self) -> Duration {
        Duration::from_millis(self.discovery_tick_ms)
    }

    /// Get the completion-signal delay as a Duration.
    #[must_use]
    pub fn completion_delay(&self) -> Duration {
        Duration::from_millis(self.completion_delay_ms)
    }

    /// Get the highlight lifetime as a Duration.
    #[must_use]
    pub fn highlight_duration(&self) -> Duration {
        Duration::from_millis(self.highlight_ms)
    }
}

impl GeocodingConfig {
    /// Get the request timeout as a Duration.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
