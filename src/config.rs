//! Command-line configuration

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::api::DEFAULT_BASE_URL;

/// WeatherNow - live city search and current conditions in the terminal
#[derive(Parser, Debug, Clone)]
#[command(name = "weathernow")]
#[command(about = "Search a city and show its current weather (OpenWeatherMap)")]
pub struct Config {
    /// OpenWeatherMap API key
    #[arg(long, env = "OPENWEATHER_API_KEY", hide_env_values = true)]
    pub api_key: String,

    /// API root for both geocoding and weather requests
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// City to look up on start
    #[arg(long, short)]
    pub city: Option<String>,

    /// Pause in typing before suggestions are fetched, in milliseconds
    #[arg(long, default_value = "300")]
    pub debounce_ms: u64,

    /// Upper bound for a single API request, in seconds (minimum 1)
    #[arg(long, default_value = "15", value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout_secs: u64,

    /// Write logs to this file (filter with RUST_LOG)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Config {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::DEBOUNCE_DELAY;

    #[test]
    fn test_defaults() {
        let config = Config::try_parse_from(["weathernow", "--api-key", "abc"]).unwrap();

        assert_eq!(config.api_key, "abc");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.debounce(), DEBOUNCE_DELAY);
        assert_eq!(config.timeout(), Duration::from_secs(15));
        assert_eq!(config.city, None);
        assert_eq!(config.log_file, None);
    }

    #[test]
    fn test_overrides() {
        let config = Config::try_parse_from([
            "weathernow",
            "--api-key",
            "abc",
            "-c",
            "Paris",
            "--debounce-ms",
            "150",
            "--log-file",
            "/tmp/weathernow.log",
        ])
        .unwrap();

        assert_eq!(config.city.as_deref(), Some("Paris"));
        assert_eq!(config.debounce(), Duration::from_millis(150));
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/weathernow.log")));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let result =
            Config::try_parse_from(["weathernow", "--api-key", "abc", "--timeout-secs", "0"]);
        assert!(result.is_err());
    }
}
