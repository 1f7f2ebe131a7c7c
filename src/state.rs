//! Application state - single source of truth

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Minimum query length (in characters) before a geocoding lookup is issued.
pub const SUGGESTION_MIN_CHARS: usize = 3;

/// Maximum number of suggestions shown in the dropdown.
pub const SUGGESTION_LIMIT: usize = 5;

/// Pause in typing required before suggestions are looked up.
pub const DEBOUNCE_DELAY: Duration = Duration::from_millis(300);

/// The only user-facing weather error.
pub const WEATHER_NOT_FOUND: &str = "Could not find weather for this city";

/// A geocoding candidate
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub name: String,
    pub country: String,
}

impl Place {
    /// Dropdown label, e.g. `"London, GB"`
    pub fn label(&self) -> String {
        format!("{}, {}", self.name, self.country)
    }
}

/// Current conditions for one city (metric units)
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub temperature: f64,
    pub feels_like: f64,
    pub humidity: u8,
    pub cloudiness: u8,
    pub wind_speed: f64,
    pub place: String,
    pub country: String,
    pub condition_code: u16,
    pub description: String,
}

impl WeatherSnapshot {
    pub fn rounded_temperature(&self) -> i64 {
        round_half_up(self.temperature)
    }

    pub fn rounded_feels_like(&self) -> i64 {
        round_half_up(self.feels_like)
    }
}

/// Round to the nearest integer, with `.5` going towards positive infinity
/// (`15.5 -> 16`, `-2.5 -> -2`).
pub fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

/// Application state - everything the UI needs to render
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppState {
    /// Text in the search field
    pub query: String,

    /// Dropdown entries, at most `SUGGESTION_LIMIT`
    pub suggestions: Vec<String>,

    /// Last successful weather fetch
    pub weather: Option<WeatherSnapshot>,

    /// True while a weather fetch is in flight
    pub loading: bool,

    /// Set only when the last weather fetch failed
    pub error: Option<String>,

    /// Keyboard cursor inside the dropdown
    pub highlighted: Option<usize>,

    /// Sequence number of the newest suggestion request. Completions carrying
    /// any other number are stale.
    pub suggestion_seq: u64,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn highlighted_suggestion(&self) -> Option<&str> {
        self.highlighted
            .and_then(|index| self.suggestions.get(index))
            .map(String::as_str)
    }

    pub(crate) fn clear_suggestions(&mut self) {
        self.suggestions.clear();
        self.highlighted = None;
    }
}

/// Number of characters the suggestion threshold is measured in.
pub fn input_len(input: &str) -> usize {
    input.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_half_up_boundaries() {
        assert_eq!(round_half_up(15.5), 16);
        assert_eq!(round_half_up(15.49), 15);
        assert_eq!(round_half_up(0.5), 1);
        assert_eq!(round_half_up(-0.5), 0);
        assert_eq!(round_half_up(-2.5), -2);
        assert_eq!(round_half_up(-2.51), -3);
        assert_eq!(round_half_up(20.0), 20);
    }

    #[test]
    fn test_place_label() {
        let place = Place {
            name: "London".into(),
            country: "GB".into(),
        };
        assert_eq!(place.label(), "London, GB");
    }

    #[test]
    fn test_input_len_counts_chars() {
        assert_eq!(input_len("Köl"), 3);
        assert_eq!(input_len("Ko"), 2);
    }

    #[test]
    fn test_highlighted_suggestion_out_of_range() {
        let state = AppState {
            suggestions: vec!["Paris, FR".into()],
            highlighted: Some(3),
            ..Default::default()
        };
        assert_eq!(state.highlighted_suggestion(), None);
    }
}
