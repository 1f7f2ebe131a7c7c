//! Weather condition categories for display
//!
//! OpenWeatherMap condition codes are grouped by hundreds:
//! <https://openweathermap.org/weather-conditions>

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Condition {
    Thunderstorm,
    Rain,
    Snow,
    Atmosphere,
    Clear,
    Clouds,
}

impl Condition {
    pub fn from_code(code: u16) -> Self {
        match code {
            200..=299 => Condition::Thunderstorm,
            300..=599 => Condition::Rain,
            600..=699 => Condition::Snow,
            700..=799 => Condition::Atmosphere,
            800 => Condition::Clear,
            _ => Condition::Clouds,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Condition::Thunderstorm => "\u{26c8}\u{fe0f}",
            Condition::Rain => "\u{1f327}\u{fe0f}",
            Condition::Snow => "\u{1f328}\u{fe0f}",
            Condition::Atmosphere => "\u{1f32b}\u{fe0f}",
            Condition::Clear => "\u{2600}\u{fe0f}",
            Condition::Clouds => "\u{2601}\u{fe0f}",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Condition::Thunderstorm => "Thunderstorm",
            Condition::Rain => "Rain",
            Condition::Snow => "Snow",
            Condition::Atmosphere => "Mist",
            Condition::Clear => "Clear",
            Condition::Clouds => "Clouds",
        }
    }
}
