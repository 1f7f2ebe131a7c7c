//! OpenWeatherMap client

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use crate::state::{Place, WeatherSnapshot};

pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org";

#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("unexpected status {0}")]
    Status(reqwest::StatusCode),
    #[error("response parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// The two remote lookups the app depends on
#[async_trait]
pub trait WeatherService: Send + Sync {
    /// Places whose name matches `query`, most relevant first.
    async fn search_places(&self, query: &str, limit: usize) -> Result<Vec<Place>, ApiError>;

    /// Current conditions for `city`, metric units.
    async fn current_weather(&self, city: &str) -> Result<WeatherSnapshot, ApiError>;
}

// ============================================================================
// Geocoding API
// ============================================================================

#[derive(Debug, Deserialize)]
struct GeocodingResult {
    name: String,
    #[serde(default)]
    country: String,
}

fn parse_places(body: &str) -> Result<Vec<Place>, ApiError> {
    let results: Vec<GeocodingResult> = serde_json::from_str(body)?;
    Ok(results
        .into_iter()
        .map(|result| Place {
            name: result.name,
            country: result.country,
        })
        .collect())
}

// ============================================================================
// Weather API
// ============================================================================

#[derive(Debug, Deserialize)]
struct WeatherResponse {
    name: String,
    main: WeatherMain,
    wind: WeatherWind,
    clouds: WeatherClouds,
    sys: WeatherSys,
    weather: Vec<WeatherCondition>,
}

#[derive(Debug, Deserialize)]
struct WeatherMain {
    temp: f64,
    feels_like: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct WeatherWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct WeatherClouds {
    all: u8,
}

#[derive(Debug, Deserialize)]
struct WeatherSys {
    #[serde(default)]
    country: String,
}

#[derive(Debug, Deserialize)]
struct WeatherCondition {
    id: u16,
    description: String,
}

fn parse_weather(body: &str) -> Result<WeatherSnapshot, ApiError> {
    let data: WeatherResponse = serde_json::from_str(body)?;
    let condition = data.weather.into_iter().next().ok_or_else(|| {
        ApiError::Parse(serde::de::Error::custom("missing weather condition"))
    })?;

    Ok(WeatherSnapshot {
        temperature: data.main.temp,
        feels_like: data.main.feels_like,
        humidity: data.main.humidity,
        cloudiness: data.clouds.all,
        wind_speed: data.wind.speed,
        place: data.name,
        country: data.sys.country,
        condition_code: condition.id,
        description: condition.description,
    })
}

// ============================================================================
// Client
// ============================================================================

pub struct OpenWeatherClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl OpenWeatherClient {
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        })
    }

    async fn get(&self, url: &str) -> Result<String, ApiError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status));
        }
        Ok(response.text().await?)
    }

    fn geocoding_url(&self, query: &str, limit: usize) -> String {
        format!(
            "{}/geo/1.0/direct?q={}&limit={}&appid={}",
            self.base_url,
            urlencoding::encode(query),
            limit,
            urlencoding::encode(&self.api_key)
        )
    }

    fn weather_url(&self, city: &str) -> String {
        format!(
            "{}/data/2.5/weather?q={}&appid={}&units=metric",
            self.base_url,
            urlencoding::encode(city),
            urlencoding::encode(&self.api_key)
        )
    }
}

#[async_trait]
impl WeatherService for OpenWeatherClient {
    async fn search_places(&self, query: &str, limit: usize) -> Result<Vec<Place>, ApiError> {
        tracing::debug!(query, limit, "geocoding lookup");
        let body = self.get(&self.geocoding_url(query, limit)).await?;
        parse_places(&body)
    }

    async fn current_weather(&self, city: &str) -> Result<WeatherSnapshot, ApiError> {
        tracing::debug!(city, "weather lookup");
        let body = self.get(&self.weather_url(city)).await?;
        parse_weather(&body)
    }
}
