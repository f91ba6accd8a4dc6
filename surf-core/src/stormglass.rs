//! StormGlass marine forecast client.
//!
//! Fetches the hourly point forecast for a coordinate and reduces the
//! provider's `parameter -> source -> value` payload to flat
//! [`ForecastPoint`]s. Hours missing any tracked parameter for the
//! canonical source are dropped.

use chrono::Utc;
use reqwest::Url;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::{
    http::{HttpFetcher, RequestError},
    model::{Coordinate, ForecastPoint},
    time::ForecastWindow,
};

pub const STORMGLASS_API_URL: &str = "https://api.stormglass.io/v2/weather/point";

/// The only source requested. `SourceValue` reads the same field back.
pub const STORMGLASS_SOURCE: &str = "noaa";

pub const DEFAULT_FORECAST_DAYS: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrackedParam {
    SwellDirection,
    SwellHeight,
    SwellPeriod,
    WaveDirection,
    WaveHeight,
    WindDirection,
    WindSpeed,
}

impl TrackedParam {
    /// Wire name used both in the request and in the response hours.
    pub fn as_str(&self) -> &'static str {
        match self {
            TrackedParam::SwellDirection => "swellDirection",
            TrackedParam::SwellHeight => "swellHeight",
            TrackedParam::SwellPeriod => "swellPeriod",
            TrackedParam::WaveDirection => "waveDirection",
            TrackedParam::WaveHeight => "waveHeight",
            TrackedParam::WindDirection => "windDirection",
            TrackedParam::WindSpeed => "windSpeed",
        }
    }

    pub const fn all() -> &'static [TrackedParam] {
        &[
            TrackedParam::SwellDirection,
            TrackedParam::SwellHeight,
            TrackedParam::SwellPeriod,
            TrackedParam::WaveDirection,
            TrackedParam::WaveHeight,
            TrackedParam::WindDirection,
            TrackedParam::WindSpeed,
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum StormGlassError {
    /// No response was received from StormGlass.
    #[error("Unexpected error when trying to communicate to StormGlass: {message}")]
    Transport { message: String },

    /// StormGlass answered with an error status; `body` is its payload as sent.
    #[error("Unexpected error returned by the StormGlass service: Error: {body} Code: {status}")]
    Provider { status: u16, body: Value },
}

/// `RequestError` is closed over the same two cases that
/// [`is_provider_error_response`](crate::http::is_provider_error_response) tells
/// apart, so the variants map one to one.
impl From<RequestError> for StormGlassError {
    fn from(err: RequestError) -> Self {
        match err {
            RequestError::Response { status, body } => StormGlassError::Provider { status, body },
            RequestError::Transport { message } => StormGlassError::Transport { message },
        }
    }
}

#[derive(Debug, Clone)]
pub struct StormGlass<F> {
    fetcher: F,
    api_url: String,
    forecast_days: u32,
}

impl<F: HttpFetcher> StormGlass<F> {
    pub fn new(fetcher: F) -> Self {
        Self {
            fetcher,
            api_url: STORMGLASS_API_URL.to_string(),
            forecast_days: DEFAULT_FORECAST_DAYS,
        }
    }

    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    pub fn with_forecast_days(mut self, days: u32) -> Self {
        self.forecast_days = days;
        self
    }

    /// Fetch the complete hours for `lat`/`lng`, in provider order.
    ///
    /// Performs exactly one GET. Every failure is reported as one of the two
    /// [`StormGlassError`] variants.
    pub async fn fetch_points(&self, lat: f64, lng: f64) -> Result<Vec<ForecastPoint>, StormGlassError> {
        let window = ForecastWindow::from_now(Utc::now(), self.forecast_days);
        let url = self.request_url(Coordinate { lat, lng }, window)?;

        let response = self.fetcher.get(url.as_str()).await?;

        Ok(normalize_response(&response.data))
    }

    fn request_url(&self, coordinate: Coordinate, window: ForecastWindow) -> Result<Url, StormGlassError> {
        let params = TrackedParam::all().iter().map(TrackedParam::as_str).collect::<Vec<_>>().join(",");

        Url::parse_with_params(
            &self.api_url,
            &[
                ("params", params),
                ("source", STORMGLASS_SOURCE.to_string()),
                ("start", window.start.to_string()),
                ("end", window.end.to_string()),
                ("lat", coordinate.lat.to_string()),
                ("lng", coordinate.lng.to_string()),
            ],
        )
        .map_err(|e| StormGlassError::Transport { message: format!("invalid API URL '{}': {e}", self.api_url) })
    }
}

/// Reduce a raw StormGlass payload to the hours that are complete.
///
/// An absent or non-array `hours` yields no points. An hour that does not decode
/// is dropped on its own.
pub fn normalize_response(data: &Value) -> Vec<ForecastPoint> {
    data.get("hours")
        .and_then(Value::as_array)
        .map(|hours| {
            hours
                .iter()
                .filter_map(|hour| StormGlassHour::deserialize(hour).ok())
                .filter_map(StormGlassHour::into_point)
                .collect()
        })
        .unwrap_or_default()
}

/// Per-source values of one parameter. Only the canonical source is read.
#[derive(Debug, Deserialize)]
struct SourceValue {
    noaa: Option<f64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StormGlassHour {
    time: Option<String>,
    swell_direction: Option<SourceValue>,
    swell_height: Option<SourceValue>,
    swell_period: Option<SourceValue>,
    wave_direction: Option<SourceValue>,
    wave_height: Option<SourceValue>,
    wind_direction: Option<SourceValue>,
    wind_speed: Option<SourceValue>,
}

impl StormGlassHour {
    fn into_point(self) -> Option<ForecastPoint> {
        Some(ForecastPoint {
            time: self.time?,
            swell_direction: self.swell_direction?.noaa?,
            swell_height: self.swell_height?.noaa?,
            swell_period: self.swell_period?.noaa?,
            wave_direction: self.wave_direction?.noaa?,
            wave_height: self.wave_height?.noaa?,
            wind_direction: self.wind_direction?.noaa?,
            wind_speed: self.wind_speed?.noaa?,
        })
    }
}
