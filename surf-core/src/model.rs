use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

/// One hour of marine data with every tracked parameter present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastPoint {
    pub time: String,
    pub swell_direction: f64,
    pub swell_height: f64,
    pub swell_period: f64,
    pub wave_direction: f64,
    pub wave_height: f64,
    pub wind_direction: f64,
    pub wind_speed: f64,
}

/// Which way a beach faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BeachPosition {
    #[serde(rename = "N")]
    North,
    #[serde(rename = "S")]
    South,
    #[serde(rename = "E")]
    East,
    #[serde(rename = "W")]
    West,
}

impl BeachPosition {
    pub fn as_str(&self) -> &'static str {
        match self {
            BeachPosition::North => "N",
            BeachPosition::South => "S",
            BeachPosition::East => "E",
            BeachPosition::West => "W",
        }
    }
}

impl fmt::Display for BeachPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for BeachPosition {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.to_uppercase().as_str() {
            "N" => Ok(BeachPosition::North),
            "S" => Ok(BeachPosition::South),
            "E" => Ok(BeachPosition::East),
            "W" => Ok(BeachPosition::West),
            _ => Err(anyhow::anyhow!("Unknown beach position '{value}'. Expected one of: N, S, E, W.")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Beach {
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    pub position: BeachPosition,
}

impl Beach {
    pub fn coordinate(&self) -> Coordinate {
        Coordinate { lat: self.lat, lng: self.lng }
    }
}

/// A forecast point tagged with the beach it was fetched for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeachForecast {
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    pub position: BeachPosition,
    #[serde(flatten)]
    pub point: ForecastPoint,
}

/// All beach forecasts sharing the same hour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeForecast {
    pub time: String,
    pub forecast: Vec<BeachForecast>,
}
