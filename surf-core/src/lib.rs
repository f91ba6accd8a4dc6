//! Core library for the `surf` forecast tool.
//!
//! This crate defines:
//! - The StormGlass marine forecast client and its error taxonomy
//! - The HTTP fetcher abstraction it runs on
//! - The beach forecast service built on top of the client
//! - Configuration & credentials handling
//!
//! It is used by `surf-cli`, but can also be reused by other binaries or services.

pub mod config;
pub mod forecast;
pub mod http;
pub mod model;
pub mod stormglass;
pub mod time;

pub use config::{Config, StormGlassConfig};
pub use forecast::{ForecastProcessingError, ForecastService};
pub use http::{HttpFetcher, ReqwestFetcher, RequestError, Response, is_provider_error_response};
pub use model::{Beach, BeachForecast, BeachPosition, Coordinate, ForecastPoint, TimeForecast};
pub use stormglass::{StormGlass, StormGlassError, TrackedParam};
