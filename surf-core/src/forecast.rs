use thiserror::Error;

use crate::{
    http::HttpFetcher,
    model::{Beach, BeachForecast, TimeForecast},
    stormglass::{StormGlass, StormGlassError},
};

/// Client failure during a forecast run. The message embeds the client's own.
#[derive(Debug, Error)]
#[error("Unexpected error during the forecast processing: {0}")]
pub struct ForecastProcessingError(StormGlassError);

impl ForecastProcessingError {
    pub fn client_error(&self) -> &StormGlassError {
        &self.0
    }
}

/// Builds per-hour forecasts for a set of beaches on top of [`StormGlass`].
#[derive(Debug, Clone)]
pub struct ForecastService<F> {
    stormglass: StormGlass<F>,
}

impl<F: HttpFetcher> ForecastService<F> {
    pub fn new(stormglass: StormGlass<F>) -> Self {
        Self { stormglass }
    }

    /// Fetch every beach in order and group the results by hour.
    ///
    /// Hours keep the order they were first seen in; within an hour, beaches keep
    /// the order they were given in. The first failing beach aborts the run.
    pub async fn process_forecast_for_beaches(
        &self,
        beaches: &[Beach],
    ) -> Result<Vec<TimeForecast>, ForecastProcessingError> {
        let mut enriched = Vec::new();

        for beach in beaches {
            let coordinate = beach.coordinate();
            let points = self
                .stormglass
                .fetch_points(coordinate.lat, coordinate.lng)
                .await
                .map_err(|err| {
                    tracing::error!(beach = %beach.name, error = %err, "forecast fetch failed");
                    ForecastProcessingError(err)
                })?;

            tracing::debug!(beach = %beach.name, points = points.len(), "fetched forecast");

            enriched.extend(points.into_iter().map(|point| BeachForecast {
                name: beach.name.clone(),
                lat: beach.lat,
                lng: beach.lng,
                position: beach.position,
                point,
            }));
        }

        Ok(group_by_time(enriched))
    }
}

fn group_by_time(forecasts: Vec<BeachForecast>) -> Vec<TimeForecast> {
    let mut grouped: Vec<TimeForecast> = Vec::new();

    for forecast in forecasts {
        match grouped.iter_mut().find(|t| t.time == forecast.point.time) {
            Some(slot) => slot.forecast.push(forecast),
            None => grouped.push(TimeForecast { time: forecast.point.time.clone(), forecast: vec![forecast] }),
        }
    }

    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        http::RequestError,
        model::{BeachPosition, ForecastPoint},
        stormglass::tests::{FakeFetcher, NORMALIZED_3_HOURS, WEATHER_3_HOURS},
    };
    use std::error::Error as _;

    fn manly() -> Beach {
        Beach { name: "Manly".into(), lat: -33.792726, lng: 151.289824, position: BeachPosition::East }
    }

    fn dee_why() -> Beach {
        Beach { name: "Dee Why".into(), lat: -33.750919, lng: 151.289824, position: BeachPosition::South }
    }

    fn service(fetcher: FakeFetcher) -> ForecastService<FakeFetcher> {
        ForecastService::new(StormGlass::new(fetcher))
    }

    #[tokio::test]
    async fn groups_beach_forecasts_by_time() {
        let fetcher = FakeFetcher::ok(serde_json::from_str(WEATHER_3_HOURS).unwrap());
        let expected_points: Vec<ForecastPoint> = serde_json::from_str(NORMALIZED_3_HOURS).unwrap();

        let forecast = service(fetcher).process_forecast_for_beaches(&[manly(), dee_why()]).await.unwrap();

        assert_eq!(forecast.len(), 3);
        for (slot, point) in forecast.iter().zip(&expected_points) {
            assert_eq!(slot.time, point.time);
            let names: Vec<&str> = slot.forecast.iter().map(|f| f.name.as_str()).collect();
            assert_eq!(names, vec!["Manly", "Dee Why"]);
            assert_eq!(slot.forecast[0].point, *point);
            assert_eq!(slot.forecast[1].position, BeachPosition::South);
        }
    }

    #[tokio::test]
    async fn no_beaches_means_no_forecast() {
        let fetcher = FakeFetcher::ok(serde_json::from_str(WEATHER_3_HOURS).unwrap());

        let forecast = service(fetcher).process_forecast_for_beaches(&[]).await.unwrap();

        assert!(forecast.is_empty());
    }

    #[tokio::test]
    async fn wraps_client_errors() {
        let fetcher = FakeFetcher::err(RequestError::transport("Network Error"));

        let err = service(fetcher).process_forecast_for_beaches(&[manly()]).await.unwrap_err();

        assert_eq!(
            err.to_string(),
            "Unexpected error during the forecast processing: \
             Unexpected error when trying to communicate to StormGlass: Network Error"
        );
        assert!(err.source().is_none());
        assert!(matches!(err.client_error(), StormGlassError::Transport { .. }));
    }
}
