//! Human-friendly rendering of forecasts.

use std::fmt::Write;

use surf_core::{Beach, BeachForecast, ForecastPoint, TimeForecast};

pub fn points_table(points: &[ForecastPoint]) -> String {
    if points.is_empty() {
        return "No complete forecast hours returned.\n".to_string();
    }

    let mut out = String::new();
    for point in points {
        let _ = writeln!(out, "{}  {}", point.time, conditions(point));
    }
    out
}

pub fn beaches_table(beaches: &[Beach]) -> String {
    if beaches.is_empty() {
        return "No beaches configured.\n".to_string();
    }

    let mut out = String::new();
    for beach in beaches {
        let _ = writeln!(out, "{:<20} {:>11} {:>11}  {}", beach.name, beach.lat, beach.lng, beach.position);
    }
    out
}

pub fn forecast_table(forecast: &[TimeForecast]) -> String {
    if forecast.is_empty() {
        return "No complete forecast hours returned.\n".to_string();
    }

    let mut out = String::new();
    for slot in forecast {
        let _ = writeln!(out, "{}", slot.time);
        for BeachForecast { name, position, point, .. } in &slot.forecast {
            let _ = writeln!(out, "  {name:<20} ({position})  {}", conditions(point));
        }
    }
    out
}

fn conditions(point: &ForecastPoint) -> String {
    format!(
        "swell {:.2} m / {:.1} s from {:.0}°  waves {:.2} m from {:.0}°  wind {:.1} m/s from {:.0}°",
        point.swell_height,
        point.swell_period,
        point.swell_direction,
        point.wave_height,
        point.wave_direction,
        point.wind_speed,
        point.wind_direction,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use surf_core::BeachPosition;

    fn point(time: &str) -> ForecastPoint {
        ForecastPoint {
            time: time.into(),
            swell_direction: 64.26,
            swell_height: 0.15,
            swell_period: 3.89,
            wave_direction: 231.38,
            wave_height: 0.47,
            wind_direction: 299.45,
            wind_speed: 100.0,
        }
    }

    #[test]
    fn renders_point_line() {
        let table = points_table(&[point("2020-04-26T00:00:00+00:00")]);

        assert_eq!(
            table,
            "2020-04-26T00:00:00+00:00  swell 0.15 m / 3.9 s from 64°  waves 0.47 m from 231°  wind 100.0 m/s from 299°\n"
        );
    }

    #[test]
    fn empty_inputs_render_a_notice() {
        assert!(points_table(&[]).starts_with("No complete forecast hours"));
        assert!(forecast_table(&[]).starts_with("No complete forecast hours"));
        assert!(beaches_table(&[]).starts_with("No beaches configured"));
    }

    #[test]
    fn forecast_lists_beaches_under_each_hour() {
        let slot = TimeForecast {
            time: "2020-04-26T00:00:00+00:00".into(),
            forecast: vec![BeachForecast {
                name: "Manly".into(),
                lat: -33.792726,
                lng: 151.289824,
                position: BeachPosition::East,
                point: point("2020-04-26T00:00:00+00:00"),
            }],
        };

        let table = forecast_table(&[slot]);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines[0], "2020-04-26T00:00:00+00:00");
        assert!(lines[1].starts_with("  Manly"));
        assert!(lines[1].contains("(E)"));
    }
}
