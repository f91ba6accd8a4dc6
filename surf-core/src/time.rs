use chrono::{DateTime, Duration, Utc};

/// Epoch seconds `days` after `now`.
pub fn unix_time_for_future_day(now: DateTime<Utc>, days: u32) -> i64 {
    (now + Duration::days(i64::from(days))).timestamp()
}

/// Start/end of a forecast request, in epoch seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForecastWindow {
    pub start: i64,
    pub end: i64,
}

impl ForecastWindow {
    pub fn from_now(now: DateTime<Utc>, days: u32) -> Self {
        Self { start: now.timestamp(), end: unix_time_for_future_day(now, days) }
    }
}
