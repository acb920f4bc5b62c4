use crate::task::Task;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One metocean forecast sample. Timestamps are absolute UTC instants;
/// wave height is metres, peak wave period is seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    #[serde(with = "datetime_flex")]
    pub timestamp: DateTime<Utc>,
    pub wave_height: f64,
    pub wave_period: f64,
}

impl ForecastPoint {
    pub fn new(timestamp: DateTime<Utc>, wave_height: f64, wave_period: f64) -> Self {
        Self {
            timestamp,
            wave_height,
            wave_period,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub lat: f64,
    pub lon: f64,
}

/// The forecast document: a site location and a chronologically ordered
/// sequence of samples. The engine consumes only the point vector; the
/// location passes through to presentation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherForecast {
    pub location: Location,
    pub forecast: Vec<ForecastPoint>,
}

/// Inclusive index interval into a forecast sequence, `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightRange {
    pub start: usize,
    pub end: usize,
}

impl HighlightRange {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Number of samples covered; both ends are inclusive.
    pub fn span(&self) -> usize {
        self.end - self.start + 1
    }
}

/// Returns the forecast point closest in time to the task's start date,
/// or `None` for an empty forecast. Ties are broken by earliest sequence
/// position; comparison is on absolute milliseconds.
pub fn nearest_sample<'a>(forecast: &'a [ForecastPoint], task: &Task) -> Option<&'a ForecastPoint> {
    let mut best: Option<(&ForecastPoint, i64)> = None;
    for point in forecast {
        let diff = (point.timestamp - task.start).num_milliseconds().abs();
        match best {
            Some((_, best_diff)) if diff >= best_diff => {}
            _ => best = Some((point, diff)),
        }
    }
    best.map(|(point, _)| point)
}

/// Computes the index range of forecast samples lying within the task's
/// calendar window.
///
/// The scan takes the first sample at or after `task.start` and runs up to
/// (but not past) the first sample strictly after `task.end`, so a sample
/// exactly at the end date is included. Note the asymmetry with
/// [`Task::is_active_at`], which is a plain closed-interval check on a
/// single instant; both conventions are deliberate.
///
/// Returns `None` when no sample falls inside the window.
pub fn overlap_range(forecast: &[ForecastPoint], task: &Task) -> Option<HighlightRange> {
    let start = forecast
        .iter()
        .position(|point| point.timestamp >= task.start)?;
    let end = match forecast.iter().position(|point| point.timestamp > task.end) {
        Some(after) => after.checked_sub(1)?,
        None => forecast.len().checked_sub(1)?,
    };
    if end < start {
        // The whole window sits between two samples.
        return None;
    }
    Some(HighlightRange { start, end })
}

/// Display form of a sample timestamp, e.g. `"Aug 24, 12:00 PM"` (UTC,
/// English month abbreviation).
pub fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%b %-d, %I:%M %p").to_string()
}

/// Serde helper accepting either a full RFC 3339 timestamp or a bare
/// `YYYY-MM-DD` date, which is read as midnight UTC. Serializes back to
/// RFC 3339 with a `Z` suffix.
pub(crate) mod datetime_flex {
    use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Secs, true))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).map_err(serde::de::Error::custom)
    }

    pub fn parse(input: &str) -> Result<DateTime<Utc>, String> {
        if let Ok(instant) = DateTime::parse_from_rfc3339(input.trim()) {
            return Ok(instant.with_timezone(&Utc));
        }
        NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
            .map(|date| date.and_hms_opt(0, 0, 0).unwrap().and_utc())
            .map_err(|_| format!("invalid date or timestamp '{input}'"))
    }
}
