use super::{PersistenceError, PersistenceResult};
use crate::forecast::{ForecastPoint, Location, WeatherForecast, datetime_flex};
use crate::project::ProjectData;
use chrono::SecondsFormat;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::Path;

/// Loads and validates a project document. Every project's task list
/// must pass the task validation rules (unique ids, ordered windows,
/// usable weather limits).
pub fn load_project_data_from_json<P: AsRef<Path>>(path: P) -> PersistenceResult<ProjectData> {
    let file = File::open(path)?;
    let data: ProjectData = serde_json::from_reader(file)?;
    for project in &data.projects {
        super::validate_tasks(&project.tasks)?;
        if project.metadata.start > project.metadata.end {
            return Err(PersistenceError::InvalidData(format!(
                "project {} starts after it ends",
                project.metadata.id
            )));
        }
    }
    Ok(data)
}

pub fn save_project_data_to_json<P: AsRef<Path>>(
    data: &ProjectData,
    path: P,
) -> PersistenceResult<()> {
    for project in &data.projects {
        super::validate_tasks(&project.tasks)?;
    }
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, data)?;
    Ok(())
}

pub fn load_forecast_from_json<P: AsRef<Path>>(path: P) -> PersistenceResult<WeatherForecast> {
    let file = File::open(path)?;
    let forecast: WeatherForecast = serde_json::from_reader(file)?;
    super::validate_forecast_points(&forecast.forecast)?;
    Ok(forecast)
}

pub fn save_forecast_to_json<P: AsRef<Path>>(
    forecast: &WeatherForecast,
    path: P,
) -> PersistenceResult<()> {
    super::validate_forecast_points(&forecast.forecast)?;
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, forecast)?;
    Ok(())
}

/// Flat CSV row. The first row is a location row (timestamp
/// `__location__`) carrying the site coordinates; every other row is one
/// forecast sample.
#[derive(Default, Serialize, Deserialize)]
struct ForecastCsvRecord {
    timestamp: String,
    wave_height: String,
    wave_period: String,
    #[serde(default)]
    lat: String,
    #[serde(default)]
    lon: String,
}

const LOCATION_ROW_TAG: &str = "__location__";

impl ForecastCsvRecord {
    fn location_row(location: Location) -> Self {
        let mut record = ForecastCsvRecord::default();
        record.timestamp = LOCATION_ROW_TAG.to_string();
        record.lat = location.lat.to_string();
        record.lon = location.lon.to_string();
        record
    }

    fn is_location_row(&self) -> bool {
        self.timestamp.trim() == LOCATION_ROW_TAG
    }

    fn from_point(point: &ForecastPoint) -> Self {
        let mut record = ForecastCsvRecord::default();
        record.timestamp = point.timestamp.to_rfc3339_opts(SecondsFormat::Secs, true);
        record.wave_height = point.wave_height.to_string();
        record.wave_period = point.wave_period.to_string();
        record
    }

    fn into_point(self) -> PersistenceResult<ForecastPoint> {
        let timestamp = datetime_flex::parse(&self.timestamp)
            .map_err(PersistenceError::InvalidData)?;
        Ok(ForecastPoint {
            timestamp,
            wave_height: parse_f64("wave_height", &self.wave_height)?,
            wave_period: parse_f64("wave_period", &self.wave_period)?,
        })
    }
}

pub fn save_forecast_to_csv<P: AsRef<Path>>(
    forecast: &WeatherForecast,
    path: P,
) -> PersistenceResult<()> {
    super::validate_forecast_points(&forecast.forecast)?;
    let file = File::create(path)?;
    let mut writer = csv::Writer::from_writer(file);
    writer.serialize(ForecastCsvRecord::location_row(forecast.location))?;
    for point in &forecast.forecast {
        writer.serialize(ForecastCsvRecord::from_point(point))?;
    }
    writer.flush()?;
    Ok(())
}

pub fn load_forecast_from_csv<P: AsRef<Path>>(path: P) -> PersistenceResult<WeatherForecast> {
    let file = File::open(path)?;
    let mut reader = csv::Reader::from_reader(file);
    let mut location: Option<Location> = None;
    let mut points = Vec::new();
    for record in reader.deserialize::<ForecastCsvRecord>() {
        let record = record?;
        if record.is_location_row() {
            if location.is_some() {
                return Err(PersistenceError::InvalidData(
                    "CSV file contained multiple location rows".into(),
                ));
            }
            location = Some(Location {
                lat: parse_f64("lat", &record.lat)?,
                lon: parse_f64("lon", &record.lon)?,
            });
            continue;
        }
        points.push(record.into_point()?);
    }

    let location = location.ok_or_else(|| {
        PersistenceError::InvalidData("CSV file contained no location row".into())
    })?;
    if points.is_empty() {
        return Err(PersistenceError::InvalidData(
            "CSV file contained no forecast points".into(),
        ));
    }
    super::validate_forecast_points(&points)?;

    Ok(WeatherForecast {
        location,
        forecast: points,
    })
}

fn parse_f64(field: &str, input: &str) -> PersistenceResult<f64> {
    input.trim().parse::<f64>().map_err(|e| {
        PersistenceError::InvalidData(format!("invalid {field} '{input}': {e}"))
    })
}
