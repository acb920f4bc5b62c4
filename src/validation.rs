use crate::forecast::ForecastPoint;
use crate::task::Task;
use std::collections::HashSet;
use std::fmt;

#[derive(Debug, Clone)]
pub struct ValidationError {
    message: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ValidationError {}

pub fn validate_task(task: &Task) -> Result<(), ValidationError> {
    if task.id.trim().is_empty() {
        return Err(ValidationError::new("task has an empty id"));
    }

    if task.start > task.end {
        return Err(ValidationError::new(format!(
            "task {} starts {} after it ends {}",
            task.id, task.start, task.end
        )));
    }

    if !task.duration.is_finite() || task.duration < 0.0 {
        return Err(ValidationError::new(format!(
            "task {} has invalid duration {}",
            task.id, task.duration
        )));
    }

    let limits = &task.weather_limits;
    if !limits.hs.is_finite() || limits.hs <= 0.0 {
        return Err(ValidationError::new(format!(
            "task {} has invalid Hs limit {} (must be a positive finite number)",
            task.id, limits.hs
        )));
    }

    let (tp_min, tp_max) = limits.tp;
    if !tp_min.is_finite() || !tp_max.is_finite() {
        return Err(ValidationError::new(format!(
            "task {} has non-finite Tp bounds ({tp_min}, {tp_max})",
            task.id
        )));
    }
    if tp_min >= tp_max {
        return Err(ValidationError::new(format!(
            "task {} has inverted Tp range ({tp_min}, {tp_max})",
            task.id
        )));
    }

    Ok(())
}

pub fn validate_task_collection(tasks: &[Task]) -> Result<(), ValidationError> {
    let mut seen_ids = HashSet::with_capacity(tasks.len());
    for task in tasks {
        if !seen_ids.insert(task.id.as_str()) {
            return Err(ValidationError::new(format!(
                "duplicate task id {}",
                task.id
            )));
        }
        validate_task(task)?;
    }
    Ok(())
}

/// Forecast points must carry finite, non-negative wave numbers and be
/// strictly increasing in time.
pub fn validate_forecast(points: &[ForecastPoint]) -> Result<(), ValidationError> {
    for (idx, point) in points.iter().enumerate() {
        if !point.wave_height.is_finite() || point.wave_height < 0.0 {
            return Err(ValidationError::new(format!(
                "forecast point #{idx} has invalid wave_height {}",
                point.wave_height
            )));
        }
        if !point.wave_period.is_finite() || point.wave_period < 0.0 {
            return Err(ValidationError::new(format!(
                "forecast point #{idx} has invalid wave_period {}",
                point.wave_period
            )));
        }
        if idx > 0 && points[idx - 1].timestamp >= point.timestamp {
            return Err(ValidationError::new(format!(
                "forecast timestamps must be strictly increasing (point #{idx} at {} does not follow {})",
                point.timestamp,
                points[idx - 1].timestamp
            )));
        }
    }
    Ok(())
}
