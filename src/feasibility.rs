use crate::forecast::ForecastPoint;
use crate::task::Task;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Wave heights at or above this fraction of the `Hs` limit trigger a
/// CAUTION advisory.
pub const CAUTION_HEIGHT_FACTOR: f64 = 0.8;

/// Wave periods within this many seconds of either `Tp` bound trigger a
/// CAUTION advisory.
pub const PERIOD_TOLERANCE_SECONDS: f64 = 1.0;

/// Three-way operational advisory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Decision {
    Go,
    Caution,
    NoGo,
}

/// Structured grounds for an advisory. Carries the numeric values that
/// produced the decision; the legacy reason text is a projection
/// ([`Reason::render`]), so callers can match on the kind instead of
/// grepping strings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Reason {
    HeightExceedsLimit { height: f64, limit: f64 },
    PeriodOutsideRange { period: f64, min: f64, max: f64 },
    HeightApproachingLimit { height: f64, limit: f64 },
    PeriodNearRangeLimits { period: f64, min: f64, max: f64 },
    WithinLimits { height: f64, period: f64 },
}

impl Reason {
    /// Legacy reason text. Dynamic values render at one decimal place,
    /// limits at their native precision; downstream code greps this text
    /// for the literal `"CAUTION"` token, so the wording is contractual.
    pub fn render(&self) -> String {
        match *self {
            Reason::HeightExceedsLimit { height, limit } => {
                format!("Wave height ({height:.1}m) exceeds limit ({limit}m)")
            }
            Reason::PeriodOutsideRange { period, min, max } => {
                format!("Wave period ({period:.1}s) outside acceptable range ({min}-{max}s)")
            }
            Reason::HeightApproachingLimit { height, limit } => {
                format!("CAUTION: Wave height ({height:.1}m) approaching limit ({limit}m)")
            }
            Reason::PeriodNearRangeLimits { period, min, max } => {
                format!("CAUTION: Wave period ({period:.1}s) near range limits ({min}-{max}s)")
            }
            Reason::WithinLimits { height, period } => {
                format!("GO: Wave height {height:.1}m, period {period:.1}s - within limits")
            }
        }
    }
}

/// Verdict for one task against one forecast sample. `task_id` and
/// `timestamp` always echo the inputs regardless of the decision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Advisory {
    pub decision: Decision,
    pub reason: Reason,
    pub task_id: String,
    pub timestamp: DateTime<Utc>,
}

impl Advisory {
    /// Projects the advisory into the legacy wire shape. CAUTION is
    /// encoded as `can_proceed = true` plus the `"CAUTION"` token in the
    /// reason text; a NO-GO reason never carries that token.
    pub fn to_status(&self) -> GoNoGoStatus {
        GoNoGoStatus {
            can_proceed: self.decision != Decision::NoGo,
            reason: self.reason.render(),
            task_id: self.task_id.clone(),
            timestamp: self.timestamp.to_rfc3339_opts(SecondsFormat::Secs, true),
        }
    }
}

/// Legacy wire verdict consumed by presentation code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoNoGoStatus {
    pub can_proceed: bool,
    pub reason: String,
    pub task_id: String,
    pub timestamp: String,
}

/// Evaluates one task against one forecast sample.
///
/// Decision order, first match wins:
/// 1. height at or above `Hs` — NO-GO (the bound is inclusive);
/// 2. period at or outside the `Tp` bounds — NO-GO (the interval is
///    *open*: a period exactly at `Tp.min` or `Tp.max` is NO-GO);
/// 3. height at or above `0.8 * Hs` — CAUTION;
/// 4. period within 1.0 s of either bound — CAUTION;
/// 5. otherwise GO.
pub fn evaluate(task: &Task, sample: &ForecastPoint) -> Advisory {
    let height = sample.wave_height;
    let period = sample.wave_period;
    let hs = task.weather_limits.hs;
    let (tp_min, tp_max) = task.weather_limits.tp;

    let caution_threshold = hs * CAUTION_HEIGHT_FACTOR;

    let (decision, reason) = if height >= hs {
        (
            Decision::NoGo,
            Reason::HeightExceedsLimit { height, limit: hs },
        )
    } else if period <= tp_min || period >= tp_max {
        (
            Decision::NoGo,
            Reason::PeriodOutsideRange {
                period,
                min: tp_min,
                max: tp_max,
            },
        )
    } else if height >= caution_threshold {
        (
            Decision::Caution,
            Reason::HeightApproachingLimit { height, limit: hs },
        )
    } else if period <= tp_min + PERIOD_TOLERANCE_SECONDS
        || period >= tp_max - PERIOD_TOLERANCE_SECONDS
    {
        (
            Decision::Caution,
            Reason::PeriodNearRangeLimits {
                period,
                min: tp_min,
                max: tp_max,
            },
        )
    } else {
        (Decision::Go, Reason::WithinLimits { height, period })
    };

    Advisory {
        decision,
        reason,
        task_id: task.id.clone(),
        timestamp: sample.timestamp,
    }
}

/// Evaluates and projects in one step, matching the legacy entry point.
pub fn check_task_feasibility(task: &Task, sample: &ForecastPoint) -> GoNoGoStatus {
    evaluate(task, sample).to_status()
}

/// Display chip text for a possibly-absent verdict: `"GO"`, `"CAUTION"`,
/// `"NO-GO"`, or `"No Data"` when no verdict exists.
pub fn status_text(status: Option<&GoNoGoStatus>) -> &'static str {
    match status {
        None => "No Data",
        Some(status) if !status.can_proceed => "NO-GO",
        Some(status) if status.reason.contains("CAUTION") => "CAUTION",
        Some(_) => "GO",
    }
}

/// Severity color for a possibly-absent verdict; same mapping as
/// [`status_text`].
pub fn status_color(status: Option<&GoNoGoStatus>) -> &'static str {
    match status {
        None => "default",
        Some(status) if !status.can_proceed => "error",
        Some(status) if status.reason.contains("CAUTION") => "warning",
        Some(_) => "success",
    }
}

/// NO-GO reasons gain a `"NO-GO: "` prefix for display; others pass
/// through unchanged.
pub fn formatted_reason(status: &GoNoGoStatus) -> String {
    if !status.can_proceed {
        format!("NO-GO: {}", status.reason)
    } else {
        status.reason.clone()
    }
}

pub fn is_caution(status: &GoNoGoStatus) -> bool {
    status.can_proceed && status.reason.contains("CAUTION")
}

pub fn is_no_go(status: &GoNoGoStatus) -> bool {
    !status.can_proceed
}
