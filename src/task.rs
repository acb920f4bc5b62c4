use crate::forecast::datetime_flex;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Per-task weather tolerance envelope: `hs` is a strict upper bound on
/// wave height in metres, `tp` is an acceptable peak-period range in
/// seconds. Note that the period range is treated as an *open* interval
/// by the evaluator: a period exactly at either bound is NO-GO.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeatherLimits {
    #[serde(rename = "Hs")]
    pub hs: f64,
    #[serde(rename = "Tp")]
    pub tp: (f64, f64),
}

impl WeatherLimits {
    pub fn new(hs: f64, tp_min: f64, tp_max: f64) -> Self {
        Self {
            hs,
            tp: (tp_min, tp_max),
        }
    }
}

/// A scheduled operation with a calendar window and a weather envelope.
/// The window is closed on both ends for containment checks. `duration`
/// is advisory display data and is never re-derived from the window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub level: u32,
    #[serde(default)]
    pub parent_id: String,
    #[serde(rename = "startDate", with = "datetime_flex")]
    pub start: DateTime<Utc>,
    #[serde(rename = "endDate", with = "datetime_flex")]
    pub end: DateTime<Utc>,
    pub duration: f64,
    pub weather_limits: WeatherLimits,
}

impl Task {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        duration: f64,
        weather_limits: WeatherLimits,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            level: 0,
            parent_id: String::new(),
            start,
            end,
            duration,
            weather_limits,
        }
    }

    pub fn kind(&self) -> TaskKind {
        TaskKind::classify(&self.name)
    }

    /// True iff `now` lies within the task window, both ends inclusive.
    pub fn is_active_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.start && now <= self.end
    }

    pub fn is_active(&self) -> bool {
        self.is_active_at(Utc::now())
    }
}

/// Discrete task category derived from the display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TaskKind {
    Storm,
    Prep,
    Installation,
    Other,
}

impl TaskKind {
    /// Keyword table in priority order; priority resolves same-position
    /// matches.
    const KEYWORDS: [(TaskKind, &'static str); 3] = [
        (TaskKind::Storm, "STORM"),
        (TaskKind::Prep, "PREP"),
        (TaskKind::Installation, "INSTALLATION"),
    ];

    /// Case-sensitive substring classification. The keyword whose match
    /// begins earliest in the name wins; names are never normalised, so
    /// `"storm riding"` is `Other`.
    pub fn classify(name: &str) -> Self {
        let mut earliest: Option<(TaskKind, usize)> = None;
        for (kind, keyword) in Self::KEYWORDS {
            if let Some(position) = name.find(keyword) {
                match earliest {
                    Some((_, best)) if best <= position => {}
                    _ => earliest = Some((kind, position)),
                }
            }
        }
        earliest.map(|(kind, _)| kind).unwrap_or(TaskKind::Other)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskKind::Storm => "STORM",
            TaskKind::Prep => "PREP",
            TaskKind::Installation => "INSTALLATION",
            TaskKind::Other => "OTHER",
        }
    }

    /// Operator-facing description for the category.
    pub fn description(&self) -> &'static str {
        match self {
            TaskKind::Storm => "Vessel maintaining position during adverse weather conditions",
            TaskKind::Prep => "Preparation activities for installation operations",
            TaskKind::Installation => {
                "Active installation of riser components on offshore platform"
            }
            TaskKind::Other => "Marine operation visualization",
        }
    }

    /// Icon category consumed by the dashboard's icon set.
    pub fn icon_name(&self) -> &'static str {
        match self {
            TaskKind::Storm => "storm",
            TaskKind::Prep => "engineering",
            TaskKind::Installation => "build",
            TaskKind::Other => "schedule",
        }
    }
}

pub fn task_description(name: &str) -> &'static str {
    TaskKind::classify(name).description()
}

pub fn duration_text(duration: f64) -> String {
    if duration == 1.0 {
        format!("{duration} day")
    } else {
        format!("{duration} days")
    }
}

pub fn wave_height_limit_text(hs: f64) -> String {
    format!("Wave Height \u{2264} {hs}m")
}

pub fn wave_period_limit_text(tp: (f64, f64)) -> String {
    format!("Period: {}-{}s", tp.0, tp.1)
}

/// Returns a new vector sorted ascending by start date. The sort is
/// stable (equal starts keep input order) and the input is untouched.
pub fn sort_tasks_by_start_date(tasks: &[Task]) -> Vec<Task> {
    let mut sorted = tasks.to_vec();
    sorted.sort_by_key(|task| task.start);
    sorted
}

pub fn find_task_by_id<'a>(tasks: &'a [Task], task_id: &str) -> Option<&'a Task> {
    tasks.iter().find(|task| task.id == task_id)
}
