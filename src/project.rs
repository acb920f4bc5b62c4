use crate::feasibility::{self, GoNoGoStatus};
use crate::forecast::{self, ForecastPoint};
use crate::metadata::ProjectMetadata;
use crate::task::Task;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vessel {
    pub id: String,
    pub name: String,
}

/// A project owns its tasks; tasks are immutable during evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    #[serde(flatten)]
    pub metadata: ProjectMetadata,
    pub tasks: Vec<Task>,
}

impl Project {
    pub fn new(metadata: ProjectMetadata) -> Self {
        Self {
            metadata,
            tasks: Vec::new(),
        }
    }

    pub fn find_task(&self, task_id: &str) -> Option<&Task> {
        crate::task::find_task_by_id(&self.tasks, task_id)
    }

    /// Tasks in ascending start-date order; the stored order is kept.
    pub fn sorted_tasks(&self) -> Vec<Task> {
        crate::task::sort_tasks_by_start_date(&self.tasks)
    }

    /// Runs the feasibility evaluator over every task against the
    /// forecast sample nearest each task's start.
    pub fn evaluate(&self, forecast: &[ForecastPoint]) -> BTreeMap<String, GoNoGoStatus> {
        calculate_go_no_go_statuses(&self.tasks, forecast)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentInfo {
    pub title: String,
    pub generated: String,
    pub version: String,
}

/// Top-level project document: a header, the vessel register, and one or
/// more projects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectData {
    pub metadata: DocumentInfo,
    pub vessels: Vec<Vessel>,
    pub projects: Vec<Project>,
}

/// Evaluates every task against its nearest forecast sample and keys the
/// verdicts by task id. Tasks with no aligned sample (only possible on an
/// empty forecast) are omitted rather than given a fabricated verdict.
/// The `BTreeMap` gives callers deterministic, id-ordered iteration.
pub fn calculate_go_no_go_statuses(
    tasks: &[Task],
    forecast: &[ForecastPoint],
) -> BTreeMap<String, GoNoGoStatus> {
    let mut statuses = BTreeMap::new();
    for task in tasks {
        if let Some(sample) = forecast::nearest_sample(forecast, task) {
            statuses.insert(task.id.clone(), feasibility::check_task_feasibility(task, sample));
        }
    }
    statuses
}
