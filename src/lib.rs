pub mod feasibility;
pub mod forecast;
pub mod metadata;
pub mod persistence;
pub mod project;
pub mod task;
pub(crate) mod validation;
pub mod window;

pub use feasibility::{
    Advisory, CAUTION_HEIGHT_FACTOR, Decision, GoNoGoStatus, PERIOD_TOLERANCE_SECONDS, Reason,
    check_task_feasibility, evaluate, formatted_reason, is_caution, is_no_go, status_color,
    status_text,
};
pub use forecast::{
    ForecastPoint, HighlightRange, Location, WeatherForecast, format_timestamp, nearest_sample,
    overlap_range,
};
pub use metadata::{MapCoordinates, ProjectMetadata, SiteLocation};
pub use persistence::{
    PersistenceError, PersistenceResult, load_forecast_from_csv, load_forecast_from_json,
    load_project_data_from_json, save_forecast_to_csv, save_forecast_to_json,
    save_project_data_to_json,
};
pub use project::{
    DocumentInfo, Project, ProjectData, Vessel, calculate_go_no_go_statuses,
};
pub use task::{
    Task, TaskKind, WeatherLimits, duration_text, find_task_by_id, sort_tasks_by_start_date,
    task_description, wave_height_limit_text, wave_period_limit_text,
};
pub use window::{RangeStats, WindowedSeries, find_task_by_data_index, range_stats, windowed_series};
