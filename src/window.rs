use crate::forecast::{ForecastPoint, HighlightRange};
use crate::task::Task;

/// Minimum zoom padding, in samples, on either side of the highlight.
const MIN_ZOOM_PADDING: usize = 2;

/// Chart-ready projection of a forecast window: three parallel series
/// plus the index bookkeeping needed to map chart coordinates back to
/// the full forecast.
///
/// `data_range` is the window's position in the full forecast;
/// `filtered_range` is the highlight rebased to window coordinates and
/// is only present for zoomed views.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowedSeries {
    pub wave_heights: Vec<f64>,
    pub wave_periods: Vec<f64>,
    pub timestamps: Vec<String>,
    pub data_range: HighlightRange,
    pub filtered_range: Option<HighlightRange>,
}

/// Min/max wave statistics over a forecast window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeStats {
    pub height_min: f64,
    pub height_max: f64,
    pub period_min: f64,
    pub period_max: f64,
}

/// Produces the data window a viewer should display.
///
/// Without a selected task, a highlight, or the zoom flag, the full
/// forecast is projected as-is. Zoomed, the highlight is extended by
/// 20% of its span (at least [`MIN_ZOOM_PADDING`] samples) on each side,
/// clamped to the forecast, and `filtered_range` carries the highlight
/// in window coordinates.
///
/// Timestamp labels are `"HH:mm"` on small screens and `"MMM dd HH:mm"`
/// otherwise, English locale, UTC.
pub fn windowed_series(
    forecast: &[ForecastPoint],
    selected_task: Option<&Task>,
    highlight: Option<HighlightRange>,
    zoomed: bool,
    small_screen: bool,
) -> WindowedSeries {
    let highlight = match (selected_task, highlight, zoomed) {
        (Some(_), Some(range), true) => range,
        _ => {
            return WindowedSeries {
                wave_heights: forecast.iter().map(|p| p.wave_height).collect(),
                wave_periods: forecast.iter().map(|p| p.wave_period).collect(),
                timestamps: forecast
                    .iter()
                    .map(|p| format_axis_label(p, small_screen))
                    .collect(),
                data_range: HighlightRange::new(0, forecast.len().saturating_sub(1)),
                filtered_range: None,
            };
        }
    };

    let padding = ((highlight.end - highlight.start) / 5).max(MIN_ZOOM_PADDING);
    let start = highlight.start.saturating_sub(padding);
    let end = (highlight.end + padding).min(forecast.len().saturating_sub(1));
    let window = &forecast[start..=end];

    WindowedSeries {
        wave_heights: window.iter().map(|p| p.wave_height).collect(),
        wave_periods: window.iter().map(|p| p.wave_period).collect(),
        timestamps: window
            .iter()
            .map(|p| format_axis_label(p, small_screen))
            .collect(),
        data_range: HighlightRange::new(start, end),
        filtered_range: Some(HighlightRange::new(
            highlight.start - start,
            highlight.end - start,
        )),
    }
}

fn format_axis_label(point: &ForecastPoint, small_screen: bool) -> String {
    let pattern = if small_screen { "%H:%M" } else { "%b %d %H:%M" };
    point.timestamp.format(pattern).to_string()
}

/// Min/max statistics for the displayed window. With a selected task and
/// a highlight the stats cover the highlighted forecast slice; otherwise
/// they cover the supplied series. Returns `None` when the chosen source
/// is empty.
pub fn range_stats(
    forecast: &[ForecastPoint],
    selected_task: Option<&Task>,
    highlight: Option<HighlightRange>,
    wave_heights: &[f64],
    wave_periods: &[f64],
) -> Option<RangeStats> {
    if let (Some(_), Some(range)) = (selected_task, highlight) {
        let end = range.end.min(forecast.len().checked_sub(1)?);
        if range.start > end {
            return None;
        }
        let slice = &forecast[range.start..=end];
        let heights: Vec<f64> = slice.iter().map(|p| p.wave_height).collect();
        let periods: Vec<f64> = slice.iter().map(|p| p.wave_period).collect();
        return stats_over(&heights, &periods);
    }
    stats_over(wave_heights, wave_periods)
}

fn stats_over(heights: &[f64], periods: &[f64]) -> Option<RangeStats> {
    if heights.is_empty() || periods.is_empty() {
        return None;
    }
    Some(RangeStats {
        height_min: fold_min(heights),
        height_max: fold_max(heights),
        period_min: fold_min(periods),
        period_max: fold_max(periods),
    })
}

fn fold_min(values: &[f64]) -> f64 {
    values.iter().copied().fold(f64::INFINITY, f64::min)
}

fn fold_max(values: &[f64]) -> f64 {
    values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
}

/// Maps a click on a (possibly windowed) chart series back to the task
/// whose calendar window contains the underlying sample's timestamp.
///
/// With a selected task and a window, `idx` is rebased by the window's
/// start; otherwise it indexes the full forecast directly. Containment
/// is closed on both ends, and the first task in input order wins.
pub fn find_task_by_data_index<'a>(
    idx: usize,
    forecast: &[ForecastPoint],
    tasks: &'a [Task],
    selected_task: Option<&Task>,
    data_range: Option<HighlightRange>,
) -> Option<&'a Task> {
    if tasks.is_empty() {
        return None;
    }
    let origin = match (selected_task, data_range) {
        (Some(_), Some(range)) => range.start + idx,
        _ => idx,
    };
    let clicked = forecast.get(origin)?;
    tasks
        .iter()
        .find(|task| clicked.timestamp >= task.start && clicked.timestamp <= task.end)
}
