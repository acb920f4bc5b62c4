use chrono::{DateTime, Utc};
use metocean_tool::feasibility::{
    Decision, Reason, check_task_feasibility, evaluate, formatted_reason, is_caution, is_no_go,
    status_color, status_text,
};
use metocean_tool::forecast::ForecastPoint;
use metocean_tool::task::{Task, WeatherLimits};

fn ts(input: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(input)
        .unwrap()
        .with_timezone(&Utc)
}

fn riser_task() -> Task {
    // Hs 3.0 m, Tp (8, 12) s, six-hour window
    Task::new(
        "t1",
        "INSTALLATION - Riser segment",
        ts("2025-09-06T12:00:00Z"),
        ts("2025-09-06T18:00:00Z"),
        1.0,
        WeatherLimits::new(3.0, 8.0, 12.0),
    )
}

fn sample(height: f64, period: f64) -> ForecastPoint {
    ForecastPoint::new(ts("2025-09-06T12:00:00Z"), height, period)
}

#[test]
fn calm_conditions_are_go() {
    let status = check_task_feasibility(&riser_task(), &sample(2.0, 10.0));
    assert!(status.can_proceed);
    assert!(status.reason.starts_with("GO:"));
    assert!(status.reason.contains("2.0m"));
    assert!(status.reason.contains("10.0s"));
    assert_eq!(
        status.reason,
        "GO: Wave height 2.0m, period 10.0s - within limits"
    );
}

#[test]
fn excess_height_is_no_go() {
    let status = check_task_feasibility(&riser_task(), &sample(3.5, 10.0));
    assert!(!status.can_proceed);
    assert!(status.reason.contains("Wave height"));
    assert!(status.reason.contains("exceeds limit"));
    // Limits render at native precision
    assert_eq!(status.reason, "Wave height (3.5m) exceeds limit (3m)");
}

#[test]
fn height_exactly_at_limit_is_no_go() {
    // The Hs bound is inclusive on the NO-GO side
    let advisory = evaluate(&riser_task(), &sample(3.0, 10.0));
    assert_eq!(advisory.decision, Decision::NoGo);
    assert!(matches!(advisory.reason, Reason::HeightExceedsLimit { .. }));
}

#[test]
fn period_at_lower_bound_is_no_go() {
    // Tp bounds are open: p == Tmin is already outside
    let status = check_task_feasibility(&riser_task(), &sample(2.0, 8.0));
    assert!(!status.can_proceed);
    assert!(status.reason.contains("outside acceptable range"));
    assert_eq!(
        status.reason,
        "Wave period (8.0s) outside acceptable range (8-12s)"
    );
}

#[test]
fn period_at_upper_bound_is_no_go() {
    let advisory = evaluate(&riser_task(), &sample(2.0, 12.0));
    assert_eq!(advisory.decision, Decision::NoGo);
}

#[test]
fn height_approaching_limit_is_caution() {
    // 2.5 >= 0.8 * 3.0 = 2.4
    let status = check_task_feasibility(&riser_task(), &sample(2.5, 10.0));
    assert!(status.can_proceed);
    assert!(status.reason.starts_with("CAUTION:"));
    assert!(status.reason.contains("approaching limit"));
}

#[test]
fn height_exactly_at_caution_threshold_is_caution() {
    let advisory = evaluate(&riser_task(), &sample(2.4, 10.0));
    assert_eq!(advisory.decision, Decision::Caution);
}

#[test]
fn period_near_bounds_is_caution() {
    // 8.5 <= 8 + 1
    let status = check_task_feasibility(&riser_task(), &sample(2.0, 8.5));
    assert!(status.can_proceed);
    assert!(status.reason.starts_with("CAUTION:"));
    assert!(status.reason.contains("near range limits"));

    // 11.5 >= 12 - 1 on the upper side
    let upper = evaluate(&riser_task(), &sample(2.0, 11.5));
    assert_eq!(upper.decision, Decision::Caution);
    assert!(matches!(upper.reason, Reason::PeriodNearRangeLimits { .. }));
}

#[test]
fn height_rule_outranks_period_rule() {
    // Both height and period are out of bounds; height is reported
    let advisory = evaluate(&riser_task(), &sample(4.0, 2.0));
    assert!(matches!(advisory.reason, Reason::HeightExceedsLimit { .. }));
}

#[test]
fn evaluation_is_deterministic() {
    let task = riser_task();
    let point = sample(2.5, 9.3);
    assert_eq!(evaluate(&task, &point), evaluate(&task, &point));
    assert_eq!(
        check_task_feasibility(&task, &point),
        check_task_feasibility(&task, &point)
    );
}

#[test]
fn verdicts_echo_task_and_sample_provenance() {
    for point in [sample(2.0, 10.0), sample(3.5, 10.0), sample(2.5, 10.0)] {
        let advisory = evaluate(&riser_task(), &point);
        assert_eq!(advisory.task_id, "t1");
        assert_eq!(advisory.timestamp, point.timestamp);
        let status = advisory.to_status();
        assert_eq!(status.task_id, "t1");
        assert_eq!(status.timestamp, "2025-09-06T12:00:00Z");
    }
}

#[test]
fn no_go_reason_never_carries_caution_token() {
    for point in [sample(3.5, 10.0), sample(2.0, 8.0), sample(2.0, 13.0)] {
        let status = check_task_feasibility(&riser_task(), &point);
        assert!(!status.can_proceed);
        assert!(!status.reason.contains("CAUTION"));
    }
}

#[test]
fn status_text_and_color_mapping_is_exhaustive() {
    let go = check_task_feasibility(&riser_task(), &sample(1.0, 10.0));
    let caution = check_task_feasibility(&riser_task(), &sample(2.5, 10.0));
    let no_go = check_task_feasibility(&riser_task(), &sample(3.5, 10.0));

    assert_eq!(status_text(Some(&go)), "GO");
    assert_eq!(status_text(Some(&caution)), "CAUTION");
    assert_eq!(status_text(Some(&no_go)), "NO-GO");
    assert_eq!(status_text(None), "No Data");

    assert_eq!(status_color(Some(&go)), "success");
    assert_eq!(status_color(Some(&caution)), "warning");
    assert_eq!(status_color(Some(&no_go)), "error");
    assert_eq!(status_color(None), "default");

    assert!(is_caution(&caution) && !is_caution(&go) && !is_caution(&no_go));
    assert!(is_no_go(&no_go) && !is_no_go(&caution));
}

#[test]
fn formatted_reason_prefixes_no_go_only() {
    let go = check_task_feasibility(&riser_task(), &sample(1.0, 10.0));
    let no_go = check_task_feasibility(&riser_task(), &sample(3.5, 10.0));
    assert_eq!(formatted_reason(&go), go.reason);
    assert_eq!(
        formatted_reason(&no_go),
        format!("NO-GO: {}", no_go.reason)
    );
}

#[test]
fn fractional_limits_render_at_native_precision() {
    let task = Task::new(
        "t2",
        "PREP",
        ts("2025-09-06T12:00:00Z"),
        ts("2025-09-06T18:00:00Z"),
        1.0,
        WeatherLimits::new(2.5, 7.5, 11.5),
    );
    let status = check_task_feasibility(&task, &sample(3.0, 10.0));
    assert_eq!(status.reason, "Wave height (3.0m) exceeds limit (2.5m)");
}
