//! End-to-end scenarios: raw API payloads through the dashboard core.

use api::models::{EventPerformance, ResultComparison};
use serde_json::json;
use ui::competition::ComparisonView;
use ui::core::{
    derived::{DerivedMetrics, DiffTone},
    format::format_time,
    labels::Severity,
    session::{AthleteSession, PageState, Settled},
};
use ui::performance::{EventInsight, InsightLayout, InsightState};

fn overview_fixture() -> Vec<EventPerformance> {
    serde_json::from_value(json!([
        {
            "event_name": "50m Freestyle",
            "personal_best": { "time": 27.30, "unit": "s", "date": "2024-03-05" },
            "analysis": {
                "stability": { "value": 92.4, "unit": "score", "label": "high" },
                "trend": { "value": 0.4, "unit": "s", "label": "declining" },
                "pb_freshness": { "days_since_pb": 210, "label": "not_updated_recently" }
            },
            "recent_races": [
                { "time": 28.0, "date": "2024-10-01", "competition_name": "Autumn Cup" },
                { "time": 27.5, "date": "2024-08-12", "competition_name": "Summer Open" },
                { "time": 27.9, "date": "2024-06-30", "competition_name": "City Games" }
            ],
            "charts": {
                "sparkline": [27.3, 27.9, 27.5, 28.0],
                "trend_chart": {
                    "dates": ["2024-06-30", "2024-08-12", "2024-10-01"],
                    "times": [27.9, 27.5, 28.0],
                    "pb_line": 27.3
                }
            }
        },
        {
            "event_name": "200m Backstroke",
            "personal_best": null,
            "analysis": { "stability": { "label": "volatile" } },
            "recent_races": null,
            "charts": null
        }
    ]))
    .expect("fixture decodes")
}

#[test]
fn one_event_scenario_reads_slower_than_pb() {
    let events = overview_fixture();
    let freestyle = &events[0];

    let metrics = DerivedMetrics::compute(freestyle.pb_time(), &freestyle.recent_races);
    assert!((metrics.last_race_diff.unwrap() - 0.70).abs() < 1e-9);
    assert!((metrics.recent_three_avg.unwrap() - 27.80).abs() < 1e-9);
    assert!((metrics.recent_three_avg_diff.unwrap() - 0.50).abs() < 1e-9);

    let insight = EventInsight::from_performance(freestyle);
    assert_eq!(insight.pb_time, "27.30s");
    assert_eq!(insight.last_race.text, "+0.70s");
    assert_eq!(insight.recent_average_time, "27.80s");
    assert_eq!(insight.recent_average.text, "+0.50s");
    for reading in [&insight.last_race, &insight.recent_average] {
        assert_eq!(reading.tone, Some(DiffTone::Regression));
        assert_eq!(reading.severity(), Severity::Negative);
    }
    assert_eq!(insight.freshness.short_text, "Not updated recently");
    assert_eq!(insight.stability_score, "92");
}

#[test]
fn partial_payload_degrades_to_placeholders() {
    let events = overview_fixture();
    let insight = EventInsight::from_performance(&events[1]);

    assert_eq!(insight.pb_time, "N/A");
    assert_eq!(insight.stability.short_text, "N/A");
    assert_eq!(insight.stability.severity, Severity::Neutral);
    assert_eq!(insight.metrics, DerivedMetrics::default());
    assert_eq!(insight.recent_average.text, "N/A");
    assert!(insight.trend_series.is_empty());
    assert!(insight.sparkline.is_empty());
}

#[test]
fn trend_chart_is_inverted_with_short_dates() {
    let events = overview_fixture();
    let series = &EventInsight::from_performance(&events[0]).trend_series;

    let labels: Vec<&str> = series.points.iter().map(|p| p.label.as_str()).collect();
    assert_eq!(labels, vec!["Jun 30", "Aug 12", "Oct 1"]);
    assert_eq!(series.plotted(), vec![-27.9, -27.5, -28.0]);

    let shown: Vec<String> = series
        .plotted()
        .into_iter()
        .map(|v| format_time(Some(v.abs()), "N/A"))
        .collect();
    assert_eq!(shown, vec!["27.90s", "27.50s", "28.00s"]);
    assert_eq!(series.pb_label().as_deref(), Some("PB: 27.30s"));
}

#[test]
fn toggling_twice_renders_the_same_layout() {
    let events = overview_fixture();
    let before = (
        EventInsight::from_performance(&events[0]),
        InsightLayout::new(InsightState::default()),
    );
    let state = InsightState::default().toggled();
    assert!(!InsightLayout::new(state).detail.is_empty());
    let after = (
        EventInsight::from_performance(&events[0]),
        InsightLayout::new(state.toggled()),
    );
    assert_eq!(before, after);
}

#[test]
fn switching_athletes_drops_the_late_overview() {
    let mut session = AthleteSession::default();
    session.select(Some("Li Wei".into()));
    let first = session.ticket();
    session.select(Some("Chen Yu".into()));
    let second = session.ticket();

    let late = session.settle(&first, Ok(overview_fixture()));
    assert_eq!(PageState::of(Some(&late)), PageState::Loading);

    let fresh = session.settle(&second, Ok(overview_fixture()));
    match PageState::of(Some(&fresh)) {
        PageState::Ready(events) => assert_eq!(events.len(), 2),
        other => panic!("expected ready page, got {other:?}"),
    }
    assert!(matches!(fresh, Settled::Current(_)));
}

#[test]
fn race_comparison_from_payload() {
    let comparison: ResultComparison = serde_json::from_value(json!({
        "target_result": {
            "athlete_name": "Li Wei",
            "record_time": 59.4,
            "rank": 2,
            "competition_name": "National Games",
            "event_name": "100m Freestyle",
            "date": "2024-10-20"
        },
        "records": {
            "national_record": { "time": 48.9, "diff": 10.5 },
            "games_record": { "time": 50.1, "diff": 9.3 }
        },
        "competitor_comparison": [
            { "rank": 1, "athlete_name": "Chen Yu", "record_time": 58.9, "diff_from_target": -0.5, "diff_label": "slightly_ahead" },
            { "rank": 2, "athlete_name": "Li Wei", "record_time": 59.4, "diff_from_target": 0.0, "diff_label": "your_result" },
            { "rank": 3, "athlete_name": "Wang Fang", "record_time": 63.0, "diff_from_target": 3.6, "diff_label": "far_behind" }
        ]
    }))
    .expect("fixture decodes");

    let view = ComparisonView::from_comparison(&comparison);
    assert_eq!(view.your_rank, "2");
    assert_eq!(view.records[1].time, "48.90s");
    assert_eq!(view.records[1].gap.text, "+10.50s");
    assert_eq!(view.rows[2].time, "1:03.00");
    assert!(view.rows[1].highlighted());

    let domain = view.domain.expect("axis domain");
    assert!((domain.min - 48.4).abs() < 1e-9);
    assert!((domain.max - 63.5).abs() < 1e-9);
}
