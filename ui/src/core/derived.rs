//! Recent-form metrics derived from one event's personal best and race window.
//!
//! Every value is `None` when its inputs are missing, so "no comparison" never
//! reads as a zero delta. Positive diffs mean slower than the PB.

use api::models::RecentRace;

use super::format::{fixed, format_signed_seconds};
use super::labels::Severity;

/// Races averaged for recent form, newest first.
pub const RECENT_WINDOW: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DerivedMetrics {
    /// Newest race minus PB.
    pub last_race_diff: Option<f64>,
    /// Mean of the three newest races.
    pub recent_three_avg: Option<f64>,
    pub recent_three_avg_diff: Option<f64>,
}

impl DerivedMetrics {
    pub fn compute(pb_time: Option<f64>, recent_races: &[RecentRace]) -> Self {
        let last_race_diff = recent_races
            .first()
            .and_then(|race| race.time)
            .zip(pb_time)
            .map(|(last, pb)| last - pb);

        let recent_three_avg = recent_average(recent_races);
        let recent_three_avg_diff = recent_three_avg.zip(pb_time).map(|(avg, pb)| avg - pb);

        Self {
            last_race_diff,
            recent_three_avg,
            recent_three_avg_diff,
        }
    }
}

/// Defined only when the three newest races all carry a time.
fn recent_average(recent_races: &[RecentRace]) -> Option<f64> {
    if recent_races.len() < RECENT_WINDOW {
        return None;
    }

    recent_races[..RECENT_WINDOW]
        .iter()
        .map(|race| race.time)
        .sum::<Option<f64>>()
        .map(|total| total / RECENT_WINDOW as f64)
}

/// Colour treatment for a signed diff against the PB.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiffTone {
    /// Slower than the PB.
    Regression,
    /// As fast as or faster than the PB.
    Improvement,
}

impl DiffTone {
    pub fn of(diff: f64) -> Self {
        if diff > 0.0 {
            Self::Regression
        } else {
            Self::Improvement
        }
    }

    pub fn severity(self) -> Severity {
        match self {
            Self::Regression => Severity::Negative,
            Self::Improvement => Severity::Positive,
        }
    }
}

/// A diff ready for display: signed text plus its tone, or `N/A` with no tone.
#[derive(Debug, Clone, PartialEq)]
pub struct DiffReading {
    pub text: String,
    pub tone: Option<DiffTone>,
}

impl DiffReading {
    pub fn new(diff: Option<f64>) -> Self {
        match diff {
            Some(diff) => Self {
                text: format_signed_seconds(diff),
                tone: Some(DiffTone::of(diff)),
            },
            None => Self {
                text: "N/A".to_string(),
                tone: None,
            },
        }
    }

    pub fn severity(&self) -> Severity {
        self.tone.map_or(Severity::Neutral, DiffTone::severity)
    }
}

/// One bar of the short-term comparison chart.
#[derive(Debug, Clone, PartialEq)]
pub struct RecentBar {
    pub label: &'static str,
    pub diff: Option<f64>,
}

impl RecentBar {
    pub fn tone(&self) -> Option<DiffTone> {
        self.diff.map(DiffTone::of)
    }

    /// Tooltip text, e.g. `0.35s`.
    pub fn value_text(&self) -> String {
        self.diff
            .map(|diff| format!("{}s", fixed(diff, 2)))
            .unwrap_or_else(|| "N/A".to_string())
    }
}

/// Diffs vs PB for up to the three newest races, oldest on the left.
pub fn recent_bars(pb_time: Option<f64>, recent_races: &[RecentRace]) -> Vec<RecentBar> {
    const LABELS: [&str; RECENT_WINDOW] = ["Latest", "Race -1", "Race -2"];

    let mut bars: Vec<RecentBar> = recent_races
        .iter()
        .take(RECENT_WINDOW)
        .zip(LABELS)
        .map(|(race, label)| RecentBar {
            label,
            diff: race.time.zip(pb_time).map(|(time, pb)| time - pb),
        })
        .collect();
    bars.reverse();
    bars
}

#[cfg(test)]
mod tests {
    use super::*;

    fn races(times: &[f64]) -> Vec<RecentRace> {
        times
            .iter()
            .map(|&time| RecentRace {
                time: Some(time),
                ..RecentRace::default()
            })
            .collect()
    }

    fn assert_close(actual: Option<f64>, expected: f64) {
        let actual = actual.expect("value present");
        assert!((actual - expected).abs() < 1e-9, "{actual} != {expected}");
    }

    #[test]
    fn slower_last_race_is_regression() {
        let metrics = DerivedMetrics::compute(Some(23.5), &races(&[24.0]));
        assert_close(metrics.last_race_diff, 0.5);
        assert_eq!(DiffTone::of(0.5), DiffTone::Regression);
        assert_eq!(DiffTone::Regression.severity(), Severity::Negative);
    }

    #[test]
    fn faster_last_race_is_improvement() {
        let metrics = DerivedMetrics::compute(Some(23.5), &races(&[23.0]));
        assert_close(metrics.last_race_diff, -0.5);
        assert_eq!(DiffTone::of(-0.5), DiffTone::Improvement);
        assert_eq!(DiffTone::of(0.0), DiffTone::Improvement);
    }

    #[test]
    fn short_window_has_no_average() {
        for window in [vec![], races(&[24.0]), races(&[24.0, 23.9])] {
            let metrics = DerivedMetrics::compute(Some(23.5), &window);
            assert_eq!(metrics.recent_three_avg, None);
            assert_eq!(metrics.recent_three_avg_diff, None);
        }
    }

    #[test]
    fn average_uses_three_newest() {
        let metrics = DerivedMetrics::compute(Some(27.3), &races(&[28.0, 27.5, 27.9, 20.0]));
        assert_close(metrics.recent_three_avg, 27.8);
        assert_close(metrics.recent_three_avg_diff, 0.5);
        assert_close(metrics.last_race_diff, 0.7);
    }

    #[test]
    fn missing_pb_leaves_diffs_absent() {
        let metrics = DerivedMetrics::compute(None, &races(&[28.0, 27.5, 27.9]));
        assert_eq!(metrics.last_race_diff, None);
        assert_eq!(metrics.recent_three_avg_diff, None);
        assert_close(metrics.recent_three_avg, 27.8);
    }

    #[test]
    fn gap_in_window_leaves_average_absent() {
        let mut window = races(&[28.0, 27.5, 27.9]);
        window[1].time = None;
        let metrics = DerivedMetrics::compute(Some(27.3), &window);
        assert_eq!(metrics.recent_three_avg, None);
        assert_close(metrics.last_race_diff, 0.7);
    }

    #[test]
    fn empty_window_is_absent_not_zero() {
        assert_eq!(DerivedMetrics::compute(Some(23.5), &[]), DerivedMetrics::default());
        let reading = DiffReading::new(None);
        assert_eq!(reading.text, "N/A");
        assert_eq!(reading.severity(), Severity::Neutral);
    }

    #[test]
    fn readings_are_signed() {
        let reading = DiffReading::new(Some(0.7));
        assert_eq!(reading.text, "+0.70s");
        assert_eq!(reading.tone, Some(DiffTone::Regression));
    }

    #[test]
    fn bars_run_oldest_to_newest() {
        let bars = recent_bars(Some(27.3), &races(&[28.0, 27.5, 27.1, 26.0]));
        let labels: Vec<_> = bars.iter().map(|bar| bar.label).collect();
        assert_eq!(labels, vec!["Race -2", "Race -1", "Latest"]);
        assert_eq!(bars[0].tone(), Some(DiffTone::Improvement));
        assert_eq!(bars[2].tone(), Some(DiffTone::Regression));
        assert_eq!(bars[2].value_text(), "0.70s");
    }

    #[test]
    fn bars_shrink_with_short_window() {
        let bars = recent_bars(Some(27.3), &races(&[28.0]));
        assert_eq!(bars.len(), 1);
        assert_eq!(bars[0].label, "Latest");
        assert!(recent_bars(None, &races(&[28.0]))[0].diff.is_none());
    }
}
