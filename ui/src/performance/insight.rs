use api::models::EventPerformance;

use crate::core::{
    chart::{self, TrendSeries},
    derived::{self, DerivedMetrics, DiffReading, RecentBar},
    format,
    labels::{self, Presentation},
};

/// Everything an event card displays, rebuilt from the payload on every render.
#[derive(Debug, Clone, PartialEq)]
pub struct EventInsight {
    pub event_name: String,
    pub pb_time: String,
    pub pb_date: String,
    pub freshness: Presentation,
    pub days_since_pb: Option<i64>,
    pub stability: Presentation,
    pub stability_score: String,
    pub trend: Presentation,
    pub trend_delta: String,
    pub sparkline: Vec<f64>,
    pub trend_series: TrendSeries,
    pub recent_bars: Vec<RecentBar>,
    pub metrics: DerivedMetrics,
    pub last_race_time: String,
    pub last_race: DiffReading,
    pub recent_average_time: String,
    pub recent_average: DiffReading,
}

impl EventInsight {
    pub fn from_performance(performance: &EventPerformance) -> Self {
        let pb_time = performance.pb_time();
        let analysis = performance.analysis.as_ref();
        let stability = analysis.and_then(|a| a.stability.as_ref());
        let trend = analysis.and_then(|a| a.trend.as_ref());
        let freshness = analysis.and_then(|a| a.pb_freshness.as_ref());
        let charts = performance.charts.as_ref();

        let metrics = DerivedMetrics::compute(pb_time, &performance.recent_races);
        let last_time = performance.recent_races.first().and_then(|race| race.time);

        Self {
            event_name: performance.event_name.clone(),
            pb_time: format::format_time(pb_time, "N/A"),
            pb_date: performance
                .personal_best
                .as_ref()
                .and_then(|pb| pb.date.clone())
                .unwrap_or_else(|| "N/A".to_string()),
            freshness: labels::freshness(freshness.and_then(|f| f.label)),
            days_since_pb: freshness.and_then(|f| f.days_since_pb),
            stability: labels::stability(stability.and_then(|s| s.label)),
            stability_score: format::format_score(stability.and_then(|s| s.value)),
            trend: labels::trend(trend.and_then(|t| t.label)),
            trend_delta: trend
                .and_then(|t| t.value)
                .map(format::format_signed_seconds)
                .unwrap_or_else(|| "N/A".to_string()),
            sparkline: charts
                .map(|c| chart::sparkline(&c.sparkline))
                .unwrap_or_default(),
            trend_series: TrendSeries::from_chart(charts.and_then(|c| c.trend_chart.as_ref())),
            recent_bars: derived::recent_bars(pb_time, &performance.recent_races),
            metrics,
            last_race_time: format::format_time(last_time, "N/A"),
            last_race: DiffReading::new(metrics.last_race_diff),
            recent_average_time: format::format_time(metrics.recent_three_avg, "N/A"),
            recent_average: DiffReading::new(metrics.recent_three_avg_diff),
        }
    }

    pub fn freshness_hint(&self) -> Option<String> {
        self.days_since_pb.map(|days| match days {
            1 => "PB set 1 day ago".to_string(),
            days => format!("PB set {days} days ago"),
        })
    }
}

/// Only interactive state of an event card. Data refreshes never touch it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InsightState {
    pub expanded: bool,
}

impl InsightState {
    pub fn toggled(self) -> Self {
        Self {
            expanded: !self.expanded,
        }
    }

    pub fn toggle_label(self) -> &'static str {
        if self.expanded {
            "Hide insights"
        } else {
            "Show insights"
        }
    }

    pub fn sections(self) -> &'static [PanelSection] {
        if self.expanded {
            EXPANDED
        } else {
            CONDENSED
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanelSection {
    PersonalBest,
    Freshness,
    Stability,
    Trend,
    Sparkline,
    TrendChart,
    RecentBars,
    InsightBlock,
}

impl PanelSection {
    /// Sections only the expanded card shows.
    pub fn is_detail(self) -> bool {
        matches!(
            self,
            Self::TrendChart | Self::RecentBars | Self::InsightBlock
        )
    }

    /// Explanation shown when hovering the section's info marker.
    pub fn hint(self) -> Option<&'static str> {
        match self {
            Self::Freshness => Some(
                "How often you break your own best. A red light can mean a plateau: time to review the training plan.",
            ),
            Self::Stability => Some(
                "How reliable your results are. High stability means the level is established; low means the PB may be a one-off.",
            ),
            Self::Trend => Some(
                "Your short-term form over the last three races: rising, falling or flat.",
            ),
            Self::Sparkline => {
                Some("A year of results at a glance, season peaks and dips included.")
            }
            _ => None,
        }
    }
}

/// Visible sections of one card, split into the always-on summary and the
/// expanded detail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsightLayout {
    pub expanded: bool,
    pub summary: Vec<PanelSection>,
    pub detail: Vec<PanelSection>,
}

impl InsightLayout {
    pub fn new(state: InsightState) -> Self {
        let (detail, summary) = state
            .sections()
            .iter()
            .copied()
            .partition(|section| section.is_detail());
        Self {
            expanded: state.expanded,
            summary,
            detail,
        }
    }

    pub fn card_class(&self) -> &'static str {
        if self.expanded {
            "event-card event-card--expanded"
        } else {
            "event-card"
        }
    }
}

const CONDENSED: &[PanelSection] = &[
    PanelSection::PersonalBest,
    PanelSection::Freshness,
    PanelSection::Stability,
    PanelSection::Trend,
    PanelSection::Sparkline,
];

const EXPANDED: &[PanelSection] = &[
    PanelSection::PersonalBest,
    PanelSection::Freshness,
    PanelSection::Stability,
    PanelSection::Trend,
    PanelSection::Sparkline,
    PanelSection::TrendChart,
    PanelSection::RecentBars,
    PanelSection::InsightBlock,
];
