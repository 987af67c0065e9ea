//! Payloads returned by the analytics API.
//!
//! Every field is optional on the wire. Partial upstream data decodes into
//! `None`/empty values instead of failing, and qualitative labels fall back to
//! an `Unknown` variant when the server sends something new.

use serde::{Deserialize, Deserializer, Serialize};

/// Per-event analytics for one athlete. `event_name` is the identity key
/// within a single overview response.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EventPerformance {
    pub event_name: String,
    pub personal_best: Option<PersonalBest>,
    pub analysis: Option<Analysis>,
    #[serde(deserialize_with = "null_as_empty")]
    pub recent_races: Vec<RecentRace>,
    pub charts: Option<ChartData>,
}

impl EventPerformance {
    pub fn pb_time(&self) -> Option<f64> {
        self.personal_best.as_ref().and_then(|pb| pb.time)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonalBest {
    pub time: Option<f64>,
    pub unit: Option<String>,
    pub date: Option<String>,
}

/// One race in the recent window, newest first.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RecentRace {
    pub time: Option<f64>,
    pub date: Option<String>,
    pub competition_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Analysis {
    pub stability: Option<StabilityMetric>,
    pub trend: Option<TrendMetric>,
    pub pb_freshness: Option<PbFreshness>,
}

/// Coefficient of variation over the latest races.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StabilityMetric {
    pub value: Option<f64>,
    pub unit: Option<String>,
    pub label: Option<StabilityLabel>,
}

/// Recent trend delta in seconds.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TrendMetric {
    pub value: Option<f64>,
    pub unit: Option<String>,
    pub label: Option<TrendLabel>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PbFreshness {
    pub days_since_pb: Option<i64>,
    pub label: Option<FreshnessLabel>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartData {
    #[serde(deserialize_with = "null_as_empty")]
    pub sparkline: Vec<f64>,
    pub trend_chart: Option<TrendChart>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TrendChart {
    #[serde(deserialize_with = "null_as_empty")]
    pub dates: Vec<String>,
    #[serde(deserialize_with = "null_as_empty")]
    pub times: Vec<f64>,
    /// Personal best drawn as a horizontal reference line.
    pub pb_line: Option<f64>,
}

impl TrendChart {
    /// Index-aligned `(date, time)` pairs. A length mismatch truncates to the shorter side.
    pub fn points(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.dates
            .iter()
            .map(String::as_str)
            .zip(self.times.iter().copied())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum FreshnessLabel {
    HotStreak,
    Stable,
    NotUpdatedRecently,
    Unknown,
}

impl From<String> for FreshnessLabel {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "hot_streak" => Self::HotStreak,
            "stable" => Self::Stable,
            "not_updated_recently" => Self::NotUpdatedRecently,
            _ => Self::Unknown,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum StabilityLabel {
    High,
    Medium,
    Low,
    Unknown,
}

impl From<String> for StabilityLabel {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "high" => Self::High,
            "medium" => Self::Medium,
            "low" => Self::Low,
            _ => Self::Unknown,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum TrendLabel {
    Improving,
    Stable,
    Declining,
    Unknown,
}

impl From<String> for TrendLabel {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "improving" => Self::Improving,
            "stable" => Self::Stable,
            "declining" => Self::Declining,
            _ => Self::Unknown,
        }
    }
}

/// Competitor position relative to the selected athlete in one race.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum DiffLabel {
    FarAhead,
    SlightlyAhead,
    YourResult,
    SlightlyBehind,
    FarBehind,
    Unknown,
}

impl From<String> for DiffLabel {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "far_ahead" => Self::FarAhead,
            "slightly_ahead" => Self::SlightlyAhead,
            "your_result" => Self::YourResult,
            "slightly_behind" => Self::SlightlyBehind,
            "far_behind" => Self::FarBehind,
            _ => Self::Unknown,
        }
    }
}

/// One race compared against its field and the standing records.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ResultComparison {
    pub target_result: Option<TargetResult>,
    pub records: Option<Records>,
    #[serde(deserialize_with = "null_as_empty")]
    pub competitor_comparison: Vec<CompetitorComparison>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TargetResult {
    pub athlete_name: Option<String>,
    pub record_time: Option<f64>,
    pub rank: Option<u32>,
    pub competition_name: Option<String>,
    pub event_name: Option<String>,
    pub date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Records {
    pub national_record: Option<RecordMark>,
    pub games_record: Option<RecordMark>,
}

/// A record time and the target athlete's signed gap to it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RecordMark {
    pub time: Option<f64>,
    pub diff: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CompetitorComparison {
    pub rank: Option<u32>,
    pub athlete_name: Option<String>,
    pub record_time: Option<f64>,
    pub diff_from_target: Option<f64>,
    pub diff_label: Option<DiffLabel>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Competition {
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AthleteRaceResult {
    pub race_id: Option<String>,
    pub event_name: Option<String>,
    pub record: Option<f64>,
    pub rank: Option<u32>,
    pub note: Option<String>,
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
