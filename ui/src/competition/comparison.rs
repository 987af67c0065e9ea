use api::models::{CompetitorComparison, RecordMark, ResultComparison};

use crate::core::{
    chart::Domain,
    derived::DiffReading,
    format::{format_signed_seconds, format_time},
    labels::{self, Presentation, Severity},
};

/// Seconds added on both sides of the scatter axis.
pub const AXIS_MARGIN: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Games,
    National,
}

impl RecordKind {
    pub fn title(self) -> &'static str {
        match self {
            Self::Games => "Games record",
            Self::National => "National record",
        }
    }

    /// Label drawn above the reference line.
    pub fn marker(self) -> &'static str {
        match self {
            Self::Games => "Games REC",
            Self::National => "National REC",
        }
    }

    pub fn modifier(self) -> &'static str {
        match self {
            Self::Games => "games",
            Self::National => "national",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecordCard {
    pub kind: RecordKind,
    pub time: String,
    pub gap: DiffReading,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecordLine {
    pub kind: RecordKind,
    pub time: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScatterPoint {
    pub athlete: String,
    pub time: f64,
    pub tooltip: String,
    pub highlighted: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonRow {
    pub key: String,
    pub rank: String,
    pub athlete: String,
    pub time: String,
    pub gap: String,
    pub treatment: Presentation,
}

impl ComparisonRow {
    pub fn highlighted(&self) -> bool {
        self.treatment.severity == Severity::Emphasis
    }
}

/// Everything the race comparison modal draws for one payload.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonView {
    pub event_name: String,
    pub competition_name: String,
    pub your_rank: String,
    pub your_time: String,
    pub records: Vec<RecordCard>,
    pub record_lines: Vec<RecordLine>,
    pub points: Vec<ScatterPoint>,
    /// `None` when nothing on the axis has a time.
    pub domain: Option<Domain>,
    pub rows: Vec<ComparisonRow>,
}

impl ComparisonView {
    pub fn from_comparison(comparison: &ResultComparison) -> Self {
        let target = comparison.target_result.as_ref();
        let records = comparison.records.as_ref();
        let marks = [
            (RecordKind::Games, records.and_then(|r| r.games_record.as_ref())),
            (RecordKind::National, records.and_then(|r| r.national_record.as_ref())),
        ];

        let record_lines: Vec<RecordLine> = marks
            .iter()
            .filter_map(|(kind, mark)| {
                let time = mark.and_then(|m| m.time).filter(|t| t.is_finite())?;
                Some(RecordLine { kind: *kind, time })
            })
            .collect();

        let points = scatter_points(&comparison.competitor_comparison);
        let domain = Domain::of(
            points
                .iter()
                .map(|p| p.time)
                .chain(record_lines.iter().map(|line| line.time)),
        )
        .map(|d| d.widened(AXIS_MARGIN));

        Self {
            event_name: target
                .and_then(|t| t.event_name.clone())
                .unwrap_or_default(),
            competition_name: target
                .and_then(|t| t.competition_name.clone())
                .unwrap_or_default(),
            your_rank: target
                .and_then(|t| t.rank)
                .map(|rank| rank.to_string())
                .unwrap_or_else(|| "N/A".to_string()),
            your_time: format_time(target.and_then(|t| t.record_time), "N/A"),
            records: marks
                .iter()
                .map(|(kind, mark)| record_card(*kind, *mark))
                .collect(),
            record_lines,
            points,
            domain,
            rows: comparison
                .competitor_comparison
                .iter()
                .enumerate()
                .map(|(index, competitor)| comparison_row(index, competitor))
                .collect(),
        }
    }
}

fn record_card(kind: RecordKind, mark: Option<&RecordMark>) -> RecordCard {
    RecordCard {
        kind,
        time: format_time(mark.and_then(|m| m.time), "N/A"),
        gap: DiffReading::new(mark.and_then(|m| m.diff)),
    }
}

fn scatter_points(competitors: &[CompetitorComparison]) -> Vec<ScatterPoint> {
    competitors
        .iter()
        .filter_map(|competitor| {
            let time = competitor.record_time.filter(|t| t.is_finite())?;
            let athlete = competitor
                .athlete_name
                .clone()
                .unwrap_or_else(|| "N/A".to_string());
            Some(ScatterPoint {
                tooltip: format!("{athlete}: {}", format_time(Some(time), "")),
                athlete,
                time,
                highlighted: labels::competitor(competitor.diff_label).severity
                    == Severity::Emphasis,
            })
        })
        .collect()
}

fn comparison_row(index: usize, competitor: &CompetitorComparison) -> ComparisonRow {
    let athlete = competitor.athlete_name.clone().unwrap_or_default();
    ComparisonRow {
        key: format!("{index}-{athlete}"),
        rank: competitor
            .rank
            .map(|rank| rank.to_string())
            .unwrap_or_default(),
        athlete,
        time: format_time(competitor.record_time, ""),
        gap: competitor
            .diff_from_target
            .filter(|d| d.is_finite())
            .map(format_signed_seconds)
            .unwrap_or_default(),
        treatment: labels::competitor(competitor.diff_label),
    }
}
