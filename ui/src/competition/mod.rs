//! Specific-competition lookup and the per-race comparison modal.

mod comparison;
pub use comparison::{
    ComparisonRow, ComparisonView, RecordCard, RecordKind, RecordLine, ScatterPoint, AXIS_MARGIN,
};

mod modal;
pub use modal::RaceComparisonModal;

use api::models::{AthleteRaceResult, Competition};

use crate::core::format::format_time;

/// Year and competition chosen on the lookup page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompetitionFilters {
    year: Option<String>,
    competition: Option<String>,
}

impl CompetitionFilters {
    pub fn year(&self) -> Option<&str> {
        self.year.as_deref()
    }

    pub fn competition(&self) -> Option<&str> {
        self.competition.as_deref()
    }

    /// Choosing a year always clears the competition, which belongs to the old year.
    pub fn set_year(&mut self, year: &str) {
        self.year = non_empty(year);
        self.competition = None;
    }

    pub fn set_competition(&mut self, competition: &str) {
        self.competition = non_empty(competition);
    }

    /// Year and competition, once both are chosen.
    pub fn query(&self) -> Option<(&str, &str)> {
        self.year().zip(self.competition())
    }
}

fn non_empty(raw: &str) -> Option<String> {
    (!raw.is_empty()).then(|| raw.to_string())
}

/// Named competitions in server order; unnamed entries cannot be queried.
pub fn competition_names(competitions: &[Competition]) -> Vec<String> {
    competitions
        .iter()
        .filter_map(|c| c.name.clone())
        .filter(|name| !name.is_empty())
        .collect()
}

/// One line of the races table.
#[derive(Debug, Clone, PartialEq)]
pub struct RaceRow {
    pub key: String,
    /// Rows without an id have nothing to compare against.
    pub race_id: Option<String>,
    pub event_name: String,
    pub record: String,
    pub rank: String,
    pub note: String,
}

pub fn race_rows(races: &[AthleteRaceResult]) -> Vec<RaceRow> {
    races
        .iter()
        .enumerate()
        .map(|(index, race)| RaceRow {
            key: race
                .race_id
                .clone()
                .unwrap_or_else(|| format!("row-{index}")),
            race_id: race.race_id.clone().filter(|id| !id.is_empty()),
            event_name: race.event_name.clone().unwrap_or_default(),
            record: format_time(race.record, ""),
            rank: race.rank.map(|r| r.to_string()).unwrap_or_default(),
            note: race.note.clone().unwrap_or_default(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn changing_year_resets_competition() {
        let mut filters = CompetitionFilters::default();
        filters.set_year("2024");
        filters.set_competition("National Games");
        assert_eq!(filters.query(), Some(("2024", "National Games")));

        filters.set_year("2023");
        assert_eq!(filters.year(), Some("2023"));
        assert_eq!(filters.competition(), None);
        assert_eq!(filters.query(), None);
    }

    #[test]
    fn empty_choice_clears() {
        let mut filters = CompetitionFilters::default();
        filters.set_year("");
        assert_eq!(filters.year(), None);
    }

    #[test]
    fn unnamed_competitions_are_skipped() {
        let competitions = vec![
            Competition {
                name: Some("Spring Open".into()),
            },
            Competition { name: None },
            Competition {
                name: Some(String::new()),
            },
        ];
        assert_eq!(competition_names(&competitions), vec!["Spring Open"]);
    }

    #[test]
    fn race_rows_format_records() {
        let races = vec![
            AthleteRaceResult {
                race_id: Some("r-1".into()),
                event_name: Some("200m IM".into()),
                record: Some(135.27),
                rank: Some(4),
                note: Some("heat 2".into()),
            },
            AthleteRaceResult::default(),
        ];
        let rows = race_rows(&races);
        assert_eq!(rows[0].record, "2:15.27");
        assert_eq!(rows[0].rank, "4");
        assert_eq!(rows[0].race_id.as_deref(), Some("r-1"));
        assert_eq!(rows[1].key, "row-1");
        assert_eq!(rows[1].race_id, None);
        assert_eq!(rows[1].record, "");
    }
}
