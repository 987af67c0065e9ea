use api::models::{AthleteRaceResult, Competition};
use dioxus::prelude::*;

use crate::competition::{
    competition_names, race_rows, CompetitionFilters, RaceComparisonModal, RaceRow,
};
use crate::context::{use_analytics_client, use_athlete_session};
use crate::core::session::PageState;

/// Look up one competition's races and compare any of them against the field.
#[component]
pub fn SpecificCompetition() -> Element {
    let session = use_athlete_session();
    let client = use_analytics_client();
    let mut filters = use_signal(CompetitionFilters::default);
    let mut comparing = use_signal(|| Option::<String>::None);

    let years_client = client.clone();
    let years = use_resource(move || {
        let client = years_client.clone();
        async move { client.years().await }
    });

    let competitions_client = client.clone();
    let competitions = use_resource(move || {
        let client = competitions_client.clone();
        let ticket = session.read().ticket();
        let year = filters.read().year().map(str::to_string);
        async move {
            let result: Result<Option<Vec<Competition>>, _> = match (year, ticket.require_athlete()) {
                (Some(year), Ok(athlete)) => client.competitions(&year, Some(athlete)).await.map(Some),
                (None, Ok(_)) => Ok(None),
                (_, Err(err)) => Err(err),
            };
            session.peek().settle(&ticket, result)
        }
    });

    let races = use_resource(move || {
        let client = client.clone();
        let ticket = session.read().ticket();
        let query = filters
            .read()
            .query()
            .map(|(year, competition)| (year.to_string(), competition.to_string()));
        async move {
            let result: Result<Option<Vec<AthleteRaceResult>>, _> =
                match (query, ticket.require_athlete()) {
                    (Some((year, competition)), Ok(athlete)) => client
                        .athlete_races(athlete, &competition, &year)
                        .await
                        .map(Some),
                    (None, Ok(_)) => Ok(None),
                    (_, Err(err)) => Err(err),
                };
            session.peek().settle(&ticket, result)
        }
    });

    if session.read().selected().is_none() {
        return rsx! {
            section { class: "page page-competition",
                h2 { class: "page__status", "Please select an athlete from the dropdown above." }
            }
        };
    }

    let year_value = filters.read().year().unwrap_or_default().to_string();
    let competition_value = filters.read().competition().unwrap_or_default().to_string();

    let (year_options, years_loading, years_error) = match &*years.read_unchecked() {
        None => (Vec::new(), true, None),
        Some(Ok(list)) => (list.clone(), false, None),
        Some(Err(err)) => (Vec::new(), false, Some(err.to_string())),
    };

    let competitions_outcome = competitions.read_unchecked();
    let (competition_options, competitions_loading, competitions_error) =
        match PageState::of((*competitions_outcome).as_ref()) {
            PageState::Ready(list) => (
                list.as_deref().map(competition_names).unwrap_or_default(),
                false,
                None,
            ),
            PageState::Loading => (Vec::new(), !year_value.is_empty(), None),
            PageState::Prompt => (Vec::new(), false, None),
            PageState::Failed(message) => (Vec::new(), false, Some(message)),
        };

    let races_outcome = races.read_unchecked();
    let table_body = match PageState::of((*races_outcome).as_ref()) {
        PageState::Loading => rsx! {
            tr {
                td { class: "data-table__status", colspan: "5", "Loading races..." }
            }
        },
        PageState::Failed(message) => rsx! {
            tr {
                td { class: "data-table__status page__error", colspan: "5", "An error has occurred: {message}" }
            }
        },
        PageState::Ready(Some(list)) if !list.is_empty() => {
            let rows = race_rows(list);
            rsx! {
                for row in rows {
                    {render_race_row(row, comparing)}
                }
            }
        }
        PageState::Ready(_) | PageState::Prompt => rsx! {
            tr {
                td { class: "data-table__status", colspan: "5", "No races found for the selected criteria." }
            }
        },
    };

    let competition_disabled = year_value.is_empty() || competitions_loading;
    let filter_error = years_error.or(competitions_error);

    rsx! {
        section { class: "page page-competition",
            header { class: "page__header",
                h2 { "Specific competition" }
                p { class: "page__lead",
                    "Every event result from one competition, with a comparison against the rest of the field."
                }
            }

            div { class: "panel",
                div { class: "filters",
                    h3 { class: "filters__title", "Filters:" }
                    div { class: "filters__field",
                        label { r#for: "comp-year", "Year" }
                        select {
                            id: "comp-year",
                            class: "filters__select",
                            value: "{year_value}",
                            disabled: years_loading,
                            onchange: move |evt: FormEvent| filters.write().set_year(&evt.value()),
                            option { value: "", disabled: true, "Select year" }
                            for year in year_options {
                                option { key: "{year}", value: "{year}", "{year}" }
                            }
                        }
                    }
                    div { class: "filters__field",
                        label { r#for: "comp-name", "Competition" }
                        select {
                            id: "comp-name",
                            class: "filters__select",
                            value: "{competition_value}",
                            disabled: competition_disabled,
                            onchange: move |evt: FormEvent| filters.write().set_competition(&evt.value()),
                            option { value: "", disabled: true, "Select competition" }
                            for name in competition_options {
                                option { key: "{name}", value: "{name}", "{name}" }
                            }
                        }
                    }
                }
                p { class: "filters__hint",
                    span { class: "info-marker", aria_hidden: "true", "ⓘ" }
                    "Pick a year first to load that year's competitions."
                }
                if let Some(message) = filter_error {
                    p { class: "page__error", "{message}" }
                }

                table { class: "data-table",
                    thead {
                        tr {
                            th { "Event" }
                            th { "Result" }
                            th { "Rank" }
                            th { "Note" }
                            th { "Comparison" }
                        }
                    }
                    tbody { {table_body} }
                }
            }

            if let Some(race_id) = comparing() {
                RaceComparisonModal {
                    race_id,
                    on_close: move |_| comparing.set(None),
                }
            }
        }
    }
}

fn render_race_row(row: RaceRow, mut comparing: Signal<Option<String>>) -> Element {
    let RaceRow {
        key,
        race_id,
        event_name,
        record,
        rank,
        note,
    } = row;

    rsx! {
        tr { key: "{key}", class: "data-table__row",
            td { class: "data-table__muted", "{event_name}" }
            td { class: "data-table__strong", "{record}" }
            td { class: "data-table__strong", "{rank}" }
            td { class: "data-table__muted", "{note}" }
            td {
                if let Some(id) = race_id {
                    button {
                        r#type: "button",
                        class: "button button--link",
                        onclick: move |_| comparing.set(Some(id.clone())),
                        "View"
                    }
                }
            }
        }
    }
}
