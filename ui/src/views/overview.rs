use dioxus::prelude::*;

use crate::context::{use_analytics_client, use_athlete_session};
use crate::core::session::PageState;
use crate::performance::EventInsightPanel;

/// All-time personal bests, one card per event.
#[component]
pub fn PerformanceOverview() -> Element {
    let session = use_athlete_session();
    let client = use_analytics_client();

    let overview = use_resource(move || {
        let client = client.clone();
        let ticket = session.read().ticket();
        async move {
            let result = match ticket.require_athlete() {
                Ok(athlete) => client.performance_overview(athlete).await,
                Err(err) => Err(err),
            };
            session.peek().settle(&ticket, result)
        }
    });

    let athlete = session.read().selected().unwrap_or_default().to_string();
    let outcome = overview.read_unchecked();

    let body = match PageState::of((*outcome).as_ref()) {
        PageState::Prompt => rsx! {
            h2 { class: "page__status", "Please select an athlete from the dropdown above." }
        },
        PageState::Loading => rsx! {
            h2 { class: "page__status", "Loading performance overview for {athlete}..." }
        },
        PageState::Failed(message) => rsx! {
            h2 { class: "page__error", "An error has occurred: {message}" }
        },
        PageState::Ready(events) => rsx! {
            header { class: "page__header",
                h2 { "Personal best overview" }
                p { class: "page__lead",
                    "All-time personal bests. Open a card for a closer look at the event."
                }
            }
            if events.is_empty() {
                p { class: "event-card__placeholder", "No results recorded for {athlete} yet." }
            } else {
                div { class: "event-grid",
                    for performance in events.iter() {
                        EventInsightPanel {
                            key: "{performance.event_name}",
                            performance: performance.clone(),
                        }
                    }
                }
            }
        },
    };

    rsx! {
        section { class: "page page-overview", {body} }
    }
}
