use dioxus::prelude::*;

use super::comparison::{ComparisonView, RecordCard};
use crate::context::{use_analytics_client, use_athlete_session};
use crate::core::{
    chart::{Domain, Viewport},
    format::format_time,
    session::PageState,
};

const SCATTER: Viewport = Viewport::new(560.0, 240.0, 32.0);
const SCATTER_TICKS: usize = 5;

/// Field comparison for one race, fetched for the selected athlete.
#[component]
pub fn RaceComparisonModal(race_id: ReadOnlySignal<String>, on_close: EventHandler<()>) -> Element {
    let session = use_athlete_session();
    let client = use_analytics_client();

    let comparison = use_resource(move || {
        let client = client.clone();
        let ticket = session.read().ticket();
        let race_id = race_id();
        async move {
            let result = match ticket.require_athlete() {
                Ok(athlete) => client.race_comparison(&race_id, athlete).await,
                Err(err) => Err(err),
            };
            session.peek().settle(&ticket, result)
        }
    });

    let outcome = comparison.read_unchecked();
    let state = PageState::of((*outcome).as_ref());
    let mut title = "Comparison".to_string();
    let mut subtitle = String::new();
    let body = match state {
        PageState::Prompt => {
            title = "Error".to_string();
            rsx! {
                p { class: "page__error", "Please select an athlete to view the race comparison." }
            }
        }
        PageState::Loading => rsx! {
            p { class: "page__status", "Loading comparison..." }
        },
        PageState::Failed(message) => rsx! {
            p { class: "page__error", "Error: {message}" }
        },
        PageState::Ready(payload) => {
            let view = ComparisonView::from_comparison(payload);
            title = format!("Comparison: {}", view.event_name);
            subtitle = view.competition_name.clone();
            render_comparison(&view)
        }
    };

    rsx! {
        div {
            class: "modal",
            onclick: move |_| on_close.call(()),
            div {
                class: "modal__dialog",
                role: "dialog",
                aria_modal: "true",
                onclick: move |evt: MouseEvent| evt.stop_propagation(),

                header { class: "modal__header",
                    div {
                        h2 { class: "modal__title", "{title}" }
                        if !subtitle.is_empty() {
                            p { class: "modal__subtitle", "{subtitle}" }
                        }
                    }
                    button {
                        r#type: "button",
                        class: "modal__close",
                        aria_label: "Close",
                        onclick: move |_| on_close.call(()),
                        "×"
                    }
                }

                div { class: "modal__body", {body} }
            }
        }
    }
}

#[derive(Clone)]
struct TableRow {
    key: String,
    class: &'static str,
    rank: String,
    athlete: String,
    time: String,
    gap: String,
    gap_class: String,
    glyph: Option<&'static str>,
}

fn render_comparison(view: &ComparisonView) -> Element {
    let your_rank = view.your_rank.clone();
    let your_time = view.your_time.clone();
    let cards = view.records.clone();
    let rows: Vec<TableRow> = view
        .rows
        .iter()
        .map(|row| TableRow {
            key: row.key.clone(),
            class: if row.highlighted() {
                "data-table__row data-table__row--highlight"
            } else {
                "data-table__row"
            },
            rank: row.rank.clone(),
            athlete: row.athlete.clone(),
            time: row.time.clone(),
            gap: row.gap.clone(),
            gap_class: row.treatment.css_class("gap"),
            glyph: row.treatment.indicator.map(|i| i.glyph()),
        })
        .collect();

    rsx! {
        section { class: "comparison__section",
            h3 { class: "comparison__heading",
                "Field distribution"
                span {
                    class: "info-marker",
                    title: "Where you stand in the field: every finisher's time against the standing records.",
                    "ⓘ"
                }
            }
            {render_scatter(view)}
        }

        section { class: "comparison__section",
            h3 { class: "comparison__heading", "Details" }
            div { class: "comparison__cards",
                div { class: "record-card record-card--you",
                    p { class: "record-card__title", "Your result (rank {your_rank})" }
                    p { class: "record-card__time", "{your_time}" }
                }
                for card in cards {
                    {render_record_card(card)}
                }
            }

            table { class: "data-table comparison__table",
                thead {
                    tr {
                        th { "Rank" }
                        th { "Name" }
                        th { "Time" }
                        th { "Gap to you" }
                    }
                }
                tbody {
                    for row in rows {
                        tr { key: "{row.key}", class: row.class,
                            td { "{row.rank}" }
                            td { "{row.athlete}" }
                            td { class: "data-table__strong", "{row.time}" }
                            td { class: "{row.gap_class}",
                                "{row.gap}"
                                if let Some(glyph) = row.glyph {
                                    span { class: "gap__glyph", aria_hidden: "true", "{glyph}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn render_record_card(card: RecordCard) -> Element {
    let class = format!("record-card record-card--{}", card.kind.modifier());
    let title = card.kind.title();
    let gap_class = format!("reading reading--{}", card.gap.severity().modifier());
    let RecordCard { time, gap, .. } = card;
    let gap = gap.text;
    rsx! {
        div { class: "{class}",
            p { class: "record-card__title", "{title}" }
            p { class: "record-card__time",
                "{time}"
                span { class: "{gap_class}", " ({gap})" }
            }
        }
    }
}

#[derive(Clone)]
struct Dot {
    cx: String,
    cy: String,
    class: &'static str,
    tooltip: String,
}

#[derive(Clone)]
struct Marker {
    x: String,
    class: String,
    label: &'static str,
}

#[derive(Clone)]
struct Tick {
    x: String,
    label: String,
}

fn render_scatter(view: &ComparisonView) -> Element {
    let Some(domain) = view.domain else {
        return rsx! {
            p { class: "event-card__placeholder", "No times to plot." }
        };
    };

    let rows = view.points.len().max(1) as f64;
    let inner = SCATTER.height - 2.0 * SCATTER.inset;
    let dots: Vec<Dot> = view
        .points
        .iter()
        .enumerate()
        .map(|(index, point)| Dot {
            cx: format!("{:.1}", SCATTER.x_for(point.time, domain)),
            cy: format!("{:.1}", SCATTER.inset + inner * (index as f64 + 0.5) / rows),
            class: if point.highlighted {
                "scatter__dot scatter__dot--you"
            } else {
                "scatter__dot"
            },
            tooltip: point.tooltip.clone(),
        })
        .collect();
    let markers: Vec<Marker> = view
        .record_lines
        .iter()
        .map(|line| Marker {
            x: format!("{:.1}", SCATTER.x_for(line.time, domain)),
            class: format!("scatter__record scatter__record--{}", line.kind.modifier()),
            label: line.kind.marker(),
        })
        .collect();
    let ticks = axis_ticks(domain);

    let top = SCATTER.inset;
    let bottom = SCATTER.height - SCATTER.inset;
    let label_y = SCATTER.inset - 8.0;
    let tick_y = SCATTER.height - SCATTER.inset / 3.0;

    rsx! {
        figure { class: "scatter",
            svg { class: "scatter__svg", view_box: SCATTER.view_box(),
                for tick in ticks {
                    line { class: "scatter__grid", x1: "{tick.x}", x2: "{tick.x}", y1: "{top}", y2: "{bottom}" }
                    text { class: "scatter__tick", x: "{tick.x}", y: "{tick_y}", text_anchor: "middle", "{tick.label}" }
                }
                for marker in markers {
                    line { class: "{marker.class}", x1: "{marker.x}", x2: "{marker.x}", y1: "{top}", y2: "{bottom}" }
                    text { class: "{marker.class}", x: "{marker.x}", y: "{label_y}", text_anchor: "middle", "{marker.label}" }
                }
                for dot in dots {
                    circle { class: dot.class, cx: "{dot.cx}", cy: "{dot.cy}", r: "5",
                        title { "{dot.tooltip}" }
                    }
                }
            }
            figcaption { class: "scatter__legend",
                span { class: "scatter__legend-swatch" }
                span { "Competitors" }
            }
        }
    }
}

fn axis_ticks(domain: Domain) -> Vec<Tick> {
    let mut ticks: Vec<Tick> = domain
        .ticks(SCATTER_TICKS)
        .into_iter()
        .map(|value| Tick {
            x: format!("{:.1}", SCATTER.x_for(value, domain)),
            label: format_time(Some(value), ""),
        })
        .collect();
    ticks.reverse();
    ticks
}
