use api::models::EventPerformance;
use dioxus::prelude::*;

use super::charts::{RecentBars, Sparkline, TrendLineChart};
use super::insight::{EventInsight, InsightLayout, InsightState, PanelSection};
use crate::core::derived::DiffReading;

/// One event card: condensed summary with an expandable insight view.
///
/// The payload is re-derived on every render; only `expanded` is local state.
#[component]
pub fn EventInsightPanel(performance: EventPerformance) -> Element {
    let mut state = use_signal(InsightState::default);
    let insight = EventInsight::from_performance(&performance);
    let layout = InsightLayout::new(state());
    let title = insight.event_name.clone();
    let toggle_label = state().toggle_label();
    let toggle_class = if layout.expanded {
        "event-card__toggle event-card__toggle--open"
    } else {
        "event-card__toggle"
    };

    rsx! {
        article { class: layout.card_class(),
            header { class: "event-card__header",
                h3 { class: "event-card__title", "{title}" }
                button {
                    r#type: "button",
                    class: toggle_class,
                    aria_expanded: layout.expanded,
                    onclick: move |_| {
                        let next = state().toggled();
                        state.set(next);
                    },
                    "{toggle_label}"
                    span { class: "event-card__toggle-arrow", aria_hidden: "true", "→" }
                }
            }

            div { class: "event-card__summary",
                for section in layout.summary.iter().copied() {
                    {render_section(section, &insight)}
                }
            }

            if !layout.detail.is_empty() {
                div { class: "event-card__insights",
                    h4 { class: "event-card__insights-title", "Event insights" }
                    div { class: "event-card__insights-grid",
                        for section in layout.detail.iter().copied() {
                            {render_section(section, &insight)}
                        }
                    }
                }
            }
        }
    }
}

fn render_section(section: PanelSection, insight: &EventInsight) -> Element {
    let hint = section.hint();
    match section {
        PanelSection::PersonalBest => {
            let time = &insight.pb_time;
            let date = &insight.pb_date;
            rsx! {
                div { class: "event-card__pb",
                    span { class: "event-card__pb-star", aria_hidden: "true", "★" }
                    span { class: "event-card__pb-time", "{time}" }
                    span { class: "event-card__pb-date", "on {date}" }
                }
            }
        }
        PanelSection::Freshness => {
            let class = insight.freshness.css_class("badge");
            let text = insight.freshness.short_text;
            let days = insight.freshness_hint();
            rsx! {
                div { class: "event-card__row",
                    span { class: "{class}",
                        span { class: "badge__dot", aria_hidden: "true" }
                        "{text}"
                    }
                    if let Some(days) = days {
                        span { class: "event-card__muted", "{days}" }
                    }
                    {info_marker(hint)}
                }
            }
        }
        PanelSection::Stability => {
            let class = insight.stability.css_class("descriptor");
            let text = insight.stability.short_text;
            rsx! {
                div { class: "event-card__row",
                    span { class: "event-card__label", "Stability:" }
                    span { class: "{class}", "{text}" }
                    {info_marker(hint)}
                }
            }
        }
        PanelSection::Trend => {
            let class = insight.trend.css_class("descriptor");
            let glyph = insight.trend.indicator.map(|i| i.glyph()).unwrap_or_default();
            let text = insight.trend.short_text;
            let delta = &insight.trend_delta;
            rsx! {
                div { class: "event-card__row",
                    span { class: "event-card__label", "Last 3 races:" }
                    span { class: "{class}",
                        if !glyph.is_empty() {
                            span { class: "descriptor__glyph", aria_hidden: "true", "{glyph}" }
                        }
                        "{text}"
                    }
                    span { class: "event-card__muted", "({delta} vs PB)" }
                    {info_marker(hint)}
                }
            }
        }
        PanelSection::Sparkline => rsx! {
            div { class: "event-card__row",
                span { class: "event-card__label", "Past year:" }
                Sparkline { values: insight.sparkline.clone() }
                {info_marker(hint)}
            }
        },
        PanelSection::TrendChart => rsx! {
            section { class: "event-card__panel",
                h5 { class: "event-card__panel-title", "Result trend" }
                p { class: "event-card__muted", "Past year" }
                TrendLineChart { series: insight.trend_series.clone() }
            }
        },
        PanelSection::RecentBars => rsx! {
            section { class: "event-card__panel",
                h5 { class: "event-card__panel-title", "Last 3 races vs PB" }
                RecentBars { bars: insight.recent_bars.clone() }
            }
        },
        PanelSection::InsightBlock => {
            let score = &insight.stability_score;
            rsx! {
                section { class: "event-card__panel",
                    h5 { class: "event-card__panel-title", "Recent form" }
                    dl { class: "insight-list",
                        {insight_row("Latest race", &insight.last_race_time, &insight.last_race)}
                        {insight_row("3-race average", &insight.recent_average_time, &insight.recent_average)}
                        div { class: "insight-list__row",
                            dt { "Stability score" }
                            dd {
                                strong { "{score}" }
                                span { class: "event-card__muted", "/100" }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn insight_row(label: &str, time: &str, reading: &DiffReading) -> Element {
    let class = format!("reading reading--{}", reading.severity().modifier());
    let diff = &reading.text;
    rsx! {
        div { class: "insight-list__row",
            dt { "{label}" }
            dd {
                strong { "{time}" }
                span { class: "{class}", " ({diff} vs PB)" }
            }
        }
    }
}

fn info_marker(hint: Option<&'static str>) -> Element {
    match hint {
        Some(text) => rsx! {
            span { class: "info-marker", title: "{text}", role: "img", aria_label: "{text}", "ⓘ" }
        },
        None => rsx! {},
    }
}
