use dioxus::prelude::*;

use crate::core::{
    chart::{tick_label, Domain, TrendSeries, Viewport},
    derived::RecentBar,
    format::fixed,
    labels::Severity,
};

const SPARKLINE: Viewport = Viewport::new(120.0, 30.0, 2.0);
const TREND: Viewport = Viewport::new(440.0, 220.0, 44.0);
const BARS: Viewport = Viewport::new(320.0, 120.0, 20.0);

const TREND_TICKS: usize = 4;

/// Compact one-year history; faster swims plot higher.
#[component]
pub fn Sparkline(values: Vec<f64>) -> Element {
    let Some(domain) = Domain::of(values.iter().copied()) else {
        return rsx! {
            div { class: "sparkline sparkline--empty", "No data" }
        };
    };
    let points = SPARKLINE.polyline(&values, domain);
    let width = SPARKLINE.width;
    let height = SPARKLINE.height;

    rsx! {
        svg {
            class: "sparkline",
            view_box: SPARKLINE.view_box(),
            width: "{width}",
            height: "{height}",
            polyline { class: "sparkline__line", points: "{points}", fill: "none" }
        }
    }
}

#[derive(Clone)]
struct TickMark {
    y: String,
    label: String,
}

#[derive(Clone)]
struct TrendDot {
    cx: String,
    cy: String,
    tooltip: String,
    date: String,
}

#[component]
pub fn TrendLineChart(series: TrendSeries) -> Element {
    let Some(domain) = series.domain.filter(|_| !series.is_empty()) else {
        return rsx! {
            p { class: "event-card__placeholder", "No races in the last year." }
        };
    };

    let plotted = series.plotted();
    let line = TREND.polyline(&plotted, domain);
    let ticks: Vec<TickMark> = series
        .ticks(TREND_TICKS)
        .into_iter()
        .map(|(value, label)| TickMark {
            y: format!("{:.1}", TREND.y_for(value, domain)),
            label,
        })
        .collect();
    let dots: Vec<TrendDot> = series
        .points
        .iter()
        .enumerate()
        .map(|(index, point)| TrendDot {
            cx: format!("{:.1}", TREND.x_at(index, plotted.len())),
            cy: format!("{:.1}", TREND.y_for(point.plotted, domain)),
            tooltip: format!("{}: {}", point.label, tick_label(point.plotted)),
            date: point.label.clone(),
        })
        .collect();
    let pb_y = series
        .pb_reference
        .and_then(|pb| TREND.reference_y(pb, domain))
        .map(|y| format!("{y:.1}"));
    let pb_label = series.pb_label();

    let left = TREND.inset;
    let right = TREND.width - TREND.inset;
    let tick_x = TREND.inset - 6.0;
    let date_y = TREND.height - TREND.inset / 3.0;

    rsx! {
        figure { class: "trend-chart",
            svg { class: "trend-chart__svg", view_box: TREND.view_box(),
                for tick in ticks {
                    line { class: "trend-chart__grid", x1: "{left}", x2: "{right}", y1: "{tick.y}", y2: "{tick.y}" }
                    text { class: "trend-chart__tick", x: "{tick_x}", y: "{tick.y}", text_anchor: "end", "{tick.label}" }
                }
                if let Some(y) = pb_y {
                    line { class: "trend-chart__pb", x1: "{left}", x2: "{right}", y1: "{y}", y2: "{y}" }
                }
                polyline { class: "trend-chart__line", points: "{line}", fill: "none" }
                for dot in dots {
                    circle { class: "trend-chart__dot", cx: "{dot.cx}", cy: "{dot.cy}", r: "4",
                        title { "{dot.tooltip}" }
                    }
                    text { class: "trend-chart__date", x: "{dot.cx}", y: "{date_y}", text_anchor: "middle", "{dot.date}" }
                }
            }
            figcaption { class: "trend-chart__legend",
                span { class: "trend-chart__legend-swatch trend-chart__legend-swatch--time" }
                span { "Time" }
                if let Some(label) = pb_label {
                    span { class: "trend-chart__legend-swatch trend-chart__legend-swatch--pb" }
                    span { "{label}" }
                }
            }
        }
    }
}

#[derive(Clone)]
struct BarShape {
    class: String,
    x: String,
    y: String,
    width: String,
    height: String,
    label_x: String,
    tooltip: String,
    label: &'static str,
}

/// Last three races as signed bars around a zero line: above is slower than PB.
#[component]
pub fn RecentBars(bars: Vec<RecentBar>) -> Element {
    if bars.is_empty() {
        return rsx! {
            p { class: "event-card__placeholder", "No recent races." }
        };
    }

    let max_abs = bars
        .iter()
        .filter_map(|bar| bar.diff)
        .map(f64::abs)
        .fold(0.0_f64, f64::max);
    let half = (BARS.height - 2.0 * BARS.inset) / 2.0;
    let zero_y = BARS.inset + half;
    let slot = (BARS.width - 2.0 * BARS.inset) / bars.len() as f64;
    let bar_width = slot * 0.5;

    let shapes: Vec<BarShape> = bars
        .iter()
        .enumerate()
        .map(|(index, bar)| {
            let x = BARS.inset + slot * index as f64 + (slot - bar_width) / 2.0;
            let (y, height) = bar_extent(bar.diff.unwrap_or(0.0), max_abs, half, zero_y);
            let severity = bar.tone().map_or(Severity::Neutral, |tone| tone.severity());
            BarShape {
                class: format!("recent-bars__bar recent-bars__bar--{}", severity.modifier()),
                x: format!("{x:.1}"),
                y: format!("{y:.1}"),
                width: format!("{bar_width:.1}"),
                height: format!("{height:.1}"),
                label_x: format!("{:.1}", x + bar_width / 2.0),
                tooltip: format!("{}: {}", bar.label, bar.value_text()),
                label: bar.label,
            }
        })
        .collect();

    let left = BARS.inset;
    let right = BARS.width - BARS.inset;
    let zero = format!("{zero_y:.1}");
    let scale_y = BARS.inset - 6.0;
    let label_y = BARS.height - 4.0;
    let scale_label = format!("±{}s", fixed(max_abs, 1));

    rsx! {
        svg { class: "recent-bars", view_box: BARS.view_box(),
            line { class: "recent-bars__zero", x1: "{left}", x2: "{right}", y1: "{zero}", y2: "{zero}" }
            text { class: "recent-bars__scale", x: "{left}", y: "{scale_y}", "{scale_label}" }
            for shape in shapes {
                rect {
                    class: "{shape.class}",
                    x: "{shape.x}",
                    y: "{shape.y}",
                    width: "{shape.width}",
                    height: "{shape.height}",
                    title { "{shape.tooltip}" }
                }
                text { class: "recent-bars__label", x: "{shape.label_x}", y: "{label_y}", text_anchor: "middle", "{shape.label}" }
            }
        }
    }
}

/// Top edge and height of a bar drawn from the zero line.
fn bar_extent(diff: f64, max_abs: f64, half: f64, zero_y: f64) -> (f64, f64) {
    if max_abs <= 0.0 {
        return (zero_y, 0.0);
    }
    let height = diff.abs() / max_abs * half;
    if diff > 0.0 {
        (zero_y - height, height)
    } else {
        (zero_y, height)
    }
}
