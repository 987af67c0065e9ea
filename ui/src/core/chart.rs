//! Chart series for "lower is better" swim times.
//!
//! Times are negated before plotting so faster swims sit higher on an
//! ascending axis. Anything shown to a user is re-negated first. The PB
//! reference line is passed through raw, exactly as the upstream payload
//! gives it; the axis domain is computed from the inverted series only.

use api::models::TrendChart;
use time::{macros::format_description, Date};

use super::format::format_time;

/// Relative padding applied to each side of the trend chart domain.
pub const DOMAIN_PADDING: f64 = 0.05;

pub fn invert(time: f64) -> f64 {
    -time
}

/// Human label for a plotted (negated) value.
pub fn tick_label(plotted: f64) -> String {
    format_time(Some(plotted.abs()), "N/A")
}

/// Inverted sparkline series.
pub fn sparkline(times: &[f64]) -> Vec<f64> {
    times.iter().copied().map(invert).collect()
}

/// `2024-03-05` → `Mar 5`. Unparsable input is shown as-is.
pub fn date_label(raw: &str) -> String {
    let day = raw.get(..10).unwrap_or(raw);
    Date::parse(day, format_description!("[year]-[month]-[day]"))
        .ok()
        .and_then(|date| {
            date.format(format_description!("[month repr:short] [day padding:none]"))
                .ok()
        })
        .unwrap_or_else(|| raw.to_string())
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Domain {
    pub min: f64,
    pub max: f64,
}

impl Domain {
    /// `[dataMin, dataMax]` over finite values.
    pub fn of(values: impl IntoIterator<Item = f64>) -> Option<Self> {
        values
            .into_iter()
            .filter(|v| v.is_finite())
            .fold(None, |acc: Option<Self>, v| {
                Some(match acc {
                    None => Self { min: v, max: v },
                    Some(d) => Self {
                        min: d.min.min(v),
                        max: d.max.max(v),
                    },
                })
            })
    }

    /// Scales each bound by `ratio` away from zero.
    pub fn padded(self, ratio: f64) -> Self {
        let grow = |v: f64| v * (1.0 + ratio);
        let shrink = |v: f64| v * (1.0 - ratio);
        Self {
            min: if self.min < 0.0 { grow(self.min) } else { shrink(self.min) },
            max: if self.max < 0.0 { shrink(self.max) } else { grow(self.max) },
        }
    }

    /// Widens by an absolute margin on both sides.
    pub fn widened(self, margin: f64) -> Self {
        Self {
            min: self.min - margin,
            max: self.max + margin,
        }
    }

    pub fn span(self) -> f64 {
        self.max - self.min
    }

    pub fn contains(self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Evenly spaced values from `max` down to `min`.
    pub fn ticks(self, count: usize) -> Vec<f64> {
        match count {
            0 => Vec::new(),
            1 => vec![self.max],
            _ => {
                let step = self.span() / (count - 1) as f64;
                (0..count).map(|i| self.max - step * i as f64).collect()
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    pub label: String,
    pub plotted: f64,
}

/// The expanded view's trend line.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TrendSeries {
    pub points: Vec<ChartPoint>,
    /// Raw, non-inverted PB value.
    pub pb_reference: Option<f64>,
    pub domain: Option<Domain>,
}

impl TrendSeries {
    pub fn from_chart(chart: Option<&TrendChart>) -> Self {
        let Some(chart) = chart else {
            return Self::default();
        };

        let points: Vec<ChartPoint> = chart
            .points()
            .map(|(date, time)| ChartPoint {
                label: date_label(date),
                plotted: invert(time),
            })
            .collect();

        let domain =
            Domain::of(points.iter().map(|p| p.plotted)).map(|d| d.padded(DOMAIN_PADDING));

        Self {
            points,
            pb_reference: chart.pb_line,
            domain,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn plotted(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.plotted).collect()
    }

    pub fn pb_label(&self) -> Option<String> {
        self.pb_reference
            .map(|pb| format!("PB: {}", format_time(Some(pb), "N/A")))
    }

    /// Y-axis ticks with display labels.
    pub fn ticks(&self, count: usize) -> Vec<(f64, String)> {
        self.domain
            .map(|d| d.ticks(count))
            .unwrap_or_default()
            .into_iter()
            .map(|v| (v, tick_label(v)))
            .collect()
    }
}

/// SVG drawing area. Larger values are drawn nearer the top.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub inset: f64,
}

impl Viewport {
    pub const fn new(width: f64, height: f64, inset: f64) -> Self {
        Self {
            width,
            height,
            inset,
        }
    }

    pub fn view_box(&self) -> String {
        format!("0 0 {} {}", self.width, self.height)
    }

    /// Horizontal position of the `index`-th of `count` evenly spaced samples.
    pub fn x_at(&self, index: usize, count: usize) -> f64 {
        let inner = self.width - 2.0 * self.inset;
        if count < 2 {
            return self.inset + inner / 2.0;
        }
        self.inset + inner * index as f64 / (count - 1) as f64
    }

    /// Horizontal position of `value` on a value axis.
    pub fn x_for(&self, value: f64, domain: Domain) -> f64 {
        let inner = self.width - 2.0 * self.inset;
        if domain.span() <= 0.0 {
            return self.inset + inner / 2.0;
        }
        self.inset + inner * (value - domain.min) / domain.span()
    }

    pub fn y_for(&self, value: f64, domain: Domain) -> f64 {
        let inner = self.height - 2.0 * self.inset;
        if domain.span() <= 0.0 {
            return self.inset + inner / 2.0;
        }
        self.inset + inner * (domain.max - value) / domain.span()
    }

    /// Y of a reference line, or `None` when it falls outside the domain.
    pub fn reference_y(&self, value: f64, domain: Domain) -> Option<f64> {
        domain.contains(value).then(|| self.y_for(value, domain))
    }

    /// `points` attribute for an SVG polyline.
    pub fn polyline(&self, values: &[f64], domain: Domain) -> String {
        values
            .iter()
            .enumerate()
            .map(|(i, &v)| {
                format!(
                    "{:.1},{:.1}",
                    self.x_at(i, values.len()),
                    self.y_for(v, domain)
                )
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}
