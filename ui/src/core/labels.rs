//! Qualitative label → presentation lookup.
//!
//! Each table is total over its enum: unknown or absent labels map to a
//! neutral `N/A` descriptor with no indicator glyph.

use api::models::{DiffLabel, FreshnessLabel, StabilityLabel, TrendLabel};

/// Visual tier a descriptor is rendered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Positive,
    Neutral,
    Negative,
    /// The selected athlete's own row in a comparison.
    Emphasis,
}

impl Severity {
    /// Modifier appended to a block class, e.g. `badge--positive`.
    pub fn modifier(self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Neutral => "neutral",
            Self::Negative => "negative",
            Self::Emphasis => "emphasis",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Indicator {
    Up,
    Flat,
    Down,
}

impl Indicator {
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Up => "▲",
            Self::Flat => "→",
            Self::Down => "▼",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Presentation {
    pub severity: Severity,
    pub short_text: &'static str,
    pub indicator: Option<Indicator>,
}

impl Presentation {
    const fn new(severity: Severity, short_text: &'static str) -> Self {
        Self {
            severity,
            short_text,
            indicator: None,
        }
    }

    const fn with(self, indicator: Indicator) -> Self {
        Self {
            indicator: Some(indicator),
            ..self
        }
    }

    pub const FALLBACK: Self = Self::new(Severity::Neutral, "N/A");

    pub fn css_class(&self, block: &str) -> String {
        format!("{block} {block}--{}", self.severity.modifier())
    }
}

pub fn freshness(label: Option<FreshnessLabel>) -> Presentation {
    match label {
        Some(FreshnessLabel::HotStreak) => Presentation::new(Severity::Positive, "Hot streak"),
        Some(FreshnessLabel::Stable) => Presentation::new(Severity::Neutral, "Stable"),
        Some(FreshnessLabel::NotUpdatedRecently) => {
            Presentation::new(Severity::Negative, "Not updated recently")
        }
        Some(FreshnessLabel::Unknown) | None => Presentation::FALLBACK,
    }
}

pub fn stability(label: Option<StabilityLabel>) -> Presentation {
    match label {
        Some(StabilityLabel::High) => Presentation::new(Severity::Positive, "High"),
        Some(StabilityLabel::Medium) => Presentation::new(Severity::Neutral, "Medium"),
        Some(StabilityLabel::Low) => Presentation::new(Severity::Negative, "Low"),
        Some(StabilityLabel::Unknown) | None => Presentation::FALLBACK,
    }
}

pub fn trend(label: Option<TrendLabel>) -> Presentation {
    match label {
        Some(TrendLabel::Improving) => {
            Presentation::new(Severity::Positive, "Improving").with(Indicator::Up)
        }
        Some(TrendLabel::Stable) => {
            Presentation::new(Severity::Neutral, "Stable").with(Indicator::Flat)
        }
        Some(TrendLabel::Declining) => {
            Presentation::new(Severity::Negative, "Declining").with(Indicator::Down)
        }
        Some(TrendLabel::Unknown) | None => Presentation::FALLBACK,
    }
}

/// Competitor gap relative to the selected athlete.
pub fn competitor(label: Option<DiffLabel>) -> Presentation {
    match label {
        Some(DiffLabel::FarAhead) => {
            Presentation::new(Severity::Positive, "Far ahead").with(Indicator::Up)
        }
        Some(DiffLabel::SlightlyAhead) => {
            Presentation::new(Severity::Positive, "Slightly ahead").with(Indicator::Up)
        }
        Some(DiffLabel::YourResult) => Presentation::new(Severity::Emphasis, "Your result"),
        Some(DiffLabel::SlightlyBehind) => {
            Presentation::new(Severity::Negative, "Slightly behind").with(Indicator::Down)
        }
        Some(DiffLabel::FarBehind) => {
            Presentation::new(Severity::Negative, "Far behind").with(Indicator::Down)
        }
        Some(DiffLabel::Unknown) | None => Presentation::FALLBACK,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn freshness_table_is_total() {
        let cases = [
            (Some(FreshnessLabel::HotStreak), Severity::Positive),
            (Some(FreshnessLabel::Stable), Severity::Neutral),
            (Some(FreshnessLabel::NotUpdatedRecently), Severity::Negative),
            (Some(FreshnessLabel::Unknown), Severity::Neutral),
            (None, Severity::Neutral),
        ];
        for (label, expected) in cases {
            assert_eq!(freshness(label).severity, expected, "{label:?}");
        }
        assert_eq!(freshness(None).short_text, "N/A");
    }

    #[test]
    fn stability_table_is_total() {
        assert_eq!(stability(Some(StabilityLabel::High)).severity, Severity::Positive);
        assert_eq!(stability(Some(StabilityLabel::Medium)).severity, Severity::Neutral);
        assert_eq!(stability(Some(StabilityLabel::Low)).severity, Severity::Negative);
        assert_eq!(stability(Some(StabilityLabel::Unknown)), Presentation::FALLBACK);
        assert_eq!(stability(None), Presentation::FALLBACK);
    }

    #[test]
    fn trend_carries_direction_glyphs() {
        assert_eq!(trend(Some(TrendLabel::Improving)).indicator, Some(Indicator::Up));
        assert_eq!(trend(Some(TrendLabel::Stable)).indicator, Some(Indicator::Flat));
        assert_eq!(trend(Some(TrendLabel::Declining)).indicator, Some(Indicator::Down));
        assert_eq!(trend(Some(TrendLabel::Unknown)).indicator, None);
        assert_eq!(trend(None).short_text, "N/A");
    }

    #[test]
    fn competitor_gaps_split_by_side() {
        assert_eq!(competitor(Some(DiffLabel::FarAhead)).severity, Severity::Positive);
        assert_eq!(competitor(Some(DiffLabel::SlightlyBehind)).severity, Severity::Negative);
        assert_eq!(competitor(Some(DiffLabel::YourResult)).severity, Severity::Emphasis);
        assert_eq!(competitor(Some(DiffLabel::YourResult)).indicator, None);
        assert_eq!(competitor(None), Presentation::FALLBACK);
    }

    #[test]
    fn css_class_appends_modifier() {
        let class = stability(Some(StabilityLabel::Low)).css_class("badge");
        assert_eq!(class, "badge badge--negative");
    }
}
