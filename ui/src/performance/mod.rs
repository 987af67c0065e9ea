//! Per-event performance cards for the overview page.

mod charts;
pub use charts::{RecentBars, Sparkline, TrendLineChart};

mod insight;
pub use insight::{EventInsight, InsightLayout, InsightState, PanelSection};

mod panel;
pub use panel::EventInsightPanel;
