//! Pure, platform-agnostic logic. Nothing here touches Dioxus.

pub mod chart;
pub mod derived;
pub mod format;
pub mod labels;
pub mod session;
