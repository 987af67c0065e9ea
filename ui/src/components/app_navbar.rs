use dioxus::prelude::*;
use once_cell::sync::OnceCell;

use super::athlete_selector::AthleteSelector;

// Navbar stylesheet
const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

pub const OVERVIEW_LABEL: &str = "Performance overview";
pub const COMPETITION_LABEL: &str = "Specific competition";

/// Platforms register a `NavBuilder` providing fully constructed `Link`
/// elements so `ui` does not need to know each platform's `Route` enum.
///
/// Each closure receives the tab label and returns a `Link` that already
/// contains it:
///
/// ```ignore
/// use ui::components::app_navbar::{register_nav, NavBuilder};
/// fn install_nav() {
///     register_nav(NavBuilder {
///         overview: |label| rsx!( Link { class: "navbar__link", to: Route::PerformanceOverview {}, "{label}" } ),
///         competition: |label| rsx!( Link { class: "navbar__link", to: Route::SpecificCompetition {}, "{label}" } ),
///     });
/// }
/// ```
///
/// Without a builder, `AppNavbar` falls back to whatever `children` it was given.
pub struct NavBuilder {
    pub overview: fn(label: &str) -> Element,
    pub competition: fn(label: &str) -> Element,
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

/// First registration wins.
pub fn register_nav(builder: NavBuilder) {
    if NAV_BUILDER.set(builder).is_err() {
        tracing::debug!("navbar builder already registered");
    }
}

#[component]
pub fn AppNavbar(children: Element) -> Element {
    let internal_nav = NAV_BUILDER.get().map(|b| {
        let overview = (b.overview)(OVERVIEW_LABEL);
        let competition = (b.competition)(COMPETITION_LABEL);

        rsx! {
            nav { class: "navbar__links", aria_label: "Tabs",
                {overview}
                {competition}
            }
        }
    });

    rsx! {
        // Shared navbar stylesheet, inlined for release native builds
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{NAVBAR_CSS_INLINE}" }
        }

        header { id: "navbar", class: "navbar",
            div { class: "navbar__inner",
                div { class: "navbar__brand",
                    span { class: "navbar__brand-link",
                        span { class: "navbar__brand-spark", aria_hidden: "true" }
                        span { class: "navbar__brand-mark", "Strokeline" }
                    }
                    span { class: "navbar__brand-subtitle", "Swimming performance dashboard" }
                }

                div { class: "navbar__athlete", AthleteSelector {} }
            }

            div { class: "navbar__tabs",
                if let Some(nav) = internal_nav {
                    {nav}
                } else {
                    nav { class: "navbar__links", {children} }
                }
            }
        }
    }
}
