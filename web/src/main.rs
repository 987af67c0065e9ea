use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::AppNavbar;
use ui::views::{PerformanceOverview, SpecificCompetition};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
    #[redirect("/", || Route::PerformanceOverview {})]
    #[route("/performance-overview")]
    PerformanceOverview {},
    #[route("/specific-competition")]
    SpecificCompetition {},
}

// Shared theme (ui/assets/theme/main.css), inlined so web and desktop stay identical.
const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

fn nav_overview(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        active_class: "active",
        to: Route::PerformanceOverview {},
        "{label}"
    })
}
fn nav_competition(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        active_class: "active",
        to: Route::SpecificCompetition {},
        "{label}"
    })
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::use_app_context();
    register_nav(NavBuilder {
        overview: nav_overview,
        competition: nav_competition,
    });

    rsx! {
        document::Title { "Strokeline" }
        document::Style { "{MAIN_CSS_INLINE}" }

        Router::<Route> {}
    }
}

/// A web-specific Router around the shared navbar
/// which allows us to use the web-specific `Route` enum.
#[component]
fn WebNavbar() -> Element {
    rsx! {
        AppNavbar {}
        Outlet::<Route> {}
    }
}
