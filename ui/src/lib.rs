//! Shared UI crate for Strokeline. The dashboard core, views and components live here.

pub mod competition;
pub mod context;
pub mod core;
pub mod performance;
pub mod views;

pub mod components {
    // Tab navbar with the athlete picker (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::register_nav;
    pub use app_navbar::AppNavbar;
    pub use app_navbar::NavBuilder;

    pub mod athlete_selector;
    pub use athlete_selector::{filter_athletes, AthleteSelector};
}

pub use context::use_app_context;
