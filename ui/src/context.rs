//! App-wide state shared through Dioxus context.

use api::{AnalyticsClient, ApiConfig};
use dioxus::prelude::*;

use crate::core::session::AthleteSession;

/// Installs the athlete session and the analytics client. Call once, at the root.
pub fn use_app_context() {
    let session = use_signal(AthleteSession::default);
    use_context_provider(|| session);
    use_context_provider(|| {
        let config = ApiConfig::resolve();
        tracing::info!(base_url = %config.base_url, "analytics API configured");
        AnalyticsClient::new(config)
    });
}

pub fn use_athlete_session() -> Signal<AthleteSession> {
    use_context()
}

pub fn use_analytics_client() -> AnalyticsClient {
    use_context()
}
