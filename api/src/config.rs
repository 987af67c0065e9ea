//! Endpoint configuration.

/// Used when neither the runtime nor the build environment names an API.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api/v1";

/// Environment variable overriding the API base URL.
pub const BASE_URL_ENV: &str = "STROKELINE_API_URL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        }
    }

    /// Runtime env (native only), then the value baked in at build time, then the default.
    pub fn resolve() -> Self {
        let chosen = runtime_override()
            .or_else(|| non_blank(option_env!("STROKELINE_API_URL")))
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Self::new(chosen)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_override() -> Option<String> {
    std::env::var(BASE_URL_ENV)
        .ok()
        .and_then(|raw| non_blank(Some(raw.as_str())))
}

#[cfg(target_arch = "wasm32")]
fn runtime_override() -> Option<String> {
    None
}

fn non_blank(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slashes_are_dropped() {
        let config = ApiConfig::new(" https://swim.example/api/v1/ ");
        assert_eq!(config.base_url, "https://swim.example/api/v1");
    }

    #[test]
    fn default_points_at_local_server() {
        assert_eq!(ApiConfig::default().base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn blank_values_are_ignored() {
        assert_eq!(non_blank(Some("   ")), None);
        assert_eq!(non_blank(None), None);
        assert_eq!(non_blank(Some(" x ")), Some("x".into()));
    }
}
