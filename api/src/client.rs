//! Async HTTP client for the analytics API.

use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::ApiConfig;
use crate::error::FetchError;
use crate::models::{AthleteRaceResult, Competition, EventPerformance, ResultComparison};

/// Thin wrapper over `reqwest::Client`. Cloning shares the connection pool.
#[derive(Debug, Clone)]
pub struct AnalyticsClient {
    http: Client,
    config: ApiConfig,
}

impl AnalyticsClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            http: Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// All athlete names known to the database, in server order.
    pub async fn athletes(&self) -> Result<Vec<String>, FetchError> {
        let url = self.endpoint(&["athletes"], &[])?;
        self.get_json(url, "athlete list").await
    }

    pub async fn years(&self) -> Result<Vec<String>, FetchError> {
        let url = self.endpoint(&["years"], &[])?;
        self.get_json(url, "competition years").await
    }

    pub async fn competitions(
        &self,
        year: &str,
        athlete: Option<&str>,
    ) -> Result<Vec<Competition>, FetchError> {
        let mut query = vec![("year", year)];
        if let Some(athlete) = athlete {
            query.push(("athlete", athlete));
        }
        let url = self.endpoint(&["competitions"], &query)?;
        self.get_json(url, &format!("competitions for {year}")).await
    }

    pub async fn athlete_races(
        &self,
        athlete: &str,
        competition: &str,
        year: &str,
    ) -> Result<Vec<AthleteRaceResult>, FetchError> {
        let url = self.endpoint(
            &["athletes", athlete, "races"],
            &[("competition_name", competition), ("year", year)],
        )?;
        self.get_json(url, &format!("races of {athlete} at {competition} {year}"))
            .await
    }

    pub async fn performance_overview(
        &self,
        athlete: &str,
    ) -> Result<Vec<EventPerformance>, FetchError> {
        let url = self.endpoint(&["athletes", athlete, "performance-overview"], &[])?;
        self.get_json(url, &format!("athlete {athlete}")).await
    }

    pub async fn race_comparison(
        &self,
        race_id: &str,
        athlete: &str,
    ) -> Result<ResultComparison, FetchError> {
        let url = self.endpoint(&["race", race_id, "comparison"], &[("athlete_name", athlete)])?;
        self.get_json(url, &format!("race {race_id}")).await
    }

    fn endpoint(&self, segments: &[&str], query: &[(&str, &str)]) -> Result<Url, FetchError> {
        let base = &self.config.base_url;
        let mut url = Url::parse(base)
            .map_err(|err| FetchError::Transient(format!("invalid API base url {base}: {err}")))?;

        url.path_segments_mut()
            .map_err(|_| FetchError::Transient(format!("API base url {base} cannot take a path")))?
            .pop_if_empty()
            .extend(segments);

        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }

        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url, what: &str) -> Result<T, FetchError> {
        debug!(%url, "fetching {what}");

        let response = self.http.get(url.clone()).send().await.map_err(|err| {
            warn!(%url, error = %err, "request for {what} failed");
            FetchError::from(err)
        })?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let err = FetchError::from_status(status, what, &body);
            warn!(%url, %status, "request for {what} rejected");
            return Err(err);
        }

        decode(&body, what)
    }
}

fn decode<T: DeserializeOwned>(body: &str, what: &str) -> Result<T, FetchError> {
    serde_json::from_str(body).map_err(|err| {
        warn!(error = %err, "malformed payload for {what}");
        FetchError::Transient(format!("malformed response for {what}: {err}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> AnalyticsClient {
        AnalyticsClient::new(ApiConfig::new(base))
    }

    #[test]
    fn overview_endpoint_escapes_athlete_name() {
        let url = client("http://localhost:8080/api/v1")
            .endpoint(&["athletes", "Li Wei", "performance-overview"], &[])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:8080/api/v1/athletes/Li%20Wei/performance-overview"
        );
    }

    #[test]
    fn comparison_endpoint_carries_athlete_query() {
        let url = client("https://swim.example/api/v1/")
            .endpoint(&["race", "r-42", "comparison"], &[("athlete_name", "Wang")])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://swim.example/api/v1/race/r-42/comparison?athlete_name=Wang"
        );
    }

    #[test]
    fn endpoint_without_query_has_no_question_mark() {
        let url = client("http://localhost:8080/api/v1")
            .endpoint(&["years"], &[])
            .unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/api/v1/years");
    }

    #[test]
    fn invalid_base_url_is_transient() {
        let err = client("not a url").endpoint(&["years"], &[]).unwrap_err();
        assert!(matches!(err, FetchError::Transient(_)));
    }

    #[test]
    fn malformed_body_is_transient() {
        let err = decode::<Vec<String>>("{\"oops\":", "years").unwrap_err();
        match err {
            FetchError::Transient(message) => assert!(message.contains("years")),
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn list_body_decodes() {
        let years: Vec<String> = decode("[\"2023\",\"2024\"]", "years").unwrap();
        assert_eq!(years, vec!["2023", "2024"]);
    }
}
