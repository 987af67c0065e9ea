//! Failure taxonomy shared by every fetch.

use reqwest::StatusCode;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// Athlete, race or competition absent upstream. Shown to the user, never retried.
    #[error("{0} not found")]
    NotFound(String),

    /// A required selection is missing. Rendered as a prompt rather than an error.
    #[error("please select {0} first")]
    Unselected(&'static str),

    /// Network or server failure, carrying the raw message.
    #[error("request failed: {0}")]
    Transient(String),
}

impl FetchError {
    pub fn is_prompt(&self) -> bool {
        matches!(self, Self::Unselected(_))
    }

    /// Maps a non-success HTTP status onto the taxonomy.
    pub fn from_status(status: StatusCode, what: &str, body: &str) -> Self {
        if status == StatusCode::NOT_FOUND {
            return Self::NotFound(what.to_string());
        }

        let body = body.trim();
        if body.is_empty() {
            Self::Transient(status.to_string())
        } else {
            Self::Transient(format!("{status}: {body}"))
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transient(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_keeps_subject() {
        let err = FetchError::from_status(StatusCode::NOT_FOUND, "athlete Li Wei", "");
        assert_eq!(err, FetchError::NotFound("athlete Li Wei".into()));
        assert_eq!(err.to_string(), "athlete Li Wei not found");
    }

    #[test]
    fn server_errors_carry_raw_message() {
        let err = FetchError::from_status(
            StatusCode::INTERNAL_SERVER_ERROR,
            "years",
            " analysis backend unavailable \n",
        );
        assert_eq!(
            err,
            FetchError::Transient("500 Internal Server Error: analysis backend unavailable".into())
        );
        assert!(!err.is_prompt());
    }

    #[test]
    fn unselected_is_a_prompt() {
        let err = FetchError::Unselected("an athlete");
        assert!(err.is_prompt());
        assert_eq!(err.to_string(), "please select an athlete first");
    }
}
