//! Selected-athlete session and the guard against late fetch responses.
//!
//! The session has exactly one writer (`select`) and is read everywhere else.
//! Each fetch takes a `SelectionTicket` before suspending; when it resolves,
//! `settle` only hands the value back if the selection has not moved on.

use api::FetchError;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AthleteSession {
    selected: Option<String>,
    generation: u64,
}

impl AthleteSession {
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Replaces the selection. Blank names clear it. Returns whether anything changed.
    pub fn select(&mut self, athlete: Option<String>) -> bool {
        let athlete = athlete
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty());
        if athlete == self.selected {
            return false;
        }
        self.selected = athlete;
        self.generation = self.generation.wrapping_add(1);
        true
    }

    pub fn ticket(&self) -> SelectionTicket {
        SelectionTicket {
            generation: self.generation,
            athlete: self.selected.clone(),
        }
    }

    pub fn require_athlete(&self) -> Result<&str, FetchError> {
        self.selected().ok_or(FetchError::Unselected("an athlete"))
    }

    /// Hands `value` back only when `ticket` still matches the current selection.
    pub fn settle<T>(&self, ticket: &SelectionTicket, value: T) -> Settled<T> {
        if ticket.generation == self.generation {
            Settled::Current(value)
        } else {
            tracing::debug!(
                requested = ?ticket.athlete,
                current = ?self.selected,
                "dropping response for superseded selection"
            );
            Settled::Superseded
        }
    }
}

/// Snapshot of the selection taken when a fetch starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionTicket {
    generation: u64,
    athlete: Option<String>,
}

impl SelectionTicket {
    pub fn athlete(&self) -> Option<&str> {
        self.athlete.as_deref()
    }

    pub fn require_athlete(&self) -> Result<&str, FetchError> {
        self.athlete().ok_or(FetchError::Unselected("an athlete"))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Settled<T> {
    Current(T),
    /// A newer selection was made while this response was in flight.
    Superseded,
}

impl<T> Settled<T> {
    pub fn current(&self) -> Option<&T> {
        match self {
            Self::Current(value) => Some(value),
            Self::Superseded => None,
        }
    }
}

/// What a selection-scoped page renders for its fetch.
#[derive(Debug, PartialEq)]
pub enum PageState<'a, T> {
    Loading,
    /// Nothing to fetch yet; ask the user to choose.
    Prompt,
    Failed(String),
    Ready(&'a T),
}

impl<'a, T> PageState<'a, T> {
    /// `None` means the fetch has not resolved yet. A superseded response
    /// keeps the page loading until the newer fetch lands.
    pub fn of(outcome: Option<&'a Settled<Result<T, FetchError>>>) -> Self {
        match outcome {
            None | Some(Settled::Superseded) => Self::Loading,
            Some(Settled::Current(Ok(value))) => Self::Ready(value),
            Some(Settled::Current(Err(err))) if err.is_prompt() => Self::Prompt,
            Some(Settled::Current(Err(err))) => Self::Failed(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_unselected() {
        let session = AthleteSession::default();
        assert_eq!(session.selected(), None);
        assert_eq!(
            session.require_athlete(),
            Err(FetchError::Unselected("an athlete"))
        );
    }

    #[test]
    fn selecting_bumps_generation() {
        let mut session = AthleteSession::default();
        assert!(session.select(Some("Li Wei".into())));
        assert_eq!(session.generation(), 1);
        assert!(!session.select(Some(" Li Wei ".into())));
        assert_eq!(session.generation(), 1);
        assert!(session.select(Some("   ".into())));
        assert_eq!(session.selected(), None);
    }

    #[test]
    fn response_for_current_selection_is_kept() {
        let mut session = AthleteSession::default();
        session.select(Some("Li Wei".into()));
        let ticket = session.ticket();
        assert_eq!(ticket.athlete(), Some("Li Wei"));
        assert_eq!(session.settle(&ticket, 7), Settled::Current(7));
    }

    #[test]
    fn late_response_is_dropped() {
        let mut session = AthleteSession::default();
        session.select(Some("Li Wei".into()));
        let stale = session.ticket();
        session.select(Some("Chen Yu".into()));
        assert_eq!(session.settle(&stale, vec![1]), Settled::Superseded);
        assert_eq!(session.settle(&stale, 1).current(), None);
    }

    #[test]
    fn reselecting_same_name_after_switch_still_invalidates() {
        let mut session = AthleteSession::default();
        session.select(Some("Li Wei".into()));
        let first = session.ticket();
        session.select(Some("Chen Yu".into()));
        session.select(Some("Li Wei".into()));
        assert_eq!(session.settle(&first, ()), Settled::Superseded);
    }

    #[test]
    fn page_state_follows_outcome() {
        assert_eq!(PageState::<u8>::of(None), PageState::Loading);
        assert_eq!(PageState::<u8>::of(Some(&Settled::Superseded)), PageState::Loading);
        assert_eq!(PageState::of(Some(&Settled::Current(Ok(3)))), PageState::Ready(&3));

        let unselected: Settled<Result<u8, FetchError>> =
            Settled::Current(Err(FetchError::Unselected("an athlete")));
        assert_eq!(PageState::of(Some(&unselected)), PageState::Prompt);

        let missing: Settled<Result<u8, FetchError>> =
            Settled::Current(Err(FetchError::NotFound("athlete Li Wei".into())));
        assert_eq!(
            PageState::of(Some(&missing)),
            PageState::Failed("athlete Li Wei not found".into())
        );
    }
}
