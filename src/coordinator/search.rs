//! Search coordinator - "search users" request lifecycle

use crate::model::github::Candidate;
use crate::model::view_state::ViewState;
use crate::services::github::GitHubError;

/// A search the fetch runner should perform
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub seq: u64,
    pub term: String,
}

/// Applies search results, last issued request wins
#[derive(Debug, Default)]
pub struct SearchCoordinator {
    issued: u64,
}

impl SearchCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sequence number of the most recently issued search
    pub fn latest(&self) -> u64 {
        self.issued
    }

    /// Start a search for `term`
    ///
    /// Every trigger supersedes whatever is in flight. A blank term clears the
    /// candidates and returns `None`: nothing should be sent.
    pub fn trigger(&mut self, term: &str, state: &mut ViewState) -> Option<SearchRequest> {
        self.issued += 1;

        if term.trim().is_empty() {
            tracing::debug!(seq = self.issued, "blank search term, clearing candidates");
            state.search_cleared();
            return None;
        }

        tracing::debug!(seq = self.issued, term, "search issued");
        state.search_started();
        Some(SearchRequest {
            seq: self.issued,
            term: term.to_string(),
        })
    }

    /// Apply the outcome of search `seq`; returns false if it was stale
    pub fn resolve(
        &mut self,
        seq: u64,
        result: Result<Vec<Candidate>, GitHubError>,
        state: &mut ViewState,
    ) -> bool {
        if seq != self.issued {
            tracing::debug!(seq, latest = self.issued, "dropping stale search result");
            return false;
        }

        match result {
            Ok(candidates) => {
                tracing::info!(seq, count = candidates.len(), "search resolved");
                state.search_succeeded(candidates);
            }
            Err(err) => {
                tracing::warn!(seq, error = %err, "search failed");
                state.search_failed(err.to_string());
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::view_state::fixtures::candidate;

    #[test]
    fn test_blank_terms_issue_nothing() {
        for term in ["", " ", "\t", "   \n "] {
            let mut coordinator = SearchCoordinator::new();
            let mut state = ViewState::new();
            state.search_failed("old error");

            assert_eq!(coordinator.trigger(term, &mut state), None);
            assert!(state.candidates.is_empty());
            assert!(state.search_error().is_none());
            assert!(!state.search_loading());
        }
    }

    #[test]
    fn test_trigger_enters_loading() {
        let mut coordinator = SearchCoordinator::new();
        let mut state = ViewState::new();

        let request = coordinator.trigger("octocat", &mut state).unwrap();
        assert_eq!(request.term, "octocat");
        assert_eq!(request.seq, coordinator.latest());
        assert!(state.search_loading());
    }

    #[test]
    fn test_last_issued_wins_when_earlier_resolves_late() {
        let mut coordinator = SearchCoordinator::new();
        let mut state = ViewState::new();

        let a = coordinator.trigger("a", &mut state).unwrap();
        let b = coordinator.trigger("b", &mut state).unwrap();

        assert!(coordinator.resolve(b.seq, Ok(vec![candidate(2, "b-user")]), &mut state));
        assert!(!coordinator.resolve(a.seq, Ok(vec![candidate(1, "a-user")]), &mut state));

        assert_eq!(state.candidates, vec![candidate(2, "b-user")]);
        assert!(state.dropdown_open);
    }

    #[test]
    fn test_superseded_request_keeps_loading_until_latest_resolves() {
        let mut coordinator = SearchCoordinator::new();
        let mut state = ViewState::new();

        let a = coordinator.trigger("a", &mut state).unwrap();
        let _b = coordinator.trigger("b", &mut state).unwrap();
        coordinator.resolve(a.seq, Ok(vec![candidate(1, "a-user")]), &mut state);

        assert!(state.search_loading());
        assert!(state.candidates.is_empty());
    }

    #[test]
    fn test_blank_trigger_supersedes_in_flight_search() {
        let mut coordinator = SearchCoordinator::new();
        let mut state = ViewState::new();

        let a = coordinator.trigger("a", &mut state).unwrap();
        assert_eq!(coordinator.trigger("", &mut state), None);

        assert!(!coordinator.resolve(a.seq, Ok(vec![candidate(1, "a-user")]), &mut state));
        assert!(state.candidates.is_empty());
        assert!(!state.dropdown_open);
    }

    #[test]
    fn test_stale_failure_is_dropped() {
        let mut coordinator = SearchCoordinator::new();
        let mut state = ViewState::new();

        let a = coordinator.trigger("a", &mut state).unwrap();
        let b = coordinator.trigger("b", &mut state).unwrap();
        coordinator.resolve(b.seq, Ok(vec![candidate(2, "b-user")]), &mut state);
        coordinator.resolve(
            a.seq,
            Err(GitHubError::Network("timed out".to_string())),
            &mut state,
        );

        assert!(state.search_error().is_none());
        assert_eq!(state.candidates.len(), 1);
    }

    #[test]
    fn test_failure_surfaces_message() {
        let mut coordinator = SearchCoordinator::new();
        let mut state = ViewState::new();

        let request = coordinator.trigger("octocat", &mut state).unwrap();
        coordinator.resolve(
            request.seq,
            Err(GitHubError::Network("API Error".to_string())),
            &mut state,
        );

        assert_eq!(state.search_error(), Some("API Error"));
        assert!(!state.search_loading());
        assert!(state.candidates.is_empty());
        assert!(!state.dropdown_open);
    }

    #[test]
    fn test_empty_result_keeps_dropdown_closed() {
        let mut coordinator = SearchCoordinator::new();
        let mut state = ViewState::new();

        let request = coordinator.trigger("zzzzzz", &mut state).unwrap();
        coordinator.resolve(request.seq, Ok(Vec::new()), &mut state);

        assert!(!state.dropdown_open);
        assert!(state.search_error().is_none());
    }
}
