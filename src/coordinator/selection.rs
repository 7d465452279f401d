//! Selection coordinator - repositories of the picked candidate

use crate::model::github::{Candidate, Repository};
use crate::model::view_state::ViewState;
use crate::services::github::GitHubError;

/// A repositories fetch the fetch runner should perform
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoriesRequest {
    pub seq: u64,
    pub login: String,
}

/// Applies repository results, last selection wins
#[derive(Debug, Default)]
pub struct SelectionCoordinator {
    issued: u64,
}

impl SelectionCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn latest(&self) -> u64 {
        self.issued
    }

    /// Select `candidate` and issue a fetch for its repositories
    pub fn select(&mut self, candidate: Candidate, state: &mut ViewState) -> RepositoriesRequest {
        self.issued += 1;
        let login = candidate.login.clone();
        tracing::debug!(seq = self.issued, login = %login, "repositories fetch issued");
        state.select_candidate(candidate);
        RepositoriesRequest {
            seq: self.issued,
            login,
        }
    }

    /// Fetch again for the currently selected candidate
    pub fn retry(&mut self, state: &mut ViewState) -> Option<RepositoriesRequest> {
        let candidate = state.selected_candidate.clone()?;
        Some(self.select(candidate, state))
    }

    /// Apply the outcome of fetch `seq`; returns false if it was stale
    pub fn resolve(
        &mut self,
        seq: u64,
        result: Result<Vec<Repository>, GitHubError>,
        state: &mut ViewState,
    ) -> bool {
        if seq != self.issued {
            tracing::debug!(seq, latest = self.issued, "dropping stale repositories result");
            return false;
        }

        match result {
            Ok(repositories) => {
                tracing::info!(seq, count = repositories.len(), "repositories resolved");
                state.repositories_succeeded(repositories);
            }
            Err(err) => {
                tracing::warn!(seq, error = %err, "repositories fetch failed");
                state.repositories_failed(err.to_string());
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::view_state::fixtures::{candidate, repository};

    #[test]
    fn test_select_clears_repositories_before_resolution() {
        let mut coordinator = SelectionCoordinator::new();
        let mut state = ViewState::new();

        let first = coordinator.select(candidate(1, "a"), &mut state);
        coordinator.resolve(first.seq, Ok(vec![repository(1, "one")]), &mut state);
        assert_eq!(state.repositories.len(), 1);

        let second = coordinator.select(candidate(2, "b"), &mut state);
        assert_eq!(second.login, "b");
        assert!(state.repositories.is_empty());
        assert!(state.repositories_loading());
        assert!(!state.dropdown_open);
    }

    #[test]
    fn test_first_fetch_cannot_populate_after_second_selection() {
        let mut coordinator = SelectionCoordinator::new();
        let mut state = ViewState::new();

        let first = coordinator.select(candidate(1, "a"), &mut state);
        let second = coordinator.select(candidate(2, "b"), &mut state);

        assert!(!coordinator.resolve(first.seq, Ok(vec![repository(1, "a-repo")]), &mut state));
        assert!(state.repositories.is_empty());
        assert!(state.repositories_loading());

        assert!(coordinator.resolve(second.seq, Ok(vec![repository(2, "b-repo")]), &mut state));
        assert_eq!(state.repositories, vec![repository(2, "b-repo")]);
        assert!(!state.repositories_loading());
    }

    #[test]
    fn test_failure_keeps_selected_candidate() {
        let mut coordinator = SelectionCoordinator::new();
        let mut state = ViewState::new();

        let request = coordinator.select(candidate(1, "a"), &mut state);
        let err = GitHubError::Remote {
            context: "Failed to fetch repositories",
            status: 500,
            status_text: "Internal Server Error".to_string(),
        };
        coordinator.resolve(request.seq, Err(err), &mut state);

        assert_eq!(
            state.repositories_error(),
            Some("Failed to fetch repositories: 500 Internal Server Error")
        );
        assert!(!state.repositories_loading());
        assert_eq!(state.selected_candidate, Some(candidate(1, "a")));
    }

    #[test]
    fn test_retry_reissues_for_selected_candidate() {
        let mut coordinator = SelectionCoordinator::new();
        let mut state = ViewState::new();
        assert!(coordinator.retry(&mut state).is_none());

        let first = coordinator.select(candidate(1, "a"), &mut state);
        coordinator.resolve(first.seq, Err(GitHubError::Network("offline".into())), &mut state);

        let retry = coordinator.retry(&mut state).unwrap();
        assert_eq!(retry.login, "a");
        assert!(retry.seq > first.seq);
        assert!(state.repositories_loading());
        assert!(state.repositories_error().is_none());
    }
}
