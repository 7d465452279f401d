//! View state - the single source of truth for the explorer screen
//!
//! All mutation goes through the named transitions below. Each transition is a
//! total function of (state, payload) and performs no I/O; the coordinators
//! decide when to apply them.

use super::github::{Candidate, Repository};

/// Lifecycle of one asynchronous request slot
///
/// Loading and error are mutually exclusive by construction.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RequestStatus {
    #[default]
    Idle,
    Loading,
    Failed(String),
}

impl RequestStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, RequestStatus::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            RequestStatus::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Aggregate state rendered by the explorer screen
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    /// Text in the search box
    pub search_term: String,

    /// Result of the last applied search
    pub candidates: Vec<Candidate>,

    /// Whether the candidate dropdown is visible
    pub dropdown_open: bool,

    /// Highlighted row in the dropdown
    pub highlighted: usize,

    /// Candidate whose repositories are shown
    pub selected_candidate: Option<Candidate>,

    /// Repositories of the selected candidate
    pub repositories: Vec<Repository>,

    /// Search request slot
    pub search: RequestStatus,

    /// Repositories request slot
    pub repositories_status: RequestStatus,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Slot accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn search_loading(&self) -> bool {
        self.search.is_loading()
    }

    pub fn search_error(&self) -> Option<&str> {
        self.search.error()
    }

    pub fn repositories_loading(&self) -> bool {
        self.repositories_status.is_loading()
    }

    pub fn repositories_error(&self) -> Option<&str> {
        self.repositories_status.error()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Input transitions
    // ─────────────────────────────────────────────────────────────────────────

    /// Replace the typed search term
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// Hide the dropdown, keeping term and candidates
    pub fn close_dropdown(&mut self) {
        self.dropdown_open = false;
    }

    /// Move the dropdown highlight down, wrapping to the top
    pub fn highlight_next(&mut self) {
        if !self.dropdown_open || self.candidates.is_empty() {
            return;
        }
        self.highlighted = (self.highlighted + 1) % self.candidates.len();
    }

    /// Move the dropdown highlight up, wrapping to the bottom
    pub fn highlight_previous(&mut self) {
        if !self.dropdown_open || self.candidates.is_empty() {
            return;
        }
        self.highlighted = if self.highlighted == 0 {
            self.candidates.len() - 1
        } else {
            self.highlighted - 1
        };
    }

    /// Candidate under the dropdown highlight, if the dropdown is open
    pub fn highlighted_candidate(&self) -> Option<&Candidate> {
        if !self.dropdown_open {
            return None;
        }
        self.candidates.get(self.highlighted)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Search transitions
    // ─────────────────────────────────────────────────────────────────────────

    /// A search was triggered for a blank term; nothing is sent
    pub fn search_cleared(&mut self) {
        self.candidates.clear();
        self.dropdown_open = false;
        self.highlighted = 0;
        self.search = RequestStatus::Idle;
    }

    /// A search request was issued; stale candidates stay until resolution
    pub fn search_started(&mut self) {
        self.search = RequestStatus::Loading;
    }

    pub fn search_succeeded(&mut self, results: Vec<Candidate>) {
        self.dropdown_open = !results.is_empty();
        self.candidates = results;
        self.highlighted = 0;
        self.search = RequestStatus::Idle;
    }

    /// The latest search failed; results for older terms are dropped with it
    pub fn search_failed(&mut self, message: impl Into<String>) {
        self.candidates.clear();
        self.dropdown_open = false;
        self.highlighted = 0;
        self.search = RequestStatus::Failed(message.into());
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Repository transitions
    // ─────────────────────────────────────────────────────────────────────────

    /// Select a candidate and enter the repositories loading state
    pub fn select_candidate(&mut self, candidate: Candidate) {
        self.selected_candidate = Some(candidate);
        self.dropdown_open = false;
        self.repositories.clear();
        self.repositories_status = RequestStatus::Loading;
    }

    pub fn repositories_succeeded(&mut self, results: Vec<Repository>) {
        self.repositories = results;
        self.repositories_status = RequestStatus::Idle;
    }

    pub fn repositories_failed(&mut self, message: impl Into<String>) {
        self.repositories_status = RequestStatus::Failed(message.into());
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn candidate(id: u64, login: &str) -> Candidate {
        Candidate {
            id,
            login: login.to_string(),
            avatar_url: format!("https://avatars.githubusercontent.com/u/{}", id),
            html_url: format!("https://github.com/{}", login),
            kind: "User".to_string(),
        }
    }

    pub fn repository(id: u64, name: &str) -> Repository {
        Repository {
            id,
            name: name.to_string(),
            full_name: format!("octocat/{}", name),
            description: Some(format!("{} description", name)),
            html_url: format!("https://github.com/octocat/{}", name),
            stargazers_count: 10,
            forks_count: 2,
            watchers_count: 10,
            language: Some("Rust".to_string()),
            created_at: "2020-01-01T00:00:00Z".to_string(),
            updated_at: "2023-06-01T00:00:00Z".to_string(),
            private: false,
        }
    }
}
