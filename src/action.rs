//! Action enum - All possible application actions
//!
//! Actions are discrete operations that the application can perform.
//! Components emit Actions in response to events, and the App processes
//! them to update state.

use std::fmt;

/// All possible actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // ─────────────────────────────────────────────────────────────────────────
    // App Lifecycle
    // ─────────────────────────────────────────────────────────────────────────
    /// Regular tick: fires debounced searches and applies fetch results
    Tick,
    /// Terminal was resized
    Resize(u16, u16),
    /// Quit without confirmation
    ForceQuit,

    // ─────────────────────────────────────────────────────────────────────────
    // Search Box
    // ─────────────────────────────────────────────────────────────────────────
    /// Append a character to the search term
    SearchInput(char),
    /// Remove the last character of the search term
    SearchBackspace,
    /// Clear the search term
    ClearSearch,

    // ─────────────────────────────────────────────────────────────────────────
    // Candidate Dropdown
    // ─────────────────────────────────────────────────────────────────────────
    /// Hide the dropdown (Escape)
    CloseDropdown,
    /// Move the highlight to the next candidate
    NextCandidate,
    /// Move the highlight to the previous candidate
    PrevCandidate,
    /// Pick the highlighted candidate and load its repositories
    SelectCandidate,

    // ─────────────────────────────────────────────────────────────────────────
    // Profile Panel
    // ─────────────────────────────────────────────────────────────────────────
    /// Fetch the selected candidate's repositories again
    RetryRepositories,
    /// Open the selected candidate's profile in the browser
    OpenProfile,
    /// Scroll repositories up one line
    ScrollUp,
    /// Scroll repositories down one line
    ScrollDown,
    /// Scroll repositories up one page
    PageUp,
    /// Scroll repositories down one page
    PageDown,

    // ─────────────────────────────────────────────────────────────────────────
    // Modals
    // ─────────────────────────────────────────────────────────────────────────
    /// Open quit confirmation dialog
    OpenQuitDialog,
    /// Open help dialog showing all keyboard shortcuts
    OpenHelp,
    /// Close the current modal
    CloseModal,
    /// Confirm the current modal action
    ConfirmModal,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Tick => write!(f, "Tick"),
            Action::Resize(w, h) => write!(f, "Resize({}, {})", w, h),
            Action::ForceQuit => write!(f, "ForceQuit"),
            Action::SearchInput(c) => write!(f, "SearchInput('{}')", c),
            Action::SearchBackspace => write!(f, "SearchBackspace"),
            Action::ClearSearch => write!(f, "ClearSearch"),
            Action::CloseDropdown => write!(f, "CloseDropdown"),
            Action::NextCandidate => write!(f, "NextCandidate"),
            Action::PrevCandidate => write!(f, "PrevCandidate"),
            Action::SelectCandidate => write!(f, "SelectCandidate"),
            Action::RetryRepositories => write!(f, "RetryRepositories"),
            Action::OpenProfile => write!(f, "OpenProfile"),
            Action::ScrollUp => write!(f, "ScrollUp"),
            Action::ScrollDown => write!(f, "ScrollDown"),
            Action::PageUp => write!(f, "PageUp"),
            Action::PageDown => write!(f, "PageDown"),
            Action::OpenQuitDialog => write!(f, "OpenQuitDialog"),
            Action::OpenHelp => write!(f, "OpenHelp"),
            Action::CloseModal => write!(f, "CloseModal"),
            Action::ConfirmModal => write!(f, "ConfirmModal"),
        }
    }
}
