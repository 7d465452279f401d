//! Root application component
//!
//! The App struct implements the Component trait, acting as the root component
//! that delegates event handling and rendering to child components.
//! Request bookkeeping lives in the coordinators and the view state; App only
//! wires keys, the debouncer, and the fetcher to them.

use crate::action::Action;
use crate::component::Component;
use crate::components::{
    draw_home_screen, spinner_frame, HelpDialog, HomeRenderContext, ProfileComponent,
    QuitDialog, SearchComponent,
};
use crate::coordinator::{SearchCoordinator, SelectionCoordinator};
use crate::model::{Modal, ModalStack, ViewState};
use crate::services::{Debouncer, FetchMessage, Fetcher};
use anyhow::Result;
use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};
use std::time::{Duration, Instant};

// ═══════════════════════════════════════════════════════════════════════════════
// App Struct
// ═══════════════════════════════════════════════════════════════════════════════

/// Main application state - coordinates between components
pub struct App {
    /// Everything the screen shows
    pub state: ViewState,

    /// Modal overlay stack
    pub modals: ModalStack,

    search: SearchCoordinator,
    selection: SelectionCoordinator,

    /// Holds the latest search term until typing pauses
    debouncer: Debouncer<String>,

    /// Background GitHub calls
    fetcher: Fetcher,

    /// Flag to indicate the app should quit
    pub should_quit: bool,

    /// Status message to display in place of the help bar
    pub status_message: Option<String>,

    /// Tick counter, drives the spinner
    ticks: u64,

    // ─────────────────────────────────────────────────────────────────────────
    // Child Components
    // ─────────────────────────────────────────────────────────────────────────
    pub search_box: SearchComponent,
    pub profile: ProfileComponent,
    pub quit_dialog: QuitDialog,
    pub help_dialog: HelpDialog,
}

// ═══════════════════════════════════════════════════════════════════════════════
// App Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl App {
    /// Create a new App instance
    pub fn new(fetcher: Fetcher, quiet_period: Duration) -> App {
        App {
            state: ViewState::new(),
            modals: ModalStack::new(),
            search: SearchCoordinator::new(),
            selection: SelectionCoordinator::new(),
            debouncer: Debouncer::new(quiet_period),
            fetcher,
            should_quit: false,
            status_message: None,
            ticks: 0,
            search_box: SearchComponent::new(),
            profile: ProfileComponent::new(),
            quit_dialog: QuitDialog,
            help_dialog: HelpDialog::default(),
        }
    }

    /// Replace the search term and restart the quiet period
    pub fn type_term(&mut self, term: impl Into<String>, now: Instant) {
        let term = term.into();
        self.state.set_search_term(term.clone());
        self.debouncer.push(term, now);
    }

    /// Fire a due search and apply whatever the fetcher has finished
    pub fn tick_at(&mut self, now: Instant) {
        self.ticks = self.ticks.wrapping_add(1);

        if let Some(term) = self.debouncer.poll(now) {
            if let Some(request) = self.search.trigger(&term, &mut self.state) {
                self.fetcher.search(request.seq, request.term);
            }
        }

        for message in self.fetcher.drain() {
            match message {
                FetchMessage::Candidates { seq, result } => {
                    self.search.resolve(seq, result, &mut self.state);
                }
                FetchMessage::Repositories { seq, result } => {
                    self.selection.resolve(seq, result, &mut self.state);
                }
            }
        }
    }

    /// Drop any pending search so nothing fires after exit
    pub fn shutdown(&mut self) {
        if self.debouncer.is_pending() {
            tracing::debug!("discarding pending search on shutdown");
        }
        self.debouncer.cancel();
    }

    fn select_highlighted(&mut self) {
        if !self.state.dropdown_open {
            return;
        }
        let Some(candidate) = self.state.highlighted_candidate().cloned() else {
            return;
        };
        let request = self.selection.select(candidate, &mut self.state);
        self.profile.reset_scroll();
        self.fetcher.repositories(request.seq, request.login);
    }

    fn retry_repositories(&mut self) {
        if let Some(request) = self.selection.retry(&mut self.state) {
            self.profile.reset_scroll();
            self.fetcher.repositories(request.seq, request.login);
        }
    }

    fn open_profile(&mut self) {
        let Some(ref candidate) = self.state.selected_candidate else {
            return;
        };
        let url = candidate.html_url.clone();
        match open::that(&url) {
            Ok(()) => {
                tracing::info!(url = %url, "opened profile in browser");
                self.status_message = Some(format!("Opened {}", url));
            }
            Err(e) => {
                tracing::warn!(url = %url, error = %e, "failed to open browser");
                self.status_message = Some(format!("Could not open browser: {}", e));
            }
        }
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.shutdown();
    }
}

impl Component for App {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        self.status_message = None;

        if let Some(modal) = self.modals.top().cloned() {
            self.handle_modal_key_event(&modal, key)
        } else {
            self.search_box.handle_key_event(key)
        }
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            // ─────────────────────────────────────────────────────────────────
            // App Lifecycle
            // ─────────────────────────────────────────────────────────────────
            Action::Tick => self.tick_at(Instant::now()),
            Action::ForceQuit => {
                self.should_quit = true;
            }
            Action::Resize(_, _) => {}

            // ─────────────────────────────────────────────────────────────────
            // Search Box
            // ─────────────────────────────────────────────────────────────────
            Action::SearchInput(c) => {
                let mut term = self.state.search_term.clone();
                term.push(c);
                self.type_term(term, Instant::now());
            }
            Action::SearchBackspace => {
                let mut term = self.state.search_term.clone();
                if term.pop().is_some() {
                    self.type_term(term, Instant::now());
                }
            }
            Action::ClearSearch => {
                if !self.state.search_term.is_empty() {
                    self.type_term(String::new(), Instant::now());
                }
            }

            // ─────────────────────────────────────────────────────────────────
            // Candidate Dropdown (arrows scroll the profile while it is closed)
            // ─────────────────────────────────────────────────────────────────
            Action::CloseDropdown => self.state.close_dropdown(),
            Action::NextCandidate => {
                if self.state.dropdown_open {
                    self.state.highlight_next();
                } else {
                    self.profile.update(Action::ScrollDown)?;
                }
            }
            Action::PrevCandidate => {
                if self.state.dropdown_open {
                    self.state.highlight_previous();
                } else {
                    self.profile.update(Action::ScrollUp)?;
                }
            }
            Action::SelectCandidate => self.select_highlighted(),

            // ─────────────────────────────────────────────────────────────────
            // Profile Panel
            // ─────────────────────────────────────────────────────────────────
            Action::RetryRepositories => self.retry_repositories(),
            Action::OpenProfile => self.open_profile(),
            Action::ScrollUp | Action::ScrollDown | Action::PageUp | Action::PageDown => {
                self.profile.update(action)?;
            }

            // ─────────────────────────────────────────────────────────────────
            // Modals
            // ─────────────────────────────────────────────────────────────────
            Action::OpenQuitDialog => {
                self.modals.push(Modal::QuitConfirm);
            }
            Action::OpenHelp => {
                self.help_dialog.scroll_offset = 0;
                self.modals.push(Modal::Help { scroll_offset: 0 });
            }
            Action::CloseModal => {
                self.modals.pop();
            }
            Action::ConfirmModal => {
                if let Some(Modal::QuitConfirm) = self.modals.pop() {
                    self.should_quit = true;
                }
            }
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let ctx = HomeRenderContext {
            state: &self.state,
            spinner: spinner_frame(self.ticks),
            status_message: self.status_message.as_deref(),
        };

        draw_home_screen(frame, area, &mut self.search_box, &mut self.profile, &ctx)?;

        // Draw modal overlay if active
        if let Some(modal) = self.modals.top().cloned() {
            self.draw_modal(frame, area, &modal)?;
        }
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Helper Methods
// ═══════════════════════════════════════════════════════════════════════════════

impl App {
    fn handle_modal_key_event(&mut self, modal: &Modal, key: KeyEvent) -> Result<Option<Action>> {
        match modal {
            Modal::QuitConfirm => self.quit_dialog.handle_key_event(key),
            Modal::Help { .. } => self.help_dialog.handle_key_event(key),
        }
    }

    fn draw_modal(&mut self, frame: &mut Frame, area: Rect, modal: &Modal) -> Result<()> {
        match modal {
            Modal::QuitConfirm => self.quit_dialog.draw(frame, area)?,
            Modal::Help { .. } => self.help_dialog.draw(frame, area)?,
        }
        Ok(())
    }
}
