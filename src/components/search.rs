//! Search component - search box and candidate dropdown
//!
//! Every printable key goes to the search box; control chords and function
//! keys drive the rest of the app.

use crate::action::Action;
use crate::component::Component;
use crate::model::ViewState;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

const PLACEHOLDER: &str = "Enter username to search...";

/// Search box with its dropdown
#[derive(Default)]
pub struct SearchComponent {
    dropdown_state: ListState,
}

impl SearchComponent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw the search box, with the search error underneath when present
    pub fn draw_search_box(&self, frame: &mut Frame, area: Rect, state: &ViewState, spinner: &str) {
        let mut spans = vec![Span::styled("🔍 ", Style::default().fg(Color::DarkGray))];
        if state.search_term.is_empty() {
            spans.push(Span::styled(PLACEHOLDER, Style::default().fg(Color::DarkGray)));
        } else {
            spans.push(Span::styled(
                state.search_term.clone(),
                Style::default().fg(Color::White),
            ));
            spans.push(Span::styled("_", Style::default().fg(Color::Cyan)));
        }
        if state.search_loading() {
            spans.push(Span::styled(
                format!("  {}", spinner),
                Style::default().fg(Color::Cyan),
            ));
        }

        let mut lines = vec![Line::from(spans)];
        if let Some(error) = state.search_error() {
            lines.push(Line::from(Span::styled(
                format!("⚠ {}", error),
                Style::default().fg(Color::Red),
            )));
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Search ")
            .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }

    /// Draw the candidate dropdown over whatever is below the search box
    pub fn draw_dropdown(&mut self, frame: &mut Frame, area: Rect, state: &ViewState) {
        if !state.dropdown_open || state.candidates.is_empty() || area.height < 3 {
            return;
        }

        frame.render_widget(Clear, area);

        let mut items = vec![ListItem::new(Line::from(Span::styled(
            format!("Showing users for \"{}\"", state.search_term),
            Style::default().fg(Color::DarkGray),
        )))];
        items.extend(state.candidates.iter().map(|candidate| {
            ListItem::new(Line::from(vec![
                Span::raw(format!("{} ", candidate.icon())),
                Span::styled(
                    candidate.login.clone(),
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("  {}", candidate.kind),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        }));

        // Row 0 is the caption
        self.dropdown_state.select(Some(state.highlighted + 1));

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .highlight_style(
                Style::default()
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("› ");

        frame.render_stateful_widget(list, area, &mut self.dropdown_state);
    }
}

impl Component for SearchComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let action = match key.code {
            KeyCode::Char('c') if ctrl => Some(Action::ForceQuit),
            KeyCode::Char('q') if ctrl => Some(Action::OpenQuitDialog),
            KeyCode::Char('u') if ctrl => Some(Action::ClearSearch),
            KeyCode::Char('r') if ctrl => Some(Action::RetryRepositories),
            KeyCode::Char('o') if ctrl => Some(Action::OpenProfile),
            KeyCode::Char(_) if ctrl => None,
            KeyCode::Char(c) => Some(Action::SearchInput(c)),
            KeyCode::Backspace => Some(Action::SearchBackspace),
            KeyCode::Esc => Some(Action::CloseDropdown),
            KeyCode::Enter => Some(Action::SelectCandidate),
            KeyCode::Down => Some(Action::NextCandidate),
            KeyCode::Up => Some(Action::PrevCandidate),
            KeyCode::PageDown => Some(Action::PageDown),
            KeyCode::PageUp => Some(Action::PageUp),
            KeyCode::F(1) => Some(Action::OpenHelp),
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, _frame: &mut Frame, _area: Rect) -> Result<()> {
        // Needs the view state, so the home screen calls draw_search_box/draw_dropdown
        Ok(())
    }
}
