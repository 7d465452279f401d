//! Profile component - selected user and repository cards
//!
//! Owns the scroll position of the repository list.

use crate::action::Action;
use crate::component::Component;
use crate::model::{format_date, Candidate, Repository, ViewState};
use anyhow::Result;
use ratatui::{
    layout::{Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const PAGE_SIZE: usize = 10;

/// Profile panel for the selected candidate
#[derive(Default)]
pub struct ProfileComponent {
    pub scroll_offset: usize,
}

impl ProfileComponent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Jump back to the top, used when a new candidate is selected
    pub fn reset_scroll(&mut self) {
        self.scroll_offset = 0;
    }

    /// Draw the panel for `candidate`
    pub fn draw_with_state(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        candidate: &Candidate,
        state: &ViewState,
        spinner: &str,
    ) {
        let inner_width = area.width.saturating_sub(2) as usize;
        let lines = build_profile_lines(candidate, state, spinner, inner_width);
        let total = lines.len();
        let visible_height = area.height.saturating_sub(2) as usize;

        let max_scroll = total.saturating_sub(visible_height);
        if self.scroll_offset > max_scroll {
            self.scroll_offset = max_scroll;
        }

        let paragraph = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray))
                    .title(" Profile ")
                    .title_style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD)),
            )
            .scroll((self.scroll_offset as u16, 0));

        frame.render_widget(paragraph, area);

        if total > visible_height {
            let mut scrollbar_state = ScrollbarState::new(max_scroll).position(self.scroll_offset);
            frame.render_stateful_widget(
                Scrollbar::new(ScrollbarOrientation::VerticalRight)
                    .begin_symbol(Some("↑"))
                    .end_symbol(Some("↓")),
                area.inner(Margin {
                    vertical: 1,
                    horizontal: 0,
                }),
                &mut scrollbar_state,
            );
        }
    }
}

impl Component for ProfileComponent {
    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::ScrollUp => {
                self.scroll_offset = self.scroll_offset.saturating_sub(1);
            }
            Action::ScrollDown => {
                self.scroll_offset = self.scroll_offset.saturating_add(1);
            }
            Action::PageUp => {
                self.scroll_offset = self.scroll_offset.saturating_sub(PAGE_SIZE);
            }
            Action::PageDown => {
                self.scroll_offset = self.scroll_offset.saturating_add(PAGE_SIZE);
            }
            _ => {}
        }
        Ok(None)
    }

    fn draw(&mut self, _frame: &mut Frame, _area: Rect) -> Result<()> {
        // This needs the view state, so we use draw_with_state
        Ok(())
    }
}

/// Build every line of the panel; scrolling happens on the result
fn build_profile_lines(
    candidate: &Candidate,
    state: &ViewState,
    spinner: &str,
    width: usize,
) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(vec![
            Span::raw(format!("{} ", candidate.icon())),
            Span::styled(
                candidate.login.clone(),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {}", candidate.kind),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Line::from(vec![
            Span::styled("View Profile ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                candidate.html_url.clone(),
                Style::default().fg(Color::Blue).add_modifier(Modifier::UNDERLINED),
            ),
        ]),
        Line::from(""),
    ];

    let mut title = vec![Span::styled(
        repositories_title(state.repositories.len()),
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
    )];
    if state.repositories_loading() {
        title.push(Span::styled(
            format!("  {} loading", spinner),
            Style::default().fg(Color::Cyan),
        ));
    }
    lines.push(Line::from(title));
    lines.push(Line::from(Span::styled(
        "─".repeat(width.min(60)),
        Style::default().fg(Color::DarkGray),
    )));

    if let Some(error) = state.repositories_error() {
        lines.push(Line::from(Span::styled(
            format!("⚠ {}", error),
            Style::default().fg(Color::Red),
        )));
        lines.push(Line::from(Span::styled(
            "Press Ctrl+R to retry",
            Style::default().fg(Color::DarkGray),
        )));
        lines.push(Line::from(""));
    }

    for repository in &state.repositories {
        lines.extend(repository_card(repository, width));
    }

    if !state.repositories_loading()
        && state.repositories.is_empty()
        && state.repositories_error().is_none()
    {
        lines.push(Line::from(Span::styled(
            "No repositories found for this user.",
            Style::default().fg(Color::DarkGray),
        )));
    }

    lines
}

fn repositories_title(count: usize) -> String {
    if count > 0 {
        format!("Repositories ({})", count)
    } else {
        "Repositories".to_string()
    }
}

/// Lines for one repository card, followed by a blank separator
fn repository_card(repository: &Repository, width: usize) -> Vec<Line<'static>> {
    let mut name_line = vec![Span::styled(
        repository.name.clone(),
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    )];
    if let Some(ref language) = repository.language {
        name_line.push(Span::raw("  "));
        name_line.push(Span::styled(
            format!(" {} ", language),
            Style::default().fg(Color::Blue).bg(Color::Rgb(219, 234, 254)),
        ));
    }
    if repository.private {
        name_line.push(Span::raw("  "));
        name_line.push(Span::styled(
            " Private ",
            Style::default().fg(Color::Gray).bg(Color::Rgb(60, 60, 60)),
        ));
    }

    let mut lines = vec![Line::from(name_line)];

    if let Some(ref description) = repository.description {
        lines.push(Line::from(Span::styled(
            format!("  {}", truncate(description, width.saturating_sub(2))),
            Style::default().fg(Color::Gray),
        )));
    }

    let stat = Style::default().fg(Color::DarkGray);
    lines.push(Line::from(vec![
        Span::styled(format!("  ★ {}", repository.stargazers_count), stat),
        Span::styled(format!("   ⑂ {}", repository.forks_count), stat),
        Span::styled(format!("   ◉ {}", repository.watchers_count), stat),
        Span::styled(
            format!("   Updated {}", format_date(&repository.updated_at)),
            stat,
        ),
    ]));
    lines.push(Line::from(""));

    lines
}

/// Cut `text` to at most `max_width` terminal columns, marking the cut with `…`
fn truncate(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    let mut result = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > max_width {
            break;
        }
        used += w;
        result.push(c);
    }
    result.push('…');
    result
}
