//! Home screen - header, search, profile or empty state, help bar
//!
//! Stateless apart from the components it is handed; everything it shows
//! comes from the view state.

use crate::components::layout::{calculate_main_layout, dropdown_area};
use crate::components::{ProfileComponent, SearchComponent};
use crate::model::ViewState;
use anyhow::Result;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Spinner frame for the given tick count
pub fn spinner_frame(ticks: u64) -> &'static str {
    SPINNER_FRAMES[(ticks as usize) % SPINNER_FRAMES.len()]
}

/// Context needed for rendering the home screen
pub struct HomeRenderContext<'a> {
    pub state: &'a ViewState,
    pub spinner: &'a str,
    pub status_message: Option<&'a str>,
}

/// Draw the home screen
pub fn draw_home_screen(
    frame: &mut Frame,
    area: Rect,
    search: &mut SearchComponent,
    profile: &mut ProfileComponent,
    ctx: &HomeRenderContext,
) -> Result<()> {
    let state = ctx.state;
    let layout = calculate_main_layout(area, state.search_error().is_some());

    render_header(frame, layout.header);
    search.draw_search_box(frame, layout.search, state, ctx.spinner);

    match state.selected_candidate {
        Some(ref candidate) => {
            profile.draw_with_state(frame, layout.body, candidate, state, ctx.spinner)
        }
        None if state.search_term.is_empty() => render_empty_state(frame, layout.body),
        None => {}
    }

    render_help_bar(frame, layout.help, state, ctx.status_message);

    // Dropdown goes last so it covers the profile
    let dropdown = dropdown_area(layout.search, state.candidates.len(), layout.body);
    search.draw_dropdown(frame, dropdown, state);

    Ok(())
}

fn render_header(frame: &mut Frame, area: Rect) {
    let header = vec![
        Line::from(Span::styled(
            "GitHub Explorer",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Discover GitHub users and explore their repositories",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(Paragraph::new(header).alignment(Alignment::Center), area);
}

fn render_empty_state(frame: &mut Frame, area: Rect) {
    if area.height < 4 {
        return;
    }
    let top = area.y + area.height / 3;
    let content = vec![
        Line::from(Span::styled("🔎", Style::default().fg(Color::DarkGray))),
        Line::from(""),
        Line::from(Span::styled(
            "Start exploring GitHub",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Search for a username to discover repositories and user profiles.",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let height = (content.len() as u16).min(area.y + area.height - top);
    frame.render_widget(
        Paragraph::new(content).alignment(Alignment::Center),
        Rect::new(area.x, top, area.width, height),
    );
}

fn render_help_bar(frame: &mut Frame, area: Rect, state: &ViewState, status: Option<&str>) {
    if let Some(status) = status {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                format!(" {} ", status),
                Style::default().fg(Color::Yellow),
            ))),
            area,
        );
        return;
    }

    let key = |label: &'static str, color: Color| {
        Span::styled(
            label,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )
    };

    let mut spans = if state.dropdown_open {
        vec![
            key(" ↑↓ ", Color::Cyan),
            Span::raw("Highlight  "),
            key(" Enter ", Color::Green),
            Span::raw("Select  "),
            key(" Esc ", Color::Yellow),
            Span::raw("Close  "),
        ]
    } else {
        vec![
            key(" ↑↓ ", Color::Cyan),
            Span::raw("Scroll  "),
            key(" ^O ", Color::Green),
            Span::raw("Open Profile  "),
        ]
    };
    if state.repositories_error().is_some() {
        spans.push(key(" ^R ", Color::Green));
        spans.push(Span::raw("Retry  "));
    }
    spans.push(key(" F1 ", Color::Cyan));
    spans.push(Span::raw("Help  "));
    spans.push(key(" ^Q ", Color::Yellow));
    spans.push(Span::raw("Quit"));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
