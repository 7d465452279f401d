//! Layout calculations for the UI

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Main screen layout areas
pub struct MainLayout {
    pub header: Rect,
    pub search: Rect,
    pub body: Rect,
    pub help: Rect,
}

/// Calculate centered popup area
pub fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let popup_x = area.x + (area.width.saturating_sub(width)) / 2;
    let popup_y = area.y + (area.height.saturating_sub(height)) / 2;

    Rect::new(
        popup_x,
        popup_y,
        width.min(area.width),
        height.min(area.height),
    )
}

/// Calculate main screen layout
///
/// Header, search box, body (profile panel or empty state) and help bar,
/// top to bottom. The body is capped to a readable width on wide terminals.
/// The search box grows by one row while it shows an error.
pub fn calculate_main_layout(area: Rect, show_search_error: bool) -> MainLayout {
    let column = centered_column(area, 120);
    let search_height = if show_search_error { 4 } else { 3 };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(search_height),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(column);

    MainLayout {
        header: chunks[0],
        search: chunks[1],
        body: chunks[2],
        help: chunks[3],
    }
}

/// Area for the candidate dropdown, hanging below the search box
///
/// `rows` is the number of candidates; one extra row holds the
/// "Showing users for" caption, plus two for borders.
pub fn dropdown_area(search: Rect, rows: usize, bounds: Rect) -> Rect {
    let wanted = rows as u16 + 3;
    let top = search.y + search.height;
    let available = (bounds.y + bounds.height).saturating_sub(top);
    Rect::new(search.x, top, search.width, wanted.min(available))
}

fn centered_column(area: Rect, max_width: u16) -> Rect {
    if area.width <= max_width {
        return area;
    }
    let x = area.x + (area.width - max_width) / 2;
    Rect::new(x, area.y, max_width, area.height)
}
