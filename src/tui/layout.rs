use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Chat screen layout, top to bottom: header, search bar, body (history
/// or results overlay), status bar.
pub struct ChatLayout {
    pub header_area: Rect,
    pub search_area: Rect,
    pub body_area: Rect,
    pub status_area: Rect,
}

impl ChatLayout {
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Header
                Constraint::Length(3), // Search bar (bordered)
                Constraint::Min(3),    // Body
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        Self {
            header_area: chunks[0],
            search_area: chunks[1],
            body_area: chunks[2],
            status_area: chunks[3],
        }
    }
}

/// Chat list layout: title row, the list itself, status bar.
pub struct ListLayout {
    pub title_area: Rect,
    pub list_area: Rect,
    pub status_area: Rect,
}

impl ListLayout {
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(3),
                Constraint::Length(1),
            ])
            .split(area);

        Self { title_area: chunks[0], list_area: chunks[1], status_area: chunks[2] }
    }
}
