use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Single-page converter layout.
pub struct AppLayout {
    pub form_area: Rect,
    pub result_area: Rect,
    /// Present only while the history side panel is open.
    pub history_area: Option<Rect>,
    pub status_area: Rect,
}

impl AppLayout {
    /// Layout:
    /// - Converter column: form (6 rows) above the result pane
    /// - History side panel: 40% width on the right, when open
    /// - Status bar: bottom row
    pub fn new(area: Rect, history_open: bool) -> Self {
        // Vertical split: main area + status bar
        let vertical_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),    // Main area
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        let (converter_area, history_area) = if history_open {
            let horizontal_chunks = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([
                    Constraint::Percentage(60), // Converter column
                    Constraint::Percentage(40), // History panel
                ])
                .split(vertical_chunks[0]);
            (horizontal_chunks[0], Some(horizontal_chunks[1]))
        } else {
            (vertical_chunks[0], None)
        };

        let converter_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(6), // Form: category, value, from, to
                Constraint::Min(3),    // Result pane
            ])
            .split(converter_area);

        Self {
            form_area: converter_chunks[0],
            result_area: converter_chunks[1],
            history_area,
            status_area: vertical_chunks[1],
        }
    }
}
