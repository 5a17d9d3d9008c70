// src/ui/layout.rs

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Defines the areas of the application's user interface.
pub struct AppLayout {
    pub ssid_input: Rect,
    pub bssid_input: Rect,
    pub report: Rect,
    pub summary: Rect,
    pub footer: Rect,
}

/// Splits the frame into the filter row, the content area and the footer.
///
/// The filter row holds the SSID and BSSID boxes side by side; the content
/// area puts the ranked AP table left of the summary.
pub fn create_layout(frame_size: Rect) -> AppLayout {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame_size);

    let input_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(main_chunks[0]);

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(72), Constraint::Percentage(28)])
        .split(main_chunks[1]);

    AppLayout {
        ssid_input: input_chunks[0],
        bssid_input: input_chunks[1],
        report: content_chunks[0],
        summary: content_chunks[1],
        footer: main_chunks[2],
    }
}
