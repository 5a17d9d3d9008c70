// src/ui/widgets/input.rs
use ratatui::{prelude::*, widgets::{Block, Borders, Paragraph}};
use crate::app::{App, AppState, InputField};

/// Renders the two filter boxes. The focused one is highlighted and owns
/// the cursor while the user is editing.
pub fn render_inputs(frame: &mut Frame, app: &App, ssid_area: Rect, bssid_area: Rect) {
    render_box(frame, app, InputField::Ssid, &app.ssid_input, "any network", ssid_area);
    render_box(frame, app, InputField::Bssid, &app.bssid_input, "aa:bb:cc:dd:ee:ff", bssid_area);
}

fn render_box(frame: &mut Frame, app: &App, field: InputField, value: &str, hint: &str, area: Rect) {
    let focused = app.focus == field && matches!(app.state, AppState::Idle);
    let border_style = if focused { Style::default().fg(Color::Yellow) } else { Style::default() };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(format!("{} filter", field));

    let paragraph = if value.is_empty() {
        Paragraph::new(hint).style(Style::default().fg(Color::DarkGray))
    } else {
        Paragraph::new(value).style(Style::default().fg(Color::Yellow))
    };
    frame.render_widget(paragraph.block(block), area);

    if focused {
        frame.set_cursor_position((area.x + value.chars().count() as u16 + 1, area.y + 1));
    }
}
