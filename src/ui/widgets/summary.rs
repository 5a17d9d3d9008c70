// src/ui/widgets/summary.rs

use crate::app::{App, AppState};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
    text::Line,
};

/// Renders the summary widget: how many APs were scanned, matched and are
/// joinable, plus the one that would be picked.
pub fn render_summary(frame: &mut Frame, app: &App, area: Rect) {
    let summary_container = Block::default().borders(Borders::ALL).title("Summary");

    // Nothing to summarize until a selection has run.
    let Some(report) = app.report.as_ref().filter(|_| matches!(app.state, AppState::Finished)) else {
        frame.render_widget(summary_container, area);
        return;
    };

    let mut lines = vec![
        Line::from(vec![Span::raw("Scanned:    "), Span::raw(app.summary.scanned.to_string())]),
        Line::from(vec![Span::raw("Matched:    "), Span::styled(app.summary.matched.to_string(), Style::default().fg(Color::Cyan))]),
        Line::from(vec![Span::raw("Compatible: "), Span::styled(app.summary.compatible.to_string(), Style::default().fg(Color::Green))]),
        Line::from(""),
        Line::from("RECOMMENDED".bold()),
    ];

    match report.best() {
        Some(ap) => {
            lines.push(Line::from(Span::styled(ap.ssid().to_string(), Style::default().fg(Color::Green))));
            lines.push(Line::from(ap.bssid().to_string()));
            lines.push(Line::from(format!("{} dBm", ap.rssi_dbm())));
        }
        None => lines.push(Line::from(Span::styled("No compatible network.", Style::default().fg(Color::Red)))),
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("Generated {}", report.generated_at.format("%H:%M:%S UTC")),
        Style::default().fg(Color::DarkGray),
    )));

    let paragraph = Paragraph::new(lines).block(summary_container).wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}
