// src/ui/widgets/results.rs

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, Paragraph, Row, Scrollbar, ScrollbarOrientation, Table, TableState, Wrap},
};
use wlan_ap_select::{AccessPoint, describe_security};

use crate::app::{App, AppState};

/// Renders the ranked AP table, or a status message when there is nothing
/// to rank yet.
pub fn render_results(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!("Access Points ({})", app.scan_file.display()));

    let message = match app.state {
        AppState::Idle => Some(Paragraph::new("Set the filters and press Enter.").alignment(Alignment::Center)),
        AppState::Selecting => Some(
            Paragraph::new("Ranking access points...")
                .style(Style::default().fg(Color::Cyan))
                .alignment(Alignment::Center),
        ),
        AppState::Finished => match (&app.error, &app.report) {
            (Some(e), _) => Some(
                Paragraph::new(e.as_str())
                    .style(Style::default().fg(Color::Red))
                    .wrap(Wrap { trim: true }),
            ),
            (None, Some(report)) if report.access_points.is_empty() => {
                let text = report
                    .notice
                    .map_or_else(|| "The scan batch is empty.".to_string(), |n| n.to_string());
                Some(Paragraph::new(text).style(Style::default().fg(Color::Yellow)).alignment(Alignment::Center))
            }
            _ => None,
        },
    };
    if let Some(paragraph) = message {
        frame.render_widget(paragraph.block(block), area);
        return;
    }

    let Some(report) = &app.report else { return };

    let header = Row::new(["#", "BSSID", "SSID", "RSSI", "Ch", "Security", "OK"])
        .style(Style::default().bold().underlined());
    let rows: Vec<Row> = report
        .access_points
        .iter()
        .enumerate()
        .map(|(rank, ap)| build_row(rank + 1, ap))
        .collect();
    let widths = [
        Constraint::Length(3),
        Constraint::Length(17),
        Constraint::Min(10),
        Constraint::Length(8),
        Constraint::Length(4),
        Constraint::Length(20),
        Constraint::Length(3),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .row_highlight_style(Style::new().bg(Color::DarkGray).add_modifier(Modifier::BOLD));
    let mut state = TableState::default().with_selected(Some(app.scroll_offset));
    frame.render_stateful_widget(table, area, &mut state);

    let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight);
    frame.render_stateful_widget(scrollbar, area, &mut app.report_scroll_state);
}

fn build_row(rank: usize, ap: &AccessPoint) -> Row<'static> {
    let (mark, mark_style) = if ap.is_compatible() {
        ("✓", Style::default().fg(Color::Green))
    } else {
        ("✗", Style::default().fg(Color::Red))
    };
    let ssid = if ap.ssid().is_empty() { "<hidden>".to_string() } else { ap.ssid().to_string() };

    Row::new(vec![
        Cell::from(rank.to_string()),
        Cell::from(ap.bssid().to_string()),
        Cell::from(ssid),
        Cell::from(format!("{} dBm", ap.rssi_dbm())),
        Cell::from(ap.bss_desc().channel.to_string()),
        Cell::from(describe_security(ap.bss_desc().security_params())),
        Cell::from(mark).style(mark_style),
    ])
}
