// src/ui/mod.rs

use crate::app::App;
use ratatui::prelude::*;

mod layout;
mod widgets;

pub fn render(app: &mut App, frame: &mut Frame) {
    let layout = layout::create_layout(frame.area());

    widgets::input::render_inputs(frame, app, layout.ssid_input, layout.bssid_input);
    widgets::results::render_results(frame, app, layout.report);
    widgets::summary::render_summary(frame, app, layout.summary);
    widgets::footer::render_footer(frame, app, layout.footer);
}
