// src/app.rs

use std::path::PathBuf;

use ratatui::widgets::ScrollbarState;
use strum::Display;
use wlan_ap_select::config::Config;
use wlan_ap_select::{ScanFilter, ScanFilterError, ScanReport};

/// Which filter box receives keystrokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum InputField {
    #[strum(to_string = "SSID")]
    Ssid,
    #[strum(to_string = "BSSID")]
    Bssid,
}

pub enum AppState {
    Idle,
    Selecting,
    Finished,
}

#[derive(Debug, Default)]
pub struct SelectionSummary {
    pub scanned: usize,
    pub matched: usize,
    pub compatible: usize,
}

pub struct App {
    pub should_quit: bool,
    pub state: AppState,
    pub focus: InputField,
    pub ssid_input: String,
    pub bssid_input: String,
    pub scan_file: PathBuf,
    pub report: Option<ScanReport>,
    pub error: Option<String>,
    pub summary: SelectionSummary,
    pub scroll_offset: usize,
    pub report_scroll_state: ScrollbarState,
}

impl App {
    pub fn new(config: &Config) -> Self {
        Self {
            should_quit: false,
            state: AppState::Idle,
            focus: InputField::Ssid,
            ssid_input: config.ssid.clone(),
            bssid_input: config.bssid.clone(),
            scan_file: config.scan_file.clone(),
            report: None,
            error: None,
            summary: SelectionSummary::default(),
            scroll_offset: 0,
            report_scroll_state: ScrollbarState::default(),
        }
    }

    pub fn focused_input(&mut self) -> &mut String {
        match self.focus {
            InputField::Ssid => &mut self.ssid_input,
            InputField::Bssid => &mut self.bssid_input,
        }
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            InputField::Ssid => InputField::Bssid,
            InputField::Bssid => InputField::Ssid,
        };
    }

    /// Builds the filter from the input boxes. A bad BSSID is reported to
    /// the user instead of silently matching nothing.
    pub fn build_filter(&self) -> Result<ScanFilter, ScanFilterError> {
        ScanFilter::try_new(self.ssid_input.trim(), self.bssid_input.trim())
    }

    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
        self.report_scroll_state = self.report_scroll_state.position(self.scroll_offset);
    }

    pub fn scroll_down(&mut self) {
        let rows = self.report.as_ref().map_or(0, |r| r.access_points.len());
        if self.scroll_offset + 1 < rows {
            self.scroll_offset += 1;
        }
        self.report_scroll_state = self.report_scroll_state.position(self.scroll_offset);
    }

    pub fn finish(&mut self, outcome: Result<ScanReport, String>) {
        match outcome {
            Ok(report) => {
                self.summary = SelectionSummary {
                    scanned: report.scanned,
                    matched: report.access_points.len(),
                    compatible: report.compatible().count(),
                };
                self.report_scroll_state = ScrollbarState::new(report.access_points.len());
                self.report = Some(report);
                self.error = None;
            }
            Err(e) => {
                self.report = None;
                self.summary = SelectionSummary::default();
                self.error = Some(e);
            }
        }
        self.scroll_offset = 0;
        self.state = AppState::Finished;
    }

    pub fn quit(&mut self) { self.should_quit = true; }

    pub fn reset(&mut self) {
        self.state = AppState::Idle;
        self.report = None;
        self.error = None;
        self.summary = SelectionSummary::default();
        self.scroll_offset = 0;
        self.report_scroll_state = ScrollbarState::default();
    }
}
