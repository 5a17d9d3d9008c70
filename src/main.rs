// src/main.rs

use color_eyre::eyre::{Result, WrapErr};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::prelude::*;
use std::io::stdout;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{error, info};

use wlan_ap_select::config::Config;
use wlan_ap_select::logging::initialize_logging;
use wlan_ap_select::{
    ScanReport, TracingDiagnostics, Wpa2PersonalEvaluator, collect_scan_results, load_scan_confirm,
};

mod app;
mod ui;

use app::{App, AppState};

type Outcome = Result<ScanReport, String>;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    initialize_logging().wrap_err("Failed to initialize logging")?;
    let config = Config::load()?;
    info!(scan_file = %config.scan_file.display(), "Starting wlan-ap-select.");

    // --- Setup ---
    stdout().execute(EnterAlternateScreen)?;
    enable_raw_mode()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
    terminal.clear()?;

    let mut app = App::new(&config);
    let (tx, mut rx) = mpsc::channel::<Outcome>(1);

    let result = run(&mut terminal, &mut app, &tx, &mut rx).await;

    // --- Restore Terminal ---
    stdout().execute(LeaveAlternateScreen)?;
    disable_raw_mode()?;
    result
}

async fn run<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    tx: &mpsc::Sender<Outcome>,
    rx: &mut mpsc::Receiver<Outcome>,
) -> Result<()> {
    while !app.should_quit {
        terminal.draw(|frame| ui::render(app, frame))?;

        if event::poll(Duration::from_millis(100))? {
            handle_events(app, tx)?;
        }

        if let Ok(outcome) = rx.try_recv() {
            app.finish(outcome);
        }
    }
    Ok(())
}

fn handle_events(app: &mut App, tx: &mpsc::Sender<Outcome>) -> Result<()> {
    if let Event::Key(key) = event::read()? {
        if key.kind == KeyEventKind::Press {
            match app.state {
                AppState::Idle => handle_idle_input(app, key.code, tx),
                AppState::Finished => handle_finished_input(app, key.code),
                AppState::Selecting => {
                    if key.code == KeyCode::Char('q') { app.quit(); }
                }
            }
        }
    }
    Ok(())
}

/// Editing the filters.
fn handle_idle_input(app: &mut App, key_code: KeyCode, tx: &mpsc::Sender<Outcome>) {
    match key_code {
        KeyCode::Esc => app.quit(),
        KeyCode::Tab => app.toggle_focus(),
        KeyCode::Char(c) => app.focused_input().push(c),
        KeyCode::Backspace => { app.focused_input().pop(); },
        KeyCode::Enter => start_selection(app, tx),
        _ => {}
    }
}

/// Browsing the ranked list.
fn handle_finished_input(app: &mut App, key_code: KeyCode) {
    match key_code {
        KeyCode::Char('q') => app.quit(),
        KeyCode::Char('n') => app.reset(),
        KeyCode::Up => app.scroll_up(),
        KeyCode::Down => app.scroll_down(),
        _ => {}
    }
}

fn start_selection(app: &mut App, tx: &mpsc::Sender<Outcome>) {
    let filter = match app.build_filter() {
        Ok(filter) => filter,
        Err(e) => {
            app.finish(Err(e.to_string()));
            return;
        }
    };
    app.state = AppState::Selecting;

    let tx_clone = tx.clone();
    let scan_file = app.scan_file.clone();
    tokio::spawn(async move {
        let outcome = tokio::task::spawn_blocking(move || -> Outcome {
            let batch = load_scan_confirm(&scan_file).map_err(|e| {
                error!(error = %e, "Could not load scan batch.");
                e.to_string()
            })?;
            Ok(collect_scan_results(&batch, &filter, &Wpa2PersonalEvaluator, &TracingDiagnostics))
        })
        .await
        .unwrap_or_else(|e| {
            error!(panic = %e, "Selection task panicked!");
            Err(format!("Task panicked: {}", e))
        });
        let _ = tx_clone.send(outcome).await;
    });
}
