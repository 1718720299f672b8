//! wxdash - Current weather conditions in your terminal
//!
//! A terminal UI application that looks up current weather for a city and
//! renders it as a dashboard of cards.

use std::io;
use std::panic;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;

use wxdash::app::{App, FetchOutcome};
use wxdash::cli::{Cli, StartupConfig};
use wxdash::data::WeatherClient;
use wxdash::ui;

/// Sets up a panic hook that restores the terminal before printing the panic message.
/// This ensures the terminal is usable even if the application panics.
fn setup_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        // Attempt to restore the terminal
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        // Call the original panic hook
        original_hook(panic_info);
    }));
}

/// Renders the UI based on the current application state
fn render_ui(frame: &mut ratatui::Frame, app: &App) {
    match app.snapshot() {
        Some(snapshot) => {
            ui::render_dashboard(frame, app, snapshot);
        }
        None => {
            ui::render_search_screen(frame, app);
        }
    }

    if app.show_help {
        ui::render_help_overlay(frame);
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = StartupConfig::from_cli(&cli);

    // Set up panic hook to restore terminal on crash
    setup_panic_hook();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let client = WeatherClient::new(config.api_url.clone());
    let (outcome_tx, mut outcome_rx) = mpsc::channel::<FetchOutcome>(8);

    // Create app instance and trigger the initial default-city lookup
    let mut app = App::new();
    app.fetch_city(&config.default_city);

    // Main event loop
    loop {
        // Dispatch any lookup the app has queued
        if let Some(request) = app.take_fetch_request() {
            let client = client.clone();
            let tx = outcome_tx.clone();
            tokio::spawn(async move {
                let result = client.fetch_current(&request.city).await;
                let _ = tx
                    .send(FetchOutcome {
                        seq: request.seq,
                        result,
                    })
                    .await;
            });
        }

        // Drain completed lookups without blocking
        while let Ok(outcome) = outcome_rx.try_recv() {
            app.apply_outcome(outcome);
        }

        // Render UI
        terminal.draw(|f| render_ui(f, &app))?;

        // Poll for keyboard events with 100ms timeout
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
        }

        // Check if we should quit
        if app.should_quit {
            break;
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

    Ok(())
}
