// src/main.rs

use clap::Parser;
use color_eyre::eyre::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::prelude::*;
use std::io::stdout;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{info, warn};

mod app;
mod cli;
mod config;
mod core;
mod logging;
mod ui;

use app::{App, AppState};
use cli::Cli;
use config::AuditConfig;
use crate::core::models::AuditResult;
use crate::core::report::{self, ExportFormat};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    color_eyre::install()?;
    logging::initialize_logging()?;
    let config = AuditConfig::from_env();
    info!(?config, "Configuration loaded.");

    match cli.url.as_deref() {
        Some(target) => run_headless(target, cli.format(), &config).await,
        None => run_tui(config).await,
    }
}

/// Audits a single URL and prints the report to stdout.
async fn run_headless(target: &str, format: ExportFormat, config: &AuditConfig) -> Result<()> {
    let result = crate::core::auditor::audit(target, config).await;
    match format {
        ExportFormat::Text => print!("{}", report::render_text(&result)),
        ExportFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
    }
    if result.error.is_some() {
        std::process::exit(1);
    }
    Ok(())
}

async fn run_tui(config: AuditConfig) -> Result<()> {
    // --- Setup ---
    stdout().execute(EnterAlternateScreen)?;
    stdout().execute(EnableMouseCapture)?;
    enable_raw_mode()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
    terminal.clear()?;

    let outcome = event_loop(&mut terminal, config).await;

    // --- Restore Terminal ---
    stdout().execute(LeaveAlternateScreen)?;
    stdout().execute(DisableMouseCapture)?;
    disable_raw_mode()?;
    outcome
}

async fn event_loop<B: Backend>(terminal: &mut Terminal<B>, config: AuditConfig) -> Result<()> {
    let mut app = App::new();
    let (tx, mut rx) = mpsc::channel::<AuditResult>(1);

    while !app.should_quit {
        terminal.draw(|frame| ui::render(&mut app, frame))?;

        if event::poll(Duration::from_millis(100))? {
            handle_events(&mut app, &tx, &config)?;
        }

        if let Ok(result) = rx.try_recv() {
            app.finish(result);
        }
        app.on_tick();
    }
    Ok(())
}

fn handle_events(app: &mut App, tx: &mpsc::Sender<AuditResult>, config: &AuditConfig) -> Result<()> {
    if let Event::Key(key) = event::read()? {
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }
        if app.show_disclaimer {
            match key.code {
                KeyCode::Enter => app.dismiss_disclaimer(),
                KeyCode::Esc => app.quit(),
                _ => {}
            }
            return Ok(());
        }
        match app.state {
            AppState::Idle => handle_idle_input(app, key.code, tx, config),
            AppState::Finished => handle_finished_input(app, key.code),
            AppState::Scanning => {
                if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
                    app.quit();
                }
            }
        }
    }
    Ok(())
}

/// Typing mode. `q` is a valid URL character here, so `Esc` quits.
fn handle_idle_input(app: &mut App, key_code: KeyCode, tx: &mpsc::Sender<AuditResult>, config: &AuditConfig) {
    match key_code {
        KeyCode::Esc => app.quit(),
        KeyCode::Char(c) => app.input.push(c),
        KeyCode::Backspace => {
            app.input.pop();
        }
        KeyCode::Enter => {
            let target = app.input.trim().to_string();
            if target.is_empty() {
                return;
            }
            app.start_scan();
            let tx = tx.clone();
            let config = config.clone();
            tokio::spawn(async move {
                let result = crate::core::auditor::audit(&target, &config).await;
                if tx.send(result).await.is_err() {
                    warn!("Audit finished after the UI closed.");
                }
            });
        }
        _ => {}
    }
}

fn handle_finished_input(app: &mut App, key_code: KeyCode) {
    match key_code {
        KeyCode::Char('q') | KeyCode::Esc => app.quit(),
        KeyCode::Char('n') => app.reset(),
        KeyCode::Char('e') => app.export(ExportFormat::Text),
        KeyCode::Char('j') => app.export(ExportFormat::Json),
        KeyCode::Char('l') => app.toggle_logs(),
        KeyCode::Up => app.scroll_up(),
        KeyCode::Down => app.scroll_down(),
        KeyCode::Left => app.scroll_logs_left(),
        KeyCode::Right => app.scroll_logs_right(),
        _ => {}
    }
}
