use anyhow::{Context, Result};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, EventStream},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::prelude::*;
use std::io;
use std::time::Instant;
use stopwatches::app::event::AppEvent;
use stopwatches::app::handler;
use stopwatches::app::state::AppState;
use stopwatches::{config, logging, ui};
use tokio::sync::mpsc;

#[tokio::main]
async fn main() -> Result<()> {
    // Install panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original_hook(info);
    }));

    // Load config
    let cfg = config::load_config()?;
    let log_guard = logging::init(&cfg.logging)?;
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting");
    if let Some(guard) = &log_guard {
        tracing::debug!(path = %guard.path.display(), "logging to file");
    }

    let state = AppState::new(cfg).context("Invalid key bindings")?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, state).await;

    // Restore terminal
    restore_terminal()?;

    if let Err(e) = result {
        tracing::error!("{:#}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    tracing::info!("exiting");
    Ok(())
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)?;
    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut state: AppState,
) -> Result<()> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<AppEvent>();

    // Spawn terminal input task
    let term_tx = event_tx.clone();
    tokio::spawn(async move {
        let mut reader = EventStream::new();
        loop {
            match reader.next().await {
                Some(Ok(event)) => {
                    if term_tx.send(AppEvent::Terminal(event)).is_err() {
                        break;
                    }
                }
                Some(Err(e)) => {
                    tracing::warn!("terminal input error: {}", e);
                    break;
                }
                None => break,
            }
        }
    });

    // Spawn tick task (60 FPS by default)
    let tick_tx = event_tx.clone();
    let tick_rate = state.config.refresh_interval();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(tick_rate);
        interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
        loop {
            interval.tick().await;
            if tick_tx.send(AppEvent::Tick).is_err() {
                break;
            }
        }
    });
    drop(event_tx);

    let size = terminal.size()?;
    state.resize(size.width, size.height);

    // Initial render
    terminal.draw(|f| ui::render(f, &state, Instant::now()))?;

    // Main event loop
    loop {
        let event = event_rx.recv().await;
        let Some(event) = event else { break };

        let actions = handler::handle_event(&mut state, event);
        for action in actions {
            state.apply(action, Instant::now());
        }

        if state.should_quit {
            break;
        }

        // Conditional render (only if dirty)
        if state.dirty {
            terminal.draw(|f| ui::render(f, &state, Instant::now()))?;
            state.dirty = false;
        }
    }

    Ok(())
}
