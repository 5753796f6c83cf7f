//! Main interactive loop: applies fetch results, draws frames and reacts to keys.

use std::io::{Stdout, Write};
use std::sync::Arc;
use std::time::Duration;

use chrono::Local;
use crossterm::event::{self, Event};

use super::input_handler::{KeyOutcome, handle_key_event};
use super::terminal_manager::{TerminalConfig, TerminalManager};
use crate::constants::ui::POLL_INTERVAL_MS;
use crate::data_fetcher::FootballDataProvider;
use crate::error::AppError;
use crate::screen::{Action, Runtime};
use crate::ui::render::{RenderOptions, pane_rows, render_screen};
use crate::ui::view::ViewState;

#[derive(Debug, Clone, Default)]
pub struct InteractiveOptions {
    pub disable_links: bool,
    pub debug_mode: bool,
}

/// Runs the full-screen browser until the user quits.
///
/// The terminal is restored even when the loop fails.
pub async fn run_interactive_ui(
    provider: Arc<dyn FootballDataProvider>,
    options: InteractiveOptions,
) -> Result<(), AppError> {
    let terminal = TerminalManager::with_config(TerminalConfig {
        debug_mode: options.debug_mode,
    });
    let mut stdout = terminal.setup_terminal()?;

    let result = event_loop(&terminal, &mut stdout, provider, &options).await;

    terminal.cleanup_terminal(stdout)?;
    result
}

async fn event_loop(
    terminal: &TerminalManager,
    stdout: &mut Stdout,
    provider: Arc<dyn FootballDataProvider>,
    options: &InteractiveOptions,
) -> Result<(), AppError> {
    let mut runtime = Runtime::new(provider);
    let mut view = ViewState::new();
    let mut updated_at: Option<String> = None;
    let mut spinner_frame = 0usize;
    let mut needs_render = true;

    runtime.dispatch(Action::Mount);
    tracing::info!("Interactive UI started");

    loop {
        let (width, height) = terminal.size();
        let visible_rows = pane_rows(height);

        if runtime.try_process_pending() > 0 {
            updated_at = Some(Local::now().format("%H:%M").to_string());
            view.sync(runtime.state(), visible_rows);
            needs_render = true;
        }

        if runtime.is_busy() {
            spinner_frame = spinner_frame.wrapping_add(1);
            needs_render = true;
        }

        if needs_render {
            let frame = render_screen(
                runtime.state(),
                &view,
                &RenderOptions {
                    width,
                    height,
                    links_enabled: !options.disable_links,
                    updated_at: updated_at.clone(),
                    spinner_frame,
                },
            );
            stdout.write_all(frame.as_bytes())?;
            stdout.flush()?;
            needs_render = false;
        }

        if !event::poll(Duration::from_millis(POLL_INTERVAL_MS))? {
            // Let spawned fetches make progress on this worker too
            tokio::task::yield_now().await;
            continue;
        }

        match event::read()? {
            Event::Key(key_event) => {
                match handle_key_event(&key_event, &mut view, runtime.state(), visible_rows) {
                    KeyOutcome::Quit => {
                        tracing::info!("Quit requested");
                        break;
                    }
                    KeyOutcome::Dispatch(action) => {
                        runtime.dispatch(action);
                        view.sync(runtime.state(), visible_rows);
                        needs_render = true;
                    }
                    KeyOutcome::Redraw => needs_render = true,
                    KeyOutcome::Ignored => {}
                }
            }
            Event::Resize(cols, rows) => {
                tracing::debug!("Terminal resized to {cols}x{rows}");
                view.sync(runtime.state(), pane_rows(rows));
                needs_render = true;
            }
            _ => {}
        }
    }

    Ok(())
}
