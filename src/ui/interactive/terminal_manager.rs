//! Terminal setup and cleanup for the interactive UI
//!
//! Raw mode and the alternate screen are skipped in debug mode so log output
//! and panics stay readable.

use crate::error::AppError;
use crossterm::{
    cursor::{Hide, Show},
    execute,
    terminal::{
        EnterAlternateScreen, LeaveAlternateScreen, SetTitle, disable_raw_mode, enable_raw_mode,
        size,
    },
};
use std::io::{Stdout, stdout};

const WINDOW_TITLE: &str = "Football";

/// Fallback size when the terminal cannot report one
const DEFAULT_SIZE: (u16, u16) = (80, 24);

#[derive(Debug, Clone, Default)]
pub struct TerminalConfig {
    pub debug_mode: bool,
}

pub struct TerminalManager {
    config: TerminalConfig,
}

impl TerminalManager {
    pub fn with_config(config: TerminalConfig) -> Self {
        Self { config }
    }

    /// Enters raw mode and the alternate screen, returning stdout for drawing.
    pub fn setup_terminal(&self) -> Result<Stdout, AppError> {
        let mut stdout = stdout();
        execute!(stdout, SetTitle(WINDOW_TITLE))?;

        if !self.config.debug_mode {
            enable_raw_mode()?;
            execute!(stdout, EnterAlternateScreen, Hide)?;
        }

        Ok(stdout)
    }

    /// Restores the terminal to the state it had before `setup_terminal`.
    pub fn cleanup_terminal(&self, mut stdout: Stdout) -> Result<(), AppError> {
        if !self.config.debug_mode {
            execute!(stdout, Show, LeaveAlternateScreen)?;
            disable_raw_mode()?;
        }
        Ok(())
    }

    /// Current terminal size as (columns, rows).
    pub fn size(&self) -> (u16, u16) {
        size().unwrap_or(DEFAULT_SIZE)
    }
}
