//! Interactive full-screen UI
//!
//! - `core`: main loop tying the runtime, view and terminal together
//! - `input_handler`: key presses to view changes and screen actions
//! - `terminal_manager`: raw mode and alternate screen handling

mod core;
mod input_handler;
mod terminal_manager;

pub use core::{InteractiveOptions, run_interactive_ui};
