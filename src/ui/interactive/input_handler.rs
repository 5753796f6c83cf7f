//! Keyboard input handling for the interactive UI.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::screen::{Action, ScreenState};
use crate::ui::view::ViewState;

/// What the main loop should do after a key press
#[derive(Debug, PartialEq)]
pub(super) enum KeyOutcome {
    Quit,
    /// Send this action to the runtime
    Dispatch(Action),
    /// Only the view changed
    Redraw,
    Ignored,
}

pub(super) fn handle_key_event(
    key_event: &KeyEvent,
    view: &mut ViewState,
    state: &ScreenState,
    visible_rows: usize,
) -> KeyOutcome {
    // Windows reports both press and release
    if key_event.kind != KeyEventKind::Press {
        return KeyOutcome::Ignored;
    }

    tracing::trace!("Key pressed: {:?}", key_event.code);
    match key_event.code {
        KeyCode::Char('q') => KeyOutcome::Quit,
        KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
            KeyOutcome::Quit
        }
        KeyCode::Tab | KeyCode::Right => {
            view.focus_next();
            KeyOutcome::Redraw
        }
        KeyCode::BackTab | KeyCode::Left => {
            view.focus_prev();
            KeyOutcome::Redraw
        }
        KeyCode::Up => {
            view.move_up(state, visible_rows);
            KeyOutcome::Redraw
        }
        KeyCode::Down => {
            view.move_down(state, visible_rows);
            KeyOutcome::Redraw
        }
        KeyCode::Enter => match view.activate(state) {
            Some(action) => {
                tracing::debug!("Selected row in {:?}: {:?}", view.focus, action);
                KeyOutcome::Dispatch(action)
            }
            None => KeyOutcome::Ignored,
        },
        KeyCode::Esc if state.current_alert().is_some() => {
            KeyOutcome::Dispatch(Action::DismissAlert)
        }
        _ => KeyOutcome::Ignored,
    }
}
