//! Keyboard input handling.
//!
//! Maps terminal key events to [`App`] actions.  Adding a new keybinding is
//! a single match arm in [`handle_key_event`]; remember to update the help
//! text in [`crate::ui`] as well.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use crate::app::App;
use crate::poll::Refresh;

/// Process a single key event, updating app state accordingly.
///
/// Only reacts to key-press events (ignoring release / repeat) so that each
/// physical keypress triggers exactly one action.
pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.quit = true,
        KeyCode::Left | KeyCode::Char('h') => app.previous(),
        KeyCode::Right | KeyCode::Char('l') => app.next(),
        KeyCode::Char('r') => app.request_refresh(Refresh::Cached),
        KeyCode::Char('R') => app.request_refresh(Refresh::Force),
        _ => {}
    }
}
