//! Keyboard handling for the game screen.
//!
//! Maps terminal key events to game actions and dispatches them to the
//! session.

use crate::game::Session;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use rand::Rng;

/// UI-agnostic input actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameInput {
    /// Space, Up or Enter: flap while running, restart when over.
    Primary,
    /// Esc, `q` or Ctrl+C.
    Quit,
    /// Any other key.
    Other,
}

/// Result of handling a game input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    /// Continue the game loop normally.
    Continue,
    /// Leave the game.
    Quit,
}

impl GameInput {
    pub fn from_key(key: KeyEvent) -> Self {
        // Release/repeat events are reported on some platforms; only presses flap.
        if key.kind != KeyEventKind::Press {
            return Self::Other;
        }
        match key.code {
            KeyCode::Char(' ') | KeyCode::Up | KeyCode::Enter => Self::Primary,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Self::Quit,
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => Self::Quit,
            _ => Self::Other,
        }
    }
}

/// Apply one key press to the session.
pub fn handle_key<R: Rng>(session: &mut Session<R>, key: KeyEvent) -> InputResult {
    match GameInput::from_key(key) {
        GameInput::Primary => {
            // Session::restart logs the restart itself.
            session.primary_action();
            InputResult::Continue
        }
        GameInput::Quit => InputResult::Quit,
        GameInput::Other => InputResult::Continue,
    }
}
