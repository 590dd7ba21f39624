use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::AppMode;

/// What a key press asks the main loop to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputAction {
    /// Move the row cursor down.
    CursorDown,
    /// Move the row cursor up.
    CursorUp,
    /// Jump cursor to top (gg).
    CursorTop,
    /// Jump cursor to bottom (G).
    CursorBottom,
    /// Preview the folder under the cursor.
    OpenSelected,
    /// Preview the parent folder.
    GoParent,
    /// Re-request the current folder.
    Refresh,
    /// Open the status-bar menu.
    OpenMenu,
    /// Move down in the menu.
    MenuDown,
    /// Move up in the menu.
    MenuUp,
    /// Run the highlighted menu item.
    MenuActivate,
    /// Close the menu or dialog, back to Normal.
    Close,
    Quit,
    /// No action for this key.
    None,
}

/// Tracks state for multi-key sequences like "gg".
#[derive(Debug, Default)]
pub struct InputState {
    pending_g: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self { pending_g: false }
    }
}

/// Maps a key event to an InputAction based on the current mode.
/// Returns the action and a new InputState (immutable pattern).
pub fn handle_key(key: KeyEvent, mode: &AppMode, state: &InputState) -> (InputAction, InputState) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return (InputAction::Quit, InputState::new());
    }

    match mode {
        AppMode::Normal => handle_normal_key(key, state),
        AppMode::Menu { .. } => handle_menu_key(key),
        AppMode::About => handle_about_key(key),
    }
}

fn handle_normal_key(key: KeyEvent, state: &InputState) -> (InputAction, InputState) {
    if state.pending_g {
        let new_state = InputState { pending_g: false };
        return match key.code {
            KeyCode::Char('g') => (InputAction::CursorTop, new_state),
            _ => (InputAction::None, new_state),
        };
    }

    let new_state = InputState::new();
    let action = match key.code {
        KeyCode::Char('g') => return (InputAction::None, InputState { pending_g: true }),
        KeyCode::Char('j') | KeyCode::Down => InputAction::CursorDown,
        KeyCode::Char('k') | KeyCode::Up => InputAction::CursorUp,
        KeyCode::Char('G') | KeyCode::End => InputAction::CursorBottom,
        KeyCode::Home => InputAction::CursorTop,
        KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('l') => InputAction::OpenSelected,
        KeyCode::Backspace | KeyCode::Char('h') | KeyCode::Left => InputAction::GoParent,
        KeyCode::Char('r') => InputAction::Refresh,
        KeyCode::F(10) | KeyCode::Char('m') => InputAction::OpenMenu,
        KeyCode::Char('q') => InputAction::Quit,
        _ => InputAction::None,
    };
    (action, new_state)
}

fn handle_menu_key(key: KeyEvent) -> (InputAction, InputState) {
    let new_state = InputState::new();
    let action = match key.code {
        KeyCode::Esc | KeyCode::F(10) | KeyCode::Char('m') => InputAction::Close,
        KeyCode::Char('j') | KeyCode::Down => InputAction::MenuDown,
        KeyCode::Char('k') | KeyCode::Up => InputAction::MenuUp,
        KeyCode::Enter | KeyCode::Char(' ') => InputAction::MenuActivate,
        KeyCode::Char('q') => InputAction::Quit,
        _ => InputAction::None,
    };
    (action, new_state)
}

fn handle_about_key(key: KeyEvent) -> (InputAction, InputState) {
    let new_state = InputState::new();
    let action = match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('q') => {
            InputAction::Close
        }
        _ => InputAction::None,
    };
    (action, new_state)
}
