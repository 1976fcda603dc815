//! Keybinding definitions

use crossterm::event::KeyCode;

/// Keybinding action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Quit the application
    Quit,
    /// Enter command mode
    EnterCommandMode,
    /// Start typing into the entry form
    EnterInsertMode,
    /// Close overlays and clear the status line
    Cancel,
    /// Move up in list
    MoveUp,
    /// Move down in list
    MoveDown,
    /// Jump to first item
    MoveFirst,
    /// Jump to last item
    MoveLast,
    /// Mark the selected item purchased, or restore it
    TogglePurchased,
    /// Delete the selected item
    Delete,
    /// Toggle help
    ToggleHelp,
}

/// Get the action for a key in normal mode
pub fn normal_mode_action(code: KeyCode) -> Option<Action> {
    match code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Char(':') => Some(Action::EnterCommandMode),
        KeyCode::Char('i') | KeyCode::Char('a') => Some(Action::EnterInsertMode),
        KeyCode::Char('?') => Some(Action::ToggleHelp),
        KeyCode::Char('j') | KeyCode::Down => Some(Action::MoveDown),
        KeyCode::Char('k') | KeyCode::Up => Some(Action::MoveUp),
        KeyCode::Char('g') | KeyCode::Home => Some(Action::MoveFirst),
        KeyCode::Char('G') | KeyCode::End => Some(Action::MoveLast),
        KeyCode::Char(' ') | KeyCode::Char('x') | KeyCode::Enter => Some(Action::TogglePurchased),
        KeyCode::Char('d') | KeyCode::Delete => Some(Action::Delete),
        KeyCode::Esc => Some(Action::Cancel),
        _ => None,
    }
}
