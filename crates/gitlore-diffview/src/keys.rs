//! Keyboard bindings for the viewer.

use gitlore_diff_viewer::ViewerAction;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a key press asks the application to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Viewer(ViewerAction),
    Quit,
}

/// Translate a key press into a command; unbound keys yield `None`.
pub fn command_for(key: KeyEvent) -> Option<Command> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    let action = match key.code {
        KeyCode::Char('c') if ctrl => return Some(Command::Quit),
        KeyCode::Char('q') | KeyCode::Esc => return Some(Command::Quit),
        KeyCode::Char('d') if ctrl => ViewerAction::ScrollHalfDown,
        KeyCode::Char('u') if ctrl => ViewerAction::ScrollHalfUp,
        KeyCode::Char('j') | KeyCode::Down => ViewerAction::ScrollDown,
        KeyCode::Char('k') | KeyCode::Up => ViewerAction::ScrollUp,
        KeyCode::Char('d') => ViewerAction::ScrollHalfDown,
        KeyCode::Char('u') => ViewerAction::ScrollHalfUp,
        KeyCode::PageDown | KeyCode::Char('f') => ViewerAction::ScrollPageDown,
        KeyCode::PageUp | KeyCode::Char('b') => ViewerAction::ScrollPageUp,
        KeyCode::Char('g') | KeyCode::Home => ViewerAction::ScrollTop,
        KeyCode::Char('G') | KeyCode::End => ViewerAction::ScrollBottom,
        KeyCode::Char('n') | KeyCode::Tab => ViewerAction::NextFile,
        KeyCode::Char('p') | KeyCode::BackTab => ViewerAction::PrevFile,
        KeyCode::Enter | KeyCode::Char(' ') => ViewerAction::ToggleFile,
        KeyCode::Char('c') => ViewerAction::CollapseAll,
        KeyCode::Char('e') => ViewerAction::ExpandAll,
        _ => return None,
    };

    Some(Command::Viewer(action))
}
