use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};

/// User actions from keyboard events
#[derive(Debug, PartialEq)]
pub enum Action {
    Quit,
    Escape,
    NextField,
    PrevField,
    SelectPrev,
    SelectNext,
    Convert,
    ToggleHistory,
    ClearHistory,
    ExportHistory,
    CopyHistory,
    HistoryScrollUp,
    HistoryScrollDown,
    InputChar(char),
    DeleteChar,
    None,
}

/// Poll for keyboard events and convert to actions
pub fn poll_event(timeout: Duration) -> anyhow::Result<Action> {
    if event::poll(timeout)?
        && let Event::Key(key) = event::read()?
    {
        return Ok(key_to_action(key));
    }
    Ok(Action::None)
}

fn key_to_action(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        // Quit / dismiss
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,
        (KeyCode::Esc, _) => Action::Escape,

        // Field focus
        (KeyCode::Tab, _) => Action::NextField,
        (KeyCode::BackTab, _) => Action::PrevField,

        // Selector movement
        (KeyCode::Up, _) => Action::SelectPrev,
        (KeyCode::Down, _) => Action::SelectNext,
        (KeyCode::Left, _) => Action::SelectPrev,
        (KeyCode::Right, _) => Action::SelectNext,

        // History panel
        (KeyCode::Char('h'), KeyModifiers::CONTROL) => Action::ToggleHistory,
        (KeyCode::Char('x'), KeyModifiers::CONTROL) => Action::ClearHistory,
        (KeyCode::Char('s'), KeyModifiers::CONTROL) => Action::ExportHistory,
        (KeyCode::Char('y'), KeyModifiers::CONTROL) => Action::CopyHistory,
        (KeyCode::PageUp, _) => Action::HistoryScrollUp,
        (KeyCode::PageDown, _) => Action::HistoryScrollDown,

        // Convert
        (KeyCode::Enter, _) => Action::Convert,

        // Value input
        (KeyCode::Char(c), KeyModifiers::NONE) | (KeyCode::Char(c), KeyModifiers::SHIFT) => {
            Action::InputChar(c)
        }
        (KeyCode::Backspace, _) => Action::DeleteChar,

        _ => Action::None,
    }
}
