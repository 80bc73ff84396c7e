use crate::ui::focus::{Button, FocusIntent};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

/// What the screen should do in response to one terminal event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenAction {
    None,
    Quit,
    Press(Button),
    PressFocused,
    Focus(FocusIntent),
    Click { column: u16, row: u16 },
}

pub fn key_action(key: KeyEvent) -> ScreenAction {
    if key.kind != KeyEventKind::Press {
        return ScreenAction::None;
    }

    if is_ctrl_char(key, 'c') {
        return ScreenAction::Quit;
    }

    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => ScreenAction::Quit,
        KeyCode::Enter | KeyCode::Char(' ') => ScreenAction::PressFocused,
        KeyCode::Char('+') | KeyCode::Char('i') | KeyCode::Char('I') => {
            ScreenAction::Press(Button::Increment)
        }
        KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::Char('0') => {
            ScreenAction::Press(Button::Reset)
        }
        KeyCode::BackTab => ScreenAction::Focus(FocusIntent::Previous),
        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => {
            ScreenAction::Focus(FocusIntent::Previous)
        }
        KeyCode::Tab | KeyCode::Right | KeyCode::Down => ScreenAction::Focus(FocusIntent::Next),
        KeyCode::Left | KeyCode::Up => ScreenAction::Focus(FocusIntent::Previous),
        _ => ScreenAction::None,
    }
}

pub fn mouse_action(mouse: MouseEvent) -> ScreenAction {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => ScreenAction::Click {
            column: mouse.column,
            row: mouse.row,
        },
        _ => ScreenAction::None,
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
