use crate::ui::mvi::UiState;

/// The two buttons of the counter screen, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Increment,
    Reset,
}

impl Button {
    pub const ALL: [Button; 2] = [Button::Increment, Button::Reset];

    pub fn caption(self) -> &'static str {
        match self {
            Button::Increment => "Increment",
            Button::Reset => "Reset",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FocusState {
    pub focused: Button,
}

impl Default for FocusState {
    fn default() -> Self {
        Self {
            focused: Button::Increment,
        }
    }
}

impl UiState for FocusState {}

impl FocusState {
    pub fn is_focused(&self, button: Button) -> bool {
        self.focused == button
    }
}
