use crate::ui::focus::state::Button;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusIntent {
    Next,
    Previous,
    /// Mouse click lands focus on the clicked button.
    Set(Button),
}

impl Intent for FocusIntent {}
