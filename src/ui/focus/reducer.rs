use crate::ui::focus::intent::FocusIntent;
use crate::ui::focus::state::{Button, FocusState};
use crate::ui::mvi::Reducer;

pub struct FocusReducer;

impl Reducer for FocusReducer {
    type State = FocusState;
    type Intent = FocusIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        let count = Button::ALL.len();
        let index = Button::ALL
            .iter()
            .position(|b| *b == state.focused)
            .unwrap_or(0);
        let focused = match intent {
            FocusIntent::Next => Button::ALL[(index + 1) % count],
            // Wraps from the first button to the last
            FocusIntent::Previous => Button::ALL[(index + count - 1) % count],
            FocusIntent::Set(button) => button,
        };
        FocusState { focused }
    }
}
