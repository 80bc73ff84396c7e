use std::cell::Cell;
use std::rc::Rc;

use ratatui::layout::Rect;
use tracing::debug;

use crate::config::UiConfig;
use crate::counter::{CounterPresenter, CounterView, PresenterSlot, ViewError};
use crate::ui::focus::{Button, FocusIntent, FocusReducer, FocusState};
use crate::ui::input::ScreenAction;
use crate::ui::layout::{body_rect, counter_layout, CounterLayout};
use crate::ui::mvi::Reducer;

/// Rendering half of the terminal view.
///
/// The presenter owns one handle and pushes into it; the screen keeps a clone
/// and reads the value back when drawing. Both live on the UI thread.
#[derive(Debug, Clone, Default)]
pub struct CounterLabel {
    value: Rc<Cell<u64>>,
}

impl CounterLabel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> u64 {
        self.value.get()
    }
}

impl CounterView for CounterLabel {
    fn update_counter(&mut self, value: u64) {
        debug!(target: "counter::view", value, "updating counter label");
        self.value.set(value);
    }
}

/// Terminal counter screen: a label plus Increment and Reset buttons.
pub struct CounterScreen {
    slot: PresenterSlot,
    label: CounterLabel,
    focus: FocusState,
    config: UiConfig,
    area: Rect,
    should_quit: bool,
}

impl CounterScreen {
    pub fn new(label: CounterLabel, config: UiConfig) -> Self {
        Self {
            slot: PresenterSlot::new(),
            label,
            focus: FocusState::default(),
            config,
            area: Rect::default(),
            should_quit: false,
        }
    }

    pub fn set_presenter(&mut self, presenter: Box<dyn CounterPresenter>) -> Result<(), ViewError> {
        self.slot.set_presenter(presenter)
    }

    /// Takes over the terminal until the user quits.
    pub fn show(self) -> anyhow::Result<()> {
        self.slot.ensure_wired()?;
        crate::ui::runtime::run(self)
    }

    pub fn apply(&mut self, action: ScreenAction) -> Result<(), ViewError> {
        match action {
            ScreenAction::None => {}
            ScreenAction::Quit => self.request_quit(),
            ScreenAction::Press(button) => self.press(button)?,
            ScreenAction::PressFocused => self.press(self.focus.focused)?,
            ScreenAction::Focus(intent) => self.dispatch_focus(intent),
            ScreenAction::Click { column, row } => {
                if let Some(button) = crate::ui::layout::button_at(&self.layout(), column, row) {
                    self.dispatch_focus(FocusIntent::Set(button));
                    self.press(button)?;
                }
            }
        }
        Ok(())
    }

    pub fn press(&mut self, button: Button) -> Result<(), ViewError> {
        match button {
            Button::Increment => self.slot.increment_requested(),
            Button::Reset => self.slot.reset_requested(),
        }
    }

    pub fn dispatch_focus(&mut self, intent: FocusIntent) {
        let state = std::mem::take(&mut self.focus);
        self.focus = FocusReducer::reduce(state, intent);
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.area = Rect::new(0, 0, cols, rows);
    }

    pub fn layout(&self) -> CounterLayout {
        counter_layout(body_rect(self.area))
    }

    pub fn label_text(&self) -> String {
        self.config.label_text(self.label.value())
    }

    pub fn count(&self) -> u64 {
        self.label.value()
    }

    pub fn focus(&self) -> &FocusState {
        &self.focus
    }

    pub fn config(&self) -> &UiConfig {
        &self.config
    }

    pub fn is_wired(&self) -> bool {
        self.slot.is_wired()
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}
