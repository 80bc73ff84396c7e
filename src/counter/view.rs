use thiserror::Error;
use tracing::debug;

use super::presenter::CounterPresenter;

/// Rendering half of a counter view.
pub trait CounterView {
    /// Displays `value` as the current count. Repeating a value only
    /// re-renders it.
    fn update_counter(&mut self, value: u64);
}

/// Misuse of a view's wiring.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ViewError {
    #[error("presenter must be set before the view is used")]
    PresenterMissing,

    #[error("presenter has already been set for this view")]
    PresenterAlreadySet,
}

/// Intent-forwarding half of a counter view.
///
/// Starts unwired. `set_presenter` wires it exactly once; until then every
/// intent and every `show` entry point fails with
/// [`ViewError::PresenterMissing`].
#[derive(Default)]
pub struct PresenterSlot {
    presenter: Option<Box<dyn CounterPresenter>>,
}

impl PresenterSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_presenter(&mut self, presenter: Box<dyn CounterPresenter>) -> Result<(), ViewError> {
        if self.presenter.is_some() {
            return Err(ViewError::PresenterAlreadySet);
        }
        self.presenter = Some(presenter);
        Ok(())
    }

    pub fn is_wired(&self) -> bool {
        self.presenter.is_some()
    }

    pub fn ensure_wired(&self) -> Result<(), ViewError> {
        if self.is_wired() {
            Ok(())
        } else {
            Err(ViewError::PresenterMissing)
        }
    }

    pub fn increment_requested(&mut self) -> Result<(), ViewError> {
        debug!(target: "counter::view", "increment clicked");
        self.presenter_mut()?.on_increment();
        Ok(())
    }

    pub fn reset_requested(&mut self) -> Result<(), ViewError> {
        debug!(target: "counter::view", "reset clicked");
        self.presenter_mut()?.on_reset();
        Ok(())
    }

    fn presenter_mut(&mut self) -> Result<&mut (dyn CounterPresenter + 'static), ViewError> {
        self.presenter
            .as_deref_mut()
            .ok_or(ViewError::PresenterMissing)
    }
}

impl std::fmt::Debug for PresenterSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PresenterSlot")
            .field("wired", &self.is_wired())
            .finish()
    }
}
