use tracing::debug;

use super::model::CounterModel;
use super::view::CounterView;

/// Receiver of the two user intents a counter view can emit.
pub trait CounterPresenter {
    fn on_increment(&mut self);
    fn on_reset(&mut self);
}

/// Mediates between a view's intents and the model.
///
/// Each intent mutates the model and then pushes the post-mutation count to
/// the view exactly once.
pub struct Presenter<M, V> {
    model: M,
    view: V,
}

impl<M: CounterModel, V: CounterView> Presenter<M, V> {
    /// Takes ownership of both collaborators and pushes the initial count so
    /// the view is correct before any interaction.
    pub fn new(model: M, view: V) -> Self {
        let mut presenter = Self { model, view };
        presenter.update_view();
        presenter
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    fn update_view(&mut self) {
        let count = self.model.count();
        debug!(target: "counter::presenter", count, "pushing count to view");
        self.view.update_counter(count);
    }
}

impl<M: CounterModel, V: CounterView> CounterPresenter for Presenter<M, V> {
    fn on_increment(&mut self) {
        debug!(target: "counter::presenter", "increment requested");
        self.model.increment();
        self.update_view();
    }

    fn on_reset(&mut self) {
        debug!(target: "counter::presenter", "reset requested");
        self.model.reset();
        self.update_view();
    }
}
